use cidr_subnetting::cmd;
use cidr_subnetting::config::Config;
use cidr_subnetting::logging;
use cidr_subnetting::output::{format_error, render};
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let mut config = Config::from_env();
    if let Err(e) = logging::init(&config.log_config) {
        eprintln!("Error initializing log4rs: {e}");
    }
    config.log_warnings();
    log::info!("#Start main()");

    let mut args: Vec<String> = std::env::args().skip(1).collect();
    if let Some(format) = args.first().and_then(|a| cmd::output_flag(a)) {
        config.output = format;
        args.remove(0);
    }

    if args.is_empty() {
        // No command: read a script from stdin
        let stdin = io::stdin();
        match cmd::run_script(stdin.lock(), &mut io::stdout(), &mut io::stderr(), config.output) {
            Ok(0) => ExitCode::SUCCESS,
            Ok(failures) => {
                log::warn!("{failures} command(s) failed");
                ExitCode::FAILURE
            }
            Err(e) => {
                log::error!("ERR {e}");
                eprintln!("{}", format_error("<stdin>", &e));
                ExitCode::FAILURE
            }
        }
    } else {
        let tokens: Vec<&str> = args.iter().map(String::as_str).collect();
        match cmd::run(&tokens) {
            Ok(output) => {
                println!("{}", render(&output, config.output));
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("{}", format_error(&args.join(" "), &e));
                ExitCode::FAILURE
            }
        }
    }
}
