//! Command splitting and dispatch.
//!
//! Commands accept positional or named (`-Name value`) parameters, so both
//! `subnet-mask 24` and `Get-SubnetMaskUInt -SubnetSuffixNum 24` work.

use crate::config::OutputFormat;
use crate::error::SubnetError;
use crate::models::{ip_to_uint, uint_to_ip, Cidr};
use crate::output::{format_error, render, CmdOutput};
use crate::subnet::{
    address_in_subnet, broadcast_address, broadcast_address_from_count, host_mask,
    network_address, subnet_mask, subnets_overlap, total_address_count, ADDRESS_SPACE_SIZE,
    MAX_LENGTH,
};
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::VecDeque;
use std::error::Error;
use std::io::{BufRead, Write};

pub const USAGE: &str = "\
commands (positional or -Name value parameters):
  total-count        <SubnetSuffixNum>
  network-address    <IpPrefixUInt> <SubnetMaskUInt>
  broadcast-address  <NetworkIpUInt> <HostMaskUInt> | -TotalAddresses <n>
  subnet-mask        <SubnetSuffixNum>
  host-mask          <HostBits>
  compare-subnets    <CIDRAddressA> <CIDRAddressB>
  ip-in-subnet       <IPStr> <CIDRAddress>
  ip-to-uint         <IPStr>
  uint-to-ip         <IpUInt>
  describe           <CIDRAddress>
  help";

lazy_static! {
    static ref RE: Regex = Regex::new(r#"'([^']*)'|"([^"]*)"|(\S+)"#).expect("Invalid Regex?");
}

/// Split a command line on whitespace, keeping 'quoted sub' strings together.
pub fn split_and_strip(input: &str) -> Vec<&str> {
    RE.captures_iter(input)
        .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)).or_else(|| caps.get(3)))
        .map(|m| m.as_str())
        .collect()
}

/// Recognise a leading `--json` / `--text` flag.
pub fn output_flag(arg: &str) -> Option<OutputFormat> {
    match arg {
        "--json" => Some(OutputFormat::Json),
        "--text" => Some(OutputFormat::Text),
        _ => None,
    }
}

/// Parameters of one command, split into named and positional values.
struct Args<'a> {
    named: Vec<(&'a str, &'a str)>,
    positional: VecDeque<&'a str>,
}

impl<'a> Args<'a> {
    fn parse(tokens: &[&'a str]) -> Result<Args<'a>, Box<dyn Error>> {
        let mut named = Vec::new();
        let mut positional = VecDeque::new();
        let mut iter = tokens.iter();
        while let Some(&token) = iter.next() {
            match param_name(token) {
                Some(name) => {
                    let value = iter
                        .next()
                        .ok_or_else(|| format!("missing value for parameter -{name}"))?;
                    named.push((name, *value));
                }
                None => positional.push_back(token),
            }
        }
        Ok(Args { named, positional })
    }

    /// Take a parameter by any of `names`, else the next positional value.
    fn take(&mut self, names: &[&str]) -> Option<&'a str> {
        self.take_named(names).or_else(|| self.positional.pop_front())
    }

    fn take_named(&mut self, names: &[&str]) -> Option<&'a str> {
        let pos = self
            .named
            .iter()
            .position(|(name, _)| names.iter().any(|n| n.eq_ignore_ascii_case(name)))?;
        Some(self.named.remove(pos).1)
    }

    fn require(&mut self, names: &[&str]) -> Result<&'a str, Box<dyn Error>> {
        self.take(names)
            .ok_or_else(|| format!("missing argument -{}", names[0]).into())
    }

    fn finish(self) -> Result<(), Box<dyn Error>> {
        if let Some((name, value)) = self.named.first() {
            return Err(format!("unexpected parameter -{name} {value}").into());
        }
        if let Some(value) = self.positional.front() {
            return Err(format!("unexpected argument '{value}'").into());
        }
        Ok(())
    }
}

/// `-Name` is a parameter name, `-1` is a (negative) value.
fn param_name(token: &str) -> Option<&str> {
    let name = token.strip_prefix('-')?;
    match name.chars().next() {
        Some(c) if c.is_ascii_alphabetic() => Some(name),
        _ => None,
    }
}

/// Parse a decimal integer in `[0, max]`.
fn parse_uint(value: &str, what: &'static str, max: u64) -> Result<u64, SubnetError> {
    let digits = value.strip_prefix('-').unwrap_or(value);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(SubnetError::InvalidFormat(format!(
            "{what} '{value}' is not a decimal number"
        )));
    }
    match value.parse::<u64>() {
        Ok(n) if n <= max => Ok(n),
        _ => Err(SubnetError::OutOfRange {
            what,
            value: value.to_string(),
            min: 0,
            max,
        }),
    }
}

fn parse_bits(value: &str, what: &'static str) -> Result<u8, SubnetError> {
    Ok(parse_uint(value, what, MAX_LENGTH as u64)? as u8)
}

/// An address given either as an integer or dotted-decimal.
fn parse_addr(value: &str, what: &'static str) -> Result<u32, SubnetError> {
    if value.contains('.') {
        ip_to_uint(value)
    } else {
        Ok(parse_uint(value, what, u32::MAX as u64)? as u32)
    }
}

/// Run one command given as tokens, e.g. `["subnet-mask", "24"]`.
pub fn run(tokens: &[&str]) -> Result<CmdOutput, Box<dyn Error>> {
    let (cmd, rest) = tokens.split_first().ok_or("no command given")?;
    log::debug!("run({cmd}) args={rest:?}");
    let mut args = Args::parse(rest)?;

    let output = match cmd.to_ascii_lowercase().as_str() {
        "total-count" | "get-totalcountofipaddress" => {
            let prefix = parse_bits(
                args.require(&["SubnetSuffixNum", "PrefixLength"])?,
                "prefix length",
            )?;
            CmdOutput::UInt(total_address_count(prefix)?)
        }
        "network-address" | "get-networkipaddressuint" | "get-networkipaddress" => {
            let addr = parse_addr(
                args.require(&["IpPrefixUInt", "IpPrefixNum", "IpAddress"])?,
                "address",
            )?;
            let mask = parse_addr(args.require(&["SubnetMaskUInt", "SubnetMask"])?, "subnet mask")?;
            CmdOutput::UInt(network_address(addr, mask) as u64)
        }
        "broadcast-address" | "get-broadcastipaddressuint" | "get-broadcastipaddress" => {
            let network = parse_addr(
                args.require(&["NetworkIpUInt", "NetworkIp"])?,
                "network address",
            )?;
            let broadcast = match args.take_named(&["TotalAddresses"]) {
                Some(count) => broadcast_address_from_count(
                    network,
                    parse_uint(count, "total addresses", ADDRESS_SPACE_SIZE)?,
                )?,
                None => {
                    let mask =
                        parse_addr(args.require(&["HostMaskUInt", "HostMask"])?, "host mask")?;
                    broadcast_address(network, mask)
                }
            };
            CmdOutput::UInt(broadcast as u64)
        }
        "subnet-mask" | "get-subnetmaskuint" => {
            let prefix = parse_bits(
                args.require(&["SubnetSuffixNum", "SubnetSuffixInt", "PrefixLength"])?,
                "prefix length",
            )?;
            CmdOutput::UInt(subnet_mask(prefix)? as u64)
        }
        "host-mask" | "get-hostmaskuint" => {
            let bits = parse_bits(args.require(&["HostBits"])?, "host bits")?;
            CmdOutput::UInt(host_mask(bits)? as u64)
        }
        "compare-subnets" => {
            let a = args.require(&["CIDRAddressA"])?;
            let b = args.require(&["CIDRAddressB"])?;
            CmdOutput::Bool(subnets_overlap(a, b)?)
        }
        "ip-in-subnet" | "test-ipinsubnet" => {
            let ip = args.require(&["IPStr", "IpAddress"])?;
            let cidr = args.require(&["CIDRAddress", "Cidr"])?;
            CmdOutput::Bool(address_in_subnet(ip, cidr)?)
        }
        "ip-to-uint" => CmdOutput::UInt(ip_to_uint(args.require(&["IPStr", "IpAddress"])?)? as u64),
        "uint-to-ip" => {
            let value = parse_uint(args.require(&["IpUInt"])?, "address", u32::MAX as u64)?;
            CmdOutput::Text(uint_to_ip(value as u32))
        }
        "describe" => {
            let cidr: Cidr = args.require(&["CIDRAddress", "Cidr"])?.parse()?;
            CmdOutput::Summary(cidr.summary())
        }
        "help" | "--help" | "-h" => CmdOutput::Text(USAGE.to_string()),
        other => return Err(format!("unknown command '{other}'\n{USAGE}").into()),
    };
    args.finish()?;

    log::trace!("{cmd} -> {output:?}");
    Ok(output)
}

/// Run one command line, returning `None` for blank lines and `#` comments.
pub fn run_line(line: &str) -> Result<Option<CmdOutput>, Box<dyn Error>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    let tokens = split_and_strip(line);
    log::trace!("split tokens={tokens:?}");
    run(&tokens).map(Some)
}

/// Run a script of commands, one per line.
///
/// Results go to `out`, failures to `err`; a failed line does not stop the
/// script. Returns the number of failed lines.
/// A line that is not valid UTF-8 counts as a failed line.
pub fn run_script<R, O, E>(
    mut input: R,
    out: &mut O,
    err: &mut E,
    format: OutputFormat,
) -> Result<usize, Box<dyn Error>>
where
    R: BufRead,
    O: Write,
    E: Write,
{
    let mut failures = 0;
    let mut buf = Vec::new();
    let mut line_no = 0;
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_no += 1;
        let line = match std::str::from_utf8(&buf) {
            Ok(line) => line.trim(),
            Err(e) => {
                failures += 1;
                log::warn!("line {line_no}: not valid UTF-8: {e}");
                writeln!(err, "{}", format_error(&format!("line {line_no}"), &e))?;
                continue;
            }
        };
        match run_line(line) {
            Ok(Some(output)) => writeln!(out, "{}", render(&output, format))?,
            Ok(None) => {}
            Err(e) => {
                failures += 1;
                log::warn!("line {line_no}: failed '{line}': {e}");
                writeln!(err, "{}", format_error(line, &e))?;
            }
        }
    }
    Ok(failures)
}
