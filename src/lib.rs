//! IPv4 CIDR subnet arithmetic.
//!
//! Subnet masks, host masks, network and broadcast addresses, address
//! counts, overlap and membership, computed from integer or dotted-decimal
//! input. Everything in [`models`] and [`subnet`] is pure and stateless.
//!
//! ```
//! use cidr_subnetting::subnet::{address_in_subnet, subnet_mask, subnets_overlap};
//! assert_eq!(subnet_mask(24).unwrap(), 4294967040);
//! assert!(subnets_overlap("10.28.0.0/16", "10.28.0.0/25").unwrap());
//! assert!(address_in_subnet("10.28.0.129", "10.28.0.128/25").unwrap());
//! ```

pub mod cmd;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;
pub mod subnet;

pub use error::SubnetError;
pub use models::Cidr;
