//! Value types for IPv4 subnet arithmetic.
//!
//! - [`address`] - Dotted-decimal to `u32` conversion
//! - [`Cidr`] - IPv4 range in CIDR notation

mod address;
mod cidr;

// Re-export public types
pub use address::{ip_to_uint, uint_to_ip};
pub use cidr::Cidr;
