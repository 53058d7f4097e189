//! Overlap and membership tests on CIDR strings.

use crate::error::Result;
use crate::models::{ip_to_uint, Cidr};

/// Check whether two CIDR ranges such as `"10.28.0.0/16"` and
/// `"10.28.0.0/25"` share any address.
///
/// Symmetric, and a range always overlaps itself.
///
/// # Examples
/// ```
/// use cidr_subnetting::subnet::subnets_overlap;
/// assert!(subnets_overlap("10.28.0.0/16", "10.28.0.0/25").unwrap());
/// assert!(!subnets_overlap("10.28.0.0/25", "10.28.0.128/25").unwrap());
/// ```
pub fn subnets_overlap(cidr_a: &str, cidr_b: &str) -> Result<bool> {
    let a: Cidr = cidr_a.parse()?;
    let b: Cidr = cidr_b.parse()?;
    Ok(a.overlaps(&b))
}

/// Check whether a dotted-decimal address lies inside a CIDR range.
pub fn address_in_subnet(address: &str, cidr: &str) -> Result<bool> {
    let addr = ip_to_uint(address)?;
    let range: Cidr = cidr.parse()?;
    Ok(range.contains(addr))
}
