//! Dotted-decimal to 32-bit integer conversion.

use crate::error::{Result, SubnetError};
use std::net::Ipv4Addr;

/// Largest value an octet can hold.
const MAX_OCTET: u64 = 255;

/// Parse `"A.B.C.D"` into `A*2^24 + B*2^16 + C*2^8 + D`.
///
/// Octets are plain decimal digits without leading zeros. A missing,
/// empty or non-numeric segment is [`SubnetError::InvalidFormat`]; an octet
/// above 255 is [`SubnetError::OutOfRange`].
///
/// # Examples
/// ```
/// use cidr_subnetting::models::ip_to_uint;
/// assert_eq!(ip_to_uint("192.168.1.0").unwrap(), 3232235776);
/// ```
pub fn ip_to_uint(ip_str: &str) -> Result<u32> {
    let ip_str = ip_str.trim();
    let parts: Vec<&str> = ip_str.split('.').collect();
    if parts.len() != 4 {
        return Err(SubnetError::InvalidFormat(format!(
            "expected 4 dot-separated octets in '{ip_str}', found {}",
            parts.len()
        )));
    }

    let mut value: u32 = 0;
    for part in parts {
        value = (value << 8) | parse_octet(part, ip_str)?;
    }
    Ok(value)
}

/// Format a 32-bit integer as `"A.B.C.D"`. Every `u32` is a valid address.
pub fn uint_to_ip(value: u32) -> String {
    Ipv4Addr::from(value).to_string()
}

fn parse_octet(part: &str, ip_str: &str) -> Result<u32> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(SubnetError::InvalidFormat(format!(
            "octet '{part}' in '{ip_str}' is not a decimal number"
        )));
    }
    if part.len() > 1 && part.starts_with('0') {
        return Err(SubnetError::InvalidFormat(format!(
            "octet '{part}' in '{ip_str}' has a leading zero"
        )));
    }
    // All digits, so a parse failure can only be overflow.
    match part.parse::<u64>() {
        Ok(octet) if octet <= MAX_OCTET => Ok(octet as u32),
        _ => Err(SubnetError::out_of_range("octet", part, 0, MAX_OCTET)),
    }
}
