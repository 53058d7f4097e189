//! Subnet and host masks derived from a bit count.

use crate::error::{Result, SubnetError};

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// The top `prefix_len` bits are set. `/0` and `/32` are handled without
/// shifting by 32.
///
/// # Examples
/// ```
/// use cidr_subnetting::subnet::subnet_mask;
/// assert_eq!(subnet_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn subnet_mask(prefix_len: u8) -> Result<u32> {
    match prefix_len {
        0 => Ok(0),
        MAX_LENGTH => Ok(u32::MAX),
        len if len < MAX_LENGTH => Ok(u32::MAX << (MAX_LENGTH - len)),
        len => Err(SubnetError::out_of_range(
            "prefix length",
            len,
            0,
            MAX_LENGTH as u64,
        )),
    }
}

/// Host mask with the low `host_bits` bits set, i.e. `2^host_bits - 1`.
pub fn host_mask(host_bits: u8) -> Result<u32> {
    if host_bits > MAX_LENGTH {
        return Err(SubnetError::out_of_range(
            "host bits",
            host_bits,
            0,
            MAX_LENGTH as u64,
        ));
    }
    Ok(!subnet_mask(MAX_LENGTH - host_bits)?)
}
