//! Network / broadcast address and address count arithmetic.

use super::mask::MAX_LENGTH;
use crate::error::{Result, SubnetError};

/// Number of addresses in a 32-bit address space, `2^32`.
pub const ADDRESS_SPACE_SIZE: u64 = 1 << MAX_LENGTH;

/// Get the network address for any address inside the subnet.
///
/// The address does not need to be the network address itself; masking
/// normalizes it down. Idempotent for a fixed mask.
pub fn network_address(addr: u32, subnet_mask: u32) -> u32 {
    addr & subnet_mask
}

/// Calculate the broadcast address from a network address and host mask.
pub fn broadcast_address(network: u32, host_mask: u32) -> u32 {
    network | host_mask
}

/// Calculate the broadcast address as `network + total_addresses - 1`.
///
/// `total_addresses` must be in `[1, 2^32]` and the result must stay inside
/// the address space. For an aligned network and `total_addresses ==
/// 2^host_bits` this agrees with [`broadcast_address`].
pub fn broadcast_address_from_count(network: u32, total_addresses: u64) -> Result<u32> {
    if total_addresses == 0 || total_addresses > ADDRESS_SPACE_SIZE {
        return Err(SubnetError::out_of_range(
            "total addresses",
            total_addresses,
            1,
            ADDRESS_SPACE_SIZE,
        ));
    }
    let broadcast = network as u64 + total_addresses - 1;
    u32::try_from(broadcast).map_err(|_| {
        SubnetError::out_of_range("broadcast address", broadcast, 0, u32::MAX as u64)
    })
}

/// Total number of addresses in a range with this prefix, `2^(32 - prefix_len)`.
///
/// Returned as u64 so `/0` (2^32 addresses) is exact.
pub fn total_address_count(prefix_len: u8) -> Result<u64> {
    if prefix_len > MAX_LENGTH {
        return Err(SubnetError::out_of_range(
            "prefix length",
            prefix_len,
            0,
            MAX_LENGTH as u64,
        ));
    }
    Ok(1u64 << (MAX_LENGTH - prefix_len))
}
