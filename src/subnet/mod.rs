//! Subnet arithmetic.
//!
//! Pure, stateless functions over 32-bit addresses:
//! - [`mask`] - Subnet and host masks from a bit count
//! - [`range`] - Network / broadcast addresses and address counts
//! - [`query`] - Overlap and membership tests
//! - [`summary`] - Every derived attribute of a range

mod mask;
mod query;
mod range;
mod summary;

// Re-export public functions
pub use mask::{host_mask, subnet_mask, MAX_LENGTH};
pub use query::{address_in_subnet, subnets_overlap};
pub use range::{
    broadcast_address, broadcast_address_from_count, network_address, total_address_count,
    ADDRESS_SPACE_SIZE,
};
pub use summary::CidrSummary;
