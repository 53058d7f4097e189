//! All derived attributes of a range in one serializable record.

use crate::models::{uint_to_ip, Cidr};
use serde::Serialize;

/// Summary of a [`Cidr`], as printed by the `describe` command.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct CidrSummary {
    pub cidr: Cidr,
    pub prefix_length: u8,
    /// Network address, dotted-decimal.
    pub network: String,
    pub network_uint: u32,
    /// Broadcast address, dotted-decimal.
    pub broadcast: String,
    pub broadcast_uint: u32,
    pub subnet_mask: String,
    pub subnet_mask_uint: u32,
    pub host_mask: String,
    pub host_mask_uint: u32,
    pub total_addresses: u64,
}

impl From<&Cidr> for CidrSummary {
    fn from(cidr: &Cidr) -> Self {
        CidrSummary {
            cidr: *cidr,
            prefix_length: cidr.prefix(),
            network: uint_to_ip(cidr.network()),
            network_uint: cidr.network(),
            broadcast: uint_to_ip(cidr.broadcast()),
            broadcast_uint: cidr.broadcast(),
            subnet_mask: uint_to_ip(cidr.subnet_mask()),
            subnet_mask_uint: cidr.subnet_mask(),
            host_mask: uint_to_ip(cidr.host_mask()),
            host_mask_uint: cidr.host_mask(),
            total_addresses: cidr.address_count(),
        }
    }
}

impl Cidr {
    pub fn summary(&self) -> CidrSummary {
        CidrSummary::from(self)
    }
}

impl std::fmt::Display for CidrSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "cidr:            {}", self.cidr)?;
        writeln!(f, "prefix_length:   {}", self.prefix_length)?;
        writeln!(f, "network:         {} ({})", self.network, self.network_uint)?;
        writeln!(f, "broadcast:       {} ({})", self.broadcast, self.broadcast_uint)?;
        writeln!(f, "subnet_mask:     {} ({})", self.subnet_mask, self.subnet_mask_uint)?;
        writeln!(f, "host_mask:       {} ({})", self.host_mask, self.host_mask_uint)?;
        write!(f, "total_addresses: {}", self.total_addresses)
    }
}
