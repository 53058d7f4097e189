//! CIDR range value type.
//!
//! Provides [`Cidr`] for an aligned `network/prefix` pair, with the derived
//! masks, bounds and set queries.

use super::address::{ip_to_uint, uint_to_ip};
use crate::error::{Result, SubnetError};
use crate::subnet::{broadcast_address, network_address, subnet_mask, MAX_LENGTH};
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

/// An IPv4 CIDR range such as `10.28.0.0/16`.
///
/// The network address is always mask-aligned; construction rejects an
/// address with host bits set instead of re-aligning it.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Cidr {
    network: u32,
    prefix: u8,
}

impl Cidr {
    /// Create a [`Cidr`] from an integer network address and prefix length.
    pub fn new(network: u32, prefix: u8) -> Result<Cidr> {
        let mask = subnet_mask(prefix)?;
        if network_address(network, mask) != network {
            return Err(SubnetError::HostBitsSet {
                cidr: format!("{}/{}", uint_to_ip(network), prefix),
            });
        }
        Ok(Cidr { network, prefix })
    }

    /// Lowest address in the range.
    pub fn network(&self) -> u32 {
        self.network
    }

    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    pub fn subnet_mask(&self) -> u32 {
        // prefix <= 32 holds from construction; only /0 overflows the shift
        u32::MAX
            .checked_shl((MAX_LENGTH - self.prefix) as u32)
            .unwrap_or(0)
    }

    pub fn host_mask(&self) -> u32 {
        !self.subnet_mask()
    }

    /// Highest address in the range.
    pub fn broadcast(&self) -> u32 {
        broadcast_address(self.network, self.host_mask())
    }

    pub fn address_count(&self) -> u64 {
        1u64 << (MAX_LENGTH - self.prefix)
    }

    /// True if the two ranges share at least one address.
    pub fn overlaps(&self, other: &Cidr) -> bool {
        self.network.max(other.network) <= self.broadcast().min(other.broadcast())
    }

    /// True if `addr` lies between the network and broadcast addresses.
    pub fn contains(&self, addr: u32) -> bool {
        network_address(addr, self.subnet_mask()) == self.network
    }
}

impl FromStr for Cidr {
    type Err = SubnetError;

    /// Parse `"A.B.C.D/n"`; `n` must be decimal digits only.
    fn from_str(addr_cidr: &str) -> Result<Cidr> {
        let addr_cidr = addr_cidr.trim();
        let (addr, prefix) = addr_cidr.split_once('/').ok_or_else(|| {
            SubnetError::InvalidFormat(format!("missing '/' in CIDR '{addr_cidr}'"))
        })?;
        if prefix.is_empty() || !prefix.bytes().all(|b| b.is_ascii_digit()) {
            return Err(SubnetError::InvalidFormat(format!(
                "prefix length '{prefix}' in '{addr_cidr}' is not a decimal number"
            )));
        }
        let network = ip_to_uint(addr)?;
        let prefix = match prefix.parse::<u64>() {
            Ok(len) if len <= MAX_LENGTH as u64 => len as u8,
            _ => {
                return Err(SubnetError::out_of_range(
                    "prefix length",
                    prefix,
                    0,
                    MAX_LENGTH as u64,
                ))
            }
        };
        Cidr::new(network, prefix)
    }
}

impl std::fmt::Display for Cidr {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", uint_to_ip(self.network), self.prefix)
    }
}

impl Serialize for Cidr {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Cidr {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Cidr, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Cidr::from_str(&s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cidr(s: &str) -> Cidr {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_and_display() {
        let c = cidr("10.28.0.128/25");
        assert_eq!(c.network(), 169607296);
        assert_eq!(c.prefix(), 25);
        assert_eq!(c.to_string(), "10.28.0.128/25");
        assert_eq!(cidr(" 0.0.0.0/0 ").to_string(), "0.0.0.0/0");
        assert_eq!(cidr("192.168.1.0/024").prefix(), 24);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            Cidr::from_str("10.28.0.0"),
            Err(SubnetError::InvalidFormat(_))
        ));
        assert!(matches!(
            Cidr::from_str("10.28.0.0/"),
            Err(SubnetError::InvalidFormat(_))
        ));
        assert!(matches!(
            Cidr::from_str("10.28.0.0/x"),
            Err(SubnetError::InvalidFormat(_))
        ));
        assert!(matches!(
            Cidr::from_str("10.28.0.0/-1"),
            Err(SubnetError::InvalidFormat(_))
        ));
        assert!(matches!(
            Cidr::from_str("10.28.0.0/16/2"),
            Err(SubnetError::InvalidFormat(_))
        ));
        assert!(matches!(
            Cidr::from_str("10.28.0/16"),
            Err(SubnetError::InvalidFormat(_))
        ));
        assert!(matches!(
            Cidr::from_str("10.28.0.0/33"),
            Err(SubnetError::OutOfRange { .. })
        ));
        assert!(matches!(
            Cidr::from_str("10.28.0.0/99999999999999999999"),
            Err(SubnetError::OutOfRange { .. })
        ));
        assert!(matches!(
            Cidr::from_str("10.28.0.256/24"),
            Err(SubnetError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_host_bits_rejected() {
        assert_eq!(
            Cidr::from_str("10.28.0.1/16").unwrap_err(),
            SubnetError::HostBitsSet {
                cidr: "10.28.0.1/16".to_string()
            }
        );
        assert!(Cidr::new(1, 0).is_err());
        assert!(Cidr::new(1, 32).is_ok());
    }

    #[test]
    fn test_derived_attributes() {
        let c = cidr("192.168.1.0/24");
        assert_eq!(c.subnet_mask(), 4294967040);
        assert_eq!(c.host_mask(), 255);
        assert_eq!(c.broadcast(), 3232236031);
        assert_eq!(c.address_count(), 256);

        let all = cidr("0.0.0.0/0");
        assert_eq!(all.subnet_mask(), 0);
        assert_eq!(all.host_mask(), u32::MAX);
        assert_eq!(all.broadcast(), u32::MAX);
        assert_eq!(all.address_count(), 1 << 32);

        let single = cidr("255.255.255.255/32");
        assert_eq!(single.broadcast(), u32::MAX);
        assert_eq!(single.address_count(), 1);
    }

    #[test]
    fn test_derived_attributes_match_free_functions() {
        use crate::subnet::{host_mask, total_address_count};

        for prefix in 0..=MAX_LENGTH {
            let c = Cidr::new(0, prefix).unwrap();
            assert_eq!(c.subnet_mask(), subnet_mask(prefix).unwrap(), "/{prefix}");
            assert_eq!(c.host_mask(), host_mask(MAX_LENGTH - prefix).unwrap(), "/{prefix}");
            assert_eq!(c.address_count(), total_address_count(prefix).unwrap(), "/{prefix}");
            assert_eq!(c.broadcast() as u64, c.address_count() - 1, "/{prefix}");
        }
    }

    #[test]
    fn test_overlaps() {
        let space = cidr("10.28.0.0/16");
        let public = cidr("10.28.0.0/25");
        let private = cidr("10.28.0.128/25");
        let link = cidr("10.28.1.0/27");

        assert!(space.overlaps(&public));
        assert!(public.overlaps(&space));
        assert!(space.overlaps(&private));
        assert!(space.overlaps(&link));
        assert!(space.overlaps(&space));
        assert!(!public.overlaps(&private));
        assert!(!private.overlaps(&public));
        assert!(!public.overlaps(&link));
    }

    #[test]
    fn test_contains() {
        let private = cidr("10.28.0.128/25");
        assert!(private.contains(169607297)); // 10.28.0.129
        assert!(private.contains(private.broadcast()));
        assert!(!private.contains(169607295)); // 10.28.0.127

        let single = cidr("10.28.1.5/32");
        assert!(single.contains(169607429));
        assert!(!single.contains(169607428));

        let all = cidr("0.0.0.0/0");
        assert!(all.contains(0));
        assert!(all.contains(u32::MAX));
    }

    #[test]
    fn test_ordering() {
        let big = cidr("10.0.0.0/8");
        let small = cidr("10.0.10.0/24");
        let first = cidr("10.0.0.0/16");
        assert!(big < first);
        assert!(first < small);
        let mut v = vec![small, first, big];
        v.sort();
        assert_eq!(v, vec![big, first, small]);
    }

    #[test]
    fn test_serde() {
        let c = cidr("10.28.1.0/27");
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, r#""10.28.1.0/27""#);
        let back: Cidr = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);

        let err = serde_json::from_str::<Cidr>(r#""10.28.1.1/27""#).unwrap_err();
        assert!(err.to_string().contains("host bits set"));
    }
}
