//! IPv4 CIDR notation: `a.b.c.d/n` parsed into a 32-bit address and mask.

use std::fmt;
use std::net::Ipv4Addr;
use std::num::ParseIntError;
use std::str::FromStr;

use thiserror::Error;

const OCTETS: usize = 4;
const MAX_PREFIX: i64 = 32;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CidrError {
    #[error("missing '/' prefix length")]
    MissingPrefix,
    #[error("expected 4 octets, found {0}")]
    OctetCount(usize),
    #[error("invalid octet")]
    InvalidOctet {
        #[source]
        source: ParseIntError,
    },
    #[error("octet {0} is out of range 0-255")]
    OctetOutOfRange(u32),
    #[error("invalid prefix length")]
    InvalidPrefix {
        #[source]
        source: ParseIntError,
    },
    #[error("prefix length {0} is out of range 0-32")]
    PrefixOutOfRange(i64),
}

/// An address paired with a network mask whose top `n` bits are set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ipv4Cidr {
    address: u32,
    mask: u32,
}

impl Ipv4Cidr {
    /// Build from an address and a prefix length in `0..=32`.
    pub fn new(address: Ipv4Addr, prefix_len: u8) -> Result<Self, CidrError> {
        Ok(Ipv4Cidr {
            address: address.to_bits(),
            mask: mask_for(i64::from(prefix_len))?,
        })
    }

    pub fn address(&self) -> Ipv4Addr {
        Ipv4Addr::from_bits(self.address)
    }

    pub fn mask(&self) -> Ipv4Addr {
        Ipv4Addr::from_bits(self.mask)
    }

    /// Address with the host bits cleared
    pub fn network(&self) -> Ipv4Addr {
        Ipv4Addr::from_bits(self.address & self.mask)
    }

    pub fn prefix_len(&self) -> u32 {
        self.mask.count_ones()
    }
}

fn mask_for(prefix_len: i64) -> Result<u32, CidrError> {
    if !(0..=MAX_PREFIX).contains(&prefix_len) {
        return Err(CidrError::PrefixOutOfRange(prefix_len));
    }
    // A shift by 32 overflows; that case is the empty mask.
    Ok(u32::MAX
        .checked_shl((MAX_PREFIX - prefix_len) as u32)
        .unwrap_or(0))
}

impl FromStr for Ipv4Cidr {
    type Err = CidrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (address, prefix) = s.trim().split_once('/').ok_or(CidrError::MissingPrefix)?;

        let octets: Vec<&str> = address.split('.').collect();
        if octets.len() != OCTETS {
            return Err(CidrError::OctetCount(octets.len()));
        }
        let address = octets.into_iter().try_fold(0u32, |acc, octet| {
            let value: u32 = octet
                .parse()
                .map_err(|source| CidrError::InvalidOctet { source })?;
            if value > u32::from(u8::MAX) {
                return Err(CidrError::OctetOutOfRange(value));
            }
            Ok((acc << 8) | value)
        })?;

        let prefix: i64 = prefix
            .parse()
            .map_err(|source| CidrError::InvalidPrefix { source })?;

        Ok(Ipv4Cidr {
            address,
            mask: mask_for(prefix)?,
        })
    }
}

impl fmt::Display for Ipv4Cidr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.address(), self.prefix_len())
    }
}
