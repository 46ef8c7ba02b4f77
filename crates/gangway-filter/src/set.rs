//! The allow-list itself: an append-only set of CIDR blocks.

use std::net::IpAddr;

use ipnet::IpNet;
use parking_lot::RwLock;

use crate::error::FilterError;

/// An append-only collection of parsed network blocks, mixed IPv4/IPv6.
///
/// Membership is family-strict: an IPv4 address is only ever tested against
/// IPv4 blocks and an IPv6 address against IPv6 blocks, with no implicit
/// coercion between the two. An empty set answers `false` for every address.
///
/// There is no removal operation. Readers iterate under a read lock while
/// appends take the write lock, so a query can never observe a
/// half-constructed block.
#[derive(Debug, Default)]
pub struct NetworkSet {
    blocks: RwLock<Vec<IpNet>>,
}

impl NetworkSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self {
            blocks: RwLock::new(Vec::new()),
        }
    }

    /// Parse `cidr` as `address/prefix-length` in either family and append
    /// the resulting block.
    ///
    /// Malformed text (empty string, truncated IPv4 such as `"11111.0."`,
    /// IPv6 missing its prefix length such as `"12:36:789a:1::/"`) is
    /// rejected without storing anything.
    pub fn add(&self, cidr: &str) -> Result<(), FilterError> {
        let block: IpNet = cidr
            .parse()
            .map_err(|source| FilterError::InvalidNetworkSpec {
                spec: cidr.to_string(),
                source,
            })?;
        self.blocks.write().push(block);
        Ok(())
    }

    /// Append an already-parsed block.
    pub fn insert(&self, block: IpNet) {
        self.blocks.write().push(block);
    }

    /// Whether `addr` falls inside at least one registered block of the same
    /// address family.
    pub fn contains(&self, addr: IpAddr) -> bool {
        self.blocks.read().iter().any(|block| match (block, addr) {
            (IpNet::V4(net), IpAddr::V4(ip)) => net.contains(&ip),
            (IpNet::V6(net), IpAddr::V6(ip)) => net.contains(&ip),
            _ => false,
        })
    }

    /// Number of registered blocks.
    pub fn len(&self) -> usize {
        self.blocks.read().len()
    }

    /// True when no block has been registered.
    pub fn is_empty(&self) -> bool {
        self.blocks.read().is_empty()
    }
}
