//! The origin filter: one NetworkSet, one MembershipCache, one interface
//! source.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::sync::Arc;

use ipnet::{IpNet, Ipv4Net, Ipv6Net};
use tracing::{debug, info, warn};

use crate::cache::MembershipCache;
use crate::config::FilterPolicy;
use crate::error::FilterError;
use crate::interfaces::{subnets, InterfaceSource, SystemInterfaces};
use crate::set::NetworkSet;

/// Network-origin allow-list shared by every request-handling task.
///
/// Created once per process, populated during a configuration phase, then
/// treated as read-mostly while serving. All methods take `&self`; the
/// expected shape is an `Arc<OriginFilter>` handed to whatever assembles
/// the HTTP server, never a process-global.
///
/// Every successful mutation clears the decision cache, so a decision
/// cached before the mutation is recomputed against the updated set the
/// next time the address is queried.
pub struct OriginFilter {
    networks: NetworkSet,
    cache: MembershipCache,
    source: Box<dyn InterfaceSource>,
}

impl OriginFilter {
    /// An empty filter backed by the operating system's interface list.
    ///
    /// Until networks are registered it denies every address, loopback
    /// included.
    pub fn new() -> Self {
        Self::with_source(SystemInterfaces)
    }

    /// An empty filter reading interfaces from `source` instead of the OS.
    pub fn with_source(source: impl InterfaceSource + 'static) -> Self {
        Self {
            networks: NetworkSet::new(),
            cache: MembershipCache::new(),
            source: Box::new(source),
        }
    }

    /// Register one CIDR block, either address family.
    ///
    /// Malformed text is rejected whole: nothing is stored and cached
    /// decisions are left untouched.
    pub fn allow_network(&self, cidr: &str) -> Result<(), FilterError> {
        self.networks.add(cidr)?;
        self.cache.clear();
        debug!(network = %cidr, "registered allowed network");
        Ok(())
    }

    /// Register the subnets of every interface on the host.
    ///
    /// This is the default policy when the operator configures neither
    /// networks nor interfaces. Loopback coverage is guaranteed even if
    /// enumeration reports no loopback interface, so same-host
    /// administration always stays possible.
    pub fn add_local_networks(&self) {
        let mut registered = 0usize;
        for iface in self.source.interfaces() {
            for net in subnets(&iface) {
                debug!(interface = %iface.name, network = %net, "registered local subnet");
                self.networks.insert(net);
                registered += 1;
            }
        }

        if !self.networks.contains(IpAddr::V4(Ipv4Addr::LOCALHOST)) {
            if let Ok(net) = Ipv4Net::new(Ipv4Addr::new(127, 0, 0, 0), 8) {
                self.networks.insert(IpNet::V4(net));
            }
        }
        if !self.networks.contains(IpAddr::V6(Ipv6Addr::LOCALHOST)) {
            if let Ok(net) = Ipv6Net::new(Ipv6Addr::LOCALHOST, 128) {
                self.networks.insert(IpNet::V6(net));
            }
        }

        self.cache.clear();
        info!(subnets = registered, "registered local interface networks");
    }

    /// Register only the named interface's subnet(s).
    ///
    /// An unknown name is an error and leaves the filter exactly as it was.
    pub fn add_local_network_for_interface(&self, name: &str) -> Result<(), FilterError> {
        let iface = self
            .source
            .interfaces()
            .into_iter()
            .find(|iface| iface.name == name)
            .ok_or_else(|| FilterError::UnknownInterface {
                name: name.to_string(),
            })?;

        for net in subnets(&iface) {
            debug!(interface = %name, network = %net, "registered local subnet");
            self.networks.insert(net);
        }
        self.cache.clear();
        Ok(())
    }

    /// Whether `addr` belongs to any registered network.
    ///
    /// Cached after the first query per address; repeat queries are answered
    /// from the cache without touching the network set.
    pub fn is_allowed(&self, addr: IpAddr) -> bool {
        if let Some(decision) = self.cache.get(addr) {
            return decision;
        }
        let allowed = self.networks.contains(addr);
        self.cache.insert(addr, allowed);
        allowed
    }

    /// Number of registered network blocks.
    pub fn network_count(&self) -> usize {
        self.networks.len()
    }

    /// Queries answered from the cache so far.
    pub fn cache_hits(&self) -> u64 {
        self.cache.hits()
    }

    /// Decisions currently cached.
    pub fn cached_decisions(&self) -> usize {
        self.cache.len()
    }

    /// Build a filter from the operator's policy.
    ///
    /// Returns `None` when filtering is disabled: the caller must then use
    /// its handler unwrapped. Invalid entries are logged and skipped so one
    /// bad line of policy never takes the console down. A policy with no
    /// explicit entries at all falls back to allowing the local networks.
    pub fn from_policy(policy: &FilterPolicy) -> Option<Arc<Self>> {
        if policy.disable_filter {
            warn!("origin filtering disabled; console reachable from any network");
            return None;
        }

        let filter = Self::new();

        for cidr in &policy.allow_networks {
            if let Err(error) = filter.allow_network(cidr) {
                warn!(%error, network = %cidr, "skipping allowed-network entry");
            }
        }

        for name in &policy.allow_interfaces {
            if let Err(error) = filter.add_local_network_for_interface(name) {
                warn!(%error, interface = %name, "skipping allowed-interface entry");
            }
        }

        if policy.allow_networks.is_empty() && policy.allow_interfaces.is_empty() {
            info!("allowing local network access by default");
            filter.add_local_networks();
        }

        Some(Arc::new(filter))
    }
}

impl Default for OriginFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for OriginFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OriginFilter")
            .field("networks", &self.networks)
            .field("cache", &self.cache)
            .finish_non_exhaustive()
    }
}
