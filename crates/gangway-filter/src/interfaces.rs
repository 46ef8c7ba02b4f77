//! Host network interface enumeration.
//!
//! Enumeration is the one OS-dependent capability the filter needs, so it
//! sits behind [`InterfaceSource`]; tests substitute a fixed interface list
//! without touching real OS state. It runs only at configuration time,
//! never on the request path.

use ipnet::{IpNet, Ipv4Net, Ipv6Net};
use pnet::datalink;
use pnet::ipnetwork::IpNetwork;

pub use pnet::datalink::NetworkInterface;

/// Supplier of the host interface list.
pub trait InterfaceSource: Send + Sync {
    /// Every network interface currently known to the source.
    fn interfaces(&self) -> Vec<NetworkInterface>;
}

/// Production source backed by the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemInterfaces;

impl InterfaceSource for SystemInterfaces {
    fn interfaces(&self) -> Vec<NetworkInterface> {
        datalink::interfaces()
    }
}

/// The subnet blocks assigned to one interface.
///
/// Each assigned address carries its prefix length, which is exactly a CIDR
/// block covering the interface's subnet.
pub fn subnets(iface: &NetworkInterface) -> Vec<IpNet> {
    iface
        .ips
        .iter()
        .filter_map(|assigned| match assigned {
            IpNetwork::V4(net) => Ipv4Net::new(net.ip(), net.prefix()).ok().map(IpNet::V4),
            IpNetwork::V6(net) => Ipv6Net::new(net.ip(), net.prefix()).ok().map(IpNet::V6),
        })
        .collect()
}
