//! Network-origin access control for the device-administration console.
//!
//! The console must stay reachable from trusted local or explicitly
//! configured networks and from nowhere else. This crate is the single
//! authorization checkpoint in front of it: a CIDR allow-list evaluated
//! against the transport-reported origin of every inbound request, before
//! any other handler runs. It authorizes network origins; user
//! authentication is someone else's job.
//!
//! # Architecture
//!
//! ```text
//!                 FilterPolicy (config)
//!                        │
//!                        ▼
//!               OriginFilter::from_policy
//!               ┌──────────────────────┐
//!               │     OriginFilter     │
//!               │  ┌────────────────┐  │
//!               │  │   NetworkSet   │  │  append-only CIDR blocks
//!               │  └────────────────┘  │
//!               │  ┌────────────────┐  │
//!               │  │ MembershipCache│  │  address → decision
//!               │  └────────────────┘  │
//!               │  ┌────────────────┐  │
//!               │  │InterfaceSource │  │  host subnets for the
//!               │  └────────────────┘  │  local-networks default
//!               └──────────┬───────────┘
//!                          │ is_allowed(origin)
//!                          ▼
//!             OriginFilterLayer / Service
//!        request ──► allowed? ──► inner handler
//!                        │
//!                        └──► 403 Forbidden
//! ```
//!
//! Default-deny: a freshly constructed filter rejects every origin until
//! networks are registered, explicitly or via the local-interface default.

#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod cache;
pub mod config;
pub mod error;
pub mod filter;
pub mod interfaces;
pub mod middleware;
pub mod set;

// Re-exports for public API
pub use cache::MembershipCache;
pub use config::FilterPolicy;
pub use error::FilterError;
pub use filter::OriginFilter;
pub use interfaces::{InterfaceSource, NetworkInterface, SystemInterfaces};
pub use middleware::{OriginFilterLayer, OriginFilterService};
pub use set::NetworkSet;
