//! Filter error types.

use thiserror::Error;

/// Errors surfaced by filter configuration calls.
///
/// Both variants are recoverable: the caller is expected to log the entry
/// that failed and continue configuring the remaining ones, never to abort
/// startup over a single bad line of policy.
#[derive(Debug, Error)]
pub enum FilterError {
    /// The CIDR text did not parse as either address family.
    #[error("invalid network spec {spec:?}: {source}")]
    InvalidNetworkSpec {
        /// The text as the caller supplied it.
        spec: String,
        /// Parse failure from the CIDR parser.
        #[source]
        source: ipnet::AddrParseError,
    },

    /// No interface with this name exists on the host.
    #[error("unknown network interface {name:?}")]
    UnknownInterface {
        /// The interface name as the caller supplied it.
        name: String,
    },
}
