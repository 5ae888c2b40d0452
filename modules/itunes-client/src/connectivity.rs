//! Connectivity precondition seam.
//!
//! `ItunesClient::search` consults the probe before any I/O and fails with
//! `SearchError::Offline` when it reports unreachable. The host application
//! owns actual reachability monitoring; it wires its monitor in through this
//! trait.

pub trait ConnectivityProbe: Send + Sync {
    fn is_reachable(&self) -> bool;
}

/// Default probe: assume the network is up and let the transport surface
/// failures.
pub struct AssumeOnline;

impl ConnectivityProbe for AssumeOnline {
    fn is_reachable(&self) -> bool {
        true
    }
}
