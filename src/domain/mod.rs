//! Domain availability checking module

pub mod checker;
pub mod prober;

// Re-export main functionality
pub use checker::AvailabilityChecker;
pub use prober::HickoryProber;

use crate::error::Result;
use async_trait::async_trait;

/// Trait for DNS probing methods
#[async_trait]
pub trait DnsProbe: Send + Sync {
    /// Whether `domain` currently has IPv4 address records.
    ///
    /// Lookup failures of any kind answer `Ok(false)`. `Err` is reserved for
    /// failures outside the lookup itself.
    async fn probe(&self, domain: &str) -> Result<bool>;
}
