//! tld-swap - find free alternate TLDs for .io names
//!
//! Every base name has its `.io` suffix stripped, gets each alternate suffix
//! appended, and each candidate is probed with a single IPv4 DNS lookup.
//! A candidate without address records is reported as likely available.

pub mod domain;
pub mod domains;
pub mod error;
pub mod report;
pub mod types;

// Re-export commonly used types
pub use error::{Result, TldSwapError};
pub use types::{CheckConfig, ColorScheme, DomainStatus, ResolverChoice, ResultSet};

// Re-export main functionality
pub use domain::{AvailabilityChecker, DnsProbe, HickoryProber};
pub use report::{run, ReportFormatter, RunSummary};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library
pub fn init() -> Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();
    Ok(())
}
