//! DNS prober backed by hickory-resolver

use crate::domain::DnsProbe;
use crate::error::Result;
use crate::types::ResolverChoice;
use async_trait::async_trait;
use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::name_server::TokioConnectionProvider;
use hickory_resolver::proto::rr::Name;
use hickory_resolver::system_conf::read_system_conf;
use hickory_resolver::TokioResolver;
use std::str::FromStr;
use std::time::Duration;

/// Per-query timeout handed to the resolver
pub const DNS_TIMEOUT_SECS: u64 = 5;

/// Single IPv4 lookup per candidate, no retries
pub struct HickoryProber {
    resolver: TokioResolver,
}

impl HickoryProber {
    /// Create a prober against the system resolver configuration
    pub fn new() -> Self {
        Self::with_resolver(ResolverChoice::System)
    }

    /// Create a prober against the given upstream.
    ///
    /// An unreadable system configuration is logged and replaced by
    /// hickory's default upstream, so this never fails.
    pub fn with_resolver(choice: ResolverChoice) -> Self {
        let config = match choice {
            ResolverChoice::System => match read_system_conf() {
                Ok((config, _)) => config,
                Err(e) => {
                    tracing::warn!("Failed to read system resolver config: {}. Using default.", e);
                    ResolverConfig::default()
                }
            },
            ResolverChoice::Google => ResolverConfig::google(),
            ResolverChoice::Cloudflare => ResolverConfig::cloudflare(),
        };
        Self::with_resolver_config(config)
    }

    /// Create a prober against an explicit resolver configuration
    pub fn with_resolver_config(config: ResolverConfig) -> Self {
        let mut opts = ResolverOpts::default();
        opts.timeout = Duration::from_secs(DNS_TIMEOUT_SECS);
        opts.attempts = 1;

        let resolver =
            TokioResolver::builder_with_config(config, TokioConnectionProvider::default())
                .with_options(opts)
                .build();

        Self { resolver }
    }
}

impl Default for HickoryProber {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a candidate as an absolute name so search domains never apply
fn absolute_name(domain: &str) -> Option<Name> {
    let mut name = Name::from_str(domain).ok()?;
    name.set_fqdn(true);
    Some(name)
}

#[async_trait]
impl DnsProbe for HickoryProber {
    async fn probe(&self, domain: &str) -> Result<bool> {
        let Some(name) = absolute_name(domain) else {
            tracing::trace!(domain = %domain, "Candidate is not a valid DNS name");
            return Ok(false);
        };

        match self.resolver.ipv4_lookup(name).await {
            Ok(lookup) => Ok(lookup.iter().next().is_some()),
            Err(e) => {
                tracing::trace!(domain = %domain, error = %e, "IPv4 lookup failed");
                Ok(false)
            }
        }
    }
}
