//! Alternate-TLD availability checker

use crate::domain::DnsProbe;
use crate::types::{CheckConfig, DomainStatus, ResultSet};
use std::io::{self, Write};

/// Remove the first occurrence of `strip` from `base`, wherever it sits.
///
/// `"studio.io.io"` becomes `"studio.io"`, and `"my.iot.io"` becomes
/// `"myt.io"`. Only the first match is removed, trailing or not.
pub fn root_name(base: &str, strip: &str) -> String {
    if strip.is_empty() {
        return base.to_string();
    }
    base.replacen(strip, "", 1)
}

/// Checks a base name against every configured alternate suffix
pub struct AvailabilityChecker<P> {
    config: CheckConfig,
    prober: P,
}

impl<P: DnsProbe> AvailabilityChecker<P> {
    /// Create a checker with the default suffix list
    pub fn new(prober: P) -> Self {
        Self::with_config(CheckConfig::default(), prober)
    }

    /// Create a checker with a custom configuration
    pub fn with_config(config: CheckConfig, prober: P) -> Self {
        Self { config, prober }
    }

    /// Candidate domains for `base`, in suffix order
    pub fn candidates(&self, base: &str) -> Vec<String> {
        let root = root_name(base, &self.config.strip_suffix);
        self.config
            .suffixes
            .iter()
            .map(|suffix| format!("{}{}", root, suffix))
            .collect()
    }

    /// Probe each candidate in turn and classify it.
    ///
    /// Probes run one at a time; a failing probe marks only its own
    /// candidate as [`DomainStatus::Error`] and is reported on stderr.
    pub async fn check_availability(&self, base: &str) -> ResultSet {
        self.check_availability_with(base, &mut io::stderr()).await
    }

    /// Same as [`check_availability`](Self::check_availability), writing
    /// per-candidate diagnostics to `diagnostics`
    pub async fn check_availability_with<W: Write>(
        &self,
        base: &str,
        diagnostics: &mut W,
    ) -> ResultSet {
        let candidates = self.candidates(base);
        let mut results = ResultSet::with_capacity(candidates.len());

        for candidate in candidates {
            let status = match self.prober.probe(&candidate).await {
                Ok(has_records) => DomainStatus::from_has_records(has_records),
                Err(e) => {
                    if let Err(write_err) =
                        writeln!(diagnostics, "Error checking {}: {}", candidate, e.detail())
                    {
                        tracing::debug!(error = %write_err, "Failed to write diagnostic");
                    }
                    tracing::warn!(domain = %candidate, error = %e, "DNS probe failed");
                    DomainStatus::Error
                }
            };

            tracing::debug!(domain = %candidate, status = %status, "Candidate checked");
            results.insert(candidate, status);
        }

        results
    }

    /// Get checker configuration
    pub fn config(&self) -> &CheckConfig {
        &self.config
    }

    pub fn prober(&self) -> &P {
        &self.prober
    }
}
