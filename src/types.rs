//! Core types and structures for tld-swap

use crate::error::{Result, TldSwapError};
use colored::Color;

/// Suffixes tried in place of the stripped one, in report order
pub const DEFAULT_SUFFIXES: &[&str] = &[".com", ".net", ".org", ".dev", ".tech", ".co"];

/// Suffix removed from each base name before substitution
pub const DEFAULT_STRIP_SUFFIX: &str = ".io";

/// Environment variable selecting the upstream resolver
pub const RESOLVER_ENV: &str = "TLD_SWAP_RESOLVER";

/// Domain availability status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DomainStatus {
    /// No address records were found
    Available,
    /// At least one address record was found
    Taken,
    /// The probe failed outside of the lookup itself
    Error,
}

impl DomainStatus {
    /// Classify a successful probe answer
    pub fn from_has_records(has_records: bool) -> Self {
        if has_records {
            DomainStatus::Taken
        } else {
            DomainStatus::Available
        }
    }
}

impl std::fmt::Display for DomainStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainStatus::Available => write!(f, "Available"),
            DomainStatus::Taken => write!(f, "Taken"),
            DomainStatus::Error => write!(f, "Error"),
        }
    }
}

/// Ordered candidate -> status mapping for one base name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSet {
    entries: Vec<(String, DomainStatus)>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Insert a candidate. A repeated key keeps its original position and
    /// takes the new status.
    pub fn insert(&mut self, domain: impl Into<String>, status: DomainStatus) {
        let domain = domain.into();
        match self.entries.iter_mut().find(|(d, _)| *d == domain) {
            Some(entry) => entry.1 = status,
            None => self.entries.push((domain, status)),
        }
    }

    pub fn get(&self, domain: &str) -> Option<DomainStatus> {
        self.entries
            .iter()
            .find(|(d, _)| d == domain)
            .map(|(_, status)| *status)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, DomainStatus)> + '_ {
        self.entries.iter().map(|(d, s)| (d.as_str(), *s))
    }

    pub fn domains(&self) -> Vec<&str> {
        self.entries.iter().map(|(d, _)| d.as_str()).collect()
    }

    pub fn statuses(&self) -> Vec<DomainStatus> {
        self.entries.iter().map(|(_, s)| *s).collect()
    }

    /// Number of entries with the given status
    pub fn count(&self, status: DomainStatus) -> usize {
        self.entries.iter().filter(|(_, s)| *s == status).count()
    }
}

/// Upstream used by the DNS prober
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResolverChoice {
    /// Host configuration (resolv.conf), falling back to the built-in default
    #[default]
    System,
    Google,
    Cloudflare,
}

impl std::fmt::Display for ResolverChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResolverChoice::System => write!(f, "system"),
            ResolverChoice::Google => write!(f, "google"),
            ResolverChoice::Cloudflare => write!(f, "cloudflare"),
        }
    }
}

impl std::str::FromStr for ResolverChoice {
    type Err = TldSwapError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "system" | "" => Ok(ResolverChoice::System),
            "google" => Ok(ResolverChoice::Google),
            "cloudflare" => Ok(ResolverChoice::Cloudflare),
            other => Err(TldSwapError::config(format!(
                "unknown resolver '{}' (expected system, google or cloudflare)",
                other
            ))),
        }
    }
}

/// Configuration for availability checking
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckConfig {
    pub suffixes: Vec<String>,
    pub strip_suffix: String,
    pub resolver: ResolverChoice,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            suffixes: DEFAULT_SUFFIXES.iter().map(|s| s.to_string()).collect(),
            strip_suffix: DEFAULT_STRIP_SUFFIX.to_string(),
            resolver: ResolverChoice::default(),
        }
    }
}

impl CheckConfig {
    /// Default configuration with the resolver taken from the environment
    pub fn from_env() -> Result<Self> {
        let resolver = match std::env::var(RESOLVER_ENV) {
            Ok(value) => value.parse()?,
            Err(_) => ResolverChoice::default(),
        };

        Ok(Self {
            resolver,
            ..Default::default()
        })
    }
}

/// Status -> terminal color table used by the report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorScheme {
    pub available: Color,
    pub taken: Color,
    pub error: Color,
    pub enabled: bool,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            available: Color::Green,
            taken: Color::Red,
            error: Color::Yellow,
            enabled: true,
        }
    }
}

impl ColorScheme {
    /// Scheme that emits no escape sequences
    pub fn plain() -> Self {
        Self {
            enabled: false,
            ..Default::default()
        }
    }

    pub fn color_for(&self, status: DomainStatus) -> Option<Color> {
        if !self.enabled {
            return None;
        }
        Some(match status {
            DomainStatus::Available => self.available,
            DomainStatus::Taken => self.taken,
            DomainStatus::Error => self.error,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_labels() {
        assert_eq!(DomainStatus::Available.to_string(), "Available");
        assert_eq!(DomainStatus::Taken.to_string(), "Taken");
        assert_eq!(DomainStatus::Error.to_string(), "Error");
    }

    #[test]
    fn test_result_set_keeps_insertion_order() {
        let mut results = ResultSet::new();
        results.insert("b.com", DomainStatus::Taken);
        results.insert("a.com", DomainStatus::Available);
        assert_eq!(results.domains(), vec!["b.com", "a.com"]);
    }

    #[test]
    fn test_result_set_repeated_key_replaces_status() {
        let mut results = ResultSet::new();
        results.insert("a.com", DomainStatus::Taken);
        results.insert("b.com", DomainStatus::Taken);
        results.insert("a.com", DomainStatus::Error);

        assert_eq!(results.len(), 2);
        assert_eq!(results.domains(), vec!["a.com", "b.com"]);
        assert_eq!(results.get("a.com"), Some(DomainStatus::Error));
        assert_eq!(results.count(DomainStatus::Taken), 1);
    }

    #[test]
    fn test_default_config() {
        let config = CheckConfig::default();
        assert_eq!(
            config.suffixes,
            vec![".com", ".net", ".org", ".dev", ".tech", ".co"]
        );
        assert_eq!(config.strip_suffix, ".io");
        assert_eq!(config.resolver, ResolverChoice::System);
    }

    #[test]
    fn test_resolver_choice_parsing() {
        assert_eq!("Google".parse::<ResolverChoice>().unwrap(), ResolverChoice::Google);
        assert_eq!(" cloudflare ".parse::<ResolverChoice>().unwrap(), ResolverChoice::Cloudflare);
        assert_eq!("".parse::<ResolverChoice>().unwrap(), ResolverChoice::System);
        assert!("quad9".parse::<ResolverChoice>().is_err());
    }

    #[test]
    fn test_color_scheme_distinct_colors() {
        let scheme = ColorScheme::default();
        let colors = [
            scheme.color_for(DomainStatus::Available),
            scheme.color_for(DomainStatus::Taken),
            scheme.color_for(DomainStatus::Error),
        ];
        assert_eq!(colors[0], Some(Color::Green));
        assert_eq!(colors[1], Some(Color::Red));
        assert_eq!(colors[2], Some(Color::Yellow));
        assert!(ColorScheme::plain().color_for(DomainStatus::Taken).is_none());
    }
}
