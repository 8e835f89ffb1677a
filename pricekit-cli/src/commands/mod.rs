//! CLI command implementations

pub mod format;
pub mod interactive;
pub mod intervals;
pub mod plans;
pub mod quote;

use anyhow::{Context, Result};
use pricekit_core::{BillingInterval, PricingConfig};
use std::path::Path;

/// Load the pricing config, or the defaults when no path is given
pub fn load_config(path: Option<&Path>) -> Result<PricingConfig> {
    match path {
        Some(path) => {
            tracing::debug!("Loading config from {}", path.display());
            PricingConfig::from_file(path)
                .with_context(|| format!("Failed to load config {}", path.display()))
        }
        None => Ok(PricingConfig::default()),
    }
}

/// Strict interval parser for clap arguments
pub fn parse_interval(value: &str) -> Result<BillingInterval, String> {
    value.parse::<BillingInterval>().map_err(|_| {
        let keys: Vec<_> = BillingInterval::ALL.iter().map(|i| i.as_key()).collect();
        format!("expected one of: {}", keys.join(", "))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_interval() {
        assert_eq!(parse_interval("threeYears").unwrap(), BillingInterval::ThreeYears);
        let err = parse_interval("weekly").unwrap_err();
        assert!(err.contains("twoYears"));
    }

    #[test]
    fn test_load_config() {
        assert_eq!(load_config(None).unwrap(), PricingConfig::default());

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"default_interval": "annually"}}"#).unwrap();
        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.default_interval, BillingInterval::Annually);

        assert!(load_config(Some(Path::new("/nonexistent/pricekit.json"))).is_err());
    }
}
