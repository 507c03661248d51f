//! Bridges `logchain_config` types to `logchain_core` types.

use crate::builder::{ChainBuilder, Stage};
use crate::error::Result;
use eyre::WrapErr;

impl From<logchain_config::HandlerName> for Stage {
    fn from(n: logchain_config::HandlerName) -> Self {
        match n {
            logchain_config::HandlerName::Fatal => Stage::Fatal,
            logchain_config::HandlerName::Error => Stage::Error,
            logchain_config::HandlerName::Warning => Stage::Warning,
            logchain_config::HandlerName::Unknown => Stage::Unknown,
        }
    }
}

impl ChainBuilder {
    /// Validate `cfg` and seed a builder with its stages and error-log path.
    ///
    /// Sinks are left at their defaults; set them on the returned builder.
    pub fn from_config(cfg: &logchain_config::Config) -> Result<Self> {
        cfg.validate().wrap_err("invalid configuration")?;
        Ok(ChainBuilder::default()
            .with_error_log(cfg.error_log.path.clone())
            .with_stages(cfg.chain.order.iter().copied().map(Stage::from)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::Chain;

    #[test]
    fn config_order_becomes_chain_order() {
        let cfg = logchain_config::load_toml("[chain]\norder = [\"unknown\", \"warning\"]").unwrap();
        let chain = ChainBuilder::from_config(&cfg).unwrap().try_build().unwrap();
        assert_eq!(chain.names().collect::<Vec<_>>(), ["unknown", "warning"]);
    }

    #[test]
    fn invalid_config_is_wrapped() {
        let cfg = logchain_config::load_toml("[chain]\norder = [\"error\", \"error\"]").unwrap();
        let err = ChainBuilder::from_config(&cfg).unwrap_err();
        assert_eq!(err.to_string(), "invalid configuration");
        assert!(format!("{err:#}").contains("more than once"));
    }

    #[test]
    fn default_config_builds_standard_chain() {
        let chain: Chain = ChainBuilder::from_config(&logchain_config::Config::default())
            .unwrap()
            .try_build()
            .unwrap();
        assert_eq!(chain.len(), 4);
    }
}
