//! Config layering: defaults, then an optional TOML file, then CLI flags.
//!
//! ```toml
//! sign-policy = "strict"   # or "lenient"
//! range-policy = "lenient" # or "strict"
//! ```

use std::fs;
use std::path::Path;

use kunda_vedic_base::{KundaConfig, RangePolicy, SignPolicy};
use tracing::debug;

use crate::error::CliError;

/// Parse a TOML config document.
pub fn parse_config(contents: &str) -> Result<KundaConfig, CliError> {
    toml::from_str::<KundaConfig>(contents).map_err(|e| CliError::Config(e.to_string()))
}

/// Load the config file if one was given, otherwise the defaults.
pub fn load_config(path: Option<&Path>) -> Result<KundaConfig, CliError> {
    let Some(path) = path else {
        return Ok(KundaConfig::default());
    };
    let contents = fs::read_to_string(path)
        .map_err(|e| CliError::Config(format!("cannot read {}: {e}", path.display())))?;
    let config = parse_config(&contents)?;
    debug!(path = %path.display(), ?config, "loaded config");
    Ok(config)
}

/// Apply `--strict-*` flags on top of a loaded config. Flags only tighten.
pub fn apply_flags(mut config: KundaConfig, strict_sign: bool, strict_range: bool) -> KundaConfig {
    if strict_sign {
        config.sign_policy = SignPolicy::Strict;
    }
    if strict_range {
        config.range_policy = RangePolicy::Strict;
    }
    config
}
