//! Application configuration.
//!
//! Settings come from the environment (optionally via a `.env` file loaded by the
//! binary) and the seed catalog comes from a TOML file.

/// Seed catalog loading from catalog.toml
pub mod catalog;

/// Pickup-point directory defaults and overrides
pub mod delivery;

use crate::errors::Result;
use std::{env, path::PathBuf};
use tracing::{debug, info};

/// Where the seed catalog is read from when `DLPLUS_CATALOG` is not set
pub const DEFAULT_CATALOG_PATH: &str = "catalog.toml";

/// Image used for seller submissions that leave the image field blank
pub const DEFAULT_PLACEHOLDER_IMAGE: &str =
    "https://images.unsplash.com/photo-1523275335684-37898b6baf30?w=400";

/// Settings the storefront needs at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Path of the seed catalog TOML file
    pub catalog_path: PathBuf,
    /// Fallback image for seller submissions
    pub placeholder_image: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from(DEFAULT_CATALOG_PATH),
            placeholder_image: DEFAULT_PLACEHOLDER_IMAGE.to_string(),
        }
    }
}

/// Builds the [`AppConfig`] from `DLPLUS_CATALOG` and `DLPLUS_PLACEHOLDER_IMAGE`,
/// falling back to the defaults for unset or blank variables.
///
/// # Errors
/// Returns an error if a variable is set but is not valid Unicode.
pub fn load_app_configuration() -> Result<AppConfig> {
    configuration_from(|key| env::var(key))
}

fn configuration_from<F>(lookup: F) -> Result<AppConfig>
where
    F: Fn(&str) -> std::result::Result<String, env::VarError>,
{
    let catalog_path = PathBuf::from(setting_or(
        "DLPLUS_CATALOG",
        lookup("DLPLUS_CATALOG"),
        DEFAULT_CATALOG_PATH,
    )?);
    let placeholder_image = setting_or(
        "DLPLUS_PLACEHOLDER_IMAGE",
        lookup("DLPLUS_PLACEHOLDER_IMAGE"),
        DEFAULT_PLACEHOLDER_IMAGE,
    )?;

    info!(catalog = %catalog_path.display(), "Loaded application configuration");
    Ok(AppConfig {
        catalog_path,
        placeholder_image,
    })
}

fn setting_or(
    key: &str,
    value: std::result::Result<String, env::VarError>,
    default: &str,
) -> Result<String> {
    match value {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        Ok(_) | Err(env::VarError::NotPresent) => {
            debug!("{key} not set, using default");
            Ok(default.to_string())
        }
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::errors::Error;
    use std::{collections::HashMap, ffi::OsString};

    fn lookup_in(
        vars: &HashMap<&str, &str>,
    ) -> impl Fn(&str) -> std::result::Result<String, env::VarError> {
        move |key: &str| {
            vars.get(key)
                .map(|value| (*value).to_string())
                .ok_or(env::VarError::NotPresent)
        }
    }

    #[test]
    fn test_unset_setting_uses_default() {
        let value = setting_or(
            "DLPLUS_TEST_SURELY_UNSET_VARIABLE",
            env::var("DLPLUS_TEST_SURELY_UNSET_VARIABLE"),
            "fallback",
        )
        .unwrap();
        assert_eq!(value, "fallback");
    }

    #[test]
    fn test_blank_setting_uses_default() {
        let value = setting_or("DLPLUS_CATALOG", Ok("   ".to_string()), "catalog.toml").unwrap();
        assert_eq!(value, "catalog.toml");
        let value = setting_or("DLPLUS_CATALOG", Ok(String::new()), "catalog.toml").unwrap();
        assert_eq!(value, "catalog.toml");
    }

    #[test]
    fn test_non_unicode_setting_is_an_error() {
        let result = setting_or(
            "DLPLUS_CATALOG",
            Err(env::VarError::NotUnicode(OsString::from("bad"))),
            "catalog.toml",
        );
        assert!(matches!(result, Err(Error::EnvVar(_))));
    }

    #[test]
    fn test_configuration_picks_up_both_variables() {
        let vars = HashMap::from([
            ("DLPLUS_CATALOG", "/srv/dlplus/catalog.toml"),
            ("DLPLUS_PLACEHOLDER_IMAGE", "https://cdn.example.com/blank.png"),
        ]);

        let config = configuration_from(lookup_in(&vars)).unwrap();

        assert_eq!(config.catalog_path, PathBuf::from("/srv/dlplus/catalog.toml"));
        assert_eq!(config.placeholder_image, "https://cdn.example.com/blank.png");
    }

    #[test]
    fn test_configuration_defaults_for_missing_and_blank_variables() {
        let vars = HashMap::from([("DLPLUS_PLACEHOLDER_IMAGE", " ")]);

        let config = configuration_from(lookup_in(&vars)).unwrap();

        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.catalog_path, PathBuf::from("catalog.toml"));
        assert_eq!(config.placeholder_image, DEFAULT_PLACEHOLDER_IMAGE);
    }
}
