use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::resume::Branding;

/// GitHub handle linked from the CV when the contact document has none.
const DEFAULT_GITHUB: &str = "github.com/rayleighxu7";

/// Application configuration loaded from environment variables.
/// Every variable has a default; only malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub debug: bool,
    pub content_dir: PathBuf,
    pub static_dir: PathBuf,
    pub site_name: String,
    pub site_url: String,
    pub cv_filename: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
            debug: parse_bool(&env_or("DEBUG", "false"))
                .context("DEBUG must be true or false")?,
            content_dir: PathBuf::from(env_or("CONTENT_DIR", "content")),
            static_dir: PathBuf::from(env_or("STATIC_DIR", "static")),
            site_name: env_or("SITE_NAME", "freelanxur"),
            site_url: env_or("SITE_URL", "https://freelanxur.com"),
            cv_filename: env_or("CV_FILENAME", "Rayleigh_Xu_CV.pdf"),
        })
    }

    /// Site identity handed to the CV renderer.
    pub fn branding(&self) -> Branding {
        Branding {
            site_name: self.site_name.clone(),
            site_url: self.site_url.clone(),
            fallback_github: DEFAULT_GITHUB.to_string(),
        }
    }

    /// Fallback crate log level, used only when `RUST_LOG` is not a usable filter.
    /// A valid `RUST_LOG` in the environment is the whole filter and ignores `DEBUG`.
    /// `DEBUG=true` raises the fallback to `debug`.
    pub fn log_level(&self) -> &str {
        if self.debug {
            "debug"
        } else {
            &self.rust_log
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            debug: false,
            content_dir: PathBuf::from("content"),
            static_dir: PathBuf::from("static"),
            site_name: "freelanxur".to_string(),
            site_url: "https://freelanxur.com".to_string(),
            cv_filename: "Rayleigh_Xu_CV.pdf".to_string(),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => anyhow::bail!("invalid boolean '{other}'"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bool_accepts_common_spellings() {
        assert!(parse_bool("TRUE").unwrap());
        assert!(parse_bool(" 1 ").unwrap());
        assert!(!parse_bool("off").unwrap());
        assert!(!parse_bool("").unwrap());
        assert!(parse_bool("maybe").is_err());
    }

    #[test]
    fn test_branding_uses_site_settings() {
        let config = Config {
            site_name: "example".to_string(),
            site_url: "https://example.org".to_string(),
            ..Config::default()
        };
        let branding = config.branding();
        assert_eq!(branding.site_name, "example");
        assert_eq!(branding.site_url, "https://example.org");
        assert_eq!(branding.fallback_github, DEFAULT_GITHUB);
    }

    #[test]
    fn test_debug_flag_overrides_log_level() {
        let mut config = Config {
            rust_log: "warn".to_string(),
            ..Config::default()
        };
        assert_eq!(config.log_level(), "warn");
        config.debug = true;
        assert_eq!(config.log_level(), "debug");
    }
}
