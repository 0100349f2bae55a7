use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};

use crate::review::score::ScoreRules;

/// Application configuration loaded from environment variables.
/// Every variable is optional; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Directory backing the file key/value store.
    pub storage_dir: PathBuf,
    /// HTML-to-PDF converter executable.
    pub pdf_converter: String,
    /// Premium exports skip the watermark.
    pub export_premium: bool,
    pub ats_max_upload_bytes: usize,
    pub score_min_summary_words: usize,
    pub score_min_skills: usize,
}

impl Default for Config {
    fn default() -> Self {
        let rules = ScoreRules::default();
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            storage_dir: PathBuf::from("./data"),
            pdf_converter: "wkhtmltopdf".to_string(),
            export_premium: false,
            ats_max_upload_bytes: 5 * 1024 * 1024,
            score_min_summary_words: rules.min_summary_words,
            score_min_skills: rules.min_skills,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        Ok(Config {
            port: env_or("PORT", defaults.port)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            storage_dir: std::env::var("STORAGE_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.storage_dir),
            pdf_converter: std::env::var("PDF_CONVERTER").unwrap_or(defaults.pdf_converter),
            export_premium: parse_flag(
                "EXPORT_PREMIUM",
                std::env::var("EXPORT_PREMIUM").ok(),
                defaults.export_premium,
            )?,
            ats_max_upload_bytes: env_or("ATS_MAX_UPLOAD_BYTES", defaults.ats_max_upload_bytes)?,
            score_min_summary_words: env_or(
                "SCORE_MIN_SUMMARY_WORDS",
                defaults.score_min_summary_words,
            )?,
            score_min_skills: env_or("SCORE_MIN_SKILLS", defaults.score_min_skills)?,
        })
    }

    pub fn score_rules(&self) -> ScoreRules {
        ScoreRules {
            min_summary_words: self.score_min_summary_words,
            min_skills: self.score_min_skills,
            ..ScoreRules::default()
        }
    }
}

fn env_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    parse_var(key, std::env::var(key).ok(), default)
}

fn parse_var<T>(key: &str, raw: Option<String>, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match raw {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has invalid value '{raw}'")),
        None => Ok(default),
    }
}

fn parse_flag(key: &str, raw: Option<String>, default: bool) -> Result<bool> {
    let Some(raw) = raw else {
        return Ok(default);
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => anyhow::bail!("Environment variable '{key}' must be a boolean, got '{raw}'"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_var_default_and_override() {
        assert_eq!(parse_var::<u16>("PORT", None, 8080).unwrap(), 8080);
        assert_eq!(
            parse_var::<u16>("PORT", Some(" 3000 ".to_string()), 8080).unwrap(),
            3000
        );
    }

    #[test]
    fn test_parse_var_rejects_garbage() {
        let err = parse_var::<u16>("PORT", Some("eighty".to_string()), 8080).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("EXPORT_PREMIUM", Some("TRUE".to_string()), false).unwrap());
        assert!(!parse_flag("EXPORT_PREMIUM", Some("0".to_string()), true).unwrap());
        assert!(parse_flag("EXPORT_PREMIUM", None, true).unwrap());
        assert!(parse_flag("EXPORT_PREMIUM", Some("maybe".to_string()), false).is_err());
    }

    #[test]
    fn test_score_rules_use_configured_thresholds() {
        let config = Config {
            score_min_skills: 8,
            score_min_summary_words: 5,
            ..Config::default()
        };
        let rules = config.score_rules();
        assert_eq!(rules.min_skills, 8);
        assert_eq!(rules.min_summary_words, 5);
        assert_eq!(rules.floor, 40);
    }
}
