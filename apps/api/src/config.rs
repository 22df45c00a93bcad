use std::path::PathBuf;

use anyhow::{bail, Context, Result};

/// Application configuration loaded from environment variables.
/// Everything has a default, so the service starts with no environment at
/// all as long as the bundled `data/` catalogs are present.
#[derive(Debug, Clone)]
pub struct Config {
    pub job_roles_path: PathBuf,
    pub questions_path: PathBuf,
    /// Optional override for the built-in skill vocabulary
    /// (one entry per line, `#` comments allowed).
    pub skills_path: Option<PathBuf>,
    pub tagger: TaggerConfig,
    pub port: u16,
    pub rust_log: String,
}

/// Which part-of-speech capability the skill extractor gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaggerConfig {
    Lexicon,
    Off,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            job_roles_path: env_or("JOB_ROLES_PATH", "data/job_roles.csv").into(),
            questions_path: env_or("QUESTIONS_PATH", "data/interview_questions.csv").into(),
            skills_path: std::env::var("SKILLS_PATH").ok().map(PathBuf::from),
            tagger: parse_tagger(&env_or("POS_TAGGER", "lexicon"))?,
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_tagger(raw: &str) -> Result<TaggerConfig> {
    match raw.to_ascii_lowercase().as_str() {
        "lexicon" => Ok(TaggerConfig::Lexicon),
        "off" | "none" | "disabled" => Ok(TaggerConfig::Off),
        other => bail!("POS_TAGGER must be 'lexicon' or 'off', got '{other}'"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tagger_values_parse_case_insensitively() {
        assert_eq!(parse_tagger("lexicon").unwrap(), TaggerConfig::Lexicon);
        assert_eq!(parse_tagger("OFF").unwrap(), TaggerConfig::Off);
        assert_eq!(parse_tagger("none").unwrap(), TaggerConfig::Off);
        assert!(parse_tagger("spacy").is_err());
    }
}
