//! Server Configuration
//!
//! Built once at startup from a key lookup (Shuttle secrets, then the process
//! environment) and handed to the constructors that need it.

use std::path::PathBuf;
use std::time::Duration;

use alterego::DomainError;

const DEFAULT_MODEL: &str = "gpt-4o-mini";
const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_PUSHOVER_URL: &str = "https://api.pushover.net/1/messages.json";
const DEFAULT_PERSONA_NAME: &str = "Gabriel Martins";
const DEFAULT_PERSONA_DIR: &str = "me";
const DEFAULT_SUMMARY_FILE: &str = "summary.txt";
const DEFAULT_DOCUMENTS: &str = "LinkedIn Profile=linkedin.pdf,Resume=resume.pdf";
const DEFAULT_MAX_TOOL_ROUNDS: usize = 8;
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_NOTIFY_TIMEOUT_SECS: u64 = 10;

/// Language model settings
#[derive(Debug, Clone)]
pub struct OpenAiSettings {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
}

/// Push notification credentials
#[derive(Debug, Clone)]
pub struct PushoverSettings {
    pub token: String,
    pub user: String,
    pub url: String,
    pub timeout: Duration,
}

/// Where the persona's documents live
#[derive(Debug, Clone)]
pub struct PersonaSettings {
    pub name: String,
    pub dir: PathBuf,
    pub summary_file: String,
    /// (label, file name) pairs, in prompt order
    pub documents: Vec<(String, String)>,
}

impl PersonaSettings {
    pub fn summary_path(&self) -> PathBuf {
        self.dir.join(&self.summary_file)
    }
}

impl Default for PersonaSettings {
    fn default() -> Self {
        Self {
            name: DEFAULT_PERSONA_NAME.to_string(),
            dir: PathBuf::from(DEFAULT_PERSONA_DIR),
            summary_file: DEFAULT_SUMMARY_FILE.to_string(),
            documents: parse_documents(DEFAULT_DOCUMENTS),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub openai: OpenAiSettings,
    /// `None` disables notifications
    pub pushover: Option<PushoverSettings>,
    pub persona: PersonaSettings,
    pub max_tool_rounds: usize,
    /// Bearer token guarding the chat routes; `None` leaves them open
    pub api_key: Option<String>,
}

impl AppConfig {
    /// Build the configuration from a key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, DomainError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_key = get("OPENAI_API_KEY").ok_or_else(|| {
            DomainError::Configuration("OPENAI_API_KEY is required".to_string())
        })?;

        let timeout = parse_timeout(
            get("REQUEST_TIMEOUT_SECS"),
            "REQUEST_TIMEOUT_SECS",
            DEFAULT_TIMEOUT_SECS,
        )?;

        let openai = OpenAiSettings {
            api_key,
            model: get("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            base_url: get("OPENAI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_string()),
            timeout,
        };

        let pushover = match (get("PUSHOVER_TOKEN"), get("PUSHOVER_USER")) {
            (Some(token), Some(user)) => Some(PushoverSettings {
                token,
                user,
                url: get("PUSHOVER_URL").unwrap_or_else(|| DEFAULT_PUSHOVER_URL.to_string()),
                timeout: parse_timeout(
                    get("NOTIFY_TIMEOUT_SECS"),
                    "NOTIFY_TIMEOUT_SECS",
                    DEFAULT_NOTIFY_TIMEOUT_SECS,
                )?,
            }),
            _ => None,
        };

        let defaults = PersonaSettings::default();
        let persona = PersonaSettings {
            name: get("PERSONA_NAME").unwrap_or(defaults.name),
            dir: get("PERSONA_DIR").map(PathBuf::from).unwrap_or(defaults.dir),
            summary_file: get("PERSONA_SUMMARY_FILE").unwrap_or(defaults.summary_file),
            documents: get("PERSONA_DOCUMENTS")
                .map(|list| parse_documents(&list))
                .unwrap_or(defaults.documents),
        };

        if persona.documents.is_empty() {
            return Err(DomainError::Configuration(
                "PERSONA_DOCUMENTS must name at least one document".to_string(),
            ));
        }

        let max_tool_rounds = parse_or(
            get("MAX_TOOL_ROUNDS"),
            "MAX_TOOL_ROUNDS",
            DEFAULT_MAX_TOOL_ROUNDS,
        )?;
        if max_tool_rounds == 0 {
            return Err(DomainError::Configuration(
                "MAX_TOOL_ROUNDS must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            openai,
            pushover,
            persona,
            max_tool_rounds,
            api_key: get("ALTEREGO_API_KEY"),
        })
    }
}

fn parse_or<T: std::str::FromStr>(
    value: Option<String>,
    key: &str,
    default: T,
) -> Result<T, DomainError> {
    match value {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| DomainError::Configuration(format!("{key} has an invalid value: {raw}"))),
        None => Ok(default),
    }
}

/// Whole seconds, at least one
fn parse_timeout(value: Option<String>, key: &str, default: u64) -> Result<Duration, DomainError> {
    match parse_or(value, key, default)? {
        0 => Err(DomainError::Configuration(format!("{key} must be at least 1"))),
        secs => Ok(Duration::from_secs(secs)),
    }
}

/// Parse `Label=file,Label=file`. Entries without a label use the file name.
fn parse_documents(list: &str) -> Vec<(String, String)> {
    list.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| match entry.split_once('=') {
            Some((label, file)) => (label.trim().to_string(), file.trim().to_string()),
            None => (entry.to_string(), entry.to_string()),
        })
        .collect()
}
