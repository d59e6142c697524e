use std::{env, fs, path::Path, time::Duration};

use crate::{domain::ChatId, errors::Error, Result};

const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";
const DEFAULT_POLL_INTERVAL_SECS: u64 = 600;

/// Typed configuration for the bot.
///
/// Built once at startup and passed by reference into each component; no
/// ambient global state.
#[derive(Clone, Debug)]
pub struct Config {
    // Credentials
    pub practicum_token: String,
    pub telegram_bot_token: String,
    pub telegram_chat_id: ChatId,

    // Polling
    pub endpoint: String,
    pub poll_interval: Duration,
}

impl Config {
    /// Load configuration from the environment (plus `.env` if present).
    ///
    /// A missing credential is a hard startup error: a monitor that cannot
    /// reach its API or its chat has nothing useful to do.
    pub fn load() -> Result<Self> {
        load_dotenv_if_present(Path::new(".env"));

        let practicum_token = require_env("PRACTICUM_TOKEN")?;
        let telegram_bot_token = require_env("TELEGRAM_BOT_TOKEN")?;
        let telegram_chat_id = require_env("TELEGRAM_CHAT_ID")?
            .trim()
            .parse::<i64>()
            .map(ChatId)
            .map_err(|_| Error::Config("TELEGRAM_CHAT_ID must be a numeric chat id".to_string()))?;

        let endpoint = env_str("PRACTICUM_ENDPOINT")
            .and_then(non_empty)
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        let poll_interval = Duration::from_secs(
            env_u64("POLL_INTERVAL_SECS").unwrap_or(DEFAULT_POLL_INTERVAL_SECS),
        );

        Ok(Self {
            practicum_token,
            telegram_bot_token,
            telegram_chat_id,
            endpoint,
            poll_interval,
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    env_str(key)
        .and_then(non_empty)
        .ok_or_else(|| Error::Config(format!("{key} environment variable is required")))
}

fn env_str(key: &str) -> Option<String> {
    env::var(key).ok()
}

fn load_dotenv_if_present(path: &Path) {
    let Ok(contents) = fs::read_to_string(path) else {
        return;
    };

    for raw in contents.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((k, v)) = line.split_once('=') else {
            continue;
        };

        let key = k.trim();
        if key.is_empty() {
            continue;
        }
        if env::var_os(key).is_some() {
            continue; // do not override existing env
        }

        let mut val = v.trim().to_string();
        // Strip optional surrounding quotes.
        if val.len() >= 2
            && ((val.starts_with('"') && val.ends_with('"'))
                || (val.starts_with('\'') && val.ends_with('\'')))
        {
            val = val[1..val.len() - 1].to_string();
        }

        env::set_var(key, val);
    }
}

fn env_u64(key: &str) -> Option<u64> {
    env_str(key).and_then(|s| s.trim().parse::<u64>().ok())
}

fn non_empty(s: String) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}
