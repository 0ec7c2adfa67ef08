//! Runtime configuration: CLI flags with environment fallbacks.

use clap::{ArgAction, Parser};

/// Secret used when `SECRET_KEY` is not set. Insecure; override it.
pub const DEFAULT_SECRET_KEY: &str = "devops-test-secret-key";

/// Environment label used when neither `APP_ENV` nor `FLASK_ENV` is set
pub const DEFAULT_ENVIRONMENT: &str = "production";

#[derive(Parser, Debug, Clone)]
#[command(name = "devprobe-server")]
#[command(about = "Demo API with REST, SSE streaming and WebSocket chat", long_about = None)]
pub struct Config {
    /// Host address to bind the server to
    #[arg(short = 'H', long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, env = "PORT", default_value_t = 5000)]
    pub port: u16,

    /// Verbose logging
    #[arg(
        long,
        env = "DEBUG",
        action = ArgAction::Set,
        num_args = 0..=1,
        default_value = "false",
        default_missing_value = "true",
        value_parser = parse_flag,
    )]
    pub debug: bool,

    /// Session signing key (not used for signing yet, only carried)
    #[arg(long, env = "SECRET_KEY", default_value = DEFAULT_SECRET_KEY, hide_env_values = true)]
    pub secret_key: String,

    /// Environment label reported by /api/info (falls back to FLASK_ENV)
    #[arg(long, env = "APP_ENV")]
    pub environment: Option<String>,
}

impl Config {
    /// Environment label: `--environment` / `APP_ENV`, then `FLASK_ENV`, then "production"
    pub fn resolved_environment(&self) -> String {
        resolve_environment(
            self.environment.clone(),
            std::env::var("FLASK_ENV").ok(),
        )
    }

    pub fn uses_default_secret(&self) -> bool {
        self.secret_key == DEFAULT_SECRET_KEY
    }

    pub fn log_level(&self) -> &'static str {
        if self.debug { "debug" } else { "info" }
    }
}

fn resolve_environment(app_env: Option<String>, flask_env: Option<String>) -> String {
    app_env
        .filter(|value| !value.is_empty())
        .or(flask_env.filter(|value| !value.is_empty()))
        .unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string())
}

/// `true`, `1`, `yes` and `on` (any case) enable the flag; any other value
/// disables it, so a stray `DEBUG=2` never keeps the server from starting
fn parse_flag(value: &str) -> Result<bool, String> {
    Ok(matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "true" | "1" | "yes" | "on"
    ))
}
