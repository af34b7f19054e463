use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// CLI arguments for beautybot
#[derive(Parser, Debug)]
#[command(name = "beautybot")]
#[command(about = "Chat with the beauty advisor from the terminal")]
#[command(version)]
pub struct Cli {
    /// TOML configuration file (endpoint, system_prompt, greeting, ...)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Completion endpoint; overrides the configuration file
    #[arg(long, value_name = "URL", env = "BEAUTYBOT_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Read the system prompt from a file
    #[arg(long, value_name = "FILE")]
    pub system_prompt_file: Option<PathBuf>,

    /// Give up on a request after this many seconds (default: wait forever)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Drop a user message from the history when its request fails
    #[arg(long)]
    pub discard_failed_turns: bool,

    /// Increase log verbosity (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.timeout.map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["beautybot"]).unwrap();
        assert!(cli.config.is_none());
        assert!(cli.request_timeout().is_none());
        assert!(!cli.discard_failed_turns);
        assert_eq!(cli.log_filter(), "warn");
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from([
            "beautybot",
            "--config",
            "bot.toml",
            "--endpoint",
            "http://localhost:8787/",
            "--timeout",
            "30",
            "--discard-failed-turns",
            "-vv",
        ])
        .unwrap();

        assert_eq!(cli.config, Some(PathBuf::from("bot.toml")));
        assert_eq!(cli.endpoint.as_deref(), Some("http://localhost:8787/"));
        assert_eq!(cli.request_timeout(), Some(Duration::from_secs(30)));
        assert!(cli.discard_failed_turns);
        assert_eq!(cli.log_filter(), "debug");
    }

    #[test]
    fn test_timeout_must_be_a_number() {
        assert!(Cli::try_parse_from(["beautybot", "--timeout", "soon"]).is_err());
    }
}
