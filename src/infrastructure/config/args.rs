use super::app_config::LogLevel;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "md2img",
    version,
    about = "Turns image links in chat-bot responses into image attachments",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH", global = true)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum, global = true)]
    pub log_level: Option<LogLevel>,

    /// Hotlink registry (JSON object of domain label to site name).
    #[arg(long, value_name = "PATH", global = true)]
    pub hotlink_config: Option<PathBuf>,

    /// Image probe timeout in seconds.
    #[arg(long, value_name = "SECS", global = true)]
    pub probe_timeout: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Rewrite a bot response, read from the argument or stdin.
    Rewrite {
        /// Response text. Read from stdin when omitted.
        message: Option<String>,

        /// Output format.
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Report whether URLs belong to hotlink-protected sites.
    Check {
        /// URLs to check.
        #[arg(required = true)]
        urls: Vec<String>,
    },
}

/// How rewritten responses are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Text with image markers.
    #[default]
    Text,
    /// JSON segments.
    Json,
}
