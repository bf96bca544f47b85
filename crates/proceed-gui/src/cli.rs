//! CLI arguments for the popup demo.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};

use proceed_gui::logging::LogFormat;

#[derive(Parser)]
#[command(
    name = "proceed-demo",
    version,
    about = "Demo window for queued proceed/cancel popups",
    long_about = "Opens a host window that raises sample questions, including questions\n\
                  asked from background threads, and shows them one at a time."
)]
pub struct Cli {
    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

    /// Log output format.
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Read settings from this file instead of the user config directory.
    #[arg(long = "settings", value_name = "PATH")]
    pub settings: Option<PathBuf>,

    /// Attach this file as the log of the first sample question.
    #[arg(long = "sample-log", value_name = "PATH")]
    pub sample_log: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(value: LogFormatArg) -> Self {
        match value {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::level_filters::LevelFilter;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["proceed-demo"]);
        assert_eq!(cli.verbosity.tracing_level_filter(), LevelFilter::INFO);
        assert!(cli.settings.is_none());
        assert!(cli.sample_log.is_none());
        assert_eq!(LogFormat::from(cli.log_format), LogFormat::Pretty);
    }

    #[test]
    fn test_paths_and_verbosity() {
        let cli = Cli::parse_from([
            "proceed-demo",
            "-v",
            "--settings",
            "popup.toml",
            "--sample-log",
            "job.log",
            "--log-format",
            "json",
        ]);
        assert_eq!(cli.verbosity.tracing_level_filter(), LevelFilter::DEBUG);
        assert_eq!(cli.settings, Some(PathBuf::from("popup.toml")));
        assert_eq!(cli.sample_log, Some(PathBuf::from("job.log")));
        assert_eq!(LogFormat::from(cli.log_format), LogFormat::Json);
    }
}
