use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::app_config::LogLevel;

#[derive(Debug, Parser)]
#[command(
    name = "analytica",
    version,
    about = "Terminal client for the ANALYSTIC.A dashboard",
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

    /// Backend base URL.
    #[arg(long, env = "ANALYTICA_BASE_URL", global = true)]
    pub base_url: Option<String>,

    /// Realtime channel URL.
    #[arg(long, env = "ANALYTICA_REALTIME_URL", global = true)]
    pub realtime_url: Option<String>,

    /// Session token sent as the `access_token` cookie.
    #[arg(long, env = "ANALYTICA_ACCESS_TOKEN", hide_env_values = true, global = true)]
    pub access_token: Option<String>,

    /// Reconnect the realtime channel after failures.
    #[arg(long, global = true)]
    pub reconnect: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show or change the dashboard theme.
    Theme {
        #[command(subcommand)]
        action: ThemeAction,
    },
    /// Load the indicator snapshot.
    Kpis,
    /// Ask the analytics assistant a question.
    Ask {
        /// Question text.
        question: Vec<String>,
    },
    /// Stream realtime updates until interrupted.
    Live {
        /// Receive without rendering messages.
        #[arg(long)]
        no_render: bool,
    },
    /// Open the mobile KPI screen.
    Mobile,
    /// Load theme and indicators, then stream realtime updates.
    Dashboard,
}

#[derive(Debug, Subcommand)]
pub enum ThemeAction {
    /// Print the theme that would be active now.
    Show,
    /// Advance to the next theme.
    Next,
    /// Apply and persist a theme by name.
    Set {
        /// Theme name.
        name: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ask_joins_words() {
        let args = CliArgs::parse_from(["analytica", "ask", "qual", "o", "lucro?"]);
        let Command::Ask { question } = args.command else {
            panic!("expected ask");
        };
        assert_eq!(question.join(" "), "qual o lucro?");
    }

    #[test]
    fn test_theme_set_accepts_any_name() {
        let args = CliArgs::parse_from(["analytica", "theme", "set", "sepia"]);
        assert!(matches!(
            args.command,
            Command::Theme {
                action: ThemeAction::Set { ref name }
            } if name == "sepia"
        ));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args = CliArgs::parse_from(["analytica", "live", "--no-render", "--reconnect"]);
        assert!(args.reconnect);
        assert!(matches!(args.command, Command::Live { no_render: true }));
    }
}
