use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "esgen")]
#[command(about = "Terminal client for the ESGenerator ESRS reporting assistant")]
#[command(version)]
pub struct Args {
    /// Backend base URL (e.g., http://localhost:5000)
    #[arg(short = 'u', long, global = true)]
    pub base_url: Option<String>,

    /// Request timeout in seconds (0 disables the timeout)
    #[arg(long = "timeout", value_name = "SECS", global = true)]
    pub timeout_secs: Option<u64>,

    /// Suppress headers, hints and the progress spinner
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start an interactive chat session (default)
    Chat,
    /// Open the view served at a path (e.g., /, /editor, /reset-password/<token>)
    Open {
        /// Path to resolve
        #[arg(default_value = "/")]
        path: String,
    },
    /// List the views and their paths
    Routes,
    /// Show the resolved configuration
    Config {
        /// Write a config file with the default settings
        #[arg(long)]
        init: bool,
    },
    /// Interactively edit the backend settings
    Configure,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_defaults_to_none() {
        let args = Args::try_parse_from(["esgen"]).unwrap();
        assert!(args.command.is_none());
        assert!(args.base_url.is_none());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args =
            Args::try_parse_from(["esgen", "chat", "--base-url", "http://x.local", "--timeout", "5"])
                .unwrap();
        assert!(matches!(args.command, Some(Command::Chat)));
        assert_eq!(args.base_url.as_deref(), Some("http://x.local"));
        assert_eq!(args.timeout_secs, Some(5));
    }

    #[test]
    fn test_open_default_path() {
        let args = Args::try_parse_from(["esgen", "open"]).unwrap();
        match args.command {
            Some(Command::Open { path }) => assert_eq!(path, "/"),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_config_init_flag() {
        let args = Args::try_parse_from(["esgen", "config", "--init"]).unwrap();
        assert!(matches!(args.command, Some(Command::Config { init: true })));
    }
}
