use std::path::PathBuf;

use clap::Parser;

/// Pipeweaver: desktop window for the Pipeweaver audio daemon.
#[derive(Parser, Debug)]
#[command(name = "pipeweaver-app", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Print the effective configuration as JSON and exit.
    #[arg(long)]
    pub print_config: bool,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_uses_defaults() {
        let args = Args::try_parse_from(["pipeweaver-app"]).unwrap();
        assert!(args.config.is_none());
        assert!(args.log_level.is_none());
        assert!(!args.print_config);
    }

    #[test]
    fn overrides_are_parsed() {
        let args = Args::try_parse_from([
            "pipeweaver-app",
            "--config",
            "/tmp/shell.toml",
            "--log-level",
            "pipeweaver=debug",
        ])
        .unwrap();
        assert_eq!(args.config, Some(PathBuf::from("/tmp/shell.toml")));
        assert_eq!(args.log_level.as_deref(), Some("pipeweaver=debug"));
    }

    #[test]
    fn print_config_is_a_flag() {
        let args = Args::try_parse_from(["pipeweaver-app", "--print-config"]).unwrap();
        assert!(args.print_config);
    }
}
