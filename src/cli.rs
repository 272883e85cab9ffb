use std::path::PathBuf;

use clap::Parser;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "projy",
    version,
    about = "Create a starter project layout for a language"
)]
pub struct Cli {
    /// Template to generate (see --list).
    #[arg(required_unless_present = "list")]
    pub template: Option<String>,
    /// Destination directory; its final component becomes the project name.
    #[arg(required_unless_present = "list")]
    pub path: Option<PathBuf>,
    /// Print the supported templates and exit.
    #[arg(short = 'l', long = "list", conflicts_with_all = ["template", "path"])]
    pub list: bool,
    /// Show the planned steps without writing anything.
    #[arg(short = 'n', long = "dry-run")]
    pub dry_run: bool,
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,
    /// Leave a partially generated project on disk after a failure.
    #[arg(long = "keep-partial")]
    pub keep_partial: bool,
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Helper entry point so `main` can stay minimal.
pub fn parse() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn template_and_path_are_positional() {
        let cli = Cli::try_parse_from(["projy", "rust", "/tmp/proj"]).unwrap();
        assert_eq!(cli.template.as_deref(), Some("rust"));
        assert_eq!(cli.path, Some(PathBuf::from("/tmp/proj")));
        assert!(!cli.dry_run);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn wrong_argument_count_is_rejected() {
        let err = Cli::try_parse_from(["projy", "rust"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);

        let err = Cli::try_parse_from(["projy", "rust", "a", "b"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn list_stands_alone() {
        let cli = Cli::try_parse_from(["projy", "--list"]).unwrap();
        assert!(cli.list);
        assert!(cli.template.is_none());

        assert!(Cli::try_parse_from(["projy", "--list", "rust", "x"]).is_err());
    }

    #[test]
    fn flags_parse() {
        let cli = Cli::try_parse_from([
            "projy",
            "-n",
            "-vv",
            "--keep-partial",
            "--config",
            "cfg.toml",
            "go",
            "svc",
        ])
        .unwrap();
        assert!(cli.dry_run);
        assert!(cli.keep_partial);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("cfg.toml")));
    }
}
