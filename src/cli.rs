//! CLI module - Command-line interface definitions and handlers

use anyhow::Result;
use clap::Parser;
use std::io;
use std::path::PathBuf;

use crate::core::config::{FileConfig, Overrides, Settings};
use crate::session::Session;

/// grocer - tally grocery items from a text file and explore the counts.
#[derive(Parser, Debug)]
#[command(name = "grocer")]
#[command(
    author,
    version,
    about,
    long_about = r#"grocer reads a whitespace-separated list of item names, counts how often
each item appears, writes the counts to a snapshot file and opens an
interactive menu.

Menu options:
1. Search item frequency (the first letter of the query is capitalized)
2. Print all item frequencies
3. Print histogram
4. Exit

The snapshot holds one "name count" line per item, sorted by name.

Examples:
    grocer items/CS210_Project_Three_Input_File.txt
    grocer --snapshot out/counts.dat list.txt
    grocer --no-snapshot
"#
)]
pub struct Cli {
    /// Input file with item names.
    #[arg(
        value_name = "FILE",
        long_help = "Input file with whitespace-separated item names.\n\n\
If omitted, grocer prompts for a file name and offers the default file.\n\
A file given here is not checked until it is loaded; if it cannot be\n\
opened grocer exits with status 1."
    )]
    pub file: Option<PathBuf>,

    /// Where to write the item counts snapshot.
    #[arg(
        long,
        env = "GROCER_SNAPSHOT",
        value_name = "PATH",
        long_help = "Where to write the item counts snapshot (defaults to items/frequency.dat).\n\n\
The file is overwritten on every run and its parent directory is created\n\
when missing. Failing to write it is reported as a warning only."
    )]
    pub snapshot: Option<PathBuf>,

    /// Do not write the snapshot file.
    #[arg(long, conflicts_with = "snapshot")]
    pub no_snapshot: bool,

    /// Input file used when the prompt is left blank.
    #[arg(
        long,
        env = "GROCER_DEFAULT_INPUT",
        value_name = "PATH",
        long_help = "Input file used when the file name prompt is left blank or the default\n\
option is chosen after a failed open (defaults to\n\
items/CS210_Project_Three_Input_File.txt)."
    )]
    pub default_input: Option<PathBuf>,

    /// Read settings from a TOML config file.
    #[arg(
        long,
        env = "GROCER_CONFIG",
        value_name = "PATH",
        long_help = "Read settings from a TOML config file.\n\n\
Supported keys:\n\
  [input]    default_path = \"...\"\n\
  [snapshot] path = \"...\", enabled = true|false\n\n\
Command-line flags and environment variables take precedence over the file."
    )]
    pub config: Option<PathBuf>,

    /// Quiet mode (errors only on stderr).
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode (debug diagnostics on stderr).
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Merge flags, the optional config file and defaults
    pub fn settings(&self) -> Result<Settings> {
        let file = self
            .config
            .as_deref()
            .map(FileConfig::from_file)
            .transpose()?;

        let overrides = Overrides {
            input: self.file.clone(),
            default_input: self.default_input.clone(),
            snapshot: self.snapshot.clone(),
            no_snapshot: self.no_snapshot,
        };

        Ok(Settings::resolve(overrides, file)?)
    }
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    let settings = cli.settings()?;
    tracing::debug!(?settings, "resolved settings");

    let stdin = io::stdin();
    let stdout = io::stdout();
    Session::new(stdin.lock(), stdout.lock(), settings).run()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::ffi::OsString;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_positional_file() {
        let cli = Cli::try_parse_from(["grocer", "list.txt"]).unwrap();
        assert_eq!(cli.file, Some(PathBuf::from("list.txt")));
        assert!(!cli.no_snapshot);
    }

    #[test]
    fn test_parse_no_arguments() {
        let cli = Cli::try_parse_from(["grocer"]).unwrap();
        assert_eq!(cli.file, None);
    }

    #[test]
    fn test_rejects_second_positional() {
        assert!(Cli::try_parse_from(["grocer", "a.txt", "b.txt"]).is_err());
    }

    #[test]
    fn test_no_snapshot_conflicts_with_snapshot() {
        assert!(Cli::try_parse_from(["grocer", "--no-snapshot", "--snapshot", "x.dat"]).is_err());
    }

    #[test]
    fn test_settings_from_flags() {
        let cli = Cli::try_parse_from([
            "grocer",
            "--snapshot",
            "out/counts.dat",
            "--default-input",
            "list.txt",
        ])
        .unwrap();

        let settings = cli.settings().unwrap();
        assert_eq!(settings.input, None);
        assert_eq!(settings.default_input, PathBuf::from("list.txt"));
        assert_eq!(settings.snapshot, Some(PathBuf::from("out/counts.dat")));
    }

    #[test]
    fn test_settings_missing_config_file() {
        let temp = tempfile::tempdir().unwrap();
        let missing = temp.path().join("grocer.toml");
        let cli = Cli::try_parse_from([
            OsString::from("grocer"),
            OsString::from("--config"),
            missing.into_os_string(),
        ])
        .unwrap();

        let err = cli.settings().unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
