//! Configuration resolution from CLI args

use crate::cli::Args;
use crate::error::CliError;
use crate::input::InputStore;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Resolved runtime configuration
pub struct Config {
    /// Year filter (None = all years)
    pub year_filter: Option<u16>,
    /// Day filter (None = all days)
    pub day_filter: Option<u8>,
    /// Part filter (None = all parts)
    pub part_filter: Option<u8>,
    /// Tags to filter solvers
    pub tags: Vec<String>,
    /// Input directory, or an explicit file
    pub input: InputStore,
    /// Quiet mode
    pub quiet: bool,
}

impl Config {
    /// Build config from CLI args
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        let input = match args.input {
            Some(file) => {
                if args.year.is_none() || args.day.is_none() {
                    return Err(CliError::Config(
                        "--input requires both --year and --day".to_string(),
                    ));
                }
                InputStore::File(expand_tilde(&file))
            }
            None => InputStore::Directory(expand_tilde(&args.input_dir)),
        };

        debug!(?input, "resolved input store");

        Ok(Config {
            year_filter: args.year,
            day_filter: args.day,
            part_filter: args.part,
            tags: args.tags,
            input,
            quiet: args.quiet,
        })
    }
}

/// Expand ~ to home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && let Some(rest) = path_str
            .strip_prefix("~/")
            .or_else(|| (path_str == "~").then_some(""))
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    path.to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn config(argv: &[&str]) -> Result<Config, CliError> {
        Config::from_args(Args::try_parse_from(argv).unwrap())
    }

    #[test]
    fn test_expand_tilde() {
        let Some(home) = dirs::home_dir() else {
            return;
        };
        assert_eq!(expand_tilde(Path::new("~/aoc/inputs")), home.join("aoc/inputs"));
        assert_eq!(expand_tilde(Path::new("~")), home);
        assert_eq!(expand_tilde(Path::new("inputs")), PathBuf::from("inputs"));
        assert_eq!(expand_tilde(Path::new("~user/x")), PathBuf::from("~user/x"));
    }

    #[test]
    fn test_default_directory_store() {
        let config = config(&["aoc"]).unwrap();
        assert_eq!(
            config.input.input_path(2020, 4),
            PathBuf::from("inputs/2020_day04.txt")
        );
        assert_eq!(config.year_filter, None);
    }

    #[test]
    fn test_explicit_input_file() {
        let config = config(&["aoc", "-y", "2020", "-d", "1", "--input", "day1.txt"]).unwrap();
        assert_eq!(config.input.input_path(2020, 1), PathBuf::from("day1.txt"));
        assert_eq!(config.year_filter, Some(2020));
        assert_eq!(config.day_filter, Some(1));
    }
}
