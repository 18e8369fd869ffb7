//! CLI argument definitions.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Cineshelf - flat-file movie catalog manager
#[derive(Parser, Debug)]
#[command(name = "cineshelf")]
#[command(about = "Flat-file movie catalog manager with OMDb lookups and site generation", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Catalog file format
    #[arg(long, value_enum, default_value_t = StorageFormat::Json)]
    pub storage: StorageFormat,

    /// Catalog file path (defaults to storage.json or storage.csv)
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Catalog file format options
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum StorageFormat {
    /// JSON array file
    Json,
    /// Comma-separated text file with a header row
    Csv,
}

impl StorageFormat {
    /// Default catalog path for the format.
    pub fn default_path(&self) -> PathBuf {
        match self {
            StorageFormat::Json => PathBuf::from("storage.json"),
            StorageFormat::Csv => PathBuf::from("storage.csv"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_json_storage() {
        let cli = Cli::parse_from(["cineshelf"]);
        assert_eq!(cli.storage, StorageFormat::Json);
        assert!(cli.file.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_parses_csv_with_custom_file() {
        let cli = Cli::parse_from([
            "cineshelf",
            "--storage",
            "csv",
            "--file",
            "movies.csv",
            "--verbose",
        ]);
        assert_eq!(cli.storage, StorageFormat::Csv);
        assert_eq!(cli.file.unwrap(), PathBuf::from("movies.csv"));
        assert!(cli.verbose);
    }

    #[test]
    fn test_default_paths_per_format() {
        assert_eq!(
            StorageFormat::Json.default_path(),
            PathBuf::from("storage.json")
        );
        assert_eq!(
            StorageFormat::Csv.default_path(),
            PathBuf::from("storage.csv")
        );
    }
}
