//! command line interface

use crate::formats::ArchiveType;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "arcwalk",
    version,
    about = "arcwalk: list tar, tar.bz2, tar.gz, tar.xz and zip archives",
    long_about = "Walk the entries of tar, tar.bz2, tar.gz, tar.xz and zip archives, or identify an archive's type from its filename"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// verbose output (sizes in listings, debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// list archive contents
    #[command(alias = "l")]
    List {
        /// archive file to list
        archive: PathBuf,

        /// force archive type instead of guessing from the filename (tar, tar.bz2, tar.gz, tar.xz, zip)
        #[arg(short = 't', long = "type", value_parser = parse_type)]
        archive_type: Option<ArchiveType>,

        /// show an entry counter while walking
        #[arg(short = 'P', long)]
        progress: bool,
    },

    /// print the archive type implied by each filename
    #[command(alias = "t")]
    Type {
        /// file names to classify
        #[arg(required = true)]
        files: Vec<String>,
    },
}

/// Parse a type name into ArchiveType
fn parse_type(s: &str) -> Result<ArchiveType, String> {
    s.parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list_with_type() {
        let cli = Cli::parse_from(["arcwalk", "list", "-t", "tgz", "backup.bin"]);
        match cli.command {
            Commands::List {
                archive,
                archive_type,
                progress,
            } => {
                assert_eq!(archive, PathBuf::from("backup.bin"));
                assert_eq!(archive_type, Some(ArchiveType::TarGz));
                assert!(!progress);
            }
            Commands::Type { .. } => panic!("expected list command"),
        }
    }

    #[test]
    fn test_parse_type_alias() {
        let cli = Cli::parse_from(["arcwalk", "-v", "t", "a.zip", "b.txz"]);
        assert!(cli.verbose);
        match cli.command {
            Commands::Type { files } => assert_eq!(files, ["a.zip", "b.txz"]),
            Commands::List { .. } => panic!("expected type command"),
        }
    }

    #[test]
    fn test_reject_unknown_type() {
        let result = Cli::try_parse_from(["arcwalk", "list", "--type", "rar", "x.rar"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_type_requires_files() {
        assert!(Cli::try_parse_from(["arcwalk", "type"]).is_err());
    }
}
