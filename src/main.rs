//! arcwalk - list archive contents and identify archive types

use arcwalk::{
    cli::{Cli, Commands},
    list,
    progress::Progress,
    utils, ArchiveType,
};
use clap::Parser;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_directive = if verbose { "arcwalk=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::List {
            archive,
            archive_type,
            progress,
        } => {
            let progress = Progress::new(progress);
            let listed = list::list(&archive, archive_type, Some(&progress));
            progress.finish();
            let entries = listed?;

            if cli.verbose {
                println!("listing contents of {}", archive.display());
            }

            for entry in entries {
                if cli.verbose {
                    println!(
                        "{}",
                        utils::format_entry_line(&entry.path, entry.size, entry.is_dir)
                    );
                } else {
                    println!("{}", entry.path);
                }
            }
        }

        Commands::Type { files } => {
            let mut unknown = 0usize;

            for file in &files {
                match arcwalk::determine_type(file) {
                    Ok(archive_type) => println!("{file}: {archive_type}"),
                    Err(e) => {
                        eprintln!("{file}: {e}");
                        unknown += 1;
                    }
                }
            }

            if unknown > 0 {
                anyhow::bail!(
                    "{unknown} of {} file(s) did not match a known archive type ({})",
                    files.len(),
                    supported_extensions()
                );
            }
        }
    }

    Ok(())
}

fn supported_extensions() -> String {
    ArchiveType::ALL
        .iter()
        .flat_map(|archive_type| archive_type.extensions().iter().copied())
        .collect::<Vec<_>>()
        .join(", ")
}
