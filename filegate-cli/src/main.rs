// SPDX-License-Identifier: AGPL-3.0-or-later
//! Filegate CLI
//!
//! Exercises the native gateway: directory enumeration with content-type
//! and extension filters, volume listing, metadata queries, and the thin
//! copy/move/delete wrappers.

mod commands;

use clap::{Parser, Subcommand};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "fgate")]
#[command(author, version, about = "Filegate - cross-platform file system gateway", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List directory contents
    #[command(alias = "dir")]
    Ls {
        /// Directory to list (defaults to current directory)
        #[arg(default_value = ".")]
        path: String,

        /// Only list files
        #[arg(short, long, conflicts_with = "dirs_only")]
        files_only: bool,

        /// Only list directories
        #[arg(short, long)]
        dirs_only: bool,

        /// ';'-delimited extension filter, applied to files (e.g. "jpg;png")
        #[arg(short = 'F', long, default_value = "")]
        filter: String,

        /// Human-readable sizes
        #[arg(short = 'H', long)]
        human: bool,
    },

    /// List writable mounted volumes
    Volumes {
        /// Human-readable sizes
        #[arg(short = 'H', long)]
        human: bool,
    },

    /// Show normalized metadata for one path
    Stat {
        /// Path to inspect
        path: String,

        /// Emit JSON instead of a table
        #[arg(short, long)]
        json: bool,
    },

    /// Copy a file or directory
    Cp {
        /// Source path
        source: String,

        /// Destination path
        dest: String,

        /// Force overwrite of an existing destination
        #[arg(short, long)]
        force: bool,
    },

    /// Move a directory
    Mv {
        /// Source directory
        source: String,

        /// Destination path (must not exist)
        dest: String,
    },

    /// Remove files or directories
    Rm {
        /// Path(s) to remove
        #[arg(required = true)]
        paths: Vec<String>,

        /// Delete permanently instead of moving to the trash
        #[arg(short, long)]
        permanent: bool,
    },

    /// Fetch a remote resource and print it
    Fetch {
        /// URL to fetch
        url: String,

        /// Treat the response as binary and print its length only
        #[arg(short, long)]
        binary: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(std::io::stderr)
            .init();
    }

    let result = match cli.command {
        Commands::Ls { path, files_only, dirs_only, filter, human } => {
            commands::ls(&path, files_only, dirs_only, &filter, human)
        }
        Commands::Volumes { human } => commands::volumes(human),
        Commands::Stat { path, json } => commands::stat(&path, json),
        Commands::Cp { source, dest, force } => commands::cp(&source, &dest, force),
        Commands::Mv { source, dest } => commands::mv(&source, &dest),
        Commands::Rm { paths, permanent } => commands::rm(&paths, permanent),
        Commands::Fetch { url, binary } => commands::fetch(&url, binary),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {}", console::style("error:").red().bold(), err);
            ExitCode::FAILURE
        }
    }
}
