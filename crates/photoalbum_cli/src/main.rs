//! `photoalbum` command-line entry point.
//!
//! # Responsibility
//! - Parse arguments, open the catalog snapshot and run one command.
//! - Report command failures through the log as well as stderr.
//!
//! # Invariants
//! - Mutating commands persist through `PhotoLibrary`; nothing here writes
//!   the snapshot directly.

mod commands;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::error;
use photoalbum_core::{
    init_logging, FileSnapshotStore, LogConfig, LogLevel, PhotoLibrary, StorageConfig,
};

/// Photo album catalog: albums, captioned photos and tags
#[derive(Parser)]
#[command(name = "photoalbum", version, about)]
struct Cli {
    /// Directory holding the catalog snapshot
    #[arg(long, env = "PHOTOALBUM_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Log level: trace, debug, info, warn or error
    #[arg(long)]
    log_level: Option<String>,

    /// Directory for rolling log files (default: <data-dir>/logs)
    #[arg(long)]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage albums
    Album {
        #[command(subcommand)]
        action: AlbumAction,
    },
    /// Manage photos inside an album
    Photo {
        #[command(subcommand)]
        action: PhotoAction,
    },
    /// Add or remove photo tags
    Tag {
        #[command(subcommand)]
        action: TagAction,
    },
    /// Find photos whose tag values contain a person or location term
    Search {
        /// Person substring to look for in any tag value
        #[arg(long, default_value = "")]
        person: String,
        /// Location substring to look for in any tag value
        #[arg(long, default_value = "")]
        location: String,
    },
}

#[derive(Subcommand)]
enum AlbumAction {
    /// List albums with their photo counts
    List,
    /// Create an empty album
    Add { name: String },
    /// Delete an album and its photos
    Rm { name: String },
    /// Rename an album
    Rename { old_name: String, new_name: String },
}

#[derive(Subcommand)]
enum PhotoAction {
    /// List photos of an album
    List { album: String },
    /// Add an image file to an album
    Add {
        album: String,
        /// Image file to read
        file: PathBuf,
        /// Caption (default: the file name)
        #[arg(long)]
        caption: Option<String>,
    },
    /// Remove a photo from an album
    Rm { album: String, caption: String },
    /// Change a photo's caption
    Rename {
        album: String,
        caption: String,
        new_caption: String,
    },
    /// Copy a photo into another album
    Copy {
        from: String,
        caption: String,
        to: String,
    },
    /// Move a photo into another album
    Move {
        from: String,
        caption: String,
        to: String,
    },
}

#[derive(Subcommand)]
enum TagAction {
    /// Attach a `key=value` tag to a photo
    Add {
        album: String,
        caption: String,
        key: String,
        value: String,
    },
    /// Detach a tag from a photo
    Rm {
        album: String,
        caption: String,
        key: String,
        value: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let storage = match &cli.data_dir {
        Some(dir) => StorageConfig::new(dir),
        None => StorageConfig::from_env(),
    };

    start_logging(&cli, &storage.data_dir);

    let snapshot_path = storage.snapshot_path();
    let mut library = PhotoLibrary::open(FileSnapshotStore::new(&snapshot_path))
        .with_context(|| format!("failed to open catalog at {}", snapshot_path.display()))
        .inspect_err(|err| {
            error!("event=library_open module=cli status=error error={err:#}");
        })?;

    let event = cli.command.event_name();
    run(cli.command, &mut library).inspect_err(|err| {
        error!("event={event} module=cli status=error error={err:#}");
    })
}

impl Commands {
    /// Event name used in log lines for this command.
    fn event_name(&self) -> &'static str {
        match self {
            Self::Album { action } => match action {
                AlbumAction::List => "album_list",
                AlbumAction::Add { .. } => "album_add",
                AlbumAction::Rm { .. } => "album_remove",
                AlbumAction::Rename { .. } => "album_rename",
            },
            Self::Photo { action } => match action {
                PhotoAction::List { .. } => "photo_list",
                PhotoAction::Add { .. } => "photo_add",
                PhotoAction::Rm { .. } => "photo_remove",
                PhotoAction::Rename { .. } => "photo_rename",
                PhotoAction::Copy { .. } => "photo_copy",
                PhotoAction::Move { .. } => "photo_move",
            },
            Self::Tag { action } => match action {
                TagAction::Add { .. } => "tag_add",
                TagAction::Rm { .. } => "tag_remove",
            },
            Self::Search { .. } => "search",
        }
    }
}

fn run(command: Commands, library: &mut PhotoLibrary<FileSnapshotStore>) -> Result<()> {
    match command {
        Commands::Album { action } => match action {
            AlbumAction::List => commands::album::list(library),
            AlbumAction::Add { name } => commands::album::add(library, &name)?,
            AlbumAction::Rm { name } => commands::album::remove(library, &name)?,
            AlbumAction::Rename { old_name, new_name } => {
                commands::album::rename(library, &old_name, &new_name)?
            }
        },
        Commands::Photo { action } => match action {
            PhotoAction::List { album } => commands::photo::list(library, &album)?,
            PhotoAction::Add {
                album,
                file,
                caption,
            } => commands::photo::add(library, &album, &file, caption)?,
            PhotoAction::Rm { album, caption } => {
                commands::photo::remove(library, &album, &caption)?
            }
            PhotoAction::Rename {
                album,
                caption,
                new_caption,
            } => commands::photo::rename(library, &album, &caption, &new_caption)?,
            PhotoAction::Copy { from, caption, to } => {
                commands::photo::copy(library, &from, &caption, &to)?
            }
            PhotoAction::Move { from, caption, to } => {
                commands::photo::relocate(library, &from, &caption, &to)?
            }
        },
        Commands::Tag { action } => match action {
            TagAction::Add {
                album,
                caption,
                key,
                value,
            } => commands::tag::add(library, &album, &caption, &key, &value)?,
            TagAction::Rm {
                album,
                caption,
                key,
                value,
            } => commands::tag::remove(library, &album, &caption, &key, &value)?,
        },
        Commands::Search { person, location } => {
            commands::search::run(library, &person, &location)
        }
    }

    Ok(())
}

/// Logging is best effort; the catalog stays usable without it.
fn start_logging(cli: &Cli, data_dir: &Path) {
    let level = match cli.log_level.as_deref().map(str::parse::<LogLevel>) {
        Some(Ok(level)) => level,
        Some(Err(err)) => {
            eprintln!("warning: {err}; using default level");
            LogLevel::build_default()
        }
        None => LogLevel::build_default(),
    };
    let log_dir = cli
        .log_dir
        .clone()
        .unwrap_or_else(|| data_dir.join("logs"));
    let log_dir = match std::env::current_dir() {
        Ok(cwd) if log_dir.is_relative() => cwd.join(log_dir),
        _ => log_dir,
    };

    if let Err(err) = init_logging(&LogConfig::new(level, log_dir)) {
        eprintln!("warning: logging disabled: {err}");
    }
}
