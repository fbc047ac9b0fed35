// src/cli/args.rs
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
#[command(arg_required_else_help = true, disable_help_subcommand = true)]
pub struct Args {
    /// Path to config file (optional)
    #[arg(long, value_name = "CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Directory of the note store, overrides the config file (optional)
    #[arg(short, long, value_name = "DIR", global = true)]
    pub store: Option<PathBuf>,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List notes, newest first
    List {
        /// Only notes whose title, content or a tag contains this text
        #[arg(value_name = "SEARCH")]
        search: Option<String>,

        /// Output notes as JSON
        #[arg(long)]
        json: bool,
    },

    /// Create an empty note and print its ID
    New,

    /// Edit a note; fields not given keep their value
    Edit {
        /// Note ID to edit
        #[arg(value_name = "NOTE_ID")]
        note_id: String,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        content: Option<String>,

        /// Hex colour, e.g. #ffcc00
        #[arg(long)]
        colour: Option<String>,

        /// Tags separated by ", "
        #[arg(long)]
        tags: Option<String>,
    },

    /// Delete a note
    Delete {
        /// Note ID to delete
        #[arg(value_name = "NOTE_ID")]
        note_id: String,
    },

    /// Show a single note
    Show {
        /// Note ID to show
        #[arg(value_name = "NOTE_ID")]
        note_id: String,

        /// Output note as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the tag collection
    Tags {
        /// Print only tag names, one per line
        #[arg(long)]
        names: bool,
    },

    /// Open the notes as cards in the browser
    Render {
        /// Only notes whose title, content or a tag contains this text
        #[arg(value_name = "SEARCH")]
        search: Option<String>,
    },
}
