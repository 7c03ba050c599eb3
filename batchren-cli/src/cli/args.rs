use clap::builder::FalseyValueParser;
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

use super::types::{OutputFormat, PreviewArg};

/// Batch-rename the files of a folder by prefix or literal find/replace
#[derive(Parser, Debug)]
#[command(name = "batchren")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Disable colored output
    #[arg(
        long,
        global = true,
        env = "NO_COLOR",
        action = ArgAction::SetTrue,
        value_parser = FalseyValueParser::new()
    )]
    pub no_color: bool,

    /// Run as if started in <path> instead of the current working directory
    #[arg(short = 'C', global = true, value_name = "PATH")]
    pub directory: Option<PathBuf>,

    /// Rename without asking for confirmation
    #[arg(
        short = 'y',
        long = "yes",
        global = true,
        env = "BATCHREN_YES",
        action = ArgAction::SetTrue,
        value_parser = FalseyValueParser::new()
    )]
    pub yes: bool,

    /// Log what happens to stderr. Repeat for more detail (-v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Folder selection shared by every command
#[derive(Args, Debug, Clone)]
pub struct FolderArg {
    /// Folder containing the files to rename
    #[arg(value_name = "DIR", env = "BATCHREN_DIR")]
    pub dir: Option<PathBuf>,
}

/// Flags shared by the renaming commands
#[derive(Args, Debug, Clone)]
pub struct BatchArgs {
    /// Show what would be renamed without touching any file
    #[arg(long)]
    pub dry_run: bool,

    /// Preview format for --dry-run
    #[arg(long, value_enum, default_value_t = PreviewArg::Table)]
    pub preview: PreviewArg,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Summary)]
    pub output: OutputFormat,

    /// Suppress the summary (errors are still reported)
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the files a batch in DIR would see
    List {
        #[command(flatten)]
        folder: FolderArg,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Summary)]
        output: OutputFormat,
    },

    /// Add text to the front of every file name in DIR
    Prepend {
        /// Text to add to the front of each file name
        #[arg(allow_hyphen_values = true)]
        text: String,

        #[command(flatten)]
        folder: FolderArg,

        #[command(flatten)]
        batch: BatchArgs,
    },

    /// Replace every occurrence of FIND with REPLACE_WITH in file names in DIR
    Replace {
        /// Literal text to search for in file names
        #[arg(allow_hyphen_values = true)]
        find: String,

        /// Replacement text (may be empty to delete FIND)
        #[arg(allow_hyphen_values = true)]
        replace_with: String,

        #[command(flatten)]
        folder: FolderArg,

        #[command(flatten)]
        batch: BatchArgs,
    },

    /// Show version information
    Version {
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Summary)]
        output: OutputFormat,
    },
}
