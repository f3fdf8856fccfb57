use std::path::PathBuf;

use shelfmark_catalog::View;

#[derive(clap::Parser, Debug)]
#[clap(name = "shelfmark", about = "Manage your reading list from the terminal")]
pub struct Cli {
    /// Directory holding the reading-list file (defaults to the platform
    /// data directory)
    #[clap(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Add a book to the list
    Add {
        /// Book title
        title: String,
        /// Book author
        author: String,
    },
    /// List books, optionally filtered by view and search term
    List {
        /// Restrict to a read-status view
        #[clap(long, value_enum)]
        view: Option<ViewArg>,
        /// Keep only books whose title or author contains this text
        #[clap(long)]
        search: Option<String>,
    },
    /// Change the title and author of a book
    Update {
        /// Book id (shown by `list`)
        id: String,
        /// New title
        title: String,
        /// New author
        author: String,
    },
    /// Remove a book from the list
    Remove {
        /// Book id (shown by `list`)
        id: String,
        /// Skip confirmation prompt
        #[clap(long)]
        force: bool,
    },
    /// Mark a book as read, or as unread if already read
    Toggle {
        /// Book id (shown by `list`)
        id: String,
    },
    /// Remove every book from the list
    Clear {
        /// Skip confirmation prompt
        #[clap(long)]
        force: bool,
    },
    /// Show reading-list statistics
    Stats,
}

/// Read-status views accepted on the command line.
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
pub enum ViewArg {
    All,
    ToRead,
    Read,
}

impl From<ViewArg> for View {
    fn from(view: ViewArg) -> Self {
        match view {
            ViewArg::All => View::All,
            ViewArg::ToRead => View::ToRead,
            ViewArg::Read => View::Read,
        }
    }
}
