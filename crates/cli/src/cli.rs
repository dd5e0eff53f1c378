//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use campusfix_core::{Category, Priority, Status};

/// Campus maintenance complaint tracker.
#[derive(Parser, Debug)]
#[command(name = "campusfix", version, about)]
pub struct Cli {
    /// Directory for durable state.
    #[arg(long, env = "CAMPUSFIX_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// File a new complaint.
    Report {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: String,
        #[arg(long)]
        location: String,
        /// Electricity, Water, Cleanliness, or Other.
        #[arg(long)]
        category: Category,
        /// Low, Medium, High, or Critical.
        #[arg(long, default_value = "Medium")]
        priority: Priority,
        #[arg(long)]
        image_url: Option<String>,
    },

    /// List complaints, newest first, with reminder state.
    List {
        /// Only show complaints with this status.
        #[arg(long)]
        status: Option<Status>,
    },

    /// Show a single complaint with its reminder state.
    Show { id: String },

    /// Move a pending complaint to In Progress (admin action).
    Assign {
        id: String,
        /// Assignee label; defaults to the generic maintenance label.
        #[arg(long)]
        to: Option<String>,
    },

    /// Mark an in-progress complaint resolved (admin action).
    Resolve { id: String },

    /// Nudge the admin about a pending complaint.
    Remind { id: String },

    /// Nudge the admin to chase maintenance on an assigned complaint.
    RemindMaintenance { id: String },

    /// List complaints that are due a nudge on either track.
    Due,
}
