//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::config::{API_URL_VAR, DEFAULT_BASE_URL};

/// Manage Strigo events, classes, and enrollments.
#[derive(Debug, Parser)]
#[command(name = "strigo")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Base URL of the Strigo API
    #[arg(long, global = true, env = API_URL_VAR, default_value = DEFAULT_BASE_URL)]
    pub api_url: String,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new event from a class
    CreateEvent(CreateEventArgs),

    /// Replace the trainee list of an event
    ModifyEvent(ModifyEventArgs),

    /// List upcoming and live events
    ListEvents(ListEventsArgs),

    /// Show details of an event
    GetEvent(GetEventArgs),

    /// Delete an event
    DeleteEvent(DeleteEventArgs),

    /// Enroll students into an on-demand class
    Enroll(EnrollArgs),

    /// List classes
    ListClasses,

    /// Show details of a class
    GetClass(GetClassArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `create-event` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CreateEventArgs {
    /// Event name
    #[arg(short, long)]
    pub name: String,

    /// Event owner's email address
    #[arg(short, long, value_name = "EMAIL")]
    pub owner: String,

    /// ID of class to use
    #[arg(short = 'c', long = "classid", value_name = "CLASS_ID")]
    pub class_id: String,

    /// Optional event description
    #[arg(short, long)]
    pub description: Option<String>,

    /// Start date/time (ex: 2019-01-28T09:00-05:00)
    #[arg(short, long, value_name = "DATETIME")]
    pub start: String,

    /// End date/time (ex: 2019-01-28T17:00-05:00)
    #[arg(short, long, value_name = "DATETIME")]
    pub end: String,

    /// Enable chat
    #[arg(long)]
    pub chat: bool,

    /// Enable video
    #[arg(long)]
    pub video: bool,

    /// Use new console (beta)
    #[arg(long = "newconsole")]
    pub new_console: bool,

    /// Teaching assistant email. Can use multiple times
    #[arg(short = 't', long = "ta", value_name = "EMAIL")]
    pub tas: Vec<String>,

    /// File containing student emails (one per line)
    #[arg(short = 'f', long = "studentfile", value_name = "FILE")]
    pub student_file: Option<PathBuf>,
}

/// Arguments for the `modify-event` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ModifyEventArgs {
    /// Event ID
    pub event_id: String,

    /// File containing student emails (one per line)
    #[arg(short = 'f', long = "studentfile", value_name = "FILE")]
    pub student_file: Option<PathBuf>,
}

/// Arguments for the `list-events` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListEventsArgs {
    /// Show all events, including completed
    #[arg(short, long)]
    pub all: bool,
}

/// Arguments for the `get-event` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct GetEventArgs {
    /// Event ID
    pub event_id: String,
}

/// Arguments for the `delete-event` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct DeleteEventArgs {
    /// Event ID
    pub event_id: String,
}

/// Arguments for the `enroll` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct EnrollArgs {
    /// ID of class to use
    #[arg(short = 'c', long = "classid", value_name = "CLASS_ID")]
    pub class_id: String,

    /// Student email address. Can use multiple times
    #[arg(short = 'e', long = "email", value_name = "EMAIL")]
    pub emails: Vec<String>,

    /// File containing student emails (one per line)
    #[arg(short = 'f', long = "studentfile", value_name = "FILE")]
    pub student_file: Option<PathBuf>,
}

/// Arguments for the `get-class` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct GetClassArgs {
    /// Class ID
    pub class_id: String,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
