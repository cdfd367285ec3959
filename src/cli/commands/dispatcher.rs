//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use crate::api::ApiClient;
use crate::cli::args::{Cli, Commands};
use crate::config::ApiConfig;
use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] carrying the exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
///
/// Failures travel as errors, so a returned result always means success.
#[derive(Debug)]
pub struct CommandResult {
    /// Exit code to use.
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self { exit_code: 0 }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    api_url: String,
}

impl CommandDispatcher {
    /// Create a new dispatcher targeting the given API root.
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
        }
    }

    /// Get the API root this dispatcher connects to.
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Dispatch and execute a command.
    ///
    /// Credentials are only loaded for commands that call the API, so
    /// `completions` works without them.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if let Commands::Completions(args) = &cli.command {
            let cmd = super::completions::CompletionsCommand::new(args.clone());
            return cmd.execute(ui);
        }

        let config = ApiConfig::from_env(&self.api_url)?;
        let client = ApiClient::new(config)?;
        Self::dispatch_with_client(&cli.command, &client, ui)
    }

    /// Execute an API command with an existing client.
    pub fn dispatch_with_client(
        command: &Commands,
        client: &ApiClient,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        match command {
            Commands::CreateEvent(args) => {
                let cmd = super::create_event::CreateEventCommand::new(client, args.clone());
                cmd.execute(ui)
            }
            Commands::ModifyEvent(args) => {
                let cmd = super::modify_event::ModifyEventCommand::new(client, args.clone());
                cmd.execute(ui)
            }
            Commands::ListEvents(args) => {
                let cmd = super::list_events::ListEventsCommand::new(client, args.clone());
                cmd.execute(ui)
            }
            Commands::GetEvent(args) => {
                let cmd = super::get_event::GetEventCommand::new(client, args.clone());
                cmd.execute(ui)
            }
            Commands::DeleteEvent(args) => {
                let cmd = super::delete_event::DeleteEventCommand::new(client, args.clone());
                cmd.execute(ui)
            }
            Commands::Enroll(args) => {
                let cmd = super::enroll::EnrollCommand::new(client, args.clone());
                cmd.execute(ui)
            }
            Commands::ListClasses => {
                let cmd = super::list_classes::ListClassesCommand::new(client);
                cmd.execute(ui)
            }
            Commands::GetClass(args) => {
                let cmd = super::get_class::GetClassCommand::new(client, args.clone());
                cmd.execute(ui)
            }
            Commands::Completions(args) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
        }
    }
}
