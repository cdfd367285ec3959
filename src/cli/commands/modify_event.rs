//! Modify-event command implementation.
//!
//! The `strigo modify-event` command replaces an event's trainee list.

use crate::api::{ApiClient, ModifyEventRequest};
use crate::cli::args::ModifyEventArgs;
use crate::error::Result;
use crate::roster;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The modify-event command implementation.
pub struct ModifyEventCommand<'a> {
    client: &'a ApiClient,
    args: ModifyEventArgs,
}

impl<'a> ModifyEventCommand<'a> {
    /// Create a new modify-event command.
    pub fn new(client: &'a ApiClient, args: ModifyEventArgs) -> Self {
        Self { client, args }
    }
}

impl Command for ModifyEventCommand<'_> {
    fn execute(&self, _ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let request = ModifyEventRequest {
            trainees: roster::read_optional(self.args.student_file.as_deref())?,
        };

        self.client.modify_event(&self.args.event_id, &request)?;
        Ok(CommandResult::success())
    }
}
