//! Delete-event command implementation.

use crate::api::ApiClient;
use crate::cli::args::DeleteEventArgs;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The delete-event command implementation.
pub struct DeleteEventCommand<'a> {
    client: &'a ApiClient,
    args: DeleteEventArgs,
}

impl<'a> DeleteEventCommand<'a> {
    /// Create a new delete-event command.
    pub fn new(client: &'a ApiClient, args: DeleteEventArgs) -> Self {
        Self { client, args }
    }
}

impl Command for DeleteEventCommand<'_> {
    fn execute(&self, _ui: &mut dyn UserInterface) -> Result<CommandResult> {
        self.client.delete_event(&self.args.event_id)?;
        Ok(CommandResult::success())
    }
}
