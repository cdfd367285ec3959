//! Create-event command implementation.
//!
//! The `strigo create-event` command schedules a new event from a class and
//! prints its link (and join token when the event is public).

use crate::api::{ApiClient, CreateEventRequest};
use crate::cli::args::CreateEventArgs;
use crate::error::Result;
use crate::roster;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The create-event command implementation.
pub struct CreateEventCommand<'a> {
    client: &'a ApiClient,
    args: CreateEventArgs,
}

impl<'a> CreateEventCommand<'a> {
    /// Create a new create-event command.
    pub fn new(client: &'a ApiClient, args: CreateEventArgs) -> Self {
        Self { client, args }
    }

    /// Build the request body, reading the student file if one was given.
    pub fn request(&self) -> Result<CreateEventRequest> {
        let args = &self.args;

        Ok(CreateEventRequest {
            name: args.name.clone(),
            owner: args.owner.clone(),
            class_id: args.class_id.clone(),
            description: args.description.clone(),
            date_start: args.start.clone(),
            date_end: args.end.clone(),
            include_chat: args.chat,
            include_video: args.video,
            use_new_console: args.new_console,
            tas: (!args.tas.is_empty()).then(|| args.tas.clone()),
            trainees: roster::read_optional(args.student_file.as_deref())?,
        })
    }
}

impl Command for CreateEventCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let request = self.request()?;
        let event = self.client.create_event(&request)?;

        ui.message(&format!("{}: {}", event.name, event.event_link));
        if event.is_public() {
            ui.message(&format!("Token: {}", event.token.as_deref().unwrap_or_default()));
        }

        Ok(CommandResult::success())
    }
}
