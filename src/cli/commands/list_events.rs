//! List-events command implementation.
//!
//! The `strigo list-events` command prints events as a fixed-width table.
//! Only `ready` and `live` events are shown unless `--all` is given.

use crate::api::{ApiClient, Event};
use crate::cli::args::ListEventsArgs;
use crate::error::Result;
use crate::ui::{Table, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// Statuses shown without `--all`.
pub const ACTIVE_STATUSES: [&str; 2] = ["ready", "live"];

/// The list-events command implementation.
pub struct ListEventsCommand<'a> {
    client: &'a ApiClient,
    args: ListEventsArgs,
}

impl<'a> ListEventsCommand<'a> {
    /// Create a new list-events command.
    pub fn new(client: &'a ApiClient, args: ListEventsArgs) -> Self {
        Self { client, args }
    }
}

/// Keep only active events unless `all` is set. API order is preserved.
pub fn filter_events(events: &[Event], all: bool) -> Vec<&Event> {
    events
        .iter()
        .filter(|e| all || ACTIVE_STATUSES.contains(&e.status.as_str()))
        .collect()
}

/// Render the events table.
pub fn events_table(events: &[&Event]) -> Table {
    let mut table = Table::new(&[("Event Name", 80), ("Event ID", 30), ("Status", 30)], 100);
    for event in events {
        table.add_row(vec![event.name.as_str(), event.id.as_str(), event.status.as_str()]);
    }
    table
}

impl Command for ListEventsCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let events = self.client.list_events()?;
        let shown = filter_events(&events, self.args.all);
        tracing::debug!("Showing {} of {} events", shown.len(), events.len());

        ui.message("");
        for line in events_table(&shown).lines() {
            ui.message(&line);
        }

        Ok(CommandResult::success())
    }
}
