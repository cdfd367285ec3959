//! List-classes command implementation.

use crate::api::{ApiClient, Class};
use crate::error::Result;
use crate::ui::{Table, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The list-classes command implementation.
pub struct ListClassesCommand<'a> {
    client: &'a ApiClient,
}

impl<'a> ListClassesCommand<'a> {
    /// Create a new list-classes command.
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }
}

/// Render the classes table.
pub fn classes_table(classes: &[Class]) -> Table {
    let mut table = Table::new(&[("Class Name", 40), ("Class ID", 4)], 60);
    for class in classes {
        table.add_row(vec![class.name.as_str(), class.id.as_str()]);
    }
    table
}

impl Command for ListClassesCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let classes = self.client.list_classes()?;

        ui.message("");
        for line in classes_table(&classes).lines() {
            ui.message(&line);
        }

        Ok(CommandResult::success())
    }
}
