//! Get-class command implementation.
//!
//! The `strigo get-class` command prints a class and its lab machines.

use crate::api::{ApiClient, Class};
use crate::cli::args::GetClassArgs;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::get_event::labeled;

/// The get-class command implementation.
pub struct GetClassCommand<'a> {
    client: &'a ApiClient,
    args: GetClassArgs,
}

impl<'a> GetClassCommand<'a> {
    /// Create a new get-class command.
    pub fn new(client: &'a ApiClient, args: GetClassArgs) -> Self {
        Self { client, args }
    }
}

/// Render the class report.
pub fn class_report(class: &Class) -> Vec<String> {
    let mut lines = vec![
        labeled("Name", &class.name),
        labeled("ID", &class.id),
        labeled("Owner", &class.owner.email),
        "Lab Instance:".to_string(),
    ];

    for resource in &class.resources {
        lines.push(format!("    Name: {}", resource.name));
        lines.push(format!("    Type: {}", resource.instance_type));
        lines.push(format!("    AMI: {}", resource.image_id));
        lines.push(format!("    User: {}", resource.image_user));
    }

    lines
}

impl Command for GetClassCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let class = self.client.get_class(&self.args.class_id)?;

        for line in class_report(&class) {
            ui.message(&line);
        }

        Ok(CommandResult::success())
    }
}
