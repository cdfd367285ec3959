//! Enroll command implementation.
//!
//! The `strigo enroll` command enrolls students into an on-demand class,
//! one request per email. Emails given with `--email` come first, followed
//! by the lines of `--studentfile`. The first failed enrollment stops the
//! batch; students enrolled before it stay enrolled.

use crate::api::ApiClient;
use crate::cli::args::EnrollArgs;
use crate::error::{Result, StrigoError};
use crate::roster;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The enroll command implementation.
pub struct EnrollCommand<'a> {
    client: &'a ApiClient,
    args: EnrollArgs,
}

impl<'a> EnrollCommand<'a> {
    /// Create a new enroll command.
    pub fn new(client: &'a ApiClient, args: EnrollArgs) -> Self {
        Self { client, args }
    }

    /// Collect target emails: explicit emails first, then student file lines.
    pub fn targets(&self) -> Result<Vec<String>> {
        if self.args.emails.is_empty() && self.args.student_file.is_none() {
            return Err(StrigoError::Usage {
                message: "must provide --email and/or --studentfile".to_string(),
            });
        }

        let mut targets = self.args.emails.clone();
        if let Some(path) = &self.args.student_file {
            targets.extend(roster::read_student_file(path)?);
        }
        Ok(targets)
    }
}

impl Command for EnrollCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let targets = self.targets()?;
        tracing::debug!(
            "Enrolling {} students into {}",
            targets.len(),
            self.args.class_id
        );

        for email in &targets {
            let enrollment = self.client.enroll(&self.args.class_id, email)?;
            ui.message(&format!("{}: {}", enrollment.email, enrollment.status));
        }

        Ok(CommandResult::success())
    }
}
