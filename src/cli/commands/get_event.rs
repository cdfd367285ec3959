//! Get-event command implementation.
//!
//! The `strigo get-event` command prints a labeled report for one event.
//! The class name and TA emails are resolved with two follow-up requests.

use crate::api::{ApiClient, Class, Event, Member};
use crate::cli::args::GetEventArgs;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Width of the label column in reports.
pub const LABEL_WIDTH: usize = 11;

/// Format a `Label:     value` report line.
pub fn labeled(label: &str, value: &str) -> String {
    format!("{:<width$}{}", format!("{}:", label), value, width = LABEL_WIDTH)
}

/// The get-event command implementation.
pub struct GetEventCommand<'a> {
    client: &'a ApiClient,
    args: GetEventArgs,
}

impl<'a> GetEventCommand<'a> {
    /// Create a new get-event command.
    pub fn new(client: &'a ApiClient, args: GetEventArgs) -> Self {
        Self { client, args }
    }
}

/// Emails of the members whose id is in `ta_ids`, in member-list order.
pub fn ta_emails<'m>(members: &'m [Member], ta_ids: &[String]) -> Vec<&'m str> {
    members
        .iter()
        .filter(|m| ta_ids.contains(&m.id))
        .map(|m| m.email.as_str())
        .collect()
}

/// Render the event report.
pub fn event_report(event: &Event, class: &Class, tas: &[&str]) -> Vec<String> {
    let mut lines = vec![
        labeled("Name", &event.name),
        labeled("ID", &event.id),
        labeled("Link", &event.event_link),
        labeled("Owner", &event.owner.email),
        labeled("Pub/Pri", &event.availability),
        labeled("Token", event.display_token()),
        labeled("Class", &format!("{} ({})", class.name, event.class_id)),
        labeled("Start", &event.date_start),
        labeled("End", &event.date_end),
        labeled("Status", &event.status),
        labeled("TAs", &tas.join(", ")),
        String::new(),
        "Students:".to_string(),
        "---------".to_string(),
    ];
    lines.extend(event.trainees.iter().cloned());
    lines
}

impl Command for GetEventCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let event = self.client.get_event(&self.args.event_id)?;
        let class = self.client.get_class(&event.class_id)?;
        let members = self.client.list_members()?;
        let tas = ta_emails(&members, &event.tas);

        for line in event_report(&event, &class, &tas) {
            ui.message(&line);
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Owner;
    use crate::cli::commands::test_support::{client_for, failure, success};
    use crate::error::StrigoError;
    use crate::ui::MockUI;
    use httpmock::prelude::*;
    use serde_json::json;

    fn member(id: &str, email: &str) -> Member {
        Member {
            id: id.into(),
            email: email.into(),
        }
    }

    #[test]
    fn labels_are_aligned() {
        assert_eq!(labeled("Name", "x"), "Name:      x");
        assert_eq!(labeled("Pub/Pri", "public"), "Pub/Pri:   public");
        assert_eq!(labeled("TAs", ""), "TAs:       ");
    }

    #[test]
    fn ta_emails_filters_members_in_member_order() {
        let members = vec![
            member("m1", "one@x.com"),
            member("m2", "two@x.com"),
            member("m3", "three@x.com"),
        ];
        let tas = vec!["m3".to_string(), "m1".to_string()];

        assert_eq!(ta_emails(&members, &tas), vec!["one@x.com", "three@x.com"]);
    }

    #[test]
    fn report_shows_na_token_for_private_event() {
        let event = Event {
            id: "ev1".into(),
            name: "K8s".into(),
            availability: "private".into(),
            token: Some("secret".into()),
            class_id: "cl1".into(),
            owner: Owner {
                email: "o@x.com".into(),
            },
            ..Default::default()
        };
        let class = Class {
            id: "cl1".into(),
            name: "Kubernetes".into(),
            ..Default::default()
        };

        let report = event_report(&event, &class, &[]);
        assert!(report.contains(&"Token:     n/a".to_string()));
        assert!(report.contains(&"Class:     Kubernetes (cl1)".to_string()));
        assert!(!report.iter().any(|l| l.contains("secret")));
    }

    #[test]
    fn report_shows_token_for_public_event() {
        let event = Event {
            availability: "public".into(),
            token: Some("TOK".into()),
            ..Default::default()
        };

        let report = event_report(&event, &Class::default(), &[]);
        assert!(report.contains(&"Token:     TOK".to_string()));
    }

    #[test]
    fn prints_full_report() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/v1/events/ev1");
            then.status(200).json_body(success(json!({
                "id": "ev1",
                "name": "K8s 101",
                "owner": {"email": "owner@x.com"},
                "class_id": "cl1",
                "date_start": "2019-01-28T09:00-05:00",
                "date_end": "2019-01-28T17:00-05:00",
                "tas": ["m2", "m1"],
                "trainees": ["s1@x.com", "s2@x.com"],
                "availability": "public",
                "token": "TOK",
                "status": "ready",
                "event_link": "https://app.strigo.io/event/ev1"
            })));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/v1/classes/cl1");
            then.status(200)
                .json_body(success(json!({"id": "cl1", "name": "Kubernetes"})));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/v1/members");
            then.status(200).json_body(success(json!([
                {"id": "m1", "email": "ta1@x.com"},
                {"id": "m2", "email": "ta2@x.com"},
                {"id": "m3", "email": "other@x.com"}
            ])));
        });

        let client = client_for(&server);
        let mut ui = MockUI::new();
        GetEventCommand::new(
            &client,
            GetEventArgs {
                event_id: "ev1".into(),
            },
        )
        .execute(&mut ui)
        .unwrap();

        let expected = [
            "Name:      K8s 101",
            "ID:        ev1",
            "Link:      https://app.strigo.io/event/ev1",
            "Owner:     owner@x.com",
            "Pub/Pri:   public",
            "Token:     TOK",
            "Class:     Kubernetes (cl1)",
            "Start:     2019-01-28T09:00-05:00",
            "End:       2019-01-28T17:00-05:00",
            "Status:    ready",
            "TAs:       ta1@x.com, ta2@x.com",
            "",
            "Students:",
            "---------",
            "s1@x.com",
            "s2@x.com",
        ];
        assert_eq!(ui.messages(), expected.map(String::from).as_slice());
    }

    #[test]
    fn event_failure_skips_follow_up_requests() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/v1/events/ev1");
            then.status(404).json_body(failure("not found"));
        });
        let members = server.mock(|when, then| {
            when.method(GET).path("/api/v1/members");
            then.status(200).json_body(success(json!([])));
        });

        let client = client_for(&server);
        let mut ui = MockUI::new();
        let err = GetEventCommand::new(
            &client,
            GetEventArgs {
                event_id: "ev1".into(),
            },
        )
        .execute(&mut ui)
        .unwrap_err();

        assert!(matches!(err, StrigoError::Api { .. }));
        members.assert_calls(0);
        assert!(ui.messages().is_empty());
    }

    #[test]
    fn class_lookup_failure_is_checked() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/v1/events/ev1");
            then.status(200).json_body(success(
                json!({"id": "ev1", "name": "K8s", "class_id": "gone", "status": "ready"}),
            ));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/v1/classes/gone");
            then.status(200).json_body(failure("class not found"));
        });

        let client = client_for(&server);
        let mut ui = MockUI::new();
        let err = GetEventCommand::new(
            &client,
            GetEventArgs {
                event_id: "ev1".into(),
            },
        )
        .execute(&mut ui)
        .unwrap_err();

        match err {
            StrigoError::Api { body } => assert!(body.contains("class not found")),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(ui.messages().is_empty());
    }
}
