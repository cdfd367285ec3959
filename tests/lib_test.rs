//! Library integration tests.

use strigo::StrigoError;

#[test]
fn error_types_are_public() {
    let err = StrigoError::Usage {
        message: "test".into(),
    };
    assert!(err.to_string().contains("test"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> strigo::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use strigo::cli::{Cli, Commands};

    let cli = Cli::parse_from(["strigo", "list-events", "--all"]);

    if let Commands::ListEvents(args) = cli.command {
        assert!(args.all);
    } else {
        panic!("Expected ListEvents command");
    }
}

#[test]
fn envelope_validation_is_public() {
    use strigo::api::{validate, Class};

    let class: Class = validate(r#"{"result":"success","data":{"id":"c","name":"n"}}"#).unwrap();
    assert_eq!(class.name, "n");

    let err = validate::<Class>(r#"{"result":"failure","data":null}"#).unwrap_err();
    assert!(matches!(err, StrigoError::Api { .. }));
}

#[test]
fn credentials_build_bearer_header() {
    use strigo::config::Credentials;

    let creds = Credentials::new("org", "key");
    assert_eq!(creds.authorization_header(), "Bearer org:key");
}
