//! Tests for CLI argument parsing.

use std::path::PathBuf;

use super::cli::{Cli, Command};

mod parsing {
    use super::*;

    #[test]
    fn parse_connection_options() {
        let cli = Cli::parse_from_iter([
            "pagarme",
            "--api-key",
            "sk_test_123",
            "--base-url",
            "https://sandbox.example.com/core",
            "--api-version",
            "v5",
            "--timeout",
            "45",
            "--connect-timeout",
            "5",
            "--log-requests",
            "info",
        ]);

        assert_eq!(cli.api_key.as_deref(), Some("sk_test_123"));
        assert_eq!(
            cli.base_url.as_deref(),
            Some("https://sandbox.example.com/core")
        );
        assert_eq!(cli.api_version.as_deref(), Some("v5"));
        assert_eq!(cli.timeout, Some(45));
        assert_eq!(cli.connect_timeout, Some(5));
        assert!(cli.log_requests);
    }

    #[test]
    fn parse_webhook_options() {
        let cli = Cli::parse_from_iter([
            "pagarme",
            "--webhook-secret",
            "whsec",
            "--webhook-tolerance",
            "0",
            "info",
        ]);

        assert_eq!(cli.webhook_secret.as_deref(), Some("whsec"));
        assert_eq!(cli.webhook_tolerance, Some(0));
    }

    #[test]
    fn global_options_after_subcommand() {
        let cli = Cli::parse_from_iter([
            "pagarme",
            "request",
            "GET",
            "charges",
            "--api-key",
            "sk_test_123",
            "-v",
        ]);

        assert_eq!(cli.api_key.as_deref(), Some("sk_test_123"));
        assert!(cli.verbose);
    }

    #[test]
    fn parse_config_path() {
        let cli = Cli::parse_from_iter(["pagarme", "-c", "/etc/pagarme.toml", "info"]);

        assert_eq!(cli.config, Some(PathBuf::from("/etc/pagarme.toml")));
    }

    #[test]
    fn invalid_timeout_is_rejected() {
        let result = <Cli as clap::Parser>::try_parse_from([
            "pagarme",
            "--timeout",
            "soon",
            "info",
        ]);

        assert!(result.is_err());
    }

    #[test]
    fn subcommand_is_required() {
        let result = <Cli as clap::Parser>::try_parse_from(["pagarme"]);

        assert!(result.is_err());
    }
}

mod commands {
    use super::*;

    #[test]
    fn init_default_output() {
        let cli = Cli::parse_from_iter(["pagarme", "init"]);

        assert!(cli.is_init());
        match cli.command {
            Command::Init { output } => assert_eq!(output, PathBuf::from("pagarme.toml")),
            other => panic!("Expected Init, got {other:?}"),
        }
    }

    #[test]
    fn init_custom_output() {
        let cli = Cli::parse_from_iter(["pagarme", "init", "-o", "custom.toml"]);

        match cli.command {
            Command::Init { output } => assert_eq!(output, PathBuf::from("custom.toml")),
            other => panic!("Expected Init, got {other:?}"),
        }
    }

    #[test]
    fn info_is_not_init() {
        let cli = Cli::parse_from_iter(["pagarme", "info"]);

        assert!(!cli.is_init());
        assert!(matches!(cli.command, Command::Info));
    }

    #[test]
    fn request_with_body_and_query() {
        let cli = Cli::parse_from_iter([
            "pagarme",
            "request",
            "POST",
            "charges",
            "--data",
            r#"{"amount":100}"#,
            "--query",
            "page=1",
            "--query",
            "size=10",
            "--multipart",
        ]);

        match cli.command {
            Command::Request {
                method,
                path,
                data,
                query,
                multipart,
            } => {
                assert_eq!(method, "POST");
                assert_eq!(path, "charges");
                assert_eq!(data.as_deref(), Some(r#"{"amount":100}"#));
                assert_eq!(query, vec!["page=1", "size=10"]);
                assert!(multipart);
            }
            other => panic!("Expected Request, got {other:?}"),
        }
    }

    #[test]
    fn sign_requires_payload() {
        let result = <Cli as clap::Parser>::try_parse_from(["pagarme", "sign"]);
        assert!(result.is_err());

        let cli = Cli::parse_from_iter(["pagarme", "sign", "--payload", "event.json"]);
        match cli.command {
            Command::Sign { payload } => assert_eq!(payload, PathBuf::from("event.json")),
            other => panic!("Expected Sign, got {other:?}"),
        }
    }

    #[test]
    fn verify_webhook_options() {
        let cli = Cli::parse_from_iter([
            "pagarme",
            "verify-webhook",
            "--payload",
            "event.json",
            "--signature",
            "abc123",
            "--strict",
        ]);

        match cli.command {
            Command::VerifyWebhook {
                payload,
                signature,
                strict,
            } => {
                assert_eq!(payload, PathBuf::from("event.json"));
                assert_eq!(signature.as_deref(), Some("abc123"));
                assert!(strict);
            }
            other => panic!("Expected VerifyWebhook, got {other:?}"),
        }
    }
}

mod environment {
    use super::*;
    use clap::{CommandFactory, FromArgMatches};

    /// Parses `info` with `log_requests` bound to `var` instead of the real variable.
    fn parse_with_log_requests(var: &'static str, value: &str) -> Cli {
        // SAFETY: each test owns its variable; nothing else reads or writes it.
        unsafe { std::env::set_var(var, value) };
        let matches = Cli::command()
            .mut_arg("log_requests", |arg| arg.env(var))
            .try_get_matches_from(["pagarme", "info"]);
        unsafe { std::env::remove_var(var) };

        Cli::from_arg_matches(&matches.unwrap()).unwrap()
    }

    #[test]
    fn log_requests_accepts_truthy_values() {
        for value in ["1", "true", "yes", "on"] {
            let cli = parse_with_log_requests("PAGARME_CLI_TESTS_TRUTHY", value);
            assert!(cli.log_requests, "{value}");
        }
    }

    #[test]
    fn log_requests_accepts_falsey_values() {
        for value in ["0", "false", "no", "off"] {
            let cli = parse_with_log_requests("PAGARME_CLI_TESTS_FALSEY", value);
            assert!(!cli.log_requests, "{value}");
        }
    }
}
