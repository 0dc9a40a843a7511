//! CLI parse tests.

use super::{Cli, CliCommand};
use clap::Parser;

fn parse(args: &[&str]) -> CliCommand {
    let cli = Cli::try_parse_from(args).unwrap();
    cli.command
}

#[test]
fn resolve_parses_url_and_json_flag() {
    match parse(&["feedlink", "resolve", "https://www.youtube.com/@x", "--json"]) {
        CliCommand::Resolve { url, json } => {
            assert_eq!(url, "https://www.youtube.com/@x");
            assert!(json);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn resolve_json_defaults_off() {
    match parse(&["feedlink", "resolve", "https://vimeo.com/groups/109"]) {
        CliCommand::Resolve { json, .. } => assert!(!json),
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn check_parses_path() {
    match parse(&["feedlink", "check", "urls.txt"]) {
        CliCommand::Check { path } => assert_eq!(path, "urls.txt"),
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn resolve_requires_url() {
    assert!(Cli::try_parse_from(["feedlink", "resolve"]).is_err());
}

#[test]
fn unknown_subcommand_is_rejected() {
    assert!(Cli::try_parse_from(["feedlink", "fetch", "x"]).is_err());
}
