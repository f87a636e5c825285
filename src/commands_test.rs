#![allow(clippy::float_cmp)]

use clap::CommandFactory;

use super::*;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("scribl").chain(args.iter().copied())).expect("parse")
}

#[test]
fn command_tree_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn card_get_takes_card_id() {
    let cli = parse(&["--base-url", DEFAULT_API_BASE, "card", "get", "abc"]);
    assert_eq!(cli.base_url, DEFAULT_API_BASE);
    assert!(matches!(
        cli.command,
        Command::Card(CardCommand { command: CardSubcommand::Get { ref card_id } }) if card_id == "abc"
    ));
}

#[test]
fn configured_user_id_is_kept() {
    let cli = parse(&["--user-id", "u1", "--user-name", "Sam", "card", "stats", "abc"]);
    let config = cli.config();
    assert_eq!(config.user_id, "u1");
    assert_eq!(config.author(), "Sam");
}

#[test]
fn missing_user_id_is_minted() {
    let cli = Cli {
        base_url: DEFAULT_API_BASE.to_owned(),
        app_origin: DEFAULT_APP_ORIGIN.to_owned(),
        user_id: None,
        user_name: None,
        command: Command::Card(CardCommand { command: CardSubcommand::Stats { card_id: "abc".to_owned() } }),
    };
    let first = cli.config().user_id;
    assert_eq!(first.len(), 36);
    assert_ne!(first, cli.config().user_id);
}

#[test]
fn placement_flags_parse_into_update() {
    let cli = parse(&["message", "update", "abc", "7", "--x", "12.5", "--rotation=-15"]);
    let Command::Message(MessageCommand { command: MessageSubcommand::Update { message_id, text, placement, .. } }) =
        cli.command
    else {
        panic!("expected message update");
    };
    assert_eq!(message_id, 7);
    assert_eq!(text, None);
    assert_eq!(placement.x, Some(12.5));
    assert_eq!(placement.rotation, Some(-15.0));
}

#[test]
fn message_patch_escapes_text() {
    let patch = message_patch(Some("a < b"), PlacementArgs::default()).expect("patch");
    assert_eq!(patch.content.as_deref(), Some("a &lt; b"));
    assert_eq!(patch.x, None);
}

#[test]
fn empty_message_patch_is_none() {
    assert_eq!(message_patch(None, PlacementArgs::default()), None);
}
