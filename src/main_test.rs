use super::*;

fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
    Cli::try_parse_from(std::iter::once("colorramp").chain(args.iter().copied()))
}

fn ramp_limit(cli: &Cli) -> Option<i64> {
    match cli.command {
        Command::Ramp { limit, .. } => Some(limit),
        _ => None,
    }
}

// =============================================================================
// argument parsing
// =============================================================================

#[test]
fn ramp_limit_defaults_to_ten() {
    let cli = parse(&["ramp", "#808080"]).unwrap();
    assert_eq!(ramp_limit(&cli), Some(DEFAULT_RAMP_LIMIT));
    assert!(!cli.pretty);
}

#[test]
fn ramp_limit_accepts_negative_values() {
    let cli = parse(&["ramp", "#808080", "--limit", "-4"]).unwrap();
    assert_eq!(ramp_limit(&cli), Some(-4));
}

#[test]
fn ramp_limit_rejects_malformed_value() {
    let err = parse(&["ramp", "#808080", "--limit", "lots"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
}

#[test]
fn pretty_flag_is_global() {
    let cli = parse(&["ramp", "#808080", "--pretty"]).unwrap();
    assert!(cli.pretty);
    let cli = parse(&["--pretty", "random"]).unwrap();
    assert!(cli.pretty);
}

#[test]
fn list_command_parses_kind_and_current_value() {
    let cli = parse(&["list", "history", "--current", "[\"#111111\"]", "add", "#222222"]).unwrap();
    let Command::List(list) = cli.command else {
        panic!("expected list command");
    };
    assert_eq!(list.kind, ListKind::History);
    assert_eq!(list.current.as_deref(), Some("[\"#111111\"]"));
    assert!(matches!(list.command, ListSubcommand::Add { ref color } if color == "#222222"));
}

#[test]
fn list_command_rejects_unknown_kind() {
    assert!(parse(&["list", "recent", "get"]).is_err());
}

#[test]
fn cli_definition_is_consistent() {
    use clap::CommandFactory;
    Cli::command().debug_assert();
}

// =============================================================================
// render_json
// =============================================================================

#[test]
fn render_json_compact_and_pretty() {
    let colors = ["#111111", "#222222"];
    assert_eq!(render_json(&colors, false).unwrap(), "[\"#111111\",\"#222222\"]");
    assert_eq!(render_json(&colors, true).unwrap(), "[\n  \"#111111\",\n  \"#222222\"\n]");
}
