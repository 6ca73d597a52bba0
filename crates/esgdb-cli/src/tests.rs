use clap::Parser;

use super::*;

#[test]
fn parses_bare_run_command() {
    let cli = Cli::try_parse_from(["esgdb", "run"]).expect("expected valid cli args");

    let Commands::Run(args) = cli.command;
    assert!(args.limit.is_none());
    assert!(args.ticker.is_none());
    assert!(args.out.is_none());
}

#[test]
fn parses_run_with_all_flags() {
    let cli = Cli::try_parse_from([
        "esgdb",
        "run",
        "--limit",
        "3",
        "--ticker",
        "AAPL",
        "--out",
        "results.jsonl",
    ])
    .expect("expected valid cli args");

    let Commands::Run(args) = cli.command;
    assert_eq!(args.limit, Some(3));
    assert_eq!(args.ticker.as_deref(), Some("AAPL"));
    assert_eq!(args.out, Some(PathBuf::from("results.jsonl")));
}

#[test]
fn rejects_non_numeric_limit() {
    let result = Cli::try_parse_from(["esgdb", "run", "--limit", "many"]);
    assert!(result.is_err());
}

#[test]
fn rejects_unknown_subcommand() {
    let result = Cli::try_parse_from(["esgdb", "collect"]);
    assert!(result.is_err());
}
