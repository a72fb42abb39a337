use super::*;


fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}

#[test]
fn cli_parse_verbose_is_global() {
    assert!(parse(&["clipkit", "code", "-v"]).verbose);
    assert!(parse(&["clipkit", "--verbose", "man"]).verbose);
    assert!(!parse(&["clipkit", "man"]).verbose);
}

#[test]
fn cli_parse_requires_subcommand() {
    assert!(Cli::try_parse_from(["clipkit"]).is_err());
}

#[test]
fn cli_parse_unknown_subcommand() {
    assert!(Cli::try_parse_from(["clipkit", "paste"]).is_err());
}
