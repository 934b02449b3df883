// tests/cli_args.rs
//
// Argument parsing and the offline commands.
//
use cv_imprints::cli::{self, Command};
use cv_imprints::config::options::ReconcileOptions;

fn args(v: &[&str]) -> Vec<String> {
    v.iter().map(|s| s.to_string()).collect()
}

fn output(cmd: &Command) -> String {
    let mut buf: Vec<u8> = Vec::new();
    cli::execute(cmd, &mut buf).unwrap();
    String::from_utf8(buf).unwrap()
}

#[test]
fn no_args_means_help() {
    assert_eq!(cli::parse_args(args(&[])).unwrap(), Command::Help);
    assert_eq!(cli::parse_args(args(&["--help"])).unwrap(), Command::Help);
}

#[test]
fn resolve_takes_names_verbatim() {
    let cmd = cli::parse_args(args(&["resolve", "Vertigo", "  Max "])).unwrap();
    assert_eq!(cmd, Command::Resolve(args(&["Vertigo", "  Max "])));
    assert_eq!(output(&cmd), "DC Comics\nMarvel\n");
}

#[test]
fn reconcile_flags_override_defaults() {
    let cmd = cli::parse_args(args(&[
        "reconcile", "--url", "http://localhost:8080/publishers/", "--pause-ms", "0", "--max-pages", "3",
    ]))
    .unwrap();
    let expected = ReconcileOptions {
        base_url: "http://localhost:8080/publishers/".into(),
        pause_ms: 0,
        max_pages: Some(3),
        ..ReconcileOptions::default()
    };
    assert_eq!(cmd, Command::Reconcile(expected));
}

#[test]
fn reconcile_defaults_have_no_cap() {
    match cli::parse_args(args(&["reconcile"])).unwrap() {
        Command::Reconcile(o) => {
            assert_eq!(o.max_pages, None);
            assert_eq!(o.sort, "alphabetical");
            assert!(o.base_url.contains("comicvine.com/publishers"));
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn bad_args_are_errors() {
    assert!(cli::parse_args(args(&["frobnicate"])).is_err());
    assert!(cli::parse_args(args(&["reconcile", "--max-pages"])).is_err());
    assert!(cli::parse_args(args(&["reconcile", "--max-pages", "0"])).is_err());
    assert!(cli::parse_args(args(&["reconcile", "--pause-ms", "soon"])).is_err());
    assert!(cli::parse_args(args(&["audit", "extra"])).is_err());
    assert!(cli::parse_args(args(&["imprints-of"])).is_err());
}

#[test]
fn offline_commands_print_tables() {
    assert_eq!(output(&Command::Audit), "Tables are consistent.\n");

    let imprints = output(&Command::ListImprints);
    assert_eq!(imprints.lines().count(), 42);
    assert!(imprints.contains("Vertigo\tDC Comics\n"));

    let publishers = output(&Command::ListPublishers);
    assert_eq!(publishers.lines().count(), 1299);

    assert_eq!(output(&Command::ImprintsOf("Tokuma Shoten".into())), "Tokuma Comics\n");
    assert_eq!(
        output(&Command::ImprintsOf("Nobody".into())),
        "No known imprints for Nobody\n"
    );
}

#[test]
fn resolve_lines_skips_blanks() {
    let input = "Vertigo\n\n  Icon Comics  \nUnknown House\n";
    let mut buf: Vec<u8> = Vec::new();
    cli::resolve_lines(input.as_bytes(), &mut buf).unwrap();
    assert_eq!(String::from_utf8(buf).unwrap(), "DC Comics\nMarvel\nUnknown House\n");
}
