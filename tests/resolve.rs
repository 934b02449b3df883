// tests/resolve.rs
//
// Imprint → parent resolution against the builtin tables.
//
use cv_imprints::find_parent_publisher;
use cv_imprints::imprints::{self, PublisherTables, tables};

#[test]
fn known_imprints_resolve_to_parent() {
    assert_eq!(find_parent_publisher("Vertigo"), "DC Comics");
    assert_eq!(find_parent_publisher("Icon Comics"), "Marvel");
    assert_eq!(find_parent_publisher("Dark Horse Manga"), "Dark Horse Comics");
    assert_eq!(find_parent_publisher("Papercutz"), "Nbm");
}

#[test]
fn surrounding_whitespace_is_ignored() {
    assert_eq!(find_parent_publisher("  Vertigo  "), "DC Comics");
    assert_eq!(find_parent_publisher("\tMarvel Knights\n"), "Marvel");
    assert_eq!(find_parent_publisher("  Image Comics  "), "Image Comics");
}

#[test]
fn roots_and_unknowns_pass_through_trimmed() {
    assert_eq!(find_parent_publisher("Marvel"), "Marvel");
    assert_eq!(find_parent_publisher("DC Comics"), "DC Comics");
    assert_eq!(find_parent_publisher("  Nobody Press "), "Nobody Press");
    assert_eq!(find_parent_publisher(""), "");
    assert_eq!(find_parent_publisher("   "), "");
}

#[test]
fn matching_is_exact() {
    // case and punctuation both matter
    assert_eq!(find_parent_publisher("vertigo"), "vertigo");
    assert_eq!(find_parent_publisher("Chaos Comics"), "Chaos Comics");
    assert_eq!(find_parent_publisher("Chaos! Comics"), "Dynamite Entertainment");
    assert_eq!(find_parent_publisher("Homage Comics"), "Homage Comics");
    assert_eq!(find_parent_publisher("Homage comics"), "DC Comics");
}

#[test]
fn every_table_entry_resolves_exactly() {
    for (imprint, parent) in tables::IMPRINT_PARENTS {
        assert_eq!(find_parent_publisher(imprint), *parent, "imprint {imprint:?}");
        // resolving the parent again goes nowhere
        assert_eq!(find_parent_publisher(parent), *parent);
    }
}

#[test]
fn resolution_is_deterministic() {
    for name in ["Vertigo", " Max ", "Marvel", "Unknown House"] {
        assert_eq!(find_parent_publisher(name), find_parent_publisher(name));
    }
}

#[test]
fn builtin_table_sizes() {
    let t = imprints::builtin();
    assert_eq!(t.imprint_count(), 42);
    assert_eq!(t.root_count(), 1299);
    assert!(t.is_root("¡Ka-Boom! Estudio S.A. de C.V."));
    assert!(t.is_root("Western Publishing."));
}

#[test]
fn builtin_tables_pass_audit() {
    let audit = imprints::audit();
    assert!(audit.is_clean(), "{:?}", audit);
    assert_eq!(audit.lines(), vec!["Tables are consistent.".to_string()]);
}

#[test]
fn audit_flags_orphans_and_overlaps() {
    let t = PublisherTables::new(
        &[("Imprint A", "Parent A"), ("Imprint B", "Ghost"), ("Both", "Parent A")],
        &["Parent A", "Both"],
    );
    let audit = t.audit();
    assert!(!audit.is_clean());
    assert_eq!(audit.orphan_parents.iter().collect::<Vec<_>>(), vec!["Ghost"]);
    assert_eq!(audit.overlapping.iter().collect::<Vec<_>>(), vec!["Both"]);
    assert_eq!(
        audit.lines(),
        vec![
            "Parent not listed as a publisher: Ghost".to_string(),
            "Listed as both imprint and publisher: Both".to_string(),
        ]
    );
}

#[test]
fn imprints_of_parent_are_sorted() {
    let t = imprints::builtin();
    let dc = t.imprints_of("DC Comics");
    assert!(dc.contains(&"Vertigo"));
    assert!(dc.contains(&"Wildstorm"));
    assert!(dc.windows(2).all(|w| w[0] <= w[1]));

    assert_eq!(t.imprints_of(" Amryl Entertainment "), vec!["Antimatter"]);
    assert!(t.imprints_of("Vertigo").is_empty());
}

#[test]
fn custom_tables_resolve_the_same_way() {
    let t = PublisherTables::new(&[("X", "Y")], &["Y"]);
    assert_eq!(t.resolve(" X "), "Y");
    assert_eq!(t.resolve("Y"), "Y");
    assert_eq!(t.resolve("Z"), "Z");
    assert!(t.is_known("X") && t.is_known("Y") && !t.is_known("Z"));
}
