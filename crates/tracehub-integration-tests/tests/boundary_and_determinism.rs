//! Boundary inputs and determinism: adversarial strings must never panic,
//! repeated classification must never drift, and snapshot digests must be
//! stable across serialization round-trips.

use proptest::prelude::*;

use tracehub_compliance::{classify, is_eudr_required, is_horn_hoof_product, HsClassifier};
use tracehub_core::HsCode;
use tracehub_refdata::RegulatorySnapshot;

#[test]
fn adversarial_inputs_do_not_panic() {
    let long = "1".repeat(1 << 16);
    let inputs = [
        "\0",
        "1801\0.00",
        "١٨٠١",       // Arabic-Indic digits: not ASCII, must not match.
        "1801\u{0301}", // combining accent after the heading
        "🌲🌲🌲🌲",
        long.as_str(),
        "18.01",
        "....",
        "-1801",
    ];
    for input in inputs {
        let _ = is_eudr_required(input);
        let _ = is_horn_hoof_product(input);
        let _ = classify(input);
        let code = HsCode::new(input);
        let _ = HsClassifier::builtin().classify(&code);
    }
}

#[test]
fn non_ascii_digits_never_classify() {
    assert!(!is_eudr_required("١٨٠١"));
    assert!(!is_horn_hoof_product("٠٥٠٦"));
}

#[test]
fn combining_character_in_heading_blocks_match() {
    // The 4-char prefix is "180" + combining mark, which is not "1801".
    assert!(!is_eudr_required("180\u{0301}1"));
}

#[test]
fn repeated_classification_is_stable() {
    let classifier = HsClassifier::builtin();
    let code = HsCode::new("1801.00.00");
    let first = classifier.classify(&code);
    for _ in 0..100 {
        assert_eq!(classifier.classify(&code), first);
    }
}

#[test]
fn digest_stable_across_yaml_round_trips() {
    let snapshot = RegulatorySnapshot::builtin();
    let mut digest = snapshot.content_digest().unwrap();
    let mut current = snapshot;
    for _ in 0..5 {
        let yaml = serde_yaml::to_string(&current).unwrap();
        current = serde_yaml::from_str(&yaml).unwrap();
        let next = current.content_digest().unwrap();
        assert_eq!(next, digest);
        digest = next;
    }
}

#[test]
fn digest_stable_across_json_and_yaml_sources() {
    let snapshot = RegulatorySnapshot::builtin();
    let json = serde_json::to_string(&snapshot).unwrap();
    let from_json: RegulatorySnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(
        from_json.content_digest().unwrap(),
        snapshot.content_digest().unwrap()
    );
}

proptest! {
    #[test]
    fn classification_total_over_arbitrary_unicode(s in "\\PC*") {
        let _ = classify(&s);
    }

    #[test]
    fn hscode_and_raw_string_paths_agree(s in ".*") {
        let classifier = HsClassifier::builtin();
        let via_code = classifier.classify(&HsCode::new(s.as_str()));
        prop_assert_eq!(via_code, classify(&s));
    }
}
