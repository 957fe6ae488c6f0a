mod common;

use pretty_assertions::assert_eq;
use readme_pulse::languages::{languages_from_payload, repositories_from_payload, LanguageSizes};
use readme_pulse::model::{LanguageShare, Repository};
use serde_json::json;

fn names(shares: &[LanguageShare]) -> Vec<&str> {
    shares.iter().map(|s| s.language.as_str()).collect()
}

#[test]
fn zero_sized_languages_are_kept() {
    let sizes = LanguageSizes::from_repositories(&[Repository::new(
        "only",
        &[("A", 300), ("B", 100), ("C", 0)],
    )]);

    assert_eq!(
        sizes.distribution(),
        vec![
            LanguageShare {
                language: "A".to_string(),
                bytes: 300,
                percentage: 75.0
            },
            LanguageShare {
                language: "B".to_string(),
                bytes: 100,
                percentage: 25.0
            },
            LanguageShare {
                language: "C".to_string(),
                bytes: 0,
                percentage: 0.0
            },
        ]
    );
}

#[test]
fn sizes_accumulate_across_repositories() {
    let repositories = vec![
        Repository::new("one", &[("Rust", 1_000), ("Shell", 20)]),
        Repository::new("two", &[("Go", 500), ("Rust", 250)]),
        Repository::new("three", &[("Shell", 30)]),
    ];
    let sizes = LanguageSizes::from_repositories(&repositories);

    assert_eq!(sizes.get("Rust"), Some(1_250));
    assert_eq!(sizes.get("Go"), Some(500));
    assert_eq!(sizes.get("Shell"), Some(50));
    assert_eq!(sizes.total(), 1_800);
    assert_eq!(names(&sizes.distribution()), vec!["Rust", "Go", "Shell"]);
}

#[test]
fn accumulation_is_order_independent() {
    let mut repositories = vec![
        Repository::new("one", &[("Rust", 10), ("C", 4)]),
        Repository::new("two", &[("C", 6), ("Go", 1)]),
    ];
    let forward = LanguageSizes::from_repositories(&repositories);
    repositories.reverse();
    let backward = LanguageSizes::from_repositories(&repositories);

    for language in ["Rust", "C", "Go"] {
        assert_eq!(forward.get(language), backward.get(language));
    }
    assert_eq!(forward.total(), backward.total());
}

#[test]
fn repositories_without_languages_contribute_nothing() {
    let mut bare = Repository::new("bare", &[]);
    let sizes = LanguageSizes::from_repositories(&[bare.clone()]);
    assert!(sizes.is_empty());

    bare.languages = None;
    let sizes = LanguageSizes::from_repositories(&[bare, Repository::new("x", &[("Zig", 9)])]);
    assert_eq!(sizes.len(), 1);
    assert_eq!(sizes.get("Zig"), Some(9));
}

#[test]
fn empty_or_all_zero_input_gives_empty_distribution() {
    assert!(LanguageSizes::default().distribution().is_empty());

    let sizes = LanguageSizes::from_repositories(&[Repository::new("z", &[("A", 0), ("B", 0)])]);
    assert_eq!(sizes.len(), 2);
    assert!(sizes.distribution().is_empty());
}

#[test]
fn ties_keep_discovery_order() {
    let mut sizes = LanguageSizes::default();
    sizes.add("Lua", 10);
    sizes.add("Nim", 50);
    sizes.add("Elm", 10);
    sizes.add("Ada", 10);

    assert_eq!(names(&sizes.distribution()), vec!["Nim", "Lua", "Elm", "Ada"]);
}

#[test]
fn percentages_sum_to_one_hundred_and_do_not_increase() {
    let mut sizes = LanguageSizes::default();
    for (i, language) in ["a", "b", "c", "d", "e", "f", "g"].iter().enumerate() {
        sizes.add(language, (i as u64 + 1) * 7_919 % 1_013 + 1);
    }
    sizes.add("third", 1);
    sizes.add("third-too", 2);

    let distribution = sizes.distribution();
    let sum: f64 = distribution.iter().map(|s| s.percentage).sum();
    assert!((sum - 100.0).abs() < 1e-6, "sum was {sum}");

    for pair in distribution.windows(2) {
        assert!(pair[0].bytes >= pair[1].bytes);
        assert!(pair[0].percentage >= pair[1].percentage);
    }
}

#[test]
fn thirds_are_not_rounded_in_the_model() {
    let sizes = LanguageSizes::from_repositories(&[Repository::new(
        "thirds",
        &[("A", 1), ("B", 1), ("C", 1)],
    )]);
    let distribution = sizes.distribution();
    assert!((distribution[0].percentage - 100.0 / 3.0).abs() < 1e-9);
}

#[test]
fn distribution_from_sample_payload() {
    let distribution = languages_from_payload(&common::sample_payload());
    assert_eq!(names(&distribution), vec!["Rust", "Python", "Shell"]);
    assert_eq!(distribution[0].percentage, 80.0);
    assert_eq!(distribution[1].percentage, 20.0);
    assert_eq!(distribution[2].percentage, 0.0);
}

#[test]
fn null_repository_nodes_are_skipped() {
    let payload = common::payload(
        &[],
        0,
        vec![json!(null), common::repo("kept", &[("Rust", 5)])],
    );
    let repositories = repositories_from_payload(&payload).unwrap();
    assert_eq!(repositories.len(), 1);
    assert_eq!(repositories[0].name, "kept");
}

#[test]
fn malformed_payloads_degrade_to_empty() {
    let cases = [
        json!({}),
        json!({ "data": null }),
        json!({ "data": { "user": { "repositories": null } } }),
        json!({ "data": { "user": { "repositories": { "nodes": [{ "name": "x", "languages": { "edges": [{ "size": "big" }] } }] } } } }),
    ];

    for payload in &cases {
        assert!(languages_from_payload(payload).is_empty(), "{payload}");
    }
}
