//! Integration tests for `#` broadcast projection.

use yamlpick::{get, Kind};

const TEAM: &str = r##"
members:
  - name: Ada
    role: lead
    langs: [rust, c]
  - name: Brian
    langs: [go]
  - name: Cleo
    role: ~
    langs: []
  - name: Dev
    role: ops
    langs: [python, rust, sql]
stats:
  "#total": 4
"##;

#[test]
fn test_broadcast_collects_field() {
    let names = get(TEAM, "members.#.name");
    assert_eq!(names.kind(), Kind::Yaml);
    assert_eq!(names.to_string(), "- Ada\n- Brian\n- Cleo\n- Dev\n");
}

#[test]
fn test_broadcast_drops_missing_and_null() {
    let roles = get(TEAM, "members.#.role");
    let roles: Vec<String> = roles.array().iter().map(|r| r.to_string()).collect();
    assert_eq!(roles, ["lead", "ops"]);
}

#[test]
fn test_broadcast_with_nothing_found_is_empty_sequence() {
    let result = get(TEAM, "members.#.email");
    assert!(result.exists());
    assert_eq!(result.to_string(), "[]\n");
    assert!(result.array().is_empty());
}

#[test]
fn test_broadcast_nested_length() {
    let counts = get(TEAM, "members.#.langs.#");
    let counts: Vec<i64> = counts.array().iter().map(|c| c.int()).collect();
    assert_eq!(counts, [2, 1, 0, 3]);
}

#[test]
fn test_broadcast_nested_index() {
    let first = get(TEAM, "members.#.langs.0");
    let first: Vec<String> = first.array().iter().map(|l| l.to_string()).collect();
    assert_eq!(first, ["rust", "go", "python"]);
}

#[test]
fn test_broadcast_of_broadcast() {
    let yaml = "groups:\n  - users: [{id: 1}, {id: 2}]\n  - users: [{id: 3}]\n  - users: []\n";
    let ids = get(yaml, "groups.#.users.#.id");
    assert_eq!(ids.get("#").int(), 3);
    assert_eq!(ids.get("0.#").int(), 2);
    assert_eq!(ids.get("1.0").int(), 3);
    assert_eq!(ids.get("2").to_string(), "[]\n");
}

#[test]
fn test_trailing_dot_after_broadcast_is_ignored() {
    assert_eq!(
        get(TEAM, "members.#.langs.#.").to_string(),
        get(TEAM, "members.#.langs.#").to_string()
    );
}

#[test]
fn test_broadcast_with_query() {
    let leads = get(TEAM, "members.#.#(=rust)");
    // only elements that are sequences with a match contribute
    assert_eq!(leads.to_string(), "[]\n");

    let rustaceans = get(TEAM, "members.#.langs.#(=rust)");
    assert_eq!(rustaceans.to_string(), "- rust\n- rust\n");
}

#[test]
fn test_broadcast_on_mapping_is_null() {
    assert!(!get(TEAM, "stats.#.x").exists());
    assert!(!get(TEAM, "members.0.#.x").exists());
}

#[test]
fn test_broadcast_count_is_bounded() {
    let elements = get(TEAM, "members.#").int();
    for field in ["name", "role", "langs", "email"] {
        let collected = get(TEAM, &format!("members.#.{}", field));
        assert!(collected.array().len() as i64 <= elements, "{}", field);
    }
}

#[test]
fn test_hash_prefixed_key_is_looked_up_first() {
    assert_eq!(get(TEAM, "stats.#total").int(), 4);
}

#[test]
fn test_hash_prefixed_token_broadcasts_when_key_is_absent() {
    let names = get(TEAM, "members.#name");
    assert_eq!(names.to_string(), "- Ada\n- Brian\n- Cleo\n- Dev\n");

    let first_langs = get(TEAM, "members.#langs.0");
    assert_eq!(first_langs.array().len(), 3);
}
