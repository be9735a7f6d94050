//! Lookup tests
//!
//! Exercises the binary search across the boundary cases the table's
//! ordering invariant makes interesting: single-element tables, queries
//! below the first and above the last entry, and target/kind filters.

use hsc_definitions::{
    BuiltinDescriptions, BuiltinKind, CompileTarget, DefinitionTable, EngineTarget,
};
use proptest::prelude::*;

fn table_of_globals(names: &[&str]) -> DefinitionTable {
    let globals: Vec<String> = names
        .iter()
        .map(|name| format!(r#"{{"name": "{name}", "type": "real", "engines": {{}}}}"#))
        .collect();
    let json = format!(
        r#"{{"functions": [], "globals": [{}]}}"#,
        globals.join(", ")
    );
    DefinitionTable::build(BuiltinDescriptions::from_json_str(&json).unwrap()).unwrap()
}

#[test]
fn every_entry_round_trips() {
    let names = [
        "ai_attach",
        "begin",
        "cls",
        "fade_in",
        "game_speed",
        "object_create",
        "sleep",
        "unit_kill",
        "volume_test_objects",
        "wake",
    ];
    let table = table_of_globals(&names);
    for name in names {
        let found = table.find(name).expect(name);
        assert_eq!(found.name(), name);
    }
}

#[test]
fn misses_return_none_never_a_neighbor() {
    let table = table_of_globals(&["beta", "delta", "zeta"]);
    for miss in ["alpha", "betb", "carrot", "eta", "zz"] {
        assert!(table.find(miss).is_none(), "{miss} should not resolve");
    }
}

#[test]
fn single_element_table() {
    let table = table_of_globals(&["gravity"]);
    assert!(table.find("gravity").is_some());
    assert!(table.find("g").is_none());
    assert!(table.find("gravity2").is_none());
}

#[test]
fn query_below_first_element_of_a_two_element_table() {
    // Narrows to the [first, second] range and then below index 0
    let table = table_of_globals(&["beta", "gamma"]);
    assert!(table.find("alpha").is_none());
}

#[test]
fn queries_outside_both_ends() {
    let table = table_of_globals(&["c", "d", "e", "f", "g"]);
    assert!(table.find("a").is_none());
    assert!(table.find("z").is_none());
    assert!(table.find("c").is_some());
    assert!(table.find("g").is_some());
}

#[test]
fn ordering_is_byte_wise_not_case_folded() {
    // 'Z' (0x5a) sorts before 'a' (0x61)
    let table = table_of_globals(&["Zeta", "alpha"]);
    let names: Vec<&str> = table.definitions().iter().map(|d| d.name()).collect();
    assert_eq!(names, vec!["Zeta", "alpha"]);
    assert!(table.find("Zeta").is_some());
    assert!(table.find("zeta").is_none());
}

// ============================================================================
// Filtered lookup
// ============================================================================

fn filtered_table() -> DefinitionTable {
    DefinitionTable::build(
        BuiltinDescriptions::from_json_str(
            r#"{
                "functions": [{"name": "sleep", "type": "void",
                               "engines": {"xbox": 22, "mcc-cea": null}}],
                "globals": [{"name": "gravity", "type": "real", "engines": {"xbox": 3}}]
            }"#,
        )
        .unwrap(),
    )
    .unwrap()
}

#[test]
fn kind_filter_rejects_a_name_match_of_the_other_kind() {
    let table = filtered_table();
    assert!(table
        .find_for("sleep", CompileTarget::Any, Some(BuiltinKind::Function))
        .is_some());
    assert!(table
        .find_for("sleep", CompileTarget::Any, Some(BuiltinKind::Global))
        .is_none());
    assert!(table
        .find_for("gravity", CompileTarget::Any, Some(BuiltinKind::Global))
        .is_some());
}

#[test]
fn target_filter_distinguishes_absent_from_unknown_index() {
    let table = filtered_table();
    // Unknown index still means the built-in exists on the engine
    assert!(table
        .find_for("sleep", CompileTarget::Specific(EngineTarget::MccCea), None)
        .is_some());
    assert!(table
        .find_for("sleep", CompileTarget::Specific(EngineTarget::GbxDemo), None)
        .is_none());
}

#[test]
fn missing_name_and_wrong_engine_are_distinguishable() {
    let table = filtered_table();
    let target = CompileTarget::Specific(EngineTarget::GbxRetail);

    // Not on this engine, but known under Any: the caller can tell the cases apart
    assert!(table.find_for("gravity", target, None).is_none());
    assert!(table.find_for("gravity", CompileTarget::Any, None).is_some());

    // Truly unknown name: both lookups miss
    assert!(table.find_for("warthog", target, None).is_none());
    assert!(table.find_for("warthog", CompileTarget::Any, None).is_none());
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn random_tables_round_trip_and_miss_correctly(
        names in prop::collection::btree_set("[a-z][a-z0-9_]{0,11}", 1..40)
    ) {
        let names: Vec<&str> = names.iter().map(String::as_str).collect();
        let table = table_of_globals(&names);

        for pair in table.definitions().windows(2) {
            prop_assert!(pair[0].name().as_bytes() < pair[1].name().as_bytes());
        }
        for name in &names {
            prop_assert_eq!(table.find(name).unwrap().name(), *name);
        }
        // '-' never appears in a generated name
        for name in &names {
            let absent = format!("{name}-absent");
            prop_assert!(table.find(&absent).is_none());
        }
    }
}
