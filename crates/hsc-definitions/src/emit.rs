//! Generated-source emission
//!
//! Serializes a built table into a Rust module: a static, name-sorted
//! array of records, optionally followed by a self-contained search
//! routine. The table text is byte-identical between the two modes, so
//! consumers linking the search from this crate and consumers bundling it
//! compile against the same data.

use crate::definition::{BuiltinDefinition, BuiltinParameter};
use crate::table::DefinitionTable;
use crate::target::EngineIndex;

/// What the generated module contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmitMode {
    /// Only the static table; lookups go through [`crate::search`]
    TableOnly,
    /// The table plus a bundled search routine over it
    TableWithSearch,
}

const GENERATED_BANNER: &str =
    "// This file was generated by hsc-defgen and should not be edited directly.\n";

const SEARCH_ROUTINE: &str = r#"
/// Locate a built-in by name. `None` when no built-in matches.
pub fn builtin_definition_search(what: &str) -> Option<&'static BuiltinDefinition> {
    let mut start: isize = 0;
    let mut end: isize = DEFINITIONS.len() as isize - 1;
    while start <= end {
        let middle = (start + end) / 2;
        let definition = &DEFINITIONS[middle as usize];
        match what.as_bytes().cmp(definition.name.as_bytes()) {
            std::cmp::Ordering::Equal => return Some(definition),
            std::cmp::Ordering::Greater => start = middle + 1,
            std::cmp::Ordering::Less => end = middle - 1,
        }
    }
    None
}
"#;

/// Render the table as a generated Rust module.
///
/// Output is byte-for-byte deterministic for a given table and mode: the
/// record order is the table's sorted order and nothing else (no
/// timestamps, no hash-map iteration) feeds the text.
pub fn emit_table(table: &DefinitionTable, mode: EmitMode) -> String {
    let mut out = String::new();
    out.push_str(GENERATED_BANNER);
    out.push('\n');
    out.push_str("use std::borrow::Cow;\n\n");
    out.push_str(
        "use hsc_definitions::{BuiltinDefinition, BuiltinKind, BuiltinParameter, EngineIndex, ValueType};\n\n",
    );
    out.push_str("#[rustfmt::skip]\n");
    out.push_str("pub static DEFINITIONS: &[BuiltinDefinition] = &[\n");
    for definition in table.definitions() {
        emit_definition(&mut out, definition);
    }
    out.push_str("];\n");

    if mode == EmitMode::TableWithSearch {
        out.push_str(SEARCH_ROUTINE);
    }
    out
}

// One record per line, every field spelled out.
fn emit_definition(out: &mut String, definition: &BuiltinDefinition) {
    out.push_str(&format!(
        "    BuiltinDefinition {{ name: Cow::Borrowed({name:?}), kind: BuiltinKind::{kind:?}, value_type: ValueType::{value_type:?}, indices: [{indices}], parameters: Cow::Borrowed(&[{parameters}]) }},\n",
        name = definition.name(),
        kind = definition.kind,
        value_type = definition.value_type,
        indices = emit_indices(&definition.indices),
        parameters = emit_parameters(definition.parameters()),
    ));
}

fn emit_indices(indices: &[EngineIndex]) -> String {
    let rendered: Vec<String> = indices.iter().map(|index| emit_index(*index)).collect();
    rendered.join(", ")
}

fn emit_index(index: EngineIndex) -> String {
    match index {
        EngineIndex::NotPresent => "EngineIndex::NotPresent".to_string(),
        EngineIndex::Unknown => "EngineIndex::Unknown".to_string(),
        EngineIndex::Index(index) => format!("EngineIndex::Index({index})"),
    }
}

fn emit_parameters(parameters: &[BuiltinParameter]) -> String {
    let rendered: Vec<String> = parameters
        .iter()
        .map(|parameter| {
            format!(
                "BuiltinParameter {{ value_type: ValueType::{value_type:?}, optional: {optional}, many: {many}, passthrough_last: {passthrough_last}, allow_uppercase: {allow_uppercase} }}",
                value_type = parameter.value_type,
                optional = parameter.optional,
                many = parameter.many,
                passthrough_last = parameter.passthrough_last,
                allow_uppercase = parameter.allow_uppercase,
            )
        })
        .collect();
    rendered.join(", ")
}
