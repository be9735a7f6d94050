//! Table construction
//!
//! The builder merges the raw function and global entries into one
//! collection, resolves each entry's per-engine indices, and sorts by name
//! so binary search is sound. Construction either yields a complete valid
//! table or fails; nothing downstream ever sees a partial one.

use std::borrow::Cow;

use crate::definition::{
    BuiltinDefinition, BuiltinKind, BuiltinParameter, MAX_NAME_LENGTH, MAX_PARAMETERS,
};
use crate::schema::{BuiltinDescriptions, RawBuiltin, RawParameter};
use crate::search;
use crate::target::{CompileTarget, EngineIndex, EngineTarget};
use crate::value_type::ValueType;
use crate::{DefinitionError, DefinitionResult};

/// Immutable, name-sorted collection of built-in definitions.
///
/// Invariant: strictly ascending by name under byte-wise comparison.
/// Only the builder constructs one, and nothing mutates it afterwards, so
/// sharing across threads needs no locking.
#[derive(Debug, Clone, PartialEq)]
pub struct DefinitionTable {
    definitions: Vec<BuiltinDefinition>,
}

impl DefinitionTable {
    /// Build the table from a parsed description.
    ///
    /// Functions are tagged [`BuiltinKind::Function`], globals
    /// [`BuiltinKind::Global`], and the merged collection is sorted by
    /// name. Fails on an unknown value type tag, a malformed engine index,
    /// a name shared by any two entries, or an empty description.
    pub fn build(descriptions: BuiltinDescriptions) -> DefinitionResult<Self> {
        if descriptions.is_empty() {
            return Err(DefinitionError::EmptyTable);
        }

        let mut definitions = Vec::with_capacity(descriptions.len());
        for raw in &descriptions.functions {
            definitions.push(convert_entry(raw, BuiltinKind::Function)?);
        }
        for raw in &descriptions.globals {
            definitions.push(convert_entry(raw, BuiltinKind::Global)?);
        }

        // Stable sort: equal names would keep input order, but any equal
        // pair is rejected right below.
        definitions.sort_by(|a, b| a.name.as_bytes().cmp(b.name.as_bytes()));
        for pair in definitions.windows(2) {
            if pair[0].name == pair[1].name {
                return Err(DefinitionError::DuplicateName(pair[0].name.to_string()));
            }
        }

        Ok(DefinitionTable { definitions })
    }

    /// The sorted records, for emission or direct iteration.
    pub fn definitions(&self) -> &[BuiltinDefinition] {
        &self.definitions
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Look up a built-in by name.
    pub fn find(&self, what: &str) -> Option<&BuiltinDefinition> {
        search::find(&self.definitions, what)
    }

    /// Look up a built-in by name, filtered by compile target and kind.
    ///
    /// A name match that is absent from the requested engine, or of the
    /// wrong kind, reports not found.
    pub fn find_for(
        &self,
        what: &str,
        target: CompileTarget,
        kind: Option<BuiltinKind>,
    ) -> Option<&BuiltinDefinition> {
        search::find_for(&self.definitions, what, target, kind)
    }
}

fn convert_entry(raw: &RawBuiltin, kind: BuiltinKind) -> DefinitionResult<BuiltinDefinition> {
    if raw.name.is_empty() {
        return Err(DefinitionError::EmptyName);
    }
    if raw.name.len() > MAX_NAME_LENGTH {
        return Err(DefinitionError::NameTooLong {
            name: raw.name.clone(),
        });
    }

    let value_type =
        ValueType::from_tag(&raw.value_type).ok_or_else(|| DefinitionError::UnknownValueType {
            entry: raw.name.clone(),
            tag: raw.value_type.clone(),
        })?;

    if raw.parameters.len() > MAX_PARAMETERS {
        return Err(DefinitionError::TooManyParameters {
            entry: raw.name.clone(),
            count: raw.parameters.len(),
        });
    }

    let mut indices = [EngineIndex::NotPresent; EngineTarget::ALL.len()];
    for target in EngineTarget::ALL {
        indices[target as usize] = resolve_index(raw, target)?;
    }

    let parameters = raw
        .parameters
        .iter()
        .map(|parameter| convert_parameter(parameter, &raw.name))
        .collect::<DefinitionResult<Vec<BuiltinParameter>>>()?;

    Ok(BuiltinDefinition {
        name: Cow::Owned(raw.name.clone()),
        kind,
        value_type,
        indices,
        parameters: Cow::Owned(parameters),
    })
}

/// Resolve the tri-state index for one engine: absent key means the
/// built-in is not on that engine, an explicit null means present with an
/// undetermined index, and an in-range integer is a concrete index.
/// Keys outside the known engine set are ignored.
fn resolve_index(raw: &RawBuiltin, target: EngineTarget) -> DefinitionResult<EngineIndex> {
    let Some(value) = raw.engines.get(target.key()) else {
        return Ok(EngineIndex::NotPresent);
    };
    if value.is_null() {
        return Ok(EngineIndex::Unknown);
    }
    match value.as_u64() {
        Some(index) if index <= u64::from(EngineIndex::MAX_INDEX) => {
            Ok(EngineIndex::Index(index as u16))
        }
        _ => Err(DefinitionError::MalformedEngineIndex {
            entry: raw.name.clone(),
            engine: target.key().to_string(),
            value: value.to_string(),
        }),
    }
}

fn convert_parameter(raw: &RawParameter, entry: &str) -> DefinitionResult<BuiltinParameter> {
    let value_type =
        ValueType::from_tag(&raw.value_type).ok_or_else(|| DefinitionError::UnknownValueType {
            entry: entry.to_string(),
            tag: raw.value_type.clone(),
        })?;
    Ok(BuiltinParameter {
        value_type,
        optional: raw.optional,
        many: raw.many,
        passthrough_last: raw.passthrough_last,
        allow_uppercase: raw.allow_uppercase,
    })
}
