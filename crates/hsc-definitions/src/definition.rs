//! Built-in definition records
//!
//! `BuiltinDefinition` is the fixed-layout record both lookup paths share:
//! tables built at runtime from a description own their strings, while
//! tables generated into source by `emit` borrow `'static` data. `Cow`
//! storage lets one record type cover both without copying.

use std::borrow::Cow;

use crate::target::{EngineIndex, EngineTarget};
use crate::value_type::ValueType;

/// Longest allowed built-in name, in bytes.
pub const MAX_NAME_LENGTH: usize = 63;

/// Most parameters a built-in signature may declare.
pub const MAX_PARAMETERS: usize = 6;

/// Whether an entry is callable or a readable engine variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinKind {
    Function,
    Global,
}

/// One positional parameter of a built-in function signature.
///
/// Older description files omit `many` and `allow_uppercase`; the flags
/// default to false so both schema versions produce the same record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BuiltinParameter {
    pub value_type: ValueType,
    /// Caller may omit this argument
    pub optional: bool,
    /// Trailing argument may repeat (only meaningful on the last parameter)
    pub many: bool,
    /// The last argument of this type is forwarded, not evaluated
    pub passthrough_last: bool,
    /// Uppercase letters are tolerated in the argument
    pub allow_uppercase: bool,
}

impl BuiltinParameter {
    /// Parameter of the given type with every flag cleared.
    pub const fn new(value_type: ValueType) -> Self {
        BuiltinParameter {
            value_type,
            optional: false,
            many: false,
            passthrough_last: false,
            allow_uppercase: false,
        }
    }
}

/// One built-in function or global.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltinDefinition {
    pub name: Cow<'static, str>,
    pub kind: BuiltinKind,
    /// Type the entry produces when evaluated
    pub value_type: ValueType,
    /// One index per engine, ordered as [`EngineTarget::ALL`]
    pub indices: [EngineIndex; EngineTarget::ALL.len()],
    pub parameters: Cow<'static, [BuiltinParameter]>,
}

impl BuiltinDefinition {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The tri-state opcode index for one engine.
    pub fn index_for(&self, target: EngineTarget) -> EngineIndex {
        // EngineTarget's variant order matches EngineTarget::ALL
        self.indices[target as usize]
    }

    /// Whether the built-in exists on the given engine at all.
    pub fn available_on(&self, target: EngineTarget) -> bool {
        self.index_for(target).is_present()
    }

    pub fn parameter_count(&self) -> usize {
        self.parameters.len()
    }

    pub fn parameters(&self) -> &[BuiltinParameter] {
        &self.parameters
    }
}
