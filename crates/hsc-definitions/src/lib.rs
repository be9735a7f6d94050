//! HSC Built-in Definitions
//!
//! Turns the declarative description of the engine's built-in functions and
//! globals into an immutable, name-sorted lookup table, and provides the
//! binary search the compiler front-end uses to resolve identifiers:
//! - Parsing of the JSON description (`schema`)
//! - Table construction with validation (`table`)
//! - Lookup, plain and target-filtered (`search`)
//! - Generation of the static Rust table module (`emit`)
//!
//! # Example
//!
//! ```
//! use hsc_definitions::{BuiltinDescriptions, DefinitionTable};
//!
//! let descriptions = BuiltinDescriptions::from_json_str(r#"{
//!     "functions": [{"name": "sleep", "type": "void", "engines": {"xbox": 22}}],
//!     "globals": []
//! }"#).unwrap();
//! let table = DefinitionTable::build(descriptions).unwrap();
//! assert!(table.find("sleep").is_some());
//! ```

pub mod definition;
pub mod emit;
pub mod schema;
pub mod search;
pub mod table;
pub mod target;
pub mod value_type;

use thiserror::Error;

/// Definition construction errors
///
/// Every variant is a construction-time failure: no table is produced.
/// A lookup miss is not an error (`DefinitionTable::find` returns `None`).
#[derive(Error, Debug)]
pub enum DefinitionError {
    #[error("'{entry}' has unknown value type '{tag}'")]
    UnknownValueType { entry: String, tag: String },

    #[error("'{entry}' has a malformed index for engine '{engine}': {value} (expected null or an integer in 0..=65533)")]
    MalformedEngineIndex {
        entry: String,
        engine: String,
        value: String,
    },

    #[error("duplicate built-in name '{0}'")]
    DuplicateName(String),

    #[error("built-in entry with an empty name")]
    EmptyName,

    #[error("'{name}' exceeds the {limit}-byte name limit", limit = definition::MAX_NAME_LENGTH)]
    NameTooLong { name: String },

    #[error("'{entry}' declares {count} parameters (limit is {limit})", limit = definition::MAX_PARAMETERS)]
    TooManyParameters { entry: String, count: usize },

    #[error("definition description contains no entries")]
    EmptyTable,

    #[error("failed to parse definition description: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for definition operations
pub type DefinitionResult<T> = Result<T, DefinitionError>;

// Re-export main types
pub use definition::{BuiltinDefinition, BuiltinKind, BuiltinParameter};
pub use emit::{emit_table, EmitMode};
pub use schema::BuiltinDescriptions;
pub use table::DefinitionTable;
pub use target::{CompileTarget, EngineIndex, EngineTarget};
pub use value_type::ValueType;
