//! Target engines and the tri-state opcode index
//!
//! Each built-in carries one index per engine build. The index is a
//! tri-state: the built-in may be absent from an engine, present with a
//! known opcode slot, or present with a slot nobody has determined yet.
//! The three states are distinct in the description file (missing key,
//! explicit null, integer) and must stay distinct in the emitted table.

use std::fmt;

/// One engine build with its own built-in opcode numbering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EngineTarget {
    GbxCustom,
    GbxDemo,
    GbxRetail,
    MccCea,
    Xbox,
}

impl EngineTarget {
    /// Every target, in the canonical order of the emitted record
    /// (alphabetical by key).
    pub const ALL: [EngineTarget; 5] = [
        EngineTarget::GbxCustom,
        EngineTarget::GbxDemo,
        EngineTarget::GbxRetail,
        EngineTarget::MccCea,
        EngineTarget::Xbox,
    ];

    /// Key string used in the definition description's `engines` map.
    pub fn key(self) -> &'static str {
        match self {
            EngineTarget::GbxCustom => "gbx-custom",
            EngineTarget::GbxDemo => "gbx-demo",
            EngineTarget::GbxRetail => "gbx-retail",
            EngineTarget::MccCea => "mcc-cea",
            EngineTarget::Xbox => "xbox",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "gbx-custom" => Some(EngineTarget::GbxCustom),
            "gbx-demo" => Some(EngineTarget::GbxDemo),
            "gbx-retail" => Some(EngineTarget::GbxRetail),
            "mcc-cea" => Some(EngineTarget::MccCea),
            "xbox" => Some(EngineTarget::Xbox),
            _ => None,
        }
    }
}

impl fmt::Display for EngineTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Engine filter for compile-time lookups.
///
/// `Any` resolves a built-in regardless of engine availability; a specific
/// target treats built-ins absent from that engine as not found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompileTarget {
    Any,
    Specific(EngineTarget),
}

/// Opcode slot of a built-in on one engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EngineIndex {
    /// The built-in does not exist on this engine
    NotPresent,
    /// The built-in exists, but its opcode index has not been determined
    Unknown,
    /// Concrete opcode index (`0..=65533`)
    Index(u16),
}

impl EngineIndex {
    /// Wire sentinel for [`EngineIndex::NotPresent`].
    pub const NOT_PRESENT_SENTINEL: u16 = 65535;

    /// Wire sentinel for [`EngineIndex::Unknown`].
    pub const UNKNOWN_SENTINEL: u16 = 65534;

    /// Largest legal concrete index; everything above is a sentinel.
    pub const MAX_INDEX: u16 = 65533;

    /// Sentinel-encoded form used by the fixed-layout artifact.
    pub fn to_raw(self) -> u16 {
        match self {
            EngineIndex::NotPresent => Self::NOT_PRESENT_SENTINEL,
            EngineIndex::Unknown => Self::UNKNOWN_SENTINEL,
            EngineIndex::Index(index) => index,
        }
    }

    /// Decode the sentinel form. Total: every `u16` maps to one state.
    pub fn from_raw(raw: u16) -> Self {
        match raw {
            Self::NOT_PRESENT_SENTINEL => EngineIndex::NotPresent,
            Self::UNKNOWN_SENTINEL => EngineIndex::Unknown,
            index => EngineIndex::Index(index),
        }
    }

    /// Whether the built-in exists on the engine at all (index known or not).
    pub fn is_present(self) -> bool {
        !matches!(self, EngineIndex::NotPresent)
    }

    /// The concrete index, if one has been determined.
    pub fn index(self) -> Option<u16> {
        match self {
            EngineIndex::Index(index) => Some(index),
            _ => None,
        }
    }
}
