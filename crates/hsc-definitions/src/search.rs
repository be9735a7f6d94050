//! Binary search over a name-sorted definition slice
//!
//! Free functions rather than methods so consumers of a generated
//! table-only module can run the same search over its static slice.

use std::cmp::Ordering;

use crate::definition::{BuiltinDefinition, BuiltinKind};
use crate::target::CompileTarget;

/// Find the definition named `what`.
///
/// `definitions` must be strictly ascending by name under byte-wise
/// comparison; both the builder and the emitter guarantee that. An empty
/// slice is never matched. O(log n) comparisons, no allocation.
pub fn find<'a>(definitions: &'a [BuiltinDefinition], what: &str) -> Option<&'a BuiltinDefinition> {
    // Signed bounds: narrowing below index 0 lands at -1 and ends the
    // loop instead of wrapping.
    let mut start: isize = 0;
    let mut end: isize = definitions.len() as isize - 1;
    while start <= end {
        // Truncating division favors the lower middle of an even range
        let middle = (start + end) / 2;
        let definition = &definitions[middle as usize];
        match what.as_bytes().cmp(definition.name.as_bytes()) {
            Ordering::Equal => return Some(definition),
            Ordering::Greater => start = middle + 1,
            Ordering::Less => end = middle - 1,
        }
    }
    None
}

/// Find `what`, requiring the kind to match and the built-in to exist on
/// the requested engine. A name match failing either filter is not found;
/// callers distinguishing "unknown name" from "not on this engine" can
/// search again with [`CompileTarget::Any`].
pub fn find_for<'a>(
    definitions: &'a [BuiltinDefinition],
    what: &str,
    target: CompileTarget,
    kind: Option<BuiltinKind>,
) -> Option<&'a BuiltinDefinition> {
    let definition = find(definitions, what)?;
    if let Some(kind) = kind {
        if definition.kind != kind {
            return None;
        }
    }
    if let CompileTarget::Specific(engine) = target {
        if !definition.available_on(engine) {
            return None;
        }
    }
    Some(definition)
}
