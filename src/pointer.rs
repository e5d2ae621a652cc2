//! Local pointer parsing (`#/a/b/c` into segments).

use crate::error::ReferenceError;
use crate::types::ComponentKind;

const LOCAL_PREFIX: &str = "#/";

/// Split a local pointer into its property-name segments.
///
/// Segments are used verbatim: `~0` and `~1` are not unescaped.
///
/// # Errors
///
/// `UnsupportedReference` if `reference` does not start with `#/`,
/// `MalformedReference` if any segment is empty.
pub fn parse_pointer(reference: &str) -> Result<Vec<String>, ReferenceError> {
    let Some(path) = reference.strip_prefix(LOCAL_PREFIX) else {
        return Err(ReferenceError::UnsupportedReference {
            reference: reference.to_string(),
        });
    };

    let segments: Vec<String> = path.split('/').map(String::from).collect();

    if segments.iter().any(String::is_empty) {
        return Err(ReferenceError::MalformedReference {
            reference: reference.to_string(),
            segments,
        });
    }

    Ok(segments)
}

/// Canonical address of a registry entry: `#/components/<kind>/<key>`.
pub fn component_pointer(kind: ComponentKind, key: &str) -> String {
    format!("{}components/{}/{}", LOCAL_PREFIX, kind.as_str(), key)
}
