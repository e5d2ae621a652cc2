//! Reachability collection - finds every local `$ref` used from a subtree.

use indexmap::IndexSet;
use serde_json::Value;

use crate::error::ReferenceError;
use crate::resolver::resolve_pointer;
use crate::types::REF_KEY;

/// Graph roots of an OpenAPI document, in collection order.
pub const GRAPH_ROOTS: &[&str] = &["paths", "webhooks"];

/// Collect every pointer string transitively reachable from `node`.
///
/// References come back in first-discovered order: depth-first, left-to-right,
/// with a `$ref` target expanded before the sibling properties of its pointer
/// object are scanned. A reference already in `used` is never expanded again,
/// which is what keeps recursive schemas finite.
///
/// # Errors
///
/// Any reference that fails to parse or resolve aborts the whole collection.
pub fn collect_used_references(
    root: &Value,
    node: &Value,
    mut used: IndexSet<String>,
) -> Result<IndexSet<String>, ReferenceError> {
    match node {
        Value::Array(arr) => {
            for item in arr {
                used = collect_used_references(root, item, used)?;
            }
        }
        Value::Object(map) => {
            if let Some(reference) = map.get(REF_KEY).and_then(Value::as_str) {
                if !used.contains(reference) {
                    used.insert(reference.to_string());
                    tracing::trace!(reference, "recorded reference");

                    let target = resolve_pointer(root, reference)?;
                    used = collect_used_references(root, target, used)?;
                }
            }

            for (key, value) in map {
                if key == REF_KEY {
                    continue;
                }
                used = collect_used_references(root, value, used)?;
            }
        }
        // Scalars hold no references
        _ => {}
    }

    Ok(used)
}

/// Collect the references reachable from the document's `paths` and `webhooks`.
///
/// Each root is collected from an empty set and the results are merged,
/// keeping first-seen order. A missing root contributes nothing.
pub fn reachable_references(document: &Value) -> Result<IndexSet<String>, ReferenceError> {
    let mut reachable = IndexSet::new();

    for root_key in GRAPH_ROOTS {
        let Some(graph) = document.get(*root_key) else {
            continue;
        };
        let found = collect_used_references(document, graph, IndexSet::new())?;
        tracing::debug!(root = *root_key, count = found.len(), "collected references");
        reachable.extend(found);
    }

    Ok(reachable)
}
