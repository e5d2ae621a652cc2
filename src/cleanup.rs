//! Unused component elimination (mark from `paths`/`webhooks`, then sweep `components`).

use indexmap::IndexSet;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::collector::reachable_references;
use crate::error::ReferenceError;
use crate::pointer::{component_pointer, parse_pointer};
use crate::types::ComponentKind;

const COMPONENTS_KEY: &str = "components";

/// Reachability summary for a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UsageReport {
    /// References reachable from `paths` and `webhooks`, in discovery order.
    pub used: Vec<String>,
    /// Canonical addresses of prunable entries `cleanup` would remove.
    pub unused: Vec<String>,
}

impl UsageReport {
    /// Returns true if cleanup would remove nothing.
    pub fn is_clean(&self) -> bool {
        self.unused.is_empty()
    }
}

/// Remove unreachable entries from the prunable component registries.
///
/// Returns a new document; `document` is not modified. Non-prunable registries
/// (security schemes, links, callbacks, path items, extensions) and every other
/// top-level property are copied through unchanged. The result always carries
/// a `components` object. An entry is kept when a reachable pointer addresses
/// it or any value inside it, so running `cleanup` on its own output changes
/// nothing.
///
/// # Errors
///
/// Returns `ReferenceError` if any reference reachable from `paths` or
/// `webhooks` is unsupported, malformed or dangling.
pub fn cleanup(document: &Value) -> Result<Value, ReferenceError> {
    let reachable = reachable_references(document)?;
    let owners = reachable_entries(&reachable);

    let mut removed = 0usize;
    let mut components = Map::new();

    if let Some(Value::Object(registries)) = document.get(COMPONENTS_KEY) {
        for (name, registry) in registries {
            let swept = match prunable_kind(name) {
                Some(kind) => {
                    let (kept, dropped) = sweep_registry(kind, registry, &owners);
                    removed += dropped;
                    Value::Object(kept)
                }
                None => registry.clone(),
            };
            components.insert(name.clone(), swept);
        }
    }

    tracing::info!(
        reachable = reachable.len(),
        removed,
        "swept unused components"
    );

    let mut result = match document {
        Value::Object(map) => map.clone(),
        _ => Map::new(),
    };
    result.insert(COMPONENTS_KEY.to_string(), Value::Object(components));

    Ok(Value::Object(result))
}

/// Compute which references are used and which prunable entries are not.
pub fn usage_report(document: &Value) -> Result<UsageReport, ReferenceError> {
    let reachable = reachable_references(document)?;
    let owners = reachable_entries(&reachable);

    let mut unused = Vec::new();
    if let Some(Value::Object(registries)) = document.get(COMPONENTS_KEY) {
        for (name, registry) in registries {
            let (Some(kind), Some(entries)) = (prunable_kind(name), registry.as_object()) else {
                continue;
            };
            unused.extend(
                entries
                    .keys()
                    .map(|key| component_pointer(kind, key))
                    .filter(|address| !owners.contains(address)),
            );
        }
    }

    Ok(UsageReport {
        used: reachable.into_iter().collect(),
        unused,
    })
}

// --- Internal implementation ---

fn prunable_kind(name: &str) -> Option<ComponentKind> {
    ComponentKind::parse(name).filter(ComponentKind::is_prunable)
}

/// Canonical addresses of the prunable entries that own a reachable pointer.
///
/// `#/components/schemas/A/properties/b` keeps `#/components/schemas/A` alive.
fn reachable_entries(reachable: &IndexSet<String>) -> IndexSet<String> {
    reachable
        .iter()
        .filter_map(|reference| {
            let segments = parse_pointer(reference).ok()?;
            match segments.as_slice() {
                [components, kind, key, ..] if components == COMPONENTS_KEY => {
                    prunable_kind(kind).map(|kind| component_pointer(kind, key))
                }
                _ => None,
            }
        })
        .collect()
}

/// Keep only the entries whose canonical address is in `owners`.
///
/// A registry that is not an object has no addressable entries and sweeps to `{}`.
fn sweep_registry(
    kind: ComponentKind,
    registry: &Value,
    owners: &IndexSet<String>,
) -> (Map<String, Value>, usize) {
    let Some(entries) = registry.as_object() else {
        return (Map::new(), 0);
    };

    let mut kept = Map::new();
    let mut dropped = 0;
    for (key, entry) in entries {
        let address = component_pointer(kind, key);
        if owners.contains(&address) {
            kept.insert(key.clone(), entry.clone());
        } else {
            tracing::debug!(%address, "removing unused component");
            dropped += 1;
        }
    }

    (kept, dropped)
}
