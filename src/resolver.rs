//! Namespace resolution and alias-chain dereferencing.

use indexmap::IndexSet;
use serde_json::Value;

use crate::error::ReferenceError;
use crate::pointer::parse_pointer;
use crate::types::{json_type_name, ref_of};

/// Walk `root` along `namespace` and return the addressed value.
///
/// Objects are indexed by key, arrays by decimal index. Only an in-bounds
/// decimal index addresses an array element; any other segment on an array
/// (e.g. `length`) is an `UnresolvedProperty`. The returned value is
/// exactly what is stored and may itself be a pointer object.
///
/// # Errors
///
/// - `InvalidResolveBase` if a segment is applied to null or a scalar.
/// - `UnresolvedProperty` if the segment names nothing in the current value.
/// - `EmptyResolveTarget` if the final value is null.
pub fn resolve_namespace<'a, S: AsRef<str>>(
    root: &'a Value,
    namespace: &[S],
) -> Result<&'a Value, ReferenceError> {
    let mut resolved = root;

    for segment in namespace {
        let segment = segment.as_ref();
        let child = match resolved {
            Value::Object(map) => map.get(segment),
            Value::Array(arr) => segment.parse::<usize>().ok().and_then(|i| arr.get(i)),
            other => {
                return Err(ReferenceError::InvalidResolveBase {
                    namespace: to_owned_namespace(namespace),
                    segment: segment.to_string(),
                    found: json_type_name(other),
                })
            }
        };

        resolved = child.ok_or_else(|| ReferenceError::UnresolvedProperty {
            namespace: to_owned_namespace(namespace),
            segment: segment.to_string(),
        })?;
    }

    if resolved.is_null() {
        return Err(ReferenceError::EmptyResolveTarget {
            namespace: to_owned_namespace(namespace),
        });
    }

    Ok(resolved)
}

/// Parse `reference` and resolve it against `root`.
pub fn resolve_pointer<'a>(root: &'a Value, reference: &str) -> Result<&'a Value, ReferenceError> {
    let namespace = parse_pointer(reference)?;
    resolve_namespace(root, &namespace)
}

/// Follow `value` through pointer objects until a non-pointer value is reached.
///
/// Structural recursion inside the returned value is left alone; only direct
/// alias chains (`A -> B -> A`) are rejected.
///
/// # Errors
///
/// Propagates parser and resolver errors unchanged, and returns
/// `CyclicReference` when a pointer string reappears in the chain.
pub fn ensure_resolved<'a>(root: &'a Value, value: &'a Value) -> Result<&'a Value, ReferenceError> {
    let mut resolved = value;
    let mut chain: IndexSet<&str> = IndexSet::new();

    while let Some(reference) = ref_of(resolved) {
        if !chain.insert(reference) {
            let mut chain: Vec<String> = chain.iter().map(|r| r.to_string()).collect();
            chain.push(reference.to_string());
            return Err(ReferenceError::CyclicReference {
                reference: reference.to_string(),
                chain,
            });
        }
        resolved = resolve_pointer(root, reference)?;
    }

    Ok(resolved)
}

fn to_owned_namespace<S: AsRef<str>>(namespace: &[S]) -> Vec<String> {
    namespace.iter().map(|s| s.as_ref().to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // === Namespace Resolution Tests ===

    #[test]
    fn resolves_nested_property() {
        let doc = json!({ "a": { "b": 42 } });
        assert_eq!(resolve_namespace(&doc, &["a", "b"]).unwrap(), &json!(42));
    }

    #[test]
    fn empty_namespace_returns_root() {
        let doc = json!({ "a": 1 });
        let empty: [&str; 0] = [];
        assert_eq!(resolve_namespace(&doc, &empty).unwrap(), &doc);
    }

    #[test]
    fn returns_pointer_objects_unchanged() {
        let doc = json!({ "a": { "$ref": "#/b" }, "b": 1 });
        assert_eq!(
            resolve_namespace(&doc, &["a"]).unwrap(),
            &json!({ "$ref": "#/b" })
        );
    }

    #[test]
    fn missing_property_is_unresolved() {
        let doc = json!({ "a": { "b": 42 } });
        let err = resolve_namespace(&doc, &["a", "c"]).unwrap_err();
        assert_eq!(
            err,
            ReferenceError::UnresolvedProperty {
                namespace: vec!["a".into(), "c".into()],
                segment: "c".into(),
            }
        );
    }

    #[test]
    fn null_leaf_is_empty_target() {
        let doc = json!({ "a": { "b": null } });
        let err = resolve_namespace(&doc, &["a", "b"]).unwrap_err();
        assert_eq!(
            err,
            ReferenceError::EmptyResolveTarget {
                namespace: vec!["a".into(), "b".into()],
            }
        );
    }

    #[test]
    fn falsy_leaves_resolve() {
        let doc = json!({ "a": false, "b": 0, "c": "" });
        assert_eq!(resolve_namespace(&doc, &["a"]).unwrap(), &json!(false));
        assert_eq!(resolve_namespace(&doc, &["b"]).unwrap(), &json!(0));
        assert_eq!(resolve_namespace(&doc, &["c"]).unwrap(), &json!(""));
    }

    #[test]
    fn scalar_base_is_invalid() {
        let doc = json!({ "a": "text" });
        let err = resolve_namespace(&doc, &["a", "length"]).unwrap_err();
        assert_eq!(
            err,
            ReferenceError::InvalidResolveBase {
                namespace: vec!["a".into(), "length".into()],
                segment: "length".into(),
                found: "string",
            }
        );
    }

    #[test]
    fn null_base_is_invalid() {
        let doc = json!({ "a": null });
        let err = resolve_namespace(&doc, &["a", "b"]).unwrap_err();
        assert!(matches!(
            err,
            ReferenceError::InvalidResolveBase { ref segment, found: "null", .. } if segment == "b"
        ));
    }

    #[test]
    fn array_elements_by_index() {
        let doc = json!({ "tags": [{ "name": "pets" }, { "name": "store" }] });
        assert_eq!(
            resolve_namespace(&doc, &["tags", "1", "name"]).unwrap(),
            &json!("store")
        );

        let err = resolve_namespace(&doc, &["tags", "2"]).unwrap_err();
        assert!(matches!(err, ReferenceError::UnresolvedProperty { .. }));

        let err = resolve_namespace(&doc, &["tags", "length"]).unwrap_err();
        assert!(matches!(err, ReferenceError::UnresolvedProperty { .. }));
    }

    #[test]
    fn resolve_pointer_parses_first() {
        let doc = json!({ "components": { "schemas": { "Pet": { "type": "object" } } } });
        assert_eq!(
            resolve_pointer(&doc, "#/components/schemas/Pet").unwrap()["type"],
            "object"
        );
        assert!(matches!(
            resolve_pointer(&doc, "pets.json#/Pet"),
            Err(ReferenceError::UnsupportedReference { .. })
        ));
    }

    // === Dereferencing Tests ===

    #[test]
    fn ensure_resolved_chases_alias_chain() {
        let doc = json!({ "$defs": { "x": { "$ref": "#/$defs/y" }, "y": true } });
        let pointer = json!({ "$ref": "#/$defs/x" });
        assert_eq!(ensure_resolved(&doc, &pointer).unwrap(), &json!(true));
    }

    #[test]
    fn ensure_resolved_returns_non_pointers_unchanged() {
        let doc = json!({});
        let value = json!({ "type": "string" });
        assert_eq!(ensure_resolved(&doc, &value).unwrap(), &value);

        let value = json!([{ "$ref": "#/missing" }]);
        assert_eq!(ensure_resolved(&doc, &value).unwrap(), &value);
    }

    #[test]
    fn ensure_resolved_ignores_non_string_ref() {
        let doc = json!({});
        let value = json!({ "$ref": 12 });
        assert_eq!(ensure_resolved(&doc, &value).unwrap(), &value);
    }

    #[test]
    fn ensure_resolved_keeps_structural_recursion() {
        let doc = json!({
            "components": { "schemas": {
                "Node": { "properties": { "next": { "$ref": "#/components/schemas/Node" } } }
            } }
        });
        let pointer = json!({ "$ref": "#/components/schemas/Node" });
        let node = ensure_resolved(&doc, &pointer).unwrap();
        assert_eq!(node["properties"]["next"]["$ref"], "#/components/schemas/Node");
    }

    #[test]
    fn ensure_resolved_propagates_errors() {
        let doc = json!({ "a": { "$ref": "#/missing" } });
        let err = ensure_resolved(&doc, &json!({ "$ref": "#/a" })).unwrap_err();
        assert_eq!(
            err,
            ReferenceError::UnresolvedProperty {
                namespace: vec!["missing".into()],
                segment: "missing".into(),
            }
        );
    }

    #[test]
    fn ensure_resolved_detects_alias_cycle() {
        let doc = json!({ "a": { "$ref": "#/b" }, "b": { "$ref": "#/a" } });
        let err = ensure_resolved(&doc, &json!({ "$ref": "#/a" })).unwrap_err();
        assert_eq!(
            err,
            ReferenceError::CyclicReference {
                reference: "#/a".into(),
                chain: vec!["#/a".into(), "#/b".into(), "#/a".into()],
            }
        );
    }

    #[test]
    fn ensure_resolved_detects_self_alias() {
        let doc = json!({ "a": { "$ref": "#/a" } });
        let err = ensure_resolved(&doc, &json!({ "$ref": "#/a" })).unwrap_err();
        assert!(matches!(err, ReferenceError::CyclicReference { .. }));
    }
}
