//! Core types shared by the resolver, collector and sweeper.

use serde_json::Value;

/// Property holding a pointer string in a pointer object.
pub const REF_KEY: &str = "$ref";

/// HTTP methods a path item may declare operations for, in document order.
pub const PATH_ITEM_METHODS: &[&str] = &[
    "get", "put", "post", "delete", "options", "head", "patch", "trace",
];

/// Registry kinds whose unreachable entries are removed by `cleanup`.
pub const PRUNABLE_KINDS: &[ComponentKind] = &[
    ComponentKind::Schemas,
    ComponentKind::Responses,
    ComponentKind::Parameters,
    ComponentKind::Examples,
    ComponentKind::RequestBodies,
    ComponentKind::Headers,
];

/// Returns the JSON type name for error messages.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Returns the `$ref` string of a pointer object, if `value` is one.
///
/// A `$ref` holding anything other than a string does not make a pointer object.
pub fn ref_of(value: &Value) -> Option<&str> {
    value.get(REF_KEY).and_then(Value::as_str)
}

/// Named registry inside an OpenAPI `components` section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    Schemas,
    Responses,
    Parameters,
    Examples,
    RequestBodies,
    Headers,
    SecuritySchemes,
    Links,
    Callbacks,
    PathItems,
}

impl ComponentKind {
    /// Parse a registry name as found under `components`.
    ///
    /// Returns `None` for names outside OpenAPI 3.1 (e.g. `x-` extensions).
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "schemas" => Some(ComponentKind::Schemas),
            "responses" => Some(ComponentKind::Responses),
            "parameters" => Some(ComponentKind::Parameters),
            "examples" => Some(ComponentKind::Examples),
            "requestBodies" => Some(ComponentKind::RequestBodies),
            "headers" => Some(ComponentKind::Headers),
            "securitySchemes" => Some(ComponentKind::SecuritySchemes),
            "links" => Some(ComponentKind::Links),
            "callbacks" => Some(ComponentKind::Callbacks),
            "pathItems" => Some(ComponentKind::PathItems),
            _ => None,
        }
    }

    /// Returns the registry name used in documents and pointers.
    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentKind::Schemas => "schemas",
            ComponentKind::Responses => "responses",
            ComponentKind::Parameters => "parameters",
            ComponentKind::Examples => "examples",
            ComponentKind::RequestBodies => "requestBodies",
            ComponentKind::Headers => "headers",
            ComponentKind::SecuritySchemes => "securitySchemes",
            ComponentKind::Links => "links",
            ComponentKind::Callbacks => "callbacks",
            ComponentKind::PathItems => "pathItems",
        }
    }

    /// Whether unreachable entries of this kind are swept.
    pub fn is_prunable(&self) -> bool {
        PRUNABLE_KINDS.contains(self)
    }
}

/// Operations declared by a path item, keyed by method in `PATH_ITEM_METHODS` order.
///
/// Methods that are absent, `null` or `false` are skipped.
pub fn path_item_operations(path_item: &Value) -> Vec<(&'static str, &Value)> {
    PATH_ITEM_METHODS
        .iter()
        .filter_map(|method| match path_item.get(*method) {
            None | Some(Value::Null) | Some(Value::Bool(false)) => None,
            Some(operation) => Some((*method, operation)),
        })
        .collect()
}
