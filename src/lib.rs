//! OpenAPI Local Reference Engine
//!
//! Resolution of local `$ref` pointers and removal of unused components.
//!
//! The engine works on any `serde_json::Value`. It understands three things:
//! pointer objects (`{ "$ref": "#/..." }`), the `paths`/`webhooks` graph roots,
//! and the registries under `components`. Everything else is carried through
//! untouched.
//!
//! # Example
//!
//! ```
//! use openapi_refs::{cleanup, ensure_resolved};
//! use serde_json::json;
//!
//! let api = json!({
//!     "openapi": "3.1.0",
//!     "paths": {
//!         "/pets": {
//!             "get": {
//!                 "responses": { "200": { "$ref": "#/components/responses/Pets" } }
//!             }
//!         }
//!     },
//!     "components": {
//!         "responses": {
//!             "Pets": { "description": "pets" },
//!             "Unused": { "description": "never referenced" }
//!         }
//!     }
//! });
//!
//! let cleaned = cleanup(&api).unwrap();
//! assert!(cleaned["components"]["responses"].get("Pets").is_some());
//! assert!(cleaned["components"]["responses"].get("Unused").is_none());
//!
//! let pointer = &api["paths"]["/pets"]["get"]["responses"]["200"];
//! let response = ensure_resolved(&api, pointer).unwrap();
//! assert_eq!(response["description"], "pets");
//! ```
//!
//! # Error Kinds
//!
//! | Kind | Raised when |
//! |------|-------------|
//! | `UnsupportedReference` | pointer does not start with `#/` |
//! | `MalformedReference` | pointer has an empty segment |
//! | `InvalidResolveBase` | a segment is applied to null or a scalar |
//! | `UnresolvedProperty` | a segment names a missing property |
//! | `EmptyResolveTarget` | the pointer resolves to null |
//! | `CyclicReference` | an alias chain loops back on itself |
//!
//! # Pruned Registries
//!
//! `schemas`, `responses`, `parameters`, `examples`, `requestBodies` and
//! `headers` keep only reachable entries. Other registries pass through.

mod cleanup;
mod collector;
mod error;
mod loader;
mod pointer;
mod resolver;
mod types;

pub use cleanup::{cleanup, usage_report, UsageReport};
pub use collector::{collect_used_references, reachable_references, GRAPH_ROOTS};
pub use error::{LoadError, ReferenceError};
pub use loader::{load_document, load_document_str};
pub use pointer::{component_pointer, parse_pointer};
pub use resolver::{ensure_resolved, resolve_namespace, resolve_pointer};
pub use types::{
    json_type_name, path_item_operations, ref_of, ComponentKind, PATH_ITEM_METHODS,
    PRUNABLE_KINDS, REF_KEY,
};

pub use indexmap::IndexSet;
