//! hubgen-codegen - Schema translation and module emission
//!
//! Turns a resolved [`CatalogSnapshot`](hubgen_core::CatalogSnapshot) into
//! four strongly-typed TypeScript client modules:
//! - [`naming`] resolves free-text labels to legal, stable symbol names
//! - [`schema`] maps the closed capability schema vocabulary to type
//!   expressions
//! - [`context`] assigns unique names per scope and carries cross-module
//!   reference tables
//! - [`emit`] assembles `capabilities.ts`, `devices.ts`, `scenes.ts`, and
//!   `locations.ts`
//!
//! The whole pipeline is pure: no I/O happens here, and for a fixed snapshot
//! two runs produce byte-identical output.

pub mod context;
pub mod emit;
pub mod naming;
pub mod schema;

pub use context::NamingContext;
pub use emit::{GeneratedFile, generate};
pub use schema::SchemaNode;
