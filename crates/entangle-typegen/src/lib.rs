//! Entity-schema to TypeScript model generation.
//!
//! `entangle-typegen` converts backend entity descriptors (typed fields
//! plus relations) into TypeScript interface declarations, and endpoint
//! path lists into a constants class, so frontend model types stay in
//! sync with the backend schema without hand duplication.
//!
//! # Architecture
//!
//! ```text
//! Input                     Descriptors               Output
//! ─────────────         ──────────────────        ─────────────────────
//! schema JSON   ──>     EntityDescriptor    ──┬─> interface blocks
//! (input/)              (ir.rs, served by     └─> endpoint constants
//!                       the provider seam)
//! ```
//!
//! # Example
//!
//! ```
//! use entangle_typegen::ir::{EntityDescriptor, FieldDescriptor, NamespaceFilter};
//! use entangle_typegen::output::generate_interface;
//!
//! let mut entity = EntityDescriptor::new("App\\Entity\\User");
//! entity.fields.push(FieldDescriptor::required("id", "integer"));
//! entity.fields.push(FieldDescriptor::nullable("email", "string"));
//!
//! let rendered = generate_interface(&entity, &NamespaceFilter::default()).unwrap();
//! assert!(rendered.code.contains("export interface User"));
//! assert!(rendered.code.contains("email?: string;"));
//! ```

pub mod input;
pub mod ir;
pub mod output;
pub mod provider;

// Re-export commonly used items
pub use input::{ParseError, SchemaDocument, parse_schema, parse_schema_str};
pub use output::{RenderedInterface, generate_endpoints, generate_interface};
pub use provider::{AssembledDescriptor, EntityProvider, ProviderError, SchemaProvider, load_descriptor};
