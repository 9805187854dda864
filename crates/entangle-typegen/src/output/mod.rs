//! Output renderers.
//!
//! Each renderer takes descriptors from [`ir`](crate::ir) and produces
//! TypeScript source text.

pub mod endpoints;
pub mod typescript;

pub use endpoints::generate_endpoints;
pub use typescript::{Member, RenderedInterface, field_type_to_ts, generate_interface, simple_name};
