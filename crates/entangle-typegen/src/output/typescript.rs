//! TypeScript interface rendering.
//!
//! One entity descriptor in, one `export interface` block out: scalar
//! fields first in declaration order, association members appended after,
//! imports deduplicated by first occurrence.

use crate::ir::{Cardinality, EntityDescriptor, NamespaceFilter};

/// The rendered artifact for one entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedInterface {
    /// Prefix-stripped, separator-collapsed name (`BlogPost`).
    pub name: String,
    /// Members in output order: fields first, then associations.
    pub members: Vec<Member>,
    /// Import targets in first-occurrence order, no duplicates.
    pub imports: Vec<String>,
    /// The composed interface block.
    pub code: String,
}

/// One rendered member line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub name: String,
    /// Rendered type expression (`number`, `Array<Comment>`, ...).
    pub ty: String,
    pub optional: bool,
}

/// Map a schema field type to its TypeScript counterpart. Total: unknown
/// types fall back to `any`.
pub fn field_type_to_ts(ty: &str) -> &'static str {
    match ty {
        "integer" => "number",
        "text" | "string" => "string",
        "datetime" => "Date",
        "boolean" => "boolean",
        _ => "any",
    }
}

/// Strip `prefix` from the front of `identifier` and collapse the
/// remaining `\`-separated segments into one token.
///
/// `App\Entity\Blog\Post` with prefix `App\Entity\` becomes `BlogPost`.
/// A prefix that does not literally start the identifier strips nothing;
/// the whole identifier collapses instead.
pub fn simple_name(identifier: &str, prefix: &str) -> String {
    strip_front(identifier, prefix).split('\\').collect()
}

/// Literal front-strip only. Association targets keep their interior
/// separators, so a nested target imports as `Blog\Comment`, not
/// `BlogComment`.
fn strip_front<'a>(identifier: &'a str, prefix: &str) -> &'a str {
    identifier.strip_prefix(prefix).unwrap_or(identifier)
}

/// Render one entity as a TypeScript interface.
///
/// Returns `None` when the filter discards the entity; that is a normal
/// outcome for every entity outside the configured namespace, not an
/// error.
pub fn generate_interface(
    descriptor: &EntityDescriptor,
    filter: &NamespaceFilter,
) -> Option<RenderedInterface> {
    if !filter.accepts(&descriptor.identifier) {
        return None;
    }

    let name = simple_name(&descriptor.identifier, &filter.prefix);

    let mut members = Vec::with_capacity(descriptor.fields.len() + descriptor.associations.len());
    for field in &descriptor.fields {
        members.push(Member {
            name: field.name.clone(),
            ty: field_type_to_ts(&field.ty).to_string(),
            optional: field.nullable,
        });
    }

    let mut imports: Vec<String> = Vec::new();
    for association in &descriptor.associations {
        let target = strip_front(&association.target, &filter.prefix);
        if !imports.iter().any(|import| import == target) {
            imports.push(target.to_string());
        }
        let ty = match association.cardinality {
            Cardinality::ToMany => format!("Array<{}>", target),
            Cardinality::ToOne => target.to_string(),
        };
        members.push(Member {
            name: association.name.clone(),
            ty,
            optional: true,
        });
    }

    let code = compose(&name, &members, &imports);

    Some(RenderedInterface {
        name,
        members,
        imports,
        code,
    })
}

fn compose(name: &str, members: &[Member], imports: &[String]) -> String {
    let mut out = String::new();
    for import in imports {
        out.push_str(&format!("import {{{}}} from './{}';\n", import, import));
    }
    if !imports.is_empty() {
        out.push('\n');
    }
    out.push_str(&format!("export interface {} {{\n", name));
    for member in members {
        let optional = if member.optional { "?" } else { "" };
        out.push_str(&format!("\t{}{}: {};\n", member.name, optional, member.ty));
    }
    out.push('}');
    out
}
