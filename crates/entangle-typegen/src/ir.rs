//! Descriptor model for entity rendering.
//!
//! Input parsers produce these descriptors; output renderers consume them.
//! Descriptors are built fresh per generation run and immutable once read.

use serde::{Deserialize, Serialize};

/// The conventional application entity namespace.
pub const DEFAULT_ENTITY_PATH: &str = "App\\Entity\\";

/// A backend entity: fully-qualified identifier plus its persisted fields
/// and relations, in declaration order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityDescriptor {
    /// Fully-qualified, `\`-separated name (e.g. `App\Entity\Blog\Post`).
    pub identifier: String,
    pub fields: Vec<FieldDescriptor>,
    pub associations: Vec<AssociationDescriptor>,
}

/// A persisted scalar field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub name: String,
    /// Semantic type from the schema source (`integer`, `string`,
    /// `datetime`, ...). Anything outside the known vocabulary renders
    /// as `any`.
    #[serde(rename = "type")]
    pub ty: String,
    /// Defaults to true when the schema source leaves it unspecified.
    pub nullable: bool,
}

/// A relation from one entity to another.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssociationDescriptor {
    /// Name of the member the relation renders as.
    pub name: String,
    /// Fully-qualified identifier of the target entity.
    pub target: String,
    pub cardinality: Cardinality,
}

/// Relation cardinality, collapsed for rendering. One-to-many,
/// many-to-many and generic to-many all count as [`Cardinality::ToMany`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Cardinality {
    ToOne,
    ToMany,
}

/// Which entities are in scope, decided by identifier prefix.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamespaceFilter {
    pub prefix: String,
    /// When set, entities whose identifier does not start with `prefix`
    /// are excluded entirely, with no partial output.
    pub discard_foreign: bool,
}

impl EntityDescriptor {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            fields: Vec::new(),
            associations: Vec::new(),
        }
    }
}

impl FieldDescriptor {
    pub fn nullable(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            nullable: true,
        }
    }

    pub fn required(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            nullable: false,
        }
    }
}

impl AssociationDescriptor {
    pub fn to_one(name: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            target: target.into(),
            cardinality: Cardinality::ToOne,
        }
    }

    pub fn to_many(name: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            target: target.into(),
            cardinality: Cardinality::ToMany,
        }
    }
}

impl NamespaceFilter {
    /// Prefix test used for entity filtering. Case-insensitive, unlike
    /// the literal strip applied during name derivation.
    pub fn accepts(&self, identifier: &str) -> bool {
        if !self.discard_foreign {
            return true;
        }
        identifier
            .get(..self.prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(&self.prefix))
    }
}

impl Default for NamespaceFilter {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_ENTITY_PATH.to_string(),
            discard_foreign: true,
        }
    }
}
