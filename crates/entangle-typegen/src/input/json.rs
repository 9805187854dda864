//! Entity-schema JSON document parser.
//!
//! The document is the static stand-in for ORM metadata reflection: it
//! lists every entity with its fields and relations, plus an optional
//! endpoint path list.

use crate::ir::{AssociationDescriptor, Cardinality, EntityDescriptor, FieldDescriptor};
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("invalid schema document: {0}")]
    Json(#[from] serde_json::Error),
}

/// A parsed schema document: entity descriptors plus the endpoint paths.
#[derive(Debug, Clone, Default)]
pub struct SchemaDocument {
    pub entities: Vec<EntityDescriptor>,
    pub endpoints: Vec<String>,
}

/// Parse a schema document from a JSON value.
pub fn parse_schema(input: &Value) -> Result<SchemaDocument, ParseError> {
    let raw = RawDocument::deserialize(input)?;
    Ok(convert(raw))
}

/// Parse a schema document from JSON text.
pub fn parse_schema_str(input: &str) -> Result<SchemaDocument, ParseError> {
    let raw: RawDocument = serde_json::from_str(input)?;
    Ok(convert(raw))
}

fn convert(raw: RawDocument) -> SchemaDocument {
    let entities = raw
        .entities
        .into_iter()
        .map(|entity| EntityDescriptor {
            identifier: entity.name,
            fields: entity
                .fields
                .into_iter()
                .map(|field| FieldDescriptor {
                    name: field.name,
                    ty: field.ty,
                    nullable: field.nullable,
                })
                .collect(),
            associations: entity
                .relations
                .into_iter()
                .map(|relation| AssociationDescriptor {
                    name: relation.name,
                    target: relation.target,
                    cardinality: relation.kind.cardinality(),
                })
                .collect(),
        })
        .collect();

    SchemaDocument {
        entities,
        endpoints: raw.endpoints,
    }
}

#[derive(Deserialize)]
struct RawDocument {
    #[serde(default)]
    entities: Vec<RawEntity>,
    #[serde(default)]
    endpoints: Vec<String>,
}

#[derive(Deserialize)]
struct RawEntity {
    name: String,
    #[serde(default)]
    fields: Vec<RawField>,
    #[serde(default)]
    relations: Vec<RawRelation>,
}

#[derive(Deserialize)]
struct RawField {
    name: String,
    #[serde(rename = "type")]
    ty: String,
    #[serde(default = "default_nullable")]
    nullable: bool,
}

fn default_nullable() -> bool {
    true
}

#[derive(Deserialize)]
struct RawRelation {
    name: String,
    target: String,
    kind: RelationKind,
}

/// The relation vocabulary of the schema source. Rendering only cares
/// about the to-one / to-many split.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "kebab-case")]
enum RelationKind {
    OneToOne,
    ManyToOne,
    ToOne,
    OneToMany,
    ManyToMany,
    ToMany,
}

impl RelationKind {
    const fn cardinality(self) -> Cardinality {
        match self {
            Self::OneToOne | Self::ManyToOne | Self::ToOne => Cardinality::ToOne,
            Self::OneToMany | Self::ManyToMany | Self::ToMany => Cardinality::ToMany,
        }
    }
}
