//! The entity descriptor provider seam.
//!
//! Abstracts over wherever entity metadata comes from. This crate ships
//! [`SchemaProvider`], backed by a parsed schema document; callers may
//! implement [`EntityProvider`] over any other metadata source.

use crate::input::SchemaDocument;
use crate::ir::{AssociationDescriptor, EntityDescriptor, FieldDescriptor};

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("cannot enumerate entities: {0}")]
    Enumeration(String),
    #[error("unknown entity: {0}")]
    UnknownEntity(String),
    #[error("no mapping for field {field} on {entity}")]
    FieldMapping { entity: String, field: String },
}

/// A source of entity metadata.
pub trait EntityProvider {
    /// All known entity identifiers. Failure here is fatal to a
    /// generation run; no files are written.
    fn entity_names(&self) -> Result<Vec<String>, ProviderError>;

    /// Field names of one entity, in declaration order.
    fn field_names(&self, entity: &str) -> Result<Vec<String>, ProviderError>;

    /// Resolve one field's mapping. May fail per field; callers drop the
    /// field and continue.
    fn field_mapping(&self, entity: &str, field: &str) -> Result<FieldDescriptor, ProviderError>;

    /// Associations of one entity, in declaration order.
    fn associations(&self, entity: &str) -> Result<Vec<AssociationDescriptor>, ProviderError>;
}

/// A descriptor assembled from provider lookups, plus the fields that had
/// to be dropped because their mapping lookup failed.
#[derive(Debug)]
pub struct AssembledDescriptor {
    pub descriptor: EntityDescriptor,
    pub dropped_fields: Vec<(String, ProviderError)>,
}

/// Assemble the full descriptor for one entity.
///
/// A failed field-mapping lookup drops that field and continues with the
/// rest; enumeration-level lookups propagate their error.
pub fn load_descriptor<P: EntityProvider + ?Sized>(
    provider: &P,
    entity: &str,
) -> Result<AssembledDescriptor, ProviderError> {
    let mut descriptor = EntityDescriptor::new(entity);
    let mut dropped_fields = Vec::new();

    for field in provider.field_names(entity)? {
        match provider.field_mapping(entity, &field) {
            Ok(mapping) => descriptor.fields.push(mapping),
            Err(err) => dropped_fields.push((field, err)),
        }
    }
    descriptor.associations = provider.associations(entity)?;

    Ok(AssembledDescriptor {
        descriptor,
        dropped_fields,
    })
}

/// Entity provider backed by a parsed [`SchemaDocument`].
pub struct SchemaProvider {
    document: SchemaDocument,
}

impl SchemaProvider {
    pub fn new(document: SchemaDocument) -> Self {
        Self { document }
    }

    pub fn document(&self) -> &SchemaDocument {
        &self.document
    }

    fn entity(&self, identifier: &str) -> Result<&EntityDescriptor, ProviderError> {
        self.document
            .entities
            .iter()
            .find(|e| e.identifier == identifier)
            .ok_or_else(|| ProviderError::UnknownEntity(identifier.to_string()))
    }
}

impl EntityProvider for SchemaProvider {
    fn entity_names(&self) -> Result<Vec<String>, ProviderError> {
        Ok(self
            .document
            .entities
            .iter()
            .map(|e| e.identifier.clone())
            .collect())
    }

    fn field_names(&self, entity: &str) -> Result<Vec<String>, ProviderError> {
        Ok(self
            .entity(entity)?
            .fields
            .iter()
            .map(|f| f.name.clone())
            .collect())
    }

    fn field_mapping(&self, entity: &str, field: &str) -> Result<FieldDescriptor, ProviderError> {
        self.entity(entity)?
            .fields
            .iter()
            .find(|f| f.name == field)
            .cloned()
            .ok_or_else(|| ProviderError::FieldMapping {
                entity: entity.to_string(),
                field: field.to_string(),
            })
    }

    fn associations(&self, entity: &str) -> Result<Vec<AssociationDescriptor>, ProviderError> {
        Ok(self.entity(entity)?.associations.clone())
    }
}
