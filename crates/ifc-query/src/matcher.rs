// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Type matcher
//!
//! Code ↔ name lookups and subtype tests over a [`TypeRegistry`].

use ifc_query_model::{DecodedEntity, QueryError, QueryResult, TypeCode, TypeRegistry};

pub(crate) struct TypeMatcher<'a> {
    registry: &'a dyn TypeRegistry,
}

impl<'a> TypeMatcher<'a> {
    pub fn new(registry: &'a dyn TypeRegistry) -> Self {
        Self { registry }
    }

    /// Registered name of a code
    pub fn type_name(&self, code: TypeCode) -> QueryResult<&'a str> {
        self.registry
            .type_name_of(code)
            .ok_or(QueryError::TypeUnknown(code))
    }

    /// Code of an exact type name
    pub fn code_of_name(&self, name: &str) -> QueryResult<TypeCode> {
        self.registry
            .code_of(name)
            .ok_or_else(|| QueryError::TypeNameUnknown(name.to_string()))
    }

    /// Whether `code` is `ancestor` or one of its subtypes
    pub fn is_subtype(&self, code: TypeCode, ancestor: TypeCode) -> QueryResult<bool> {
        self.type_name(ancestor)?;
        let ancestors = self
            .registry
            .ancestors_of(code)
            .ok_or(QueryError::TypeUnknown(code))?;
        Ok(ancestors.contains(&ancestor))
    }

    /// `code` and all registered subtypes, in registry order
    pub fn subtypes_of(&self, code: TypeCode) -> QueryResult<Vec<TypeCode>> {
        self.type_name(code)?;
        Ok(self
            .registry
            .registered_codes()
            .into_iter()
            .filter(|candidate| {
                self.registry
                    .ancestors_of(*candidate)
                    .is_some_and(|ancestors| ancestors.contains(&code))
            })
            .collect())
    }

    /// Registered code of an entity's type
    pub fn code_of_entity(&self, entity: &DecodedEntity) -> Option<TypeCode> {
        entity
            .ifc_type
            .code()
            .filter(|code| self.registry.type_name_of(*code).is_some())
            .or_else(|| self.registry.code_of(entity.ifc_type.name()))
    }

    /// Whether an entity's type is `ancestor` or a subtype of it
    pub fn entity_is_a(&self, entity: &DecodedEntity, ancestor: TypeCode) -> bool {
        self.code_of_entity(entity)
            .and_then(|code| self.registry.ancestors_of(code))
            .is_some_and(|ancestors| ancestors.contains(&ancestor))
    }

    /// Upper-case type name of an entity
    pub fn entity_type_name(&self, entity: &DecodedEntity) -> String {
        self.code_of_entity(entity)
            .and_then(|code| self.registry.type_name_of(code))
            .unwrap_or_else(|| entity.ifc_type.name())
            .to_string()
    }

    /// Positional attribute names of an entity's type
    pub fn attribute_names(&self, entity: &DecodedEntity) -> &'a [&'a str] {
        self.code_of_entity(entity)
            .and_then(|code| self.registry.attribute_schema_of(code))
            .unwrap_or(&[])
    }
}
