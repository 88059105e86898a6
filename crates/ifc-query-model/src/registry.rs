// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Type registry
//!
//! Subtype tests are flat set lookups: every registered type carries the
//! precomputed set of its ancestors (itself included), built once from the
//! static schema table.

use crate::schema::SCHEMA_ROWS;
use crate::TypeCode;
use once_cell::sync::Lazy;
use rustc_hash::{FxHashMap, FxHashSet};
use std::sync::Arc;

/// Type registry
///
/// Maps type codes to names, supertype chains and positional attribute names.
pub trait TypeRegistry: Send + Sync {
    /// Upper-case type name for a code
    fn type_name_of(&self, code: TypeCode) -> Option<&str>;

    /// Code for an exact type name (case-insensitive)
    fn code_of(&self, name: &str) -> Option<TypeCode>;

    /// Ancestor set of a type, including the type itself
    fn ancestors_of(&self, code: TypeCode) -> Option<&FxHashSet<TypeCode>>;

    /// Full attribute names of a type, inherited attributes first
    fn attribute_schema_of(&self, code: TypeCode) -> Option<&[&str]>;

    /// Every registered type code, in table order
    fn registered_codes(&self) -> Vec<TypeCode>;
}

#[derive(Debug)]
struct TypeInfo {
    name: &'static str,
    ancestors: FxHashSet<TypeCode>,
    attributes: Vec<&'static str>,
}

/// Registry backed by the static IFC4 schema table
#[derive(Debug)]
pub struct SchemaRegistry {
    types: FxHashMap<TypeCode, TypeInfo>,
    by_name: FxHashMap<&'static str, TypeCode>,
    order: Vec<TypeCode>,
}

static IFC4: Lazy<Arc<SchemaRegistry>> = Lazy::new(|| Arc::new(SchemaRegistry::from_rows()));

impl SchemaRegistry {
    /// Shared IFC4 registry, built on first use
    pub fn ifc4() -> Arc<SchemaRegistry> {
        Arc::clone(&IFC4)
    }

    fn from_rows() -> Self {
        let mut types: FxHashMap<TypeCode, TypeInfo> = FxHashMap::default();
        let mut by_name = FxHashMap::default();
        let mut order = Vec::with_capacity(SCHEMA_ROWS.len());

        // Rows list supertypes first, so the parent entry is always complete
        for row in SCHEMA_ROWS {
            let (mut ancestors, mut attributes) = match row.parent.and_then(|p| types.get(&p)) {
                Some(parent) => (parent.ancestors.clone(), parent.attributes.clone()),
                None => (FxHashSet::default(), Vec::new()),
            };
            ancestors.insert(row.code);
            attributes.extend_from_slice(row.attributes);

            types.insert(
                row.code,
                TypeInfo {
                    name: row.name,
                    ancestors,
                    attributes,
                },
            );
            by_name.insert(row.name, row.code);
            order.push(row.code);
        }

        Self {
            types,
            by_name,
            order,
        }
    }
}

impl TypeRegistry for SchemaRegistry {
    fn type_name_of(&self, code: TypeCode) -> Option<&str> {
        self.types.get(&code).map(|info| info.name)
    }

    fn code_of(&self, name: &str) -> Option<TypeCode> {
        match self.by_name.get(name) {
            Some(code) => Some(*code),
            None => self.by_name.get(name.to_ascii_uppercase().as_str()).copied(),
        }
    }

    fn ancestors_of(&self, code: TypeCode) -> Option<&FxHashSet<TypeCode>> {
        self.types.get(&code).map(|info| &info.ancestors)
    }

    fn attribute_schema_of(&self, code: TypeCode) -> Option<&[&str]> {
        self.types.get(&code).map(|info| info.attributes.as_slice())
    }

    fn registered_codes(&self) -> Vec<TypeCode> {
        self.order.clone()
    }
}
