// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! IFC Query STEP - Loader and in-memory model store
//!
//! This crate reads IFC (STEP) files and serves them through the
//! [`ModelStore`](ifc_query_model::ModelStore) trait defined in
//! `ifc-query-model`.
//!
//! # Features
//!
//! - **Fast tokenization** using `nom` combinators
//! - **SIMD-accelerated scanning** using `memchr`
//! - **Lazy entity decoding** - only parse entities when needed
//! - **Inverse relationship index** built once per model at load time
//! - **Multiple open models** addressed by opaque handles
//!
//! # Example
//!
//! ```ignore
//! use ifc_query_step::{StepParser, StepStore};
//!
//! let store = StepStore::with_parser(StepParser::new().with_strict(true));
//! let model = store.open_model(ifc_content)?;
//! println!("{} entities", store.metadata(model)?.entity_count);
//! store.close_model(model);
//! ```

mod inverse;
mod model;
mod scanner;
mod store;
mod tokenizer;

pub use inverse::InverseIndex;
pub use model::ParsedModel;
pub use scanner::{parse_header, EntityScanner, ScannedEntity};
pub use store::StepStore;
pub use tokenizer::{decode_step_string, parse_entity, Token};

use ifc_query_model::Result;

/// Load options for STEP content
///
/// Entry point for turning IFC text into a [`ParsedModel`].
#[derive(Clone, Debug)]
pub struct StepParser {
    /// Whether to build the inverse relationship index at load time
    pub build_inverse_index: bool,
    /// Whether to fail the load on duplicate or undecodable entities
    pub strict: bool,
}

impl Default for StepParser {
    fn default() -> Self {
        Self::new()
    }
}

impl StepParser {
    /// Create a new parser with default settings
    pub fn new() -> Self {
        Self {
            build_inverse_index: true,
            strict: false,
        }
    }

    /// Set whether to build the inverse relationship index
    ///
    /// Without it, every inverse lookup scans the relationship entities of
    /// the requested kind.
    pub fn with_inverse_index(mut self, enabled: bool) -> Self {
        self.build_inverse_index = enabled;
        self
    }

    /// Set strict mode
    ///
    /// Strict loads decode every entity up front and reject the file on the
    /// first failure. Lenient loads skip bad entities with a warning.
    pub fn with_strict(mut self, enabled: bool) -> Self {
        self.strict = enabled;
        self
    }

    /// Parse IFC content into a model
    pub fn parse(&self, content: &str) -> Result<ParsedModel> {
        ParsedModel::parse(content, self)
    }
}

/// Quick parse function for simple use cases
pub fn parse(content: &str) -> Result<ParsedModel> {
    StepParser::new().parse(content)
}
