// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Fast entity scanner using SIMD-accelerated byte searching
//!
//! Scans IFC files to discover entities without full parsing.

use crate::tokenizer::decode_step_string;
use ifc_query_model::ModelMetadata;
use memchr::memchr;

/// One entity definition found by the scanner
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScannedEntity<'a> {
    /// Express id
    pub id: u32,
    /// Type name as written in the file
    pub type_name: &'a str,
    /// Byte offset of the leading `#`
    pub start: usize,
    /// Byte offset just past the terminating `;`
    pub end: usize,
}

/// Fast entity scanner for IFC files
///
/// Uses memchr for SIMD-accelerated scanning to quickly find entity
/// boundaries without full parsing.
pub struct EntityScanner<'a> {
    content: &'a str,
    pos: usize,
}

impl<'a> EntityScanner<'a> {
    /// Create a new scanner for the given content
    pub fn new(content: &'a str) -> Self {
        // Skip header section (find DATA; line)
        let pos = content.find("DATA;").map(|p| p + 5).unwrap_or(0);

        Self { content, pos }
    }

    /// Scan to find the next entity
    pub fn next_entity(&mut self) -> Option<ScannedEntity<'a>> {
        let bytes = self.content.as_bytes();

        while self.pos < bytes.len() {
            let hash_pos = memchr(b'#', &bytes[self.pos..])?;
            self.pos += hash_pos;

            // Definitions start a line; references sit inside attribute lists
            let is_entity_start = self.pos == 0
                || matches!(bytes[self.pos - 1], b'\n' | b'\r' | b';' | b' ' | b'\t');

            if !is_entity_start {
                self.pos += 1;
                continue;
            }

            let start = self.pos;

            self.pos += 1; // Skip #
            let id_start = self.pos;

            while self.pos < bytes.len() && bytes[self.pos].is_ascii_digit() {
                self.pos += 1;
            }

            let Ok(id) = self.content[id_start..self.pos].parse::<u32>() else {
                continue;
            };

            self.skip_blanks();

            if self.pos >= bytes.len() || bytes[self.pos] != b'=' {
                continue;
            }
            self.pos += 1; // Skip =

            self.skip_blanks();

            let type_start = self.pos;
            while self.pos < bytes.len()
                && (bytes[self.pos].is_ascii_alphanumeric() || bytes[self.pos] == b'_')
            {
                self.pos += 1;
            }

            if self.pos == type_start {
                continue;
            }

            let type_name = &self.content[type_start..self.pos];
            let end = self.find_entity_end()?;

            return Some(ScannedEntity {
                id,
                type_name,
                start,
                end,
            });
        }

        None
    }

    fn skip_blanks(&mut self) {
        let bytes = self.content.as_bytes();
        while self.pos < bytes.len() && (bytes[self.pos] == b' ' || bytes[self.pos] == b'\t') {
            self.pos += 1;
        }
    }

    /// Find the end of an entity (semicolon), handling quoted strings
    fn find_entity_end(&mut self) -> Option<usize> {
        let bytes = self.content.as_bytes();
        let mut in_string = false;

        while self.pos < bytes.len() {
            match bytes[self.pos] {
                b'\'' => {
                    // Check for escaped quote ''
                    if in_string && self.pos + 1 < bytes.len() && bytes[self.pos + 1] == b'\'' {
                        self.pos += 2;
                        continue;
                    }
                    in_string = !in_string;
                }
                b';' if !in_string => {
                    self.pos += 1;
                    return Some(self.pos);
                }
                _ => {}
            }
            self.pos += 1;
        }

        None
    }
}

impl<'a> Iterator for EntityScanner<'a> {
    type Item = ScannedEntity<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_entity()
    }
}

/// Parse the header section to extract metadata
///
/// Missing or malformed header records leave the matching fields empty.
pub fn parse_header(content: &str) -> ModelMetadata {
    let mut info = ModelMetadata::default();

    let header_start = content.find("HEADER;").unwrap_or(0);
    let header_end = content[header_start..]
        .find("ENDSEC;")
        .map(|p| header_start + p)
        .unwrap_or(content.len());
    let header = &content[header_start..header_end];

    if let Some(args) = record_args(header, "FILE_SCHEMA") {
        if let Some((schemas, _)) = parse_header_list(args) {
            info.schema_version = schemas.into_iter().next().unwrap_or_default();
        }
    }

    if let Some(args) = record_args(header, "FILE_DESCRIPTION") {
        if let Some((description, _)) = parse_header_list(args) {
            if !description.is_empty() {
                info.file_description = Some(description.join(", "));
            }
        }
    }

    if let Some(args) = record_args(header, "FILE_NAME") {
        read_file_name(args, &mut info);
    }

    info
}

/// FILE_NAME(name, timestamp, (author), (organization), preprocessor, originating_system, authorization)
fn read_file_name(args: &str, info: &mut ModelMetadata) -> Option<()> {
    let (file_name, rest) = parse_header_string(args)?;
    info.file_name = non_empty(file_name);

    let (timestamp, rest) = parse_header_string(next_arg(rest)?)?;
    info.timestamp = non_empty(timestamp);

    let (authors, rest) = parse_header_list(next_arg(rest)?)?;
    info.author = authors.into_iter().next();

    let (organizations, rest) = parse_header_list(next_arg(rest)?)?;
    info.organization = organizations.into_iter().next();

    let (preprocessor, rest) = parse_header_string(next_arg(rest)?)?;
    info.preprocessor_version = non_empty(preprocessor);

    let (originating_system, _) = parse_header_string(next_arg(rest)?)?;
    info.originating_system = non_empty(originating_system);

    Some(())
}

/// Text following the opening parenthesis of a header record
fn record_args<'a>(header: &'a str, keyword: &str) -> Option<&'a str> {
    let at = header.find(keyword)?;
    let paren = header[at..].find('(')?;
    Some(&header[at + paren + 1..])
}

fn next_arg(s: &str) -> Option<&str> {
    let comma = s.find(',')?;
    Some(&s[comma + 1..])
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

/// Parse a string from header ('value')
fn parse_header_string(s: &str) -> Option<(String, &str)> {
    let s = s.trim_start();
    if let Some(rest) = s.strip_prefix('$') {
        return Some((String::new(), rest));
    }
    let body = s.strip_prefix('\'')?;

    let bytes = body.as_bytes();
    let mut end = 0;
    while end < bytes.len() {
        if bytes[end] == b'\'' {
            if bytes.get(end + 1) == Some(&b'\'') {
                end += 2;
                continue;
            }
            return Some((decode_step_string(&body[..end]), &body[end + 1..]));
        }
        end += 1;
    }

    None
}

/// Parse a list from header (('value1', 'value2'))
fn parse_header_list(s: &str) -> Option<(Vec<String>, &str)> {
    let s = s.trim_start();
    let Some(mut current) = s.strip_prefix('(') else {
        // A bare string or `$` where a list is expected
        let (item, rest) = parse_header_string(s)?;
        return Some((non_empty(item).into_iter().collect(), rest));
    };

    let mut items = Vec::new();
    loop {
        current = current.trim_start();
        if let Some(rest) = current.strip_prefix(')') {
            return Some((items, rest));
        }

        let (item, rest) = parse_header_string(current)?;
        if !item.is_empty() {
            items.push(item);
        }
        current = rest.trim_start();
        if let Some(rest) = current.strip_prefix(',') {
            current = rest;
        }
    }
}
