// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! STEP file tokenizer using nom combinators
//!
//! Parses STEP/IFC entity definitions into tokens.

use ifc_query_model::{AttributeValue, DecodedEntity, EntityId, IfcType, ParseError, Result};
use nom::{
    branch::alt,
    bytes::complete::{take_while, take_while1},
    character::complete::{char, multispace0},
    combinator::{opt, recognize},
    error::{Error, ErrorKind},
    multi::separated_list0,
    sequence::{delimited, pair},
    IResult, Parser,
};

/// Raw token from STEP file (before conversion to AttributeValue)
#[derive(Clone, Debug, PartialEq)]
pub enum Token<'a> {
    /// Entity reference (#123)
    EntityRef(u32),
    /// String value ('text'), still escaped
    String(&'a str),
    /// Integer value
    Integer(i64),
    /// Float value
    Float(f64),
    /// Enumeration (.VALUE.)
    Enum(&'a str),
    /// List of tokens
    List(Vec<Token<'a>>),
    /// Typed value like IFCLABEL('text')
    TypedValue(&'a str, Vec<Token<'a>>),
    /// Null value ($)
    Null,
    /// Derived value (*)
    Derived,
}

impl<'a> Token<'a> {
    /// Convert token to owned AttributeValue
    pub fn to_attribute_value(&self) -> AttributeValue {
        match self {
            Token::EntityRef(id) => AttributeValue::EntityRef(EntityId(*id)),
            Token::String(s) => AttributeValue::String(decode_step_string(s)),
            Token::Integer(i) => AttributeValue::Integer(*i),
            Token::Float(f) => AttributeValue::Float(*f),
            Token::Enum("T") => AttributeValue::Bool(true),
            Token::Enum("F") => AttributeValue::Bool(false),
            Token::Enum(s) => AttributeValue::Enum((*s).to_string()),
            Token::List(items) => {
                AttributeValue::List(items.iter().map(|t| t.to_attribute_value()).collect())
            }
            Token::TypedValue(name, args) => AttributeValue::TypedValue(
                name.to_ascii_uppercase(),
                args.iter().map(|t| t.to_attribute_value()).collect(),
            ),
            Token::Null => AttributeValue::Null,
            Token::Derived => AttributeValue::Derived,
        }
    }
}

/// Decode the escapes of a STEP string body
///
/// Handles doubled quotes, `\\`, `\S\` (upper half of ISO 8859-1),
/// `\X\HH` (one ISO 8859-1 byte) and `\X2\...\X0\` (UTF-16 code units).
/// Malformed escapes are kept verbatim.
pub fn decode_step_string(raw: &str) -> String {
    if !raw.contains('\\') && !raw.contains('\'') {
        return raw.to_string();
    }

    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;

    while let Some(pos) = rest.find(['\\', '\'']) {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];

        if let Some(after) = tail.strip_prefix("''") {
            out.push('\'');
            rest = after;
        } else if let Some(after) = tail.strip_prefix("\\X2\\") {
            let end = after.find("\\X0\\").unwrap_or(after.len());
            let units: Vec<u16> = after[..end]
                .as_bytes()
                .chunks(4)
                .filter_map(|chunk| {
                    std::str::from_utf8(chunk)
                        .ok()
                        .and_then(|hex| u16::from_str_radix(hex, 16).ok())
                })
                .collect();
            out.extend(
                char::decode_utf16(units).map(|c| c.unwrap_or(char::REPLACEMENT_CHARACTER)),
            );
            rest = after.get(end + 4..).unwrap_or("");
        } else if let Some(after) = tail.strip_prefix("\\X\\") {
            match after.get(..2).and_then(|hex| u8::from_str_radix(hex, 16).ok()) {
                Some(byte) => {
                    out.push(char::from(byte));
                    rest = &after[2..];
                }
                None => {
                    out.push_str("\\X\\");
                    rest = after;
                }
            }
        } else if let Some(after) = tail.strip_prefix("\\S\\") {
            let mut chars = after.chars();
            match chars.next() {
                Some(c) if c.is_ascii() => {
                    out.push(char::from(c as u8 + 128));
                    rest = chars.as_str();
                }
                _ => {
                    out.push_str("\\S\\");
                    rest = after;
                }
            }
        } else if let Some(after) = tail.strip_prefix("\\\\") {
            out.push('\\');
            rest = after;
        } else {
            out.push_str(&tail[..1]);
            rest = &tail[1..];
        }
    }

    out.push_str(rest);
    out
}

// ============================================================================
// Parsing Primitives
// ============================================================================

/// Parse whitespace, including `/* ... */` comments
fn ws(mut input: &str) -> IResult<&str, ()> {
    loop {
        let (rest, _) = multispace0(input)?;
        match rest.strip_prefix("/*") {
            Some(body) => match body.find("*/") {
                Some(end) => input = &body[end + 2..],
                None => return Err(nom::Err::Error(Error::new(rest, ErrorKind::Tag))),
            },
            None => return Ok((rest, ())),
        }
    }
}

/// Parse an entity reference (#123)
fn entity_ref(input: &str) -> IResult<&str, Token> {
    let (rest, _) = char('#')(input)?;
    let (rest, digits) = take_while1(|c: char| c.is_ascii_digit())(rest)?;
    match digits.parse::<u32>() {
        Ok(id) => Ok((rest, Token::EntityRef(id))),
        Err(_) => Err(nom::Err::Error(Error::new(input, ErrorKind::Digit))),
    }
}

/// Parse a STEP string ('text' with '' for escaped quotes)
fn step_string(input: &str) -> IResult<&str, Token> {
    let (input, _) = char('\'')(input)?;

    // Find the end of the string, handling escaped quotes ('')
    let bytes = input.as_bytes();
    let mut end = 0;
    loop {
        match memchr::memchr(b'\'', &bytes[end..]) {
            Some(offset) => {
                end += offset;
                if bytes.get(end + 1) == Some(&b'\'') {
                    end += 2;
                    continue;
                }
                break;
            }
            None => return Err(nom::Err::Error(Error::new(input, ErrorKind::Char))),
        }
    }

    Ok((&input[end + 1..], Token::String(&input[..end])))
}

/// Parse a number (integer or float)
fn number(input: &str) -> IResult<&str, Token> {
    let (rest, num_str) = recognize((
        opt(alt((char('-'), char('+')))),
        take_while1(|c: char| c.is_ascii_digit()),
        opt(pair(char('.'), take_while(|c: char| c.is_ascii_digit()))),
        opt((
            alt((char('e'), char('E'))),
            opt(alt((char('+'), char('-')))),
            take_while1(|c: char| c.is_ascii_digit()),
        )),
    ))
    .parse(input)?;

    // Use lexical-core for fast parsing; STEP reals like `0.` fall back to std
    let token = if num_str.contains(['.', 'e', 'E']) {
        lexical_core::parse::<f64>(num_str.as_bytes())
            .ok()
            .or_else(|| num_str.parse::<f64>().ok())
            .map(Token::Float)
    } else {
        lexical_core::parse::<i64>(num_str.as_bytes())
            .ok()
            .map(Token::Integer)
    };

    token
        .map(|t| (rest, t))
        .ok_or_else(|| nom::Err::Error(Error::new(input, ErrorKind::Float)))
}

/// Parse an enumeration (.VALUE.)
fn enumeration(input: &str) -> IResult<&str, Token> {
    let (input, _) = char('.')(input)?;
    let (input, name) = take_while1(|c: char| c.is_alphanumeric() || c == '_')(input)?;
    let (input, _) = char('.')(input)?;
    Ok((input, Token::Enum(name)))
}

/// Parse null ($)
fn null_value(input: &str) -> IResult<&str, Token> {
    let (input, _) = char('$')(input)?;
    Ok((input, Token::Null))
}

/// Parse derived (*)
fn derived_value(input: &str) -> IResult<&str, Token> {
    let (input, _) = char('*')(input)?;
    Ok((input, Token::Derived))
}

/// Parse a parenthesized, comma separated token sequence
fn token_sequence(input: &str) -> IResult<&str, Vec<Token>> {
    delimited(
        pair(char('('), ws),
        separated_list0((ws, char(','), ws), token),
        pair(ws, char(')')),
    )
    .parse(input)
}

/// Parse a list of tokens
fn list(input: &str) -> IResult<&str, Token> {
    let (input, items) = token_sequence(input)?;
    Ok((input, Token::List(items)))
}

/// Parse a typed value like IFCLABEL('text')
fn typed_value(input: &str) -> IResult<&str, Token> {
    let (input, type_name) = take_while1(|c: char| c.is_alphanumeric() || c == '_')(input)?;
    let (input, _) = ws(input)?;
    let (input, args) = token_sequence(input)?;
    Ok((input, Token::TypedValue(type_name, args)))
}

/// Parse any token
fn token(input: &str) -> IResult<&str, Token> {
    alt((
        entity_ref,
        step_string,
        null_value,
        derived_value,
        enumeration,
        number,
        list,
        typed_value,
    ))
    .parse(input)
}

// ============================================================================
// Entity Parsing
// ============================================================================

/// Parse a complete entity definition
///
/// Format: `#123=IFCWALL(attr1,attr2,...);`
pub fn parse_entity(input: &str) -> Result<DecodedEntity> {
    let input = input.trim_start();

    let (input, _) = char::<&str, Error<&str>>('#')
        .parse(input)
        .map_err(|_| ParseError::format("Expected # at start of entity"))?;

    let (input, id_str) = take_while1::<_, &str, Error<&str>>(|c: char| c.is_ascii_digit())
        .parse(input)
        .map_err(|_| ParseError::format("Expected entity ID"))?;

    let id = EntityId(
        id_str
            .parse()
            .map_err(|_| ParseError::format(format!("Invalid entity ID '{}'", id_str)))?,
    );

    let (input, _) = (ws, char('='), ws)
        .parse(input)
        .map_err(|_: nom::Err<Error<&str>>| ParseError::entity_parse(id, "expected '='"))?;

    let (input, type_name) =
        take_while1::<_, &str, Error<&str>>(|c: char| c.is_alphanumeric() || c == '_')
            .parse(input)
            .map_err(|_| ParseError::entity_parse(id, "expected type name"))?;

    let (input, _) = ws(input).unwrap_or((input, ()));

    let (_, tokens) = token_sequence(input)
        .map_err(|e| ParseError::entity_parse(id, format!("malformed attributes: {:?}", e)))?;

    Ok(DecodedEntity {
        id,
        ifc_type: IfcType::parse(type_name),
        attributes: tokens.iter().map(|t| t.to_attribute_value()).collect(),
    })
}

/// Parse entity from raw content at given byte offsets
pub fn parse_entity_at(content: &str, start: usize, end: usize) -> Result<DecodedEntity> {
    let slice = content
        .get(start..end)
        .ok_or_else(|| ParseError::other(format!("invalid entity span {}..{}", start, end)))?;
    parse_entity(slice)
}
