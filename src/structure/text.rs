//! Text form of structures: `name, key=(type)value, ...;`
//!
//! Strings are quoted when they contain characters outside the simple set
//! `[A-Za-z0-9_-+/:.]`. Structure and field names are quoted the same way
//! when they do not start with a letter or leave the simple set. Values
//! without an explicit `(type)` are inferred: booleans, then integers, then
//! doubles, falling back to strings.

use std::fmt;
use std::str::FromStr;

use tracing::warn;

use super::{Structure, Value};
use crate::types::{Format, SeekFlags, SeekType};
use crate::{EventError, Result};

fn is_simple_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '+' | '/' | ':' | '.')
}

fn is_identifier(s: &str) -> bool {
    s.chars().next().is_some_and(|c| c.is_ascii_alphabetic()) && s.chars().all(is_simple_char)
}

fn write_string(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    if !s.is_empty() && s.chars().all(is_simple_char) {
        return f.write_str(s);
    }
    write_quoted(f, s)
}

fn write_name(f: &mut fmt::Formatter<'_>, name: &str) -> fmt::Result {
    if is_identifier(name) {
        return f.write_str(name);
    }
    write_quoted(f, name)
}

fn write_quoted(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    f.write_str("\"")?;
    for c in s.chars() {
        if matches!(c, '"' | '\\') {
            f.write_str("\\")?;
        }
        write!(f, "{}", c)?;
    }
    f.write_str("\"")
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(v) => write!(f, "{}", v),
            Value::Int(v) => write!(f, "{}", v),
            Value::UInt(v) => write!(f, "{}", v),
            Value::Int64(v) => write!(f, "{}", v),
            Value::UInt64(v) => write!(f, "{}", v),
            Value::Double(v) => write!(f, "{:?}", v),
            Value::String(s) => write_string(f, s),
            Value::Format(v) => write!(f, "{}", v),
            Value::SeekType(v) => write!(f, "{}", v),
            Value::SeekFlags(v) => write!(f, "{}", v),
            Value::Structure(s) => write_string(f, &s.to_string()),
            Value::Message(m) => write!(f, "<{}>", m.message_type()),
        }
    }
}

impl fmt::Display for Structure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_name(f, self.name())?;
        for (name, value) in self.fields() {
            f.write_str(", ")?;
            write_name(f, name)?;
            write!(f, "=({}){}", value.type_name(), value)?;
        }
        f.write_str(";")
    }
}

impl FromStr for Structure {
    type Err = EventError;

    fn from_str(s: &str) -> Result<Self> {
        Parser::new(s).parse_structure()
    }
}

struct Parser<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn error(&self, details: impl Into<String>) -> EventError {
        EventError::parse_error(format!("structure at byte {}", self.pos), details)
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.bump();
        }
    }

    fn expect(&mut self, expected: char) -> Result<()> {
        match self.bump() {
            Some(c) if c == expected => Ok(()),
            Some(c) => Err(self.error(format!("expected '{}', found '{}'", expected, c))),
            None => Err(self.error(format!("expected '{}', found end of input", expected))),
        }
    }

    fn identifier(&mut self) -> Result<&'a str> {
        let start = self.pos;
        while self.peek().is_some_and(is_simple_char) {
            self.bump();
        }
        let input = self.input;
        let ident = &input[start..self.pos];
        match ident.chars().next() {
            Some(c) if c.is_ascii_alphabetic() => Ok(ident),
            Some(_) => Err(self.error(format!("name '{}' must start with a letter", ident))),
            None => Err(self.error("expected a name")),
        }
    }

    /// Structure or field name, bare or quoted.
    fn name(&mut self) -> Result<String> {
        if self.peek() == Some('"') {
            return self.quoted();
        }
        Ok(self.identifier()?.to_string())
    }

    fn quoted(&mut self) -> Result<String> {
        self.expect('"')?;
        let mut out = String::new();
        loop {
            match self.bump() {
                Some('\\') => match self.bump() {
                    Some(c) => out.push(c),
                    None => return Err(self.error("unterminated escape")),
                },
                Some('"') => return Ok(out),
                Some(c) => out.push(c),
                None => return Err(self.error("unterminated string")),
            }
        }
    }

    /// Returns the raw text and whether it was quoted.
    fn raw_value(&mut self) -> Result<(String, bool)> {
        if self.peek() == Some('"') {
            return Ok((self.quoted()?, true));
        }
        let start = self.pos;
        while self.peek().is_some_and(|c| c != ',' && c != ';') {
            self.bump();
        }
        let raw = self.input[start..self.pos].trim();
        if raw.is_empty() {
            return Err(self.error("empty value"));
        }
        Ok((raw.to_string(), false))
    }

    fn parse_structure(&mut self) -> Result<Structure> {
        self.skip_whitespace();
        let mut structure = Structure::new(self.name()?);

        loop {
            self.skip_whitespace();
            match self.bump() {
                None => break,
                Some(';') => {
                    self.skip_whitespace();
                    if self.pos < self.input.len() {
                        warn!(trailing = &self.input[self.pos..], "Ignoring text after structure");
                    }
                    break;
                }
                Some(',') => {}
                Some(c) => return Err(self.error(format!("expected ',' or ';', found '{}'", c))),
            }

            self.skip_whitespace();
            let field = self.name()?;
            self.skip_whitespace();
            self.expect('=')?;
            self.skip_whitespace();

            let type_name = if self.peek() == Some('(') {
                self.bump();
                let name = self.identifier()?;
                self.expect(')')?;
                Some(name)
            } else {
                None
            };

            let (raw, quoted) = self.raw_value()?;
            let value = match type_name {
                Some(name) => self.typed_value(name, &raw)?,
                None if quoted => Value::String(raw),
                None => infer_value(&raw),
            };
            structure.set(field, value);
        }

        Ok(structure)
    }

    fn typed_value(&self, type_name: &str, raw: &str) -> Result<Value> {
        let bad = |what: &str| self.error(format!("invalid {} value '{}'", what, raw));
        let value = match type_name {
            "boolean" | "bool" | "gboolean" => Value::Bool(parse_bool(raw).ok_or_else(|| bad("boolean"))?),
            "int" | "i" | "gint" => Value::Int(raw.parse().map_err(|_| bad("int"))?),
            "uint" | "u" | "guint" => Value::UInt(raw.parse().map_err(|_| bad("uint"))?),
            "gint64" | "int64" => Value::Int64(raw.parse().map_err(|_| bad("gint64"))?),
            "guint64" | "uint64" => Value::UInt64(raw.parse().map_err(|_| bad("guint64"))?),
            "double" | "d" | "gdouble" => Value::Double(raw.parse().map_err(|_| bad("double"))?),
            "string" | "s" => Value::String(raw.to_string()),
            "GstFormat" => Value::Format(Format::from_nick(raw).ok_or_else(|| bad("GstFormat"))?),
            "GstSeekType" => {
                Value::SeekType(SeekType::from_nick(raw).ok_or_else(|| bad("GstSeekType"))?)
            }
            "GstSeekFlags" => {
                Value::SeekFlags(SeekFlags::from_nicks(raw).ok_or_else(|| bad("GstSeekFlags"))?)
            }
            "structure" | "GstStructure" => Value::Structure(Box::new(raw.parse()?)),
            other => return Err(self.error(format!("unsupported type '{}'", other))),
        };
        Ok(value)
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "yes" | "t" | "1" => Some(true),
        "false" | "no" | "f" | "0" => Some(false),
        _ => None,
    }
}

fn infer_value(raw: &str) -> Value {
    if let Ok(v) = raw.parse::<bool>() {
        Value::Bool(v)
    } else if let Ok(v) = raw.parse::<i32>() {
        Value::Int(v)
    } else if let Ok(v) = raw.parse::<i64>() {
        Value::Int64(v)
    } else if let Ok(v) = raw.parse::<f64>() {
        Value::Double(v)
    } else {
        Value::String(raw.to_string())
    }
}
