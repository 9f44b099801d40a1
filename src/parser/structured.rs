//! Strict decoder for the JSON encoding of a document.
//!
//! Validation is total or it fails: unknown tags, unknown keys, missing
//! required fields, `null`s and wrongly-typed values are all rejected with
//! the path of the first offending value. Nothing is coerced or dropped.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use std::str::FromStr;

use crate::error::{Error, Result, ValidationErrorKind};
use crate::model::{
    Alignment, DocumentElement, DocumentMetadata, ElementStyle, FontStyle, FontWeight, ListType,
    ParsedDocument,
};

/// Decode and validate a JSON document.
pub fn parse_structured(text: &str) -> Result<ParsedDocument> {
    let value: Value = serde_json::from_str(text)?;
    validate(&value)
}

/// Validate an already-decoded JSON value against the document model.
///
/// Elements are checked before metadata, so a content error is reported
/// ahead of a metadata error in the same input.
pub fn validate(value: &Value) -> Result<ParsedDocument> {
    let mut root = Fields::new(value, String::new())?;

    let elements_value = root.required("elements")?;
    let elements_path = root.path_of("elements");
    let elements = array(elements_value, &elements_path)?
        .iter()
        .enumerate()
        .map(|(i, v)| element(v, format!("{}[{}]", elements_path, i)))
        .collect::<Result<Vec<_>>>()?;

    let metadata_value = root.required("metadata")?;
    let metadata = metadata(metadata_value, root.path_of("metadata"))?;

    root.finish()?;
    Ok(ParsedDocument::new(metadata, elements))
}

fn metadata(value: &Value, path: String) -> Result<DocumentMetadata> {
    let mut fields = Fields::new(value, path)?;
    let metadata = DocumentMetadata {
        title: fields.string("title")?,
        author: fields.opt_string("author")?,
        subject: fields.opt_string("subject")?,
        keywords: fields.opt_string_list("keywords")?,
        created_at: fields.opt_timestamp("createdAt")?,
        language: fields.opt_string("language")?,
    };
    fields.finish()?;
    Ok(metadata)
}

fn element(value: &Value, path: String) -> Result<DocumentElement> {
    let mut fields = Fields::new(value, path)?;
    let tag = fields.string("type")?;

    let element = match tag.as_str() {
        "text" => DocumentElement::Text {
            content: fields.string("content")?,
            style: fields.opt_style()?,
        },
        "header" => DocumentElement::Header {
            level: fields.level("level")?,
            content: fields.string("content")?,
            style: fields.opt_style()?,
        },
        "list" => DocumentElement::List {
            list_type: fields.list_type("listType")?,
            items: fields.string_list("items")?,
            style: fields.opt_style()?,
        },
        "table" => DocumentElement::Table {
            title: fields.opt_string("title")?,
            headers: fields.string_list("headers")?,
            rows: fields.rows("rows")?,
            style: fields.opt_style()?,
        },
        "image" => DocumentElement::Image {
            src: fields.string("src")?,
            alt: fields.opt_string("alt")?,
            width: fields.opt_number("width")?,
            height: fields.opt_number("height")?,
            alignment: fields.opt_parsed::<Alignment>("alignment")?,
        },
        "spacer" => DocumentElement::Spacer {
            height: fields.number("height")?,
        },
        "pagebreak" => DocumentElement::PageBreak,
        other => {
            return Err(Error::validation(
                fields.path_of("type"),
                ValidationErrorKind::UnknownTag(other.to_string()),
            ))
        }
    };

    fields.finish()?;
    Ok(element)
}

fn style(value: &Value, path: String) -> Result<ElementStyle> {
    let mut fields = Fields::new(value, path)?;
    let style = ElementStyle {
        font_size: fields.opt_number("fontSize")?,
        font_weight: fields.opt_parsed::<FontWeight>("fontWeight")?,
        font_style: fields.opt_parsed::<FontStyle>("fontStyle")?,
        alignment: fields.opt_parsed::<Alignment>("alignment")?,
        color: fields.opt_string("color")?,
        background_color: fields.opt_string("backgroundColor")?,
        border_color: fields.opt_string("borderColor")?,
        border_width: fields.opt_number("borderWidth")?,
    };
    fields.finish()?;
    Ok(style)
}

fn wrong_type(path: &str, expected: &'static str) -> Error {
    Error::validation(display_path(path), ValidationErrorKind::WrongType { expected })
}

fn display_path(path: &str) -> &str {
    if path.is_empty() {
        "$"
    } else {
        path
    }
}

fn array<'a>(value: &'a Value, path: &str) -> Result<&'a Vec<Value>> {
    value.as_array().ok_or_else(|| wrong_type(path, "array"))
}

fn string(value: &Value, path: &str) -> Result<String> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| wrong_type(path, "string"))
}

fn string_list(value: &Value, path: &str) -> Result<Vec<String>> {
    array(value, path)?
        .iter()
        .enumerate()
        .map(|(i, v)| string(v, &format!("{}[{}]", path, i)))
        .collect()
}

/// One JSON object being consumed field by field.
///
/// Every key read is recorded so that [`Fields::finish`] can reject the keys
/// nobody asked for.
struct Fields<'a> {
    path: String,
    map: &'a Map<String, Value>,
    known: Vec<&'static str>,
}

impl<'a> Fields<'a> {
    fn new(value: &'a Value, path: String) -> Result<Self> {
        let map = value
            .as_object()
            .ok_or_else(|| wrong_type(&path, "object"))?;
        Ok(Self {
            path,
            map,
            known: Vec::new(),
        })
    }

    fn path_of(&self, key: &str) -> String {
        if self.path.is_empty() {
            key.to_string()
        } else {
            format!("{}.{}", self.path, key)
        }
    }

    fn get(&mut self, key: &'static str) -> Option<&'a Value> {
        self.known.push(key);
        self.map.get(key)
    }

    fn required(&mut self, key: &'static str) -> Result<&'a Value> {
        self.get(key).ok_or_else(|| {
            Error::validation(self.path_of(key), ValidationErrorKind::MissingField)
        })
    }

    fn string(&mut self, key: &'static str) -> Result<String> {
        let value = self.required(key)?;
        string(value, &self.path_of(key))
    }

    fn opt_string(&mut self, key: &'static str) -> Result<Option<String>> {
        match self.get(key) {
            None => Ok(None),
            Some(value) => string(value, &self.path_of(key)).map(Some),
        }
    }

    fn string_list(&mut self, key: &'static str) -> Result<Vec<String>> {
        let value = self.required(key)?;
        string_list(value, &self.path_of(key))
    }

    fn opt_string_list(&mut self, key: &'static str) -> Result<Option<Vec<String>>> {
        match self.get(key) {
            None => Ok(None),
            Some(value) => string_list(value, &self.path_of(key)).map(Some),
        }
    }

    fn rows(&mut self, key: &'static str) -> Result<Vec<Vec<String>>> {
        let value = self.required(key)?;
        let path = self.path_of(key);
        array(value, &path)?
            .iter()
            .enumerate()
            .map(|(i, row)| string_list(row, &format!("{}[{}]", path, i)))
            .collect()
    }

    /// A finite, non-negative number.
    fn number(&mut self, key: &'static str) -> Result<f64> {
        let value = self.required(key)?;
        self.check_number(key, value)
    }

    fn opt_number(&mut self, key: &'static str) -> Result<Option<f64>> {
        match self.get(key) {
            None => Ok(None),
            Some(value) => self.check_number(key, value).map(Some),
        }
    }

    fn check_number(&self, key: &str, value: &Value) -> Result<f64> {
        let path = self.path_of(key);
        let number = value.as_f64().ok_or_else(|| wrong_type(&path, "number"))?;
        if number < 0.0 {
            return Err(Error::validation(
                path,
                ValidationErrorKind::OutOfRange(format!("{} is negative", number)),
            ));
        }
        Ok(number)
    }

    fn level(&mut self, key: &'static str) -> Result<u8> {
        let value = self.required(key)?;
        let path = self.path_of(key);
        if !value.is_number() {
            return Err(wrong_type(&path, "integer"));
        }
        match value.as_u64() {
            Some(level @ 1..=6) => Ok(level as u8),
            _ => Err(Error::validation(
                path,
                ValidationErrorKind::OutOfRange(format!("header level {} is not 1-6", value)),
            )),
        }
    }

    fn list_type(&mut self, key: &'static str) -> Result<ListType> {
        let value = self.required(key)?;
        let path = self.path_of(key);
        match string(value, &path)?.as_str() {
            "ordered" => Ok(ListType::Ordered),
            "unordered" => Ok(ListType::Unordered),
            other => Err(Error::validation(
                path,
                ValidationErrorKind::OutOfRange(format!("unknown list type: {}", other)),
            )),
        }
    }

    fn opt_parsed<T>(&mut self, key: &'static str) -> Result<Option<T>>
    where
        T: FromStr<Err = String>,
    {
        let Some(value) = self.get(key) else {
            return Ok(None);
        };
        let path = self.path_of(key);
        string(value, &path)?
            .parse()
            .map(Some)
            .map_err(|reason| Error::validation(path, ValidationErrorKind::OutOfRange(reason)))
    }

    fn opt_timestamp(&mut self, key: &'static str) -> Result<Option<DateTime<Utc>>> {
        let Some(value) = self.get(key) else {
            return Ok(None);
        };
        let path = self.path_of(key);
        let raw = string(value, &path)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|ts| Some(ts.with_timezone(&Utc)))
            .map_err(|e| {
                Error::validation(
                    path,
                    ValidationErrorKind::OutOfRange(format!("invalid RFC 3339 timestamp: {}", e)),
                )
            })
    }

    fn opt_style(&mut self) -> Result<Option<ElementStyle>> {
        match self.get("style") {
            None => Ok(None),
            Some(value) => style(value, self.path_of("style")).map(Some),
        }
    }

    /// Reject any key that was never read.
    fn finish(self) -> Result<()> {
        let unread = self
            .map
            .keys()
            .find(|k| !self.known.iter().any(|known| *known == k.as_str()));
        match unread {
            Some(key) => Err(Error::validation(
                self.path_of(key),
                ValidationErrorKind::UnknownField,
            )),
            None => Ok(()),
        }
    }
}
