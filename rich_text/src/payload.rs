// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lenient field access for the JSON payloads the runtime sends.
//!
//! Every accessor returns `None` for a missing field and for a field of the wrong shape. The
//! component never rejects a payload.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::MeasureId;
use crate::style::TextAlign;

/// Reads a number that may also arrive as a numeric string.
pub(crate) fn number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    n.is_finite().then_some(n)
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "Layout works in f32; values that overflow it are rejected after the cast."
)]
pub(crate) fn number_f32(value: &Value) -> Option<f32> {
    let n = number(value)? as f32;
    n.is_finite().then_some(n)
}

pub(crate) fn field_f32(object: &Map<String, Value>, key: &str) -> Option<f32> {
    object.get(key).and_then(number_f32)
}

pub(crate) fn field_str<'a>(object: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    object.get(key).and_then(Value::as_str)
}

/// Deserializes a typed field, treating a mismatch as absence.
pub(crate) fn field<'a, T: Deserialize<'a>>(
    object: &'a Map<String, Value>,
    key: &str,
) -> Option<T> {
    let value = object.get(key)?;
    match T::deserialize(value) {
        Ok(parsed) => Some(parsed),
        Err(err) => {
            log::trace!("ignoring field `{key}`: {err}");
            None
        }
    }
}

/// The layout box offered to the component by `setConstraints`, in layout units.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Constraints {
    /// Offered width, if any.
    pub w: Option<f32>,
    /// Offered height, if any.
    pub h: Option<f32>,
}

impl Constraints {
    /// Parses a `{ "w": .., "h": .. }` object.
    ///
    /// Anything that is not an object yields empty constraints.
    pub fn from_json(value: &Value) -> Self {
        let Some(object) = value.as_object() else {
            return Self::default();
        };
        Self {
            w: field_f32(object, "w"),
            h: field_f32(object, "h"),
        }
    }
}

/// Component-level configuration from `setAttributes`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Attributes {
    /// Maximum width for measurement. Unparseable values become `0`, which means unconstrained.
    pub max_width: f32,
    /// Maximum height for measurement, with the same rules as `max_width`.
    pub max_height: f32,
    /// Active measurement request, if any.
    pub measure_id: Option<MeasureId>,
    /// Requested text alignment.
    pub text_align: Option<TextAlign>,
    /// Maximum number of lines. Absent or non-positive means unconstrained.
    pub max_lines: Option<i64>,
}

impl Attributes {
    /// Parses the attribute object.
    pub fn from_json(value: &Value) -> Self {
        let Some(object) = value.as_object() else {
            return Self::default();
        };
        Self {
            max_width: field_f32(object, "maxWidth").unwrap_or(0.0),
            max_height: field_f32(object, "maxHeight").unwrap_or(0.0),
            measure_id: match object.get("measureId") {
                Some(Value::Number(n)) => n.as_i64().or_else(|| n.as_f64().map(truncate_id)),
                _ => None,
            }
            .map(MeasureId),
            text_align: field(object, "textAlign"),
            max_lines: object.get("maxLines").and_then(|v| match v {
                Value::Number(n) => n.as_i64(),
                Value::String(s) => s.trim().parse().ok(),
                _ => None,
            }),
        }
    }

    /// The line limit, with non-positive values normalized to unconstrained.
    pub fn line_limit(&self) -> Option<usize> {
        self.max_lines
            .filter(|&n| n > 0)
            .and_then(|n| usize::try_from(n).ok())
    }
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "Ids are integral on the wire; a fractional id keeps its integer part."
)]
fn truncate_id(id: f64) -> i64 {
    id as i64
}
