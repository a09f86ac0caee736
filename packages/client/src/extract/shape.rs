//! Container shapes derived from a path
//!
//! Folding a path from its last segment to its first gives the nesting a
//! document must have for the path to resolve: every literal key wraps the
//! current shape in a single-key map, every wildcard wraps it in a sequence.
//! `Decoded` is an instance of that shape with `T` at the leaves.

use hashbrown::HashMap;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::path::{Path, Segment};
use crate::error::{self, Result};

/// Nested container description, with `Leaf` standing for the element type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape {
    /// A value of the destination's element type
    Leaf,
    /// An object whose `key` entry has the inner shape
    MapOf { key: String, value: Box<Shape> },
    /// An array whose elements have the inner shape
    SeqOf(Box<Shape>),
}

/// Decoded instance of a [`Shape`].
#[derive(Debug, Clone, PartialEq)]
pub enum Decoded<T> {
    /// Nothing at this position (missing key, `null`, or a non-object where
    /// a map was expected)
    Absent,
    Leaf(T),
    Map(HashMap<String, Decoded<T>>),
    Seq(Vec<Decoded<T>>),
}

impl Shape {
    /// Derive the shape for `path`. The root path yields `Leaf`.
    #[must_use]
    pub fn for_path(path: &Path) -> Self {
        path.segments()
            .iter()
            .rev()
            .fold(Shape::Leaf, |inner, segment| match segment {
                Segment::Wildcard => Shape::SeqOf(Box::new(inner)),
                Segment::Key(key) => Shape::MapOf {
                    key: key.clone(),
                    value: Box::new(inner),
                },
            })
    }

    /// Decode the part of `value` this shape reaches.
    ///
    /// Only the keyed branch of each map is visited, so sibling fields of any
    /// type are ignored. Structural misses are lenient: a non-object where a
    /// map is expected, or a non-array where a sequence is expected, decodes
    /// to `Absent`. `null` where a sequence is expected is an empty sequence.
    ///
    /// # Errors
    ///
    /// Returns a decode error when a present, non-null leaf cannot be
    /// deserialized into `T`.
    pub fn decode<T: DeserializeOwned>(&self, value: &Value) -> Result<Decoded<T>> {
        match self {
            Shape::Leaf => {
                if value.is_null() {
                    return Ok(Decoded::Absent);
                }
                T::deserialize(value).map(Decoded::Leaf).map_err(error::decode)
            }
            Shape::MapOf { key, value: inner } => {
                let Value::Object(object) = value else {
                    return Ok(Decoded::Absent);
                };
                let mut map = HashMap::with_capacity(1);
                if let Some(entry) = object.get(key) {
                    map.insert(key.clone(), inner.decode(entry)?);
                }
                Ok(Decoded::Map(map))
            }
            Shape::SeqOf(inner) => match value {
                Value::Array(items) => items
                    .iter()
                    .map(|item| inner.decode(item))
                    .collect::<Result<Vec<_>>>()
                    .map(Decoded::Seq),
                Value::Null => Ok(Decoded::Seq(Vec::new())),
                _ => Ok(Decoded::Absent),
            },
        }
    }

    /// Nesting depth, `Leaf` being zero.
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Shape::Leaf => 0,
            Shape::MapOf { value, .. } => 1 + value.depth(),
            Shape::SeqOf(inner) => 1 + inner.depth(),
        }
    }
}
