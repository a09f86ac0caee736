//! Destinations and the bindings that pair them with paths
//!
//! A destination is chosen explicitly by the caller: [`Scalar`] overwrites a
//! single slot, [`Sequence`] appends to a `Vec`. Positions whose path did not
//! resolve are written as `T::default()`, so a sequence always receives one
//! value per collected position.

use serde::de::DeserializeOwned;
use tracing::trace;

use super::document::Document;
use super::path::Path;
use super::shape::Shape;
use super::walker;
use crate::error::{self, Result};

/// Something that accepts extracted values of one element type.
pub trait Destination {
    /// Element type values are decoded into
    type Item: DeserializeOwned + Clone + Default;

    /// Receive one collected value. `present` is false when the path did not
    /// resolve and `value` is the default.
    fn accept(&mut self, value: Self::Item, present: bool);
}

/// Single slot. When a path yields several values the last one wins.
#[derive(Debug)]
pub struct Scalar<'a, T> {
    slot: &'a mut T,
}

impl<'a, T> Scalar<'a, T> {
    pub fn new(slot: &'a mut T) -> Self {
        Self { slot }
    }
}

impl<T: DeserializeOwned + Clone + Default> Destination for Scalar<'_, T> {
    type Item = T;

    fn accept(&mut self, value: T, _present: bool) {
        *self.slot = value;
    }
}

/// Appendable sequence. Existing contents are kept.
#[derive(Debug)]
pub struct Sequence<'a, T> {
    items: &'a mut Vec<T>,
}

impl<'a, T> Sequence<'a, T> {
    pub fn new(items: &'a mut Vec<T>) -> Self {
        Self { items }
    }
}

impl<T: DeserializeOwned + Clone + Default> Destination for Sequence<'_, T> {
    type Item = T;

    fn accept(&mut self, value: T, _present: bool) {
        self.items.push(value);
    }
}

/// Receives the verbatim response body, replacing earlier contents.
///
/// Only valid as the lone unpaired destination of a single call; pairing it
/// with a path is an arity error.
#[derive(Debug)]
pub struct RawBody<'a> {
    buffer: &'a mut Vec<u8>,
}

impl<'a> RawBody<'a> {
    pub fn new(buffer: &'a mut Vec<u8>) -> Self {
        Self { buffer }
    }
}

/// Decode `path` out of `document` and feed every collected value to `dest`.
///
/// Returns the number of values delivered.
///
/// # Errors
///
/// Returns a decode error if a present leaf does not fit `D::Item`.
pub fn bind<D: Destination>(
    document: &serde_json::Value,
    path: &Path,
    dest: &mut D,
) -> Result<usize> {
    let shape = Shape::for_path(path);
    let decoded = shape.decode::<D::Item>(document)?;
    let collected = walker::collect(&decoded, path.segments());
    trace!(path = %path, depth = shape.depth(), matched = collected.len(), "bound path");

    let count = collected.len();
    for value in collected {
        match value {
            Some(value) => dest.accept(value.clone(), true),
            None => dest.accept(D::Item::default(), false),
        }
    }
    Ok(count)
}

/// Object-safe binding target, so destinations of different element types
/// can share one [`Bindings`] list.
pub trait Sink {
    /// Bind `path` of `document` into this sink.
    ///
    /// # Errors
    ///
    /// Returns a decode error if the body is not JSON or a leaf does not fit.
    fn bind(&mut self, document: &Document, path: &Path) -> Result<()>;

    /// Sinks that take the whole body and cannot be paired with a path.
    fn whole_document_only(&self) -> bool {
        false
    }
}

impl<T: DeserializeOwned + Clone + Default> Sink for Scalar<'_, T> {
    fn bind(&mut self, document: &Document, path: &Path) -> Result<()> {
        bind(document.value()?, path, self).map(|_| ())
    }
}

impl<T: DeserializeOwned + Clone + Default> Sink for Sequence<'_, T> {
    fn bind(&mut self, document: &Document, path: &Path) -> Result<()> {
        bind(document.value()?, path, self).map(|_| ())
    }
}

impl Sink for RawBody<'_> {
    fn bind(&mut self, document: &Document, _path: &Path) -> Result<()> {
        self.buffer.clear();
        self.buffer.extend_from_slice(document.body());
        Ok(())
    }

    fn whole_document_only(&self) -> bool {
        true
    }
}

/// Pairing convention violations, detected before any request is sent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArityError {
    /// A whole-document sink shares the call with other bindings
    #[error("a whole-document destination must be the only destination, found {count}")]
    UnpairedAmongOthers { count: usize },
    /// Paginated calls accumulate across pages and need a path per sink
    #[error("paginated calls need a path for every destination")]
    UnpairedInPagination,
    /// A raw-body sink was given a path it cannot honour
    #[error("a raw-body destination cannot be paired with a path")]
    RawBodyWithPath,
}

/// How a call is going to use its bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingMode {
    /// One request, one response
    Single,
    /// Repeated requests, results appended page after page
    Paginated,
}

struct Binding<'a> {
    sink: Box<dyn Sink + Send + 'a>,
    path: Option<Path>,
}

/// Ordered list of destinations, each paired with a path or standing alone
/// for the whole document.
#[derive(Default)]
pub struct Bindings<'a> {
    entries: Vec<Binding<'a>>,
}

impl<'a> Bindings<'a> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pair `sink` with `path`.
    #[must_use]
    pub fn pair<S, P>(mut self, sink: S, path: P) -> Self
    where
        S: Sink + Send + 'a,
        P: Into<Path>,
    {
        self.entries.push(Binding {
            sink: Box::new(sink),
            path: Some(path.into()),
        });
        self
    }

    /// Add an unpaired sink that receives the whole document.
    #[must_use]
    pub fn whole<S>(mut self, sink: S) -> Self
    where
        S: Sink + Send + 'a,
    {
        self.entries.push(Binding {
            sink: Box::new(sink),
            path: None,
        });
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check the pairing convention for `mode`.
    ///
    /// # Errors
    ///
    /// Returns an arity error when an unpaired sink is not alone, when any
    /// unpaired sink is used for a paginated call, or when a raw-body sink is
    /// paired with a path.
    pub fn validate(&self, mode: BindingMode) -> Result<()> {
        if self
            .entries
            .iter()
            .any(|b| b.path.is_some() && b.sink.whole_document_only())
        {
            return Err(error::arity(ArityError::RawBodyWithPath));
        }

        let unpaired = self.entries.iter().filter(|b| b.path.is_none()).count();
        if unpaired == 0 {
            return Ok(());
        }
        match mode {
            BindingMode::Paginated => Err(error::arity(ArityError::UnpairedInPagination)),
            BindingMode::Single if self.entries.len() > 1 => {
                Err(error::arity(ArityError::UnpairedAmongOthers {
                    count: self.entries.len(),
                }))
            }
            BindingMode::Single => Ok(()),
        }
    }

    /// Bind every entry against `document`, in the order they were added.
    ///
    /// # Errors
    ///
    /// Stops at the first decode error; earlier entries keep what they received.
    pub fn apply(&mut self, document: &Document) -> Result<()> {
        let root = Path::root();
        for binding in &mut self.entries {
            let path = binding.path.as_ref().unwrap_or(&root);
            binding.sink.bind(document, path)?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for Bindings<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.entries.iter().map(|b| b.path.as_ref().map(Path::to_string)))
            .finish()
    }
}
