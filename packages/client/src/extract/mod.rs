//! Path-based extraction of typed values from JSON responses
//!
//! The pipeline for one binding is: parse the [`Path`], derive its
//! [`Shape`], decode the document into that shape, [`walker::collect`] the
//! matched values and hand them to a [`Destination`].
//!
//! ```
//! use alidns_client::extract::{Bindings, Document, Sequence};
//!
//! let doc = Document::from(r#"{"Domains":{"Domain":[{"DomainName":"a.com"},{"DomainName":"b.com"}]}}"#);
//! let mut names: Vec<String> = Vec::new();
//! Bindings::new()
//!     .pair(Sequence::new(&mut names), "Domains.Domain.*.DomainName")
//!     .apply(&doc)
//!     .unwrap();
//! assert_eq!(names, ["a.com", "b.com"]);
//! ```

pub mod binder;
pub mod document;
pub mod path;
pub mod shape;
pub mod walker;

pub use self::{
    binder::{
        ArityError, BindingMode, Bindings, Destination, RawBody, Scalar, Sequence, Sink, bind,
    },
    document::Document,
    path::{Path, Segment},
    shape::{Decoded, Shape},
    walker::Collected,
};
