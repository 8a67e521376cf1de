//! XML document loading.
//!
//! Reads a file and parses it into the [`Element`](crate::model::Element)
//! tree the comparison core operates on. The loader is the only component
//! that performs input I/O; everything downstream is pure.

mod xml;

pub use xml::{load_document, parse_document_str};
