//! Core data model for parsed XML documents.

mod element;

pub use element::{Document, Element};
