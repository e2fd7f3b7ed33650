//! Coordinate text codec and the collection that owns it.
//!
//! The codec converts between point lists and the delimited text stored in
//! `<coordinates>` elements; the collection keeps both in sync through the
//! [`TextContent`](crate::element::TextContent) hooks.

pub mod codec;
mod collection;

pub use codec::{format, parse};
pub use collection::CoordinateCollection;
