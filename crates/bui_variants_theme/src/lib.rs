//! Color themes shared by every styled component.
//!
//! A [`Theme`] is picked by the caller (or inherited from the surrounding
//! context) before any class resolution happens. Style tables store their
//! per-theme data in [`Themed`] pairs so that every theme is always covered.

mod schema;
pub use schema::*;

mod deserializers;
pub use deserializers::*;
