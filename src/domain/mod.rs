//! # Domain Layer
//!
//! Core business types, independent of frameworks and infrastructure.
//!
//! - **entities**: The `Message` entity and the `MessageStore` trait that
//!   defines the storage contract. The in-memory store and any future
//!   persistent backend are interchangeable implementations of that trait.

pub mod entities;

pub use entities::*;
