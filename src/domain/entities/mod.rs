//! Domain Entities

pub mod message;

pub use message::{Message, MessageStore};
