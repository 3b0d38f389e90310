//! Infrastructure Layer
//!
//! Concrete implementations of the domain storage contract. Currently an
//! in-process bounded store; a persistent backend would live here as another
//! `MessageStore` implementation behind the same trait.

pub mod store;
