//! Message Store Implementations

pub mod memory;

pub use memory::InMemoryMessageStore;
