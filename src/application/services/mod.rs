//! Application Services
//!
//! Business logic services that coordinate domain operations.

pub mod message_service;

pub use message_service::{MessageDto, MessageError, MessageService, MessageServiceImpl};
