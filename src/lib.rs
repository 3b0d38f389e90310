//! # Message Board
//!
//! A minimal message-exchange service:
//! - Clients submit short text messages over HTTP/JSON
//! - Content is validated and timestamped before storage
//! - Recent history is returned newest first, bounded by a retention limit
//! - Per-client sliding-window rate limiting caps request volume
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles:
//!
//! - **Domain Layer**: The `Message` entity and the `MessageStore` contract
//! - **Application Layer**: Message service and DTOs
//! - **Infrastructure Layer**: In-memory bounded store implementation
//! - **Presentation Layer**: HTTP handlers, routes, and middleware
//!
//! ## Module Structure
//!
//! ```text
//! message_board/
//! +-- config/        Configuration management
//! +-- domain/        Message entity and store trait
//! +-- application/   Message service and DTOs
//! +-- infrastructure/ In-memory store implementation
//! +-- presentation/  HTTP routes, handlers, and middleware
//! +-- shared/        Common utilities (errors, validation)
//! ```

// Configuration module
pub mod config;

// Domain layer - Core business logic
pub mod domain;

// Application layer - Business services
pub mod application;

// Infrastructure layer - Storage implementations
pub mod infrastructure;

// Presentation layer - HTTP handlers and middleware
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup and state management
pub mod startup;

// Telemetry and observability
pub mod telemetry;
