//! Middleware
//!
//! Tower middleware for request processing.

pub mod cors;
pub mod logging;
pub mod rate_limit;

pub use rate_limit::{rate_limit, RateLimitConfig, RateLimitInfo, RateLimiter};
