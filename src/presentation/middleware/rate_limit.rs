//! Rate Limiting Middleware
//!
//! In-process rate limiting using a sliding window of request timestamps per
//! client identity. The limiter is constructed once at startup and injected
//! through `AppState`, so tests can build isolated instances.

use std::collections::VecDeque;
use std::net::{IpAddr, SocketAddr};
use std::sync::atomic::{AtomicU64, Ordering};

use axum::{
    extract::{ConnectInfo, Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use dashmap::DashMap;
use serde::{Deserialize, Serialize};

use crate::config::RateLimitSettings;
use crate::shared::error::ErrorResponse;
use crate::startup::AppState;

/// Full map sweep interval, counted in `check` calls. Stale keys are mostly
/// reclaimed lazily on access; the sweep catches clients that never return.
const SWEEP_EVERY: u64 = 4096;

/// Configuration for rate limiting behavior.
#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitConfig {
    /// Window duration in milliseconds
    pub window_ms: u64,
    /// Requests allowed per window per client
    pub max_requests: u32,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            window_ms: 60_000,
            max_requests: 100,
        }
    }
}

/// Information about rate limit status returned to clients.
#[derive(Debug, Serialize)]
pub struct RateLimitInfo {
    /// Maximum requests allowed in the current window
    pub limit: u32,
    /// Remaining requests in the current window
    pub remaining: u32,
    /// Unix timestamp when the rate limit resets
    pub reset_at: i64,
    /// Seconds until the rate limit resets
    pub retry_after: u64,
}

/// Sliding-window rate limiter keyed by client identity.
///
/// Each key holds the timestamps (ms) of requests inside the current window.
/// On each check the key's expired entries are pruned first; the request is
/// then either recorded and allowed, or denied without recording so denied
/// traffic cannot extend its own penalty.
pub struct RateLimiter {
    config: RateLimitConfig,
    windows: DashMap<String, VecDeque<i64>>,
    checks: AtomicU64,
}

impl RateLimiter {
    /// Create a new rate limiter instance.
    pub fn new(config: RateLimitConfig) -> Self {
        Self {
            config,
            windows: DashMap::new(),
            checks: AtomicU64::new(0),
        }
    }

    /// Create from application settings.
    pub fn from_settings(settings: &RateLimitSettings) -> Self {
        Self::new(RateLimitConfig {
            window_ms: settings.window_ms,
            max_requests: settings.max_requests,
        })
    }

    /// Check if a request should be allowed.
    ///
    /// Returns `Ok(RateLimitInfo)` if allowed, `Err(RateLimitInfo)` if rate limited.
    pub fn check(&self, identifier: &str) -> Result<RateLimitInfo, RateLimitInfo> {
        let now_ms = Utc::now().timestamp_millis();
        let window_ms = self.config.window_ms as i64;
        let window_start = now_ms - window_ms;
        let max_requests = self.config.max_requests;

        let (allowed, current_count, retry_after_ms) = {
            let mut hits = self.windows.entry(identifier.to_string()).or_default();

            while hits.front().is_some_and(|&t| t <= window_start) {
                hits.pop_front();
            }

            if (hits.len() as u32) < max_requests {
                hits.push_back(now_ms);
                (true, hits.len() as u32, 0)
            } else {
                let retry_after_ms = hits
                    .front()
                    .map(|&oldest| (oldest + window_ms - now_ms).max(0))
                    .unwrap_or(0);
                (false, hits.len() as u32, retry_after_ms)
            }
        };

        // Entry guard is dropped; safe to sweep the whole map.
        if self.checks.fetch_add(1, Ordering::Relaxed) % SWEEP_EVERY == SWEEP_EVERY - 1 {
            self.sweep(window_start);
        }

        let info = RateLimitInfo {
            limit: max_requests,
            remaining: max_requests.saturating_sub(current_count),
            reset_at: (now_ms + window_ms) / 1000,
            retry_after: ((retry_after_ms as f64) / 1000.0).ceil() as u64,
        };

        if allowed {
            Ok(info)
        } else {
            Err(info)
        }
    }

    /// Drop keys whose every recorded hit has expired.
    fn sweep(&self, window_start: i64) {
        self.windows
            .retain(|_, hits| hits.back().is_some_and(|&t| t > window_start));
    }

    /// Number of client identities currently tracked.
    pub fn tracked_clients(&self) -> usize {
        self.windows.len()
    }
}

/// Extract the rate limit identifier from a request.
///
/// Priority:
/// 1. X-Forwarded-For header (for reverse proxy setups)
/// 2. X-Real-IP header (common with nginx)
/// 3. Connection remote address
///
/// X-Forwarded-For should only be trusted when the service sits behind a
/// known proxy, which is this deployment's shape.
fn extract_identifier(request: &Request) -> String {
    if let Some(forwarded_for) = request
        .headers()
        .get("x-forwarded-for")
        .and_then(|h| h.to_str().ok())
    {
        if let Some(first_ip) = forwarded_for.split(',').next() {
            let ip = first_ip.trim();
            if ip.parse::<IpAddr>().is_ok() {
                return format!("ip:{}", ip);
            }
        }
    }

    if let Some(real_ip) = request
        .headers()
        .get("x-real-ip")
        .and_then(|h| h.to_str().ok())
    {
        if real_ip.parse::<IpAddr>().is_ok() {
            return format!("ip:{}", real_ip);
        }
    }

    match request.extensions().get::<ConnectInfo<SocketAddr>>() {
        Some(ConnectInfo(addr)) => format!("ip:{}", addr.ip()),
        None => {
            tracing::warn!("Could not determine client identifier for rate limiting");
            "ip:unknown".to_string()
        }
    }
}

/// Rate limiting middleware applied in front of all message routes.
///
/// Runs before validation, so malformed high-volume traffic cannot bypass
/// throttling. Denied requests fail fast with 429 and are never queued.
pub async fn rate_limit(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let identifier = extract_identifier(&request);

    match state.limiter.check(&identifier) {
        Ok(info) => {
            let mut response = next.run(request).await;
            add_rate_limit_headers(response.headers_mut(), &info);
            response
        }
        Err(info) => {
            tracing::warn!(identifier = %identifier, "Rate limit exceeded");
            create_rate_limit_response(info)
        }
    }
}

/// Add rate limit headers to a response.
///
/// Headers follow the IETF draft standard for rate limiting:
/// https://datatracker.ietf.org/doc/draft-ietf-httpapi-ratelimit-headers/
fn add_rate_limit_headers(headers: &mut header::HeaderMap, info: &RateLimitInfo) {
    if let Ok(v) = header::HeaderValue::from_str(&info.limit.to_string()) {
        headers.insert("X-RateLimit-Limit", v);
    }
    if let Ok(v) = header::HeaderValue::from_str(&info.remaining.to_string()) {
        headers.insert("X-RateLimit-Remaining", v);
    }
    if let Ok(v) = header::HeaderValue::from_str(&info.reset_at.to_string()) {
        headers.insert("X-RateLimit-Reset", v);
    }
}

/// Create a 429 Too Many Requests response.
fn create_rate_limit_response(info: RateLimitInfo) -> Response {
    let body = ErrorResponse {
        error: "You are being rate limited. Please slow down.".to_string(),
        details: None,
    };

    let mut response = (StatusCode::TOO_MANY_REQUESTS, Json(body)).into_response();

    if let Ok(v) = header::HeaderValue::from_str(&info.retry_after.to_string()) {
        response.headers_mut().insert(header::RETRY_AFTER, v);
    }
    add_rate_limit_headers(response.headers_mut(), &info);

    response
}
