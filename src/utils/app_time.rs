//! Timing helpers usable from both the native and the browser build.
//!
//! `web_time` re-exports `std::time::Instant` on native targets and wraps
//! `performance.now()` on wasm32, so a single alias covers both.

pub type AppInstant = web_time::Instant;

pub fn now() -> AppInstant {
    AppInstant::now()
}

/// Milliseconds elapsed since `start`, for log lines.
pub fn elapsed_ms(start: AppInstant) -> u128 {
    start.elapsed().as_millis()
}
