//! Task-local trace id for the request being served.
//!
//! The request-context middleware opens the scope; anything running inside
//! the handler future (error rendering, service logs) can read it back.

use tokio::task_local;

task_local! {
    static TRACE_ID: String;
}

const UNKNOWN: &str = "unknown";

/// Trace id of the current request, or `"unknown"` outside one.
pub fn trace_id() -> String {
    TRACE_ID
        .try_with(String::clone)
        .unwrap_or_else(|_| UNKNOWN.to_string())
}

/// Run `future` with `trace_id` as the current trace id.
pub async fn with_trace_id<F, R>(trace_id: String, future: F) -> R
where
    F: std::future::Future<Output = R>,
{
    TRACE_ID.scope(trace_id, future).await
}
