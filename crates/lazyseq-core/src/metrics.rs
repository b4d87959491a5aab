//! Trace events for the buffering stages.
//!
//! Emitted events:
//! - `buffered`: a full-buffer stage drained its upstream (`stage`, `elements`)
//! - `grouped`: a grouping pass finished (`stage`, `elements`, `groups`)
//!
//! Without the `tracing` feature `emit_span` does nothing.

#[cfg(feature = "tracing")]
pub fn emit_span(event: &str, key_values: &[(&str, String)]) {
    let span = tracing::span!(tracing::Level::TRACE, "lazyseq", event);
    let _enter = span.enter();
    for (k, v) in key_values {
        tracing::trace!(%event, %k, %v, "metric");
    }
}

#[cfg(not(feature = "tracing"))]
pub fn emit_span(_event: &str, _key_values: &[(&str, String)]) { /* no-op */
}
