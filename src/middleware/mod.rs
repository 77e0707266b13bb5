// ABOUTME: HTTP middleware for request tracing, request IDs and CORS
// ABOUTME: Provides request ID generation, span creation, and cross-origin setup for the browser UI

/// Cross-origin resource sharing
pub mod cors;
/// Request spans and request IDs
pub mod tracing;

// CORS configuration
pub use cors::setup_cors;

// Request tracing and context management
pub use self::tracing::{create_request_span, request_id_layers, REQUEST_ID_HEADER};
