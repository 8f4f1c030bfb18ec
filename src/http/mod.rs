//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (request ID)
//!     → context.rs (bind request path for this request)
//!     → handlers.rs (decode, call ProductService, pick status)
//!     → error.rs + response.rs (failures → uniform error body)
//!     → Send to client
//! ```

pub mod context;
pub mod error;
pub mod handlers;
pub mod request;
pub mod response;
pub mod server;

pub use context::RequestContext;
pub use error::ApiError;
pub use request::X_REQUEST_ID;
pub use response::ErrorResponse;
pub use server::{build_router, AppState, HttpServer};
