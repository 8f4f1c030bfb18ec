//! Product resource subsystem.
//!
//! # Data Flow
//! ```text
//! ProductDto (wire, from HTTP handler)
//!     → validation.rs (field rules, all violations collected)
//!     → mapper.rs (wire → persisted)
//!     → store.rs (SQLite or in-memory engine)
//!     → mapper.rs (persisted → wire)
//!     → ProductDto (wire, back to HTTP handler)
//! ```
//!
//! # Design Decisions
//! - Only `service.rs` holds business rules (not-found detection, update semantics)
//! - Validation is a plain function, no database lookups
//! - The store exposes exactly four operations; engines are swappable

pub mod error;
pub mod mapper;
pub mod model;
pub mod service;
pub mod store;
pub mod validation;

pub use error::{ProductError, ProductResult};
pub use model::{ProductDto, ProductEntity};
pub use service::ProductService;
pub use store::{InMemoryProductStore, ProductStore, SqliteProductStore, StoreError};
pub use validation::{validate_product, FieldViolation, ValidationErrors};
