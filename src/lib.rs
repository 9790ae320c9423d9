//! dispatch-server — hyperlocal order-to-courier assignment service
//!
//! # Module structure
//!
//! ```text
//! src/
//! ├── config.rs      # Environment configuration
//! ├── state.rs       # Shared application state (entity store + seeding)
//! ├── error/         # Error codes, AppError, API error envelope
//! ├── models/        # Order and DeliveryPartner entities + create payloads
//! ├── store.rs       # In-memory entity store (insertion-ordered)
//! ├── dispatch/      # Eligibility filter, ranking engine, assignment
//! └── api/           # HTTP routes and handlers
//! ```

pub mod api;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod models;
pub mod state;
pub mod store;

// Re-export public types
pub use config::Config;
pub use error::{ApiResponse, AppError, AppResult, ErrorCode};
pub use state::AppState;
pub use store::EntityStore;
