//! Lights Module
//!
//! The in-memory light store, the REST handlers that expose it, and their
//! OpenAPI description.
//!
//! # Usage
//!
//! ```rust,ignore
//! use lighthub::light::{self, LightStore};
//!
//! let store = LightStore::load(None)?;
//! let app = Router::new()
//!     .merge(light::routes())
//!     .with_state(app_state);
//! ```

mod handler;
mod openapi;
mod routes;
pub mod seed;
mod store;

pub use openapi::{ApiDoc, openapi};
pub use routes::routes;
pub use store::LightStore;
