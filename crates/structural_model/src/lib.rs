//! Structural model of a backend's HTTP surface and persistence schema.
//!
//! This is the only thing the analyzer and the generator share: the analyzer
//! builds a [`StructuralModel`] once, writes it as JSON, and the generator
//! reads it back as a read-only snapshot.

pub mod model;
pub mod settings;
pub mod store;

pub use model::{Controller, HttpMethod, Middleware, Route, Service, StructuralModel};
pub use settings::locate_config_file;
pub use store::{DEFAULT_MODEL_PATH, StoreError, load_model, save_model};
