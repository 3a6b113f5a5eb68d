pub mod api;
pub mod config;
pub mod error;
pub mod geometry;
pub mod lanes;
pub mod matcher;
pub mod model;
pub mod scorer;
pub mod store;
pub mod structure;
// cmd and reports belong to the binary crate (main.rs).
