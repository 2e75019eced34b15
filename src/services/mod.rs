// src/services/mod.rs
pub mod cache;
pub mod query;
pub mod upstream;
