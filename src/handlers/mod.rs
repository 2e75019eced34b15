// src/handlers/mod.rs
pub mod error;
pub mod fetch;
pub mod filter;
