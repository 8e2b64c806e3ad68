// src/core.rs
pub mod config;
pub mod copier;
pub mod scanner;
pub mod table_map;
