// src/handlers/mod.rs
pub mod ask;
pub mod ui;
