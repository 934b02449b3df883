// src/core/mod.rs

mod entities;
pub mod net;
pub mod sanitize;
