// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;

pub mod catalog;
pub mod gui;
pub mod imprints;
pub mod progress;
pub mod reconcile;

pub use imprints::find_parent_publisher;
