// src/gui/components/mod.rs
pub mod action_bar;
pub mod report_table;
pub mod resolver_panel;
