// src/handlers/mod.rs

pub mod checklist;
pub mod health;
pub mod interview;
pub mod sanitize;
