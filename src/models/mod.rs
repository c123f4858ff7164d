// src/models/mod.rs

pub mod checklist;
pub mod interview;
