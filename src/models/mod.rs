// src/models/mod.rs

pub mod analytics;
pub mod feedback;
