//! Core pipeline and domain logic for Gander.
//!
//! This crate ties the answer generator, fact extraction, and payload
//! validation into the end-to-end `run` workflow.

pub mod answer;
pub mod output;
pub mod payload;
pub mod pipeline;
