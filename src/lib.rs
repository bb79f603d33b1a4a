//! Resume AI CLI library
//!
//! Command-line front-end over the remote resume analysis service.
//! Shared wire types, the report segmenter and the mock service live in
//! `resume-ai-common`; this crate adds the reqwest client, the result
//! cache and terminal rendering.

pub mod cache;
pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod render;
