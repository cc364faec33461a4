//! AI glue layer for Viral Trance Creator - enriches tracks with hosted models
//!
//! Wraps two hosted APIs behind best-effort service interfaces: OpenRouter
//! chat completions for prompt enhancement, viral analysis, and spiritual
//! enrichment, and Gemini for cover artwork rendered to the local filesystem.

pub mod ai;
pub mod app;
pub mod cover;
pub mod error;
pub mod models;
pub mod prompts;

pub use error::{Error, Result};
