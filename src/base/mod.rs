//! Core components, types, and utilities for the triage service.
//!
//! This module contains fundamental building blocks used throughout the crate:
//! - Configuration handling and environment variables.
//! - Prompt templates for the triage model.
//! - Common types and result handling.

pub mod config;
pub mod prompts;
pub mod types;
