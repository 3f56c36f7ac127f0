//! Core module - Contains the fundamental data structures and utilities
//!
//! This module provides:
//! - The frequency table model
//! - Loading item files and writing the snapshot
//! - Box-drawn report rendering
//! - Runtime settings and the optional TOML config file
//! - Error types and logging setup

pub mod config;
pub mod error;
pub mod loader;
pub mod logger;
pub mod model;
pub mod paths;
pub mod render;
pub mod util;
