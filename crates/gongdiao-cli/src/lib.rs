//! Gongdiao CLI library.
//!
//! This crate provides the reporting side of gongdiao: logging setup and the
//! commands that derive, format, and print mode parameters.

pub mod commands;
pub mod logging;
