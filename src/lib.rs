//! waka-params: activity-tracking client parameters
//!
//! A library that reconciles command-line flags, deprecated flag aliases
//! and config file settings into one validated, immutable parameter set.

pub mod config;
pub mod params;
pub mod source;
