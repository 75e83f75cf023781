//! Calculator mode navigation library.
//!
//! This library owns the manifest of calculator and converter modes and
//! answers the questions a mode menu asks of it: which modes exist and in what
//! order, how they are grouped and labelled, which keys select them, and how a
//! selection is written to and restored from settings.

// Module declarations
pub mod branding;
pub mod cli;
pub mod config;
pub mod localization;
pub mod models;
pub mod nav;
pub mod policy;
pub mod shortcuts;
