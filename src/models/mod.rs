//! Data models for navigation categories.
//!
//! This module contains the mode enums, the manifest record type and the
//! localized display structures handed to the UI. Models carry no lookup logic.

pub mod category;
pub mod view_mode;

// Re-export all model types
pub use category::{CategoryRecord, GroupDescriptor, NavCategory, NavCategoryGroup};
pub use view_mode::{CategoryGroupType, ViewMode, VirtualKey};
