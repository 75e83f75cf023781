//! Category records and the display items built from them.

use super::view_mode::{CategoryGroupType, ViewMode, VirtualKey};
use serde::Serialize;

/// One immutable manifest entry describing a mode.
///
/// # Invariants
///
/// - `serialization_id` is stable across releases; persisted settings depend on it.
///   New ids are only ever appended.
/// - `friendly_name` is unique and never localized.
/// - The position of a record in the manifest is its menu position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryRecord {
    /// Mode this record describes
    pub view_mode: ViewMode,
    /// Stable id written to settings
    pub serialization_id: i32,
    /// Locale-independent name used for settings lookup
    pub friendly_name: &'static str,
    /// Resource key prefix; `Text` and `AccessKey` suffixes are appended
    pub name_resource_key: &'static str,
    /// Icon font glyph
    pub glyph: &'static str,
    /// Menu section
    pub group_type: CategoryGroupType,
    /// Keyboard accelerator, `VirtualKey::None` when absent
    pub virtual_key: VirtualKey,
    /// Literal access key; resolved from resources when `None`
    pub access_key: Option<&'static str>,
    /// Whether the mode accepts negative input
    pub supports_negative: bool,
}

/// A single menu item, fully localized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavCategory {
    /// Localized display name
    pub name: String,
    /// Screen-reader name ("Standard Calculator", ...)
    pub automation_name: String,
    /// Icon glyph
    pub glyph: String,
    /// Access key shown in the menu
    pub access_key: String,
    /// Localized singular name of the owning group ("Calculator")
    pub mode: String,
    /// Mode selected by this item
    pub view_mode: ViewMode,
    /// Whether the mode accepts negative input
    pub supports_negative: bool,
    /// Whether the item is selectable as-is
    pub is_enabled: bool,
}

/// Resource keys needed to build one menu section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupDescriptor {
    /// Group whose manifest entries are collected
    pub group_type: CategoryGroupType,
    /// Header text key ("CalculatorModeTextCaps")
    pub header_resource_key: &'static str,
    /// Singular group name key ("CalculatorModeText")
    pub mode_resource_key: &'static str,
    /// Plural group name key used in the automation name
    pub automation_resource_key: &'static str,
}

impl GroupDescriptor {
    /// Descriptor for the calculator section.
    pub const CALCULATOR: Self = Self {
        group_type: CategoryGroupType::Calculator,
        header_resource_key: "CalculatorModeTextCaps",
        mode_resource_key: "CalculatorModeText",
        automation_resource_key: "CalculatorModePluralText",
    };

    /// Descriptor for the converter section.
    pub const CONVERTER: Self = Self {
        group_type: CategoryGroupType::Converter,
        header_resource_key: "ConverterModeTextCaps",
        mode_resource_key: "ConverterModeText",
        automation_resource_key: "ConverterModePluralText",
    };
}

/// A menu section: header strings plus its items in manifest order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavCategoryGroup {
    /// Group type shared by every item
    pub group_type: CategoryGroupType,
    /// Localized header
    pub name: String,
    /// Screen-reader header name
    pub automation_name: String,
    /// Items in manifest order
    pub categories: Vec<NavCategory>,
}

impl NavCategoryGroup {
    /// Finds the item for a mode.
    #[must_use]
    pub fn category(&self, mode: ViewMode) -> Option<&NavCategory> {
        self.categories.iter().find(|c| c.view_mode == mode)
    }

    /// Number of items in the group.
    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Returns true when the group has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(mode: ViewMode) -> NavCategory {
        NavCategory {
            name: mode.to_string(),
            automation_name: String::new(),
            glyph: String::new(),
            access_key: String::new(),
            mode: "Calculator".to_string(),
            view_mode: mode,
            supports_negative: true,
            is_enabled: true,
        }
    }

    #[test]
    fn test_group_category_lookup() {
        let group = NavCategoryGroup {
            group_type: CategoryGroupType::Calculator,
            name: "CALCULATOR".to_string(),
            automation_name: String::new(),
            categories: vec![item(ViewMode::Standard), item(ViewMode::Scientific)],
        };

        assert_eq!(group.len(), 2);
        assert!(!group.is_empty());
        assert_eq!(
            group.category(ViewMode::Scientific).map(|c| c.name.as_str()),
            Some("Scientific")
        );
        assert!(group.category(ViewMode::Currency).is_none());
    }

    #[test]
    fn test_descriptors() {
        assert_eq!(
            GroupDescriptor::CALCULATOR.group_type,
            CategoryGroupType::Calculator
        );
        assert_eq!(
            GroupDescriptor::CONVERTER.header_resource_key,
            "ConverterModeTextCaps"
        );
    }
}
