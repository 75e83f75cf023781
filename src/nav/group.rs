//! Menu group construction.

use super::{manifest, NavContext};
use crate::localization::{format_localized, ResourceProvider};
use crate::models::{GroupDescriptor, NavCategory, NavCategoryGroup, ViewMode};

const HEADER_AUTOMATION_FORMAT_KEY: &str = "NavCategoryHeader_AutomationNameFormat";
const ITEM_AUTOMATION_FORMAT_KEY: &str = "NavCategoryItem_AutomationNameFormat";

impl NavCategoryGroup {
    /// Builds a localized group from the manifest entries of `descriptor.group_type`.
    ///
    /// Items keep manifest order. An item's access key is the manifest's literal
    /// key when present, otherwise the `<nameResourceKey>AccessKey` resource.
    /// Every item except Graphing starts enabled; call
    /// [`NavCategoryGroup::apply_context`] once policy has been evaluated.
    #[must_use]
    pub fn new(descriptor: &GroupDescriptor, resources: &dyn ResourceProvider) -> Self {
        let name = resources.resource_string(descriptor.header_resource_key);
        let group_mode = resources.resource_string(descriptor.mode_resource_key);
        let automation_text = resources.resource_string(descriptor.automation_resource_key);

        let header_format = resources.resource_string(HEADER_AUTOMATION_FORMAT_KEY);
        let automation_name = format_localized(&header_format, &[automation_text.as_str()]);

        let item_format = resources.resource_string(ITEM_AUTOMATION_FORMAT_KEY);

        let categories = manifest::records()
            .iter()
            .filter(|r| r.group_type == descriptor.group_type)
            .map(|record| {
                let key = record.name_resource_key;
                let category_name = resources.resource_string(&format!("{key}Text"));
                let category_automation_name =
                    format_localized(&item_format, &[category_name.as_str(), name.as_str()]);
                let access_key = record.access_key.map_or_else(
                    || resources.resource_string(&format!("{key}AccessKey")),
                    str::to_string,
                );

                NavCategory {
                    name: category_name,
                    automation_name: category_automation_name,
                    glyph: record.glyph.to_string(),
                    access_key,
                    mode: group_mode.clone(),
                    view_mode: record.view_mode,
                    supports_negative: record.supports_negative,
                    is_enabled: record.view_mode != ViewMode::Graphing,
                }
            })
            .collect();

        Self {
            group_type: descriptor.group_type,
            name,
            automation_name,
            categories,
        }
    }

    /// Sets the Graphing item's enabled state from the context's policy.
    pub fn apply_context(&mut self, context: &NavContext) {
        for item in &mut self.categories {
            if item.view_mode == ViewMode::Graphing {
                item.is_enabled = context.is_graphing_enabled();
            }
        }
    }
}

/// The calculator section.
#[must_use]
pub fn create_calculator_group(resources: &dyn ResourceProvider) -> NavCategoryGroup {
    NavCategoryGroup::new(&GroupDescriptor::CALCULATOR, resources)
}

/// The converter section.
#[must_use]
pub fn create_converter_group(resources: &dyn ResourceProvider) -> NavCategoryGroup {
    NavCategoryGroup::new(&GroupDescriptor::CONVERTER, resources)
}

/// All menu sections in display order: calculators, then converters.
#[must_use]
pub fn create_menu_options(resources: &dyn ResourceProvider) -> Vec<NavCategoryGroup> {
    vec![
        create_calculator_group(resources),
        create_converter_group(resources),
    ]
}
