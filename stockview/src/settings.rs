use bevy_reflect::Reflect;
use serde::{Deserialize, Serialize};
use stockview_core::filter::SearchOptions;

/// This struct represents the persistent settings of the application.
#[derive(Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StockviewAppSettings {
    pub use_light_theme: bool,
    pub search_filters: MaterialSearchFilters,
}

/// Search options displayed as checkboxes above the material list.
/// Every field must be a `bool`.
#[derive(Clone, Copy, Default, Reflect, Serialize, Deserialize)]
#[serde(default)]
pub struct MaterialSearchFilters {
    pub case_insensitive: bool,
    pub use_regex: bool,
}

impl From<&MaterialSearchFilters> for SearchOptions {
    fn from(filters: &MaterialSearchFilters) -> Self {
        SearchOptions {
            case_insensitive: filters.case_insensitive,
            use_regex: filters.use_regex,
        }
    }
}
