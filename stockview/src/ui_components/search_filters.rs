use bevy_reflect::{Reflect, Struct};
use eframe::egui;

/// Renders one checkbox per `bool` field of `FilterType`
pub struct SearchFiltersComponent<FilterType> {
    header: String,
    filters: FilterType,
}

impl<FilterType: Default + Clone + Reflect + Struct> SearchFiltersComponent<FilterType> {
    pub fn new(header: &str, filters: FilterType) -> Self {
        Self {
            header: header.into(),
            filters,
        }
    }

    pub fn filters(&self) -> &FilterType {
        &self.filters
    }

    /// Update/render the UI component
    pub fn update<CB: FnMut(&FilterType)>(&mut self, ui: &mut egui::Ui, on_filter_update: &mut CB) {
        ui.collapsing(&self.header, |ui| {
            ui.horizontal_wrapped(|ui| {
                for i in 0..self.filters.field_len() {
                    // Field names are used as labels, e.g. `use_regex` -> "use regex"
                    let field_label = self
                        .filters
                        .name_at(i)
                        .expect("name_at should succeed")
                        .replace('_', " ");
                    let field_value = self
                        .filters
                        .field_at_mut(i)
                        .expect("field_at_mut should succeed")
                        .try_downcast_mut::<bool>()
                        .expect("filter field should be bool");

                    if ui.checkbox(field_value, field_label).changed() {
                        on_filter_update(&self.filters);
                    }
                }
            });
        });
    }
}
