use eframe::egui;

pub struct TextSearchComponent {
    hint: String,
    search_filter: String,
}

impl TextSearchComponent {
    pub fn new(hint: &str) -> Self {
        Self {
            hint: hint.into(),
            search_filter: String::default(),
        }
    }

    /// Update/render the UI component.
    /// `on_query_update` runs on every keystroke.
    pub fn update<CB: FnMut(&str)>(&mut self, ui: &mut egui::Ui, on_query_update: &mut CB) {
        let search_field = egui::TextEdit::singleline(&mut self.search_filter)
            .hint_text(self.hint.as_str())
            .desired_width(f32::INFINITY);
        if ui.add(search_field).changed() {
            on_query_update(self.search_filter.as_str());
        }
    }
}
