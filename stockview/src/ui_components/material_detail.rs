use eframe::egui;
use stockview_core::material::Material;

/// Minimal destination view of a navigation hand-off
pub struct MaterialDetailComponent {}

impl MaterialDetailComponent {
    pub fn new() -> Self {
        Self {}
    }

    /// Update/render the UI component.
    /// Returns `true` when the user asked to go back to the list.
    pub fn update(&mut self, ui: &mut egui::Ui, material: Option<&Material>) -> bool {
        let back_clicked = ui.button("⬅ Back").clicked();
        ui.separator();

        match material {
            None => {
                ui.label("No material selected");
            }
            Some(material) => {
                egui::Grid::new("material_detail_grid")
                    .num_columns(2)
                    .striped(true)
                    .show(ui, |ui| {
                        ui.strong("Id:");
                        ui.label(material.id_label());
                        ui.end_row();

                        ui.strong("Name:");
                        ui.label(material.name_label());
                        ui.end_row();

                        ui.strong("Used:");
                        ui.label(material.used_label());
                        ui.end_row();
                    });
            }
        }

        back_clicked
    }
}
