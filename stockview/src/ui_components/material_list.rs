use eframe::egui::{self, ScrollArea};
use stockview_core::{
    filter::SearchOptions,
    list_view::{MaterialListRender, MaterialListView},
    navigation::Navigator,
    store::MaterialStore,
};

/// UI component in charge of rendering the filtered material list.
/// Clicking a row hands the material over to the navigator.
pub struct MaterialListComponent {
    view: MaterialListView,
    selected_row: usize,
}

impl MaterialListComponent {
    pub fn new(store: MaterialStore) -> Self {
        Self {
            view: MaterialListView::new(store),
            selected_row: usize::MAX,
        }
    }

    pub fn update_filter(&mut self, search_filter: &str) {
        self.view.update_filter(search_filter);
        self.selected_row = usize::MAX;
    }

    pub fn set_search_options(&mut self, search_options: SearchOptions) {
        self.view.set_search_options(search_options);
        self.selected_row = usize::MAX;
    }

    /// Forget the selection, e.g. after the list has been replaced
    pub fn clear_selection(&mut self) {
        self.selected_row = usize::MAX;
    }

    pub fn update(&mut self, ui: &mut egui::Ui, navigator: &impl Navigator) {
        let render = match self.view.render() {
            Err(err) => {
                log::error!("Failed to render material list: {}", err);
                return;
            }
            Ok(render) => render,
        };

        ui.with_layout(
            egui::Layout::top_down(egui::Align::Min).with_cross_justify(true),
            |ui| match render {
                MaterialListRender::NoResults(message) => {
                    ui.label(message);
                }
                MaterialListRender::Rows(rows) => {
                    ScrollArea::vertical()
                        .auto_shrink([false, false])
                        .show(ui, |ui| {
                            for (row_index, row) in rows.iter().enumerate() {
                                let row_text = format!(
                                    "Id: {}\nName: {}\nUsed: {}",
                                    row.id, row.name, row.used
                                );
                                if ui
                                    .selectable_label(self.selected_row == row_index, row_text)
                                    .on_hover_cursor(egui::CursorIcon::PointingHand)
                                    .clicked()
                                {
                                    self.selected_row = row_index;
                                    if let Err(err) =
                                        self.view.select_material(row.material.clone(), navigator)
                                    {
                                        log::error!("Failed to open material: {}", err);
                                    }
                                }
                                ui.separator();
                            }
                        });
                }
            },
        );
    }
}
