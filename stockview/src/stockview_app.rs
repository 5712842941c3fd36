use anyhow::Result;
use eframe::egui;
use memory_logger::blocking::MemoryLogger;
use stockview_core::{
    filter::SearchOptions,
    navigation::{NavigationRequest, Route, Router},
    store::{parse_material_list, MaterialStore},
    StockviewCoreError,
};

use std::path::{Path, PathBuf};

use crate::{
    frontend::EguiNavigator,
    settings::{MaterialSearchFilters, StockviewAppSettings},
    ui_components::{
        ConsoleComponent, MaterialDetailComponent, MaterialListComponent, SearchFiltersComponent,
        SettingsComponent, TextSearchComponent,
    },
};

const PKG_NAME: &str = env!("CARGO_PKG_NAME");
const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Struct that represents our GUI application.
/// It contains the whole application's context at all time.
pub struct StockviewApp {
    material_store: MaterialStore,
    material_search: TextSearchComponent,
    search_filters: SearchFiltersComponent<MaterialSearchFilters>,
    material_list: MaterialListComponent,
    material_detail: MaterialDetailComponent,
    console: ConsoleComponent,
    settings: SettingsComponent,
    router: Router,
    navigator: EguiNavigator,
}

// GUI-related trait
impl eframe::App for StockviewApp {
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        // Save settings on shutdown
        eframe::set_value(storage, eframe::APP_KEY, &self.settings.app_settings);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Update theme if needed
        self.process_theme_update(ctx);

        // Update the "Settings" window if open
        self.settings.update(ctx);

        // Update the top panel (i.e, menu bar)
        self.update_top_panel(ctx);

        // Update the left side panel (i.e., the search bar and the material list)
        self.update_left_side_panel(ctx);

        // Update the bottom panel (i.e., the console)
        self.update_bottom_panel(ctx);

        // Apply selections made in the list before painting the central panel
        self.process_navigation_requests();

        // Update the central panel (i.e., the current route)
        self.update_central_panel(ctx);

        // Process drag and drop messages, if any
        self.handle_drag_and_drop(ctx);
    }
}

// Utility associated functions and methods
impl StockviewApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        logger: &'static MemoryLogger,
        materials_path: Option<PathBuf>,
    ) -> Result<Self> {
        let (tx_nav, rx_nav) = crossbeam_channel::unbounded::<NavigationRequest>();
        let navigator = EguiNavigator::new(tx_nav, rx_nav, cc.egui_ctx.clone());

        // Load settings on launch
        let app_settings: StockviewAppSettings = if let Some(storage) = cc.storage {
            eframe::get_value(storage, eframe::APP_KEY).unwrap_or_default()
        } else {
            StockviewAppSettings::default()
        };

        let material_store = MaterialStore::default();
        let search_filters =
            SearchFiltersComponent::new("Search options", app_settings.search_filters);
        let mut material_list = MaterialListComponent::new(material_store.clone());
        material_list.set_search_options(SearchOptions::from(search_filters.filters()));

        log::info!("{} {}", PKG_NAME, PKG_VERSION);
        let mut app = Self {
            material_store,
            material_search: TextSearchComponent::new("Search by Id"),
            search_filters,
            material_list,
            material_detail: MaterialDetailComponent::new(),
            console: ConsoleComponent::new(logger),
            settings: SettingsComponent::new(app_settings),
            router: Router::new(),
            navigator,
        };

        if let Some(materials_path) = materials_path {
            app.load_materials_file(&materials_path);
        }

        Ok(app)
    }

    fn process_theme_update(&mut self, ctx: &egui::Context) {
        let theme = if self.settings.app_settings.use_light_theme {
            egui::Visuals::light()
        } else {
            egui::Visuals::dark()
        };
        ctx.set_visuals(theme);
    }

    fn update_top_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            // Process keyboard shortcuts, if any
            self.consume_keyboard_shortcuts(ui);

            // The top panel is often a good place for a menu bar
            self.update_menu_bar(ui);
        });
    }

    fn update_left_side_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("side_panel")
            .default_width(280.0)
            .width_range(160.0..=f32::INFINITY)
            .show(ctx, |ui| {
                ui.heading("Material Used");
                ui.add_space(4.0);

                // Every keystroke updates the list's filter
                let mut on_query_update = |search_query: &str| {
                    self.material_list.update_filter(search_query);
                };
                self.material_search.update(ui, &mut on_query_update);

                let mut on_filter_update = |filters: &MaterialSearchFilters| {
                    self.material_list
                        .set_search_options(SearchOptions::from(filters));
                    self.settings.app_settings.search_filters = *filters;
                };
                self.search_filters.update(ui, &mut on_filter_update);
                ui.separator();
                ui.add_space(4.0);

                // Update the material list
                self.material_list.update(ui, &self.navigator);
            });
    }

    fn update_bottom_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("bottom_panel")
            .min_height(100.0)
            .resizable(true)
            .show(ctx, |ui| {
                // Console panel
                ui.vertical(|ui| {
                    ui.label("Console");
                    ui.add_space(4.0);

                    // Update the console component
                    self.console.update(ui);
                });
            });
    }

    fn update_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| match self.router.current_route() {
            Route::MaterialList => {
                ui.label("Select a material to display its details");
            }
            Route::MaterialDetail => {
                let back_requested = self
                    .material_detail
                    .update(ui, self.router.current_material());
                if back_requested {
                    self.router.back();
                    self.material_list.clear_selection();
                }
            }
        });
    }

    fn consume_keyboard_shortcuts(&mut self, ui: &mut egui::Ui) {
        /// Keyboard shortcut for opening files
        const CTRL_O_SHORTCUT: egui::KeyboardShortcut = egui::KeyboardShortcut {
            modifiers: egui::Modifiers::CTRL,
            logical_key: egui::Key::O,
        };
        // The dialog must not be opened while the input state is locked
        if ui.input_mut(|input_state| input_state.consume_shortcut(&CTRL_O_SHORTCUT)) {
            self.start_open_materials_file();
        }
    }

    fn update_menu_bar(&mut self, ui: &mut egui::Ui) {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Open materials file (Ctrl+O)").clicked() {
                    ui.close_menu();
                    self.start_open_materials_file();
                }

                // Separate "Open" from "Settings"
                ui.separator();

                if ui.button("Settings").clicked() {
                    ui.close_menu();
                    self.settings.open();
                }
                if ui.button("Exit").clicked() {
                    ui.close_menu();
                    ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });
        });
    }

    /// Apply pending navigation requests to the router
    fn process_navigation_requests(&mut self) {
        while let Ok(request) = self.navigator.rx_nav.try_recv() {
            if let Err(err) = self.router.apply(request) {
                log::error!("Failed to navigate: {}", err);
            }
        }
    }

    /// Function invoked on `Open materials file` or when the Ctrl+O shortcut is used
    fn start_open_materials_file(&mut self) {
        let file_path_opt = rfd::FileDialog::new()
            .add_filter("Materials files (*.json)", &["json"])
            .pick_file();
        if let Some(file_path) = file_path_opt {
            self.load_materials_file(&file_path);
        }
    }

    fn load_materials_file(&mut self, file_path: &Path) {
        log::info!("Loading a new materials file ...");
        let load_result = std::fs::read(file_path)
            .map_err(StockviewCoreError::from)
            .and_then(|data| parse_material_list(&data))
            .and_then(|material_list| self.material_store.set_materials(material_list));
        match load_result {
            Err(err) => log::error!("Failed to load materials file: {}", err),
            Ok(()) => {
                // The previous selection may refer to a material that's gone
                self.router.back();
                self.material_list.clear_selection();
                log::info!("'{}' has been loaded successfully!", file_path.display());
            }
        }
    }

    fn handle_drag_and_drop(&mut self, ctx: &egui::Context) {
        let dropped_file_path = ctx.input(|i| {
            i.raw
                .dropped_files
                .first()
                .and_then(|file| file.path.clone())
        });
        // Only the first dropped file is considered
        if let Some(file_path) = dropped_file_path {
            self.load_materials_file(&file_path);
        }
    }
}
