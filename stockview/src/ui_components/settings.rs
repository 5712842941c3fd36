use eframe::egui;

use crate::settings::StockviewAppSettings;

pub struct SettingsComponent {
    window_open: bool,
    pub app_settings: StockviewAppSettings,
}

impl SettingsComponent {
    pub fn new(app_settings: StockviewAppSettings) -> Self {
        Self {
            window_open: false,
            app_settings,
        }
    }

    pub fn open(&mut self) {
        self.window_open = true;
    }

    pub fn update(&mut self, ctx: &egui::Context) {
        egui::Window::new("Settings")
            .anchor(egui::Align2::CENTER_CENTER, [0.0; 2])
            .open(&mut self.window_open)
            .auto_sized()
            .collapsible(false)
            .show(ctx, |ui| {
                ui.label("Theme");
                ui.horizontal(|ui| {
                    ui.selectable_value(&mut self.app_settings.use_light_theme, true, "☀ Light");
                    ui.selectable_value(&mut self.app_settings.use_light_theme, false, "🌙 Dark");
                });
            });
    }
}
