use eframe::egui::{self, ScrollArea, TextStyle};
use memory_logger::blocking::MemoryLogger;

/// Oldest lines are dropped past this count
const MAX_CONSOLE_LINES: usize = 2000;

/// Displays the log records captured by the in-memory logger
pub struct ConsoleComponent {
    logger: &'static MemoryLogger,
    lines: Vec<String>,
}

impl ConsoleComponent {
    pub fn new(logger: &'static MemoryLogger) -> Self {
        Self {
            logger,
            lines: vec![],
        }
    }

    fn drain_logger(&mut self) {
        self.lines
            .extend(self.logger.read().lines().map(str::to_string));
        self.logger.clear();

        if self.lines.len() > MAX_CONSOLE_LINES {
            let overflow = self.lines.len() - MAX_CONSOLE_LINES;
            self.lines.drain(..overflow);
        }
    }

    pub fn update(&mut self, ui: &mut egui::Ui) {
        self.drain_logger();

        let row_height = ui.text_style_height(&TextStyle::Monospace);
        ScrollArea::both().stick_to_bottom(true).show_rows(
            ui,
            row_height,
            self.lines.len(),
            |ui, row_range| {
                for line in &self.lines[row_range] {
                    ui.monospace(line.as_str());
                }
            },
        );
    }
}
