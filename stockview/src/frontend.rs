use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use stockview_core::{
    navigation::{NavigationRequest, Navigator},
    Result, StockviewCoreError,
};

/// This struct enables views to send navigation requests to the application
pub struct EguiNavigator {
    pub rx_nav: Receiver<NavigationRequest>,
    tx_nav: Sender<NavigationRequest>,
    ui_ctx: egui::Context,
}

impl Navigator for EguiNavigator {
    /// Queue the request and make sure a new frame gets painted
    fn navigate(&self, request: NavigationRequest) -> Result<()> {
        self.tx_nav
            .send(request)
            .map_err(|err| StockviewCoreError::NavigationError(err.to_string()))?;
        self.ui_ctx.request_repaint();
        Ok(())
    }
}

impl EguiNavigator {
    pub fn new(
        tx_nav: Sender<NavigationRequest>,
        rx_nav: Receiver<NavigationRequest>,
        ui_ctx: egui::Context,
    ) -> Self {
        Self {
            rx_nav,
            tx_nav,
            ui_ctx,
        }
    }
}
