use crossbeam_channel::{Receiver, Sender};
use stockview_core::{
    navigation::{NavigationRequest, Navigator},
    Result, StockviewCoreError,
};

/// Navigator implementation for the CLI application.
/// Requests are queued and consumed by the command that triggered them.
pub struct CLINavigator {
    pub rx_nav: Receiver<NavigationRequest>,
    tx_nav: Sender<NavigationRequest>,
}

impl Navigator for CLINavigator {
    fn navigate(&self, request: NavigationRequest) -> Result<()> {
        self.tx_nav
            .send(request)
            .map_err(|err| StockviewCoreError::NavigationError(err.to_string()))
    }
}

impl CLINavigator {
    pub fn new(tx_nav: Sender<NavigationRequest>, rx_nav: Receiver<NavigationRequest>) -> Self {
        Self { rx_nav, tx_nav }
    }
}
