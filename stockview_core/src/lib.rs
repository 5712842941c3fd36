mod error;
pub mod filter;
pub mod list_view;
pub mod material;
pub mod navigation;
pub mod store;

pub use error::*;
