mod console;
mod material_detail;
mod material_list;
mod search_filters;
mod settings;
mod text_search;

pub use console::*;
pub use material_detail::*;
pub use material_list::*;
pub use search_filters::*;
pub use settings::*;
pub use text_search::*;
