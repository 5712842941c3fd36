mod frontend;
mod stockviewc_app;
mod stockviewc_options;

use anyhow::Result;
use structopt::StructOpt;

use crate::{stockviewc_app::StockviewcApp, stockviewc_options::StockviewcOptions};

fn main() -> Result<()> {
    env_logger::init();
    let app = StockviewcApp::new()?;

    // Process command and options
    let opt = StockviewcOptions::from_args();
    match opt {
        StockviewcOptions::List {
            materials_path,
            material_id_filter,
            output_file_path,
            case_insensitive,
            use_regex,
        } => app.list_materials_command(
            materials_path,
            material_id_filter,
            case_insensitive,
            use_regex,
            output_file_path,
        ),
        StockviewcOptions::Select {
            materials_path,
            material_id,
            output_file_path,
            filter,
            case_insensitive,
            use_regex,
        } => app.select_material_command(
            materials_path,
            material_id,
            filter,
            case_insensitive,
            use_regex,
            output_file_path,
        ),
    }
}
