use std::path::PathBuf;

use structopt::StructOpt;

const PKG_NAME: &str = env!("CARGO_PKG_NAME");

#[derive(Debug, StructOpt)]
#[structopt(
    name = PKG_NAME,
    about = "stockviewc is a utility that allows searching and selecting materials from a list."
)]
pub enum StockviewcOptions {
    /// List materials whose id matches a filter
    List {
        /// Path to the materials file (JSON)
        materials_path: PathBuf,
        /// Search filter
        material_id_filter: String,
        /// Path of the output file
        output_file_path: Option<PathBuf>,
        /// Do not match case
        #[structopt(short = "i", long)]
        case_insensitive: bool,
        /// Use regular expressions
        #[structopt(short = "r", long)]
        use_regex: bool,
    },
    /// Select a material and print the resulting navigation request
    Select {
        /// Path to the materials file (JSON)
        materials_path: PathBuf,
        /// Id of the material to select
        material_id: String,
        /// Path of the output file
        output_file_path: Option<PathBuf>,
        /// Search filter applied before selecting
        #[structopt(short = "f", long, default_value = "")]
        filter: String,
        /// Do not match case
        #[structopt(short = "i", long)]
        case_insensitive: bool,
        /// Use regular expressions
        #[structopt(short = "r", long)]
        use_regex: bool,
    },
}
