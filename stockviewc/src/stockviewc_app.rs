use std::{
    fs::File,
    io::{self, Write},
    path::PathBuf,
};

use anyhow::{anyhow, Result};
use stockview_core::{
    filter::SearchOptions,
    list_view::{MaterialListRender, MaterialListView},
    navigation::NavigationRequest,
    store::MaterialStore,
    StockviewCoreError,
};

use crate::frontend::CLINavigator;

/// Struct that represents our CLI application.
/// It contains the whole application's context at all time.
pub struct StockviewcApp {
    navigator: CLINavigator,
}

impl StockviewcApp {
    pub fn new() -> Result<Self> {
        let (tx_nav, rx_nav) = crossbeam_channel::unbounded::<NavigationRequest>();
        let navigator = CLINavigator::new(tx_nav, rx_nav);

        Ok(Self { navigator })
    }

    pub fn list_materials_command(
        &self,
        materials_path: PathBuf,
        material_id_filter: String,
        case_insensitive: bool,
        use_regex: bool,
        output_file_path: Option<PathBuf>,
    ) -> Result<()> {
        let view = open_list_view(
            materials_path,
            material_id_filter,
            SearchOptions {
                case_insensitive,
                use_regex,
            },
        )?;

        let mut output = open_output(output_file_path)?;
        match view.render()? {
            MaterialListRender::NoResults(message) => writeln!(output, "{message}")?,
            MaterialListRender::Rows(rows) => {
                for row in rows {
                    writeln!(output, "{}\t{}\t{}", row.id, row.name, row.used)?;
                }
            }
        }
        Ok(())
    }

    #[allow(clippy::too_many_arguments)]
    pub fn select_material_command(
        &self,
        materials_path: PathBuf,
        material_id: String,
        material_id_filter: String,
        case_insensitive: bool,
        use_regex: bool,
        output_file_path: Option<PathBuf>,
    ) -> Result<()> {
        let view = open_list_view(
            materials_path,
            material_id_filter,
            SearchOptions {
                case_insensitive,
                use_regex,
            },
        )?;

        // Only displayed rows can be selected
        let render = view.render()?;
        let selected_row = render
            .rows()
            .iter()
            .find(|row| row.material.id.as_deref() == Some(material_id.as_str()))
            .ok_or(StockviewCoreError::MaterialNotFoundError(material_id))?;
        view.select_material(selected_row.material.clone(), &self.navigator)?;

        // Wait for the navigation request to come back
        let request = self
            .navigator
            .rx_nav
            .try_recv()
            .map_err(|err| anyhow!("No navigation request received: {}", err))?;

        let mut output = open_output(output_file_path)?;
        writeln!(output, "{}", serde_json::to_string_pretty(&request)?)?;
        Ok(())
    }
}

fn open_list_view(
    materials_path: PathBuf,
    material_id_filter: String,
    search_options: SearchOptions,
) -> Result<MaterialListView> {
    let store = MaterialStore::load_from_file(&materials_path)
        .map_err(|err| anyhow!("Failed to load materials: {}", err))?;
    log::info!(
        "'{}' has been loaded successfully! ({} materials)",
        materials_path.display(),
        store.len()?
    );

    let mut view = MaterialListView::new(store);
    view.set_search_options(search_options);
    view.update_filter(material_id_filter);
    Ok(view)
}

fn open_output(output_file_path: Option<PathBuf>) -> Result<Box<dyn Write>> {
    if let Some(output_file_path) = output_file_path {
        Ok(Box::new(File::create(output_file_path)?))
    } else {
        Ok(Box::new(io::stdout().lock()))
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    use stockview_core::{material::Material, navigation::Route};
    use tempdir::TempDir;

    const TEST_MATERIALS_FILE_PATH: &str = "../stockview_core/tests/data/materials.json";

    fn test_materials_path() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(TEST_MATERIALS_FILE_PATH)
    }

    // List materials
    #[test]
    fn list_materials_command_invalid_materials_path() {
        let app = StockviewcApp::new().expect("StockviewcApp creation failed");
        // The command should fail
        assert!(app
            .list_materials_command(PathBuf::new(), "CST".to_string(), false, false, None)
            .is_err());
    }

    #[test]
    fn list_materials_command_stdio_successful() {
        let app = StockviewcApp::new().expect("StockviewcApp creation failed");
        // The command should succeed
        assert!(app
            .list_materials_command(test_materials_path(), "CST".to_string(), false, false, None)
            .is_ok());
    }

    #[test]
    fn list_materials_command_file_successful() {
        let app = StockviewcApp::new().expect("StockviewcApp creation failed");
        let tmp_dir = TempDir::new("list_materials_command_file_successful")
            .expect("TempDir creation failed");
        let output_path = tmp_dir.path().join("output.txt");
        // The command should succeed
        assert!(app
            .list_materials_command(
                test_materials_path(),
                "t-".to_string(),
                true,
                false,
                Some(output_path.clone()),
            )
            .is_ok());

        // Check output file's content
        let output = fs::read_to_string(output_path).expect("Failed to read output file");
        assert_eq!(
            output,
            concat!(
                "CST-100\tGrey iron casting\t12\n",
                "CST-101\tDuctile iron casting\t4.5\n",
                "BLT-200\tHex bolt M8\tyes\n",
                "NUT-300\tLock nut M8\tno\n",
                "CST-102\t\t\n"
            )
        );
    }

    #[test]
    fn list_materials_command_no_results() {
        let app = StockviewcApp::new().expect("StockviewcApp creation failed");
        let tmp_dir =
            TempDir::new("list_materials_command_no_results").expect("TempDir creation failed");
        let output_path = tmp_dir.path().join("output.txt");
        assert!(app
            .list_materials_command(
                test_materials_path(),
                "cst".to_string(),
                false,
                false,
                Some(output_path.clone()),
            )
            .is_ok());

        let output = fs::read_to_string(output_path).expect("Failed to read output file");
        assert_eq!(output, "No matching materials\n");
    }

    // Select material
    #[test]
    fn select_material_command_file_successful() {
        let app = StockviewcApp::new().expect("StockviewcApp creation failed");
        let tmp_dir = TempDir::new("select_material_command_file_successful")
            .expect("TempDir creation failed");
        let output_path = tmp_dir.path().join("output.json");
        assert!(app
            .select_material_command(
                test_materials_path(),
                "BLT-200".to_string(),
                "BLT".to_string(),
                false,
                false,
                Some(output_path.clone()),
            )
            .is_ok());

        let output = fs::read_to_string(output_path).expect("Failed to read output file");
        let request: NavigationRequest =
            serde_json::from_str(&output).expect("Failed to parse navigation request");
        assert_eq!(request.route, Route::MaterialDetail);
        assert_eq!(
            request.payload.map(|payload| payload.material),
            Some(Material::new("BLT-200", "Hex bolt M8", "yes"))
        );
    }

    #[test]
    fn select_material_command_filtered_out() {
        let app = StockviewcApp::new().expect("StockviewcApp creation failed");
        // "NUT-300" exists but isn't displayed with this filter
        assert!(app
            .select_material_command(
                test_materials_path(),
                "NUT-300".to_string(),
                "CST".to_string(),
                false,
                false,
                None,
            )
            .is_err());
    }

    #[test]
    fn select_material_command_regex_filter() {
        let app = StockviewcApp::new().expect("StockviewcApp creation failed");
        assert!(app
            .select_material_command(
                test_materials_path(),
                "CST-101".to_string(),
                "^cst-10[01]$".to_string(),
                true,
                true,
                None,
            )
            .is_ok());
    }
}
