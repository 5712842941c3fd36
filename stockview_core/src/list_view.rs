use crate::{
    error::Result,
    filter::{filter_materials_with_options, SearchOptions},
    material::{Material, MaterialList},
    navigation::{NavigationRequest, Navigator},
    store::MaterialStore,
};

/// Message displayed in place of the rows when nothing matches
pub const NO_RESULTS_MESSAGE: &str = "No matching materials";

/// One displayed row of the material list
#[derive(Clone, Debug, PartialEq)]
pub struct MaterialRow {
    pub id: String,
    pub name: String,
    pub used: String,
    /// Record handed to the navigator when the row is selected
    pub material: Material,
}

impl From<Material> for MaterialRow {
    fn from(material: Material) -> Self {
        Self {
            id: material.id_label().to_string(),
            name: material.name_label().to_string(),
            used: material.used_label(),
            material,
        }
    }
}

/// Output of `MaterialListView::render`
#[derive(Clone, Debug, PartialEq)]
pub enum MaterialListRender {
    NoResults(&'static str),
    Rows(Vec<MaterialRow>),
}

impl MaterialListRender {
    pub fn rows(&self) -> &[MaterialRow] {
        match self {
            MaterialListRender::NoResults(_) => &[],
            MaterialListRender::Rows(rows) => rows,
        }
    }
}

/// View model of the searchable material list.
///
/// The only state owned by the view is the filter text (and the search
/// options); the filtered sequence is derived again on every render.
#[derive(Debug)]
pub struct MaterialListView {
    store: MaterialStore,
    search_filter: String,
    search_options: SearchOptions,
}

impl MaterialListView {
    pub fn new(store: MaterialStore) -> Self {
        Self {
            store,
            search_filter: String::default(),
            search_options: SearchOptions::default(),
        }
    }

    pub fn search_filter(&self) -> &str {
        self.search_filter.as_str()
    }

    pub fn update_filter(&mut self, search_filter: impl Into<String>) {
        self.search_filter = search_filter.into();
    }

    pub fn search_options(&self) -> SearchOptions {
        self.search_options
    }

    pub fn set_search_options(&mut self, search_options: SearchOptions) {
        self.search_options = search_options;
    }

    pub fn filtered_view(&self) -> Result<MaterialList> {
        let materials = self.store.materials()?;
        Ok(filter_materials_with_options(
            &materials,
            &self.search_filter,
            self.search_options,
        ))
    }

    pub fn render(&self) -> Result<MaterialListRender> {
        let filtered_materials = self.filtered_view()?;
        if filtered_materials.is_empty() {
            Ok(MaterialListRender::NoResults(NO_RESULTS_MESSAGE))
        } else {
            Ok(MaterialListRender::Rows(
                filtered_materials.into_iter().map(MaterialRow::from).collect(),
            ))
        }
    }

    /// Hand `material` over to the detail route
    pub fn select_material(&self, material: Material, navigator: &impl Navigator) -> Result<()> {
        log::info!("Opening material '{}'", material.id_label());
        navigator.navigate(NavigationRequest::material_detail(material))
    }
}
