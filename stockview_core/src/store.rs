use std::{
    fs,
    path::Path,
    sync::{Arc, RwLock},
};

use crate::{
    error::{Result, StockviewCoreError},
    material::MaterialList,
};

/// Shared handle to the ordered list of materials.
///
/// The store is the owner of the list. Views hold a clone of the handle and
/// only read through it, while the frontend replaces the content with
/// `set_materials` when a new file is opened.
#[derive(Clone, Debug, Default)]
pub struct MaterialStore {
    materials: Arc<RwLock<MaterialList>>,
}

impl MaterialStore {
    pub fn new(materials: MaterialList) -> Self {
        Self {
            materials: Arc::new(RwLock::new(materials)),
        }
    }

    /// Load a JSON array of materials from a file
    pub fn load_from_file(file_path: &Path) -> Result<Self> {
        let file_data = fs::read(file_path)?;
        Self::load_from_bytes(&file_data)
    }

    pub fn load_from_bytes(data: &[u8]) -> Result<Self> {
        Ok(Self::new(parse_material_list(data)?))
    }

    /// Snapshot of the current list
    pub fn materials(&self) -> Result<MaterialList> {
        match self.materials.read() {
            Err(err) => Err(StockviewCoreError::StoreLockError(err.to_string())),
            Ok(materials) => Ok(materials.clone()),
        }
    }

    pub fn set_materials(&self, materials: MaterialList) -> Result<()> {
        match self.materials.write() {
            Err(err) => Err(StockviewCoreError::StoreLockError(err.to_string())),
            Ok(mut current) => {
                *current = materials;
                Ok(())
            }
        }
    }

    pub fn len(&self) -> Result<usize> {
        match self.materials.read() {
            Err(err) => Err(StockviewCoreError::StoreLockError(err.to_string())),
            Ok(materials) => Ok(materials.len()),
        }
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}

/// Parse a JSON array of materials
pub fn parse_material_list(data: &[u8]) -> Result<MaterialList> {
    let material_list: MaterialList = serde_json::from_slice(data)?;
    log::debug!("Parsed {} materials", material_list.len());
    Ok(material_list)
}
