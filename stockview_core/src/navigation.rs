use serde::{Deserialize, Serialize};

use std::fmt;

use crate::{
    error::{Result, StockviewCoreError},
    material::Material,
};

/// Routes a frontend can display
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Route {
    /// The searchable material list
    #[serde(rename = "/used")]
    MaterialList,
    /// Details of a single material, reached by selecting a row
    #[serde(rename = "/used-deep")]
    MaterialDetail,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::MaterialList => "/used",
            Route::MaterialDetail => "/used-deep",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Data handed to the destination view
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NavigationPayload {
    pub material: Material,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NavigationRequest {
    pub route: Route,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<NavigationPayload>,
}

impl NavigationRequest {
    /// Request to display the details of `material`
    pub fn material_detail(material: Material) -> Self {
        Self {
            route: Route::MaterialDetail,
            payload: Some(NavigationPayload { material }),
        }
    }

    /// Request to go back to the material list
    pub fn material_list() -> Self {
        Self {
            route: Route::MaterialList,
            payload: None,
        }
    }
}

/// Router abstraction that receives navigation requests.
/// Implemented by each frontend.
pub trait Navigator {
    fn navigate(&self, request: NavigationRequest) -> Result<()>;
}

/// Frontend-side navigation state
#[derive(Debug)]
pub struct Router {
    current_route: Route,
    payload: Option<NavigationPayload>,
}

impl Router {
    pub fn new() -> Self {
        Self {
            current_route: Route::MaterialList,
            payload: None,
        }
    }

    pub fn current_route(&self) -> Route {
        self.current_route
    }

    pub fn current_material(&self) -> Option<&Material> {
        self.payload.as_ref().map(|payload| &payload.material)
    }

    /// Switch to the requested route.
    /// The detail route cannot be displayed without a material to show, and
    /// the list route never keeps one.
    pub fn apply(&mut self, request: NavigationRequest) -> Result<()> {
        if request.route == Route::MaterialDetail && request.payload.is_none() {
            return Err(StockviewCoreError::InvalidParameterError(format!(
                "'{}' requires a material payload",
                request.route
            )));
        }

        log::debug!("Navigating from '{}' to '{}'", self.current_route, request.route);
        self.current_route = request.route;
        self.payload = match request.route {
            Route::MaterialList => None,
            Route::MaterialDetail => request.payload,
        };
        Ok(())
    }

    pub fn back(&mut self) {
        self.current_route = Route::MaterialList;
        self.payload = None;
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}
