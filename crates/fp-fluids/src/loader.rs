//! Fluid record loading.

use crate::data::FluidData;
use crate::error::{FluidError, FluidResult};
use crate::registry;
use std::path::Path;

/// Load one fluid record from an explicit path.
pub fn load_fluid(path: &Path) -> FluidResult<FluidData> {
    let raw = std::fs::read_to_string(path).map_err(|source| FluidError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&raw).map_err(|source| FluidError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a fluid by name from a catalog directory.
///
/// The name is resolved through the alias registry; names the registry
/// does not know fall back to `<name>.json`. A missing file is a
/// catalog miss, not an I/O error.
pub fn load_fluid_by_name(name: &str, data_dir: &Path) -> FluidResult<FluidData> {
    let filename = match registry::fluid_filename(name) {
        Ok(filename) => filename.to_string(),
        Err(_) if name.to_ascii_lowercase().ends_with(".json") => name.to_string(),
        Err(_) => format!("{name}.json"),
    };

    let path = data_dir.join(filename);
    if !path.exists() {
        return Err(FluidError::NotFound {
            name: name.to_string(),
        });
    }

    load_fluid(&path)
}
