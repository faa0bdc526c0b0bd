//! Window geometry persisted as JSON in the user config directory.

use std::path::{Path, PathBuf};

use pipeweaver_common::{HostError, WindowGeometry, APP_DIR_NAME};
use pipeweaver_shell::GeometryStore;
use tracing::{debug, warn};

const GEOMETRY_FILE: &str = "window.json";

pub struct JsonGeometryStore {
    path: PathBuf,
    geometry: Option<WindowGeometry>,
}

impl JsonGeometryStore {
    /// `<config_dir>/pipeweaver/window.json`, next to `shell.toml`, or `./window.json` when the
    /// platform has no config directory.
    pub fn default_path() -> PathBuf {
        match dirs::config_dir() {
            Some(dir) => dir.join(APP_DIR_NAME).join(GEOMETRY_FILE),
            None => PathBuf::from(GEOMETRY_FILE),
        }
    }

    /// Load whatever is stored at `path`. A missing or unreadable file
    /// means no stored geometry.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let geometry = match std::fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str::<WindowGeometry>(&content) {
                Ok(geometry) => {
                    debug!(%geometry, "loaded geometry");
                    Some(geometry)
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "ignoring corrupt geometry file");
                    None
                }
            },
            Err(_) => {
                debug!(path = %path.display(), "no stored geometry");
                None
            }
        };
        Self { path, geometry }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the current geometry. Nothing is written if none is known.
    pub fn save(&self) -> Result<(), HostError> {
        let Some(geometry) = self.geometry else {
            return Ok(());
        };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(&geometry)?;
        std::fs::write(&self.path, json)?;
        debug!(%geometry, path = %self.path.display(), "saved geometry");
        Ok(())
    }
}

impl GeometryStore for JsonGeometryStore {
    fn geometry(&self) -> Option<WindowGeometry> {
        self.geometry
    }

    fn set_geometry(&mut self, geometry: WindowGeometry) {
        self.geometry = Some(geometry);
    }

    fn handle_close_request(&mut self) -> bool {
        if let Err(e) = self.save() {
            warn!(path = %self.path.display(), error = %e, "failed to save geometry");
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_has_no_geometry() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonGeometryStore::load(dir.path().join("window.json"));
        assert_eq!(store.geometry(), None);
    }

    #[test]
    fn corrupt_file_has_no_geometry() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("window.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert_eq!(JsonGeometryStore::load(&path).geometry(), None);
    }

    #[test]
    fn close_request_persists_last_geometry() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("window.json");

        let mut store = JsonGeometryStore::load(&path);
        store.set_geometry(WindowGeometry::new(10, 20, 1100, 700));
        assert!(!path.exists());
        assert!(store.handle_close_request());

        let reloaded = JsonGeometryStore::load(&path);
        assert_eq!(
            reloaded.geometry(),
            Some(WindowGeometry::new(10, 20, 1100, 700))
        );
    }

    #[test]
    fn save_without_geometry_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("window.json");
        JsonGeometryStore::load(&path).save().unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn reads_pretty_json_written_by_hand() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("window.json");
        std::fs::write(
            &path,
            "{\n  \"width\": 1200,\n  \"height\": 800,\n  \"x\": 50,\n  \"y\": 60\n}",
        )
        .unwrap();
        assert_eq!(
            JsonGeometryStore::load(&path).geometry(),
            Some(WindowGeometry::new(50, 60, 1200, 800))
        );
    }

    #[test]
    fn default_path_names_the_file() {
        assert!(JsonGeometryStore::default_path().ends_with("window.json"));
    }
}
