//! JSON-file adapter for the cart snapshot port.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use velogo_cart::{Cart, SnapshotError, SnapshotStore, CART_NAMESPACE};

/// Cart snapshot stored as one JSON file named after the fixed namespace.
///
/// Loaded once at session start; every save rewrites the whole file.
#[derive(Debug, Clone)]
pub struct JsonFileCartStore {
    path: PathBuf,
}

impl JsonFileCartStore {
    /// Store the snapshot inside `data_dir` (created on first save).
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            path: data_dir.into().join(format!("{CART_NAMESPACE}.json")),
        }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl SnapshotStore for JsonFileCartStore {
    fn load(&self) -> Result<Option<Cart>, SnapshotError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(SnapshotError::Read(err.to_string())),
        };
        let cart = serde_json::from_str(&raw).map_err(|e| SnapshotError::Read(e.to_string()))?;
        Ok(Some(cart))
    }

    fn save(&self, cart: &Cart) -> Result<(), SnapshotError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| SnapshotError::Write(e.to_string()))?;
        }
        let raw =
            serde_json::to_string_pretty(cart).map_err(|e| SnapshotError::Write(e.to_string()))?;
        fs::write(&self.path, raw).map_err(|e| SnapshotError::Write(e.to_string()))
    }
}
