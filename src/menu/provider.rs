//! Menu provider traits and implementations
//!
//! A provider hands the estimator the current menu. The static provider
//! serves a fixed snapshot; the file provider re-reads a JSON export on every
//! request so edits show up without a restart.

use crate::error::{EstimatorError, Result};
use crate::menu::snapshot::MenuSnapshot;
use crate::types::MenuItem;
use anyhow::Context;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Trait for supplying menu snapshots
pub trait MenuProvider: Send + Sync {
    /// Get the current menu
    fn snapshot(&self) -> Result<MenuSnapshot>;

    /// Human-readable description of where the menu comes from
    fn describe(&self) -> String;
}

/// Provider serving one fixed snapshot
#[derive(Debug, Clone)]
pub struct StaticMenuProvider {
    snapshot: MenuSnapshot,
}

impl StaticMenuProvider {
    pub fn new(snapshot: MenuSnapshot) -> Self {
        Self { snapshot }
    }

    pub fn from_items(items: Vec<MenuItem>) -> Self {
        Self::new(MenuSnapshot::new(items))
    }
}

impl MenuProvider for StaticMenuProvider {
    fn snapshot(&self) -> Result<MenuSnapshot> {
        Ok(self.snapshot.clone())
    }

    fn describe(&self) -> String {
        format!("static menu ({} items)", self.snapshot.len())
    }
}

/// Provider reading a JSON menu export from disk
#[derive(Debug, Clone)]
pub struct FileMenuProvider {
    path: PathBuf,
}

impl FileMenuProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl MenuProvider for FileMenuProvider {
    fn snapshot(&self) -> Result<MenuSnapshot> {
        let file = File::open(&self.path).map_err(|e| EstimatorError::SnapshotUnavailable {
            source_name: self.path.display().to_string(),
            reason: e.to_string(),
        })?;

        let snapshot = MenuSnapshot::from_reader(BufReader::new(file))
            .with_context(|| format!("Failed to decode menu from {}", self.path.display()))?;

        debug!(
            "Loaded {} menu items from {}",
            snapshot.len(),
            self.path.display()
        );

        Ok(snapshot)
    }

    fn describe(&self) -> String {
        format!("menu file {}", self.path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn temp_menu_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "canteen-wait-{}-{}.json",
            std::process::id(),
            name
        ))
    }

    #[test]
    fn test_static_provider() {
        let provider = StaticMenuProvider::from_items(vec![
            MenuItem::new(3.0, 1),
            MenuItem::new(5.0, 0),
        ]);

        let snapshot = provider.snapshot().unwrap();
        assert_eq!(snapshot.len(), 2);
        assert_eq!(provider.describe(), "static menu (2 items)");
    }

    #[test]
    fn test_file_provider_reads_menu() {
        let path = temp_menu_path("reads");
        fs::write(&path, r#"[{"prepTime": 6, "canteen": "B"}]"#).unwrap();

        let provider = FileMenuProvider::new(&path);
        let snapshot = provider.snapshot().unwrap();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot.items[0].canteen_id(), "B");

        // Picks up edits on the next call
        fs::write(&path, r#"[{"prepTime": 6}, {"prepTime": 2}]"#).unwrap();
        assert_eq!(provider.snapshot().unwrap().len(), 2);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_file_provider_missing_file() {
        let provider = FileMenuProvider::new(temp_menu_path("missing"));
        let err = provider.snapshot().unwrap_err();

        assert!(matches!(
            err.downcast_ref::<EstimatorError>(),
            Some(EstimatorError::SnapshotUnavailable { .. })
        ));
    }

    #[test]
    fn test_file_provider_malformed_file() {
        let path = temp_menu_path("malformed");
        fs::write(&path, "{ not json").unwrap();

        let err = FileMenuProvider::new(&path).snapshot().unwrap_err();
        assert!(err.to_string().contains("Failed to decode menu"));
        assert!(matches!(
            err.root_cause().downcast_ref::<EstimatorError>(),
            Some(EstimatorError::InvalidSnapshot { .. })
        ));

        fs::remove_file(&path).unwrap();
    }
}
