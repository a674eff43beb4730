use chrono::{NaiveDateTime, Utc};
use std::{
    fs, io,
    path::{Path, PathBuf},
};
use tracing::{debug, error, info, warn};

use crate::{
    core::{
        errors::{InventoryError, Result},
        utils::{ensure_dir, write_file_atomic, PathResolver},
        validation::validate_document,
    },
    domain::InventoryDocument,
};

use super::DocumentStorage;

const BACKUP_EXTENSION: &str = "json";
const BACKUP_TIMESTAMP_FORMAT: &str = "%Y%m%dT%H%M%S%.6f";
pub const DEFAULT_RETENTION: usize = 5;

/// JSON file storage for a single inventory document.
///
/// Saves go through a temporary sibling file that is renamed over the target,
/// and the previous file is copied into `backups/` first when retention is
/// non-zero.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    path: PathBuf,
    backups_dir: PathBuf,
    retention: usize,
}

impl JsonStorage {
    pub fn new(path: impl Into<PathBuf>, retention: Option<usize>) -> Self {
        let path = path.into();
        let backups_dir = PathResolver::backup_dir_for(&path);
        Self {
            path,
            backups_dir,
            retention: retention.unwrap_or(DEFAULT_RETENTION),
        }
    }

    /// Storage that never writes backups.
    pub fn without_backups(path: impl Into<PathBuf>) -> Self {
        Self::new(path, Some(0))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn backups_dir(&self) -> &Path {
        &self.backups_dir
    }

    /// Backup file names for this document, newest first.
    ///
    /// Only `<stem>_<timestamp>.json` names carrying exactly this document's
    /// stem are listed; backups of other documents in the same directory are
    /// ignored.
    pub fn list_backups(&self) -> Result<Vec<String>> {
        if !self.backups_dir.exists() {
            return Ok(Vec::new());
        }
        let stem = self.stem();
        let mut entries = Vec::new();
        for entry in fs::read_dir(&self.backups_dir)? {
            let entry = entry?;
            let Some(name) = entry.file_name().to_str().map(str::to_string) else {
                continue;
            };
            let Some(timestamp) = parse_backup_name(&name)
                .filter(|(owner, _)| *owner == stem)
                .map(|(_, timestamp)| timestamp)
            else {
                continue;
            };
            entries.push((timestamp, name));
        }
        entries.sort_by(|a, b| b.cmp(a));
        Ok(entries.into_iter().map(|(_, name)| name).collect())
    }

    pub fn backup_path(&self, backup_name: &str) -> PathBuf {
        self.backups_dir.join(backup_name)
    }

    fn stem(&self) -> String {
        self.path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("inventory")
            .to_string()
    }

    fn backup_existing_file(&self) -> Result<()> {
        if self.retention == 0 || !self.path.exists() {
            return Ok(());
        }
        ensure_dir(&self.backups_dir)?;
        let timestamp = Utc::now().format(BACKUP_TIMESTAMP_FORMAT);
        let backup_name = format!("{}_{}.{}", self.stem(), timestamp, BACKUP_EXTENSION);
        let backup_path = self.backups_dir.join(&backup_name);
        fs::copy(&self.path, &backup_path).map_err(|err| {
            InventoryError::Persistence(format!(
                "failed to back up `{}` to `{}`: {err}",
                self.path.display(),
                backup_path.display()
            ))
        })?;
        debug!(backup = %backup_path.display(), "inventory backup written");
        self.prune_backups()
    }

    fn prune_backups(&self) -> Result<()> {
        let backups = self.list_backups()?;
        for entry in backups.iter().skip(self.retention) {
            let path = self.backup_path(entry);
            if let Err(err) = fs::remove_file(&path) {
                warn!(backup = %path.display(), error = %err, "failed to prune inventory backup");
            }
        }
        Ok(())
    }
}

impl DocumentStorage for JsonStorage {
    fn load(&self) -> Result<InventoryDocument> {
        load_document_from_path(&self.path)
    }

    fn save(&self, document: &InventoryDocument) -> Result<()> {
        self.backup_existing_file()?;
        save_document_to_path(document, &self.path)
    }

    fn location(&self) -> &Path {
        &self.path
    }
}

/// Reads, parses and validates the inventory stored at `path`.
pub fn load_document_from_path(path: &Path) -> Result<InventoryDocument> {
    let data = fs::read_to_string(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => InventoryError::DocumentNotFound(path.display().to_string()),
        _ => InventoryError::Persistence(format!("failed to read `{}`: {err}", path.display())),
    })?;
    let document: InventoryDocument = serde_json::from_str(&data).map_err(|err| {
        InventoryError::MalformedData(format!("`{}`: {err}", path.display()))
    })?;
    validate_document(&document)?;
    info!(
        path = %path.display(),
        categories = document.catalog().len(),
        items = document.catalog().item_count(),
        transactions = document.transactions().len(),
        "inventory loaded"
    );
    Ok(document)
}

/// Writes `document` to `path` through a temporary file and an atomic rename.
pub fn save_document_to_path(document: &InventoryDocument, path: &Path) -> Result<()> {
    let result = write_document(document, path);
    match &result {
        Ok(()) => info!(path = %path.display(), "inventory saved"),
        Err(err) => error!(path = %path.display(), error = %err, "inventory save failed"),
    }
    result
}

fn write_document(document: &InventoryDocument, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(document)
        .map_err(|err| InventoryError::Persistence(format!("failed to serialize: {err}")))?;
    write_file_atomic(path, &json).map_err(|err| {
        InventoryError::Persistence(format!("failed to write `{}`: {err}", path.display()))
    })
}

/// Splits `<stem>_<timestamp>.json` into its stem and parsed timestamp.
fn parse_backup_name(name: &str) -> Option<(&str, NaiveDateTime)> {
    let trimmed = name.strip_suffix(&format!(".{}", BACKUP_EXTENSION))?;
    let (stem, timestamp) = trimmed.rsplit_once('_')?;
    let parsed = NaiveDateTime::parse_from_str(timestamp, BACKUP_TIMESTAMP_FORMAT).ok()?;
    Some((stem, parsed))
}
