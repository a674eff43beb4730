use dirs::home_dir;
use std::{
    env,
    fs::{self, File},
    io::{self, Write},
    path::{Path, PathBuf},
};

const HOME_ENV: &str = "INVENTORY_CORE_HOME";
const DEFAULT_DIR_NAME: &str = ".inventory_core";
const CONFIG_DIR: &str = "config";
const CONFIG_FILE: &str = "config.json";
const BACKUP_DIR: &str = "backups";
const TMP_SUFFIX: &str = "tmp";
pub const DEFAULT_DATA_FILE: &str = "category.json";

/// Resolves the on-disk locations used by the application.
pub struct PathResolver;

impl PathResolver {
    /// Application home, `$INVENTORY_CORE_HOME` or `~/.inventory_core`.
    pub fn base_dir() -> PathBuf {
        if let Some(custom) = env::var_os(HOME_ENV) {
            return PathBuf::from(custom);
        }
        home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(DEFAULT_DIR_NAME)
    }

    pub fn config_dir_in(base: &Path) -> PathBuf {
        base.join(CONFIG_DIR)
    }

    pub fn config_file_in(base: &Path) -> PathBuf {
        Self::config_dir_in(base).join(CONFIG_FILE)
    }

    /// Backups live next to the inventory file they protect.
    pub fn backup_dir_for(data_file: &Path) -> PathBuf {
        match data_file.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.join(BACKUP_DIR),
            _ => PathBuf::from(BACKUP_DIR),
        }
    }

    pub fn default_data_file() -> PathBuf {
        PathBuf::from(DEFAULT_DATA_FILE)
    }
}

pub fn ensure_dir(path: &Path) -> io::Result<()> {
    if path.as_os_str().is_empty() {
        return Ok(());
    }
    fs::create_dir_all(path)
}

/// Sibling used while writing `path`: `category.json` -> `category.json.tmp`.
pub fn tmp_path_for(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

/// Replaces `path` with `data` through a synced temporary file and a rename.
///
/// On failure `path` keeps its previous content and no temporary file is left.
pub fn write_file_atomic(path: &Path, data: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let tmp = tmp_path_for(path);
    let result = write_synced(&tmp, data).and_then(|()| fs::rename(&tmp, path));
    if result.is_err() && tmp.is_file() {
        let _ = fs::remove_file(&tmp);
    }
    result
}

fn write_synced(path: &Path, data: &str) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    file.sync_all()
}
