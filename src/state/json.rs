/// JSON file helpers shared by the config, vote and role stores
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{Result, VoteError};

/// Read and parse a JSON file. A missing file is `Ok(None)`, not an error.
pub fn read_optional<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(VoteError::io(path, e)),
    };

    serde_json::from_str(&contents)
        .map(Some)
        .map_err(|e| VoteError::json(path, e))
}

/// Read and parse a JSON file that must exist
pub fn read<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = std::fs::read_to_string(path).map_err(|e| VoteError::io(path, e))?;
    serde_json::from_str(&contents).map_err(|e| VoteError::json(path, e))
}

/// Replace the file with pretty-printed JSON (2-space indent, UTF-8 kept as-is)
pub fn write_pretty<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).map_err(|e| VoteError::json(path, e))?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| VoteError::io(parent, e))?;
        }
    }

    std::fs::write(path, json).map_err(|e| VoteError::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let value: Option<Vec<u32>> = read_optional(&dir.path().join("absent.json")).unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn test_write_keeps_non_ascii() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("roles.json");

        let mut map = BTreeMap::new();
        map.insert("Lão", "Lão tiều");
        write_pretty(&path, &map).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("Lão tiều"));
        assert!(raw.contains("\n  \""));

        let back: BTreeMap<String, String> = read(&path).unwrap();
        assert_eq!(back["Lão"], "Lão tiều");
    }
}
