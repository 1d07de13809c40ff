//! Write-rename file output for `chemistry.cfg`.
//!
//! Bytes go to `{path}.tmp`, are flushed with `sync_all()`, and the temp
//! file is then renamed over the destination, so a previously exported
//! file is never left half-written.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

fn tmp_path_for(path: &Path) -> PathBuf {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    PathBuf::from(tmp)
}

/// Atomically replaces the contents of `path` with `data`, creating parent
/// directories as needed.
pub fn atomic_write(path: &Path, data: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let tmp_path = tmp_path_for(path);
    let mut file = File::create(&tmp_path)?;
    file.write_all(data)?;
    file.sync_all()?;

    fs::rename(&tmp_path, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_dir(name: &str) -> PathBuf {
        let dir = PathBuf::from(format!("/tmp/chemgen_atomic_write_test_{}", name));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_atomic_write_creates_file() {
        let dir = test_dir("creates_file");
        let path = dir.join("chemistry.cfg");

        atomic_write(&path, b"A+B").unwrap();

        assert_eq!(fs::read(&path).unwrap(), b"A+B");
        assert!(!tmp_path_for(&path).exists(), "temp file left behind");

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_atomic_write_replaces_previous_export() {
        let dir = test_dir("replaces");
        let path = dir.join("chemistry.cfg");

        atomic_write(&path, b"A+B").unwrap();
        atomic_write(&path, b"X\nY").unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"X\nY");

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_atomic_write_empty_file() {
        let dir = test_dir("empty");
        let path = dir.join("chemistry.cfg");

        atomic_write(&path, b"").unwrap();
        assert_eq!(fs::metadata(&path).unwrap().len(), 0);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_atomic_write_creates_parent_dirs() {
        let dir = test_dir("parent_dirs");
        let path = dir.join("nested").join("deep").join("chemistry.cfg");

        atomic_write(&path, b"nested").unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"nested");

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_atomic_write_ignores_stale_tmp() {
        let dir = test_dir("stale_tmp");
        let path = dir.join("chemistry.cfg");
        fs::write(&path, b"original").unwrap();
        fs::write(tmp_path_for(&path), b"partial garbage").unwrap();

        atomic_write(&path, b"fresh").unwrap();

        assert_eq!(fs::read(&path).unwrap(), b"fresh");
        assert!(!tmp_path_for(&path).exists());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_tmp_path_appends_suffix() {
        assert_eq!(
            tmp_path_for(Path::new("out/chemistry.cfg")),
            PathBuf::from("out/chemistry.cfg.tmp")
        );
    }
}
