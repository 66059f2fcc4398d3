//! Reading and writing save files on disk.
//!
//! This is the fallible collaborator layer around the pure conversion
//! pipeline: read errors and write errors surface here, and a failed write
//! never leaves a partial output file behind.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use tracing::debug;

use crate::error::{Error, Result};
use crate::format::SaveFormat;

/// Read an entire save file into memory. Saves are at most a few hundred
/// kilobytes, so full buffering is fine.
pub fn read_save<P: AsRef<Path>>(path: P) -> Result<Vec<u8>> {
    let path = path.as_ref();
    fs::read(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Write a save file, going through a temporary sibling that is renamed into
/// place so an aborted write cannot leave a truncated output file.
pub fn write_save<P: AsRef<Path>>(path: P, data: &[u8]) -> Result<()> {
    let path = path.as_ref();
    let mut tmp_name = path.as_os_str().to_owned();
    tmp_name.push(".part");
    let tmp = PathBuf::from(tmp_name);

    let written = fs::write(&tmp, data).and_then(|_| fs::rename(&tmp, path));
    if let Err(source) = written {
        debug!("cleaning up partial output {}", tmp.display());
        let _ = fs::remove_file(&tmp);
        return Err(Error::Write {
            path: path.to_path_buf(),
            source,
        });
    }
    Ok(())
}

/// Detect the save format of a file from its extension.
pub fn detect_format<P: AsRef<Path>>(path: P) -> Option<SaveFormat> {
    let ext = path.as_ref().extension()?.to_str()?;
    SaveFormat::from_extension(ext)
}

/// Like [`detect_format`], but an unrecognized extension is an error.
pub fn require_format<P: AsRef<Path>>(path: P) -> Result<SaveFormat> {
    let path = path.as_ref();
    detect_format(path).ok_or_else(|| {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();
        Error::UnknownExtension(ext.to_string())
    })
}

/// The input file's extension in lowercase, including the leading dot, or an
/// empty string when there is none.
pub fn file_extension<P: AsRef<Path>>(path: P) -> String {
    path.as_ref()
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{}", e.to_ascii_lowercase()))
        .unwrap_or_default()
}

/// Build an output file name from the input's stem, e.g.
/// `Converted_20251014-153245_MySave.sra`.
pub fn output_filename(input: &Path, extension: &str, prefix: &str, timestamped: bool) -> String {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("save");
    if timestamped {
        let stamp = Local::now().format("%Y%m%d-%H%M%S");
        format!("{prefix}{stamp}_{stem}{extension}")
    } else {
        format!("{prefix}{stem}{extension}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_write_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("save.sra");
        let data: Vec<u8> = (0u8..255).collect();

        write_save(&path, &data).unwrap();
        assert_eq!(read_save(&path).unwrap(), data);
    }

    #[test]
    fn test_write_leaves_no_temporary_behind() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("save.fla");
        write_save(&path, &[1, 2, 3]).unwrap();

        let entries: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec![std::ffi::OsString::from("save.fla")]);
    }

    #[test]
    fn test_read_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_save(dir.path().join("missing.eep")).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_detect_format_from_path() {
        assert_eq!(detect_format("saves/Game.SRA"), Some(SaveFormat::Sram));
        assert_eq!(detect_format("game.srm"), Some(SaveFormat::RetroArchSrm));
        assert_eq!(detect_format("game.sav"), None);
        assert_eq!(detect_format("game"), None);
    }

    #[test]
    fn test_require_format_rejects_unknown_extension() {
        let err = require_format("game.sav").unwrap_err();
        assert!(matches!(err, Error::UnknownExtension(ext) if ext == "sav"));
    }

    #[test]
    fn test_file_extension_is_lowercased_with_dot() {
        assert_eq!(file_extension("Game.SRA"), ".sra");
        assert_eq!(file_extension("game"), "");
    }

    #[test]
    fn test_output_filename_shapes() {
        let input = Path::new("saves/MySave.sra");
        assert_eq!(
            output_filename(input, ".srm", "Converted_", false),
            "Converted_MySave.srm"
        );

        let name = output_filename(input, ".srm", "Converted_", true);
        assert!(name.starts_with("Converted_"));
        assert!(name.ends_with("_MySave.srm"));
        // Converted_ + YYYYmmdd-HHMMSS + _MySave.srm
        assert_eq!(name.len(), "Converted_".len() + 15 + "_MySave.srm".len());
    }
}
