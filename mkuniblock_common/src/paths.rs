use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

pub const UNICODE_DATA_FILE: &str = "UnicodeData.txt";
pub const OS2_RANGES_FILE: &str = "os2_ur.txt";

/// Locations of the two reference datasets the table is generated from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputPaths {
    pub unicode_data: PathBuf,
    pub os2_ranges: PathBuf,
}
impl InputPaths {
    /// Both inputs inside the given directory, under their well-known names.
    pub fn in_dir(dir: &Path) -> Self {
        InputPaths {
            unicode_data: dir.join(UNICODE_DATA_FILE),
            os2_ranges: dir.join(OS2_RANGES_FILE),
        }
    }
}
impl Default for InputPaths {
    fn default() -> Self {
        InputPaths {
            unicode_data: PathBuf::from(UNICODE_DATA_FILE),
            os2_ranges: PathBuf::from(OS2_RANGES_FILE),
        }
    }
}

pub fn path_to_string(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Reads an input file completely, naming the file in the error if it can't be read.
pub fn read_input(path: &Path) -> Result<String> {
    debug!("Reading {}...", path_to_string(path));
    std::fs::read_to_string(path)
        .with_context(|| format!("could not read input file '{}'", path_to_string(path)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_use_working_directory_names() {
        let paths = InputPaths::default();
        assert_eq!(paths.unicode_data, Path::new("UnicodeData.txt"));
        assert_eq!(paths.os2_ranges, Path::new("os2_ur.txt"));
        assert_eq!(InputPaths::in_dir(Path::new("data")).os2_ranges, Path::new("data/os2_ur.txt"));
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = read_input(Path::new("does/not/exist/UnicodeData.txt")).unwrap_err();
        assert!(err.to_string().contains("does/not/exist/UnicodeData.txt"), "{err}");
    }
}
