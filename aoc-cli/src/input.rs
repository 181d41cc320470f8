//! Local puzzle input store

use crate::error::InputError;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Where puzzle inputs are read from
///
/// Directory structure: `{dir}/{year}_day{day:02}.txt`. An explicit file
/// replaces the lookup for every year/day.
#[derive(Debug, Clone)]
pub enum InputStore {
    Directory(PathBuf),
    File(PathBuf),
}

impl InputStore {
    /// Get the input path for a specific year/day
    pub fn input_path(&self, year: u16, day: u8) -> PathBuf {
        match self {
            InputStore::Directory(dir) => dir.join(format!("{}_day{:02}.txt", year, day)),
            InputStore::File(path) => path.clone(),
        }
    }

    /// Read the input for a year/day
    pub fn read(&self, year: u16, day: u8) -> Result<String, InputError> {
        let path = self.input_path(year, day);
        fs::read_to_string(&path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => InputError::NotFound(path),
            _ => InputError::Io { path, source },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_input_path_format() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::Directory(temp.path().to_path_buf());

        assert_eq!(
            store.input_path(2020, 1),
            temp.path().join("2020_day01.txt")
        );
        assert_eq!(
            store.input_path(2020, 25),
            temp.path().join("2020_day25.txt")
        );
    }

    #[test]
    fn test_read_from_directory() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::Directory(temp.path().to_path_buf());

        assert!(matches!(
            store.read(2020, 3),
            Err(InputError::NotFound(path)) if path.ends_with("2020_day03.txt")
        ));

        let input = "..#\n#..\n";
        fs::write(temp.path().join("2020_day03.txt"), input).unwrap();
        assert_eq!(store.read(2020, 3).unwrap(), input);
    }

    #[test]
    fn test_explicit_file_ignores_year_day() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("custom.txt");
        fs::write(&path, "1721\n979\n").unwrap();

        let store = InputStore::File(path.clone());
        assert_eq!(store.input_path(2020, 1), path);
        assert_eq!(store.read(2015, 7).unwrap(), "1721\n979\n");
    }

    #[test]
    fn test_directory_is_not_an_input() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("2020_day01.txt")).unwrap();
        let store = InputStore::Directory(temp.path().to_path_buf());

        assert!(matches!(store.read(2020, 1), Err(InputError::Io { .. })));
    }
}
