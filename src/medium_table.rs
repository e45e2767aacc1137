#![warn(missing_docs)]
//! Lookup table of optical media.
//!
//! A [`MediumTable`] is created once at program start, either from a CSV dataset or from a small
//! built-in set of common media, and is immutable afterwards. It provides the selectable values for
//! the refractive indices of both sides of the interface.
use crate::{
    error::{SnellError, SnellResult},
    medium::Medium,
};
use approx::abs_diff_eq;
use csv::{ReaderBuilder, Trim};
use log::info;
use serde::Deserialize;
use std::{fs::File, io::Read, path::Path};

/// Media available if no dataset is given.
const BUILTIN_MEDIA: [(&str, f64); 11] = [
    ("Vacuum", 1.0),
    ("Air", 1.000_293),
    ("Ice", 1.31),
    ("Water", 1.33),
    ("Ethanol", 1.36),
    ("Acrylic", 1.49),
    ("Glass", 1.5),
    ("Crown glass", 1.52),
    ("Flint glass", 1.62),
    ("Sapphire", 1.77),
    ("Diamond", 2.42),
];

/// Maximum deviation for matching a given refractive index to a table entry.
const INDEX_MATCH_TOLERANCE: f64 = 1e-9;

#[derive(Deserialize)]
struct MediumRecord {
    #[serde(rename = "Medium")]
    name: String,
    #[serde(rename = "Index")]
    index: f64,
}

/// Immutable, ordered table of [`Medium`]s with unique names.
#[derive(Clone, Debug, PartialEq)]
pub struct MediumTable {
    media: Vec<Medium>,
}
impl MediumTable {
    /// Create a new [`MediumTable`] from a list of media.
    ///
    /// # Errors
    ///
    /// This function returns an [`SnellError::Dataset`] if the list is empty or contains
    /// duplicate names.
    pub fn new(media: Vec<Medium>) -> SnellResult<Self> {
        if media.is_empty() {
            return Err(SnellError::Dataset("table of media must not be empty".into()));
        }
        for (i, medium) in media.iter().enumerate() {
            if media[..i].iter().any(|m| m.name() == medium.name()) {
                return Err(SnellError::Dataset(format!(
                    "duplicate medium name: {}",
                    medium.name()
                )));
            }
        }
        Ok(Self { media })
    }
    /// Returns the table of built-in media (vacuum, air, water, glasses, ...).
    #[must_use]
    pub fn builtin() -> Self {
        let media = BUILTIN_MEDIA
            .iter()
            .filter_map(|(name, index)| Medium::new(name, *index).ok())
            .collect();
        Self { media }
    }
    /// Load a table either from the given CSV file or, if no path is given, use the built-in table.
    ///
    /// # Errors
    ///
    /// This function returns an error if the CSV file could not be read or parsed (see
    /// [`MediumTable::from_csv`]).
    pub fn load(dataset: Option<&Path>) -> SnellResult<Self> {
        dataset.map_or_else(
            || {
                info!("No dataset given. Using built-in table of media");
                Ok(Self::builtin())
            },
            Self::from_csv,
        )
    }
    /// Create a new [`MediumTable`] from a CSV (comma-separated values) file.
    ///
    /// The file must contain a header row and the two columns `Medium` (name) and `Index`
    /// (refractive index). Additional columns are ignored. Whitespace around the fields is
    /// removed.
    ///
    /// # Errors
    ///
    /// This function will return an [`SnellError::Dataset`] if
    ///   - the file is not found or could not be read.
    ///   - a record could not be parsed (e.g. missing column, index not a number).
    ///   - a refractive index is not positive or not finite.
    ///   - the file contains no records or duplicate names.
    pub fn from_csv(path: &Path) -> SnellResult<Self> {
        let file = File::open(path).map_err(|e| {
            SnellError::Dataset(format!("cannot open file {}: {e}", path.display()))
        })?;
        let table = Self::from_reader(file)?;
        info!("Loaded {} media from {}", table.len(), path.display());
        Ok(table)
    }
    /// Create a new [`MediumTable`] from CSV data provided by any reader.
    ///
    /// See [`MediumTable::from_csv`] for the expected format.
    ///
    /// # Errors
    ///
    /// This function returns an [`SnellError::Dataset`] if the data could not be parsed or do not
    /// form a valid table.
    pub fn from_reader<R: Read>(reader: R) -> SnellResult<Self> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(Trim::All)
            .from_reader(reader);
        let mut media = Vec::new();
        for record in reader.deserialize() {
            let record: MediumRecord = record.map_err(|e| SnellError::Dataset(e.to_string()))?;
            let medium = Medium::new(&record.name, record.index)
                .map_err(|e| SnellError::Dataset(e.to_string()))?;
            media.push(medium);
        }
        if media.is_empty() {
            return Err(SnellError::Dataset("no csv data was found".into()));
        }
        Self::new(media)
    }
    /// Returns the [`Medium`] with the given name (exact match).
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Medium> {
        self.media.iter().find(|m| m.name() == name)
    }
    /// Returns the first [`Medium`] of this table having the given refractive index.
    #[must_use]
    pub fn find_by_index(&self, refractive_index: f64) -> Option<&Medium> {
        self.media.iter().find(|m| {
            abs_diff_eq!(
                m.refractive_index(),
                refractive_index,
                epsilon = INDEX_MATCH_TOLERANCE
            )
        })
    }
    /// Returns an iterator over all media of this table.
    pub fn iter(&self) -> std::slice::Iter<'_, Medium> {
        self.media.iter()
    }
    /// Returns the number of media in this table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.media.len()
    }
    /// Returns `true` if this table contains no media.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.media.is_empty()
    }
    /// Returns the names of all media.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.media.iter().map(Medium::name).collect()
    }
    /// Returns the refractive indices of all media.
    #[must_use]
    pub fn indices(&self) -> Vec<f64> {
        self.media.iter().map(Medium::refractive_index).collect()
    }
}
impl<'a> IntoIterator for &'a MediumTable {
    type Item = &'a Medium;
    type IntoIter = std::slice::Iter<'a, Medium>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
#[cfg(test)]
mod test {
    use super::*;
    use crate::utils::test_helper::test_helper::check_logs;
    use assert_matches::assert_matches;
    use log::Level;
    use std::path::PathBuf;
    #[test]
    fn new() {
        let table = MediumTable::new(vec![
            Medium::new("Air", 1.0).unwrap(),
            Medium::new("Water", 1.33).unwrap(),
        ])
        .unwrap();
        assert_eq!(table.len(), 2);
        assert!(!table.is_empty());
        assert_eq!(table.names(), vec!["Air", "Water"]);
    }
    #[test]
    fn new_wrong() {
        assert_matches!(MediumTable::new(vec![]), Err(SnellError::Dataset(_)));
        assert_eq!(
            MediumTable::new(vec![
                Medium::new("Water", 1.33).unwrap(),
                Medium::new("Water", 1.34).unwrap(),
            ]),
            Err(SnellError::Dataset("duplicate medium name: Water".into()))
        );
    }
    #[test]
    fn builtin() {
        let table = MediumTable::builtin();
        assert_eq!(table.len(), BUILTIN_MEDIA.len());
        assert_eq!(table.get("Vacuum").unwrap().refractive_index(), 1.0);
        assert_eq!(table.get("Water").unwrap().refractive_index(), 1.33);
        assert_eq!(table.get("Glass").unwrap().refractive_index(), 1.5);
        assert!(table.get("water").is_none());
    }
    #[test]
    fn load_builtin() {
        testing_logger::setup();
        let table = MediumTable::load(None).unwrap();
        assert_eq!(table, MediumTable::builtin());
        check_logs(
            Level::Info,
            vec!["No dataset given. Using built-in table of media"],
        );
    }
    #[test]
    fn from_csv_ok() {
        testing_logger::setup();
        let path = PathBuf::from("files_for_testing/media/refractive_indices.csv");
        let table = MediumTable::from_csv(&path).unwrap();
        assert_eq!(table.len(), 5);
        assert_eq!(
            table.names(),
            vec!["Air", "Water", "Glass", "Diamond", "Cubic zirconia"]
        );
        assert_eq!(table.indices(), vec![1.0, 1.33, 1.5, 2.42, 2.15]);
        check_logs(
            Level::Info,
            vec!["Loaded 5 media from files_for_testing/media/refractive_indices.csv"],
        );
    }
    #[test]
    fn from_csv_err() {
        assert_matches!(
            MediumTable::from_csv(Path::new("wrong_path.csv")),
            Err(SnellError::Dataset(_))
        );
        for file in [
            "empty.csv",
            "header_only.csv",
            "not_a_number.csv",
            "negative_index.csv",
            "missing_column.csv",
            "duplicate_name.csv",
        ] {
            let mut path = PathBuf::from("files_for_testing/media");
            path.push(file);
            assert_matches!(
                MediumTable::from_csv(&path),
                Err(SnellError::Dataset(_)),
                "{file} should not be loadable"
            );
        }
    }
    #[test]
    fn from_reader() {
        let data = "Medium , Index\n Vacuum , 1\nOil,1.47\n";
        let table = MediumTable::from_reader(data.as_bytes()).unwrap();
        assert_eq!(table.names(), vec!["Vacuum", "Oil"]);
        assert_eq!(table.indices(), vec![1.0, 1.47]);
        let data = "Index,Medium,Comment\n1.33,Water,at 20 degC\n";
        let table = MediumTable::from_reader(data.as_bytes()).unwrap();
        assert_eq!(table.get("Water").unwrap().refractive_index(), 1.33);
    }
    #[test]
    fn find_by_index() {
        let table = MediumTable::builtin();
        assert_eq!(table.find_by_index(1.33).unwrap().name(), "Water");
        assert_eq!(table.find_by_index(1.0).unwrap().name(), "Vacuum");
        assert_eq!(table.find_by_index(1.5 + 1e-12).unwrap().name(), "Glass");
        assert!(table.find_by_index(1.4).is_none());
    }
    #[test]
    fn iter() {
        let table = MediumTable::builtin();
        assert_eq!(table.iter().count(), table.len());
        let names: Vec<&str> = (&table).into_iter().map(Medium::name).collect();
        assert_eq!(names, table.names());
    }
}
