//! Record persistence.
//!
//! Records are appended to a header-less CSV file, one per line, with
//! six positional columns: `age,gender,height,weight,bmi,category`.
//!
//! A store is in one of three states: absent (never written), empty
//! (cleared) or non-empty. Loading or clearing an absent store yields
//! [`Error::NotFound`]; clearing never creates the file.

use crate::{Error, Record, Result};
use fs2::FileExt;
use std::fs::{File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

/// Storage backend for saved records
pub trait RecordStore {
    /// Add one record at the end, creating the store if needed
    fn append(&mut self, record: &Record) -> Result<()>;

    /// All records in insertion order
    fn load_all(&self) -> Result<Vec<Record>>;

    /// Truncate an existing store to empty
    fn clear(&mut self) -> Result<()>;
}

/// CSV file store with advisory file locking
///
/// Appends and clears hold an exclusive lock, loads a shared one. Clear
/// still truncates in place, so a reader in another process can observe
/// the file mid-clear.
#[derive(Clone, Debug)]
pub struct CsvStore {
    path: PathBuf,
}

impl CsvStore {
    /// Create a store backed by the file at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Ensure the parent directory exists
    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        Ok(())
    }

    /// Map a missing file to `NotFound`, anything else to an I/O fault
    fn open_error(&self, e: io::Error) -> Error {
        if e.kind() == io::ErrorKind::NotFound {
            Error::NotFound(self.path.clone())
        } else {
            Error::Io(e)
        }
    }
}

impl RecordStore for CsvStore {
    fn append(&mut self, record: &Record) -> Result<()> {
        self.ensure_parent_dir()?;

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        file.lock_exclusive()?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(&file);
        writer.serialize(record)?;
        writer.flush()?;
        drop(writer);

        file.unlock()?;

        tracing::info!("Appended record to {:?}", self.path);
        Ok(())
    }

    fn load_all(&self) -> Result<Vec<Record>> {
        let file = File::open(&self.path).map_err(|e| self.open_error(e))?;
        file.lock_shared()?;

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader(&file);
        let records: std::result::Result<Vec<Record>, csv::Error> =
            reader.deserialize().collect();

        file.unlock()?;

        let records = records?;
        tracing::debug!("Read {} records from {:?}", records.len(), self.path);
        Ok(records)
    }

    fn clear(&mut self) -> Result<()> {
        let file = OpenOptions::new()
            .write(true)
            .open(&self.path)
            .map_err(|e| self.open_error(e))?;

        file.lock_exclusive()?;
        file.set_len(0)?;
        file.sync_all()?;
        file.unlock()?;

        tracing::info!("Cleared records in {:?}", self.path);
        Ok(())
    }
}

/// In-memory store, `None` until the first append
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    records: Option<Vec<Record>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// True once the store has been created by an append
    pub fn exists(&self) -> bool {
        self.records.is_some()
    }
}

impl RecordStore for MemoryStore {
    fn append(&mut self, record: &Record) -> Result<()> {
        self.records.get_or_insert_with(Vec::new).push(record.clone());
        Ok(())
    }

    fn load_all(&self) -> Result<Vec<Record>> {
        self.records
            .clone()
            .ok_or_else(|| Error::NotFound(PathBuf::from("<memory>")))
    }

    fn clear(&mut self) -> Result<()> {
        match self.records.as_mut() {
            Some(records) => {
                records.clear();
                Ok(())
            }
            None => Err(Error::NotFound(PathBuf::from("<memory>"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Category, Gender};

    fn create_test_record(age: u8) -> Record {
        Record {
            age,
            gender: Gender::Male,
            height: 175.0,
            weight: 70.0,
            bmi: 22.86,
            category: Category::Normal,
        }
    }

    #[test]
    fn test_append_writes_positional_line() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("bmi_data.csv");

        let mut store = CsvStore::new(&path);
        store.append(&create_test_record(30)).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "30,Male,175.0,70.0,22.86,Normal weight\n");
    }

    #[test]
    fn test_append_then_load_preserves_order() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut store = CsvStore::new(temp_dir.path().join("bmi_data.csv"));

        let records = vec![
            create_test_record(30),
            Record {
                age: 12,
                gender: Gender::Unspecified,
                height: 60.5,
                weight: 90.25,
                bmi: 17.33,
                category: Category::Underweight,
            },
            Record {
                age: 70,
                gender: Gender::Female,
                height: 160.0,
                weight: 80.0,
                bmi: 31.25,
                category: Category::Obese,
            },
        ];
        for record in &records {
            store.append(record).unwrap();
        }

        assert_eq!(store.load_all().unwrap(), records);
    }

    #[test]
    fn test_append_creates_parent_dirs() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("nested/dir/bmi_data.csv");

        let mut store = CsvStore::new(&path);
        store.append(&create_test_record(40)).unwrap();

        assert!(path.exists());
    }

    #[test]
    fn test_load_absent_store_not_found() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = CsvStore::new(temp_dir.path().join("missing.csv"));

        let err = store.load_all().unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_clear_absent_store_not_found_and_not_created() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("missing.csv");
        let mut store = CsvStore::new(&path);

        let err = store.clear().unwrap_err();
        assert!(err.is_not_found());
        assert!(!path.exists());
    }

    #[test]
    fn test_clear_then_load_is_empty() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("bmi_data.csv");
        let mut store = CsvStore::new(&path);

        store.append(&create_test_record(30)).unwrap();
        store.append(&create_test_record(31)).unwrap();
        store.clear().unwrap();

        assert!(path.exists());
        assert!(store.load_all().unwrap().is_empty());

        // Clearing an empty store is fine
        store.clear().unwrap();
        assert!(store.load_all().unwrap().is_empty());
    }

    #[test]
    fn test_append_after_clear() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut store = CsvStore::new(temp_dir.path().join("bmi_data.csv"));

        store.append(&create_test_record(30)).unwrap();
        store.clear().unwrap();
        store.append(&create_test_record(45)).unwrap();

        let records = store.load_all().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].age, 45);
    }

    #[test]
    fn test_load_reads_file_written_elsewhere() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("bmi_data.csv");
        std::fs::write(
            &path,
            "25,Prefer not to say,68.0,150.0,22.81,Normal weight\n50,Female,150.0,60.0,26.67,Overweight\n",
        )
        .unwrap();

        let records = CsvStore::new(&path).load_all().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].gender, Gender::Unspecified);
        assert_eq!(records[0].bmi, 22.81);
        assert_eq!(records[1].category, Category::Overweight);
    }

    #[test]
    fn test_load_malformed_row_is_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("bmi_data.csv");
        std::fs::write(&path, "not,a,valid,row\n").unwrap();

        let err = CsvStore::new(&path).load_all().unwrap_err();
        assert!(matches!(err, Error::Csv(_)));
    }

    #[test]
    fn test_io_fault_is_not_reported_as_missing() {
        let temp_dir = tempfile::tempdir().unwrap();
        // The store path is an existing directory
        let mut store = CsvStore::new(temp_dir.path());

        let err = store.append(&create_test_record(30)).unwrap_err();
        assert!(matches!(err, Error::Io(_)), "append gave {:?}", err);

        let err = store.load_all().unwrap_err();
        assert!(!err.is_not_found(), "load gave {:?}", err);

        let err = store.clear().unwrap_err();
        assert!(matches!(err, Error::Io(_)), "clear gave {:?}", err);
        assert!(temp_dir.path().is_dir());
    }

    #[test]
    fn test_memory_store_state_machine() {
        let mut store = MemoryStore::new();
        assert!(!store.exists());
        assert!(store.load_all().unwrap_err().is_not_found());
        assert!(store.clear().unwrap_err().is_not_found());
        assert!(!store.exists());

        store.append(&create_test_record(30)).unwrap();
        store.append(&create_test_record(31)).unwrap();
        let ages: Vec<u8> = store.load_all().unwrap().iter().map(|r| r.age).collect();
        assert_eq!(ages, vec![30, 31]);

        store.clear().unwrap();
        assert!(store.exists());
        assert!(store.load_all().unwrap().is_empty());
    }
}
