//! # Lookup Table File I/O
//!
//! Atomic, checksummed persistence for the two-plus-two transition table
//! (the only lookup table large enough to warrant shipping as a file
//! rather than being computed or embedded as source, per
//! [`super::two_plus_two`]). Writes go to a temporary file in the same
//! directory and are renamed into place only after the data and its
//! SHA-256 checksum are both flushed, so a reader never observes a
//! partially-written table.
//!
//! ## File Format
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │ Magic (8) │ Version (4) │ Entry count (8)     │
//! │ Created-at RFC 3339 timestamp (variable)      │
//! │ SHA-256 checksum (32)                         │
//! ├──────────────────────────────────────────────┤
//! │ Bincode-encoded Vec<i32> transition table     │
//! └──────────────────────────────────────────────┘
//! ```

use super::two_plus_two::TwoPlusTwoTable;
use crate::errors::PokerError;
use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

const MAGIC: &[u8; 8] = b"RUSTLUT2";
const FORMAT_VERSION: u32 = 1;

/// The only table this manager persists today. Kept as an enum (rather
/// than a bare filename constant) so additional table kinds can be added
/// without changing the manager's public surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableType {
    TwoPlusTwo,
}

impl TableType {
    fn file_name(self) -> &'static str {
        match self {
            TableType::TwoPlusTwo => "two_plus_two.lut",
        }
    }
}

/// Metadata about a persisted table, returned without loading its data.
#[derive(Debug, Clone)]
pub struct TableInfo {
    pub table_type: TableType,
    pub entry_count: usize,
    pub created_at: DateTime<Utc>,
    pub checksum: [u8; 32],
}

/// Manages reading and writing lookup table files under a base directory.
pub struct LutFileManager {
    base_dir: PathBuf,
}

impl LutFileManager {
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    pub fn default() -> Self {
        Self::new("data/luts")
    }

    fn path_for(&self, table_type: TableType) -> PathBuf {
        self.base_dir.join(table_type.file_name())
    }

    pub fn table_exists(&self, table_type: TableType) -> bool {
        self.path_for(table_type).is_file()
    }

    /// Atomically write a transition table: serialize, checksum, write to
    /// a sibling temp file, then rename into place.
    pub fn write_table(
        &self,
        table_type: TableType,
        table: &TwoPlusTwoTable,
    ) -> Result<(), PokerError> {
        fs::create_dir_all(&self.base_dir)
            .map_err(|e| PokerError::InvalidType { text: e.to_string() })?;

        let data = table.transitions_for_write();
        let body =
            bincode::serialize(&data).map_err(|e| PokerError::InvalidType { text: e.to_string() })?;

        let mut hasher = Sha256::new();
        hasher.update(&body);
        let checksum: [u8; 32] = hasher.finalize().into();

        let mut file_bytes = Vec::with_capacity(body.len() + 128);
        file_bytes.extend_from_slice(MAGIC);
        file_bytes.extend_from_slice(&FORMAT_VERSION.to_le_bytes());
        file_bytes.extend_from_slice(&(data.len() as u64).to_le_bytes());
        let timestamp = Utc::now().to_rfc3339();
        file_bytes.extend_from_slice(&(timestamp.len() as u32).to_le_bytes());
        file_bytes.extend_from_slice(timestamp.as_bytes());
        file_bytes.extend_from_slice(&checksum);
        file_bytes.extend_from_slice(&body);

        let final_path = self.path_for(table_type);
        let mut tmp = tempfile::NamedTempFile::new_in(&self.base_dir)
            .map_err(|e| PokerError::InvalidType { text: e.to_string() })?;
        tmp.write_all(&file_bytes)
            .map_err(|e| PokerError::InvalidType { text: e.to_string() })?;
        tmp.flush()
            .map_err(|e| PokerError::InvalidType { text: e.to_string() })?;
        tmp.persist(&final_path)
            .map_err(|e| PokerError::InvalidType { text: e.to_string() })?;
        Ok(())
    }

    /// Read and checksum-validate a table, returning it wrapped for
    /// [`super::singleton::Evaluator::load_two_plus_two`].
    pub fn read_table(&self, table_type: TableType) -> Result<Arc<TwoPlusTwoTable>, PokerError> {
        let path = self.path_for(table_type);
        let mut file =
            File::open(&path).map_err(|e| PokerError::InvalidType { text: e.to_string() })?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes)
            .map_err(|e| PokerError::InvalidType { text: e.to_string() })?;

        let (header_len, checksum, body) = parse_header(&bytes)?;
        let mut hasher = Sha256::new();
        hasher.update(body);
        let computed: [u8; 32] = hasher.finalize().into();
        if computed != checksum {
            return Err(PokerError::InvalidType {
                text: format!("checksum mismatch reading {}", path.display()),
            });
        }
        let _ = header_len;
        let transitions: Vec<i32> =
            bincode::deserialize(body).map_err(|e| PokerError::InvalidType { text: e.to_string() })?;
        Ok(Arc::new(TwoPlusTwoTable::new(transitions)))
    }

    pub fn get_table_info(&self, table_type: TableType) -> Result<TableInfo, PokerError> {
        let path = self.path_for(table_type);
        let mut file =
            File::open(&path).map_err(|e| PokerError::InvalidType { text: e.to_string() })?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes)
            .map_err(|e| PokerError::InvalidType { text: e.to_string() })?;
        let (_, checksum, body) = parse_header(&bytes)?;
        let entry_count = bytes.len().saturating_sub(body.len());
        let created_at = parse_timestamp(&bytes)?;
        Ok(TableInfo {
            table_type,
            entry_count,
            created_at,
            checksum,
        })
    }

    pub fn delete_table(&self, table_type: TableType) -> Result<(), PokerError> {
        let path = self.path_for(table_type);
        if path.is_file() {
            fs::remove_file(&path).map_err(|e| PokerError::InvalidType { text: e.to_string() })?;
        }
        Ok(())
    }
}

fn parse_timestamp(bytes: &[u8]) -> Result<DateTime<Utc>, PokerError> {
    let mut offset = 8 + 4 + 8;
    let len_bytes: [u8; 4] = bytes[offset..offset + 4]
        .try_into()
        .map_err(|_| PokerError::InvalidType { text: "truncated header".into() })?;
    let len = u32::from_le_bytes(len_bytes) as usize;
    offset += 4;
    let text = std::str::from_utf8(&bytes[offset..offset + len])
        .map_err(|_| PokerError::InvalidType { text: "non-utf8 timestamp".into() })?;
    DateTime::parse_from_rfc3339(text)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| PokerError::InvalidType { text: "invalid timestamp".into() })
}

fn parse_header(bytes: &[u8]) -> Result<(usize, [u8; 32], &[u8]), PokerError> {
    if bytes.len() < 8 + 4 + 8 || &bytes[0..8] != MAGIC {
        return Err(PokerError::InvalidType {
            text: "bad magic bytes or truncated file".into(),
        });
    }
    let mut offset = 8 + 4 + 8;
    let ts_len_bytes: [u8; 4] = bytes[offset..offset + 4]
        .try_into()
        .map_err(|_| PokerError::InvalidType { text: "truncated header".into() })?;
    let ts_len = u32::from_le_bytes(ts_len_bytes) as usize;
    offset += 4 + ts_len;
    let checksum: [u8; 32] = bytes[offset..offset + 32]
        .try_into()
        .map_err(|_| PokerError::InvalidType { text: "truncated checksum".into() })?;
    offset += 32;
    Ok((offset, checksum, &bytes[offset..]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_then_read_round_trips_and_validates_checksum() {
        let dir = tempfile::tempdir().unwrap();
        let manager = LutFileManager::new(dir.path());
        let table = TwoPlusTwoTable::new(vec![1, 2, 3, 4, 5]);
        manager.write_table(TableType::TwoPlusTwo, &table).unwrap();
        assert!(manager.table_exists(TableType::TwoPlusTwo));

        let loaded = manager.read_table(TableType::TwoPlusTwo).unwrap();
        assert_eq!(loaded.len(), 5);
    }

    #[test]
    fn tampered_file_fails_checksum_validation() {
        let dir = tempfile::tempdir().unwrap();
        let manager = LutFileManager::new(dir.path());
        let table = TwoPlusTwoTable::new(vec![1, 2, 3]);
        manager.write_table(TableType::TwoPlusTwo, &table).unwrap();

        let path = dir.path().join("two_plus_two.lut");
        let mut bytes = fs::read(&path).unwrap();
        let last = bytes.len() - 1;
        bytes[last] ^= 0xFF;
        fs::write(&path, bytes).unwrap();

        assert!(manager.read_table(TableType::TwoPlusTwo).is_err());
    }

    #[test]
    fn delete_table_removes_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let manager = LutFileManager::new(dir.path());
        let table = TwoPlusTwoTable::new(vec![1]);
        manager.write_table(TableType::TwoPlusTwo, &table).unwrap();
        manager.delete_table(TableType::TwoPlusTwo).unwrap();
        assert!(!manager.table_exists(TableType::TwoPlusTwo));
    }
}
