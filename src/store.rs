use tracing::{debug, info};

use crate::models::{MaterialRecord, NewMaterial};

/// Ordered, in-memory list of stored materials.
///
/// Ids come from a counter that starts at 1 and never goes back, so an id is
/// never reused after a removal. Without removals this matches `count + 1`.
#[derive(Debug)]
pub struct MaterialListStore {
    records: Vec<MaterialRecord>,
    next_id: u64,
}

impl Default for MaterialListStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MaterialListStore {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            next_id: 1,
        }
    }

    pub fn add(&mut self, material: NewMaterial) -> MaterialRecord {
        // Downloads only ever grow from zero through `record_download`.
        let material = NewMaterial {
            downloads: 0,
            ..material
        };
        let record = MaterialRecord::new(self.next_id, material);
        self.next_id += 1;
        self.records.push(record.clone());
        info!(id = record.id, title = %record.title, "Material added");
        record
    }

    pub fn remove(&mut self, id: u64) -> bool {
        match self.records.iter().position(|r| r.id == id) {
            Some(index) => {
                self.records.remove(index);
                info!(id, "Material removed");
                true
            }
            None => {
                debug!(id, "No material to remove");
                false
            }
        }
    }

    pub fn get(&self, id: u64) -> Option<&MaterialRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn records(&self) -> &[MaterialRecord] {
        &self.records
    }

    /// Counts one download and returns the new total for that record.
    pub fn record_download(&mut self, id: u64) -> Option<u64> {
        let record = self.records.iter_mut().find(|r| r.id == id)?;
        record.downloads += 1;
        debug!(id, downloads = record.downloads, "Download recorded");
        Some(record.downloads)
    }

    pub fn total_count(&self) -> usize {
        self.records.len()
    }

    pub fn total_downloads(&self) -> u64 {
        self.records.iter().map(|r| r.downloads).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
