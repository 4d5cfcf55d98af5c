use std::collections::{HashMap, HashSet};

use crate::catalog::types::{CatalogEntry, OrbitalStateRecord, Selection};

/// Entries in first-seen order, each with its surviving records.
#[derive(Debug, Default)]
pub struct Catalog {
    selection: Selection,
    entries: Vec<CatalogEntry>,
    records: Vec<Vec<OrbitalStateRecord>>,
    index: HashMap<String, usize>,
    epochs: HashSet<(usize, Option<String>)>,
}

impl Catalog {
    pub fn new(selection: Selection) -> Self {
        Self {
            selection,
            ..Self::default()
        }
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Adds one normalized row. The entry is only kept the first time its
    /// catalog number is seen. Records without an epoch are dropped.
    pub fn insert(&mut self, entry: CatalogEntry, record: OrbitalStateRecord) {
        let slot = match self.index.get(&entry.catalog_number) {
            Some(&slot) => slot,
            None => {
                let slot = self.entries.len();
                self.index.insert(entry.catalog_number.clone(), slot);
                self.entries.push(entry);
                self.records.push(Vec::new());
                slot
            }
        };

        if record.epoch.is_none() {
            return;
        }

        let group = &mut self.records[slot];
        match self.selection {
            Selection::Latest => match group.first_mut() {
                // Raw text keeps sub-second order. Ties keep the earlier record.
                Some(current) if record.raw_epoch > current.raw_epoch => *current = record,
                Some(_) => {}
                None => group.push(record),
            },
            Selection::AllEpochs => {
                if self.epochs.insert((slot, record.epoch.clone())) {
                    group.push(record);
                }
            }
        }
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Surviving records, grouped by entry in first-seen order.
    pub fn records(&self) -> impl Iterator<Item = &OrbitalStateRecord> {
        self.records.iter().flatten()
    }

    pub fn record_count(&self) -> usize {
        self.records.iter().map(Vec::len).sum()
    }
}
