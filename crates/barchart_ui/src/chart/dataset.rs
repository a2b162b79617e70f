//! Immutable bar data with identity.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

static NEXT_DATASET_ID: AtomicU64 = AtomicU64::new(1);

/// One labeled value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Bar {
    value: u64,
    label: String,
}

impl Bar {
    pub fn new(value: u64, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
        }
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

/// Process-unique identity of a [`Dataset`] instance.
///
/// Clones share it; building a new dataset, even from equal bars, yields a fresh one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DatasetId(u64);

/// An ordered, immutable sequence of bars.
///
/// Cheap to clone. Widgets compare datasets by [`DatasetId`] to detect that the
/// host replaced its data.
#[derive(Debug, Clone)]
pub struct Dataset {
    id: DatasetId,
    bars: Arc<[Bar]>,
}

impl Dataset {
    pub fn new(bars: impl IntoIterator<Item = Bar>) -> Self {
        Self {
            id: DatasetId(NEXT_DATASET_ID.fetch_add(1, Ordering::Relaxed)),
            bars: bars.into_iter().collect(),
        }
    }

    pub fn empty() -> Self {
        Self::new(std::iter::empty())
    }

    pub fn id(&self) -> DatasetId {
        self.id
    }

    /// Sum of all values; 0 for an empty dataset.
    pub fn total(&self) -> u64 {
        self.bars.iter().map(Bar::value).sum()
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Bar> {
        self.bars.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Bar> {
        self.bars.iter()
    }

    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }
}

impl Default for Dataset {
    fn default() -> Self {
        Self::empty()
    }
}

impl FromIterator<Bar> for Dataset {
    fn from_iter<I: IntoIterator<Item = Bar>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Bar;
    type IntoIter = std::slice::Iter<'a, Bar>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
