/// Ordered grouping of records by extension label.
///
/// Groups appear in order of first occurrence and keep scan order inside.
/// A plain `HashMap` would lose both orders, so keys are indexed separately.
use crate::model::FileRecord;
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Default, Clone, Serialize)]
pub struct Grouping {
    groups: Vec<Group>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

/// All records sharing one label.
#[derive(Debug, Clone, Serialize)]
pub struct Group {
    pub label: String,
    pub files: Vec<FileRecord>,
}

impl Grouping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record to its label's group, creating the group if needed.
    pub fn push(&mut self, record: FileRecord) {
        match self.index.get(record.kind()) {
            Some(&i) => self.groups[i].files.push(record),
            None => {
                let label = record.kind().to_owned();
                self.index.insert(label.clone(), self.groups.len());
                self.groups.push(Group {
                    label,
                    files: vec![record],
                });
            }
        }
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Number of distinct labels.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of records across all groups.
    pub fn file_count(&self) -> usize {
        self.groups.iter().map(|g| g.files.len()).sum()
    }

    /// Records in grouped order: group by group, scan order within each.
    pub fn iter_files(&self) -> impl Iterator<Item = &FileRecord> {
        self.groups.iter().flat_map(|g| g.files.iter())
    }
}

impl FromIterator<FileRecord> for Grouping {
    fn from_iter<I: IntoIterator<Item = FileRecord>>(iter: I) -> Self {
        let mut grouping = Grouping::new();
        for record in iter {
            grouping.push(record);
        }
        grouping
    }
}
