use std::collections::HashMap;

/// Header labels compare equal after trimming and upper-casing.
pub fn normalize_label(label: &str) -> String {
    label.trim().to_uppercase()
}

/// Maps normalized header labels to column positions.
#[derive(Debug, Clone)]
pub struct ColumnMap {
    positions: HashMap<String, usize>,
}

impl ColumnMap {
    /// The first occurrence of a repeated label wins.
    pub fn from_headers<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut positions = HashMap::new();
        for (index, header) in headers.into_iter().enumerate() {
            positions
                .entry(normalize_label(header.as_ref()))
                .or_insert(index);
        }
        Self { positions }
    }

    pub fn position(&self, label: &str) -> Option<usize> {
        self.positions.get(&normalize_label(label)).copied()
    }

    /// Positions of `labels` in order, or the labels that are missing.
    pub fn require(&self, labels: &[&str]) -> Result<Vec<usize>, Vec<String>> {
        let mut found = Vec::with_capacity(labels.len());
        let mut missing = Vec::new();
        for label in labels {
            match self.position(label) {
                Some(index) => found.push(index),
                None => missing.push(label.to_string()),
            }
        }
        if missing.is_empty() { Ok(found) } else { Err(missing) }
    }
}
