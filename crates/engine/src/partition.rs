use std::collections::BTreeMap;

use crate::model::{DuplicateGroup, Partition};

/// Split row ids into unique and duplicate sets by composite-key multiplicity.
///
/// A row is a duplicate when its key occurs at least twice (keep-all — every
/// member of the group lands in the duplicate set). The split is total and
/// disjoint: the two sides always sum to the input length.
pub fn partition(keys: &[String]) -> Partition {
    let mut groups: BTreeMap<&str, Vec<usize>> = BTreeMap::new();
    for (row, key) in keys.iter().enumerate() {
        groups.entry(key.as_str()).or_default().push(row);
    }

    let mut unique = Vec::new();
    let mut duplicate = Vec::new();
    let mut duplicate_groups = Vec::new();

    for (key, rows) in groups {
        if rows.len() >= 2 {
            duplicate.extend(rows.iter().copied());
            duplicate_groups.push(DuplicateGroup {
                key: key.to_string(),
                rows,
            });
        } else {
            unique.extend(rows);
        }
    }

    unique.sort_unstable();
    duplicate.sort_unstable();

    Partition {
        unique,
        duplicate,
        groups: duplicate_groups,
    }
}
