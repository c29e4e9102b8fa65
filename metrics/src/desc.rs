/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

//! The fixed catalog of exposed metric series.
//!
//! Descriptors are process-lifetime metadata: created once, shared
//! read-only across all collection cycles.

/// Name, help text and label schema of one gauge series.
#[derive(PartialEq, Eq, Hash, Debug)]
pub struct MetricDesc {
    pub name: &'static str,
    pub help: &'static str,
    /// The variable label of the series, if any.
    pub label: Option<&'static str>,
}

const fn storage(name: &'static str, help: &'static str) -> MetricDesc {
    MetricDesc {
        name,
        help,
        label: None,
    }
}

const fn input(name: &'static str, help: &'static str) -> MetricDesc {
    MetricDesc {
        name,
        help,
        label: Some("name"),
    }
}

pub static STORAGE_CHUNKS: MetricDesc =
    storage("storage_chunks", "Amount of currently used chunks");
pub static STORAGE_CHUNKS_MEM: MetricDesc =
    storage("storage_chunks_mem", "Amount of chunks currently in memory");
pub static STORAGE_CHUNKS_FS: MetricDesc = storage(
    "storage_chunks_fs",
    "Amount of chunks currently in filesystem",
);
pub static STORAGE_CHUNKS_FS_UP: MetricDesc =
    storage("storage_chunks_fs_up", "Amount of chunks currently up");
pub static STORAGE_CHUNKS_FS_DOWN: MetricDesc =
    storage("storage_chunks_fs_down", "Amount of chunks currently down");

pub static INPUT_OVERLIMIT: MetricDesc = input(
    "storage_input_overlimit",
    "Memory buffer limit reached for input",
);
pub static INPUT_MEM_BYTES: MetricDesc = input(
    "storage_input_mem_bytes",
    "Currently used memory buffer for input in bytes",
);
pub static INPUT_LIMIT_BYTES: MetricDesc = input(
    "storage_input_limit_bytes",
    "Memory buffer limit for input in bytes",
);
pub static INPUT_CHUNKS: MetricDesc = input(
    "storage_input_chunks",
    "Amount of chunks currently used for input",
);
pub static INPUT_CHUNKS_FS_DOWN: MetricDesc = input(
    "storage_input_chunks_fs_down",
    "Amount of chunks for input currently down",
);
pub static INPUT_CHUNKS_BUSY: MetricDesc = input(
    "storage_input_chunks_busy",
    "Amount of chunks for input currently busy",
);
pub static INPUT_BUSY_BYTES: MetricDesc = input(
    "storage_input_busy_bytes",
    "Size of chunks for input currently busy in bytes",
);

/// All twelve series, in emission order.
pub static CATALOG: [&MetricDesc; 12] = [
    &STORAGE_CHUNKS,
    &STORAGE_CHUNKS_MEM,
    &STORAGE_CHUNKS_FS,
    &STORAGE_CHUNKS_FS_UP,
    &STORAGE_CHUNKS_FS_DOWN,
    &INPUT_OVERLIMIT,
    &INPUT_MEM_BYTES,
    &INPUT_LIMIT_BYTES,
    &INPUT_CHUNKS,
    &INPUT_CHUNKS_FS_DOWN,
    &INPUT_CHUNKS_BUSY,
    &INPUT_BUSY_BYTES,
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::{MetricDesc, CATALOG};

    #[test]
    fn catalog_names_are_unique() {
        let names: HashSet<_> = CATALOG.iter().map(|d| d.name).collect();
        assert_eq!(names.len(), CATALOG.len());
    }

    #[test]
    fn catalog_label_schema() {
        let (labeled, unlabeled): (Vec<&&MetricDesc>, Vec<&&MetricDesc>) =
            CATALOG.iter().partition(|d| d.label.is_some());
        assert_eq!(unlabeled.len(), 5);
        assert_eq!(labeled.len(), 7);
        assert!(labeled.iter().all(|d| d.label == Some("name")));
    }
}
