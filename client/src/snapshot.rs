/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

/// Decoded body of `/api/v1/storage`.
///
/// The wire format uses "omit if empty" encoding: a missing field and its
/// zero value are indistinguishable, so every field defaults.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug, Default)]
pub struct Snapshot {
    #[serde(default)]
    pub storage_layer: StorageLayer,
    #[serde(default)]
    pub input_chunks: InputChunks,
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug, Default)]
pub struct StorageLayer {
    #[serde(default)]
    pub chunks: StorageChunks,
}

/// Aggregate chunk counters of the storage layer.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug, Default)]
pub struct StorageChunks {
    #[serde(default)]
    pub total_chunks: u64,
    #[serde(default)]
    pub mem_chunks: u64,
    #[serde(default)]
    pub fs_chunks: u64,
    #[serde(default)]
    pub fs_chunks_up: u64,
    #[serde(default)]
    pub fs_chunks_down: u64,
}

/// Per-input buffering state, keyed by the fixed set of inputs.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug, Default)]
pub struct InputChunks {
    #[serde(default)]
    pub audit: InputState,
    #[serde(default)]
    pub containers: InputState,
    #[serde(default)]
    pub systemd: InputState,
}

impl InputChunks {
    pub fn get(&self, name: InputName) -> &InputState {
        match name {
            InputName::Audit => &self.audit,
            InputName::Containers => &self.containers,
            InputName::Systemd => &self.systemd,
        }
    }

    /// Whether the section was absent from the response (every entry
    /// entirely default). Checked field by field rather than against a
    /// derived `Default` value.
    pub fn is_empty(&self) -> bool {
        InputName::ALL.iter().all(|name| self.get(*name).is_empty())
    }
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug, Default)]
pub struct InputState {
    #[serde(default)]
    pub status: InputStatus,
    #[serde(default)]
    pub chunks: InputChunkStats,
}

impl InputState {
    pub fn is_empty(&self) -> bool {
        let InputStatus {
            overlimit,
            mem_size,
            mem_limit,
        } = &self.status;
        let InputChunkStats {
            total,
            up,
            down,
            busy,
            busy_size,
        } = &self.chunks;
        !overlimit
            && mem_size.is_empty()
            && mem_limit.is_empty()
            && *total == 0
            && *up == 0
            && *down == 0
            && *busy == 0
            && busy_size.is_empty()
    }
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug, Default)]
pub struct InputStatus {
    #[serde(default)]
    pub overlimit: bool,
    /// Used memory buffer as a human-readable size ("47900", "60MB").
    #[serde(default)]
    pub mem_size: String,
    /// Configured memory buffer limit as a human-readable size.
    #[serde(default)]
    pub mem_limit: String,
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug, Default)]
pub struct InputChunkStats {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub up: u64,
    #[serde(default)]
    pub down: u64,
    #[serde(default)]
    pub busy: u64,
    /// Size of the busy chunks as a human-readable size.
    #[serde(default)]
    pub busy_size: String,
}

/// The closed set of configured log inputs.
#[derive(PartialEq, PartialOrd, Eq, Ord, Hash, Clone, Copy, Debug)]
pub enum InputName {
    Audit,
    Containers,
    Systemd,
}

impl InputName {
    /// All inputs, in the stable emission order.
    pub const ALL: [Self; 3] = [Self::Audit, Self::Containers, Self::Systemd];

    pub fn as_str(&self) -> &'static str {
        match self {
            InputName::Audit => "audit",
            InputName::Containers => "containers",
            InputName::Systemd => "systemd",
        }
    }
}

impl Display for InputName {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
