/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

//! Client for fluent-bit's internal storage status API.
//!
//! One GET against `/api/v1/storage`, decoded into a typed [`Snapshot`].
//! The [`StorageApi`] trait is the seam between the real HTTP client and
//! fixture-backed test doubles.

pub mod config;
mod error;
pub mod http;
pub mod snapshot;

pub use config::Config;
pub use error::{Error, Result};
pub use http::{FluentBitClient, StorageApi};
pub use snapshot::{
    InputChunkStats, InputChunks, InputName, InputState, InputStatus,
    Snapshot, StorageChunks, StorageLayer,
};
