/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

//! Conversion of fluent-bit storage snapshots into a flat, labeled set of
//! gauge metrics.
//!
//! The [`Collector`] fetches one [`Snapshot`](fluentbit_client::Snapshot)
//! per cycle and maps it deterministically onto the twelve metric series
//! of [`desc::CATALOG`]. Any failure during a cycle (fetch, decode or a
//! malformed size string) fails the whole cycle; no partial metric set is
//! ever produced.

pub mod collector;
pub mod desc;
mod error;

pub use collector::{Collector, Metric};
pub use desc::MetricDesc;
pub use error::{Error, Result};
