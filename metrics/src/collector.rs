/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use log::debug;

use fluentbit_client::{InputName, InputState, Snapshot, StorageApi};

use super::desc::{self, MetricDesc};
use super::error::{Error, Result};

/// One gauge sample: a series descriptor, an optional input label and the
/// observed value.
#[derive(PartialEq, Debug)]
pub struct Metric {
    pub desc: &'static MetricDesc,
    pub label: Option<InputName>,
    pub value: f64,
}

impl Metric {
    fn gauge(desc: &'static MetricDesc, value: f64) -> Self {
        Self {
            desc,
            label: None,
            value,
        }
    }

    fn labeled(desc: &'static MetricDesc, input: InputName, value: f64) -> Self {
        Self {
            desc,
            label: Some(input),
            value,
        }
    }
}

/// Maps storage snapshots onto the metric catalog, one fetch per cycle.
pub struct Collector<T> {
    client: T,
}

impl<T: StorageApi> Collector<T> {
    pub fn new(client: T) -> Self {
        Self { client }
    }

    /// Run one collection cycle.
    ///
    /// The five storage-layer gauges are always emitted. The seven
    /// per-input series are emitted for every input, in a stable order,
    /// but only when the input section was present in the response at
    /// all. Every error is cycle-fatal: no partial metric set.
    pub async fn collect(&self) -> Result<Vec<Metric>> {
        let snapshot = self.client.fetch().await?;
        let metrics = convert(&snapshot)?;
        debug!("collected {} metrics", metrics.len());
        Ok(metrics)
    }
}

fn convert(snapshot: &Snapshot) -> Result<Vec<Metric>> {
    let chunks = &snapshot.storage_layer.chunks;
    let mut metrics = vec![
        Metric::gauge(&desc::STORAGE_CHUNKS, chunks.total_chunks as f64),
        Metric::gauge(&desc::STORAGE_CHUNKS_MEM, chunks.mem_chunks as f64),
        Metric::gauge(&desc::STORAGE_CHUNKS_FS, chunks.fs_chunks as f64),
        Metric::gauge(&desc::STORAGE_CHUNKS_FS_UP, chunks.fs_chunks_up as f64),
        Metric::gauge(
            &desc::STORAGE_CHUNKS_FS_DOWN,
            chunks.fs_chunks_down as f64,
        ),
    ];

    if snapshot.input_chunks.is_empty() {
        return Ok(metrics);
    }

    for input in InputName::ALL {
        let state = snapshot.input_chunks.get(input);
        metrics.extend(input_metrics(input, state)?);
    }
    Ok(metrics)
}

fn input_metrics(
    input: InputName,
    state: &InputState,
) -> Result<[Metric; 7]> {
    let mem_size = parse_size(input, &state.status.mem_size)?;
    let mem_limit = parse_size(input, &state.status.mem_limit)?;
    let busy_size = parse_size(input, &state.chunks.busy_size)?;

    Ok([
        Metric::labeled(
            &desc::INPUT_OVERLIMIT,
            input,
            if state.status.overlimit { 1.0 } else { 0.0 },
        ),
        Metric::labeled(&desc::INPUT_MEM_BYTES, input, mem_size as f64),
        Metric::labeled(&desc::INPUT_LIMIT_BYTES, input, mem_limit as f64),
        Metric::labeled(&desc::INPUT_CHUNKS, input, state.chunks.total as f64),
        Metric::labeled(
            &desc::INPUT_CHUNKS_FS_DOWN,
            input,
            state.chunks.down as f64,
        ),
        Metric::labeled(
            &desc::INPUT_CHUNKS_BUSY,
            input,
            state.chunks.busy as f64,
        ),
        Metric::labeled(&desc::INPUT_BUSY_BYTES, input, busy_size as f64),
    ])
}

/// Size fields use omit-if-empty encoding: an absent field reads as an
/// empty string and means zero bytes.
fn parse_size(input: InputName, value: &str) -> Result<u64> {
    if value.is_empty() {
        return Ok(0);
    }
    humanize::parse_bytes(value)
        .map_err(|source| Error::InvalidSize { input, source })
}
