/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

//! Conversion of a collected metric sequence into the Prometheus text
//! exposition format. Each scrape builds a fresh registry, so a cycle
//! that emitted no per-input series exposes none.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use prometheus::{Encoder, Gauge, GaugeVec, Opts, Registry, TextEncoder};

use storage_metrics::Metric;

pub fn exposition(metrics: &[Metric]) -> Result<String, prometheus::Error> {
    let registry = Registry::new();
    let mut families: HashMap<&'static str, GaugeVec> = HashMap::new();

    for metric in metrics {
        match (metric.desc.label, metric.label) {
            (Some(label), Some(input)) => {
                let family = match families.entry(metric.desc.name) {
                    Entry::Occupied(entry) => entry.into_mut(),
                    Entry::Vacant(entry) => {
                        let family = GaugeVec::new(
                            Opts::new(metric.desc.name, metric.desc.help),
                            &[label],
                        )?;
                        registry.register(Box::new(family.clone()))?;
                        entry.insert(family)
                    }
                };
                family
                    .with_label_values(&[input.as_str()])
                    .set(metric.value);
            }
            (None, _) => {
                let gauge = Gauge::with_opts(Opts::new(
                    metric.desc.name,
                    metric.desc.help,
                ))?;
                gauge.set(metric.value);
                registry.register(Box::new(gauge))?;
            }
            (Some(_), None) => {
                return Err(prometheus::Error::Msg(format!(
                    "metric {} is missing its label value",
                    metric.desc.name
                )))
            }
        }
    }

    let mut buffer = Vec::new();
    TextEncoder::new().encode(&registry.gather(), &mut buffer)?;
    String::from_utf8(buffer)
        .map_err(|e| prometheus::Error::Msg(e.to_string()))
}
