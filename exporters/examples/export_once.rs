//! Builds one small batch by hand and exports it to an Elasticsearch index.
//!
//! ```sh
//! cargo run --example export_once -- http://localhost:9200/mymetrics
//! ```

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use serde_json::json;
use telemetry_exporters::{
    Attributes, CounterPoint, ElasticsearchExporter, HistogramPoint, InstrumentationScope,
    MetricData, MetricExporter, MetricSeries,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .init();

    let destination = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "http://localhost:9200/mymetrics".to_string());

    let exporter = ElasticsearchExporter::builder(&destination)
        .timeout(Duration::from_secs(5))
        .build()?;

    let now = SystemTime::now().duration_since(UNIX_EPOCH)?.as_nanos() as u64;
    let start = now - 3_000_000_000;
    let scope = InstrumentationScope::new("export-once-demo").with_version("0.1.0");

    let mut attributes = Attributes::new();
    attributes.insert("host".to_string(), json!("demo-host"));

    let batch = vec![
        MetricSeries::new(
            "requests_total",
            scope.clone(),
            MetricData::Counter(vec![CounterPoint {
                start_time_unix_nano: start,
                time_unix_nano: now,
                value: 42,
                attributes: attributes.clone(),
            }]),
        ),
        MetricSeries::new(
            "request_latency_ms",
            scope,
            MetricData::Histogram(vec![HistogramPoint {
                start_time_unix_nano: start,
                time_unix_nano: now,
                count: 4,
                sum: 18.0,
                min: 1.5,
                max: 9.0,
                attributes,
            }]),
        ),
    ];

    let status = exporter.export(&batch).wait().await;
    if status.is_success() {
        tracing::info!(destination = %destination, "batch exported");
    } else {
        tracing::error!(destination = %destination, "export failed, see logs above");
        std::process::exit(1);
    }
    Ok(())
}
