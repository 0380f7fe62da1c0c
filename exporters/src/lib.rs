//! Push metric exporters for aggregated counter and histogram series.
//!
//! A metrics pipeline collects series on a periodic cycle and hands each
//! batch to a [`MetricExporter`]. Two exporters are provided:
//!
//! - [`ElasticsearchExporter`] — encodes each batch as Bulk API line pairs
//!   and delivers it in a single HTTP POST to `<destination>/_bulk`.
//! - [`CsvExporter`] — appends tab-separated rows to per-type files.
//!
//! Export calls return an [`ExportHandle`] immediately; delivery happens on
//! the Tokio runtime and the handle resolves to success or failure exactly
//! once. Both exporters request delta aggregation temporality.
//!
//! ```no_run
//! use telemetry_exporters::{ElasticsearchExporter, ExporterError, MetricExporter};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), ExporterError> {
//! let exporter = ElasticsearchExporter::builder("http://localhost:9200/mymetrics")
//!     .credentials("elastic", "pass")
//!     .build()?;
//! let status = exporter.export(&[]).wait().await;
//! assert!(status.is_success());
//! # Ok(())
//! # }
//! ```

pub mod csv;
pub mod elastic;
pub mod error;
pub mod export;
pub mod metrics;
pub mod reader;
pub mod schema;
pub mod time;

pub use crate::csv::CsvExporter;
pub use elastic::{
    BulkTransport, Credentials, ElasticsearchExporter, ElasticsearchExporterBuilder, MetricsSink,
};
pub use error::ExporterError;
pub use export::{
    ExportCompleter, ExportHandle, ExportStatus, InstrumentKind, MetricExporter, Temporality,
};
pub use metrics::{
    Attributes, CounterPoint, GaugePoint, HistogramPoint, InstrumentationScope, MetricData,
    MetricSeries,
};
pub use reader::{MetricProducer, PeriodicExportDriver};
