//! Push metric exporter writing tab-separated files
//!
//! One file per supported metric type (`counter.csv`, `histogram.csv`) in a
//! configured directory, with a header row written when the file is first
//! created and one row appended per data point afterwards. The files import
//! cleanly into spreadsheet tools and CSV-backed dashboards.
//!
//! The file sink is best effort: a failed append is logged and the export
//! call still resolves successfully.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

use ::csv::{Writer, WriterBuilder};

use crate::error::ExporterError;
use crate::export::{ExportHandle, InstrumentKind, MetricExporter, Temporality};
use crate::metrics::{CounterPoint, HistogramPoint, MetricData, MetricSeries};
use crate::schema;
use crate::time::nanos_to_iso;

/// Exporter appending metric rows to per-type CSV files.
pub struct CsvExporter {
    counter_path: PathBuf,
    histogram_path: PathBuf,
}

impl CsvExporter {
    /// Exporter writing into `metrics_dir`, which is created if missing.
    /// Headers are written only when the files do not exist yet, so rows
    /// accumulate across process restarts.
    pub fn new(metrics_dir: impl AsRef<Path>) -> Result<Self, ExporterError> {
        let metrics_dir = metrics_dir.as_ref();
        fs::create_dir_all(metrics_dir)?;

        let counter_path = metrics_dir.join("counter.csv");
        if !counter_path.is_file() {
            let mut writer = Self::appender(&counter_path)?;
            writer.write_record([
                schema::METRIC_NAME,
                schema::START_TIME,
                schema::END_TIME,
                schema::VALUE,
            ])?;
            writer.flush()?;
        }

        let histogram_path = metrics_dir.join("histogram.csv");
        if !histogram_path.is_file() {
            let mut writer = Self::appender(&histogram_path)?;
            writer.write_record([
                schema::METRIC_NAME,
                schema::START_TIME,
                schema::END_TIME,
                schema::COUNT,
                schema::SUM,
                schema::MIN,
                schema::MAX,
                schema::AVG,
            ])?;
            writer.flush()?;
        }

        Ok(Self {
            counter_path,
            histogram_path,
        })
    }

    fn appender(path: &Path) -> Result<Writer<File>, ExporterError> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(WriterBuilder::new().delimiter(b'\t').from_writer(file))
    }

    fn append_counters(&self, name: &str, points: &[CounterPoint]) -> Result<(), ExporterError> {
        let mut writer = Self::appender(&self.counter_path)?;
        for point in points {
            writer.write_record([
                name.to_string(),
                nanos_to_iso(point.start_time_unix_nano),
                nanos_to_iso(point.time_unix_nano),
                point.value.to_string(),
            ])?;
        }
        writer.flush()?;
        Ok(())
    }

    fn append_histograms(
        &self,
        name: &str,
        points: &[HistogramPoint],
    ) -> Result<(), ExporterError> {
        let mut writer = Self::appender(&self.histogram_path)?;
        for point in points {
            writer.write_record([
                name.to_string(),
                nanos_to_iso(point.start_time_unix_nano),
                nanos_to_iso(point.time_unix_nano),
                point.count.to_string(),
                point.sum.to_string(),
                point.min.to_string(),
                point.max.to_string(),
                (point.sum / point.count as f64).to_string(),
            ])?;
        }
        writer.flush()?;
        Ok(())
    }
}

impl MetricExporter for CsvExporter {
    fn export(&self, batch: &[MetricSeries]) -> ExportHandle {
        tracing::debug!(series = batch.len(), "received batch for export");
        for series in batch {
            if series.data.is_empty() {
                continue;
            }
            let result = match &series.data {
                MetricData::Counter(points) => self.append_counters(&series.name, points),
                MetricData::Histogram(points) => self.append_histograms(&series.name, points),
                unsupported => {
                    tracing::warn!(
                        metric = %series.name,
                        kind = unsupported.kind(),
                        "metric type not supported, ignoring"
                    );
                    Ok(())
                }
            };
            if let Err(e) = result {
                tracing::error!(
                    metric = %series.name,
                    error = %e,
                    "failed to append metrics"
                );
            }
        }
        ExportHandle::success()
    }

    fn flush(&self) -> ExportHandle {
        ExportHandle::success()
    }

    fn shutdown(&self) -> ExportHandle {
        tracing::debug!("shutdown");
        ExportHandle::success()
    }

    fn temporality(&self, _kind: InstrumentKind) -> Temporality {
        Temporality::Delta
    }
}
