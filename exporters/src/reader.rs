//! Periodic collection driver
//!
//! Drives an exporter from a metric producer on a fixed interval. All
//! collaborators are injected and the driver hands back its task handle;
//! nothing is registered in process-global state.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::export::{ExportStatus, MetricExporter};
use crate::metrics::MetricSeries;

/// Source of aggregated series for one collection cycle.
pub trait MetricProducer: Send + Sync {
    fn collect(&self) -> Vec<MetricSeries>;
}

/// How long shutdown waits for the final in-flight export before
/// abandoning it.
const SHUTDOWN_GRACE: Duration = Duration::from_secs(5);

/// Periodically collects from a [`MetricProducer`] and pushes through a
/// [`MetricExporter`].
pub struct PeriodicExportDriver {
    producer: Arc<dyn MetricProducer>,
    exporter: Arc<dyn MetricExporter>,
    interval: Duration,
}

impl PeriodicExportDriver {
    pub fn new(
        producer: Arc<dyn MetricProducer>,
        exporter: Arc<dyn MetricExporter>,
        interval: Duration,
    ) -> Self {
        Self {
            producer,
            exporter,
            interval,
        }
    }

    /// Start the export loop. The first cycle runs immediately, then one per
    /// interval. On shutdown signal a final cycle flushes whatever the
    /// producer still holds, then the exporter is shut down.
    pub fn spawn(self, mut shutdown_rx: watch::Receiver<bool>) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(self.interval);
            loop {
                tokio::select! {
                    biased;
                    _ = shutdown_rx.changed() => {
                        if *shutdown_rx.borrow() {
                            tracing::debug!("export driver received shutdown, flushing final cycle");
                            self.final_cycle().await;
                            break;
                        }
                    }
                    _ = ticker.tick() => self.run_cycle().await,
                }
            }
            tracing::debug!("export driver stopped");
        })
    }

    async fn run_cycle(&self) {
        let batch = self.producer.collect();
        let status = self.exporter.export(&batch).wait().await;
        if status == ExportStatus::Failed {
            tracing::error!(series = batch.len(), "export cycle failed");
        }
    }

    async fn final_cycle(&self) {
        let batch = self.producer.collect();
        let handle = self.exporter.export(&batch);
        match tokio::time::timeout(SHUTDOWN_GRACE, handle.wait()).await {
            Ok(ExportStatus::Succeeded) => {}
            Ok(ExportStatus::Failed) => {
                tracing::error!(series = batch.len(), "final export cycle failed");
            }
            Err(_) => {
                tracing::warn!(
                    grace_secs = SHUTDOWN_GRACE.as_secs(),
                    "timed out waiting for final export, abandoning it"
                );
            }
        }
        let _ = self.exporter.shutdown().wait().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::export::{ExportHandle, InstrumentKind, Temporality};
    use crate::metrics::{CounterPoint, InstrumentationScope, MetricData};

    struct FixedProducer;

    impl MetricProducer for FixedProducer {
        fn collect(&self) -> Vec<MetricSeries> {
            vec![MetricSeries::new(
                "requests_total",
                InstrumentationScope::new("scope"),
                MetricData::Counter(vec![CounterPoint::default()]),
            )]
        }
    }

    #[derive(Default)]
    struct CountingExporter {
        exports: AtomicUsize,
        shutdowns: AtomicUsize,
    }

    impl MetricExporter for CountingExporter {
        fn export(&self, _batch: &[MetricSeries]) -> ExportHandle {
            self.exports.fetch_add(1, Ordering::SeqCst);
            ExportHandle::success()
        }

        fn flush(&self) -> ExportHandle {
            ExportHandle::success()
        }

        fn shutdown(&self) -> ExportHandle {
            self.shutdowns.fetch_add(1, Ordering::SeqCst);
            ExportHandle::success()
        }

        fn temporality(&self, _kind: InstrumentKind) -> Temporality {
            Temporality::Delta
        }
    }

    #[tokio::test]
    async fn test_shutdown_runs_final_cycle_and_stops() {
        let exporter = Arc::new(CountingExporter::default());
        let driver = PeriodicExportDriver::new(
            Arc::new(FixedProducer),
            exporter.clone(),
            Duration::from_secs(3600),
        );

        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        shutdown_tx.send(true).unwrap();
        driver.spawn(shutdown_rx).await.unwrap();

        assert_eq!(exporter.exports.load(Ordering::SeqCst), 1);
        assert_eq!(exporter.shutdowns.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_exports_on_every_interval() {
        let exporter = Arc::new(CountingExporter::default());
        let driver = PeriodicExportDriver::new(
            Arc::new(FixedProducer),
            exporter.clone(),
            Duration::from_millis(10),
        );

        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let handle = driver.spawn(shutdown_rx);

        tokio::time::sleep(Duration::from_millis(35)).await;
        shutdown_tx.send(true).unwrap();
        handle.await.unwrap();

        // Immediate first tick plus three interval ticks plus the final
        // flush cycle.
        assert_eq!(exporter.exports.load(Ordering::SeqCst), 5);
        assert_eq!(exporter.shutdowns.load(Ordering::SeqCst), 1);
    }
}
