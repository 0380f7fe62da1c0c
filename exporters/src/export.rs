//! Exporter contract and deferred export results
//!
//! An export call returns an [`ExportHandle`] immediately; the outcome is
//! resolved exactly once, either inline (nothing to deliver) or from the task
//! performing the delivery. The handle is a single-value future backed by a
//! oneshot channel.

use tokio::sync::oneshot;

use crate::metrics::MetricSeries;

/// Terminal outcome of one export, flush, or shutdown call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportStatus {
    Succeeded,
    Failed,
}

impl ExportStatus {
    pub fn is_success(self) -> bool {
        self == Self::Succeeded
    }
}

/// Deferred result of one exporter operation.
///
/// Resolves exactly once: either it was created already completed, or its
/// [`ExportCompleter`] resolves it from another task. Dropping the completer
/// without completing resolves the handle to [`ExportStatus::Failed`].
#[derive(Debug)]
pub struct ExportHandle {
    inner: HandleInner,
}

#[derive(Debug)]
enum HandleInner {
    Ready(ExportStatus),
    Pending(oneshot::Receiver<ExportStatus>),
}

impl ExportHandle {
    /// An already-successful result.
    pub fn success() -> Self {
        Self::completed(ExportStatus::Succeeded)
    }

    /// An already-failed result.
    pub fn failure() -> Self {
        Self::completed(ExportStatus::Failed)
    }

    pub fn completed(status: ExportStatus) -> Self {
        Self {
            inner: HandleInner::Ready(status),
        }
    }

    /// A pending handle plus the completer that resolves it.
    pub fn pending() -> (Self, ExportCompleter) {
        let (tx, rx) = oneshot::channel();
        (
            Self {
                inner: HandleInner::Pending(rx),
            },
            ExportCompleter { tx },
        )
    }

    /// Wait for the terminal status.
    pub async fn wait(self) -> ExportStatus {
        match self.inner {
            HandleInner::Ready(status) => status,
            HandleInner::Pending(rx) => rx.await.unwrap_or(ExportStatus::Failed),
        }
    }
}

/// Resolves the paired [`ExportHandle`]. Consuming `complete` makes a second
/// resolution unrepresentable.
#[derive(Debug)]
pub struct ExportCompleter {
    tx: oneshot::Sender<ExportStatus>,
}

impl ExportCompleter {
    pub fn complete(self, status: ExportStatus) {
        // The receiver may already be gone; nobody is left to care.
        let _ = self.tx.send(status);
    }
}

/// The kind of instrument a series originates from, as reported by the
/// collecting pipeline when negotiating aggregation temporality.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstrumentKind {
    Counter,
    UpDownCounter,
    Gauge,
    Histogram,
}

/// How measurements are aggregated across collection cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Temporality {
    /// Each interval reports the value accrued since the previous report.
    Delta,
    /// Each interval reports the running total.
    Cumulative,
}

/// A push-model metric exporter.
///
/// The collecting pipeline invokes `export` once per cycle with the full
/// batch; at most one export per instance is assumed to be in flight.
pub trait MetricExporter: Send + Sync {
    /// Serialize and deliver one batch. Returns immediately; the handle
    /// resolves when delivery completes.
    fn export(&self, batch: &[MetricSeries]) -> ExportHandle;

    /// Flush buffered data, if any.
    fn flush(&self) -> ExportHandle;

    /// Release resources. No further calls are expected afterwards.
    fn shutdown(&self) -> ExportHandle;

    /// The aggregation temporality this exporter requests for `kind`.
    fn temporality(&self, kind: InstrumentKind) -> Temporality;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_completed_handle_resolves_immediately() {
        assert_eq!(ExportHandle::success().wait().await, ExportStatus::Succeeded);
        assert_eq!(ExportHandle::failure().wait().await, ExportStatus::Failed);
    }

    #[tokio::test]
    async fn test_pending_handle_resolves_once_completed() {
        let (handle, completer) = ExportHandle::pending();
        tokio::spawn(async move {
            completer.complete(ExportStatus::Succeeded);
        });
        assert_eq!(handle.wait().await, ExportStatus::Succeeded);
    }

    #[tokio::test]
    async fn test_dropped_completer_resolves_to_failed() {
        let (handle, completer) = ExportHandle::pending();
        drop(completer);
        assert_eq!(handle.wait().await, ExportStatus::Failed);
    }

    #[test]
    fn test_status_is_success() {
        assert!(ExportStatus::Succeeded.is_success());
        assert!(!ExportStatus::Failed.is_success());
    }
}
