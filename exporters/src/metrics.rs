//! Metric data model shared by all exporters
//!
//! One series per instrument, flattened to plain values the way an
//! aggregating pipeline hands them over. Instances are built fresh for each
//! collection cycle and are read-only to the exporters.

use serde_json::Value as JsonValue;

/// String-keyed data point attributes. Values are JSON-representable scalars.
pub type Attributes = serde_json::Map<String, JsonValue>;

/// Metadata identifying the instrumented component that produced a series.
/// Attached once per series, not per point.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InstrumentationScope {
    pub name: String,
    pub version: Option<String>,
    pub schema_url: Option<String>,
}

impl InstrumentationScope {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: None,
            schema_url: None,
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn with_schema_url(mut self, schema_url: impl Into<String>) -> Self {
        self.schema_url = Some(schema_url.into());
        self
    }
}

/// One aggregated metric series with its ordered data points.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricSeries {
    pub name: String,
    pub scope: InstrumentationScope,
    pub data: MetricData,
}

impl MetricSeries {
    pub fn new(name: impl Into<String>, scope: InstrumentationScope, data: MetricData) -> Self {
        Self {
            name: name.into(),
            scope,
            data,
        }
    }
}

/// Data points of a series, discriminated by metric type.
///
/// Gauges appear in collected batches but are not supported by the exporters
/// in this crate; they are logged and skipped.
#[derive(Debug, Clone, PartialEq)]
pub enum MetricData {
    Counter(Vec<CounterPoint>),
    Gauge(Vec<GaugePoint>),
    Histogram(Vec<HistogramPoint>),
}

impl MetricData {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Counter(_) => "counter",
            Self::Gauge(_) => "gauge",
            Self::Histogram(_) => "histogram",
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::Counter(points) => points.is_empty(),
            Self::Gauge(points) => points.is_empty(),
            Self::Histogram(points) => points.is_empty(),
        }
    }
}

/// A monotonic sum accrued over `[start_time, time]`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CounterPoint {
    pub start_time_unix_nano: u64,
    pub time_unix_nano: u64,
    pub value: i64,
    pub attributes: Attributes,
}

/// An instantaneous sampled value.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GaugePoint {
    pub start_time_unix_nano: u64,
    pub time_unix_nano: u64,
    pub value: f64,
    pub attributes: Attributes,
}

/// Aggregated distribution over `[start_time, time]`. The derived average is
/// `sum / count` and is undefined when `count` is zero.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HistogramPoint {
    pub start_time_unix_nano: u64,
    pub time_unix_nano: u64,
    pub count: u64,
    pub sum: f64,
    pub min: f64,
    pub max: f64,
    pub attributes: Attributes,
}
