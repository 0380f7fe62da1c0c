//! Bulk payload encoding
//!
//! Turns one metric series into alternating `{"create":{}}` action lines and
//! flattened record lines, one pair per data point. Pure string building; no
//! I/O.

use serde_json::{Map, Number, Value as JsonValue};

use crate::metrics::{
    Attributes, CounterPoint, HistogramPoint, InstrumentationScope, MetricData, MetricSeries,
};
use crate::schema;
use crate::time::nanos_to_iso;

const CREATE_ACTION: &str = r#"{"create":{}}"#;

/// Append the bulk line pairs for `series` to `buf`.
///
/// A series with no data points contributes nothing. Unsupported metric
/// types are logged and skipped; the rest of the batch is unaffected.
pub fn append_series(buf: &mut String, series: &MetricSeries) {
    match &series.data {
        MetricData::Counter(points) => {
            for point in points {
                append_counter_point(buf, series, point);
            }
        }
        MetricData::Histogram(points) => {
            for point in points {
                append_histogram_point(buf, series, point);
            }
        }
        unsupported => {
            tracing::warn!(
                metric = %series.name,
                kind = unsupported.kind(),
                "metric type not supported, ignoring"
            );
        }
    }
}

fn append_counter_point(buf: &mut String, series: &MetricSeries, point: &CounterPoint) {
    let mut record = record_base(series, point.start_time_unix_nano, point.time_unix_nano);
    record.insert(schema::VALUE.to_string(), JsonValue::from(point.value));
    append_scope(&mut record, &series.scope);
    flatten_attributes(&mut record, &point.attributes);
    push_pair(buf, &record);
}

fn append_histogram_point(buf: &mut String, series: &MetricSeries, point: &HistogramPoint) {
    let mut record = record_base(series, point.start_time_unix_nano, point.time_unix_nano);
    record.insert(schema::COUNT.to_string(), JsonValue::from(point.count));
    record.insert(schema::SUM.to_string(), float(point.sum));
    record.insert(schema::MIN.to_string(), float(point.min));
    record.insert(schema::MAX.to_string(), float(point.max));
    record.insert(
        schema::AVG.to_string(),
        float(point.sum / point.count as f64),
    );
    append_scope(&mut record, &series.scope);
    flatten_attributes(&mut record, &point.attributes);
    push_pair(buf, &record);
}

fn record_base(series: &MetricSeries, start_nanos: u64, end_nanos: u64) -> Map<String, JsonValue> {
    let mut record = Map::new();
    record.insert(
        schema::METRIC_NAME.to_string(),
        JsonValue::from(series.name.as_str()),
    );
    record.insert(
        schema::METRIC_TYPE.to_string(),
        JsonValue::from(series.data.kind()),
    );
    record.insert(
        schema::START_TIME.to_string(),
        JsonValue::from(nanos_to_iso(start_nanos)),
    );
    record.insert(
        schema::END_TIME.to_string(),
        JsonValue::from(nanos_to_iso(end_nanos)),
    );
    record
}

fn append_scope(record: &mut Map<String, JsonValue>, scope: &InstrumentationScope) {
    record.insert(
        schema::SCOPE_NAME.to_string(),
        JsonValue::from(scope.name.as_str()),
    );
    record.insert(schema::SCOPE_VERSION.to_string(), opt_str(&scope.version));
    record.insert(schema::SCOPE_SCHEMA.to_string(), opt_str(&scope.schema_url));
}

fn flatten_attributes(record: &mut Map<String, JsonValue>, attributes: &Attributes) {
    for (key, value) in attributes {
        record.insert(format!("{}{}", schema::ATTR_PREFIX, key), value.clone());
    }
}

fn opt_str(value: &Option<String>) -> JsonValue {
    value
        .as_deref()
        .map(JsonValue::from)
        .unwrap_or(JsonValue::Null)
}

// NaN and infinities are not representable in JSON; emit null for them.
fn float(value: f64) -> JsonValue {
    Number::from_f64(value)
        .map(JsonValue::Number)
        .unwrap_or(JsonValue::Null)
}

fn push_pair(buf: &mut String, record: &Map<String, JsonValue>) {
    // Serialize before touching the buffer so a failed record never leaves
    // an unpaired action line behind.
    match serde_json::to_string(record) {
        Ok(line) => {
            buf.push_str(CREATE_ACTION);
            buf.push('\n');
            buf.push_str(&line);
            buf.push('\n');
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to serialize metric record, dropping point");
        }
    }
}
