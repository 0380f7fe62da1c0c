//! Field names of the exported metric records
//!
//! Shared by the bulk encoder and the CSV file headers.

pub const METRIC_NAME: &str = "METRIC_NAME";
pub const METRIC_TYPE: &str = "METRIC_TYPE";
pub const START_TIME: &str = "START_TIME";
pub const END_TIME: &str = "END_TIME";
pub const VALUE: &str = "VALUE";
pub const COUNT: &str = "COUNT";
pub const SUM: &str = "SUM";
pub const MIN: &str = "MIN";
pub const MAX: &str = "MAX";
pub const AVG: &str = "AVG";
pub const SCOPE_NAME: &str = "SCOPE_NAME";
pub const SCOPE_VERSION: &str = "SCOPE_VERSION";
pub const SCOPE_SCHEMA: &str = "SCOPE_SCHEMA";

/// Flattened attribute keys carry this prefix to keep them clear of the
/// fixed field names above.
pub const ATTR_PREFIX: &str = "ATTR_";
