use crate::config::{PLACEHOLDER_NO_INFO, PLACEHOLDER_UNKNOWN};

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// One entry of the JMA forecast document, as published by a single office.
///
/// Every field is defaulted and loosely typed so a partial or oddly-typed
/// report still decodes; the presenter substitutes placeholders for whatever
/// is missing. Time series are kept raw and decoded one at a time.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Report {
    pub publishing_office: Option<Value>,
    pub report_datetime: Option<Value>,
    #[serde(deserialize_with = "lenient_list")]
    pub time_series: Vec<Value>,
}

/// A group of area forecasts sharing one set of timestamps
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TimeSeries {
    #[serde(deserialize_with = "lenient_list")]
    pub time_defines: Vec<Value>,
    #[serde(deserialize_with = "lenient_list")]
    pub areas: Vec<Value>,
}

/// Per-region forecast values, each sequence indexed against `TimeSeries::time_defines`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AreaForecast {
    pub area: Value,
    #[serde(deserialize_with = "lenient_list")]
    pub weather_codes: Vec<Value>,
    #[serde(deserialize_with = "lenient_list")]
    pub weathers: Vec<Value>,
    #[serde(deserialize_with = "lenient_list")]
    pub winds: Vec<Value>,
    #[serde(deserialize_with = "lenient_list")]
    pub waves: Vec<Value>,
    #[serde(deserialize_with = "lenient_list")]
    pub pops: Vec<Value>,
    #[serde(deserialize_with = "lenient_list")]
    pub reliabilities: Vec<Value>,
    #[serde(deserialize_with = "lenient_list")]
    pub temps: Vec<Value>,
}

/// Accept any JSON value where a list is expected; anything but an array is empty
fn lenient_list<'de, D>(deserializer: D) -> Result<Vec<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => Ok(items),
        _ => Ok(Vec::new()),
    }
}

impl Report {
    pub fn office(&self) -> String {
        display_or_unknown(self.publishing_office.as_ref())
    }

    pub fn datetime(&self) -> String {
        display_or_unknown(self.report_datetime.as_ref())
    }
}

impl AreaForecast {
    pub fn name(&self) -> String {
        display_or_unknown(self.area.get("name"))
    }

    pub fn code(&self) -> String {
        display_or_unknown(self.area.get("code"))
    }
}

fn display_or_unknown(value: Option<&Value>) -> String {
    value
        .filter(|v| !v.is_null())
        .map(display_value)
        .unwrap_or_else(|| PLACEHOLDER_UNKNOWN.to_string())
}

/// Render a JSON value for display. Strings are shown without quotes.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// The value at `idx` of a per-timestamp sequence, or the placeholder when the
/// sequence is shorter than the timestamp list
pub fn value_at(values: &[Value], idx: usize) -> String {
    values
        .get(idx)
        .map(display_value)
        .unwrap_or_else(|| PLACEHOLDER_NO_INFO.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_partial_report_decodes_with_defaults() {
        let report: Report = serde_json::from_value(json!({
            "publishingOffice": "稚内地方気象台",
            "timeSeries": [{ "areas": [{ "weathers": ["晴れ"] }] }]
        }))
        .unwrap();

        assert_eq!(report.office(), "稚内地方気象台");
        assert_eq!(report.datetime(), PLACEHOLDER_UNKNOWN);
        assert_eq!(report.time_series.len(), 1);

        let series = TimeSeries::deserialize(&report.time_series[0]).unwrap();
        assert!(series.time_defines.is_empty());
        let area = AreaForecast::deserialize(&series.areas[0]).unwrap();
        assert_eq!(area.name(), PLACEHOLDER_UNKNOWN);
        assert_eq!(area.weathers.len(), 1);
        assert!(area.temps.is_empty());
    }

    #[test]
    fn test_unexpected_types_still_decode() {
        let report: Report = serde_json::from_value(json!({
            "publishingOffice": 123,
            "reportDatetime": null,
            "timeSeries": "none"
        }))
        .unwrap();

        assert_eq!(report.office(), "123");
        assert_eq!(report.datetime(), PLACEHOLDER_UNKNOWN);
        assert!(report.time_series.is_empty());

        let area = AreaForecast::deserialize(&json!({
            "area": { "name": "宗谷地方", "code": 11000 },
            "weathers": null,
            "pops": "10"
        }))
        .unwrap();
        assert_eq!(area.name(), "宗谷地方");
        assert_eq!(area.code(), "11000");
        assert!(area.weathers.is_empty());
        assert!(area.pops.is_empty());
    }

    #[test]
    fn test_value_at_past_end_is_placeholder() {
        let pops = vec![json!("10"), json!(20)];

        assert_eq!(value_at(&pops, 0), "10");
        assert_eq!(value_at(&pops, 1), "20");
        assert_eq!(value_at(&pops, 2), PLACEHOLDER_NO_INFO);
    }
}
