use crate::config::PLACEHOLDER_NO_INFO;
use crate::forecast::display_value;

use serde_json::Value;

const TEMP_AVERAGE_KEY: &str = "tempAverage";
const PRECIP_AVERAGE_KEY: &str = "precipAverage";

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct MinMax {
    pub min: String,
    pub max: String,
}

/// Area-level normals published alongside the weekly forecast
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Averages {
    pub temp: MinMax,
    pub precip: MinMax,
}

impl MinMax {
    fn placeholder() -> MinMax {
        MinMax {
            min: PLACEHOLDER_NO_INFO.to_string(),
            max: PLACEHOLDER_NO_INFO.to_string(),
        }
    }

    /// Read `min`/`max` from the first entry of an average's `areas` list
    fn from_average(average: &Value) -> MinMax {
        let first = average
            .get("areas")
            .and_then(Value::as_array)
            .and_then(|areas| areas.first());

        match first {
            Some(area) => MinMax {
                min: Self::field(area, "min"),
                max: Self::field(area, "max"),
            },
            None => Self::placeholder(),
        }
    }

    fn field(area: &Value, key: &str) -> String {
        area.get(key)
            .filter(|v| !v.is_null())
            .map(display_value)
            .unwrap_or_else(|| PLACEHOLDER_NO_INFO.to_string())
    }
}

impl Averages {
    /// Both sides filled with placeholders, for reports that carry no averages
    pub fn placeholder() -> Averages {
        Averages {
            temp: MinMax::placeholder(),
            precip: MinMax::placeholder(),
        }
    }
}

/// Search a JSON tree for `tempAverage` and `precipAverage`.
///
/// Arrays are walked element by element and the first hit in document order
/// wins. Objects are only checked for the two keys directly; their other
/// values are not searched.
pub fn extract_temp_precip(data: &Value) -> Option<Averages> {
    match data {
        Value::Array(items) => items.iter().find_map(extract_temp_precip),
        Value::Object(map) => {
            let temp = map.get(TEMP_AVERAGE_KEY).filter(|v| !v.is_null())?;
            let precip = map.get(PRECIP_AVERAGE_KEY).filter(|v| !v.is_null())?;
            Some(Averages {
                temp: MinMax::from_average(temp),
                precip: MinMax::from_average(precip),
            })
        }
        _ => None,
    }
}
