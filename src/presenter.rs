use crate::extract::{Averages, extract_temp_precip};
use crate::forecast::{AreaForecast, Report, TimeSeries, display_value, value_at};

use serde::Deserialize;
use serde_json::Value;

/// Build one text block per report, time series, area and timestamp
pub fn build_day_blocks(data: &Value) -> Vec<String> {
    let entries = match data.as_array() {
        Some(entries) => entries,
        None => {
            warn!("Forecast document is not a list of reports; nothing to show");
            return Vec::new();
        }
    };

    let mut blocks = Vec::new();
    for (idx, entry) in entries.iter().enumerate() {
        let report: Report = match Report::deserialize(entry) {
            Ok(report) => report,
            Err(err) => {
                warn!("Skipping report {idx}: {err}");
                continue;
            }
        };
        info!(
            "Publishing office: {}, report time: {}",
            report.office(),
            report.datetime()
        );

        if report.time_series.is_empty() {
            error!("Report {idx} has no timeSeries");
            continue;
        }

        let averages = extract_temp_precip(entry).unwrap_or_else(Averages::placeholder);
        for (series_idx, raw_series) in report.time_series.iter().enumerate() {
            let series = match TimeSeries::deserialize(raw_series) {
                Ok(series) => series,
                Err(err) => {
                    warn!("Skipping timeSeries {} of report {idx}: {err}", series_idx + 1);
                    continue;
                }
            };
            debug!(
                "timeSeries {}: {} timeDefines, {} areas",
                series_idx + 1,
                series.time_defines.len(),
                series.areas.len()
            );

            for (area_idx, raw_area) in series.areas.iter().enumerate() {
                let area = match AreaForecast::deserialize(raw_area) {
                    Ok(area) => area,
                    Err(err) => {
                        warn!(
                            "Skipping area {area_idx} of timeSeries {} in report {idx}: {err}",
                            series_idx + 1
                        );
                        continue;
                    }
                };
                for (time_idx, time_define) in series.time_defines.iter().enumerate() {
                    blocks.push(format_block(
                        &report,
                        &area,
                        &display_value(time_define),
                        time_idx,
                        &averages,
                    ));
                }
            }
        }
    }
    blocks
}

fn format_block(
    report: &Report,
    area: &AreaForecast,
    time_define: &str,
    idx: usize,
    averages: &Averages,
) -> String {
    let lines = [
        ("発表局", report.office()),
        ("発表日時", report.datetime()),
        ("エリア", format!("{} ({})", area.name(), area.code())),
        ("日時", time_define.to_string()),
        ("天気コード", value_at(&area.weather_codes, idx)),
        ("天気", value_at(&area.weathers, idx)),
        ("風", value_at(&area.winds, idx)),
        ("波", value_at(&area.waves, idx)),
        ("降水確率", value_at(&area.pops, idx)),
        ("信頼度", value_at(&area.reliabilities, idx)),
        ("温度", value_at(&area.temps, idx)),
        ("温度Min", averages.temp.min.clone()),
        ("温度Max", averages.temp.max.clone()),
        ("降水確率Min", averages.precip.min.clone()),
        ("降水確率Max", averages.precip.max.clone()),
    ];

    lines
        .iter()
        .map(|(label, value)| format!("{label}: {value}"))
        .collect::<Vec<_>>()
        .join("\n")
}
