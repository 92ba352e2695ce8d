macro_rules! region_code {
    () => {
        "012000"
    };
}

/// JMA office code for Soya, Kamikawa and Rumoi regions
pub const REGION_CODE: &str = region_code!();

pub const FORECAST_URL: &str = concat!(
    "http://www.jma.go.jp/bosai/forecast/data/forecast/",
    region_code!(),
    ".json"
);

/// Shown for positional values and averages the document does not carry
pub const PLACEHOLDER_NO_INFO: &str = "情報なし";

/// Shown for missing names and timestamps
pub const PLACEHOLDER_UNKNOWN: &str = "不明";

pub const LOG_ENV: &str = "JMA_FORECAST_LOG";
pub const DEFAULT_LOG_FILTER: &str = "info";

pub const WINDOW_TITLE: &str = "地域タブの階層表示";
pub const STATUS_INITIAL: &str = "天気データを確認するにはボタンを押してください。";
pub const STATUS_CHECKED: &str = "天気データが表示されています。";
pub const CHECK_BUTTON_LABEL: &str = "確認";
pub const FETCH_FAILED_MESSAGE: &str = "天気データの取得に失敗しました。";
