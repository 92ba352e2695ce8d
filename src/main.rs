#![forbid(unsafe_code)]

extern crate env_logger;
extern crate iced;
#[macro_use]
extern crate log;
extern crate reqwest;
extern crate serde;
extern crate serde_json;

#[macro_use]
mod timed;
mod app;
mod config;
mod extract;
mod fetcher;
mod forecast;
mod presenter;

use crate::app::{ForecastApp, Screen};
use crate::config::{DEFAULT_LOG_FILTER, FORECAST_URL, LOG_ENV};
use crate::fetcher::{build_client, fetch_weather_data};

use env_logger::Env;
use iced::{Application, Settings};

fn main() -> iced::Result {
    let env = Env::default().filter_or(LOG_ENV, DEFAULT_LOG_FILTER);
    env_logger::init_from_env(env);

    // The blocking client owns a runtime of its own, so it is gone before iced starts
    let data = {
        let client = build_client();
        timed!(
            fetch_weather_data(&client, FORECAST_URL),
            "Fetching forecast from {}",
            FORECAST_URL
        )
    };
    let screen = Screen::from_fetch(data);

    ForecastApp::run(Settings::with_flags(screen))
}
