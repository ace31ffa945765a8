use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, instrument};

use crate::{
    error::FetchError,
    model::{CityName, WeatherReading},
};

use super::WeatherProvider;

/// Client for the OpenWeather "current weather" endpoint, metric units.
#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String, base_url: String, timeout: Duration) -> anyhow::Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    #[instrument(skip_all, fields(city = %city))]
    async fn fetch_current(&self, city: &CityName) -> Result<WeatherReading, FetchError> {
        let url = format!("{}/weather", self.base_url);
        debug!(%url, "requesting current weather");

        let res = self
            .http
            .get(&url)
            .query(&[
                ("q", city.as_str()),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                body: truncate_body(&body),
            });
        }

        let parsed: OwCurrentResponse = serde_json::from_str(&body)?;
        parsed.into_reading()
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
}

impl OwCurrentResponse {
    fn into_reading(self) -> Result<WeatherReading, FetchError> {
        let condition = self
            .weather
            .into_iter()
            .next()
            .map(|w| w.description)
            .ok_or_else(|| FetchError::Shape("`weather` array is empty".to_string()))?;

        Ok(WeatherReading {
            location_name: self.name,
            condition,
            temperature_c: self.main.temp,
            humidity_pct: self.main.humidity,
            wind_speed_mps: self.wind.speed,
        })
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current(&self, city: &CityName) -> Result<WeatherReading, FetchError> {
        self.fetch_current(city).await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
