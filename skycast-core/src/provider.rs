use async_trait::async_trait;
use std::fmt::Debug;

use crate::{CityName, Config, WeatherReading, error::FetchError};

pub mod openweather;

pub use openweather::OpenWeatherProvider;

#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Current conditions for `city`.
    async fn current(&self, city: &CityName) -> Result<WeatherReading, FetchError>;
}

/// Construct the OpenWeather provider from config.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherProvider>> {
    let api_key = config.require_api_key()?;
    let provider = OpenWeatherProvider::new(
        api_key.to_owned(),
        config.base_url.clone(),
        config.timeout(),
    )?;

    Ok(Box::new(provider))
}
