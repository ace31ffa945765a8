//! Core library for the `skycast` weather client.
//!
//! This crate defines:
//! - The two screens (home and weather) as plain state machines
//! - The persisted city slot and its storage backends
//! - Abstraction over the weather provider, with an OpenWeather client
//! - Configuration handling
//!
//! It is used by `skycast-cli`, but the screens know nothing about terminals
//! and can be driven by any front end.

pub mod config;
pub mod error;
pub mod model;
pub mod provider;
pub mod route;
pub mod screen;
pub mod storage;

pub use config::Config;
pub use error::{FetchError, SubmitError, ValidationError};
pub use model::{CityName, WeatherReading, celsius_to_fahrenheit, format_one_decimal};
pub use provider::{OpenWeatherProvider, WeatherProvider, provider_from_config};
pub use route::Route;
pub use screen::{FetchState, FetchTicket, HomeScreen, WeatherScreen, WeatherView};
pub use storage::{CityStore, FileStore, MemoryStore};
