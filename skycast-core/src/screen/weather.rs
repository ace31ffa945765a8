//! The weather screen: reads the stored city, fetches once, renders.

use anyhow::Result;
use tracing::{debug, warn};

use crate::{
    error::FetchError,
    model::{CityName, WeatherReading, format_one_decimal},
    provider::WeatherProvider,
    storage::CityStore,
};

pub const NO_CITY_MESSAGE: &str = "No city provided. Go back to Home.";
pub const LOADING_MESSAGE: &str = "Loading...";
pub const NOT_FOUND_MESSAGE: &str = "Weather data not found.";
pub const BACK_LINK: &str = "Go Back";

/// Outcome of the fetch for the current city.
#[derive(Debug)]
pub enum FetchState {
    Pending,
    Ready(WeatherReading),
    Failed(FetchError),
}

/// What the screen shows. Exactly one of these at any time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WeatherView<'a> {
    NoCity,
    Loading,
    NotFound,
    Loaded(&'a WeatherReading),
}

/// Handle for one dispatched fetch. Responses carrying an outdated ticket
/// are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    city: CityName,
    generation: u64,
}

impl FetchTicket {
    pub fn city(&self) -> &CityName {
        &self.city
    }
}

#[derive(Debug)]
pub struct WeatherScreen {
    city: Option<CityName>,
    state: FetchState,
    generation: u64,
    dispatched: bool,
    mounted: bool,
}

impl WeatherScreen {
    /// Read the stored city. A missing or blank value means no fetch will
    /// ever be issued for this mount.
    pub fn mount<S: CityStore + ?Sized>(store: &S) -> Result<Self> {
        let city = read_city(store)?;
        debug!(city = ?city.as_ref().map(CityName::as_str), "weather screen mounted");

        Ok(Self {
            city,
            state: FetchState::Pending,
            generation: 0,
            dispatched: false,
            mounted: true,
        })
    }

    pub fn city(&self) -> Option<&CityName> {
        self.city.as_ref()
    }

    pub fn state(&self) -> &FetchState {
        &self.state
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Ticket for the one fetch this mount needs, if it has not been
    /// dispatched yet.
    pub fn begin_fetch(&mut self) -> Option<FetchTicket> {
        if !self.mounted || self.dispatched {
            return None;
        }
        let city = self.city.clone()?;

        self.dispatched = true;
        Some(FetchTicket { city, generation: self.generation })
    }

    /// Apply a response. Returns `false` if the ticket is stale or the
    /// screen is gone, in which case nothing changes.
    pub fn complete(
        &mut self,
        ticket: FetchTicket,
        result: Result<WeatherReading, FetchError>,
    ) -> bool {
        if !self.mounted || ticket.generation != self.generation {
            debug!(city = %ticket.city, "dropping stale weather response");
            return false;
        }

        self.state = match result {
            Ok(reading) => FetchState::Ready(reading),
            Err(err) => {
                warn!(city = %ticket.city, error = %err, "weather fetch failed");
                FetchState::Failed(err)
            }
        };
        true
    }

    /// Dispatch the pending fetch, if any, and apply its result.
    pub async fn load<P: WeatherProvider + ?Sized>(&mut self, provider: &P) -> bool {
        let Some(ticket) = self.begin_fetch() else {
            return false;
        };
        let result = provider.current(ticket.city()).await;
        self.complete(ticket, result)
    }

    /// Re-read the store. If the city changed the screen goes back to
    /// loading (or to no-city) and a new fetch becomes due.
    pub fn sync_city<S: CityStore + ?Sized>(&mut self, store: &S) -> Result<bool> {
        let city = read_city(store)?;
        if city == self.city {
            return Ok(false);
        }

        debug!(city = ?city.as_ref().map(CityName::as_str), "stored city changed");
        self.city = city;
        self.generation += 1;
        self.dispatched = false;
        self.state = FetchState::Pending;
        Ok(true)
    }

    pub fn unmount(&mut self) {
        self.mounted = false;
    }

    pub fn view(&self) -> WeatherView<'_> {
        if self.city.is_none() {
            return WeatherView::NoCity;
        }
        match &self.state {
            FetchState::Pending => WeatherView::Loading,
            FetchState::Failed(_) => WeatherView::NotFound,
            FetchState::Ready(reading) => WeatherView::Loaded(reading),
        }
    }

    pub fn render(&self) -> Vec<String> {
        match self.view() {
            WeatherView::NoCity => vec![NO_CITY_MESSAGE.to_string()],
            WeatherView::Loading => vec![LOADING_MESSAGE.to_string()],
            WeatherView::NotFound => vec![NOT_FOUND_MESSAGE.to_string()],
            WeatherView::Loaded(reading) => render_reading(reading),
        }
    }
}

fn read_city<S: CityStore + ?Sized>(store: &S) -> Result<Option<CityName>> {
    Ok(store.city()?.and_then(|raw| CityName::parse(&raw).ok()))
}

fn render_reading(reading: &WeatherReading) -> Vec<String> {
    vec![
        format!("Weather in {}", reading.location_name),
        format!("Condition: {}", reading.condition),
        // `+ 0.0` turns a provider `-0` into `0`.
        format!(
            "Temperature: {}°C / {}°F",
            reading.temperature_c + 0.0,
            format_one_decimal(reading.temperature_f())
        ),
        format!("Humidity: {}%", reading.humidity_pct),
        format!("Wind Speed: {} m/s", reading.wind_speed_mps),
        BACK_LINK.to_string(),
    ]
}
