//! The home screen: a single city field and a submit action.

use crate::{
    error::{SubmitError, ValidationError},
    model::CityName,
    route::Route,
    storage::CityStore,
};

pub const TITLE: &str = "SkyCast - Know weather";
pub const PLACEHOLDER: &str = "Enter city name";
pub const SUBMIT_LABEL: &str = "Get Weather";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HomeScreen {
    input: String,
    error: Option<ValidationError>,
}

impl HomeScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the field text. Any shown error goes away.
    pub fn edit(&mut self, text: impl Into<String>) {
        self.input = text.into();
        self.error = None;
    }

    pub fn error(&self) -> Option<ValidationError> {
        self.error
    }

    /// Validate, persist, and return where to go next.
    ///
    /// The store write has completed by the time `Ok` is returned. On a
    /// validation failure nothing is written and the error stays visible
    /// until the next `edit`.
    pub fn submit<S: CityStore + ?Sized>(&mut self, store: &mut S) -> Result<Route, SubmitError> {
        let city = match CityName::parse(&self.input) {
            Ok(city) => city,
            Err(err) => {
                self.error = Some(err);
                return Err(err.into());
            }
        };

        store.set_city(city.as_str())?;
        Ok(Route::Weather)
    }

    pub fn render(&self) -> Vec<String> {
        let mut lines = vec![TITLE.to_string()];
        if let Some(err) = self.error {
            lines.push(err.to_string());
        }
        lines
    }
}
