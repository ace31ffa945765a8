//! Drives the core screens in a terminal.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use inquire::{Confirm, InquireError, Password, PasswordDisplayMode, Text};
use skycast_core::{
    Config, FileStore, HomeScreen, Route, SubmitError, WeatherScreen, WeatherView,
    provider_from_config,
    screen::{home::PLACEHOLDER, home::SUBMIT_LABEL, weather::BACK_LINK},
};
use tracing::debug;

#[derive(Debug)]
pub struct App {
    config_path: PathBuf,
    store: FileStore,
}

impl App {
    pub fn new(config_path: PathBuf, store: FileStore) -> Self {
        Self { config_path, store }
    }

    /// Save the API key, prompting for it if not given.
    pub fn configure(&self, api_key: Option<String>) -> Result<()> {
        let mut config = Config::load_from(&self.config_path)?;

        let api_key = match api_key {
            Some(key) => key,
            None => Password::new("OpenWeather API key:")
                .without_confirmation()
                .with_display_mode(PasswordDisplayMode::Masked)
                .prompt()
                .context("Failed to read API key")?,
        };

        let api_key = api_key.trim();
        if api_key.is_empty() {
            bail!("API key must not be empty");
        }

        config.set_api_key(api_key.to_string());
        config.save_to(&self.config_path)?;

        println!("Saved configuration to {}", self.config_path.display());
        Ok(())
    }

    /// Submit `city` on the home screen without prompting, then follow the
    /// navigation.
    pub async fn submit_city(&mut self, city: &str) -> Result<()> {
        let mut screen = HomeScreen::new();
        screen.edit(city);

        match screen.submit(&mut self.store) {
            Ok(route) => self.navigate(route).await,
            Err(SubmitError::Invalid(err)) => Err(err.into()),
            Err(SubmitError::Storage(err)) => Err(err),
        }
    }

    /// Show screens until one of them stops navigating.
    pub async fn navigate(&mut self, mut route: Route) -> Result<()> {
        loop {
            debug!(%route, "navigating");
            let next = match route {
                Route::Home => self.home()?,
                Route::Weather => self.weather().await?,
            };

            match next {
                Some(next) => route = next,
                None => return Ok(()),
            }
        }
    }

    fn home(&mut self) -> Result<Option<Route>> {
        let mut screen = HomeScreen::new();
        print_lines(&screen.render());

        loop {
            let prompt = Text::new("City:")
                .with_placeholder(PLACEHOLDER)
                .with_help_message(&format!("Enter to {SUBMIT_LABEL}, Esc to quit"))
                .prompt();

            let Some(text) = answered(prompt)
                .context("Cannot prompt for a city here; pass it with `skycast home --city <NAME>`")?
            else {
                return Ok(None);
            };

            screen.edit(text);
            match screen.submit(&mut self.store) {
                Ok(route) => return Ok(Some(route)),
                Err(SubmitError::Invalid(err)) => println!("{err}"),
                Err(SubmitError::Storage(err)) => return Err(err),
            }
        }
    }

    async fn weather(&mut self) -> Result<Option<Route>> {
        match self.show_weather().await? {
            Some(_) => go_back(),
            None => Ok(None),
        }
    }

    /// Mount the weather screen, fetch until the stored city settles, and
    /// print each state. `None` if the user left before a response arrived.
    async fn show_weather(&mut self) -> Result<Option<WeatherScreen>> {
        let mut screen = WeatherScreen::mount(&self.store)?;
        if screen.view() == WeatherView::NoCity {
            print_lines(&screen.render());
            return Ok(Some(screen));
        }

        let config = Config::load_from(&self.config_path)?;
        let provider = provider_from_config(&config)?;

        // One fetch per city; a city written by someone else meanwhile
        // triggers another.
        while let Some(ticket) = screen.begin_fetch() {
            print_lines(&screen.render());

            let city = ticket.city().clone();
            let result = tokio::select! {
                result = provider.current(&city) => Some(result),
                _ = tokio::signal::ctrl_c() => None,
            };

            let Some(result) = result else {
                screen.unmount();
                debug!(%city, "left weather screen before the response arrived");
                return Ok(None);
            };

            screen.complete(ticket, result);
            screen.sync_city(&self.store)?;
        }

        print_lines(&screen.render());
        Ok(Some(screen))
    }
}

fn go_back() -> Result<Option<Route>> {
    let prompt = Confirm::new(&format!("{BACK_LINK} to Home?"))
        .with_default(false)
        .prompt();

    match prompt {
        Ok(true) => Ok(Some(Route::Home)),
        Ok(false)
        | Err(
            InquireError::NotTTY
            | InquireError::OperationCanceled
            | InquireError::OperationInterrupted,
        ) => Ok(None),
        Err(err) => Err(err).context("Failed to read answer"),
    }
}

/// `None` when the user backed out of the prompt.
fn answered<T>(prompt: Result<T, InquireError>) -> Result<Option<T>, InquireError> {
    match prompt {
        Ok(value) => Ok(Some(value)),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(err) => Err(err),
    }
}

fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{line}");
    }
}
