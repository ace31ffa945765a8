use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use skycast_core::{Config, FileStore, Route};

use crate::app::App;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "skycast", version, about = "SkyCast - Know weather")]
pub struct Cli {
    /// Config file to use instead of the platform default.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Storage file holding the last submitted city.
    #[arg(long, global = true, value_name = "PATH")]
    pub storage: Option<PathBuf>,

    /// Print diagnostics to stderr (-v warnings, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key.
    Configure {
        /// Key to store; prompted for when absent.
        #[arg(long)]
        api_key: Option<String>,
    },

    /// Enter a city, then show its weather (the default).
    Home {
        /// Submit this city instead of prompting for one.
        #[arg(long)]
        city: Option<String>,
    },

    /// Show weather for the last submitted city.
    Weather,

    /// Open a screen by path, e.g. "/" or "/weather".
    Open {
        /// Route path.
        route: String,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let config_path = match self.config {
            Some(path) => path,
            None => Config::config_file_path()?,
        };

        let store = match self.storage {
            Some(path) => FileStore::new(path),
            None => FileStore::open_default()?,
        };

        let mut app = App::new(config_path, store);

        match self.command.unwrap_or(Command::Home { city: None }) {
            Command::Configure { api_key } => app.configure(api_key),
            Command::Home { city: Some(city) } => app.submit_city(&city).await,
            Command::Home { city: None } => app.navigate(Route::Home).await,
            Command::Weather => app.navigate(Route::Weather).await,
            Command::Open { route } => {
                let route: Route = route.parse().context("Cannot open route")?;
                app.navigate(route).await
            }
        }
    }
}
