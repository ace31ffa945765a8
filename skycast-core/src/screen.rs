//! Screen state machines, independent of how they are drawn.

pub mod home;
pub mod weather;

pub use home::HomeScreen;
pub use weather::{FetchState, FetchTicket, WeatherScreen, WeatherView};
