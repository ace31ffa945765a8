use anyhow::anyhow;
use std::str::FromStr;

/// The two screens of the app, addressed by path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Route {
    #[default]
    Home,
    Weather,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Weather => "/weather",
        }
    }

    pub const fn all() -> &'static [Route] {
        &[Route::Home, Route::Weather]
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for Route {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "/" | "" => Ok(Route::Home),
            "/weather" | "/weather/" => Ok(Route::Weather),
            other => Err(anyhow!("Unknown route '{other}'. Supported routes: /, /weather.")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_path_roundtrip() {
        for route in Route::all() {
            let parsed: Route = route.path().parse().expect("roundtrip should succeed");
            assert_eq!(*route, parsed);
        }
    }

    #[test]
    fn trailing_slash_is_accepted() {
        assert_eq!("/weather/".parse::<Route>().unwrap(), Route::Weather);
    }

    #[test]
    fn unknown_route_error() {
        let err = "/forecast".parse::<Route>().unwrap_err();
        assert!(err.to_string().contains("Unknown route"));
    }
}
