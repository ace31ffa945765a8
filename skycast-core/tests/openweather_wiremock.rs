//! OpenWeather client and weather screen against a mock HTTP server.

use std::time::Duration;

use skycast_core::{
    CityName, FetchError, MemoryStore, OpenWeatherProvider, WeatherProvider, WeatherScreen,
    WeatherView,
};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

fn london_payload() -> serde_json::Value {
    serde_json::json!({
        "coord": {"lon": -0.1257, "lat": 51.5085},
        "weather": [{"id": 803, "main": "Clouds", "description": "broken clouds", "icon": "04d"}],
        "base": "stations",
        "main": {
            "temp": 15,
            "feels_like": 14.3,
            "temp_min": 13.9,
            "temp_max": 16.1,
            "pressure": 1012,
            "humidity": 77
        },
        "visibility": 10000,
        "wind": {"speed": 5.14, "deg": 240},
        "clouds": {"all": 75},
        "dt": 1_700_000_000,
        "sys": {"country": "GB"},
        "timezone": 0,
        "id": 2_643_743,
        "name": "London",
        "cod": 200
    })
}

fn client(server: &MockServer) -> OpenWeatherProvider {
    #[allow(clippy::expect_used)]
    OpenWeatherProvider::new("TEST_KEY".into(), server.uri(), Duration::from_secs(5))
        .expect("Failed to create client")
}

fn city(name: &str) -> CityName {
    CityName::parse(name).unwrap()
}

#[tokio::test]
async fn sends_city_key_and_metric_units() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("q", "London"))
        .and(query_param("appid", "TEST_KEY"))
        .and(query_param("units", "metric"))
        .respond_with(ResponseTemplate::new(200).set_body_json(london_payload()))
        .expect(1)
        .mount(&server)
        .await;

    let reading = client(&server).current(&city("London")).await.unwrap();

    assert_eq!(reading.location_name, "London");
    assert_eq!(reading.condition, "broken clouds");
    assert!((reading.temperature_c - 15.0).abs() < f64::EPSILON);
    assert_eq!(reading.humidity_pct, 77);
    assert!((reading.wind_speed_mps - 5.14).abs() < f64::EPSILON);
}

#[tokio::test]
async fn city_with_spaces_is_query_encoded() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("q", "New York"))
        .respond_with(ResponseTemplate::new(200).set_body_json(london_payload()))
        .expect(1)
        .mount(&server)
        .await;

    assert!(client(&server).current(&city("New York")).await.is_ok());
}

#[tokio::test]
async fn not_found_status_is_reported() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(serde_json::json!({"cod": "404", "message": "city not found"})),
        )
        .mount(&server)
        .await;

    let err = client(&server).current(&city("Nowhere")).await.unwrap_err();
    match err {
        FetchError::Status { status, body } => {
            assert_eq!(status, 404);
            assert!(body.contains("city not found"));
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_json_is_a_parse_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = client(&server).current(&city("London")).await.unwrap_err();
    assert!(matches!(err, FetchError::Parse(_)), "got {err:?}");
}

#[tokio::test]
async fn empty_weather_array_is_a_shape_error() {
    let server = MockServer::start().await;
    let mut payload = london_payload();
    payload["weather"] = serde_json::json!([]);

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_json(payload))
        .mount(&server)
        .await;

    let err = client(&server).current(&city("London")).await.unwrap_err();
    assert!(matches!(err, FetchError::Shape(_)), "got {err:?}");
}

#[tokio::test]
async fn slow_provider_times_out() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(london_payload())
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let provider =
        OpenWeatherProvider::new("TEST_KEY".into(), server.uri(), Duration::from_millis(200))
            .unwrap();
    let err = provider.current(&city("London")).await.unwrap_err();
    assert!(matches!(err, FetchError::Transport(_)), "got {err:?}");
}

#[tokio::test]
async fn weather_screen_renders_loaded_reading() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_json(london_payload()))
        .mount(&server)
        .await;

    let mut screen = WeatherScreen::mount(&MemoryStore::with_city("London")).unwrap();
    assert!(screen.load(&client(&server)).await);

    assert!(matches!(screen.view(), WeatherView::Loaded(_)));
    let lines = screen.render();
    assert!(lines.contains(&"Temperature: 15°C / 59.0°F".to_string()));
    assert!(lines.contains(&"Wind Speed: 5.14 m/s".to_string()));
}

#[tokio::test]
async fn weather_screen_collapses_failures_to_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .mount(&server)
        .await;

    let mut screen = WeatherScreen::mount(&MemoryStore::with_city("Nowhere")).unwrap();
    assert!(screen.load(&client(&server)).await);

    assert_eq!(screen.view(), WeatherView::NotFound);
    assert_eq!(screen.render(), vec!["Weather data not found.".to_string()]);
}

#[tokio::test]
async fn weather_screen_without_city_never_calls_provider() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(london_payload()))
        .expect(0)
        .mount(&server)
        .await;

    let mut screen = WeatherScreen::mount(&MemoryStore::new()).unwrap();
    assert!(!screen.load(&client(&server)).await);
    assert_eq!(screen.view(), WeatherView::NoCity);
}
