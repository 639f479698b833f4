//! HTTP-level tests for the Open-Meteo geocoding and forecast clients

use dagens_feeds::{
    ForecastClient, ForecastSource, GeocodeQuery, Geocoder, GeocodingClient, HttpSettings,
};
use dagens_types::Coordinates;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_geocode_sends_fixed_params() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .and(query_param("name", "Tromsø"))
        .and(query_param("count", "10"))
        .and(query_param("language", "no"))
        .and(query_param("format", "json"))
        .and(query_param("countryCode", "NO"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{
                "name": "Tromsø",
                "latitude": 69.6496,
                "longitude": 18.956,
                "admin1": "Troms",
                "country": "Norge"
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = GeocodingClient::new(&HttpSettings::default(), GeocodeQuery::default())
        .unwrap()
        .with_base_url(format!("{}/v1/search", server.uri()));

    let places = client.search("  Tromsø ").await.unwrap();
    assert_eq!(places.len(), 1);
    assert_eq!(places[0].name, "Tromsø");
}

#[tokio::test]
async fn test_geocode_without_results_field_is_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"generationtime_ms": 0.5})))
        .mount(&server)
        .await;

    let query = GeocodeQuery {
        country_code: None,
        ..GeocodeQuery::default()
    };
    let client = GeocodingClient::new(&HttpSettings::default(), query)
        .unwrap()
        .with_base_url(server.uri());

    assert!(client.search("Atlantis").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_geocode_rejects_blank_name_without_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = GeocodingClient::new(&HttpSettings::default(), GeocodeQuery::default())
        .unwrap()
        .with_base_url(server.uri());

    assert!(client.search("   ").await.is_err());
}

#[tokio::test]
async fn test_forecast_parses_current_and_daily() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("latitude", "59.9139"))
        .and(query_param("longitude", "10.7522"))
        .and(query_param("timezone", "Europe/Oslo"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "current": {
                "time": "2024-04-09T12:00",
                "temperature_2m": 7.3,
                "apparent_temperature": 4.1,
                "weather_code": 3,
                "wind_speed_10m": 5.2
            },
            "daily": {
                "temperature_2m_max": [9.0],
                "temperature_2m_min": [1.5],
                "precipitation_probability_max": [40]
            }
        })))
        .mount(&server)
        .await;

    let client = ForecastClient::new(&HttpSettings::default(), "Europe/Oslo")
        .unwrap()
        .with_base_url(server.uri());

    let forecast = client
        .forecast(Coordinates::new(59.9139, 10.7522).unwrap())
        .await
        .unwrap();

    assert_eq!(forecast.current.unwrap().weather_code, Some(3));
    assert_eq!(forecast.daily.unwrap().precipitation_probability_max, vec![Some(40.0)]);
}

#[tokio::test]
async fn test_forecast_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = ForecastClient::new(&HttpSettings::default(), "auto")
        .unwrap()
        .with_base_url(server.uri());

    let err = client
        .forecast(Coordinates::new(0.0, 0.0).unwrap())
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), Some(500));
}
