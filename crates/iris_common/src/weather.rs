//! Weather provider - current conditions over an OpenWeatherMap-style API
//!
//! Trait interface with a real blocking HTTP implementation and a fake
//! for tests. Failures are typed; the router decides what the user sees.

use serde::Deserialize;
use std::sync::Mutex;
use std::time::Duration;
use thiserror::Error;

/// Short timeout for weather lookups; the session blocks while waiting
pub const WEATHER_TIMEOUT_SECS: u64 = 5;

const DEFAULT_ENDPOINT: &str = "http://api.openweathermap.org/data/2.5/weather";

/// Weather lookup errors
#[derive(Debug, Clone, Error)]
pub enum WeatherError {
    #[error("HTTP error: {0}")]
    Http(String),

    #[error("request timeout after {0} seconds")]
    Timeout(u64),

    #[error("weather API returned status {0}")]
    BadStatus(u16),

    #[error("invalid response payload: {0}")]
    InvalidPayload(String),
}

/// Current conditions for one city
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    pub description: String,
    pub temp_c: f64,
    pub feels_like_c: f64,
    pub humidity: u8,
}

/// Weather backend interface; swap in `FakeWeatherProvider` for tests
pub trait WeatherProvider: Send + Sync {
    fn current(&self, city: &str) -> Result<WeatherReport, WeatherError>;
}

/// Weather client configuration
#[derive(Debug, Clone)]
pub struct WeatherConfig {
    pub api_key: String,
    pub endpoint: String,
    pub timeout_secs: u64,
}

impl WeatherConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: WEATHER_TIMEOUT_SECS,
        }
    }
}

/// Real weather client over blocking HTTP
pub struct OpenWeatherClient {
    config: WeatherConfig,
    client: reqwest::blocking::Client,
}

impl OpenWeatherClient {
    pub fn new(config: WeatherConfig) -> anyhow::Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to create HTTP client: {}", e))?;

        Ok(Self { config, client })
    }
}

/// Response shape consumed from the weather API; everything else is ignored
#[derive(Debug, Deserialize)]
struct ApiResponse {
    weather: Vec<ApiCondition>,
    main: ApiMain,
}

#[derive(Debug, Deserialize)]
struct ApiCondition {
    description: String,
}

#[derive(Debug, Deserialize)]
struct ApiMain {
    temp: f64,
    feels_like: f64,
    humidity: u8,
}

impl WeatherProvider for OpenWeatherClient {
    fn current(&self, city: &str) -> Result<WeatherReport, WeatherError> {
        let response = self
            .client
            .get(&self.config.endpoint)
            .query(&[
                ("q", city),
                ("appid", self.config.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .map_err(|e| {
                if e.is_timeout() {
                    WeatherError::Timeout(self.config.timeout_secs)
                } else {
                    WeatherError::Http(format!("Request failed: {}", e))
                }
            })?;

        if !response.status().is_success() {
            return Err(WeatherError::BadStatus(response.status().as_u16()));
        }

        let payload: ApiResponse = response
            .json()
            .map_err(|e| WeatherError::InvalidPayload(format!("Failed to parse response: {}", e)))?;

        let condition = payload
            .weather
            .first()
            .ok_or_else(|| WeatherError::InvalidPayload("no weather conditions in response".to_string()))?;

        Ok(WeatherReport {
            description: condition.description.clone(),
            temp_c: payload.main.temp,
            feels_like_c: payload.main.feels_like,
            humidity: payload.main.humidity,
        })
    }
}

/// Fake weather provider for tests: scripted results, recorded cities
pub struct FakeWeatherProvider {
    responses: Mutex<Vec<Result<WeatherReport, WeatherError>>>,
    requests: Mutex<Vec<String>>,
}

impl FakeWeatherProvider {
    /// Create a fake provider with pre-defined responses
    pub fn new(responses: Vec<Result<WeatherReport, WeatherError>>) -> Self {
        Self {
            responses: Mutex::new(responses),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Fake that always returns the same report
    pub fn always_report(report: WeatherReport) -> Self {
        Self::new(vec![Ok(report)])
    }

    /// Fake that always returns an error
    pub fn always_error(error: WeatherError) -> Self {
        Self::new(vec![Err(error)])
    }

    /// Cities requested so far, in call order
    pub fn requested_cities(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

impl WeatherProvider for FakeWeatherProvider {
    fn current(&self, city: &str) -> Result<WeatherReport, WeatherError> {
        self.requests.lock().unwrap().push(city.to_string());

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Err(WeatherError::Http("no scripted response".to_string()));
        }

        if responses.len() == 1 {
            // Keep returning the same response
            responses[0].clone()
        } else {
            responses.remove(0)
        }
    }
}
