use crate::sources::{Clock, RandomSource};
use chrono::{Duration, NaiveDate};
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

pub const FORECAST_DAYS: i64 = 5;
pub const MIN_TEMPERATURE_C: i32 = -20;
pub const MAX_TEMPERATURE_C: i32 = 54;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Summary {
    Freezing,
    Bracing,
    Chilly,
    Cool,
    Mild,
    Warm,
    Balmy,
    Hot,
    Sweltering,
    Scorching,
}

impl Summary {
    pub const ALL: [Summary; 10] = [
        Summary::Freezing,
        Summary::Bracing,
        Summary::Chilly,
        Summary::Cool,
        Summary::Mild,
        Summary::Warm,
        Summary::Balmy,
        Summary::Hot,
        Summary::Sweltering,
        Summary::Scorching,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeatherForecast {
    pub date: NaiveDate,
    pub temperature_c: i32,
    pub summary: Summary,
}

impl WeatherForecast {
    /// Fahrenheit is derived from Celsius and truncated toward zero.
    pub fn temperature_f(&self) -> i32 {
        32 + (self.temperature_c as f64 / 0.5556) as i32
    }
}

impl Serialize for WeatherForecast {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("WeatherForecast", 4)?;
        state.serialize_field("date", &self.date)?;
        state.serialize_field("temperatureC", &self.temperature_c)?;
        state.serialize_field("temperatureF", &self.temperature_f())?;
        state.serialize_field("summary", &self.summary)?;
        state.end()
    }
}

/// Creates one forecast per day for the days following today, starting
/// tomorrow.
pub fn generate_forecasts(clock: &dyn Clock, random: &dyn RandomSource) -> Vec<WeatherForecast> {
    let today = clock.now().date();
    (1..=FORECAST_DAYS)
        .map(|offset| {
            let temperature_c = random.draw_int(MIN_TEMPERATURE_C..=MAX_TEMPERATURE_C);
            let index = random.draw_int(0..=(Summary::ALL.len() - 1) as i32);
            WeatherForecast {
                date: today + Duration::days(offset),
                temperature_c,
                summary: Summary::ALL[index as usize],
            }
        })
        .collect()
}
