use crate::error::InputError;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

pub const AGE_RANGE: RangeInclusive<u32> = 10..=100;
pub const BMI_RANGE: RangeInclusive<f64> = 15.0..=40.0;
/// Minutes.
pub const DURATION_RANGE: RangeInclusive<f64> = 0.0..=360.0;
pub const HEART_RATE_RANGE: RangeInclusive<f64> = 60.0..=130.0;
/// Degrees Celsius.
pub const BODY_TEMP_RANGE: RangeInclusive<f64> = 36.0..=42.0;
pub const SLEEP_TIME_RANGE: RangeInclusive<f64> = 0.0..=12.0;
/// Litres.
pub const HYDRATION_RANGE: RangeInclusive<f64> = 0.0..=8.0;

pub const LOW_SLEEP_HOURS: f64 = 6.0;
pub const LOW_HYDRATION_LITRES: f64 = 3.0;

pub const LOW_SLEEP_WARNING: &str =
    "Your sleep time is low. Consider getting more rest to maintain a healthy lifestyle.";
pub const LOW_HYDRATION_WARNING: &str = "Your water intake is low. Please stay hydrated!";

/// Feature column names of a query row, in row order.
pub const QUERY_COLUMNS: [&str; 8] = [
    "Age",
    "BMI",
    "Duration",
    "Heart_Rate",
    "Body_Temp",
    "Sleep_Time",
    "Water_Hydrate_Level",
    "Gender_male",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

/// Parameters as the page submits them. Omitted fields take the slider
/// defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RawInput {
    pub age: u32,
    pub bmi: f64,
    pub duration: f64,
    pub heart_rate: f64,
    pub body_temp: f64,
    pub sleep_time: f64,
    pub water_hydrate_level: f64,
    pub gender: Gender,
}

impl Default for RawInput {
    fn default() -> Self {
        Self {
            age: 30,
            bmi: 20.0,
            duration: 15.0,
            heart_rate: 80.0,
            body_temp: 38.0,
            sleep_time: 6.0,
            water_hydrate_level: 5.0,
            gender: Gender::Male,
        }
    }
}

/// A validated single-row feature vector.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryInput {
    pub age: u32,
    pub bmi: f64,
    pub duration: f64,
    pub heart_rate: f64,
    pub body_temp: f64,
    pub sleep_time: f64,
    pub water_hydrate_level: f64,
    pub gender: Gender,
}

impl QueryInput {
    pub fn gender_male(&self) -> f64 {
        match self.gender {
            Gender::Male => 1.0,
            Gender::Female => 0.0,
        }
    }

    pub fn feature(&self, column: &str) -> Option<f64> {
        let value = match column {
            "Age" => f64::from(self.age),
            "BMI" => self.bmi,
            "Duration" => self.duration,
            "Heart_Rate" => self.heart_rate,
            "Body_Temp" => self.body_temp,
            "Sleep_Time" => self.sleep_time,
            "Water_Hydrate_Level" => self.water_hydrate_level,
            "Gender_male" => self.gender_male(),
            _ => return None,
        };
        Some(value)
    }

    /// Reindexes the row onto `columns`; unknown columns are filled with zero.
    pub fn aligned_to(&self, columns: &[&str]) -> Vec<f64> {
        columns
            .iter()
            .map(|c| self.feature(c).unwrap_or(0.0))
            .collect()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CollectedInput {
    pub query: QueryInput,
    pub warnings: Vec<String>,
}

fn check_range(field: &'static str, value: f64, range: &RangeInclusive<f64>) -> Result<(), InputError> {
    if range.contains(&value) {
        return Ok(());
    }
    Err(InputError::OutOfRange {
        field,
        value,
        min: *range.start(),
        max: *range.end(),
    })
}

/// Validates the raw parameters against the slider bounds. Any value outside
/// its bound aborts the flow; the age is checked first.
pub fn collect(raw: &RawInput) -> Result<CollectedInput, InputError> {
    if !AGE_RANGE.contains(&raw.age) {
        return Err(InputError::AgeOutOfRange(raw.age));
    }
    check_range("BMI", raw.bmi, &BMI_RANGE)?;
    check_range("duration", raw.duration, &DURATION_RANGE)?;
    check_range("heart rate", raw.heart_rate, &HEART_RATE_RANGE)?;
    check_range("body temperature", raw.body_temp, &BODY_TEMP_RANGE)?;
    check_range("sleep time", raw.sleep_time, &SLEEP_TIME_RANGE)?;
    check_range("water hydrate level", raw.water_hydrate_level, &HYDRATION_RANGE)?;

    let mut warnings = Vec::new();
    if raw.sleep_time < LOW_SLEEP_HOURS {
        warnings.push(LOW_SLEEP_WARNING.to_string());
    }
    if raw.water_hydrate_level < LOW_HYDRATION_LITRES {
        warnings.push(LOW_HYDRATION_WARNING.to_string());
    }

    Ok(CollectedInput {
        query: QueryInput {
            age: raw.age,
            bmi: raw.bmi,
            duration: raw.duration,
            heart_rate: raw.heart_rate,
            body_temp: raw.body_temp,
            sleep_time: raw.sleep_time,
            water_hydrate_level: raw.water_hydrate_level,
            gender: raw.gender,
        },
        warnings,
    })
}
