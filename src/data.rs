use crate::error::PredictorError;
use crate::input::Gender;
use csv::Reader;
use linfa::DatasetBase;
use ndarray::{Array1, Array2};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

pub type Result<T> = std::result::Result<T, PredictorError>;

/// Training columns after one-hot encoding, in frame order.
pub const NUMERIC_COLUMNS: [&str; 5] = ["Age", "BMI", "Duration", "Heart_Rate", "Body_Temp"];
pub const GENDER_COLUMN: &str = "Gender_male";

/// Feature rows against calories burned.
pub type CalorieDataset = DatasetBase<Array2<f64>, Array1<f64>>;

#[derive(Debug, Deserialize)]
struct CalorieRecord {
    #[serde(rename = "User_ID")]
    user_id: u64,
    #[serde(rename = "Calories")]
    calories: f64,
}

#[derive(Debug, Deserialize)]
struct ExerciseRecord {
    #[serde(rename = "User_ID")]
    user_id: u64,
    #[serde(rename = "Gender")]
    gender: String,
    #[serde(rename = "Age")]
    age: f64,
    #[serde(rename = "Height")]
    height: f64,
    #[serde(rename = "Weight")]
    weight: f64,
    #[serde(rename = "Duration")]
    duration: f64,
    #[serde(rename = "Heart_Rate")]
    heart_rate: f64,
    #[serde(rename = "Body_Temp")]
    body_temp: f64,
}

/// One joined exercise/calories row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExerciseSample {
    pub user_id: u64,
    pub gender: Gender,
    pub age: f64,
    pub height: f64,
    pub weight: f64,
    pub duration: f64,
    pub heart_rate: f64,
    pub body_temp: f64,
    pub calories: f64,
    pub bmi: f64,
}

impl ExerciseSample {
    fn numeric(&self, column: &str) -> f64 {
        match column {
            "Age" => self.age,
            "BMI" => self.bmi,
            "Duration" => self.duration,
            "Heart_Rate" => self.heart_rate,
            "Body_Temp" => self.body_temp,
            _ => 0.0,
        }
    }
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Weight in kilograms over height in metres squared, to two decimals.
pub fn bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let metres = height_cm / 100.0;
    round2(weight_kg / (metres * metres))
}

fn parse_gender(raw: &str) -> Result<Gender> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "male" => Ok(Gender::Male),
        "female" => Ok(Gender::Female),
        _ => Err(PredictorError::UnknownGender(raw.to_string())),
    }
}

fn load_calories(path: &Path) -> Result<HashMap<u64, Vec<f64>>> {
    let mut rdr = Reader::from_path(path)?;
    let mut calories: HashMap<u64, Vec<f64>> = HashMap::new();

    for result in rdr.deserialize() {
        let record: CalorieRecord = result?;
        calories.entry(record.user_id).or_default().push(record.calories);
    }

    Ok(calories)
}

fn load_exercise(path: &Path) -> Result<Vec<ExerciseRecord>> {
    let mut rdr = Reader::from_path(path)?;
    let mut records = Vec::new();

    for result in rdr.deserialize() {
        let record: ExerciseRecord = result?;
        records.push(record);
    }

    Ok(records)
}

/// Inner join on `User_ID`, keeping exercise-file order. BMI is derived here.
fn join(exercise: Vec<ExerciseRecord>, calories: &HashMap<u64, Vec<f64>>) -> Result<Vec<ExerciseSample>> {
    let mut samples = Vec::with_capacity(exercise.len());

    for record in exercise {
        let Some(burned) = calories.get(&record.user_id) else {
            continue;
        };
        let gender = parse_gender(&record.gender)?;
        for &calories in burned {
            samples.push(ExerciseSample {
                user_id: record.user_id,
                gender,
                age: record.age,
                height: record.height,
                weight: record.weight,
                duration: record.duration,
                heart_rate: record.heart_rate,
                body_temp: record.body_temp,
                calories,
                bmi: bmi(record.weight, record.height),
            });
        }
    }

    Ok(samples)
}

pub fn load_history(calories_path: &Path, exercise_path: &Path) -> Result<Vec<ExerciseSample>> {
    let calories = load_calories(calories_path)?;
    let exercise = load_exercise(exercise_path)?;
    let exercise_rows = exercise.len();

    let samples = join(exercise, &calories)?;
    debug!(
        "Joined {} exercise rows with {} calorie ids into {} samples",
        exercise_rows,
        calories.len(),
        samples.len()
    );

    Ok(samples)
}

/// Shuffles row indices with a seeded RNG and holds out
/// `ceil(n * test_size)` rows as the test split.
pub fn train_test_split(
    samples: &[ExerciseSample],
    test_size: f64,
    seed: u64,
) -> (Vec<&ExerciseSample>, Vec<&ExerciseSample>) {
    let mut indices: Vec<usize> = (0..samples.len()).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    indices.shuffle(&mut rng);

    let n_test = ((samples.len() as f64) * test_size).ceil() as usize;
    let n_test = n_test.min(samples.len());
    let (test, train) = indices.split_at(n_test);

    (
        train.iter().map(|&i| &samples[i]).collect(),
        test.iter().map(|&i| &samples[i]).collect(),
    )
}

/// Builds the feature matrix for one split. Gender is one-hot encoded with
/// the first level dropped, so `Gender_male` only exists when the split
/// holds both genders.
pub fn to_dataset(samples: &[&ExerciseSample]) -> Result<CalorieDataset> {
    let has_male = samples.iter().any(|s| s.gender == Gender::Male);
    let has_female = samples.iter().any(|s| s.gender == Gender::Female);
    let encode_gender = has_male && has_female;

    let mut columns: Vec<&str> = NUMERIC_COLUMNS.to_vec();
    if encode_gender {
        columns.push(GENDER_COLUMN);
    }

    let mut flat = Vec::with_capacity(samples.len() * columns.len());
    for sample in samples {
        for column in &NUMERIC_COLUMNS {
            flat.push(sample.numeric(column));
        }
        if encode_gender {
            flat.push(if sample.gender == Gender::Male { 1.0 } else { 0.0 });
        }
    }

    let records = Array2::from_shape_vec((samples.len(), columns.len()), flat)?;
    let targets = Array1::from_iter(samples.iter().map(|s| s.calories));

    Ok(DatasetBase::new(records, targets).with_feature_names(columns))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn temp_csv(contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("fitness_data_{}.csv", uuid::Uuid::new_v4()));
        fs::write(&path, contents).unwrap();
        path
    }

    fn sample(gender: Gender, calories: f64) -> ExerciseSample {
        ExerciseSample {
            user_id: 1,
            gender,
            age: 30.0,
            height: 175.0,
            weight: 70.0,
            duration: 20.0,
            heart_rate: 100.0,
            body_temp: 40.0,
            calories,
            bmi: bmi(70.0, 175.0),
        }
    }

    #[test]
    fn test_bmi_derivation() {
        assert_eq!(bmi(70.0, 175.0), 22.86);
        assert_eq!(bmi(80.0, 200.0), 20.0);
    }

    #[test]
    fn test_join_on_user_id() {
        let calories = temp_csv("User_ID,Calories\n2,150.0\n1,35.0\n9,10.0\n");
        let exercise = temp_csv(
            "User_ID,Gender,Age,Height,Weight,Duration,Heart_Rate,Body_Temp\n\
             1,male,68,190.0,94.0,29.0,105.0,40.8\n\
             2,female,20,166.0,60.0,14.0,94.0,40.3\n\
             3,male,69,179.0,79.0,5.0,88.0,38.7\n",
        );

        let samples = load_history(&calories, &exercise).unwrap();
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0].user_id, 1);
        assert_eq!(samples[0].calories, 35.0);
        assert_eq!(samples[0].gender, Gender::Male);
        assert_eq!(samples[0].bmi, 26.04);
        assert_eq!(samples[1].user_id, 2);
        assert_eq!(samples[1].calories, 150.0);
        assert_eq!(samples[1].gender, Gender::Female);

        fs::remove_file(calories).ok();
        fs::remove_file(exercise).ok();
    }

    #[test]
    fn test_unknown_gender_is_rejected() {
        let calories = temp_csv("User_ID,Calories\n1,35.0\n");
        let exercise = temp_csv(
            "User_ID,Gender,Age,Height,Weight,Duration,Heart_Rate,Body_Temp\n\
             1,other,68,190.0,94.0,29.0,105.0,40.8\n",
        );

        let err = load_history(&calories, &exercise).unwrap_err();
        assert!(matches!(err, PredictorError::UnknownGender(g) if g == "other"));

        fs::remove_file(calories).ok();
        fs::remove_file(exercise).ok();
    }

    #[test]
    fn test_missing_column_propagates() {
        let calories = temp_csv("User_ID,Calories\n1,35.0\n");
        let exercise = temp_csv("User_ID,Gender,Age\n1,male,68\n");

        let err = load_history(&calories, &exercise).unwrap_err();
        assert!(matches!(err, PredictorError::Csv(_)));

        fs::remove_file(calories).ok();
        fs::remove_file(exercise).ok();
    }

    #[test]
    fn test_split_is_seeded_and_sized() {
        let samples: Vec<ExerciseSample> = (0..10)
            .map(|i| sample(Gender::Male, i as f64))
            .collect();

        let (train, test) = train_test_split(&samples, 0.2, 1);
        assert_eq!(train.len(), 8);
        assert_eq!(test.len(), 2);

        let (train_again, test_again) = train_test_split(&samples, 0.2, 1);
        assert_eq!(train, train_again);
        assert_eq!(test, test_again);

        let mut seen: Vec<f64> = train.iter().chain(test.iter()).map(|s| s.calories).collect();
        seen.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_eq!(seen, (0..10).map(|i| i as f64).collect::<Vec<_>>());
    }

    #[test]
    fn test_split_rounds_test_rows_up() {
        let samples: Vec<ExerciseSample> = (0..3).map(|i| sample(Gender::Male, i as f64)).collect();
        let (train, test) = train_test_split(&samples, 0.2, 1);
        assert_eq!(test.len(), 1);
        assert_eq!(train.len(), 2);
    }

    #[test]
    fn test_gender_dummy_drops_first_level() {
        let male = sample(Gender::Male, 100.0);
        let female = sample(Gender::Female, 80.0);

        let mixed = to_dataset(&[&male, &female]).unwrap();
        assert_eq!(mixed.records().ncols(), 6);
        assert_eq!(mixed.feature_names().last().map(String::as_str), Some(GENDER_COLUMN));
        assert_eq!(mixed.records()[[0, 5]], 1.0);
        assert_eq!(mixed.records()[[1, 5]], 0.0);
        assert_eq!(mixed.targets()[1], 80.0);

        let only_male = to_dataset(&[&male]).unwrap();
        assert_eq!(only_male.records().ncols(), 5);
        assert!(!only_male.feature_names().iter().any(|n| n == GENDER_COLUMN));
    }
}
