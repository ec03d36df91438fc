use chrono::NaiveDate;
use fitness_tracker::config::{DataConfig, ModelConfig};
use fitness_tracker::error::PredictorError;
use fitness_tracker::input::{collect, Gender, RawInput};
use fitness_tracker::predictor::Predictor;
use fitness_tracker::users::{hash_secret, AttendanceOutcome, RegisterOutcome, SecurityQuestion, UserStore};
use std::fs;
use std::path::PathBuf;

fn temp_path(stem: &str) -> PathBuf {
    std::env::temp_dir().join(format!("{}_{}.csv", stem, uuid::Uuid::new_v4()))
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Writes matching exercise/calories files with `n` rows following a
/// roughly linear calorie curve.
fn write_history(n: u64) -> DataConfig {
    let calories_file = temp_path("calories");
    let exercise_file = temp_path("exercise");

    let mut calories = String::from("User_ID,Calories\n");
    let mut exercise = String::from("User_ID,Gender,Age,Height,Weight,Duration,Heart_Rate,Body_Temp\n");
    for i in 0..n {
        let id = 14_000_000 + i;
        let gender = if i % 2 == 0 { "male" } else { "female" };
        let age = 20 + i % 60;
        let duration = 1 + i % 30;
        let heart_rate = 75 + duration * 2;
        let body_temp = 37.5 + duration as f64 / 10.0;
        let burned = duration as f64 * 6.0 + age as f64 * 0.3;
        calories.push_str(&format!("{id},{burned:.1}\n"));
        exercise.push_str(&format!(
            "{id},{gender},{age},{height}.0,{weight}.0,{duration}.0,{heart_rate}.0,{body_temp:.1}\n",
            height = 160 + i % 30,
            weight = 55 + i % 40,
        ));
    }

    fs::write(&calories_file, calories).unwrap();
    fs::write(&exercise_file, exercise).unwrap();
    DataConfig {
        calories_file,
        exercise_file,
    }
}

fn cleanup(data: &DataConfig) {
    fs::remove_file(&data.calories_file).ok();
    fs::remove_file(&data.exercise_file).ok();
}

#[test]
fn test_account_lifecycle_survives_reopen() {
    let path = temp_path("users");
    let mut store = UserStore::open(&path).unwrap();

    let outcome = store
        .register(
            "alice",
            "secret",
            "Alice",
            date(1995, 4, 2),
            SecurityQuestion::FavoriteFood,
            "pizza",
        )
        .unwrap();
    assert_eq!(outcome, RegisterOutcome::Created);
    assert_eq!(
        store.mark_attendance("alice", date(2024, 3, 1)).unwrap(),
        AttendanceOutcome::Marked
    );

    let mut reopened = UserStore::open(&path).unwrap();
    assert_eq!(reopened.len(), 1);
    assert!(reopened.verify("alice", "secret"));
    let account = reopened.get("alice").unwrap();
    assert_eq!(account.password_hash, hash_secret("secret"));
    assert_ne!(account.security_answer_hash, "pizza");
    assert_eq!(account.last_attendance, Some(date(2024, 3, 1)));

    assert_eq!(
        reopened.mark_attendance("alice", date(2024, 3, 1)).unwrap(),
        AttendanceOutcome::AlreadyMarked
    );
    assert!(reopened
        .reset_password("alice", SecurityQuestion::FavoriteFood, "pizza", "new-secret")
        .unwrap());

    let last = UserStore::open(&path).unwrap();
    assert!(last.verify("alice", "new-secret"));
    assert!(!last.verify("alice", "secret"));

    fs::remove_file(path).ok();
}

#[test]
fn test_prediction_from_csv_files() {
    let data = write_history(300);
    let model = ModelConfig {
        n_trees: 25,
        forest_seed: Some(3),
        ..ModelConfig::default()
    };
    let predictor = Predictor::new(&data, &model);
    let input = collect(&RawInput {
        age: 40,
        duration: 20.0,
        heart_rate: 115.0,
        body_temp: 39.5,
        sleep_time: 5.0,
        water_hydrate_level: 2.0,
        gender: Gender::Female,
        ..RawInput::default()
    })
    .unwrap();

    let report = predictor.predict(&input).unwrap();
    assert_eq!(report.train_rows + report.test_rows, 300);
    assert_eq!(report.test_rows, 60);
    assert_eq!(report.warnings.len(), 2);
    // targets run from 12 to about 204 kcal
    assert!(report.raw_calories >= 12.0 && report.raw_calories <= 204.0);
    assert!(report.similar.len() <= 5);
    assert!(report
        .similar
        .iter()
        .all(|s| (s.calories - report.raw_calories).abs() <= 10.0));
    for rank in [
        report.percentiles.older_than,
        report.percentiles.longer_duration_than,
        report.percentiles.higher_heart_rate_than,
        report.percentiles.higher_body_temp_than,
    ] {
        assert!(rank.unwrap() <= 100);
    }

    cleanup(&data);
}

#[test]
fn test_seeded_forest_is_reproducible() {
    let data = write_history(120);
    let model = ModelConfig {
        n_trees: 15,
        forest_seed: Some(42),
        ..ModelConfig::default()
    };
    let predictor = Predictor::new(&data, &model);
    let input = collect(&RawInput::default()).unwrap();

    let first = predictor.predict(&input).unwrap();
    let second = predictor.predict(&input).unwrap();
    assert_eq!(first.raw_calories, second.raw_calories);
    assert_eq!(first.test_mae, second.test_mae);

    cleanup(&data);
}

#[test]
fn test_missing_dataset_is_reported() {
    let data = DataConfig {
        calories_file: temp_path("missing_calories"),
        exercise_file: temp_path("missing_exercise"),
    };
    let predictor = Predictor::new(&data, &ModelConfig::default());
    let input = collect(&RawInput::default()).unwrap();

    let err = predictor.predict(&input).unwrap_err();
    assert!(matches!(err, PredictorError::Csv(_) | PredictorError::Io(_)));
}
