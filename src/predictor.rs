use crate::config::{DataConfig, ModelConfig};
use crate::data::{self, round2, CalorieDataset, ExerciseSample};
use crate::error::PredictorError;
use crate::forest::RandomForestParams;
use crate::input::{CollectedInput, QueryInput};
use linfa::prelude::*;
use ndarray::{Array1, Array2};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info};

pub type Result<T> = std::result::Result<T, PredictorError>;

/// Share of the population strictly below the query, per measure, as whole
/// percentages. `None` when there is no population to compare against.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PercentileRanks {
    pub older_than: Option<u32>,
    pub longer_duration_than: Option<u32>,
    pub higher_heart_rate_than: Option<u32>,
    pub higher_body_temp_than: Option<u32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PredictionReport {
    pub query: QueryInput,
    pub warnings: Vec<String>,
    /// Rounded to two decimals for display.
    pub calories: f64,
    pub raw_calories: f64,
    pub similar: Vec<ExerciseSample>,
    pub percentiles: PercentileRanks,
    pub train_rows: usize,
    pub test_rows: usize,
    /// Mean absolute error on the held-out split, when it is non-empty.
    pub test_mae: Option<f64>,
}

pub fn percentile_below<I>(population: I, value: f64) -> Option<u32>
where
    I: IntoIterator<Item = f64>,
{
    let (below, total) = population
        .into_iter()
        .fold((0usize, 0usize), |(below, total), v| {
            (below + usize::from(v < value), total + 1)
        });

    if total == 0 {
        return None;
    }
    let fraction = round2(below as f64 / total as f64);
    Some((fraction * 100.0).round() as u32)
}

pub fn percentile_ranks(history: &[ExerciseSample], query: &QueryInput) -> PercentileRanks {
    PercentileRanks {
        older_than: percentile_below(history.iter().map(|s| s.age), f64::from(query.age)),
        longer_duration_than: percentile_below(history.iter().map(|s| s.duration), query.duration),
        higher_heart_rate_than: percentile_below(
            history.iter().map(|s| s.heart_rate),
            query.heart_rate,
        ),
        higher_body_temp_than: percentile_below(history.iter().map(|s| s.body_temp), query.body_temp),
    }
}

/// Up to `limit` random rows whose calories lie within `window` of
/// `prediction`. Fewer matches than `limit` returns all of them.
pub fn similar_results<'a, R: Rng + ?Sized>(
    history: &'a [ExerciseSample],
    prediction: f64,
    window: f64,
    limit: usize,
    rng: &mut R,
) -> Vec<&'a ExerciseSample> {
    let (low, high) = (prediction - window, prediction + window);
    let matches: Vec<&ExerciseSample> = history
        .iter()
        .filter(|s| s.calories >= low && s.calories <= high)
        .collect();

    matches.choose_multiple(rng, limit).copied().collect()
}

pub fn mean_absolute_error(predictions: &Array1<f64>, targets: &Array1<f64>) -> f64 {
    predictions
        .iter()
        .zip(targets.iter())
        .map(|(p, t)| (p - t).abs())
        .sum::<f64>()
        / targets.len() as f64
}

/// Reindexes a split's records onto `columns`, filling absent ones with zero.
fn align_records(dataset: &CalorieDataset, columns: &[String]) -> Array2<f64> {
    let names = dataset.feature_names();
    let records = dataset.records();

    let mut aligned = Array2::zeros((records.nrows(), columns.len()));
    for (target, column) in columns.iter().enumerate() {
        if let Some(source) = names.iter().position(|n| n == column) {
            aligned.column_mut(target).assign(&records.column(source));
        }
    }
    aligned
}

/// Retrains the forest from the CSV files on every call; nothing is cached.
#[derive(Debug, Clone)]
pub struct Predictor {
    calories_file: PathBuf,
    exercise_file: PathBuf,
    model: ModelConfig,
}

impl Predictor {
    pub fn new(data: &DataConfig, model: &ModelConfig) -> Self {
        Self {
            calories_file: data.calories_file.clone(),
            exercise_file: data.exercise_file.clone(),
            model: model.clone(),
        }
    }

    pub fn forest_params(&self) -> RandomForestParams {
        let params = RandomForestParams::new()
            .n_trees(self.model.n_trees)
            .max_depth(self.model.max_depth)
            .max_features(self.model.max_features);

        match self.model.forest_seed {
            Some(seed) => params.seed(seed),
            None => params,
        }
    }

    pub fn load_history(&self) -> Result<Vec<ExerciseSample>> {
        data::load_history(&self.calories_file, &self.exercise_file)
    }

    pub fn predict(&self, input: &CollectedInput) -> Result<PredictionReport> {
        let history = self.load_history()?;
        self.predict_with_history(input, &history)
    }

    pub fn predict_with_history(
        &self,
        input: &CollectedInput,
        history: &[ExerciseSample],
    ) -> Result<PredictionReport> {
        if history.is_empty() {
            return Err(PredictorError::NotEnoughSamples(
                "no historical rows left after joining the datasets".into(),
            ));
        }

        let started = Instant::now();
        let (train, test) = data::train_test_split(history, self.model.test_size, self.model.seed);
        if train.is_empty() {
            return Err(PredictorError::NotEnoughSamples(format!(
                "{} historical rows leave an empty training split",
                history.len()
            )));
        }

        let train_set = data::to_dataset(&train)?;
        let columns = train_set.feature_names();
        let model = self.forest_params().fit(&train_set)?;

        let test_mae = if test.is_empty() {
            None
        } else {
            let test_set = data::to_dataset(&test)?;
            let test_records = align_records(&test_set, &columns);
            let test_predictions: Array1<f64> = model.predict(&test_records);
            Some(mean_absolute_error(&test_predictions, test_set.targets()))
        };

        let column_refs: Vec<&str> = columns.iter().map(String::as_str).collect();
        let row = input.query.aligned_to(&column_refs);
        let query_records = Array2::from_shape_vec((1, column_refs.len()), row)?;
        let prediction: Array1<f64> = model.predict(&query_records);
        let raw_calories = prediction[0];

        let mut rng = rand::thread_rng();
        let similar = similar_results(
            history,
            raw_calories,
            self.model.window,
            self.model.similar_samples,
            &mut rng,
        )
        .into_iter()
        .cloned()
        .collect::<Vec<_>>();

        debug!("Training columns: {:?}", column_refs);
        info!(
            "Predicted {:.2} kcal from {} training rows in {:?} (test MAE {:?}, {} similar rows)",
            raw_calories,
            train.len(),
            started.elapsed(),
            test_mae.map(round2),
            similar.len()
        );

        Ok(PredictionReport {
            query: input.query.clone(),
            warnings: input.warnings.clone(),
            calories: round2(raw_calories),
            raw_calories,
            similar,
            percentiles: percentile_ranks(history, &input.query),
            train_rows: train.len(),
            test_rows: test.len(),
            test_mae,
        })
    }
}
