//! Bagged CART regression trees.
//!
//! Each tree is grown on a bootstrap sample of the training rows. At every
//! node a random subset of `max_features` columns is searched for the
//! threshold that minimises the summed squared error of the two children;
//! if none of them can split the node the remaining columns are tried before
//! giving up. Leaves predict the mean target of their rows and the forest
//! predicts the mean over its trees.
//!
//! Per-node row lists are kept pre-sorted by every feature, so a split costs
//! one sweep per candidate column plus one stable partition per column.

use crate::error::PredictorError;
use linfa::prelude::*;
use ndarray::{Array1, Array2, ArrayView1};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::debug;

#[derive(Debug, Clone, PartialEq)]
pub struct RandomForestParams {
    n_trees: usize,
    max_depth: usize,
    max_features: usize,
    min_samples_split: usize,
    bootstrap: bool,
    seed: Option<u64>,
}

impl Default for RandomForestParams {
    fn default() -> Self {
        Self {
            n_trees: 100,
            max_depth: 6,
            max_features: 3,
            min_samples_split: 2,
            bootstrap: true,
            seed: None,
        }
    }
}

impl RandomForestParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn n_trees(mut self, n_trees: usize) -> Self {
        self.n_trees = n_trees;
        self
    }

    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn max_features(mut self, max_features: usize) -> Self {
        self.max_features = max_features;
        self
    }

    pub fn min_samples_split(mut self, min_samples_split: usize) -> Self {
        self.min_samples_split = min_samples_split;
        self
    }

    pub fn bootstrap(mut self, bootstrap: bool) -> Self {
        self.bootstrap = bootstrap;
        self
    }

    /// Fixes the forest's RNG. Unseeded forests draw from OS entropy.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    fn validate(&self) -> Result<(), PredictorError> {
        if self.n_trees == 0 {
            return Err(PredictorError::InvalidParams("n_trees must be at least 1".into()));
        }
        if self.max_depth == 0 {
            return Err(PredictorError::InvalidParams("max_depth must be at least 1".into()));
        }
        if self.max_features == 0 {
            return Err(PredictorError::InvalidParams("max_features must be at least 1".into()));
        }
        if self.min_samples_split < 2 {
            return Err(PredictorError::InvalidParams(
                "min_samples_split must be at least 2".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
enum Node {
    Leaf(f64),
    Split {
        feature: usize,
        threshold: f64,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    fn predict(&self, row: &ArrayView1<f64>) -> f64 {
        let mut node = self;
        loop {
            match node {
                Node::Leaf(value) => return *value,
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    node = if row[*feature] <= *threshold { left } else { right };
                }
            }
        }
    }

    fn depth(&self) -> usize {
        match self {
            Node::Leaf(_) => 0,
            Node::Split { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RandomForestRegressor {
    trees: Vec<Node>,
    n_features: usize,
}

impl RandomForestRegressor {
    pub fn n_trees(&self) -> usize {
        self.trees.len()
    }

    pub fn n_features(&self) -> usize {
        self.n_features
    }

    /// Deepest split chain across all trees.
    pub fn max_tree_depth(&self) -> usize {
        self.trees.iter().map(Node::depth).max().unwrap_or(0)
    }

    fn predict_row(&self, row: &ArrayView1<f64>) -> f64 {
        let total: f64 = self.trees.iter().map(|tree| tree.predict(row)).sum();
        total / self.trees.len() as f64
    }
}

struct Best {
    feature: usize,
    threshold: f64,
    score: f64,
}

struct TreeBuilder<'a> {
    x: &'a Array2<f64>,
    y: &'a Array1<f64>,
    params: &'a RandomForestParams,
    // scratch flags indexed by row, reused across nodes
    goes_left: Vec<bool>,
}

impl<'a> TreeBuilder<'a> {
    /// `sorted[f]` holds the node's rows (with bootstrap repeats) ordered by
    /// feature `f`.
    fn grow(&mut self, sorted: Vec<Vec<usize>>, depth: usize, rng: &mut StdRng) -> Node {
        let rows = &sorted[0];
        let n = rows.len() as f64;
        let sum: f64 = rows.iter().map(|&r| self.y[r]).sum();
        let mean = sum / n;

        let pure = rows.iter().all(|&r| (self.y[r] - mean).abs() <= f64::EPSILON);
        if depth >= self.params.max_depth || rows.len() < self.params.min_samples_split || pure {
            return Node::Leaf(mean);
        }

        let Some(best) = self.find_split(&sorted, sum, rng) else {
            return Node::Leaf(mean);
        };

        for &r in &sorted[best.feature] {
            self.goes_left[r] = self.x[[r, best.feature]] <= best.threshold;
        }
        let mut left = Vec::with_capacity(sorted.len());
        let mut right = Vec::with_capacity(sorted.len());
        for order in sorted {
            let (l, r): (Vec<usize>, Vec<usize>) =
                order.into_iter().partition(|&row| self.goes_left[row]);
            left.push(l);
            right.push(r);
        }

        Node::Split {
            feature: best.feature,
            threshold: best.threshold,
            left: Box::new(self.grow(left, depth + 1, rng)),
            right: Box::new(self.grow(right, depth + 1, rng)),
        }
    }

    fn find_split(&self, sorted: &[Vec<usize>], sum: f64, rng: &mut StdRng) -> Option<Best> {
        let mut features: Vec<usize> = (0..self.x.ncols()).collect();
        features.shuffle(rng);

        let mut best: Option<Best> = None;
        for (visited, &feature) in features.iter().enumerate() {
            if visited >= self.params.max_features && best.is_some() {
                break;
            }
            if let Some(candidate) = self.best_threshold(feature, &sorted[feature], sum) {
                if best.as_ref().map_or(true, |b| candidate.score > b.score) {
                    best = Some(candidate);
                }
            }
        }
        best
    }

    /// Maximises `sum_l^2 / n_l + sum_r^2 / n_r`, which is equivalent to
    /// minimising the children's summed squared error.
    fn best_threshold(&self, feature: usize, order: &[usize], sum: f64) -> Option<Best> {
        let n = order.len();
        let mut left_sum = 0.0;
        let mut best: Option<Best> = None;

        for i in 0..n - 1 {
            left_sum += self.y[order[i]];
            let here = self.x[[order[i], feature]];
            let next = self.x[[order[i + 1], feature]];
            if next <= here {
                continue;
            }

            let n_left = (i + 1) as f64;
            let n_right = (n - i - 1) as f64;
            let right_sum = sum - left_sum;
            let score = left_sum * left_sum / n_left + right_sum * right_sum / n_right;

            if best.as_ref().map_or(true, |b| score > b.score) {
                best = Some(Best {
                    feature,
                    threshold: here + (next - here) / 2.0,
                    score,
                });
            }
        }
        best
    }
}

impl Fit<Array2<f64>, Array1<f64>, PredictorError> for RandomForestParams {
    type Object = RandomForestRegressor;

    fn fit(
        &self,
        dataset: &DatasetBase<Array2<f64>, Array1<f64>>,
    ) -> Result<Self::Object, PredictorError> {
        self.validate()?;

        let x = dataset.records();
        let y = dataset.targets();
        let n_samples = x.nrows();
        if n_samples == 0 {
            return Err(linfa::Error::NotEnoughSamples.into());
        }
        if y.len() != n_samples {
            return Err(PredictorError::ShapeMismatch {
                records: n_samples,
                targets: y.len(),
            });
        }
        if x.ncols() == 0 {
            return Err(PredictorError::InvalidParams("dataset has no feature columns".into()));
        }

        // one global ordering per feature; trees expand it by bootstrap counts
        let global_order: Vec<Vec<usize>> = (0..x.ncols())
            .map(|f| {
                let mut order: Vec<usize> = (0..n_samples).collect();
                order.sort_by(|&a, &b| x[[a, f]].total_cmp(&x[[b, f]]));
                order
            })
            .collect();

        let mut master = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut builder = TreeBuilder {
            x,
            y,
            params: self,
            goes_left: vec![false; n_samples],
        };

        let mut counts = vec![0usize; n_samples];
        let mut trees = Vec::with_capacity(self.n_trees);
        for _ in 0..self.n_trees {
            let mut rng = StdRng::seed_from_u64(master.gen());

            counts.iter_mut().for_each(|c| *c = 0);
            if self.bootstrap {
                for _ in 0..n_samples {
                    counts[rng.gen_range(0..n_samples)] += 1;
                }
            } else {
                counts.iter_mut().for_each(|c| *c = 1);
            }

            let sorted: Vec<Vec<usize>> = global_order
                .iter()
                .map(|order| {
                    order
                        .iter()
                        .flat_map(|&r| std::iter::repeat(r).take(counts[r]))
                        .collect()
                })
                .collect();

            trees.push(builder.grow(sorted, 0, &mut rng));
        }

        debug!(
            "Fitted {} trees on {} samples x {} features",
            trees.len(),
            n_samples,
            x.ncols()
        );

        Ok(RandomForestRegressor {
            trees,
            n_features: x.ncols(),
        })
    }
}

impl PredictInplace<Array2<f64>, Array1<f64>> for RandomForestRegressor {
    fn predict_inplace<'a>(&'a self, x: &'a Array2<f64>, y: &mut Array1<f64>) {
        assert_eq!(
            x.nrows(),
            y.len(),
            "The number of data points must match the number of output targets."
        );
        assert_eq!(
            x.ncols(),
            self.n_features,
            "The number of features must match the fitted model."
        );

        for (row, target) in x.rows().into_iter().zip(y.iter_mut()) {
            *target = self.predict_row(&row);
        }
    }

    fn default_target(&self, x: &Array2<f64>) -> Array1<f64> {
        Array1::zeros(x.nrows())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn step_dataset() -> DatasetBase<Array2<f64>, Array1<f64>> {
        // y jumps from 10 to 50 once x0 passes 5; x1 is noise
        let mut rows = Vec::new();
        let mut targets = Vec::new();
        for i in 0..40 {
            let x0 = i as f64 / 4.0;
            let x1 = ((i * 7) % 11) as f64;
            rows.extend_from_slice(&[x0, x1]);
            targets.push(if x0 < 5.0 { 10.0 } else { 50.0 });
        }
        let records = Array2::from_shape_vec((40, 2), rows).unwrap();
        DatasetBase::new(records, Array1::from_vec(targets))
    }

    #[test]
    fn test_learns_step_function() {
        let dataset = step_dataset();
        let model = RandomForestParams::new()
            .n_trees(25)
            .max_depth(3)
            .max_features(2)
            .seed(7)
            .fit(&dataset)
            .unwrap();

        let probe = array![[1.0, 3.0], [9.0, 3.0]];
        let predictions: Array1<f64> = model.predict(&probe);
        assert!((predictions[0] - 10.0).abs() < 5.0, "{}", predictions[0]);
        assert!((predictions[1] - 50.0).abs() < 5.0, "{}", predictions[1]);
    }

    #[test]
    fn test_depth_is_capped() {
        let dataset = step_dataset();
        let model = RandomForestParams::new()
            .n_trees(5)
            .max_depth(1)
            .seed(3)
            .fit(&dataset)
            .unwrap();

        assert_eq!(model.n_trees(), 5);
        assert!(model.max_tree_depth() <= 1);
    }

    #[test]
    fn test_seeded_fits_are_reproducible() {
        let dataset = step_dataset();
        let params = RandomForestParams::new().n_trees(10).max_features(1).seed(42);
        let probe = array![[4.9, 2.0], [5.1, 8.0], [0.0, 0.0]];

        let a: Array1<f64> = params.fit(&dataset).unwrap().predict(&probe);
        let b: Array1<f64> = params.fit(&dataset).unwrap().predict(&probe);
        assert_eq!(a, b);
    }

    #[test]
    fn test_predictions_stay_within_target_range() {
        let dataset = step_dataset();
        let model = RandomForestParams::new().n_trees(15).seed(1).fit(&dataset).unwrap();

        let probe = array![[-100.0, -100.0], [100.0, 100.0], [5.0, 5.0]];
        let predictions: Array1<f64> = model.predict(&probe);
        for p in predictions.iter() {
            assert!(p.is_finite());
            assert!((10.0..=50.0).contains(p));
        }
    }

    #[test]
    fn test_constant_targets_make_single_leaf() {
        let records = array![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]];
        let dataset = DatasetBase::new(records, array![7.0, 7.0, 7.0]);
        let model = RandomForestParams::new().n_trees(3).seed(0).fit(&dataset).unwrap();

        assert_eq!(model.max_tree_depth(), 0);
        let predictions: Array1<f64> = model.predict(&array![[100.0, 100.0]]);
        assert_eq!(predictions[0], 7.0);
    }

    #[test]
    fn test_empty_dataset_is_rejected() {
        let dataset = DatasetBase::new(Array2::<f64>::zeros((0, 3)), Array1::<f64>::zeros(0));
        let err = RandomForestParams::new().fit(&dataset).unwrap_err();
        assert!(matches!(err, PredictorError::Linfa(linfa::Error::NotEnoughSamples)));
    }

    #[test]
    fn test_invalid_params_are_rejected() {
        let dataset = step_dataset();
        let err = RandomForestParams::new().n_trees(0).fit(&dataset).unwrap_err();
        assert!(matches!(err, PredictorError::InvalidParams(_)));

        let err = RandomForestParams::new().max_features(0).fit(&dataset).unwrap_err();
        assert!(matches!(err, PredictorError::InvalidParams(_)));
    }
}
