//! Decision-tree regression
//!
//! A piecewise-constant CART fit: recursive binary splits chosen by
//! sum-of-squared-error reduction, leaves predicting the mean target of
//! their samples. The fit is fully deterministic: features are scanned in
//! index order, candidate thresholds are midpoints of sorted distinct
//! values, and the first best-scoring split wins. The same data always
//! produces the same tree.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

/// Fit hyperparameters. The defaults reproduce a full-depth single fit:
/// no depth limit, split any node with at least two samples.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeParams {
    /// Maximum tree depth; `None` grows until nodes are pure.
    pub max_depth: Option<usize>,
    /// Minimum samples a node needs to be considered for splitting.
    pub min_samples_split: usize,
    /// Minimum samples each child of a split must keep.
    pub min_samples_leaf: usize,
}

impl Default for TreeParams {
    fn default() -> Self {
        TreeParams {
            max_depth: None,
            min_samples_split: 2,
            min_samples_leaf: 1,
        }
    }
}

/// Tree node in a flat arena, indexed by position.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum Node {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        value: f64,
        samples: usize,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionTreeRegressor {
    n_features: usize,
    params: TreeParams,
    nodes: Vec<Node>,
}

impl DecisionTreeRegressor {
    /// Fit a regressor on the full dataset.
    ///
    /// Samples are rows of feature values in schema field order; targets
    /// align by index. Errors on empty or inconsistently shaped input.
    pub fn fit(samples: &[Vec<f64>], targets: &[f64], params: TreeParams) -> Result<Self> {
        if samples.is_empty() {
            return Err(Error::Training("no training samples".to_string()));
        }
        if samples.len() != targets.len() {
            return Err(Error::Training(format!(
                "{} samples but {} targets",
                samples.len(),
                targets.len()
            )));
        }
        let n_features = samples[0].len();
        if n_features == 0 {
            return Err(Error::Training("samples have no features".to_string()));
        }
        if samples.iter().any(|s| s.len() != n_features) {
            return Err(Error::Training(
                "inconsistent feature count across samples".to_string(),
            ));
        }

        let mut tree = DecisionTreeRegressor {
            n_features,
            params,
            nodes: Vec::new(),
        };
        let indices: Vec<usize> = (0..samples.len()).collect();
        tree.grow(samples, targets, &indices, 0);

        debug!(
            "fit tree on {} samples: {} nodes, {} leaves, depth {}",
            samples.len(),
            tree.n_nodes(),
            tree.n_leaves(),
            tree.depth()
        );
        Ok(tree)
    }

    /// Predict the target for a single feature row.
    pub fn predict(&self, sample: &[f64]) -> f64 {
        debug_assert_eq!(sample.len(), self.n_features);
        let mut node = 0;
        loop {
            match &self.nodes[node] {
                Node::Leaf { value, .. } => return *value,
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    node = if sample[*feature] <= *threshold {
                        *left
                    } else {
                        *right
                    };
                }
            }
        }
    }

    /// Predict targets for a batch of feature rows.
    pub fn predict_batch(&self, samples: &[Vec<f64>]) -> Vec<f64> {
        samples.iter().map(|s| self.predict(s)).collect()
    }

    pub fn n_features(&self) -> usize {
        self.n_features
    }

    pub fn params(&self) -> &TreeParams {
        &self.params
    }

    pub fn n_nodes(&self) -> usize {
        self.nodes.len()
    }

    pub fn n_leaves(&self) -> usize {
        self.nodes
            .iter()
            .filter(|n| matches!(n, Node::Leaf { .. }))
            .count()
    }

    /// Longest root-to-leaf path length; 0 for a single-leaf tree.
    pub fn depth(&self) -> usize {
        self.node_depth(0)
    }

    fn node_depth(&self, id: usize) -> usize {
        match &self.nodes[id] {
            Node::Leaf { .. } => 0,
            Node::Split { left, right, .. } => {
                1 + self.node_depth(*left).max(self.node_depth(*right))
            }
        }
    }

    /// Grow the subtree for `indices`, returning its root node id.
    fn grow(&mut self, samples: &[Vec<f64>], targets: &[f64], indices: &[usize], depth: usize) -> usize {
        let n = indices.len() as f64;
        let mean = indices.iter().map(|&i| targets[i]).sum::<f64>() / n;

        // Reserve this node's slot before recursing into children.
        let id = self.nodes.len();
        self.nodes.push(Node::Leaf {
            value: mean,
            samples: indices.len(),
        });

        if indices.len() < self.params.min_samples_split {
            return id;
        }
        if let Some(max_depth) = self.params.max_depth {
            if depth >= max_depth {
                return id;
            }
        }
        let first = targets[indices[0]];
        if indices.iter().all(|&i| targets[i] == first) {
            return id;
        }

        let Some((feature, threshold)) = self.best_split(samples, targets, indices) else {
            return id;
        };

        let (left_indices, right_indices): (Vec<usize>, Vec<usize>) = indices
            .iter()
            .copied()
            .partition(|&i| samples[i][feature] <= threshold);

        let left = self.grow(samples, targets, &left_indices, depth + 1);
        let right = self.grow(samples, targets, &right_indices, depth + 1);
        self.nodes[id] = Node::Split {
            feature,
            threshold,
            left,
            right,
        };
        id
    }

    /// Find the (feature, threshold) cut minimizing the summed SSE of the
    /// two children. Returns `None` when no valid cut exists (all feature
    /// values identical, or every cut violates `min_samples_leaf`).
    fn best_split(
        &self,
        samples: &[Vec<f64>],
        targets: &[f64],
        indices: &[usize],
    ) -> Option<(usize, f64)> {
        let total_n = indices.len() as f64;
        let total_sum: f64 = indices.iter().map(|&i| targets[i]).sum();
        let total_sq: f64 = indices.iter().map(|&i| targets[i] * targets[i]).sum();

        let mut best: Option<(f64, usize, f64)> = None;

        for feature in 0..self.n_features {
            let mut order: Vec<usize> = indices.to_vec();
            order.sort_by(|&a, &b| {
                samples[a][feature]
                    .partial_cmp(&samples[b][feature])
                    .unwrap_or(std::cmp::Ordering::Equal)
            });

            let mut left_sum = 0.0;
            let mut left_sq = 0.0;
            for k in 0..order.len() - 1 {
                let i = order[k];
                left_sum += targets[i];
                left_sq += targets[i] * targets[i];

                let value = samples[i][feature];
                let next_value = samples[order[k + 1]][feature];
                if value == next_value {
                    continue;
                }

                let n_left = k + 1;
                let n_right = order.len() - n_left;
                if n_left < self.params.min_samples_leaf
                    || n_right < self.params.min_samples_leaf
                {
                    continue;
                }

                // SSE of a side = sum(y^2) - sum(y)^2 / n
                let sse_left = left_sq - left_sum * left_sum / n_left as f64;
                let right_sum = total_sum - left_sum;
                let sse_right =
                    (total_sq - left_sq) - right_sum * right_sum / (total_n - n_left as f64);
                let score = sse_left + sse_right;

                let improves = match best {
                    None => true,
                    Some((best_score, _, _)) => score < best_score,
                };
                if improves {
                    best = Some((score, feature, (value + next_value) / 2.0));
                }
            }
        }

        best.map(|(_, feature, threshold)| (feature, threshold))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fit(samples: &[Vec<f64>], targets: &[f64]) -> DecisionTreeRegressor {
        DecisionTreeRegressor::fit(samples, targets, TreeParams::default()).unwrap()
    }

    #[test]
    fn test_fit_empty_errors() {
        let result = DecisionTreeRegressor::fit(&[], &[], TreeParams::default());
        assert!(matches!(result, Err(Error::Training(_))));
    }

    #[test]
    fn test_fit_mismatched_lengths_errors() {
        let result =
            DecisionTreeRegressor::fit(&[vec![1.0, 2.0]], &[1.0, 2.0], TreeParams::default());
        assert!(matches!(result, Err(Error::Training(_))));
    }

    #[test]
    fn test_fit_inconsistent_width_errors() {
        let samples = vec![vec![1.0, 2.0], vec![1.0]];
        let result = DecisionTreeRegressor::fit(&samples, &[1.0, 2.0], TreeParams::default());
        assert!(matches!(result, Err(Error::Training(_))));
    }

    #[test]
    fn test_identical_features_collapse_to_mean() {
        // Two samples in the same (day, hour) bucket: no valid cut, one leaf
        let samples = vec![vec![3.0, 9.0], vec![3.0, 9.0]];
        let tree = fit(&samples, &[120.0, 80.0]);
        assert_eq!(tree.n_nodes(), 1);
        assert_eq!(tree.n_leaves(), 1);
        assert_eq!(tree.depth(), 0);
        assert_eq!(tree.predict(&[3.0, 9.0]), 100.0);
    }

    #[test]
    fn test_separable_buckets_predict_exactly() {
        let samples = vec![
            vec![3.0, 9.0],
            vec![3.0, 9.0],
            vec![4.0, 14.0],
            vec![4.0, 14.0],
        ];
        let tree = fit(&samples, &[100.0, 100.0, 10.0, 10.0]);
        assert_eq!(tree.predict(&[3.0, 9.0]), 100.0);
        assert_eq!(tree.predict(&[4.0, 14.0]), 10.0);
        assert_eq!(tree.n_nodes(), 3);
        assert_eq!(tree.n_leaves(), 2);
        assert_eq!(tree.depth(), 1);
    }

    #[test]
    fn test_max_depth_zero_is_single_leaf() {
        let params = TreeParams {
            max_depth: Some(0),
            ..TreeParams::default()
        };
        let samples = vec![vec![1.0, 0.0], vec![2.0, 0.0]];
        let tree = DecisionTreeRegressor::fit(&samples, &[0.0, 10.0], params).unwrap();
        assert_eq!(tree.n_nodes(), 1);
        assert_eq!(tree.predict(&[1.0, 0.0]), 5.0);
    }

    #[test]
    fn test_min_samples_leaf_blocks_unbalanced_cut() {
        let params = TreeParams {
            min_samples_leaf: 2,
            ..TreeParams::default()
        };
        // The only useful cut would isolate a single sample
        let samples = vec![vec![1.0, 0.0], vec![2.0, 0.0], vec![2.0, 0.0]];
        let tree = DecisionTreeRegressor::fit(&samples, &[0.0, 9.0, 9.0], params).unwrap();
        assert_eq!(tree.n_leaves(), 1);
    }

    #[test]
    fn test_fit_is_deterministic() {
        let samples = vec![
            vec![1.0, 8.0],
            vec![2.0, 9.0],
            vec![3.0, 10.0],
            vec![4.0, 11.0],
            vec![5.0, 12.0],
        ];
        let targets = [10.0, 50.0, 40.0, 80.0, 20.0];
        let a = fit(&samples, &targets);
        let b = fit(&samples, &targets);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn test_serde_round_trip_preserves_predictions() {
        let samples = vec![
            vec![1.0, 8.0],
            vec![2.0, 9.0],
            vec![3.0, 10.0],
            vec![4.0, 11.0],
        ];
        let tree = fit(&samples, &[10.0, 50.0, 40.0, 80.0]);
        let json = serde_json::to_string(&tree).unwrap();
        let restored: DecisionTreeRegressor = serde_json::from_str(&json).unwrap();
        for sample in &samples {
            assert_eq!(tree.predict(sample), restored.predict(sample));
        }
    }

    #[test]
    fn test_predict_batch_matches_predict() {
        let samples = vec![vec![1.0, 8.0], vec![6.0, 22.0], vec![3.0, 9.0]];
        let tree = fit(&samples, &[5.0, 15.0, 25.0]);
        let batch = tree.predict_batch(&samples);
        let singles: Vec<f64> = samples.iter().map(|s| tree.predict(s)).collect();
        assert_eq!(batch, singles);
    }
}
