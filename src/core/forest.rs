//! Random forest classifier over a single integer feature.
//!
//! Each tree is a CART tree grown on a bootstrap sample of the training set,
//! splitting on the Gini impurity until its leaves are pure. Sampling uses a
//! seeded PCG generator, so a given seed always yields the same forest.

use rand::prelude::*;
use rand_pcg::Mcg128Xsl64;

#[derive(Debug, Clone)]
pub struct ForestParams {
    pub n_trees: usize,
    pub seed: u64,
    /// Nodes with fewer samples than this become leaves.
    pub min_samples_split: usize,
}

impl Default for ForestParams {
    fn default() -> Self {
        Self {
            n_trees: 100,
            seed: 42,
            min_samples_split: 2,
        }
    }
}

#[derive(Debug)]
enum Node {
    /// Class probabilities of the samples that reached this leaf.
    Leaf(Vec<f64>),
    Split {
        threshold: f64,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    fn distribution(&self, x: usize) -> &[f64] {
        match self {
            Node::Leaf(p) => p,
            Node::Split {
                threshold,
                left,
                right,
            } => {
                if (x as f64) <= *threshold {
                    left.distribution(x)
                } else {
                    right.distribution(x)
                }
            }
        }
    }
}

#[derive(Debug)]
pub struct RandomForest {
    trees: Vec<Node>,
    n_classes: usize,
}

impl RandomForest {
    /// Train on feature values `x` and class codes `y` (`y[i] < n_classes`).
    pub fn fit(x: &[usize], y: &[usize], n_classes: usize, params: &ForestParams) -> Self {
        debug_assert_eq!(x.len(), y.len());

        let n = x.len();
        if n == 0 || n_classes == 0 {
            return Self {
                trees: Vec::new(),
                n_classes,
            };
        }

        let mut rng = Mcg128Xsl64::seed_from_u64(params.seed);
        let min_split = params.min_samples_split.max(2);

        let trees = (0..params.n_trees.max(1))
            .map(|_| {
                let sample: Vec<usize> = (0..n).map(|_| rng.gen_range(0..n)).collect();
                grow(x, y, &sample, n_classes, min_split)
            })
            .collect();

        Self { trees, n_classes }
    }

    /// Mean class probabilities over all trees.
    pub fn predict_proba(&self, x: usize) -> Vec<f64> {
        let mut proba = vec![0.0; self.n_classes];
        if self.trees.is_empty() {
            return proba;
        }

        for tree in &self.trees {
            for (acc, p) in proba.iter_mut().zip(tree.distribution(x)) {
                *acc += p;
            }
        }

        let n = self.trees.len() as f64;
        proba.iter_mut().for_each(|p| *p /= n);
        proba
    }

    /// Most probable class; the lowest code wins a tie.
    pub fn predict(&self, x: usize) -> Option<usize> {
        if self.trees.is_empty() {
            return None;
        }

        let mut best: Option<(usize, f64)> = None;
        for (class, p) in self.predict_proba(x).into_iter().enumerate() {
            match best {
                Some((_, best_p)) if p <= best_p => {}
                _ => best = Some((class, p)),
            }
        }
        best.map(|(class, _)| class)
    }

    pub fn n_trees(&self) -> usize {
        self.trees.len()
    }
}

fn grow(x: &[usize], y: &[usize], sample: &[usize], n_classes: usize, min_split: usize) -> Node {
    let counts = class_counts(y, sample, n_classes);
    let pure = counts.iter().filter(|&&c| c > 0).count() <= 1;

    if pure || sample.len() < min_split {
        return leaf(&counts, sample.len());
    }

    match best_threshold(x, y, sample, n_classes) {
        Some(threshold) => {
            let (left, right): (Vec<usize>, Vec<usize>) = sample
                .iter()
                .copied()
                .partition(|&i| (x[i] as f64) <= threshold);

            Node::Split {
                threshold,
                left: Box::new(grow(x, y, &left, n_classes, min_split)),
                right: Box::new(grow(x, y, &right, n_classes, min_split)),
            }
        }
        None => leaf(&counts, sample.len()),
    }
}

/// Threshold with the lowest weighted Gini impurity, tried halfway between
/// consecutive distinct feature values. `None` when all values are equal.
fn best_threshold(x: &[usize], y: &[usize], sample: &[usize], n_classes: usize) -> Option<f64> {
    let mut values: Vec<usize> = sample.iter().map(|&i| x[i]).collect();
    values.sort_unstable();
    values.dedup();

    let n = sample.len() as f64;
    let mut best: Option<(f64, f64)> = None;

    for pair in values.windows(2) {
        let threshold = (pair[0] + pair[1]) as f64 / 2.0;

        let mut left = vec![0usize; n_classes];
        let mut right = vec![0usize; n_classes];
        for &i in sample {
            if (x[i] as f64) <= threshold {
                left[y[i]] += 1;
            } else {
                right[y[i]] += 1;
            }
        }

        let n_left: usize = left.iter().sum();
        let n_right: usize = right.iter().sum();
        let impurity = (n_left as f64 * gini(&left, n_left)
            + n_right as f64 * gini(&right, n_right))
            / n;

        match best {
            Some((_, best_impurity)) if impurity >= best_impurity => {}
            _ => best = Some((threshold, impurity)),
        }
    }

    best.map(|(threshold, _)| threshold)
}

fn class_counts(y: &[usize], sample: &[usize], n_classes: usize) -> Vec<usize> {
    let mut counts = vec![0usize; n_classes];
    for &i in sample {
        counts[y[i]] += 1;
    }
    counts
}

fn gini(counts: &[usize], total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let total = total as f64;
    1.0 - counts
        .iter()
        .map(|&c| {
            let p = c as f64 / total;
            p * p
        })
        .sum::<f64>()
}

fn leaf(counts: &[usize], total: usize) -> Node {
    let total = total.max(1) as f64;
    Node::Leaf(counts.iter().map(|&c| c as f64 / total).collect())
}
