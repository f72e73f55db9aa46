use moodtrack::core::encoding::LabelCodec;
use moodtrack::core::forest::{ForestParams, RandomForest};

#[test]
fn test_codec_assigns_codes_in_first_seen_order() {
    let (codec, codes) = LabelCodec::fit_transform(["sad", "happy", "sad", "calm"]);

    assert_eq!(codes, vec![0, 1, 0, 2]);
    assert_eq!(codec.len(), 3);
    assert_eq!(codec.encode("happy"), Some(1));
    assert_eq!(codec.decode(2), Some("calm"));
    assert_eq!(codec.encode("angry"), None);
    assert_eq!(codec.decode(3), None);
}

#[test]
fn test_forest_learns_each_feature_value() {
    // value v -> class (v % 2), three samples each
    let x: Vec<usize> = (0..4).flat_map(|v| [v, v, v]).collect();
    let y: Vec<usize> = x.iter().map(|v| v % 2).collect();

    let forest = RandomForest::fit(&x, &y, 2, &ForestParams::default());

    assert_eq!(forest.n_trees(), 100);
    for v in 0..4 {
        assert_eq!(forest.predict(v), Some(v % 2), "value {v}");
    }
}

#[test]
fn test_forest_majority_wins_on_mixed_value() {
    let x = vec![0, 0, 0, 0, 1];
    let y = vec![1, 1, 1, 0, 0];

    let forest = RandomForest::fit(&x, &y, 2, &ForestParams::default());

    assert_eq!(forest.predict(0), Some(1));
}

#[test]
fn test_forest_is_deterministic_for_a_seed() {
    let x = vec![0, 1, 1, 2, 0, 2, 1];
    let y = vec![0, 1, 0, 2, 0, 1, 1];
    let params = ForestParams {
        n_trees: 25,
        seed: 7,
        ..ForestParams::default()
    };

    let a = RandomForest::fit(&x, &y, 3, &params);
    let b = RandomForest::fit(&x, &y, 3, &params);

    for v in 0..3 {
        assert_eq!(a.predict(v), b.predict(v));
        assert_eq!(a.predict_proba(v), b.predict_proba(v));
    }
}

#[test]
fn test_probabilities_sum_to_one() {
    let x = vec![0, 1, 1, 2];
    let y = vec![0, 1, 2, 2];

    let forest = RandomForest::fit(&x, &y, 3, &ForestParams::default());

    for v in 0..3 {
        let total: f64 = forest.predict_proba(v).iter().sum();
        assert!((total - 1.0).abs() < 1e-9);
    }
}

#[test]
fn test_empty_training_set_predicts_nothing() {
    let forest = RandomForest::fit(&[], &[], 2, &ForestParams::default());

    assert_eq!(forest.n_trees(), 0);
    assert_eq!(forest.predict(0), None);
}
