use crate::config::Config;
use crate::core::encoding::LabelCodec;
use crate::core::forest::{ForestParams, RandomForest};
use crate::core::refusal::Refusal;
use crate::models::Record;
use crate::models::record::filter_by_user;

impl From<&Config> for ForestParams {
    fn from(cfg: &Config) -> Self {
        Self {
            n_trees: cfg.forest_trees,
            seed: cfg.forest_seed,
            ..ForestParams::default()
        }
    }
}

/// Activity → mood classifier trained on one user's history.
///
/// Both encodings live only as long as the predictor.
pub struct MoodPredictor {
    activities: LabelCodec,
    moods: LabelCodec,
    forest: RandomForest,
}

impl MoodPredictor {
    /// Train on every record of `history`, with no held-out set.
    pub fn train(
        history: &[&Record],
        min_days: usize,
        params: &ForestParams,
    ) -> Result<Self, Refusal> {
        if history.is_empty() || history.len() < min_days {
            return Err(Refusal::NotEnoughEntries {
                needed: min_days.max(1),
                found: history.len(),
            });
        }

        let (activities, x) =
            LabelCodec::fit_transform(history.iter().map(|r| r.activity.as_str()));
        let (moods, y) = LabelCodec::fit_transform(history.iter().map(|r| r.mood.as_str()));

        let forest = RandomForest::fit(&x, &y, moods.len(), params);

        Ok(Self {
            activities,
            moods,
            forest,
        })
    }

    /// Predicted mood for `activity`. Only activities present in the
    /// training history can be encoded.
    pub fn predict(&self, activity: &str) -> Result<&str, Refusal> {
        let unseen = || Refusal::UnseenActivity(activity.to_string());

        let code = self.activities.encode(activity).ok_or_else(unseen)?;
        self.forest
            .predict(code)
            .and_then(|mood| self.moods.decode(mood))
            .ok_or_else(unseen)
    }

    pub fn known_activities(&self) -> &[String] {
        self.activities.labels()
    }
}

/// Train on `username`'s records and predict the mood for `activity`.
pub fn predict_mood(
    records: &[Record],
    username: &str,
    activity: &str,
    cfg: &Config,
) -> Result<String, Refusal> {
    let history = filter_by_user(records, username);
    let model = MoodPredictor::train(&history, cfg.min_days, &ForestParams::from(cfg))?;
    model.predict(activity).map(str::to_string)
}
