//! Activity suggestions from mood/activity co-occurrence.
//!
//! The suggestion is the activity seen most often alongside each positive
//! mood. It is a frequency heuristic only.

use crate::core::refusal::Refusal;
use crate::models::Record;
use crate::models::record::{entry_for, filter_by_user};
use chrono::NaiveDate;

/// Activity counts per mood, both kept in encounter order.
#[derive(Debug, Default)]
pub struct FrequencyTable {
    moods: Vec<(String, Vec<(String, usize)>)>,
}

impl FrequencyTable {
    pub fn from_records(records: &[&Record]) -> Self {
        let mut table = Self::default();
        for r in records {
            table.add(&r.mood, &r.activity);
        }
        table
    }

    fn add(&mut self, mood: &str, activity: &str) {
        let pos = match self.moods.iter().position(|(m, _)| m == mood) {
            Some(pos) => pos,
            None => {
                self.moods.push((mood.to_string(), Vec::new()));
                self.moods.len() - 1
            }
        };

        let activities = &mut self.moods[pos].1;
        match activities.iter_mut().find(|(a, _)| a == activity) {
            Some((_, count)) => *count += 1,
            None => activities.push((activity.to_string(), 1)),
        }
    }

    pub fn contains(&self, mood: &str) -> bool {
        self.moods.iter().any(|(m, _)| m == mood)
    }

    pub fn count(&self, mood: &str, activity: &str) -> usize {
        self.activities(mood)
            .and_then(|acts| acts.iter().find(|(a, _)| a == activity))
            .map(|(_, c)| *c)
            .unwrap_or(0)
    }

    fn activities(&self, mood: &str) -> Option<&[(String, usize)]> {
        self.moods
            .iter()
            .find(|(m, _)| m == mood)
            .map(|(_, acts)| acts.as_slice())
    }

    /// Most frequent activity for `mood`; on equal counts the one
    /// encountered first wins.
    pub fn top_activity(&self, mood: &str) -> Option<&str> {
        let mut best: Option<(&str, usize)> = None;
        for (activity, count) in self.activities(mood)? {
            match best {
                Some((_, best_count)) if *count <= best_count => {}
                _ => best = Some((activity.as_str(), *count)),
            }
        }
        best.map(|(a, _)| a)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recommendation {
    pub today_mood: String,
    pub activities: Vec<String>,
}

pub fn recommend(
    records: &[Record],
    username: &str,
    today: NaiveDate,
    positive_moods: &[String],
) -> Result<Recommendation, Refusal> {
    let history = filter_by_user(records, username);
    if history.is_empty() {
        return Err(Refusal::NoHistory);
    }

    let table = FrequencyTable::from_records(&history);

    let today_mood = entry_for(records, username, today)
        .map(|r| r.mood.clone())
        .ok_or(Refusal::NoEntryToday)?;

    let mut activities: Vec<String> = Vec::new();
    for mood in positive_moods {
        if *mood == today_mood || !table.contains(mood) {
            continue;
        }
        if let Some(top) = table.top_activity(mood)
            && !activities.iter().any(|a| a == top)
        {
            activities.push(top.to_string());
        }
    }

    if activities.is_empty() {
        return Err(Refusal::NotEnoughData);
    }

    Ok(Recommendation {
        today_mood,
        activities,
    })
}
