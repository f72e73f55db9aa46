//! Interactive session: one user, one run, a menu loop over the journal.

use crate::config::Config;
use crate::core::chart::{MoodSeries, render_chart};
use crate::core::collector::collect;
use crate::core::forest::ForestParams;
use crate::core::journal::Journal;
use crate::core::predict::MoodPredictor;
use crate::core::recommend::recommend;
use crate::core::refusal::Refusal;
use crate::errors::{AppError, AppResult};
use crate::store::{RecordStore, oplog};
use crate::ui::messages::{header, info, insight, menu, rules, success, warning};
use crate::ui::prompt::Prompter;
use crate::utils::date::format_date;
use chrono::NaiveDate;
use std::io::BufRead;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Chart,
    Predict,
    Recommend,
    Reinput,
    Exit,
}

impl MenuChoice {
    pub fn from_input(s: &str) -> Option<Self> {
        match s.trim() {
            "1" => Some(Self::Chart),
            "2" => Some(Self::Predict),
            "3" => Some(Self::Recommend),
            "4" => Some(Self::Reinput),
            "5" => Some(Self::Exit),
            _ => None,
        }
    }
}

pub struct Session<'a, R> {
    cfg: &'a Config,
    prompter: Prompter<R>,
    today: NaiveDate,
}

impl<'a, R: BufRead> Session<'a, R> {
    pub fn new(cfg: &'a Config, input: R, today: NaiveDate) -> Self {
        Self {
            cfg,
            prompter: Prompter::new(input),
            today,
        }
    }

    /// Run the whole session against `store`. Running out of input ends the
    /// session normally.
    pub fn run<S: RecordStore>(mut self, store: S) -> AppResult<()> {
        match self.start(store) {
            Err(AppError::InputClosed) => {
                info("Input closed, see you next time!");
                Ok(())
            }
            other => other,
        }
    }

    fn start<S: RecordStore>(&mut self, store: S) -> AppResult<()> {
        rules();
        self.prompter
            .pause("Press Enter when you have read the rules and are ready...")?;

        header("MOODTRACK");
        let username = self.prompter.ask_label("Enter your username: ")?;

        let mut journal = Journal::open(store)?;

        match journal.entry_for(&username, self.today) {
            Some(entry) => info(format!(
                "You already logged today ({}): mood '{}', activity '{}'.",
                format_date(self.today),
                entry.mood,
                entry.activity
            )),
            None => {
                let record = collect(&mut self.prompter, &username, self.today)?;
                journal.add(record)?;
                self.note("add", &username, "Logged today's entry");
                success("Entry saved!");
            }
        }

        loop {
            menu();
            let choice = self.prompter.ask("Choose an option (1-5): ")?;

            match MenuChoice::from_input(&choice) {
                Some(MenuChoice::Chart) => self.show_chart(&journal, &username)?,
                Some(MenuChoice::Predict) => self.predict(&journal, &username)?,
                Some(MenuChoice::Recommend) => self.recommend(&journal, &username),
                Some(MenuChoice::Reinput) => self.reinput(&mut journal, &username)?,
                Some(MenuChoice::Exit) => {
                    success("Thanks for using moodtrack. Have a nice day!");
                    return Ok(());
                }
                None => warning("Invalid choice, please try again."),
            }
        }
    }

    fn show_chart<S: RecordStore>(
        &mut self,
        journal: &Journal<S>,
        username: &str,
    ) -> AppResult<()> {
        let history = journal.user_records(username);

        match MoodSeries::build(&history, self.cfg.min_days) {
            Ok(series) => {
                println!();
                print!(
                    "{}",
                    render_chart(
                        &series,
                        username,
                        self.cfg.chart_step,
                        &self.cfg.positive_moods
                    )
                );
                self.prompter.pause("Press Enter to close the chart...")?;
            }
            Err(refusal) => warning(format!("Sorry {username}, {refusal}.")),
        }
        Ok(())
    }

    fn predict<S: RecordStore>(
        &mut self,
        journal: &Journal<S>,
        username: &str,
    ) -> AppResult<()> {
        let history = journal.user_records(username);

        let model = match MoodPredictor::train(
            &history,
            self.cfg.min_days,
            &ForestParams::from(self.cfg),
        ) {
            Ok(model) => model,
            Err(refusal) => {
                warning(format!("Sorry {username}, {refusal}."));
                return Ok(());
            }
        };

        let activity = self
            .prompter
            .ask_label("Enter today's activity to predict your mood: ")?;

        match model.predict(&activity) {
            Ok(mood) => insight(format!("Predicted mood for activity '{activity}': {mood}")),
            Err(refusal @ Refusal::UnseenActivity(_)) => {
                warning(format!("Sorry {username}, {refusal}."));
                info(format!(
                    "Known activities: {}",
                    model.known_activities().join(", ")
                ));
            }
            Err(refusal) => warning(format!("Sorry {username}, {refusal}.")),
        }
        Ok(())
    }

    fn recommend<S: RecordStore>(&self, journal: &Journal<S>, username: &str) {
        match recommend(
            journal.records(),
            username,
            self.today,
            &self.cfg.positive_moods,
        ) {
            Ok(rec) => insight(format!(
                "Recommended activities to lift your '{}' mood: {}",
                rec.today_mood,
                rec.activities.join(", ")
            )),
            Err(refusal) => warning(format!("Sorry {username}, {refusal}.")),
        }
    }

    fn reinput<S: RecordStore>(
        &mut self,
        journal: &mut Journal<S>,
        username: &str,
    ) -> AppResult<()> {
        let record = collect(&mut self.prompter, username, self.today)?;
        let removed = journal.replace_entry(record)?;

        self.note(
            "reinput",
            username,
            &format!("Replaced today's entry ({removed} previous record(s) removed)"),
        );
        success("Today's entry updated!");
        Ok(())
    }

    /// Internal log line; a failure here never interrupts the session.
    fn note(&self, operation: &str, target: &str, message: &str) {
        if let Err(e) = oplog::ttlog(&self.cfg.log_path(), operation, target, message) {
            warning(format!("Failed to write internal log: {e}"));
        }
    }
}
