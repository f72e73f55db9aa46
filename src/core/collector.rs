use crate::errors::AppResult;
use crate::models::Record;
use crate::ui::prompt::Prompter;
use crate::utils::date::format_date;
use chrono::NaiveDate;
use std::io::BufRead;

/// Ask for today's mood and activity and build the entry.
///
/// Both answers are trimmed and lowercased; anything is accepted, the empty
/// string included.
pub fn collect<R: BufRead>(
    prompter: &mut Prompter<R>,
    username: &str,
    today: NaiveDate,
) -> AppResult<Record> {
    println!(
        "\nHi {username}, log your mood and activity for today ({}):",
        format_date(today)
    );
    let mood = prompter.ask_label("Your mood today (e.g. happy, sad, stressed, excited): ")?;
    let activity =
        prompter.ask_label("What did you do today (e.g. study, movies, workout): ")?;

    Ok(Record::new(username, today, &mood, &activity))
}
