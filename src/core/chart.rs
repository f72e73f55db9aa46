//! Terminal line chart of a user's mood over time.

use crate::core::encoding::LabelCodec;
use crate::core::refusal::Refusal;
use crate::models::Record;
use crate::utils::colors::{CYAN, GREY, MAGENTA, color_for_mood, paint};
use crate::utils::date::{format_date, short_label};
use chrono::NaiveDate;
use unicode_width::UnicodeWidthStr;

pub const MARKER: &str = "●";
const LINE: &str = "·";
/// Widest column group drawn per date.
pub const MAX_STEP: usize = 40;

/// Date-ordered mood codes ready to plot.
#[derive(Debug)]
pub struct MoodSeries {
    pub points: Vec<(NaiveDate, usize)>,
    pub moods: LabelCodec,
}

impl MoodSeries {
    /// Sort `records` by date and encode their moods in first-seen order.
    pub fn build(records: &[&Record], min_days: usize) -> Result<Self, Refusal> {
        if records.len() < min_days {
            return Err(Refusal::NotEnoughEntries {
                needed: min_days,
                found: records.len(),
            });
        }

        let mut sorted = records.to_vec();
        sorted.sort_by_key(|r| r.date);

        let (moods, codes) = LabelCodec::fit_transform(sorted.iter().map(|r| r.mood.as_str()));
        let points = sorted.iter().map(|r| r.date).zip(codes).collect();

        Ok(Self { points, moods })
    }

    pub fn codes(&self) -> Vec<usize> {
        self.points.iter().map(|(_, c)| *c).collect()
    }

    pub fn dates(&self) -> Vec<NaiveDate> {
        self.points.iter().map(|(d, _)| *d).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Cell {
    Empty,
    Line,
    Marker(usize),
}

/// Draw `series` as rows of mood codes (highest on top) against one column
/// group of `step` characters per entry (clamped to `1..=MAX_STEP`).
pub fn render_chart(
    series: &MoodSeries,
    username: &str,
    step: usize,
    positive_moods: &[String],
) -> String {
    let step = step.clamp(1, MAX_STEP);
    let rows = series.moods.len().max(1);
    let width = series.points.len().saturating_sub(1) * step + 1;
    let mut grid = vec![vec![Cell::Empty; width]; rows];

    for (i, pair) in series.points.windows(2).enumerate() {
        let (y0, y1) = (pair[0].1 as f64, pair[1].1 as f64);
        let x0 = i * step;
        for dx in 1..step {
            let y = y0 + (y1 - y0) * dx as f64 / step as f64;
            grid[y.round() as usize][x0 + dx] = Cell::Line;
        }
    }
    for (i, (_, code)) in series.points.iter().enumerate() {
        grid[*code][i * step] = Cell::Marker(*code);
    }

    let labels: Vec<String> = series
        .moods
        .labels()
        .iter()
        .enumerate()
        .map(|(code, mood)| format!("{mood} {code}"))
        .collect();
    let label_w = labels.iter().map(|l| l.width()).max().unwrap_or(0);

    let mut out = String::new();
    out.push_str(&paint(&format!("Daily mood chart - {username}"), CYAN));
    out.push('\n');
    out.push_str(&format!("{} mood (encoded)\n", pad_left("", label_w)));

    for code in (0..rows).rev() {
        let label = labels.get(code).map(String::as_str).unwrap_or("");
        out.push_str(&pad_left(label, label_w));
        out.push_str(&paint(" ┤", GREY));
        for cell in &grid[code] {
            match cell {
                Cell::Empty => out.push(' '),
                Cell::Line => out.push_str(&paint(LINE, MAGENTA)),
                Cell::Marker(c) => {
                    let mood = series.moods.decode(*c).unwrap_or_default();
                    out.push_str(&paint(MARKER, color_for_mood(mood, positive_moods)));
                }
            }
        }
        out.push('\n');
    }

    out.push_str(&pad_left("", label_w));
    out.push_str(&paint(&format!(" └{}", "─".repeat(width)), GREY));
    out.push('\n');

    out.push_str(&pad_left("", label_w + 2));
    out.push_str(&date_axis(&series.dates(), step));
    out.push('\n');

    if let (Some(first), Some(last)) = (series.points.first(), series.points.last()) {
        out.push_str(&format!(
            "{} date ({} → {})\n",
            pad_left("", label_w),
            format_date(first.0),
            format_date(last.0)
        ));
    }

    out
}

/// `MM-DD` labels under each marker, skipping those that would overlap.
fn date_axis(dates: &[NaiveDate], step: usize) -> String {
    let mut axis = String::new();
    let mut next_free = 0;

    for (i, date) in dates.iter().enumerate() {
        let col = i * step;
        if col < next_free {
            continue;
        }
        let label = short_label(*date);
        axis.push_str(&" ".repeat(col - axis.chars().count()));
        axis.push_str(&label);
        next_free = col + label.len() + 1;
    }

    axis
}

fn pad_left(s: &str, width: usize) -> String {
    format!("{}{}", " ".repeat(width.saturating_sub(s.width())), s)
}
