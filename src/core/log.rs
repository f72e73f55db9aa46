use crate::errors::AppResult;
use crate::store::oplog::read_log;
use ansi_term::Colour;
use std::path::Path;

const MAX_OP_WIDTH: usize = 40;

/// Color of an operation name in the printed log.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "reinput" => Colour::Yellow,
        "init" => Colour::RGB(255, 153, 51), // orange
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(path: &Path) -> AppResult<()> {
        let entries = read_log(path)?;

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let rows: Vec<(usize, String, &str, String, &str)> = entries
            .iter()
            .enumerate()
            .map(|(i, e)| {
                let date = chrono::DateTime::parse_from_rfc3339(&e.timestamp)
                    .map(|dt| dt.format("%FT%T%:z").to_string())
                    .unwrap_or_else(|_| e.timestamp.clone());
                let op_target = if e.target.is_empty() {
                    e.operation.clone()
                } else {
                    format!("{} ({})", e.operation, e.target)
                };
                (i + 1, date, e.operation.as_str(), op_target, e.message.as_str())
            })
            .collect();

        let id_w = rows.len().to_string().len();
        let date_w = rows.iter().map(|r| r.1.len()).max().unwrap_or(0);
        let op_w = rows
            .iter()
            .map(|r| r.3.chars().count())
            .max()
            .unwrap_or(0)
            .min(MAX_OP_WIDTH);

        println!("📜 Internal log:\n");

        for (id, date, operation, op_target, message) in rows {
            let visible = truncate(&op_target, MAX_OP_WIDTH);
            let pad = op_w.saturating_sub(visible.chars().count());

            // only the operation name is colored, the target stays plain
            let colored = match visible.split_once(' ') {
                Some((op, rest)) => {
                    format!("{} {}", color_for_operation(operation).paint(op), rest)
                }
                None => color_for_operation(operation).paint(visible.as_str()).to_string(),
            };

            println!(
                "{id:>id_w$}  {date:<date_w$}  {colored}{}  {message}",
                " ".repeat(pad)
            );
        }

        Ok(())
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let head: String = s.chars().take(max.saturating_sub(3)).collect();
    format!("{head}...")
}
