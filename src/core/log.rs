use crate::errors::AppResult;
use crate::store::AuditLog;
use crate::utils::formatting::{strip_ansi, truncate};
use ansi_term::Colour;

const OP_MAX: usize = 60;

/// ANSI color for each operation
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "del" => Colour::Red,
        "edit" => Colour::Yellow,
        "export" => Colour::Cyan,
        "backup" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51), // orange
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    /// Render the audit log, one line per entry, oldest first.
    pub fn render(log: &AuditLog) -> AppResult<Vec<String>> {
        let entries = log.entries()?;

        let rows: Vec<(usize, String, String, String, String)> = entries
            .into_iter()
            .enumerate()
            .map(|(i, e)| {
                let date = chrono::DateTime::parse_from_rfc3339(&e.date)
                    .map(|dt| dt.format("%FT%T%:z").to_string())
                    .unwrap_or(e.date);
                let op_target = if e.target.is_empty() {
                    e.operation.clone()
                } else {
                    format!("{} ({})", e.operation, e.target)
                };
                (i + 1, date, e.operation, op_target, e.message)
            })
            .collect();

        let op_w = rows
            .iter()
            .map(|(_, _, _, op_target, _)| op_target.chars().count())
            .max()
            .unwrap_or(10)
            .min(OP_MAX);
        let id_w = rows.len().to_string().len();
        let date_w = rows
            .iter()
            .map(|(_, date, _, _, _)| date.len())
            .max()
            .unwrap_or(0);

        let mut out = Vec::with_capacity(rows.len());
        for (id, date, operation, op_target, message) in rows {
            let color = color_for_operation(&operation);

            // only the operation word is colored
            let visible = truncate(&op_target, OP_MAX);
            let colored = match visible.split_once(' ') {
                Some((op_word, rest)) => format!("{} {}", color.paint(op_word), rest),
                None => color.paint(visible.as_str()).to_string(),
            };

            let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&colored).chars().count()));

            out.push(format!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                id,
                date,
                colored,
                padding,
                message,
                id_w = id_w,
                date_w = date_w
            ));
        }

        Ok(out)
    }

    pub fn print_log(log: &AuditLog) -> AppResult<()> {
        let lines = Self::render(log)?;

        if lines.is_empty() {
            println!("📜 Audit log is empty.");
            return Ok(());
        }

        println!("📜 Audit log:\n");
        for line in lines {
            println!("{}", line);
        }

        Ok(())
    }
}
