use crate::core::{SourceReport, SummaryRow};
use std::io::Write;

pub const COLUMN_TITLES: [&str; 4] = [
    "Язык программирования",
    "Вакансий найдено",
    "Вакансий обработано",
    "Средняя зарплата",
];

/// Renders rows as a single-line box table with `title` set into the top border.
pub fn render_table(title: &str, rows: &[SummaryRow]) -> String {
    let mut table: Vec<Vec<String>> = vec![COLUMN_TITLES.iter().map(|t| t.to_string()).collect()];
    table.extend(rows.iter().map(|row| row.cells().to_vec()));

    let mut widths = [0usize; 4];
    for line in &table {
        for (width, cell) in widths.iter_mut().zip(line) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let border = |left: char, joint: char, right: char| -> String {
        let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
        let joint = joint.to_string();
        format!("{}{}{}", left, segments.join(joint.as_str()), right)
    };
    let cells = |line: &[String]| -> String {
        let padded: Vec<String> = line
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!(" {:<width$} ", cell, width = width))
            .collect();
        format!("│{}│", padded.join("│"))
    };

    let mut out = Vec::with_capacity(table.len() + 3);
    out.push(titled(&border('┌', '┬', '┐'), title));
    out.push(cells(&table[0]));
    out.push(border('├', '┼', '┤'));
    out.extend(table[1..].iter().map(|line| cells(line)));
    out.push(border('└', '┴', '┘'));
    out.join("\n")
}

// The title replaces the start of the border when it fits between the corners.
fn titled(border: &str, title: &str) -> String {
    let mut chars: Vec<char> = border.chars().collect();
    let title: Vec<char> = title.chars().collect();
    if title.is_empty() || title.len() > chars.len() - 2 {
        return border.to_string();
    }
    chars.splice(1..1 + title.len(), title);
    chars.into_iter().collect()
}

pub fn write_report<W: Write>(out: &mut W, report: &SourceReport) -> std::io::Result<()> {
    writeln!(out, "{}", render_table(&report.title, &report.rows))
}

pub fn print_report(report: &SourceReport) -> std::io::Result<()> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    write_report(&mut handle, report)?;
    handle.flush()
}
