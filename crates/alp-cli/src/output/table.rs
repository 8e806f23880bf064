#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

const SEPARATOR: &str = "  ";

/// Column whose cells get traffic-light colors.
const SEVERITY_COLUMN: &str = "severity";

struct Column<'a> {
    header: &'a str,
    width: usize,
    numeric: bool,
    severity: bool,
}

impl<'a> Column<'a> {
    fn measure(header: &'a str, index: usize, rows: &[Vec<String>]) -> Self {
        let cells = || rows.iter().filter_map(|row| row.get(index));
        let width = cells()
            .map(|cell| cell.chars().count())
            .max()
            .unwrap_or(0)
            .max(header.chars().count());

        Self {
            header,
            width,
            numeric: cells().next().is_some() && cells().all(|cell| looks_numeric(cell)),
            severity: header == SEVERITY_COLUMN,
        }
    }

    fn min_width(&self) -> usize {
        self.header.chars().count().max(3)
    }

    fn format(&self, value: &str, color: bool) -> String {
        let text = truncate_text(value, self.width);
        let pad = " ".repeat(self.width.saturating_sub(text.chars().count()));
        let text = if color && self.severity {
            colorize_severity(&text)
        } else {
            text
        };

        if self.numeric {
            format!("{pad}{text}")
        } else {
            format!("{text}{pad}")
        }
    }
}

/// Render rows as an aligned text table, columns in the order given.
///
/// All-numeric columns are right-aligned. Missing cells print as `-`.
#[must_use]
pub fn render(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let mut columns = headers
        .iter()
        .enumerate()
        .map(|(index, header)| Column::measure(header, index, rows))
        .collect::<Vec<_>>();
    fit_widths(&mut columns, options.max_width);

    let header_line = columns
        .iter()
        .map(|column| column.format(column.header, false))
        .collect::<Vec<_>>()
        .join(SEPARATOR);
    let total = columns.iter().map(|column| column.width).sum::<usize>()
        + SEPARATOR.len() * columns.len().saturating_sub(1);

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(header_line);
    lines.push("-".repeat(total));
    lines.extend(rows.iter().map(|row| {
        columns
            .iter()
            .enumerate()
            .map(|(index, column)| {
                column.format(row.get(index).map_or("-", String::as_str), options.color)
            })
            .collect::<Vec<_>>()
            .join(SEPARATOR)
    }));
    lines.join("\n")
}

/// Shrink the widest column one character at a time until the table fits.
fn fit_widths(columns: &mut [Column<'_>], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };

    let separators = SEPARATOR.len() * columns.len().saturating_sub(1);
    while columns.iter().map(|column| column.width).sum::<usize>() + separators > max_width {
        let Some(widest) = columns
            .iter_mut()
            .filter(|column| column.width > column.min_width())
            .max_by_key(|column| column.width)
        else {
            break;
        };
        widest.width -= 1;
    }
}

fn truncate_text(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }

    let mut out = value
        .chars()
        .take(width.saturating_sub(1))
        .collect::<String>();
    out.push('…');
    out
}

fn looks_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.chars().any(|ch| ch.is_ascii_digit())
        && trimmed
            .chars()
            .all(|ch| ch.is_ascii_digit() || matches!(ch, '-' | '+' | '.'))
}

fn colorize_severity(value: &str) -> String {
    let code = match value {
        "no_gap" => "32",
        "low" | "medium" => "33",
        "high" => "31",
        _ => return value.to_string(),
    };
    format!("\u{1b}[{code}m{value}\u{1b}[0m")
}
