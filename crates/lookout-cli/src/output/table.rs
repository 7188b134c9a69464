#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

/// Render an aligned table for string rows.
#[must_use]
pub fn render_table(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
                .max(header.len())
        })
        .collect();

    fit_widths(&mut widths, headers, options.max_width);

    let header_line = headers
        .iter()
        .zip(&widths)
        .map(|(header, width)| pad(&truncate_text(header, *width), *width, 0))
        .collect::<Vec<_>>()
        .join("  ");
    let divider = "-".repeat(header_line.chars().count());

    let mut lines = vec![header_line.trim_end().to_string(), divider];
    for row in rows {
        let line = widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let value = row.get(index).map_or("-", String::as_str);
                let text = truncate_text(value, *width);
                let visible = text.chars().count();
                let text = if options.color {
                    colorize_state(&text)
                } else {
                    text
                };
                pad(&text, *width, visible)
            })
            .collect::<Vec<_>>()
            .join("  ");
        lines.push(line.trim_end().to_string());
    }
    lines.join("\n")
}

/// Shrink the widest columns until the table fits `max_width`.
fn fit_widths(widths: &mut [usize], headers: &[&str], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };

    let separators = widths.len().saturating_sub(1) * 2;
    while widths.iter().sum::<usize>() + separators > max_width {
        let candidate = widths
            .iter()
            .enumerate()
            .filter(|(idx, width)| **width > headers[*idx].len().max(6))
            .max_by_key(|(_, width)| **width)
            .map(|(idx, _)| idx);

        let Some(idx) = candidate else {
            break;
        };
        widths[idx] -= 1;
    }
}

fn truncate_text(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    if width <= 1 {
        return "…".to_string();
    }

    let mut out: String = value.chars().take(width - 1).collect();
    out.push('…');
    out
}

/// Left-align `value` in `width` columns. `visible` is the printable length
/// when `value` carries ANSI codes, 0 to measure `value` itself.
fn pad(value: &str, width: usize, visible: usize) -> String {
    let len = if visible == 0 {
        value.chars().count()
    } else {
        visible
    };
    format!("{value}{}", " ".repeat(width.saturating_sub(len)))
}

fn colorize_state(value: &str) -> String {
    let code = match value.to_ascii_lowercase().as_str() {
        "authenticated" | "true" | "saved" => Some("32"),
        "unknown" | "loading" => Some("33"),
        "unauthenticated" | "false" | "failed" => Some("31"),
        _ => None,
    };

    match code {
        Some(code) => format!("\u{1b}[{code}m{value}\u{1b}[0m"),
        None => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const PLAIN: TableOptions = TableOptions {
        max_width: None,
        color: false,
    };

    #[test]
    fn columns_align_to_widest_cell() {
        let rows = vec![
            vec!["1".to_string(), "acme".to_string()],
            vec!["200".to_string(), "globex-corporation".to_string()],
        ];
        let table = render_table(&["id", "name"], &rows, PLAIN);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines[0], "id   name");
        assert!(lines[1].chars().all(|c| c == '-'));
        assert_eq!(lines[2], "1    acme");
        assert_eq!(lines[3], "200  globex-corporation");
    }

    #[test]
    fn narrow_terminal_truncates_widest_column() {
        let rows = vec![vec!["1".to_string(), "x".repeat(60)]];
        let table = render_table(
            &["id", "name"],
            &rows,
            TableOptions {
                max_width: Some(40),
                color: false,
            },
        );
        let last = table.lines().last().unwrap();
        assert!(last.ends_with('…'));
        assert!(last.chars().count() <= 40);
    }

    #[test]
    fn missing_cells_render_as_dash() {
        let rows = vec![vec!["only".to_string()]];
        let table = render_table(&["a", "b"], &rows, PLAIN);
        assert!(table.lines().last().unwrap().ends_with('-'));
    }
}
