use super::{BatchPreview, PreviewStatus};
use comfy_table::{Cell, Color, ContentArrangement, Table};
use std::io::{self, IsTerminal};

/// Render the preview as a From / To / Status table
pub fn render_table(preview: &BatchPreview, use_color: bool) -> String {
    let mut table = Table::new();

    if io::stdout().is_terminal() {
        table.set_content_arrangement(ContentArrangement::Dynamic);
    } else {
        table.set_content_arrangement(ContentArrangement::Disabled);
    }

    // Force styling even in non-TTY environments when colors are explicitly requested
    if use_color {
        table.enforce_styling();
        table.set_header(vec![
            Cell::new("From").fg(Color::Cyan),
            Cell::new("To").fg(Color::Cyan),
            Cell::new("Status").fg(Color::Cyan),
        ]);
    } else {
        table.set_header(vec!["From", "To", "Status"]);
    }

    for row in &preview.rows {
        let (status, color) = match &row.status {
            PreviewStatus::Rename => ("Rename".to_string(), Color::Green),
            PreviewStatus::Collision => ("Exists, skip".to_string(), Color::Yellow),
            PreviewStatus::Invalid { reason } => (format!("Invalid: {reason}"), Color::Red),
        };

        if use_color {
            table.add_row(vec![
                Cell::new(&row.from),
                Cell::new(format!("→ {}", row.to)).fg(Color::Magenta),
                Cell::new(status).fg(color),
            ]);
        } else {
            table.add_row(vec![row.from.clone(), format!("→ {}", row.to), status]);
        }
    }

    let totals = format!(
        "{} to rename, {} skipped",
        preview.ready(),
        preview.collisions() + preview.invalid()
    );
    if use_color {
        table.add_row(vec![
            Cell::new("TOTALS").fg(Color::Cyan),
            Cell::new(""),
            Cell::new(totals).fg(Color::White),
        ]);
    } else {
        table.add_row(vec!["TOTALS".to_string(), String::new(), totals]);
    }

    table.to_string()
}
