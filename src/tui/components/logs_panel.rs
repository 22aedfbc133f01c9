//! Logs panel component
//!
//! Tail of the tracing events captured by [`TuiLogLayer`](crate::logging::TuiLogLayer),
//! newest at the bottom.

use crate::logging::{LogBuffer, LogEntry};
use crate::theme::Theme;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, buffer: &LogBuffer, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(theme.panel_logs))
        .title(format!(" System Logs ({}) ", buffer.len()));

    if buffer.is_empty() {
        let waiting = Paragraph::new("Waiting for events...")
            .style(Style::default().fg(theme.muted))
            .block(block);
        f.render_widget(waiting, area);
        return;
    }

    let capacity = area.height.saturating_sub(2) as usize;
    let items: Vec<ListItem> = buffer
        .recent(capacity)
        .iter()
        .map(|entry| ListItem::new(format_log_entry(entry)).style(theme.log_level_style(entry.level)))
        .collect();

    f.render_widget(List::new(items).block(block), area);
}

/// `[HH:MM:SS] LEVEL module: message`, where module is the last segment of
/// the tracing target
pub fn format_log_entry(entry: &LogEntry) -> String {
    let module = entry.target.rsplit("::").next().unwrap_or(&entry.target);
    format!(
        "[{}] {:5} {}: {}",
        entry.timestamp.format("%H:%M:%S"),
        entry.level.as_str(),
        module,
        entry.message
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::LogLevel;
    use chrono::{Local, TimeZone};

    #[test]
    fn log_line_layout() {
        let entry = LogEntry {
            timestamp: Local.with_ymd_and_hms(2024, 4, 22, 9, 5, 7).unwrap(),
            level: LogLevel::Warn,
            target: "ecoguard::session".to_string(),
            message: "Intent rejected intent=add alert".to_string(),
        };
        assert_eq!(
            format_log_entry(&entry),
            "[09:05:07] WARN  session: Intent rejected intent=add alert"
        );
    }

    #[test]
    fn title_counts_entries() {
        use ratatui::{backend::TestBackend, Terminal};

        let buffer = LogBuffer::new();
        let theme = Theme::default();
        let mut terminal = Terminal::new(TestBackend::new(60, 6)).unwrap();
        let screen = |terminal: &mut Terminal<TestBackend>, buffer: &LogBuffer| {
            terminal
                .draw(|f| render(f, f.area(), buffer, &theme))
                .unwrap();
            let text: String = terminal
                .backend()
                .buffer()
                .content()
                .iter()
                .map(|cell| cell.symbol())
                .collect();
            text
        };

        assert!(screen(&mut terminal, &buffer).contains("Waiting for events"));

        buffer.add(LogEntry {
            timestamp: Local::now(),
            level: LogLevel::Info,
            target: "ecoguard::tui".to_string(),
            message: "Starting TUI".to_string(),
        });
        let text = screen(&mut terminal, &buffer);
        assert!(text.contains("System Logs (1)"));
        assert!(text.contains("tui: Starting TUI"));
    }
}
