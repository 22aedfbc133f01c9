// Modal overlay rendering
//
// - Help: keyboard shortcuts and the current theme
// - Profile: the signed-in user's card

use super::centered_rect;
use crate::tui::app::App;
use crate::tui::modal::Modal;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, modal: Modal, app: &App) {
    let (title, close_hint, content, width, height) = match modal {
        Modal::Help => (" Help ", " Press ? or Esc to close ", help_text(app), 48, 35),
        Modal::Profile => (" Profile ", " Press p or Esc to close ", profile_text(app), 44, 11),
    };

    let area = centered_rect(width, height, f.area());
    f.render_widget(Clear, area);

    let paragraph = Paragraph::new(content)
        .style(Style::default().bg(app.theme.background))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.highlight))
                .border_type(app.theme.border_type)
                .title(title)
                .title_bottom(Line::from(close_hint).centered()),
        );
    f.render_widget(paragraph, area);
}

fn help_text(app: &App) -> Text<'static> {
    let key_style = Style::default().fg(app.theme.info);
    let desc_style = Style::default().fg(app.theme.foreground);
    let header_style = Style::default()
        .fg(app.theme.highlight)
        .add_modifier(Modifier::BOLD);

    let kb = |key: &str, desc: &str| -> Line<'static> {
        Line::from(vec![
            Span::raw("    "),
            Span::styled(format!("{key:<12}"), key_style),
            Span::styled(desc.to_string(), desc_style),
        ])
    };
    let header = |text: &str| Line::from(Span::styled(format!("  {text}"), header_style));

    Text::from(vec![
        Line::raw(""),
        header("Tabs"),
        kb("1-7", "Jump to tab"),
        kb("←/→", "Previous / next tab"),
        Line::raw(""),
        header("Forms"),
        kb("Tab", "Next field or button"),
        kb("Shift+Tab", "Previous field or button"),
        kb("/", "Focus the first field"),
        kb("Enter", "Submit / press button"),
        kb("Esc", "Leave the field"),
        kb("Ctrl+U", "Clear the field"),
        kb("↑/↓, Space", "Change severity"),
        Line::raw(""),
        header("Shortcuts"),
        kb("g", "New reforestation suggestion"),
        kb("s", "Simulate reforestation impact"),
        kb("↑/↓, b", "Choose / buy a product"),
        Line::raw(""),
        header("General"),
        kb("p", "Profile"),
        kb("l", "Toggle log panel"),
        kb("t", "Next theme"),
        kb("?", "Toggle this help"),
        kb("q, Ctrl+C", "Quit"),
        Line::raw(""),
        Line::from(vec![
            Span::styled("  Theme: ", desc_style),
            Span::styled(app.theme.name.clone(), key_style),
        ]),
    ])
}

fn profile_text(app: &App) -> Text<'static> {
    let user = app.session.user();
    let label = Style::default().fg(app.theme.muted);
    let value = Style::default().fg(app.theme.foreground);
    let row = |name: &str, text: String| -> Line<'static> {
        Line::from(vec![
            Span::styled(format!("    {name:<14}"), label),
            Span::styled(text, value),
        ])
    };

    Text::from(vec![
        Line::raw(""),
        Line::from(Span::styled(
            format!("    ({})  {}", user.initial(), user.name),
            Style::default()
                .fg(app.theme.title)
                .add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
        row("Member", format!("#{}", user.id)),
        row("Email", user.email.clone()),
        row("Role", user.role.as_str().to_string()),
        row("EcoScore", user.score.to_string()),
        row("Trees planted", user.trees_planted.to_string()),
    ])
}
