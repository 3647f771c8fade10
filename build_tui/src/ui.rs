//! UI rendering

mod build_view;
mod damage_view;
mod equipment_view;
mod help_view;
mod rates_view;
mod stat_view;

use crate::app::{App, Tab};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};
use std::fmt::Display;

pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tab bar
            Constraint::Min(0),    // Content
            Constraint::Length(3), // Keybindings footer
        ])
        .split(f.area());

    draw_tabs(f, app, chunks[0]);

    match app.current_tab {
        Tab::Stats => stat_view::draw(f, app, chunks[1]),
        Tab::Build => build_view::draw(f, app, chunks[1]),
        Tab::Equip => equipment_view::draw(f, app, chunks[1]),
        Tab::Damage => damage_view::draw(f, app, chunks[1]),
        Tab::Rates => rates_view::draw(f, app, chunks[1]),
        Tab::Help => help_view::draw(f, app, chunks[1]),
    }

    draw_keybindings(f, app, chunks[2]);
}

fn draw_keybindings(f: &mut Frame, app: &App, area: Rect) {
    let common_keys = vec![("Tab", "Next tab"), ("m", "Monster"), ("q", "Quit")];

    let tab_keys: Vec<(&str, &str)> = match app.current_tab {
        Tab::Stats => vec![("↑/↓", "Scroll")],
        Tab::Build => vec![
            ("↑/↓", "Select"),
            ("←/→", "Adjust"),
            ("[/]", "±10"),
            ("r", "Reset"),
        ],
        Tab::Equip => vec![
            ("↑/↓", "Select"),
            ("←/→", "Slots/Inventory"),
            ("Enter", "Equip"),
            ("u", "Unequip"),
        ],
        Tab::Damage | Tab::Rates => vec![("s/Enter", "Simulate"), ("↑/↓", "Scroll")],
        Tab::Help => vec![],
    };

    let mut spans: Vec<Span> = Vec::new();

    for (i, (key, desc)) in tab_keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(Color::White),
        ));
    }

    if !tab_keys.is_empty() {
        spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
    }

    for (i, (key, desc)) in common_keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default().fg(Color::Cyan),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(Color::Gray),
        ));
    }

    // Rejected edits replace the title so they are hard to miss
    let (title, title_style) = match &app.status {
        Some(status) => (format!(" {} ", status), Style::default().fg(Color::Red)),
        None => (" Keys ".to_string(), Style::default()),
    };

    let paragraph = Paragraph::new(Line::from(spans))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(title, title_style)),
        )
        .alignment(Alignment::Center);

    f.render_widget(paragraph, area);
}

fn draw_tabs(f: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = Tab::all()
        .iter()
        .map(|t| {
            let style = if *t == app.current_tab {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            Line::from(Span::styled(t.name(), style))
        })
        .collect();

    let target = app
        .selected_monster()
        .map(|m| format!(" Build Calculator ─ vs {} ", m.name))
        .unwrap_or_else(|| " Build Calculator ".to_string());

    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL).title(target))
        .highlight_style(Style::default().fg(Color::Yellow))
        .divider("|");

    f.render_widget(tabs, area);
}

pub fn section(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("═══ {} ═══", title),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ))
}

pub fn stat_line(name: &str, value: impl Display) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:18}", name), Style::default().fg(Color::Gray)),
        Span::styled(value.to_string(), Style::default().fg(Color::White)),
    ])
}

/// Stat line with a dimmed note after the value
pub fn stat_line_with_note(name: &str, value: impl Display, note: impl Display) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:18}", name), Style::default().fg(Color::Gray)),
        Span::styled(value.to_string(), Style::default().fg(Color::White)),
        Span::styled(format!("  {}", note), Style::default().fg(Color::DarkGray)),
    ])
}

pub fn percent_color(percent: f64) -> Color {
    if percent >= 90.0 {
        Color::Green
    } else if percent >= 50.0 {
        Color::Yellow
    } else {
        Color::Red
    }
}

pub fn progress_bar(percent: f64, width: usize) -> String {
    let filled = ((percent / 100.0).clamp(0.0, 1.0) * width as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
