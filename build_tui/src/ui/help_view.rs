//! Help tab view

use super::section;
use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let lines = vec![
        section("Navigation"),
        key_line("1-6", "Jump to tab (Stats/Build/Equip/Damage/Rates/Help)"),
        key_line("Tab / Shift+Tab", "Next/previous tab"),
        key_line("↑/k  ↓/j", "Navigate lists / scroll"),
        key_line("m / M", "Next/previous target monster"),
        key_line("q / Ctrl+C", "Quit"),
        key_line("?", "This help"),
        Line::from(""),
        section("Build"),
        key_line("←/h  →/l", "Decrease/increase the selected value"),
        key_line("[ / ]", "Step by 10"),
        key_line("Enter / Space", "Toggle or step up"),
        key_line("r", "Reset to the loaded scenario"),
        Line::from(""),
        section("Equipment"),
        key_line("←/→", "Switch between slots and inventory"),
        key_line("Enter", "Equip selected item"),
        key_line("u", "Unequip from selected slot"),
        Line::from(""),
        section("Damage / Rates"),
        key_line("s / Enter", "Run the survival simulation"),
        Line::from(""),
        section("Formulas"),
        Line::from(Span::styled("Outgoing:", Style::default().fg(Color::Yellow))),
        Line::from("  max = (main × hi + sub) × attack / 100"),
        Line::from("  min = (main × lo × 0.9 × mastery + sub) × attack / 100"),
        Line::from(Span::styled("Main stat:", Style::default().fg(Color::Yellow))),
        Line::from("  points at level minus the other pure stats"),
        Line::from(Span::styled("Incoming:", Style::default().fg(Color::Yellow))),
        Line::from("  defense formula, then reductions, power-up, absorption"),
        Line::from("  every hit deals at least 1"),
        Line::from(Span::styled("Dodging:", Style::default().fg(Color::Yellow))),
        Line::from("  skill evasion rolls after the base avoid roll"),
        Line::from(""),
        Line::from(Span::styled(
            format!("Inventory: {} items, {} monsters", app.inventory.len(), app.monsters.len()),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Help "))
        .scroll((app.scroll, 0));

    f.render_widget(paragraph, area);
}

fn key_line(key: &str, desc: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:20}", key), Style::default().fg(Color::Yellow)),
        Span::styled(desc.to_string(), Style::default().fg(Color::White)),
    ])
}
