//! Equipment tab view - interactive equipment management

use crate::app::{App, EquipFocus};
use build_core::{EquipmentSlot, Item};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    // Three columns: slots, inventory, preview
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(35),
            Constraint::Percentage(35),
            Constraint::Percentage(30),
        ])
        .split(area);

    draw_equipment_slots(f, app, chunks[0]);
    draw_inventory(f, app, chunks[1]);
    draw_preview(f, app, chunks[2]);
}

fn draw_equipment_slots(f: &mut Frame, app: &App, area: Rect) {
    let equipment = app.character.equipment();
    let is_focused = app.equip_focus == EquipFocus::Slots;

    let mut lines: Vec<Line> = vec![];

    for (i, slot) in EquipmentSlot::all().iter().enumerate() {
        let is_selected = i == app.selected_slot;

        let (prefix, style) = if is_selected {
            ("> ", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        } else {
            ("  ", Style::default().fg(Color::White))
        };

        let content = match equipment.get(*slot) {
            Some(item) => Span::styled(item.name.clone(), Style::default().fg(Color::Green)),
            None if equipment.is_blocked(*slot) => {
                Span::styled("(full-body top)", Style::default().fg(Color::DarkGray))
            }
            None => Span::styled("(empty)", Style::default().fg(Color::DarkGray)),
        };

        lines.push(Line::from(vec![
            Span::styled(prefix, style),
            Span::styled(format!("{:10}", slot.name()), style),
            content,
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  [Enter/u] Unequip  [→] Inventory",
        Style::default().fg(Color::DarkGray),
    )));

    let border_color = if is_focused { Color::Yellow } else { Color::White };
    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color))
                .title(" Equipment "),
        )
        .scroll((app.selected_slot.saturating_sub(area.height.saturating_sub(3) as usize) as u16, 0));

    f.render_widget(paragraph, area);
}

fn draw_inventory(f: &mut Frame, app: &App, area: Rect) {
    let filtered = app.filtered_inventory();
    let is_focused = app.equip_focus == EquipFocus::Inventory;

    let mut lines: Vec<Line> = vec![Line::from(Span::styled(
        format!("  Items for: {}", app.current_slot().name()),
        Style::default().fg(Color::Cyan),
    ))];
    lines.push(Line::from(""));

    if filtered.is_empty() {
        lines.push(Line::from(Span::styled(
            "  No items available for this slot",
            Style::default().fg(Color::DarkGray),
        )));
    }

    for (i, item) in filtered.iter().enumerate() {
        let is_selected = i == app.selected_inventory && is_focused;

        let (prefix, name_style) = if is_selected {
            (
                "> ",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED),
            )
        } else {
            ("  ", Style::default().fg(Color::White))
        };

        lines.push(Line::from(vec![
            Span::styled(prefix, Style::default().fg(Color::Yellow)),
            Span::styled(item.name.clone(), name_style),
        ]));

        if is_selected {
            lines.push(Line::from(Span::styled(
                format!("    {}", summary_text(item)),
                Style::default().fg(Color::Gray),
            )));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  [Enter] Equip  [←] Slots",
        Style::default().fg(Color::DarkGray),
    )));

    let border_color = if is_focused { Color::Yellow } else { Color::White };
    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(" Inventory "),
    );

    f.render_widget(paragraph, area);
}

fn draw_preview(f: &mut Frame, app: &App, area: Rect) {
    let mut lines: Vec<Line> = vec![];

    if app.equip_focus == EquipFocus::Inventory {
        if let Some(&item) = app.filtered_inventory().get(app.selected_inventory) {
            lines.push(Line::from(Span::styled(
                "Changes if Equipped:",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(""));

            let diffs = app.preview_equip_diff(item);
            if diffs.is_empty() {
                lines.push(Line::from(Span::styled(
                    "No stat changes",
                    Style::default().fg(Color::DarkGray),
                )));
            }
            for (name, old, new) in diffs {
                let diff = new - old;
                let color = if diff > 0 { Color::Green } else { Color::Red };
                let sign = if diff > 0 { "+" } else { "" };

                lines.push(Line::from(vec![
                    Span::styled(format!("{:12}", name), Style::default().fg(Color::White)),
                    Span::styled(old.to_string(), Style::default().fg(Color::Gray)),
                    Span::styled(" → ", Style::default().fg(Color::DarkGray)),
                    Span::styled(new.to_string(), Style::default().fg(Color::White)),
                    Span::styled(format!(" ({}{})", sign, diff), Style::default().fg(color)),
                ]));
            }

            if item.full_body {
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    "Full-body: removes the worn bottom",
                    Style::default().fg(Color::Yellow),
                )));
            }
        }
    } else {
        let slot = app.current_slot();
        match app.character.equipment().get(slot) {
            Some(item) => {
                lines.push(Line::from(Span::styled(
                    "Currently Equipped:",
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                )));
                lines.push(Line::from(""));
                draw_item_details(&mut lines, item);
            }
            None => {
                lines.push(Line::from(Span::styled(
                    "Slot Empty",
                    Style::default().fg(Color::DarkGray),
                )));
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    "Press → to browse inventory",
                    Style::default().fg(Color::DarkGray),
                )));
            }
        }
    }

    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Preview "));

    f.render_widget(paragraph, area);
}

fn draw_item_details(lines: &mut Vec<Line<'static>>, item: &Item) {
    lines.push(Line::from(Span::styled(
        item.name.clone(),
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
    )));
    if let Some(weapon) = item.weapon_type {
        lines.push(Line::from(Span::styled(
            weapon.name().to_string(),
            Style::default().fg(Color::Gray),
        )));
    }
    lines.push(Line::from(""));
    for (name, value) in item.stats.non_zero() {
        lines.push(Line::from(vec![
            Span::styled(format!("{:8}", name), Style::default().fg(Color::Gray)),
            Span::styled(format!("{:+}", value), Style::default().fg(Color::White)),
        ]));
    }
}

fn summary_text(item: &Item) -> String {
    let parts: Vec<String> = item
        .stats
        .non_zero()
        .into_iter()
        .map(|(name, value)| format!("{} {:+}", name, value))
        .collect();
    if parts.is_empty() {
        "no bonuses".to_string()
    } else {
        parts.join(", ")
    }
}
