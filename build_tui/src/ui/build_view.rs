//! Build tab view - editable character inputs

use super::section;
use crate::app::{App, BuildRow, DefensiveField};
use build_core::{tables, SkillKind};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    draw_rows(f, app, chunks[0]);
    draw_summary(f, app, chunks[1]);
}

fn draw_rows(f: &mut Frame, app: &App, area: Rect) {
    let rows = app.build_rows();
    let main_stat = app.character.main_stat();

    let lines: Vec<Line> = rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let (label, value) = describe(app, row);
            let selected = i == app.build_selected;
            let locked = matches!(row, BuildRow::Pure(stat) if Some(*stat) == main_stat);

            let (prefix, label_style) = if selected {
                ("> ", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
            } else {
                ("  ", Style::default().fg(Color::Gray))
            };
            let value_style = if locked {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default().fg(Color::White)
            };

            Line::from(vec![
                Span::styled(prefix, Style::default().fg(Color::Yellow)),
                Span::styled(format!("{:26}", label), label_style),
                Span::styled(value, value_style),
            ])
        })
        .collect();

    // Keep the selection on screen
    let visible = area.height.saturating_sub(2) as usize;
    let offset = app.build_selected.saturating_sub(visible.saturating_sub(1)) as u16;

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Build "))
        .scroll((offset, 0));

    f.render_widget(paragraph, area);
}

/// Label and current value of one row
fn describe(app: &App, row: &BuildRow) -> (String, String) {
    let character = &app.character;
    let buffs = character.buffs();
    let tables = tables();
    let on_off = |on: bool| (if on { "on" } else { "off" }).to_string();

    match row {
        BuildRow::Level => ("Level".to_string(), character.level().to_string()),
        BuildRow::Job => ("Job".to_string(), character.job().name().to_string()),
        BuildRow::Pure(stat) => {
            let value = if character.main_stat() == Some(*stat) {
                character
                    .main_stat_value(tables)
                    .map(|v| format!("{} (derived)", v))
                    .unwrap_or_default()
            } else {
                character.pure().get(*stat).to_string()
            };
            (format!("Pure {}", stat.name()), value)
        }
        BuildRow::BaseHp => ("Base HP".to_string(), character.base_hp.to_string()),
        BuildRow::BaseMp => ("Base MP".to_string(), character.base_mp.to_string()),
        BuildRow::SelfBuff => (tables.self_buff.name.clone(), on_off(buffs.self_buff.enabled)),
        BuildRow::SelfBuffLevel => (
            format!("{} level", tables.self_buff.name),
            format!(
                "{} (+{}%)",
                buffs.self_buff.level,
                tables.self_buff_percent(buffs.self_buff.level)
            ),
        ),
        BuildRow::AttackBuff(slot) => {
            let buff = if *slot == 1 { &buffs.buff1 } else { &buffs.buff2 };
            (format!("Attack buff {}", slot), buff.label(tables))
        }
        BuildRow::Echo => ("Echo".to_string(), on_off(buffs.echo)),
        BuildRow::Mastery => ("Mastery".to_string(), format!("{}%", buffs.mastery.percent())),
        BuildRow::MasteryAttack => (
            "Mastery attack".to_string(),
            format!("+{}", buffs.mastery_flat_attack),
        ),
        BuildRow::Absorption => ("Damage absorption".to_string(), on_off(buffs.absorption)),
        BuildRow::Defensive(field) => {
            let d = &buffs.defensive;
            let value = match field {
                DefensiveField::Pdef => d.pdef,
                DefensiveField::Mdef => d.mdef,
                DefensiveField::Acc => d.acc,
                DefensiveField::Eva => d.eva,
                DefensiveField::Speed => d.speed,
                DefensiveField::Jump => d.jump,
            };
            (field.name().to_string(), format!("+{}", value))
        }
        BuildRow::Skill(kind, id) => {
            let (name, max) = match kind {
                SkillKind::Passive => tables.passive(id).map(|s| (s.name.clone(), s.max_level)),
                SkillKind::Reduction => tables
                    .reduction_skill(id)
                    .map(|s| (s.name.clone(), s.max_level)),
                SkillKind::Evasion => tables
                    .evasion_skill(id)
                    .map(|s| (s.name.clone(), s.max_level)),
            }
            .unwrap_or_else(|| (id.clone(), 0));
            (name, format!("{}/{}", character.skill_level(*kind, id), max))
        }
        BuildRow::Monster => (
            "Target".to_string(),
            app.selected_monster()
                .map(|m| m.name.clone())
                .unwrap_or_else(|| "-".to_string()),
        ),
    }
}

fn draw_summary(f: &mut Frame, app: &App, area: Rect) {
    let report = &app.report;
    let stats = &report.stats;

    let mut lines = vec![
        section("Result"),
        Line::from(vec![
            Span::styled(format!("{:14}", "Damage"), Style::default().fg(Color::Gray)),
            Span::styled(
                report.outgoing.to_string(),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(format!("{:14}{}", "Attack", stats.total_attack)),
        Line::from(format!("{:14}{}", "Magic", stats.total_mad)),
        Line::from(format!("{:14}{} / {}", "Main / Sub", stats.main_stat, stats.sub_stat)),
        Line::from(format!("{:14}{}", "HP", stats.hp)),
    ];

    if let Some(target) = &report.target {
        lines.push(Line::from(""));
        lines.push(section("Target"));
        lines.push(Line::from(format!("{:14}{:.1}%", "Hit rate", target.rates.hit_rate)));
        if let Some(worst) = target.incoming.worst() {
            lines.push(Line::from(format!(
                "{:14}{} ({})",
                "Worst hit", worst.final_range, worst.name
            )));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Main stat is back-computed from level",
        Style::default().fg(Color::DarkGray),
    )));
    lines.push(Line::from(Span::styled(
        "minus the other three pure stats.",
        Style::default().fg(Color::DarkGray),
    )));

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Summary "));

    f.render_widget(paragraph, area);
}
