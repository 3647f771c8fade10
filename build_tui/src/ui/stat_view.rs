//! Stats tab view

use super::{section, stat_line, stat_line_with_note};
use crate::app::App;
use build_core::PrimaryStat;
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
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    draw_stat_window(f, app, chunks[0]);
    draw_breakdown(f, app, chunks[1]);
}

fn draw_stat_window(f: &mut Frame, app: &App, area: Rect) {
    let stats = &app.report.stats;
    let snapshot = &app.report.snapshot;

    let role = |stat: Option<PrimaryStat>| stat.map(|s| s.name()).unwrap_or("-");
    let weapon = snapshot.weapon.map(|w| w.name()).unwrap_or("Unarmed");

    let mut lines = vec![
        section("Character"),
        stat_line("Level", snapshot.level),
        stat_line("Job", snapshot.job.name()),
        stat_line("Weapon", weapon),
        stat_line_with_note(
            "Main / Sub",
            format!("{} / {}", role(stats.main_role), role(stats.sub_role)),
            format!("{} / {}", stats.main_stat, stats.sub_stat),
        ),
        Line::from(""),
        section("Attributes"),
    ];
    for &stat in PrimaryStat::all() {
        lines.push(primary_line(stat, stats.total(stat), stats.main_role == Some(stat)));
    }

    lines.extend([
        Line::from(""),
        section("Offense"),
        stat_line("Attack", stats.total_attack),
        stat_line("Magic", stats.total_mad),
        stat_line("Accuracy", stats.acc),
        stat_line("Magic Accuracy", stats.magic_accuracy),
        stat_line("Mastery", format!("{}%", snapshot.mastery_percent)),
        Line::from(""),
        section("Defense"),
        stat_line("W.Def", stats.pdef),
        stat_line("M.Def", stats.mdef),
        stat_line("Avoid", stats.eva),
        Line::from(""),
        section("Resources"),
        stat_line("HP", stats.hp),
        stat_line("MP", stats.mp),
        stat_line("Speed", format!("{}%", stats.speed)),
        stat_line("Jump", format!("{}%", stats.jump)),
    ]);

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Stat Window "))
        .scroll((app.scroll, 0));

    f.render_widget(paragraph, area);
}

fn primary_line(stat: PrimaryStat, total: i32, is_main: bool) -> Line<'static> {
    let style = if is_main {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    Line::from(vec![
        Span::styled(format!("{:18}", stat.name()), style),
        Span::styled(total.to_string(), Style::default().fg(Color::White)),
    ])
}

fn draw_breakdown(f: &mut Frame, app: &App, area: Rect) {
    let stats = &app.report.stats;
    let snapshot = &app.report.snapshot;

    let mut lines = vec![
        section("Primary Breakdown"),
        Line::from(Span::styled(
            format!("{:8}{:>8}{:>8}{:>8}{:>8}", "", "Pure", "Gear", "Buff", "Total"),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    for &stat in PrimaryStat::all() {
        let b = stats.breakdown_of(stat);
        lines.push(Line::from(vec![
            Span::styled(format!("{:8}", stat.name()), Style::default().fg(Color::Gray)),
            Span::raw(format!("{:>8}{:>8}", b.pure, b.equipment)),
            Span::styled(format!("{:>8}", b.buff), Style::default().fg(Color::Green)),
            Span::styled(
                format!("{:>8}", b.total()),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(section("Buffs"));
    lines.push(stat_line("Attack buff 1", snapshot.buff1_value));
    lines.push(stat_line("Attack buff 2", snapshot.buff2_value));
    lines.push(stat_line(
        "Self buff",
        if snapshot.self_buff_enabled {
            format!("Lv {}", snapshot.self_buff_level)
        } else {
            "off".to_string()
        },
    ));
    lines.push(stat_line("Echo", if snapshot.echo { "on" } else { "off" }));

    lines.push(Line::from(""));
    lines.push(section("Equipment Totals"));
    let gear = snapshot.equipment.non_zero();
    if gear.is_empty() {
        lines.push(Line::from(Span::styled(
            "  nothing equipped",
            Style::default().fg(Color::DarkGray),
        )));
    }
    for (name, value) in gear {
        lines.push(stat_line(name, format!("+{}", value)));
    }

    let passive = snapshot.passive.non_zero();
    if !passive.is_empty() {
        lines.push(Line::from(""));
        lines.push(section("Passive Skills"));
        for (name, value) in passive {
            lines.push(stat_line(name, format!("+{}", value)));
        }
    }

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Breakdown "))
        .scroll((app.scroll, 0));

    f.render_widget(paragraph, area);
}
