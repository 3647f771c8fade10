//! Damage tab view - outgoing range, hits to kill, incoming table

use super::{section, stat_line, stat_line_with_note};
use crate::app::{App, SIMULATION_TRIALS};
use build_core::HitCount;
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
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    draw_outgoing(f, app, chunks[0]);
    draw_incoming(f, app, chunks[1]);
}

fn hits(count: Option<HitCount>) -> String {
    match count {
        Some(c) if c.fewest == c.most => c.fewest.to_string(),
        Some(c) => format!("{} ~ {}", c.fewest, c.most),
        None => "never".to_string(),
    }
}

fn draw_outgoing(f: &mut Frame, app: &App, area: Rect) {
    let report = &app.report;

    let mut lines = vec![
        section("Outgoing"),
        Line::from(vec![
            Span::styled(format!("{:18}", "Range"), Style::default().fg(Color::Gray)),
            Span::styled(
                report.outgoing.to_string(),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
        ]),
        stat_line("Average", format!("{:.1}", report.outgoing.average())),
        stat_line_with_note(
            "Mastery",
            format!("{}%", report.snapshot.mastery_percent),
            "gates the minimum roll",
        ),
        stat_line("Attack", report.stats.total_attack),
    ];

    if let (Some(target), Some(monster)) = (&report.target, app.selected_monster()) {
        lines.push(Line::from(""));
        lines.push(section(&monster.name));
        lines.push(stat_line("HP", monster.stats.max_hp));
        lines.push(stat_line("Hits to kill", hits(target.hits_to_kill)));
        lines.push(stat_line("Hit rate", format!("{:.1}%", target.rates.hit_rate)));
    }

    lines.push(Line::from(""));
    lines.push(section("Survival Simulation"));
    match &app.simulation {
        Some(sim) => {
            lines.push(stat_line_with_note(
                "Win rate",
                format!("{:.1}%", sim.win_rate * 100.0),
                format!("{} fights", sim.trials),
            ));
            lines.push(stat_line("Avg rounds", format!("{:.1}", sim.avg_rounds)));
            lines.push(stat_line("Avg HP left", format!("{:.0}", sim.avg_hp_left)));
            if sim.stalemate_rate > 0.0 {
                lines.push(stat_line(
                    "Stalemates",
                    format!("{:.1}%", sim.stalemate_rate * 100.0),
                ));
            }
        }
        None => lines.push(Line::from(Span::styled(
            format!("  [s] duel the target {} times", SIMULATION_TRIALS),
            Style::default().fg(Color::DarkGray),
        ))),
    }

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Your Damage "))
        .scroll((app.scroll, 0));

    f.render_widget(paragraph, area);
}

fn draw_incoming(f: &mut Frame, app: &App, area: Rect) {
    let mut lines: Vec<Line> = vec![];

    match &app.report.target {
        None => {
            lines.push(Line::from(Span::styled(
                "No target selected",
                Style::default().fg(Color::DarkGray),
            )));
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "Press m to pick a monster",
                Style::default().fg(Color::DarkGray),
            )));
        }
        Some(target) => {
            lines.push(Line::from(Span::styled(
                format!(
                    "{:18}{:>8}{:>16}{:>16}{:>8}",
                    "Attack", "Value", "Base", "Final", "Hits"
                ),
                Style::default().fg(Color::DarkGray),
            )));

            for entry in &target.incoming.entries {
                let worst = target
                    .incoming
                    .worst()
                    .is_some_and(|w| w.name == entry.name && w.final_range == entry.final_range);
                let final_style = if worst {
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                };

                lines.push(Line::from(vec![
                    Span::styled(
                        format!("{:18}", format!("{} ({})", entry.name, entry.tag.name())),
                        Style::default().fg(Color::Gray),
                    ),
                    Span::raw(format!("{:>8}{:>16}", entry.attack, entry.base.to_string())),
                    Span::styled(format!("{:>16}", entry.final_range.to_string()), final_style),
                    Span::raw(format!("{:>8}", hits(entry.hits_to_die))),
                ]));

                let mut notes = vec![];
                if (entry.reduction_multiplier - 1.0).abs() > f64::EPSILON {
                    notes.push(format!("reduced ×{:.3}", entry.reduction_multiplier));
                }
                if (entry.power_multiplier - 1.0).abs() > f64::EPSILON {
                    notes.push(format!("powered ×{:.2}", entry.power_multiplier));
                }
                if !notes.is_empty() {
                    lines.push(Line::from(Span::styled(
                        format!("    {}", notes.join(", ")),
                        Style::default().fg(Color::DarkGray),
                    )));
                }
            }

            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!("Hits = hits to drop from {} HP", app.report.stats.hp),
                Style::default().fg(Color::DarkGray),
            )));
        }
    }

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Incoming Damage "))
        .scroll((app.scroll, 0));

    f.render_widget(paragraph, area);
}
