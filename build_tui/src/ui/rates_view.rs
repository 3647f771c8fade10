//! Rates tab view - hit rate and evasion against the target

use super::{percent_color, progress_bar, section, stat_line};
use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const BAR_WIDTH: usize = 20;

fn rate_line(name: &str, percent: f64) -> Line<'static> {
    let color = percent_color(percent);
    Line::from(vec![
        Span::styled(format!("{:18}", name), Style::default().fg(Color::Gray)),
        Span::styled(progress_bar(percent, BAR_WIDTH), Style::default().fg(color)),
        Span::styled(format!(" {:5.1}%", percent), Style::default().fg(color)),
    ])
}

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let (Some(target), Some(monster)) = (&app.report.target, app.selected_monster()) else {
        let paragraph = Paragraph::new(vec![
            Line::from(Span::styled(
                "No target selected",
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Press m to pick a monster",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .block(Block::default().borders(Borders::ALL).title(" Rates "));
        f.render_widget(paragraph, area);
        return;
    };
    let rates = &target.rates;
    let stats = &app.report.stats;
    let magician = app.report.snapshot.job.is_magician();

    let accuracy = if magician {
        stats.magic_accuracy
    } else {
        stats.acc
    };
    let needed = match rates.accuracy_needed {
        Some(needed) if needed <= accuracy => format!("{} (met)", needed),
        Some(needed) => format!("{} ({} short)", needed, needed - accuracy),
        None => "unreachable".to_string(),
    };

    let hitting = vec![
        section("Hitting"),
        rate_line("Hit rate", rates.hit_rate),
        Line::from(""),
        stat_line(
            if magician { "Magic accuracy" } else { "Accuracy" },
            accuracy,
        ),
        stat_line("Needed for 100%", needed),
        Line::from(""),
        section(&monster.name),
        stat_line("Level", monster.stats.level),
        stat_line("Avoid", monster.stats.eva),
        stat_line("Accuracy", monster.stats.acc),
    ];

    let dodging = vec![
        section("Dodging"),
        rate_line("Physical", rates.physical_evasion),
        rate_line("Magic", rates.magic_evasion),
        Line::from(""),
        section("With Skills"),
        rate_line("Physical", rates.physical_evasion_total),
        rate_line("Magic", rates.magic_evasion_total),
        Line::from(""),
        stat_line("Avoid", stats.eva),
    ];

    f.render_widget(
        Paragraph::new(hitting)
            .block(Block::default().borders(Borders::ALL).title(" Offense "))
            .scroll((app.scroll, 0)),
        chunks[0],
    );
    f.render_widget(
        Paragraph::new(dodging)
            .block(Block::default().borders(Borders::ALL).title(" Defense "))
            .scroll((app.scroll, 0)),
        chunks[1],
    );
}
