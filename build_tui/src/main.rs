//! build_tui - Interactive TUI for exploring character builds

mod app;
mod scenario;
mod simulation;
mod ui;

use anyhow::Result;
use app::App;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::Backend, backend::CrosstermBackend, Terminal};
use std::io;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const LOG_FILE: &str = "build_tui.log";

fn main() -> Result<()> {
    // Dropping the guard at exit flushes the log file
    let _guard = setup_logging()?;

    let data_dir = std::env::var_os("BUILD_TUI_DATA")
        .map(PathBuf::from)
        .unwrap_or_else(|| Path::new(env!("CARGO_MANIFEST_DIR")).join("data"));
    let scenario_path = std::env::args_os().nth(1).map(PathBuf::from);
    let mut app = App::load(&data_dir, scenario_path.as_deref())?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        tracing::error!("exiting with error: {:#}", e);
    }
    result
}

fn run<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if !event::poll(std::time::Duration::from_millis(100))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        match (key.code, key.modifiers) {
            (KeyCode::Char('q'), _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => break,
            (KeyCode::Tab, _) => app.next_tab(),
            (KeyCode::BackTab, _) => app.prev_tab(),
            (KeyCode::Char(c @ '1'..='6'), _) => app.set_tab(c as usize - '1' as usize),
            (KeyCode::Up, _) | (KeyCode::Char('k'), _) => app.on_up(),
            (KeyCode::Down, _) | (KeyCode::Char('j'), _) => app.on_down(),
            (KeyCode::Left, _) | (KeyCode::Char('h'), _) => app.on_left(),
            (KeyCode::Right, _) | (KeyCode::Char('l'), _) => app.on_right(),
            (KeyCode::Char('['), _) => app.adjust_selected(-10),
            (KeyCode::Char(']'), _) => app.adjust_selected(10),
            (KeyCode::Enter, _) => app.on_enter(),
            (KeyCode::Char(' '), _) => app.on_space(),
            (KeyCode::Char('u'), _) => app.unequip_current_slot(),
            (KeyCode::Char('m'), _) => app.cycle_monster(1),
            (KeyCode::Char('M'), _) => app.cycle_monster(-1),
            (KeyCode::Char('s'), _) => app.run_simulation(),
            (KeyCode::Char('r'), _) => app.reset(),
            (KeyCode::Char('?'), _) => app.set_tab(5),
            _ => {}
        }
    }
    Ok(())
}

/// Log to a file only; stderr would corrupt the terminal UI
fn setup_logging() -> Result<WorkerGuard> {
    let log_dir = log_directory();
    let (non_blocking_file, guard) = log_writer(&log_dir)?;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    tracing::info!("log file: {}/{}", log_dir.display(), LOG_FILE);
    Ok(guard)
}

/// Non-blocking writer to `LOG_FILE` in `dir`; lines reach disk once the guard drops
fn log_writer(dir: &Path) -> Result<(NonBlocking, WorkerGuard)> {
    std::fs::create_dir_all(dir)?;
    let file_appender = tracing_appender::rolling::never(dir, LOG_FILE);
    Ok(tracing_appender::non_blocking(file_appender))
}

fn log_directory() -> PathBuf {
    if let Some(dir) = std::env::var_os("BUILD_TUI_LOG_DIR") {
        return PathBuf::from(dir);
    }
    if let Some(xdg_cache) = std::env::var_os("XDG_CACHE_HOME") {
        return PathBuf::from(xdg_cache).join("build_tui").join("logs");
    }
    if let Some(home) = std::env::var_os("HOME") {
        return PathBuf::from(home).join(".cache").join("build_tui").join("logs");
    }
    std::env::temp_dir().join("build_tui").join("logs")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_log_lines_flushed_when_guard_drops() {
        let dir = std::env::temp_dir().join(format!("build_tui_log_{}", std::process::id()));
        let (mut writer, guard) = log_writer(&dir).unwrap();
        writer.write_all(b"exiting with error: boom\n").unwrap();
        drop(guard);

        let contents = std::fs::read_to_string(dir.join(LOG_FILE)).unwrap();
        assert!(contents.contains("exiting with error: boom"));
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
