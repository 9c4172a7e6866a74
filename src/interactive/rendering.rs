//! TUI rendering with ratatui

use super::app::{App, InputMode, MessageStyle};
use crate::core::Difficulty;
use crate::output::formatters::score_to_pegs;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(8),    // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    if app.input_mode == InputMode::SelectDifficulty {
        render_menu(f, app, main_chunks[0]);
    } else {
        render_history(f, app, main_chunks[0]);
    }
    render_messages(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎯 HIT AND BLOW")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_menu(f: &mut Frame, app: &App, area: Rect) {
    let selected = app.highlighted_difficulty();

    let items: Vec<ListItem> = Difficulty::ALL
        .iter()
        .map(|&difficulty| {
            let label = format!(
                "{:<8} {} digits",
                difficulty.name(),
                difficulty.code_length()
            );
            if difficulty == selected {
                ListItem::new(format!("▶ {label}")).style(
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                ListItem::new(format!("  {label}"))
            }
        })
        .collect();

    let menu = List::new(items).block(
        Block::default()
            .title(" Select a mode ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(menu, area);
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let history = app.game.history();

    let lines: Vec<Line> = if history.is_empty() {
        vec![Line::from("No guesses yet")]
    } else {
        // Newest last; show what fits
        let visible = usize::from(area.height.saturating_sub(2));
        history
            .iter()
            .enumerate()
            .skip(history.len().saturating_sub(visible))
            .map(|(i, turn)| {
                Line::from(vec![
                    Span::styled(
                        format!("{:>3}. ", i + 1),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::styled(
                        turn.guess.to_string(),
                        Style::default()
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw("  "),
                    Span::styled(score_to_pegs(turn.score), Style::default().fg(Color::Green)),
                    Span::raw(format!(
                        "  Hit: {} Blow: {}",
                        turn.score.hits, turn.score.blows
                    )),
                ])
            })
            .collect()
    };

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" History ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::SelectDifficulty => (
            " ↑/↓ to choose, Enter to start ".to_string(),
            "",
            Color::Cyan,
        ),
        InputMode::Guessing => (
            format!(
                " Enter {} digits separated by ',' ",
                app.game.difficulty().map_or(0, Difficulty::code_length)
            ),
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
        InputMode::WinCelebration => (
            " 🎉 CORRECT! 🎉 | Press 'n' for new game or 'q' to quit ".to_string(),
            "",
            Color::Green,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(50),
        ])
        .split(area);

    let mode_text = app
        .game
        .difficulty()
        .map_or_else(|| "Mode: -".to_string(), |d| format!("Mode: {d}"));
    f.render_widget(
        Paragraph::new(mode_text).alignment(Alignment::Center),
        chunks[0],
    );

    let stats_text = format!(
        "Tries: {} | Won: {} | Avg: {:.1}",
        app.game.try_count(),
        app.stats.games_won,
        app.stats.average_tries()
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[1],
    );

    let help_text = match app.input_mode {
        InputMode::SelectDifficulty => "q: Quit | Enter: Start",
        InputMode::Guessing => "Esc: Quit | Enter: Submit | Backspace: Delete",
        InputMode::WinCelebration => "q: Quit | n: New Game",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
