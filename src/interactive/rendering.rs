//! TUI rendering with ratatui
//!
//! Board grid, keyboard status display, messages, and the game-over overlay.

use super::app::{App, MessageStyle};
use crate::core::{Feedback, GameStatus, MAX_GUESSES, Mark, WORD_LENGTH, Word};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(8), // Board: 6 guess rows + borders
            Constraint::Length(5), // Keyboard: 3 rows + borders
            Constraint::Min(4),    // Messages
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_board(f, app, chunks[1]);
    render_keyboard(f, app, chunks[2]);
    render_messages(f, app, chunks[3]);
    render_status(f, app, chunks[4]);

    if app.session.status() != GameStatus::InProgress {
        render_game_over(f, app);
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("W O R D L E")
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

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let session = &app.session;
    let mut lines = Vec::with_capacity(MAX_GUESSES);

    for row in 0..MAX_GUESSES {
        if let Some(guess) = session.guesses().get(row) {
            lines.push(guess_line(guess, &session.score(guess)));
        } else if row == session.guesses().len() && session.status() == GameStatus::InProgress {
            lines.push(buffer_line(session.buffer()));
        } else {
            lines.push(empty_line());
        }
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(board, area);
}

fn guess_line(guess: &Word, feedback: &Feedback) -> Line<'static> {
    let mut spans = Vec::new();

    for (i, (letter, mark)) in guess.text().chars().zip(feedback.iter()).enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(
            format!(" {} ", letter.to_ascii_uppercase()),
            mark_style(mark),
        ));
    }

    Line::from(spans)
}

fn buffer_line(buffer: &str) -> Line<'static> {
    let mut spans = Vec::new();

    for i in 0..WORD_LENGTH {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        if let Some(letter) = buffer.chars().nth(i) {
            spans.push(Span::styled(
                format!(" {} ", letter.to_ascii_uppercase()),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::styled(" · ", Style::default().fg(Color::DarkGray)));
        }
    }

    Line::from(spans)
}

fn empty_line() -> Line<'static> {
    let mut spans = Vec::new();

    for i in 0..WORD_LENGTH {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(" · ", Style::default().fg(Color::DarkGray)));
    }

    Line::from(spans)
}

fn mark_style(mark: Mark) -> Style {
    match mark {
        Mark::Correct => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Mark::Misplaced => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        Mark::Incorrect => Style::default().fg(Color::White).bg(Color::DarkGray),
    }
}

const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let mut spans = Vec::new();
            for (i, key) in row.chars().enumerate() {
                if i > 0 {
                    spans.push(Span::raw(" "));
                }
                let style = app
                    .letter_marks
                    .get(&key.to_ascii_lowercase())
                    .map_or_else(|| Style::default().fg(Color::White), |mark| mark_style(*mark));
                spans.push(Span::styled(key.to_string(), style));
            }
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(keyboard, area);
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

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let attempt_text = if app.session.status() == GameStatus::InProgress {
        format!("Guess {}/{}", app.session.guesses().len() + 1, MAX_GUESSES)
    } else {
        "Game over".to_string()
    };
    let attempt = Paragraph::new(attempt_text).alignment(Alignment::Center);
    f.render_widget(attempt, chunks[0]);

    let stats_text = format!("Games: {} | Won: {}", app.stats.total_games, app.stats.games_won);
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let activity_text = if app.pending_guess.is_some() {
        "Checking word..."
    } else if app.fetching {
        "Fetching word..."
    } else {
        "Ready"
    };
    let activity = Paragraph::new(activity_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Yellow));
    f.render_widget(activity, chunks[2]);

    let help_text = if app.session.status() == GameStatus::InProgress {
        "Enter: Submit | Backspace: Delete | Esc: Quit"
    } else {
        "n: New Game | q: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}

fn render_game_over(f: &mut Frame, app: &App) {
    let session = &app.session;
    let won = session.status() == GameStatus::Won;

    let (title, color, headline) = if won {
        (
            " You won! ",
            Color::Green,
            format!("Solved in {} guesses!", session.guesses().len()),
        )
    } else {
        (" Game over ", Color::Red, "Out of guesses!".to_string())
    };

    let mut lines = vec![
        Line::from(Span::styled(
            headline,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(format!(
            "The word was: {}",
            session.target().text().to_uppercase()
        )),
        Line::from(""),
    ];

    for guess in session.guesses() {
        lines.push(Line::from(session.score(guess).to_emoji()));
    }

    let distribution = (1..=MAX_GUESSES)
        .map(|n| format!("{n}:{}", app.stats.guess_distribution[n]))
        .collect::<Vec<_>>()
        .join("  ");
    lines.push(Line::from(""));
    lines.push(Line::from(format!("Wins by guess count  {distribution}")));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "n: New Game   q: Quit",
        Style::default().fg(Color::DarkGray),
    )));

    let height = lines.len() as u16 + 2;
    let area = centered_rect(52, height, f.area());

    f.render_widget(Clear, area);

    let overlay = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(color)),
    );

    f.render_widget(overlay, area);
}

/// A fixed-size rectangle centered in `area`, clamped to fit
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
