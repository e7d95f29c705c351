//! TUI rendering with ratatui
//!
//! Visualizations for the robot Mastermind interface.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{Button, Code};
use crate::output::formatters::feedback_pegs;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap,
        canvas::{Canvas, Circle, Line as CanvasLine},
    },
};

/// Half the side of the square the buttons sit in, in mm
const FIELD_EXTENT: f64 = 1200.0;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_field(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🤖 ROBOT MASTERMIND - Interactive Mode")
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

fn render_main_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6),      // Current guess
            Constraint::Length(3),      // Search progress
            Constraint::Percentage(60), // History
            Constraint::Min(4),         // Messages
        ])
        .split(area);

    render_current_guess(f, app, chunks[0]);
    render_search_progress(f, app, chunks[1]);
    render_history(f, app, chunks[2]);
    render_messages(f, app, chunks[3]);
}

fn render_current_guess(f: &mut Frame, app: &App, area: Rect) {
    let session = &app.session;
    let guess = session.current_guess();
    let from = session
        .robot()
        .map_or_else(|| "center".to_string(), |button| button.to_string());

    let content = vec![
        Line::from(vec![
            Span::raw("Suggested: "),
            Span::styled(
                guess.to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(format!("Turn:      {}", session.turn())),
        Line::from(format!(
            "Travel:    {:.1} mm from {from}",
            crate::core::travel_distance(session.robot(), &guess)
        )),
        Line::from(match session.consistent_count() {
            Some(count) => format!("Possible:  {count} consistent codes"),
            None => "Possible:  not tracked".to_string(),
        }),
    ];

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Current Guess ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_search_progress(f: &mut Frame, app: &App, area: Rect) {
    let total = 8_f64.powi(app.code_length() as i32);
    let remaining = app
        .session
        .consistent_count()
        .map_or(total, |count| count.max(1) as f64);
    let total_bits = total.log2();
    let bits_gained = (total / remaining).log2();
    let progress_pct = ((bits_gained / total_bits * 100.0).clamp(0.0, 100.0)) as u16;

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(progress_pct)
        .label(format!("{bits_gained:.1}/{total_bits:.1} bits"));

    f.render_widget(gauge, area);
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let history = app.session.history();
    let items: Vec<ListItem> = history
        .iter()
        .enumerate()
        .rev()
        .map(|(i, entry)| {
            let counts = match (entry.consistent_before, entry.consistent_after) {
                (Some(before), Some(after)) => format!(" {before} → {after}"),
                _ => String::new(),
            };
            ListItem::new(format!(
                "{:2}: {} {} {}{counts}",
                i + 1,
                entry.guess,
                feedback_pegs(entry.feedback, entry.guess.len()),
                entry.feedback,
            ))
        })
        .collect();

    let list = List::new(items).block(Block::default().title(" History ").borders(Borders::ALL));
    f.render_widget(list, area);
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

    let list = List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));
    f.render_widget(list, area);
}

/// Points the robot visits to enter `code`, starting at `from` or the center
fn route(from: Option<Button>, code: &Code) -> Vec<(f64, f64)> {
    let start = from.map_or((0.0, 0.0), button_point);
    std::iter::once(start)
        .chain(code.buttons().iter().copied().map(button_point))
        .collect()
}

fn button_point(button: Button) -> (f64, f64) {
    let (x, y) = button.position();
    (f64::from(x), f64::from(y))
}

fn render_field(f: &mut Frame, app: &App, area: Rect) {
    let guess = app.session.current_guess();
    let path = route(app.session.robot(), &guess);

    let canvas = Canvas::default()
        .block(
            Block::default()
                .title(" Field ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .marker(Marker::Braille)
        .x_bounds([-FIELD_EXTENT, FIELD_EXTENT])
        .y_bounds([-FIELD_EXTENT, FIELD_EXTENT])
        .paint(move |ctx| {
            for pair in path.windows(2) {
                let ((x1, y1), (x2, y2)) = (pair[0], pair[1]);
                ctx.draw(&CanvasLine::new(x1, y1, x2, y2, Color::Yellow));
            }
            ctx.layer();

            for button in Button::ALL {
                let (x, y) = button_point(button);
                let color = if guess.buttons().contains(&button) {
                    Color::Green
                } else {
                    Color::DarkGray
                };
                ctx.draw(&Circle {
                    x,
                    y,
                    radius: 80.0,
                    color,
                });
                ctx.print(x * 0.8, y * 0.8, button.to_string());
            }
            ctx.print(0.0, 0.0, "+");
        });

    f.render_widget(canvas, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::WinCelebration => (
            " 🎉 CRACKED! 🎉 | Press 'n' for new game or 'q' to quit ",
            "",
            Color::Green,
        ),
        InputMode::Feedback => (
            " Enter Feedback (exact wrong, e.g. '2 1') | w: correct ",
            app.input_buffer.as_str(),
            Color::Yellow,
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

    let strategy = Paragraph::new(format!("Strategy: {}", app.session.strategy_name()))
        .alignment(Alignment::Center);
    f.render_widget(strategy, chunks[0]);

    let stats = app.session.stats();
    let average = if stats.games_won > 0 {
        let guesses: usize = stats
            .guess_distribution
            .iter()
            .map(|(guesses, count)| guesses * count)
            .sum();
        guesses as f64 / stats.games_won as f64
    } else {
        0.0
    };
    let stats_text = format!("Cracked: {} | Avg: {average:.2}", stats.games_won);
    f.render_widget(Paragraph::new(stats_text).alignment(Alignment::Center), chunks[1]);

    let help = Paragraph::new("q: Quit | n: New Game | u: Undo | w: Correct | Enter: Submit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
