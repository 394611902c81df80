//! Menu, Instructions, and Leaderboard scenes. Display-only: no simulation
//! runs while any of these is showing.

use crate::game::session::Session;
use crate::ui::render_status_bar;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render the title menu.
pub fn render_menu(frame: &mut Frame, area: Rect, session: &Session) {
    let inner = render_frame_block(frame, area, " Flappy Bird ", Color::Cyan);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "F L A P P Y   B I R D",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("High Score: {}", session.high_score),
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press Space to start",
            Style::default().fg(Color::Green),
        )),
    ];

    render_centered_body(frame, inner, lines);
    render_menu_controls(frame, inner, "Flap through the pipes!");
}

/// Render the instructions view.
pub fn render_instructions(frame: &mut Frame, area: Rect) {
    let inner = render_frame_block(frame, area, " Instructions ", Color::Cyan);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "How to play",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("The bird falls constantly. Press Space to flap upward."),
        Line::from("Steer through the gap in each pipe pair."),
        Line::from("Each pipe you clear is worth one point."),
        Line::from("Touching a pipe, the ceiling, or the ground ends the run."),
        Line::from(""),
        Line::from("Holding Space keeps flapping as soon as the wings recover."),
    ];

    render_centered_body(frame, inner, lines);
    render_back_controls(frame, inner);
}

/// Render the leaderboard view (a single persisted high score).
pub fn render_leaderboard(frame: &mut Frame, area: Rect, session: &Session) {
    let inner = render_frame_block(frame, area, " Leaderboard ", Color::Cyan);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Best run",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("{}", session.high_score),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "pipes cleared",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    render_centered_body(frame, inner, lines);
    render_back_controls(frame, inner);
}

fn render_frame_block(frame: &mut Frame, area: Rect, title: &str, color: Color) -> Rect {
    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

fn render_centered_body(frame: &mut Frame, inner: Rect, lines: Vec<Line>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(2)])
        .split(inner);

    // Push the body down toward the vertical center.
    let body = chunks[0];
    let pad = body.height.saturating_sub(lines.len() as u16) / 2;
    let centered = Rect {
        y: body.y + pad,
        height: body.height.saturating_sub(pad),
        ..body
    };

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, centered);
}

fn render_menu_controls(frame: &mut Frame, inner: Rect, status: &str) {
    let bar = bottom_bar(inner);
    render_status_bar(
        frame,
        bar,
        status,
        Color::DarkGray,
        &[
            ("[Space]", "Play"),
            ("[I]", "Instructions"),
            ("[L]", "Leaderboard"),
            ("[Q]", "Quit"),
        ],
    );
}

fn render_back_controls(frame: &mut Frame, inner: Rect) {
    let bar = bottom_bar(inner);
    render_status_bar(frame, bar, "", Color::DarkGray, &[("[Esc/B]", "Back to menu")]);
}

fn bottom_bar(inner: Rect) -> Rect {
    Rect {
        y: inner.y + inner.height.saturating_sub(2),
        height: inner.height.min(2),
        ..inner
    }
}
