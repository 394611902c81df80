//! Scene rendering. The simulation supplies positions and values; everything
//! pixel-ish (cell scaling, glyphs, colors) stays on this side.

pub mod menu_scene;
pub mod play_scene;

use crate::game::session::{Screen, Session};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Draw the current screen. Called exactly once per tick.
pub fn draw(frame: &mut Frame, session: &Session) {
    let area = frame.size();
    match session.screen {
        Screen::Menu => menu_scene::render_menu(frame, area, session),
        Screen::Instructions => menu_scene::render_instructions(frame, area),
        Screen::Leaderboard => menu_scene::render_leaderboard(frame, area, session),
        Screen::Playing => play_scene::render_playing(frame, area, session),
        Screen::GameOver => play_scene::render_game_over(frame, area, session),
    }
}

/// Render a 2-line status bar: status message on top, key hints below.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    status_text: &str,
    status_color: Color,
    controls: &[(&str, &str)],
) {
    if area.height < 1 {
        return;
    }

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(status_color))
        .alignment(Alignment::Center);
    frame.render_widget(status, Rect { height: 1, ..area });

    if area.height >= 2 && !controls.is_empty() {
        let mut spans = Vec::new();
        for (i, (key, action)) in controls.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(*key, Style::default().fg(Color::Yellow)));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(*action, Style::default().fg(Color::DarkGray)));
        }
        let controls_line = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
        frame.render_widget(
            controls_line,
            Rect {
                y: area.y + 1,
                height: 1,
                ..area
            },
        );
    }
}

/// Render a bordered, centered overlay box with the given lines.
pub fn render_overlay(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    border_color: Color,
    lines: Vec<Line>,
) {
    let width = (area.width.saturating_sub(4)).min(44).max(20);
    let height = (lines.len() as u16 + 4).min(area.height);
    let overlay = Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    };

    frame.render_widget(Clear, overlay);

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(overlay);
    frame.render_widget(block, overlay);

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, inner);
}
