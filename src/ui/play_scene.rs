//! Play-area rendering: scales the 400×600 playfield onto whatever terminal
//! cells are available, plus the score HUD and the game-over overlay.

use crate::constants::*;
use crate::game::session::Session;
use crate::game::types::World;
use crate::ui::{render_overlay, render_status_bar};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render the Playing screen.
pub fn render_playing(frame: &mut Frame, area: Rect, session: &Session) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Flappy Bird ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(2)])
        .split(inner);

    render_play_area(frame, chunks[0], &session.world);
    render_status_bar(
        frame,
        chunks[1],
        &format!(
            "Score: {}   High Score: {}",
            session.world.score, session.high_score
        ),
        Color::Green,
        &[("[Space]", "Flap")],
    );
}

/// Render the GameOver screen: the frozen play area with an overlay on top.
pub fn render_game_over(frame: &mut Frame, area: Rect, session: &Session) {
    render_playing(frame, area, session);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Game Over!",
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!("Score: {}", session.world.score)),
        Line::from(Span::styled(
            format!("High Score: {}", session.high_score),
            Style::default().fg(Color::Yellow),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "[Space] Play again   [Esc/B] Menu",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    render_overlay(frame, area, " Game Over ", Color::Red, lines);
}

/// Render the bird and pipes, cell by cell. Each cell samples the playfield
/// at its center, so the scene stays faithful at any terminal size.
fn render_play_area(frame: &mut Frame, area: Rect, world: &World) {
    let width = area.width as usize;
    let height = area.height as usize;
    if width == 0 || height == 0 {
        return;
    }

    let bird_col = (BIRD_X / PLAYFIELD_WIDTH * width as f64) as usize;
    let bird_row = ((world.bird.y / PLAYFIELD_HEIGHT * height as f64) as usize).min(height - 1);
    let bird_char = if world.bird.velocity < -0.5 {
        "▲" // climbing
    } else if world.bird.velocity > 4.0 {
        "▼" // falling fast
    } else {
        "►"
    };

    let mut lines = Vec::with_capacity(height);
    for row in 0..height {
        let game_y = (row as f64 + 0.5) / height as f64 * PLAYFIELD_HEIGHT;
        let mut spans = Vec::with_capacity(width);

        for col in 0..width {
            if row == bird_row && col == bird_col && world.bird.y >= 0.0 {
                spans.push(Span::styled(
                    bird_char,
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ));
                continue;
            }

            let game_x = (col as f64 + 0.5) / width as f64 * PLAYFIELD_WIDTH;
            let in_pipe = world.pipes.iter().any(|pipe| {
                game_x >= pipe.x
                    && game_x < pipe.right()
                    && (game_y < pipe.gap_center - PIPE_GAP / 2.0
                        || game_y >= pipe.gap_center + PIPE_GAP / 2.0)
            });

            if in_pipe {
                spans.push(Span::styled("█", Style::default().fg(Color::Green)));
            } else {
                spans.push(Span::raw(" "));
            }
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), area);
}
