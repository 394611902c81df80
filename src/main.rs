use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use flappy::audio;
use flappy::constants::TICKS_PER_SECOND;
use flappy::game::session::{InputFrame, Session, SessionEvent};
use flappy::highscore;
use flappy::ui;
use ratatui::{backend::CrosstermBackend, Terminal};
use rand::rngs::ThreadRng;
use std::io;
use std::time::{Duration, Instant};

fn main() -> io::Result<()> {
    let mut session = Session::new(highscore::read_high_score());
    let mut rng = rand::thread_rng();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut session, &mut rng);

    // Restore terminal on every exit path
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// The fixed-rate game loop: drain input, tick the session, dispatch the
/// resulting events, draw once.
fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    session: &mut Session,
    rng: &mut ThreadRng,
) -> io::Result<()> {
    let tick_rate = Duration::from_micros(1_000_000 / TICKS_PER_SECOND);
    let mut last_tick = Instant::now();
    let mut input = InputFrame::default();

    loop {
        // Wait for input up to the next tick boundary.
        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                collect_input(key, &mut input);
            }
        }

        if last_tick.elapsed() >= tick_rate {
            let events = session.tick(&input, rng);
            input = InputFrame::default();
            last_tick = Instant::now();

            for event in events {
                match event {
                    SessionEvent::Cue(cue) => audio::play(cue),
                    SessionEvent::HighScore(score) => {
                        // Best-effort; a failed write never interrupts play.
                        let _ = highscore::write_high_score(score);
                    }
                    SessionEvent::Exit => return Ok(()),
                }
            }

            terminal.draw(|frame| ui::draw(frame, session))?;
        }
    }
}

/// Fold a key event into the current tick's input frame. Terminal key
/// auto-repeat keeps the flags level-triggered, so a held Space re-flaps
/// whenever the cooldown runs out.
fn collect_input(key: KeyEvent, input: &mut InputFrame) {
    if key.kind == KeyEventKind::Release {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        input.close = true;
        return;
    }

    match key.code {
        KeyCode::Char(' ') | KeyCode::Up | KeyCode::Enter => input.jump = true,
        KeyCode::Char('i') | KeyCode::Char('I') => input.instructions = true,
        KeyCode::Char('l') | KeyCode::Char('L') => input.leaderboard = true,
        KeyCode::Esc | KeyCode::Char('b') | KeyCode::Char('B') => input.back = true,
        KeyCode::Char('q') | KeyCode::Char('Q') => input.quit = true,
        _ => {}
    }
}
