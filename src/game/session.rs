//! The game session state machine: which screen is active, routing of
//! per-tick input into the simulation, and the events the shell must act on.

use crate::game::logic;
use crate::game::types::World;
use rand::Rng;

/// Which screen the session is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Menu,
    Instructions,
    Leaderboard,
    Playing,
    GameOver,
}

/// Level-triggered input state for one tick, drained from the key-event
/// queue by the main loop. Holding a key keeps its flag set each tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputFrame {
    pub jump: bool,
    pub instructions: bool,
    pub leaderboard: bool,
    pub back: bool,
    pub quit: bool,
    /// Terminal close request (Ctrl+C); honored from every screen.
    pub close: bool,
}

/// Side effects requested by a tick. The session itself never touches the
/// terminal, audio, or the filesystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    Cue(crate::game::types::AudioCue),
    /// A new high score to persist. Emitted at most once per run, at the
    /// transition into game over.
    HighScore(u32),
    Exit,
}

/// Owns all mutable game state across screens.
pub struct Session {
    pub screen: Screen,
    pub world: World,
    pub high_score: u32,
}

impl Session {
    pub fn new(high_score: u32) -> Self {
        Self {
            screen: Screen::Menu,
            world: World::new(),
            high_score,
        }
    }

    /// Advance the session by one tick, dispatching on the current screen.
    pub fn tick<R: Rng>(&mut self, input: &InputFrame, rng: &mut R) -> Vec<SessionEvent> {
        let mut events = Vec::new();

        if input.close {
            events.push(SessionEvent::Exit);
            return events;
        }

        match self.screen {
            Screen::Menu => {
                if input.quit {
                    events.push(SessionEvent::Exit);
                } else if input.jump {
                    self.start_run();
                } else if input.instructions {
                    self.screen = Screen::Instructions;
                } else if input.leaderboard {
                    self.screen = Screen::Leaderboard;
                }
            }
            Screen::Instructions | Screen::Leaderboard => {
                if input.back {
                    self.screen = Screen::Menu;
                }
            }
            Screen::Playing => {
                let outcome = logic::tick(&mut self.world, input.jump, rng);
                for cue in &outcome.cues {
                    events.push(SessionEvent::Cue(*cue));
                }
                if outcome.collided {
                    self.screen = Screen::GameOver;
                    if self.world.score > self.high_score {
                        self.high_score = self.world.score;
                        events.push(SessionEvent::HighScore(self.high_score));
                    }
                }
            }
            Screen::GameOver => {
                if input.jump {
                    self.start_run();
                } else if input.back {
                    self.screen = Screen::Menu;
                }
            }
        }

        events
    }

    fn start_run(&mut self) {
        self.world.reset();
        self.screen = Screen::Playing;
    }
}
