use std::io;
use std::time::Instant;

use anyhow::Result;
use crossterm::tty::IsTty;
use log::{debug, info};

use crate::core::GameState;
use crate::input::{KeySource, TerminalKeys};
use crate::term::{FrameBuffer, FrameSink, GameView, TerminalRenderer};
use crate::types::Outcome;

/// Final result of one match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchReport {
    pub outcome: Outcome,
    pub player_score: u32,
    pub bot_score: u32,
    pub frames: u64,
}

impl MatchReport {
    fn from_state(state: &GameState) -> Self {
        Self {
            outcome: state.outcome().unwrap_or(Outcome::Quit),
            player_score: state.player_score(),
            bot_score: state.bot_score(),
            frames: state.frame(),
        }
    }
}

/// Both ends of the terminal must be a TTY for raw-mode play.
pub fn is_interactive() -> bool {
    io::stdin().is_tty() && io::stdout().is_tty()
}

/// Play a match on the real terminal.
///
/// Raw mode is held only for the duration of the loop and is restored
/// before this returns, including when the loop fails. Records above
/// `debug` are only written while the terminal is in cooked mode.
pub fn play(mut state: GameState) -> Result<MatchReport> {
    info!(
        "match start: difficulty={} seed={}",
        state.difficulty().as_str(),
        state.seed()
    );

    let mut renderer = TerminalRenderer::new();
    renderer.enter()?;

    let result = run_match(&mut state, &mut TerminalKeys::new(), &mut renderer);
    let restored = renderer.exit();

    let report = result?;
    restored?;
    info!(
        "match end: {:?} {}-{} after {} frames",
        report.outcome, report.player_score, report.bot_score, report.frames
    );
    Ok(report)
}

/// Drive `state` until it stops running.
///
/// Each frame: draw, then wait for keys until the frame deadline (applying
/// every key as it arrives), then step the simulation. A quit key ends the
/// wait early and no further frame is simulated.
///
/// Runs with the terminal in raw mode, so it logs at `debug` only.
pub fn run_match<K, S>(state: &mut GameState, keys: &mut K, sink: &mut S) -> Result<MatchReport>
where
    K: KeySource + ?Sized,
    S: FrameSink + ?Sized,
{
    let view = GameView::default();
    let (w, h) = GameView::size();
    let mut fb = FrameBuffer::new(w, h);
    let frame_delay = state.frame_delay();

    while state.running() {
        view.render_into(&state.snapshot(), &mut fb);
        sink.draw(&fb)?;

        let deadline = Instant::now() + frame_delay;
        wait_for_frame(state, keys, deadline)?;
        if !state.running() {
            break;
        }

        if let Some(point) = state.update() {
            debug!(
                "frame {}: {:?} scored ({}-{})",
                state.frame(),
                point,
                state.player_score(),
                state.bot_score()
            );
        }
    }

    // Leave the final position on screen.
    view.render_into(&state.snapshot(), &mut fb);
    sink.draw(&fb)?;

    Ok(MatchReport::from_state(state))
}

fn wait_for_frame<K>(state: &mut GameState, keys: &mut K, deadline: Instant) -> Result<()>
where
    K: KeySource + ?Sized,
{
    loop {
        let timeout = deadline.saturating_duration_since(Instant::now());
        if timeout.is_zero() {
            return Ok(());
        }
        if let Some(action) = keys.next_action(timeout)? {
            state.apply_action(action);
            if !state.running() {
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::ScriptedKeys;
    use crate::types::{BotParams, Difficulty, PongAction, ARENA_HEIGHT};

    #[derive(Default)]
    struct Frames(Vec<FrameBuffer>);

    impl FrameSink for Frames {
        fn draw(&mut self, fb: &FrameBuffer) -> Result<()> {
            self.0.push(fb.clone());
            Ok(())
        }
    }

    fn quick(seed: u64, frame_delay_ms: u64) -> GameState {
        let params = BotParams {
            frame_delay_ms,
            ..Difficulty::Medium.params()
        };
        GameState::with_params(Difficulty::Medium, params, seed)
    }

    #[test]
    fn test_quit_before_first_step() {
        let mut state = quick(1, 50);
        let mut keys = ScriptedKeys::new([Some(PongAction::Quit)]);
        let mut frames = Frames::default();

        let report = run_match(&mut state, &mut keys, &mut frames).unwrap();
        assert_eq!(report.outcome, Outcome::Quit);
        assert_eq!(report.frames, 0);
        // initial frame + final frame
        assert_eq!(frames.0.len(), 2);
    }

    #[test]
    fn test_keys_apply_before_next_render() {
        let mut state = quick(2, 50);
        let start = state.player_y();
        let mut keys = ScriptedKeys::new([
            Some(PongAction::PaddleUp),
            None,
            Some(PongAction::Quit),
        ]);
        let mut frames = Frames::default();

        run_match(&mut state, &mut keys, &mut frames).unwrap();
        assert_eq!(state.player_y(), start - 1);
        assert_eq!(state.frame(), 1);

        // The second frame shows the paddle one row higher.
        let second = &frames.0[1];
        let col = crate::types::PLAYER_COLUMN as u16;
        assert_eq!(second.get(col, (start - 1) as u16).unwrap().ch, '█');
        assert_eq!(second.get(col, (start + 2) as u16).unwrap().ch, ' ');
    }

    #[test]
    fn test_match_runs_to_a_winner() {
        let mut state = quick(3, 1);
        let mut keys = ScriptedKeys::default();
        let mut frames = Frames::default();

        let report = run_match(&mut state, &mut keys, &mut frames).unwrap();
        assert_ne!(report.outcome, Outcome::Quit);
        assert!(report.player_score == 5 || report.bot_score == 5);
        assert!(!state.running());

        let last = frames.0.last().unwrap();
        let line = last.row_text(ARENA_HEIGHT as u16);
        assert!(line.contains(&format!(
            "You {} - {} Bot",
            report.player_score, report.bot_score
        )));
    }
}
