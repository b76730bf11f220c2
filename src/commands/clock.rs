//! `clock`: a live `HH:MM:SS` display.

use std::time::Duration;

use anyhow::Result;
use chrono::{Local, Timelike};
use log::debug;

use order_engine::input::{KeySource, TerminalKeys};
use order_engine::term::{CellStyle, FrameBuffer, FrameSink, Rgb, TerminalRenderer};
use order_engine::types::PongAction;

const HINT: &str = "q quits";

pub fn format_time<T: Timelike>(t: &T) -> String {
    format!("{:02}:{:02}:{:02}", t.hour(), t.minute(), t.second())
}

/// Time left until the next whole second.
pub fn until_next_second<T: Timelike>(t: &T) -> Duration {
    let nanos = t.nanosecond().min(999_999_999);
    Duration::from_nanos(u64::from(1_000_000_000 - nanos))
}

pub fn clock_frame(time: &str) -> FrameBuffer {
    let width = time.len().max(HINT.len()) as u16;
    let mut fb = FrameBuffer::new(width, 2);
    fb.text(0, 0, time, CellStyle::fg(Rgb::CLOCK).bold());
    fb.text(0, 1, HINT, CellStyle::default());
    fb
}

/// Redraw until a quit key. `now` yields the time to show and the wait
/// before the next redraw.
pub fn run_clock<K, S, F>(keys: &mut K, sink: &mut S, mut now: F) -> Result<u64>
where
    K: KeySource + ?Sized,
    S: FrameSink + ?Sized,
    F: FnMut() -> (String, Duration),
{
    let mut redraws = 0u64;
    loop {
        let (time, wait) = now();
        sink.draw(&clock_frame(&time))?;
        redraws += 1;
        if keys.next_action(wait)? == Some(PongAction::Quit) {
            return Ok(redraws);
        }
    }
}

/// Interactive terminals get the live clock; anything else prints once.
pub fn run() -> Result<Option<String>> {
    if !order_engine::is_interactive() {
        return Ok(Some(format_time(&Local::now())));
    }

    let mut renderer = TerminalRenderer::new();
    renderer.enter()?;
    let result = run_clock(&mut TerminalKeys::new(), &mut renderer, || {
        let t = Local::now();
        (format_time(&t), until_next_second(&t))
    });
    let restored = renderer.exit();

    let redraws = result?;
    restored?;
    debug!("clock closed after {redraws} redraws");
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;
    use order_engine::input::ScriptedKeys;

    #[derive(Default)]
    struct Frames(Vec<String>);

    impl FrameSink for Frames {
        fn draw(&mut self, fb: &FrameBuffer) -> Result<()> {
            self.0.push(fb.row_text(0));
            Ok(())
        }
    }

    #[test]
    fn zero_padded() {
        let t = NaiveTime::from_hms_opt(7, 5, 9).unwrap();
        assert_eq!(format_time(&t), "07:05:09");
        let t = NaiveTime::from_hms_opt(23, 59, 59).unwrap();
        assert_eq!(format_time(&t), "23:59:59");
    }

    #[test]
    fn waits_for_the_rest_of_the_second() {
        let t = NaiveTime::from_hms_milli_opt(12, 0, 0, 250).unwrap();
        assert_eq!(until_next_second(&t), Duration::from_millis(750));
    }

    #[test]
    fn frame_shows_time_and_hint() {
        let fb = clock_frame("10:20:30");
        assert_eq!(fb.row_text(0).trim_end(), "10:20:30");
        assert_eq!(fb.row_text(1).trim_end(), HINT);
    }

    #[test]
    fn redraws_until_quit() {
        let mut keys = ScriptedKeys::new([None, None, Some(PongAction::Quit)]);
        let mut frames = Frames::default();
        let mut tick = 0;
        let redraws = run_clock(&mut keys, &mut frames, || {
            tick += 1;
            (format!("00:00:{tick:02}"), Duration::from_millis(1))
        })
        .unwrap();
        assert_eq!(redraws, 3);
        assert_eq!(frames.0[2].trim_end(), "00:00:03");
    }

    #[test]
    fn paddle_keys_do_not_close_it() {
        let mut keys = ScriptedKeys::new([
            Some(PongAction::PaddleUp),
            Some(PongAction::PaddleDown),
            Some(PongAction::Quit),
        ]);
        let mut frames = Frames::default();
        let redraws = run_clock(&mut keys, &mut frames, || {
            ("00:00:00".to_string(), Duration::from_millis(1))
        })
        .unwrap();
        assert_eq!(redraws, 3);
    }
}
