//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! Every frame is a full clear-and-repaint. The grid is small and the frame
//! rate low, so there is no diffing.

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Once};
use std::thread;
use std::time::Duration;

use anyhow::Result;

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

/// Anything that can show a finished frame.
pub trait FrameSink {
    fn draw(&mut self, fb: &FrameBuffer) -> Result<()>;
}

/// Owns raw mode for the lifetime of a game.
///
/// `enter` switches the terminal to raw mode; dropping the renderer (or an
/// explicit `exit`) switches it back, so every exit path restores the
/// user's terminal.
pub struct TerminalRenderer {
    stdout: io::Stdout,
    buf: Vec<u8>,
    active: bool,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            buf: Vec::with_capacity(16 * 1024),
            active: false,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn enter(&mut self) -> Result<()> {
        restore_on_termination();
        terminal::enable_raw_mode()?;
        RAW_MODE.store(true, Ordering::SeqCst);
        self.active = true;
        self.buf.clear();
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.buf.queue(terminal::Clear(terminal::ClearType::All))?;
        self.flush_buf()?;
        Ok(())
    }

    /// Restore cooked mode. Safe to call more than once.
    pub fn exit(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        self.buf.clear();
        encode_restore_into(&mut self.buf)?;
        let flushed = self.flush_buf();
        terminal::disable_raw_mode()?;
        RAW_MODE.store(false, Ordering::SeqCst);
        flushed
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TerminalRenderer {
    fn drop(&mut self) {
        let _ = self.exit();
    }
}

impl FrameSink for TerminalRenderer {
    fn draw(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.buf.clear();
        encode_full_into(fb, &mut self.buf)?;
        self.flush_buf()
    }
}

/// Set while some renderer holds the terminal in raw mode.
static RAW_MODE: AtomicBool = AtomicBool::new(false);

static SIGNAL_WATCH: Once = Once::new();

/// Undo everything `TerminalRenderer::enter` changed.
pub fn encode_restore_into(out: &mut Vec<u8>) -> Result<()> {
    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(terminal::EnableLineWrap)?;
    out.queue(cursor::Show)?;
    // Leave the last frame on screen and continue below it.
    out.queue(Print("\r\n"))?;
    Ok(())
}

/// Exit status for a process stopped by signal `signo`, as shells report it.
pub fn signal_exit_status(signo: i32) -> i32 {
    128 + signo
}

/// Watch for SIGTERM, SIGHUP and SIGINT on a background thread.
///
/// On delivery the terminal is put back in cooked mode (if a renderer had
/// it in raw mode) and the process exits with `128 + signo`. Installed at
/// most once per process; returns after the handlers are registered.
pub fn restore_on_termination() {
    SIGNAL_WATCH.call_once(|| {
        let (ready_tx, ready_rx) = mpsc::channel();
        let spawned = thread::Builder::new()
            .name("order-term-signals".into())
            .spawn(move || watch_signals(ready_tx));
        if spawned.is_ok() {
            let _ = ready_rx.recv_timeout(Duration::from_secs(1));
        }
    });
}

fn watch_signals(ready: mpsc::Sender<()>) {
    let rt = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(_) => return,
    };
    if let Some(signo) = rt.block_on(next_termination(ready)) {
        if RAW_MODE.load(Ordering::SeqCst) {
            let _ = restore_now();
        }
        std::process::exit(signal_exit_status(signo));
    }
}

#[cfg(unix)]
async fn next_termination(ready: mpsc::Sender<()>) -> Option<i32> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut term = signal(SignalKind::terminate()).ok()?;
    let mut hup = signal(SignalKind::hangup()).ok()?;
    let mut int = signal(SignalKind::interrupt()).ok()?;
    let _ = ready.send(());

    tokio::select! {
        _ = term.recv() => Some(15),
        _ = hup.recv() => Some(1),
        _ = int.recv() => Some(2),
    }
}

#[cfg(not(unix))]
async fn next_termination(ready: mpsc::Sender<()>) -> Option<i32> {
    let _ = ready.send(());
    tokio::signal::ctrl_c().await.ok()?;
    Some(2)
}

fn restore_now() -> Result<()> {
    let mut buf = Vec::new();
    encode_restore_into(&mut buf)?;
    let mut stdout = io::stdout();
    stdout.write_all(&buf)?;
    stdout.flush()?;
    terminal::disable_raw_mode()?;
    RAW_MODE.store(false, Ordering::SeqCst);
    Ok(())
}

/// Clear the whole screen and home the cursor.
pub fn clear_screen<W: Write + ?Sized>(out: &mut W) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(terminal::Clear(terminal::ClearType::Purge))?;
    out.queue(cursor::MoveTo(0, 0))?;
    out.flush()?;
    Ok(())
}

/// Encode a full-frame redraw into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let mut current_style: Option<CellStyle> = None;
    for y in 0..fb.height() {
        // Absolute row positioning; raw mode does not translate `\n`.
        out.queue(cursor::MoveTo(0, y))?;
        for x in 0..fb.width() {
            let cell = fb.get(x, y).unwrap_or_default();
            if current_style != Some(cell.style) {
                apply_style_into(out, cell.style)?;
                current_style = Some(cell.style);
            }
            out.queue(Print(cell.ch))?;
        }
    }

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn apply_style_into(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
    out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
    out.queue(SetAttribute(Attribute::Reset))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restore_shows_cursor_and_rewraps_lines() {
        let mut out = Vec::new();
        encode_restore_into(&mut out).unwrap();
        let s = String::from_utf8_lossy(&out);
        assert!(s.contains("\u{1b}[?25h"), "{s:?}");
        assert!(s.contains("\u{1b}[?7h"), "{s:?}");
        assert!(s.ends_with("\r\n"));
    }

    #[test]
    fn signal_status_follows_shell_convention() {
        assert_eq!(signal_exit_status(15), 143);
        assert_eq!(signal_exit_status(1), 129);
        assert_eq!(signal_exit_status(2), 130);
    }

    #[test]
    fn full_redraw_starts_with_clear_and_contains_every_row() {
        let style = CellStyle::default();
        let mut fb = FrameBuffer::new(2, 2);
        fb.plot(0, 0, 'A', style);
        fb.plot(1, 0, 'B', style);
        fb.plot(0, 1, 'C', style);
        fb.plot(1, 1, 'D', style);

        let mut out = Vec::new();
        encode_full_into(&fb, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        // ESC[2J is a full clear.
        assert!(text.starts_with("\u{1b}[2J"));
        let ab = text.find("AB").unwrap();
        let cd = text.find("CD").unwrap();
        // ESC[2;1H moves to the second row.
        let row2 = text.find("\u{1b}[2;1H").unwrap();
        assert!(ab < row2 && row2 < cd);
    }

    #[test]
    fn style_switches_only_on_change() {
        let plain = CellStyle::default();
        let bold = plain.bold();
        let mut fb = FrameBuffer::new(3, 1);
        fb.plot(0, 0, 'a', plain);
        fb.plot(1, 0, 'b', plain);
        fb.plot(2, 0, 'c', bold);

        let mut out = Vec::new();
        encode_full_into(&fb, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("ab"));
        // ESC[1m is bold.
        assert_eq!(text.matches("\u{1b}[1m").count(), 1);
    }

    #[test]
    fn clear_screen_homes_cursor() {
        let mut out = Vec::new();
        clear_screen(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("\u{1b}[2J"));
        assert!(text.ends_with("\u{1b}[1;1H"));
    }

    #[test]
    fn inactive_renderer_exit_is_a_noop() {
        let mut r = TerminalRenderer::new();
        assert!(!r.is_active());
        r.exit().unwrap();
        assert!(!r.is_active());
    }
}
