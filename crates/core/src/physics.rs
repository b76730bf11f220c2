//! Paddle deflection.
//!
//! A hit sends the ball back at an angle made of a random jitter plus a
//! component proportional to how far from the paddle's middle it landed.
//! The angle is clamped to ±45° and pushed out to at least 15° so rallies
//! never go flat.

use rand::Rng;

use crate::types::{
    DEFLECTION_JITTER_DEG, DEFLECTION_PER_CELL_DEG, MAX_DEFLECTION_DEG, MIN_DEFLECTION_DEG,
    PADDLE_HEIGHT,
};

/// Result of a paddle hit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Deflection {
    /// Signed angle from horizontal; positive sends the ball down.
    pub angle_deg: f64,
    /// Speed in cells per frame, in `[1, 2)`.
    pub speed: f64,
    pub vx: i32,
    pub vy: i32,
}

/// Offset of `ball_y` from the middle row of a paddle whose top is `paddle_y`.
pub fn center_offset(ball_y: i32, paddle_y: i32) -> f64 {
    let center = paddle_y as f64 + (PADDLE_HEIGHT - 1) as f64 / 2.0;
    ball_y as f64 - center
}

/// Combine jitter and offset into a legal deflection angle.
pub fn deflection_angle(offset: f64, jitter_deg: f64) -> f64 {
    let raw = jitter_deg + offset * DEFLECTION_PER_CELL_DEG;
    let clamped = raw.clamp(-MAX_DEFLECTION_DEG, MAX_DEFLECTION_DEG);
    if clamped.abs() >= MIN_DEFLECTION_DEG {
        clamped
    } else if clamped < 0.0 {
        -MIN_DEFLECTION_DEG
    } else {
        MIN_DEFLECTION_DEG
    }
}

/// Project `speed` onto `angle_deg`, each axis at least one cell per frame.
///
/// `dir` is the horizontal direction of travel after the hit (`1` or `-1`).
pub fn project(angle_deg: f64, speed: f64, dir: i32) -> (i32, i32) {
    let rad = angle_deg.to_radians();
    let vx = ((speed * rad.cos()).abs().round() as i32).max(1);
    let vy = ((speed * rad.sin()).abs().round() as i32).max(1);
    let vy_sign = if angle_deg < 0.0 { -1 } else { 1 };
    (vx * dir.signum(), vy * vy_sign)
}

/// Deflect a ball on `ball_y` off a paddle whose top is `paddle_y`.
pub fn deflect<R: Rng + ?Sized>(rng: &mut R, ball_y: i32, paddle_y: i32, dir: i32) -> Deflection {
    let jitter = rng.gen_range(-DEFLECTION_JITTER_DEG..=DEFLECTION_JITTER_DEG);
    let angle_deg = deflection_angle(center_offset(ball_y, paddle_y), jitter);
    let speed = rng.gen_range(1.0..2.0);
    let (vx, vy) = project(angle_deg, speed, dir);
    Deflection {
        angle_deg,
        speed,
        vx,
        vy,
    }
}
