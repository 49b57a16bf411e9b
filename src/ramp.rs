//! Light-to-dark color ramps around a base color.
//!
//! DESIGN
//! ======
//! The ramp is grown in two passes over a `VecDeque`: darkened steps are
//! appended behind the base, lightened steps are prepended in front of it.
//! Each pass stops on its step budget, or early when a blend reproduces the
//! previous color (channels pinned near 0 or 255).
//!
//! Blending is linear in RGB with a fixed 10% step, rounding half away from
//! zero per channel.

use std::collections::VecDeque;

use crate::color::{self, ColorError, Rgb};

/// Fraction of the remaining distance moved per lightening step.
pub const LIGHTEN_STEP: f64 = 0.1;
/// Fraction of each channel removed per darkening step.
pub const DARKEN_STEP: f64 = 0.1;

const BLACK: Rgb = (0, 0, 0);

/// Move every channel `step` of the way towards 255.
#[must_use]
pub fn lighten(rgb: Rgb, step: f64) -> Rgb {
    map_channels(rgb, |v| v + (255.0 - v) * step)
}

/// Scale every channel down by `step`.
#[must_use]
pub fn darken(rgb: Rgb, step: f64) -> Rgb {
    map_channels(rgb, |v| v * (1.0 - step))
}

/// Build the ramp for `color`, lightest first, darkest last.
///
/// Each side gets `floor(limit / 2)` steps, with at least one step attempted
/// per side, so `limit <= 1` (including negatives) still yields one lighter
/// and one darker neighbor. The base appears exactly once, in canonical
/// lowercase form.
///
/// # Errors
///
/// Returns [`ColorError::InvalidHexFormat`] when `color` is not a six-digit
/// hex color.
pub fn light_to_dark(color: &str, limit: i64) -> Result<Vec<String>, ColorError> {
    let base = color::hex_to_rgb(color)?;
    let max_steps = limit.div_euclid(2);

    let mut ramp: VecDeque<Rgb> = VecDeque::new();
    ramp.push_back(base);
    darken_pass(&mut ramp, base, max_steps);
    lighten_pass(&mut ramp, base, max_steps);

    tracing::trace!(color, limit, len = ramp.len(), "built color ramp");
    Ok(ramp.into_iter().map(color::rgb_to_hex).collect())
}

fn darken_pass(ramp: &mut VecDeque<Rgb>, base: Rgb, max_darken: i64) {
    let mut current = base;
    let mut steps: i64 = 0;
    while current != BLACK {
        let next = darken(current, DARKEN_STEP);
        ramp.push_back(next);
        steps += 1;

        if next == current {
            ramp.pop_back();
            tracing::debug!(steps, "darkening saturated");
            break;
        }
        if steps >= max_darken {
            break;
        }
        current = next;
    }
}

fn lighten_pass(ramp: &mut VecDeque<Rgb>, base: Rgb, max_lighten: i64) {
    let mut current = base;
    let mut steps: i64 = 0;
    loop {
        let next = lighten(current, LIGHTEN_STEP);
        ramp.push_front(next);
        steps += 1;

        if next == current {
            ramp.pop_front();
            tracing::debug!(steps, "lightening saturated");
            break;
        }
        if steps >= max_lighten || next == BLACK {
            break;
        }
        current = next;
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn map_channels(rgb: Rgb, f: impl Fn(f64) -> f64) -> Rgb {
    // Blends of in-range channels with a step in [0, 1] stay in [0, 255].
    let channel = |v: u8| f(f64::from(v)).round().clamp(0.0, 255.0) as u8;
    (channel(rgb.0), channel(rgb.1), channel(rgb.2))
}

#[cfg(test)]
#[path = "ramp_test.rs"]
mod tests;
