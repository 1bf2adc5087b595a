//! Message-to-firework derivation pipeline.
//!
//! A chat message carries only text and a color; everything visual (size,
//! duration, launch speed, shape, burst point) is derived here and clamped
//! before it touches the physics, so pathological message lengths cannot
//! cause runaway allocation or simulation cost.

use crate::config::EngineConfig;
use crate::engine::FireworkParams;
use crate::shapes::{ShapeType, Vec2};
use serde::{Deserialize, Serialize};

/// Inbound message-send event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageEvent {
    pub text: String,
    pub color: String,
}

impl MessageEvent {
    pub fn new(text: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: color.into(),
        }
    }
}

pub const SIZE_MIN: f32 = 1.0;
pub const SIZE_MAX: f32 = 3.0;
/// Grid points the quantized size can land on, endpoints included.
pub const SIZE_STEPS: usize = 10;
/// Characters of message text per unit of extra size.
const SIZE_LEN_DIVISOR: f32 = 25.0;

pub const DURATION_MIN_SECS: f32 = 3.0;
pub const DURATION_MAX_SECS: f32 = 12.0;
const DURATION_PER_CHAR: f32 = 0.12;
/// Messages at or below this length stay on the duration floor.
const DURATION_FREE_CHARS: usize = 5;

pub const LAUNCH_SPEED_FLOOR: f32 = 0.7;
pub const LAUNCH_SPEED_CEIL: f32 = 1.5;
const LAUNCH_SPEED_PER_CHAR: f32 = 0.012;

/// Messages that normalize to this token always burst as the glyph shape.
const GLYPH_TOKEN: &str = "w";

/// Fallback when the message color fails to parse (the client's default
/// picker color).
pub const DEFAULT_COLOR: [f32; 3] = [1.0, 0.412, 0.706];

/// Explosion points are drawn from a central band of the viewport.
const BURST_X_MIN: f32 = 0.25;
const BURST_X_MAX: f32 = 0.75;
const BURST_Y_MIN: f32 = 0.18;
const BURST_Y_MAX: f32 = 0.78;
/// Edge margin per unit of burst size, against clipping at burst radius.
const EDGE_MARGIN: f32 = 40.0;

/// Snap a size onto one of exactly [`SIZE_STEPS`] grid points between
/// [`SIZE_MIN`] and [`SIZE_MAX`]. Idempotent.
pub fn quantize_size(size: f32) -> f32 {
    let clamped = size.clamp(SIZE_MIN, SIZE_MAX);
    let span = SIZE_MAX - SIZE_MIN;
    let steps = (SIZE_STEPS - 1) as f32;
    SIZE_MIN + ((clamped - SIZE_MIN) / span * steps).round() * span / steps
}

/// Burst size from message length: longer messages make bigger shells.
pub fn derive_size(len: usize) -> f32 {
    quantize_size(1.0 + len as f32 / SIZE_LEN_DIVISOR)
}

/// Particle lifetime in seconds from message length. Short messages stay
/// on the floor; only characters beyond the grace length extend it.
pub fn derive_duration_secs(len: usize) -> f32 {
    (DURATION_MIN_SECS + len.saturating_sub(DURATION_FREE_CHARS) as f32 * DURATION_PER_CHAR)
        .clamp(DURATION_MIN_SECS, DURATION_MAX_SECS)
}

/// Launch-speed multiplier from message length: long messages launch
/// heavier, slower shells.
pub fn derive_launch_speed(len: usize) -> f32 {
    (LAUNCH_SPEED_CEIL - len as f32 * LAUNCH_SPEED_PER_CHAR)
        .clamp(LAUNCH_SPEED_FLOOR, LAUNCH_SPEED_CEIL)
}

/// Case-fold and width-fold message text for reserved-token matching.
/// Fullwidth ASCII forms (U+FF01..U+FF5E) map to their halfwidth
/// counterparts, the ideographic space to a plain space.
pub fn normalize_token(text: &str) -> String {
    text.trim()
        .chars()
        .map(|c| match c {
            '\u{FF01}'..='\u{FF5E}' => {
                char::from_u32(c as u32 - 0xFEE0).unwrap_or(c)
            }
            '\u{3000}' => ' ',
            _ => c,
        })
        .collect::<String>()
        .to_lowercase()
}

/// Draw a shape: the reserved token forces the glyph, otherwise classic
/// wins `classic_weight` of the time and the remaining drawable shapes
/// split the rest uniformly.
pub fn derive_shape(text: &str, classic_weight: f32, rng: &mut fastrand::Rng) -> ShapeType {
    if normalize_token(text) == GLYPH_TOKEN {
        return ShapeType::Glyph;
    }
    if rng.f32() < classic_weight.clamp(0.0, 1.0) {
        return ShapeType::Classic;
    }
    let others: Vec<ShapeType> = ShapeType::drawable()
        .iter()
        .copied()
        .filter(|s| *s != ShapeType::Classic)
        .collect();
    others[rng.usize(0..others.len())]
}

/// Sample an explosion point inside the central band, pushed away from
/// the edges in proportion to burst size.
pub fn derive_burst_point(
    width: f32,
    height: f32,
    size: f32,
    rng: &mut fastrand::Rng,
) -> Vec2 {
    let margin = EDGE_MARGIN * size;
    let x = width * (BURST_X_MIN + rng.f32() * (BURST_X_MAX - BURST_X_MIN));
    let y = height * (BURST_Y_MIN + rng.f32() * (BURST_Y_MAX - BURST_Y_MIN));
    Vec2::new(
        x.clamp(margin.min(width * 0.5), (width - margin).max(width * 0.5)),
        y.clamp(margin.min(height * 0.5), (height - margin).max(height * 0.5)),
    )
}

/// Parse hex color to RGB floats (accepts 6-char RGB or 8-char RGBA,
/// alpha is ignored). The input is untrusted; checked slicing keeps
/// multi-byte characters from panicking on a byte boundary.
pub fn parse_hex_color(hex: &str) -> Option<[f32; 3]> {
    let hex = hex.trim_start_matches('#');
    if !hex.is_ascii() || (hex.len() != 6 && hex.len() != 8) {
        return None;
    }
    let r = u8::from_str_radix(hex.get(0..2)?, 16).ok()? as f32 / 255.0;
    let g = u8::from_str_radix(hex.get(2..4)?, 16).ok()? as f32 / 255.0;
    let b = u8::from_str_radix(hex.get(4..6)?, 16).ok()? as f32 / 255.0;
    Some([r, g, b])
}

/// Run the whole derivation pipeline for one message event.
pub fn derive_params(
    event: &MessageEvent,
    config: &EngineConfig,
    rng: &mut fastrand::Rng,
) -> FireworkParams {
    let len = event.text.chars().count();
    let size = derive_size(len);
    let color = parse_hex_color(&event.color).unwrap_or_else(|| {
        log::debug!("unparseable color {:?}, using default", event.color);
        DEFAULT_COLOR
    });
    let target = derive_burst_point(config.viewport.width, config.viewport.height, size, rng);
    // launch straight up from below the target
    let origin_x = target.x;

    FireworkParams {
        shape: derive_shape(&event.text, config.classic_weight, rng),
        color,
        size,
        duration_secs: derive_duration_secs(len),
        launch_speed: derive_launch_speed(len),
        origin_x,
        target,
        caption: event.text.clone(),
    }
}
