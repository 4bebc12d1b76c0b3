//! Crop placement math shared by the edit overlay and the controller.
//!
//! A placement is a CSS-style background position ("X% Y%") plus a zoom
//! percentage. Keyword tokens follow the CSS mapping: left/top = 0,
//! right/bottom = 100, center = 50. Anything unparseable falls back to
//! the centered 50.

/// Pan step applied per arrow press, in percentage points.
pub const PAN_STEP: f32 = 5.0;
/// Zoom step applied per button press, in percentage points.
pub const ZOOM_STEP: f32 = 10.0;
/// 100% = image fits its frame with no zoom.
pub const MIN_SCALE: f32 = 100.0;
pub const MAX_SCALE: f32 = 300.0;
/// Floating-bubble diameter limits, in pixels.
pub const MIN_BUBBLE_SIZE: f32 = 40.0;
pub const MAX_BUBBLE_SIZE: f32 = 400.0;

/// Parse a position string into (x, y) percentages.
///
/// A single token sets the horizontal component; the vertical defaults
/// to 50, matching standard background-position behavior.
pub fn parse_position(position: &str) -> (f32, f32) {
    let mut parts = position.split_whitespace();

    let x = match parts.next() {
        Some("left") => 0.0,
        Some("right") => 100.0,
        Some("center") => 50.0,
        Some(token) => parse_percent(token),
        None => 50.0,
    };

    let y = match parts.next() {
        Some("top") => 0.0,
        Some("bottom") => 100.0,
        Some("center") => 50.0,
        Some(token) => parse_percent(token),
        None => 50.0,
    };

    (x, y)
}

fn parse_percent(token: &str) -> f32 {
    let value: f32 = token
        .trim_end_matches('%')
        .parse()
        .unwrap_or(50.0);
    if value.is_nan() { 50.0 } else { value }
}

/// Format (x, y) percentages back into a position string.
pub fn format_position(x: f32, y: f32) -> String {
    format!("{x}% {y}%")
}

/// Nudge a position by (dx, dy) percentage points, clamped to [0, 100].
pub fn pan(position: &str, dx: f32, dy: f32) -> String {
    let (x, y) = parse_position(position);
    let new_x = (x + dx).clamp(0.0, 100.0);
    let new_y = (y + dy).clamp(0.0, 100.0);
    format_position(new_x, new_y)
}

/// Step a zoom percentage, clamped to [MIN_SCALE, MAX_SCALE].
pub fn zoom(scale: f32, delta: f32) -> f32 {
    (scale + delta).clamp(MIN_SCALE, MAX_SCALE)
}

/// Nudge a floating bubble's absolute coordinates, clamped to [0, 100].
pub fn pan_bubble(x: f32, y: f32, dx: f32, dy: f32) -> (f32, f32) {
    ((x + dx).clamp(0.0, 100.0), (y + dy).clamp(0.0, 100.0))
}

/// Step a floating bubble's pixel diameter within its UI limits.
pub fn resize_bubble(size: f32, delta: f32) -> f32 {
    (size + delta).clamp(MIN_BUBBLE_SIZE, MAX_BUBBLE_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_positions_round_trip() {
        for x in [0.0_f32, 12.5, 50.0, 70.0, 100.0] {
            for y in [0.0_f32, 30.0, 50.0, 90.0, 100.0] {
                assert_eq!(parse_position(&format_position(x, y)), (x, y));
            }
        }
    }

    #[test]
    fn keywords_map_to_their_numeric_equivalents() {
        assert_eq!(parse_position("left top"), (0.0, 0.0));
        assert_eq!(parse_position("right bottom"), (100.0, 100.0));
        assert_eq!(parse_position("center center"), (50.0, 50.0));
        assert_eq!(parse_position("left bottom"), (0.0, 100.0));
    }

    #[test]
    fn single_token_defaults_vertical_to_center() {
        assert_eq!(parse_position("70%"), (70.0, 50.0));
        assert_eq!(parse_position("left"), (0.0, 50.0));
    }

    #[test]
    fn garbage_defaults_to_center() {
        assert_eq!(parse_position(""), (50.0, 50.0));
        assert_eq!(parse_position("wat such%"), (50.0, 50.0));
        assert_eq!(parse_position("NaN% NaN%"), (50.0, 50.0));
    }

    #[test]
    fn repeated_pans_never_leave_the_frame() {
        let mut pos = "50% 50%".to_string();
        for _ in 0..50 {
            pos = pan(&pos, PAN_STEP, -PAN_STEP);
        }
        assert_eq!(parse_position(&pos), (100.0, 0.0));

        for _ in 0..50 {
            pos = pan(&pos, -PAN_STEP, PAN_STEP);
        }
        assert_eq!(parse_position(&pos), (0.0, 100.0));
    }

    #[test]
    fn repeated_zooms_stay_within_limits() {
        let mut scale = 100.0;
        for _ in 0..50 {
            scale = zoom(scale, ZOOM_STEP);
        }
        assert_eq!(scale, MAX_SCALE);

        for _ in 0..50 {
            scale = zoom(scale, -ZOOM_STEP);
        }
        assert_eq!(scale, MIN_SCALE);
    }

    #[test]
    fn bubble_moves_and_resizes_within_limits() {
        let (x, y) = pan_bubble(98.0, 1.0, 10.0, -10.0);
        assert_eq!((x, y), (100.0, 0.0));

        assert_eq!(resize_bubble(390.0, 20.0), MAX_BUBBLE_SIZE);
        assert_eq!(resize_bubble(50.0, -20.0), MIN_BUBBLE_SIZE);
    }
}
