//! Beam path geometry.

extern crate alloc;

use alloc::format;
use alloc::string::String;

/// SVG path data of the beam's curve across a `width` x `height` box.
///
/// `None` while the box has not been laid out yet.
pub fn beam_path(width: f64, height: f64) -> Option<String> {
    if width.is_nan() || width <= 0.0 {
        return None;
    }

    Some(format!(
        "M {} {} C {} {}, {} {}, {} {}",
        width * 0.1,
        height * 0.15,
        width * 0.4,
        height * 0.05,
        width * 0.7,
        height * 0.4,
        width * 0.9,
        height * 0.9
    ))
}

/// `beam_path` wrapped as a CSS `offset-path` value.
pub fn beam_offset_path(width: f64, height: f64) -> Option<String> {
    beam_path(width, height).map(|path| format!("path(\"{}\")", path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_scales_with_box() {
        assert_eq!(
            beam_path(100.0, 200.0).as_deref(),
            Some("M 10 30 C 40 10, 70 80, 90 180")
        );
    }

    #[test]
    fn zero_width_is_not_laid_out() {
        assert_eq!(beam_path(0.0, 300.0), None);
        assert_eq!(beam_path(f64::NAN, 300.0), None);
    }

    #[test]
    fn offset_path_wraps_path_data() {
        assert_eq!(
            beam_offset_path(100.0, 200.0).as_deref(),
            Some("path(\"M 10 30 C 40 10, 70 80, 90 180\")")
        );
    }
}
