use crate::error::{IcongenError, IcongenResult};

/// Fixed color scheme of the logo artwork.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LogoPalette {
    /// Canvas fill, dark navy.
    pub background: [u8; 3],
    /// Horizontal bar color, sky blue.
    pub accent: [u8; 3],
    /// Dot color, rose. Drawn last, wins over the bars.
    pub dot: [u8; 3],
}

impl Default for LogoPalette {
    fn default() -> Self {
        Self {
            background: [15, 23, 42],
            accent: [56, 189, 248],
            dot: [244, 63, 94],
        }
    }
}

/// Raw RGBA8 pixels of one rendered logo, row-major, no row padding.
#[derive(Clone, Debug)]
pub struct LogoBitmap {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

// Region bounds are truncated fractions of the canvas extent, half-open
// [lo, hi). Truncation (not rounding) matches the reference artwork.
const BAR_X: (f64, f64) = (0.18, 0.82);
const BAR_SHORT_X: (f64, f64) = (0.18, 0.62);
const BAR_BANDS: [(f64, f64); 3] = [(0.28, 0.34), (0.44, 0.50), (0.60, 0.66)];
const DOT_CENTER: f64 = 0.72;
const DOT_RADIUS: f64 = 0.11;

fn frac(extent: u32, f: f64) -> u32 {
    (f64::from(extent) * f) as u32
}

/// Rasterize the logo at `width` x `height`.
///
/// Every pixel starts as the background color, the three accent bars override
/// it inside their rectangles, and the dot overrides everything inside its
/// radius. Alpha is 255 throughout.
pub fn render_logo(width: u32, height: u32) -> IcongenResult<LogoBitmap> {
    if width == 0 || height == 0 {
        return Err(IcongenError::validation(
            "logo width/height must be non-zero",
        ));
    }

    let palette = LogoPalette::default();

    let bar_x = [
        (frac(width, BAR_X.0), frac(width, BAR_X.1)),
        (frac(width, BAR_X.0), frac(width, BAR_X.1)),
        (frac(width, BAR_SHORT_X.0), frac(width, BAR_SHORT_X.1)),
    ];
    let bar_y = BAR_BANDS.map(|(lo, hi)| (frac(height, lo), frac(height, hi)));

    let cx = i64::from(frac(width, DOT_CENTER));
    let cy = i64::from(frac(height, DOT_CENTER));
    let radius = i64::from(frac(width.min(height), DOT_RADIUS));

    let mut data = Vec::with_capacity(width as usize * height as usize * 4);
    for y in 0..height {
        for x in 0..width {
            let mut rgb = palette.background;

            for (&(y0, y1), &(x0, x1)) in bar_y.iter().zip(bar_x.iter()) {
                if (y0..y1).contains(&y) && (x0..x1).contains(&x) {
                    rgb = palette.accent;
                }
            }

            let dx = i64::from(x) - cx;
            let dy = i64::from(y) - cy;
            if dx * dx + dy * dy <= radius * radius {
                rgb = palette.dot;
            }

            data.extend_from_slice(&[rgb[0], rgb[1], rgb[2], 255]);
        }
    }

    Ok(LogoBitmap {
        width,
        height,
        data,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pixel(bitmap: &LogoBitmap, x: u32, y: u32) -> [u8; 4] {
        let i = ((y * bitmap.width + x) * 4) as usize;
        bitmap.data[i..i + 4].try_into().unwrap()
    }

    #[test]
    fn bitmap_has_full_coverage_and_opaque_alpha() {
        let bitmap = render_logo(64, 48).unwrap();
        assert_eq!(bitmap.data.len(), 64 * 48 * 4);
        assert!(bitmap.data.chunks_exact(4).all(|px| px[3] == 255));
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        assert!(matches!(
            render_logo(0, 192),
            Err(IcongenError::Validation(_))
        ));
        assert!(matches!(
            render_logo(192, 0),
            Err(IcongenError::Validation(_))
        ));
    }

    #[test]
    fn bar_bounds_are_truncated_and_half_open() {
        // At 192x192 the first bar covers y in [53, 65), x in [34, 157).
        let bitmap = render_logo(192, 192).unwrap();
        let palette = LogoPalette::default();

        let accent = [palette.accent[0], palette.accent[1], palette.accent[2], 255];
        let background = [
            palette.background[0],
            palette.background[1],
            palette.background[2],
            255,
        ];

        assert_eq!(pixel(&bitmap, 34, 53), accent);
        assert_eq!(pixel(&bitmap, 156, 64), accent);
        assert_eq!(pixel(&bitmap, 33, 53), background);
        assert_eq!(pixel(&bitmap, 157, 53), background);
        assert_eq!(pixel(&bitmap, 34, 52), background);
        assert_eq!(pixel(&bitmap, 34, 65), background);
    }

    #[test]
    fn third_bar_is_shorter() {
        // At 192x192 the third bar covers y in [115, 126), x in [34, 119).
        let bitmap = render_logo(192, 192).unwrap();
        let palette = LogoPalette::default();

        let accent = [palette.accent[0], palette.accent[1], palette.accent[2], 255];
        assert_eq!(pixel(&bitmap, 118, 115), accent);
        assert_eq!(pixel(&bitmap, 119, 115)[..3], palette.background);
    }

    #[test]
    fn dot_is_drawn_last_at_its_center() {
        let bitmap = render_logo(192, 192).unwrap();
        let palette = LogoPalette::default();

        // Center at (trunc(192 * 0.72), trunc(192 * 0.72)) = (138, 138).
        assert_eq!(pixel(&bitmap, 138, 138)[..3], palette.dot);
        // Radius trunc(192 * 0.11) = 21, so (138, 159) is inside and
        // (138, 160) is outside.
        assert_eq!(pixel(&bitmap, 138, 159)[..3], palette.dot);
        assert_eq!(pixel(&bitmap, 138, 160)[..3], palette.background);
    }

    #[test]
    fn render_is_deterministic() {
        let a = render_logo(180, 180).unwrap();
        let b = render_logo(180, 180).unwrap();
        assert_eq!(a.data, b.data);
    }
}
