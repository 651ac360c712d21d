use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Series colour
// ---------------------------------------------------------------------------

/// Hue of the marker colour (a mid blue).
const SERIES_HUE: f32 = 205.0;

/// Marker colour of the point series, as 8-bit sRGB.
pub fn series_color() -> [u8; 3] {
    let rgb: Srgb = Hsl::new(SERIES_HUE, 0.75, 0.45).into_color();
    [
        (rgb.red.clamp(0.0, 1.0) * 255.0) as u8,
        (rgb.green.clamp(0.0, 1.0) * 255.0) as u8,
        (rgb.blue.clamp(0.0, 1.0) * 255.0) as u8,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_colour_is_blue_dominant() {
        let [r, g, b] = series_color();
        assert!(b > r && b > g, "{r} {g} {b}");
    }
}
