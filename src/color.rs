use std::collections::BTreeMap;

use palette::{Hsl, IntoColor, Srgb};
use plotters::style::RGBColor;

use crate::config::PaletteConfig;

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize, style: &PaletteConfig) -> Vec<RGBColor> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, style.saturation, style.lightness);
            let rgb: Srgb = hsl.into_color();
            RGBColor(
                (rgb.red * 255.0).round() as u8,
                (rgb.green * 255.0).round() as u8,
                (rgb.blue * 255.0).round() as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: method label → RGBColor
// ---------------------------------------------------------------------------

/// Maps the values of a label column to distinct colours.
///
/// Colours are assigned in the order the values are given, so the same map
/// keeps a method's colour identical across panels.
#[derive(Debug, Clone)]
pub struct ColorMap {
    /// Name of the label column; shown as the legend heading.
    pub column: String,
    mapping: BTreeMap<String, RGBColor>,
    default_color: RGBColor,
}

impl ColorMap {
    pub fn new(column: &str, values: &[String], style: &PaletteConfig) -> Self {
        let palette = generate_palette(values.len(), style);
        let mapping = values.iter().cloned().zip(palette).collect();

        ColorMap {
            column: column.to_string(),
            mapping,
            default_color: RGBColor(128, 128, 128),
        }
    }

    /// Look up the colour for a given value; unknown values are grey.
    pub fn color_for(&self, value: &str) -> RGBColor {
        self.mapping
            .get(value)
            .copied()
            .unwrap_or(self.default_color)
    }

    pub fn len(&self) -> usize {
        self.mapping.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mapping.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_requested_size_and_distinct_colors() {
        let colors = generate_palette(3, &PaletteConfig::default());
        assert_eq!(colors.len(), 3);
        assert_ne!(colors[0], colors[1]);
        assert_ne!(colors[1], colors[2]);
        assert_ne!(colors[0], colors[2]);
        assert!(generate_palette(0, &PaletteConfig::default()).is_empty());
    }

    #[test]
    fn first_hue_is_red() {
        let colors = generate_palette(3, &PaletteConfig::default());
        let RGBColor(r, g, b) = colors[0];
        assert!(r > g && r > b);
    }

    #[test]
    fn map_assigns_in_given_order() {
        let style = PaletteConfig::default();
        let methods = vec!["Romberg".to_string(), "Gauss".to_string()];
        let map = ColorMap::new("Method", &methods, &style);
        let palette = generate_palette(2, &style);

        assert_eq!(map.column, "Method");
        assert_eq!(map.len(), 2);
        assert_eq!(map.color_for("Romberg"), palette[0]);
        assert_eq!(map.color_for("Gauss"), palette[1]);
        assert_eq!(map.color_for("Adaptive"), RGBColor(128, 128, 128));
    }
}
