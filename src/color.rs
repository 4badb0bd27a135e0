use std::collections::{BTreeMap, BTreeSet};

use palette::{Hsl, IntoColor, Srgb};
use plotters::style::RGBColor;

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<RGBColor> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.6, 0.55);
            let rgb: Srgb = hsl.into_color();
            RGBColor(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: category name → bar colour
// ---------------------------------------------------------------------------

/// Maps each distinct category to a bar colour, stable across charts within
/// one run, so a category keeps its colour in every year's chart.
#[derive(Debug, Clone)]
pub struct ColorMap {
    mapping: BTreeMap<String, RGBColor>,
    default_color: RGBColor,
}

impl ColorMap {
    /// Build a colour map over the distinct categories found in the rows.
    pub fn from_categories<'a>(categories: impl IntoIterator<Item = &'a str>) -> Self {
        let distinct: BTreeSet<&str> = categories.into_iter().collect();
        let palette = generate_palette(distinct.len());
        let mapping = distinct
            .into_iter()
            .zip(palette)
            .map(|(name, color)| (name.to_string(), color))
            .collect();

        ColorMap {
            mapping,
            default_color: RGBColor(128, 128, 128),
        }
    }

    /// Look up the colour for a category.
    pub fn color_for(&self, category: &str) -> RGBColor {
        self.mapping
            .get(category)
            .copied()
            .unwrap_or(self.default_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_produces_distinct_colours() {
        let palette = generate_palette(8);
        assert_eq!(palette.len(), 8);
        let unique: BTreeSet<(u8, u8, u8)> =
            palette.iter().map(|c| (c.0, c.1, c.2)).collect();
        assert_eq!(unique.len(), 8);
    }

    #[test]
    fn empty_palette() {
        assert!(generate_palette(0).is_empty());
    }

    #[test]
    fn same_category_maps_to_same_colour() {
        let map = ColorMap::from_categories(["Action", "Comedy", "Action"]);
        assert_eq!(map.color_for("Action"), map.color_for("Action"));
        assert_ne!(map.color_for("Action"), map.color_for("Comedy"));
    }

    #[test]
    fn unknown_category_gets_the_default() {
        let map = ColorMap::from_categories(["Action"]);
        assert_eq!(map.color_for("Horror"), RGBColor(128, 128, 128));
    }
}
