use serde::{Deserialize, Serialize};

use crate::renderer::Color;

/// The two colors a single bar is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarColors {
    /// Fill and text color
    pub primary: Color,
    /// Unfilled bar area
    pub background: Color,
}

/// Chart-wide palette.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartColors {
    /// Fill of unselected bars
    pub primary: Color,
    /// Fill of the selected bar
    pub accent: Color,
    /// Background of every bar
    pub secondary: Color,
}

impl ChartColors {
    pub fn selected(&self) -> BarColors {
        BarColors {
            primary: self.accent,
            background: self.secondary,
        }
    }

    pub fn unselected(&self) -> BarColors {
        BarColors {
            primary: self.primary,
            background: self.secondary,
        }
    }

    /// Colors for the bar at `index` given the current selection.
    pub fn for_index(&self, index: usize, selected: usize) -> BarColors {
        if index == selected {
            self.selected()
        } else {
            self.unselected()
        }
    }
}

impl Default for ChartColors {
    fn default() -> Self {
        Self {
            primary: Color::GRAY,
            accent: Color::MAGENTA,
            secondary: Color::LIGHT_GRAY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selected_pair() {
        let c = ChartColors::default();
        assert_eq!(c.for_index(2, 2).primary, Color::MAGENTA);
        assert_eq!(c.for_index(1, 2).primary, Color::GRAY);
        assert_eq!(c.for_index(1, 2).background, Color::LIGHT_GRAY);
    }

    #[test]
    fn test_palette_json_round_trip() {
        let colors = ChartColors {
            accent: Color::new(0.2, 0.4, 0.6, 0.8),
            ..ChartColors::default()
        };
        let json = serde_json::to_string(&colors).unwrap();
        let back: ChartColors = serde_json::from_str(&json).unwrap();
        assert_eq!(back, colors);
    }

    #[test]
    fn test_palette_from_json() {
        let json = r#"{
            "primary": {"r": 0.0, "g": 0.0, "b": 1.0, "a": 1.0},
            "accent": {"r": 1.0, "g": 0.0, "b": 0.0, "a": 1.0},
            "secondary": {"r": 1.0, "g": 1.0, "b": 1.0, "a": 0.5}
        }"#;
        let colors: ChartColors = serde_json::from_str(json).unwrap();
        assert_eq!(colors.selected().primary, Color::rgb(1.0, 0.0, 0.0));
        assert_eq!(colors.unselected().background.a, 0.5);
    }
}
