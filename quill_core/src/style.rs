//! Static style table mapping each log level to its display treatment.
//!
//! One entry per level: a display glyph, a symbolic color name, and an RGB
//! triple. The lookup is total; there is no error path.

use crate::LogLevel;

/// Display treatment for one log level
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StyleEntry {
    pub icon: &'static str,
    pub color_name: &'static str,
    pub color_rgb: (u8, u8, u8),
}

/// Look up the style entry for a level
pub fn style(level: LogLevel) -> &'static StyleEntry {
    match level {
        LogLevel::Debug => &StyleEntry {
            icon: "⚙",
            color_name: "gray",
            color_rgb: (150, 150, 150),
        },
        LogLevel::Normal => &StyleEntry {
            icon: "•",
            color_name: "white",
            color_rgb: (236, 240, 241),
        },
        LogLevel::Information => &StyleEntry {
            icon: "ℹ",
            color_name: "blue",
            color_rgb: (52, 152, 219),
        },
        LogLevel::Warning => &StyleEntry {
            icon: "⚠",
            color_name: "yellow",
            color_rgb: (241, 196, 15),
        },
        LogLevel::Error => &StyleEntry {
            icon: "✖",
            color_name: "red",
            color_rgb: (231, 76, 60),
        },
        LogLevel::Fatal => &StyleEntry {
            icon: "☠",
            color_name: "darkred",
            color_rgb: (192, 57, 43),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_level_has_a_style() {
        for level in LogLevel::ALL {
            let entry = style(level);
            assert!(!entry.icon.is_empty());
            assert!(!entry.color_name.is_empty());
        }
    }

    #[test]
    fn test_levels_have_distinct_icons() {
        let mut icons: Vec<&str> = LogLevel::ALL.iter().map(|l| style(*l).icon).collect();
        icons.sort_unstable();
        icons.dedup();
        assert_eq!(icons.len(), LogLevel::ALL.len());
    }
}
