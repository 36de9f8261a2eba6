//! Slice labels and colors.

use textwrap::WrapAlgorithm;
use textwrap::core::display_width;

/// Marker appended to a label that did not fit.
pub const ELLIPSIS: char = '…';

/// How slice labels are wrapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelOptions {
    pub wrap: bool,
    /// Max columns per line.
    pub width: usize,
    /// Max lines per label.
    pub max_lines: usize,
}

impl Default for LabelOptions {
    fn default() -> Self {
        Self {
            wrap: true,
            width: 12,
            max_lines: 2,
        }
    }
}

/// Wraps one restaurant name into at most `max_lines` lines.
pub fn wrap_label(name: &str, options: LabelOptions) -> Vec<String> {
    if !options.wrap {
        return vec![name.to_string()];
    }

    let width = options.width.max(1);
    let max_lines = options.max_lines.max(1);
    let wrap_options = textwrap::Options::new(width).wrap_algorithm(WrapAlgorithm::FirstFit);
    let mut lines: Vec<String> = textwrap::wrap(name, wrap_options)
        .into_iter()
        .map(|line| line.into_owned())
        .collect();

    if lines.len() > max_lines {
        lines.truncate(max_lines);
        mark_truncated(&mut lines, width);
    }

    lines
}

/// Drops trailing words from the last line until the ellipsis fits.
///
/// When no word of the last line fits, the ellipsis moves to the end of the
/// previous line if there is room, else it stands alone.
fn mark_truncated(lines: &mut Vec<String>, width: usize) {
    let Some(last) = lines.pop() else {
        return;
    };

    let mut words: Vec<&str> = last.split_whitespace().collect();
    while !words.is_empty() && display_width(&words.join(" ")) + 1 > width {
        words.pop();
    }

    if !words.is_empty() {
        lines.push(format!("{}{ELLIPSIS}", words.join(" ")));
        return;
    }

    match lines.last_mut() {
        Some(previous) if display_width(previous) + 1 <= width => previous.push(ELLIPSIS),
        _ => lines.push(ELLIPSIS.to_string()),
    }
}

/// Display labels for names in slice order, lines joined with `\n`.
pub fn display_labels(names: &[String], options: LabelOptions) -> Vec<String> {
    names
        .iter()
        .map(|name| wrap_label(name, options).join("\n"))
        .collect()
}

/// Parses `#RRGGBB` (leading `#` optional) into RGB components.
pub fn parse_hex_color(value: &str) -> Option<(u8, u8, u8)> {
    let hex = value.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    Some((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// Colors for `count` slices, cycling through `palette`.
pub fn slice_colors(count: usize, palette: &[String]) -> Vec<String> {
    if palette.is_empty() {
        return Vec::new();
    }
    (0..count)
        .map(|i| palette[i % palette.len()].clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::default_palette;

    #[test]
    fn test_short_name_single_line() {
        assert_eq!(wrap_label("Zatar", LabelOptions::default()), vec!["Zatar"]);
    }

    #[test]
    fn test_wraps_on_words() {
        let lines = wrap_label("Pattanian Thai", LabelOptions::default());
        assert_eq!(lines, vec!["Pattanian", "Thai"]);
    }

    #[test]
    fn test_truncates_with_ellipsis() {
        let lines = wrap_label("Salty Little Lady Luncheonette", LabelOptions::default());
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "Salty Little");
        assert_eq!(lines[1], "Lady…");
    }

    #[test]
    fn test_wrap_is_greedy() {
        let lines = wrap_label("Peri Peri Flamin Grill", LabelOptions::default());
        assert_eq!(lines, vec!["Peri Peri", "Flamin Grill"]);
    }

    #[test]
    fn test_truncation_drops_whole_words() {
        let options = LabelOptions {
            max_lines: 1,
            ..LabelOptions::default()
        };
        assert_eq!(wrap_label("Tiny Taco Truck Co", options), vec!["Tiny Taco…"]);
    }

    #[test]
    fn test_ellipsis_moves_to_previous_line_when_word_too_long() {
        let options = LabelOptions {
            wrap: true,
            width: 8,
            max_lines: 2,
        };
        // "Sandwich" fills the second line, leaving no room for the ellipsis.
        assert_eq!(wrap_label("Pho Sandwich Cheese", options), vec!["Pho…"]);
    }

    #[test]
    fn test_wrap_disabled_returns_name() {
        let options = LabelOptions {
            wrap: false,
            ..LabelOptions::default()
        };
        assert_eq!(
            wrap_label("Peri Peri Flamin Grill", options),
            vec!["Peri Peri Flamin Grill"]
        );
    }

    #[test]
    fn test_display_labels_join_lines() {
        let names = vec!["Halal Munchies".to_string(), "Subway".to_string()];
        let labels = display_labels(&names, LabelOptions::default());
        assert_eq!(labels, vec!["Halal\nMunchies", "Subway"]);
    }

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#EF476F"), Some((0xEF, 0x47, 0x6F)));
        assert_eq!(parse_hex_color("06d6a0"), Some((0x06, 0xD6, 0xA0)));
        assert_eq!(parse_hex_color("#FFF"), None);
        assert_eq!(parse_hex_color("#GGGGGG"), None);
    }

    #[test]
    fn test_slice_colors_cycle() {
        let palette = default_palette();
        let colors = slice_colors(10, &palette);
        assert_eq!(colors.len(), 10);
        assert_eq!(colors[8], palette[0]);
        assert_eq!(colors[9], palette[1]);
        assert!(slice_colors(3, &[]).is_empty());
    }
}
