//! Colour tokens assigned to options.

/// Palette cycled through as options are added.
pub const PALETTE: [&str; 10] = [
    "#FF006E", "#8338EC", "#FB5607", "#06FFA5", "#FFBE0B", "#FF4365", "#3A86FF", "#FF8500",
    "#7209B7", "#F72585",
];

/// Colour for the option at `index`.
pub fn color_for_index(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

/// The palette colour after `current`; unknown colours restart the cycle.
pub fn next_color(current: &str) -> &'static str {
    match PALETTE.iter().position(|c| c.eq_ignore_ascii_case(current)) {
        Some(i) => color_for_index(i + 1),
        None => PALETTE[0],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colors_wrap_around() {
        assert_eq!(color_for_index(0), "#FF006E");
        assert_eq!(color_for_index(10), "#FF006E");
        assert_eq!(color_for_index(11), "#8338EC");
    }

    #[test]
    fn next_color_cycles_and_recovers_from_custom_colors() {
        assert_eq!(next_color("#FF006E"), "#8338EC");
        assert_eq!(next_color("#f72585"), "#FF006E");
        assert_eq!(next_color("#123456"), "#FF006E");
    }
}
