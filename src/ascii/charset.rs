//! Character ramp definitions for ASCII rendering.

/// The standard 17-level ramp as a string, for config defaults and display.
pub const STANDARD_RAMP_STR: &str = " .:!/r(l1X4H9W8$@";

/// Standard density ramp (17 levels).
/// Characters ordered from sparse (space) to dense (@).
pub const STANDARD_RAMP: &[char] = &[
    ' ', '.', ':', '!', '/', 'r', '(', 'l', '1', 'X', '4', 'H', '9', 'W', '8', '$', '@',
];

/// Densest character of the standard ramp.
pub const DENSEST: char = '@';
