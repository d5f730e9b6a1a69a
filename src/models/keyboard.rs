//! Physical keyboard layout used by the keyboard map view.

pub const ROWS: [&[&str]; 6] = [
    &[
        "Esc", "F1", "F2", "F3", "F4", "F5", "F6", "F7", "F8", "F9", "F10", "F11", "F12",
    ],
    &[
        "`", "1", "2", "3", "4", "5", "6", "7", "8", "9", "0", "-", "=", "Backspace",
    ],
    &[
        "Tab", "Q", "W", "E", "R", "T", "Y", "U", "I", "O", "P", "[", "]", "\\",
    ],
    &[
        "Caps", "A", "S", "D", "F", "G", "H", "J", "K", "L", ";", "'", "Enter",
    ],
    &[
        "Shift", "Z", "X", "C", "V", "B", "N", "M", ",", ".", "/", "Shift",
    ],
    &["Ctrl", "Win", "Alt", "Space", "Alt", "Menu", "Ctrl"],
];

/// Relative width of a key; ordinary keys are 1.
pub fn key_width(label: &str) -> f32 {
    match label {
        "Esc" | "Tab" | "\\" | "Ctrl" => 1.5,
        "Backspace" => 2.0,
        "Caps" => 1.75,
        "Enter" | "Shift" => 2.25,
        "Win" | "Alt" | "Menu" => 1.25,
        "Space" => 6.0,
        _ => 1.0,
    }
}
