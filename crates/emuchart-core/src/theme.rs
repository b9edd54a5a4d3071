// File: crates/emuchart-core/src/theme.rs
// Summary: Light/Dark theming for chart colors (SVG color strings).

/// Colors used by the render composer. Values are SVG color strings.
#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: &'static str,
    pub grid: &'static str,
    pub axis_line: &'static str,
    pub axis_label: &'static str,
    pub crosshair: &'static str,
    pub tooltip_fill: &'static str,
    pub tooltip_border: &'static str,
    pub tooltip_text: &'static str,
    pub empty_text: &'static str,
    pub aggregate: &'static str,
    pub palette: &'static [&'static str],
}

const DARK_PALETTE: &[&str] = &[
    "#4ea1ff", "#2ac878", "#f2b33d", "#e06c9f", "#9a7bff", "#4fd0d0",
];

const LIGHT_PALETTE: &[&str] = &[
    "#2078c8", "#14a05a", "#c88a14", "#c04880", "#6a50d0", "#1898a0",
];

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: "#121214",
            grid: "#28282d",
            axis_line: "#b4b4be",
            axis_label: "#ebebf5",
            crosshair: "#ffe646",
            tooltip_fill: "#1c1c22",
            tooltip_border: "#3c3c46",
            tooltip_text: "#ebebf5",
            empty_text: "#8c8c96",
            aggregate: "#f05050",
            palette: DARK_PALETTE,
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: "#fafafc",
            grid: "#e6e6eb",
            axis_line: "#3c3c46",
            axis_label: "#14141e",
            crosshair: "#1e78f0",
            tooltip_fill: "#ffffff",
            tooltip_border: "#c8c8d2",
            tooltip_text: "#14141e",
            empty_text: "#78788c",
            aggregate: "#c83232",
            palette: LIGHT_PALETTE,
        }
    }
}

/// Return the built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::dark(), Theme::light()]
}

/// Find a theme by its `name`, falling back to dark.
pub fn find(name: &str) -> Theme {
    for t in presets() {
        if t.name.eq_ignore_ascii_case(name) {
            return t;
        }
    }
    Theme::dark()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_falls_back_to_dark() {
        assert_eq!(find("LIGHT").name, "light");
        assert_eq!(find("nope").name, "dark");
    }
}
