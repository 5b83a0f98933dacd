/// One entry of the fixed color palette offered by the new-project form.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ColorType {
    pub name: &'static str,
    pub hex: &'static str,
}

/// Closed set of colors available for tagging a project. The store does not
/// enforce membership; validation happens at the form boundary.
pub const COLOR_TYPES: [ColorType; 7] = [
    ColorType {
        name: "blue",
        hex: "#38b5fc",
    },
    ColorType {
        name: "green",
        hex: "#3ecf8e",
    },
    ColorType {
        name: "yellow",
        hex: "#fbc531",
    },
    ColorType {
        name: "orange",
        hex: "#ff9f43",
    },
    ColorType {
        name: "red",
        hex: "#ff5e57",
    },
    ColorType {
        name: "purple",
        hex: "#9b59b6",
    },
    ColorType {
        name: "pink",
        hex: "#fd79a8",
    },
];

impl ColorType {
    pub fn by_name(name: &str) -> Option<&'static ColorType> {
        COLOR_TYPES.iter().find(|c| c.name == name)
    }

    pub fn by_hex(hex: &str) -> Option<&'static ColorType> {
        COLOR_TYPES.iter().find(|c| c.hex.eq_ignore_ascii_case(hex))
    }

    /// Resolve either a palette name or a hex value to a palette entry.
    pub fn resolve(value: &str) -> Option<&'static ColorType> {
        Self::by_name(value).or_else(|| Self::by_hex(value))
    }
}
