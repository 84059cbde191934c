use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

/// Position/size descriptor handed to the item factory with each element it builds.
///
/// Items are absolutely positioned inside the content container. Fixed-size lists only carry
/// `top` (the height is implied by the item size); variable-size lists also carry `height`.
///
/// The wire form is `{ position: "absolute", top: "<n>px" }`, plus `height: "<n>px"` for
/// variable-size lists. It is available as CSS text via `Display`, as property pairs via
/// [`ItemStyle::css_properties`], and with `feature = "serde"` as a serialized map.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemStyle {
    pub top: f64,
    pub height: Option<f64>,
}

impl ItemStyle {
    pub const POSITION: &'static str = "absolute";

    pub fn fixed(top: f64) -> Self {
        Self { top, height: None }
    }

    pub fn variable(top: f64, height: f64) -> Self {
        Self {
            top,
            height: Some(height),
        }
    }

    /// `(property, value)` pairs in wire order.
    pub fn css_properties(&self) -> Vec<(&'static str, String)> {
        let mut out = Vec::with_capacity(3);
        out.push(("position", String::from(Self::POSITION)));
        out.push(("top", px(self.top)));
        if let Some(height) = self.height {
            out.push(("height", px(height)));
        }
        out
    }
}

impl fmt::Display for ItemStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "position: {}; top: {}px;", Self::POSITION, self.top)?;
        if let Some(height) = self.height {
            write!(f, " height: {height}px;")?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ItemStyle {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let props = self.css_properties();
        let mut map = serializer.serialize_map(Some(props.len()))?;
        for (k, v) in &props {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

/// A length for the viewport element.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Dimension {
    /// Fill the space available to the viewport (`100%`).
    #[default]
    Fill,
    Px(f64),
}

impl Dimension {
    pub fn from_option(px: Option<f64>) -> Self {
        px.map_or(Self::Fill, Self::Px)
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fill => f.write_str("100%"),
            Self::Px(v) => write!(f, "{v}px"),
        }
    }
}

/// Styles applied once to the viewport element on construction.
///
/// The viewport always scrolls vertically; the content container inside it is sized to the total
/// content extent through [`crate::VisualHost::set_content_extent`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportStyle {
    pub width: Dimension,
    pub height: Dimension,
}

impl ViewportStyle {
    pub const OVERFLOW_Y: &'static str = "scroll";
}

fn px(v: f64) -> String {
    format!("{v}px")
}
