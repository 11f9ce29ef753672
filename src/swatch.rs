// SPDX-License-Identifier: MPL-2.0
//! Colour swatch preview entries for colour pickers.
//!
//! A swatch is a fixed-size square that previews one colour. Toolkits draw
//! it themselves; this module only fixes its geometry and its text.

use std::fmt;

/// Inset of the colour fill inside the swatch bounds, in pixels.
pub const FILL_INSET: u32 = 2;

/// An opaque RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Axis-aligned rectangle in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

/// A selectable list entry that previews a colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorSwatch {
    color: Rgb,
    size: u32,
}

impl ColorSwatch {
    #[must_use]
    pub fn new(color: Rgb, size: u32) -> Self {
        Self { color, size }
    }

    #[must_use]
    pub fn color(&self) -> Rgb {
        self.color
    }

    #[must_use]
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Bounds a layout proposes for the swatch, forced to the swatch's square.
    ///
    /// The origin is kept.
    #[must_use]
    pub fn bounds(&self, proposed: Rect) -> Rect {
        Rect {
            width: self.size,
            height: self.size,
            ..proposed
        }
    }

    /// Area filled with the colour; the rest shows the menu background.
    #[must_use]
    pub fn fill_area(&self, bounds: Rect) -> Rect {
        let inset = i32::try_from(FILL_INSET).unwrap_or(0);
        Rect {
            x: bounds.x.saturating_add(inset),
            y: bounds.y.saturating_add(inset),
            width: bounds.width.saturating_sub(2 * FILL_INSET),
            height: bounds.height.saturating_sub(2 * FILL_INSET),
        }
    }

    /// Human-readable colour, `#RRGGBB`.
    #[must_use]
    pub fn label(&self) -> String {
        self.color.to_string()
    }

    /// Text exposed to assistive technology, only when it is enabled.
    #[must_use]
    pub fn accessible_text(&self, accessibility_enabled: bool) -> Option<String> {
        accessibility_enabled.then(|| self.label())
    }
}
