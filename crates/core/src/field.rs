//! Play area dimensions and the plate the tower is built on.

use serde::{Deserialize, Serialize};

/// Placement of the plate relative to the field.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct PlateLayout {
    /// Distance from the bottom of the field to the top of the plate.
    pub bottom_margin: f64,
    pub max_width: f64,
    /// Plate width as a fraction of the field width, capped by `max_width`.
    pub width_fraction: f64,
    pub height: f64,
}

impl Default for PlateLayout {
    fn default() -> Self {
        Self {
            bottom_margin: 100.0,
            max_width: 300.0,
            width_fraction: 0.7,
            height: 30.0,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct Plate {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Field dimensions. Every derived value is recomputed from the current size,
/// so a resize keeps thresholds consistent.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct Field {
    width: f64,
    height: f64,
    layout: PlateLayout,
}

impl Field {
    pub fn new(width: f64, height: f64) -> Self {
        Self::with_layout(width, height, PlateLayout::default())
    }

    pub fn with_layout(width: f64, height: f64, layout: PlateLayout) -> Self {
        Self {
            width,
            height,
            layout,
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    /// Top edge of the plate; the first pancake rests on it.
    pub fn plate_y(&self) -> f64 {
        self.height - self.layout.bottom_margin
    }

    pub fn plate(&self) -> Plate {
        let width = self
            .layout
            .max_width
            .min(self.width * self.layout.width_fraction);
        Plate {
            x: (self.width - width) / 2.0,
            y: self.plate_y(),
            width,
            height: self.layout.height,
        }
    }

    /// Screen-space line the top of the tower should stay below.
    pub fn upper_third(&self) -> f64 {
        self.height / 3.0
    }

    /// `x` that centers an object of `width` horizontally.
    pub fn centered_x(&self, width: f64) -> f64 {
        (self.width - width) / 2.0
    }
}
