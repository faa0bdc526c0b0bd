use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::ShellError;

/// Last-known window rectangle in logical pixels.
///
/// Written by the shell, read and persisted by the host. A geometry is
/// never deleted, only superseded by a newer one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WindowGeometry {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl WindowGeometry {
    /// Geometry used when the host has nothing stored.
    pub const DEFAULT: Self = Self {
        x: 100,
        y: 100,
        width: 1000,
        height: 600,
    };

    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Raise width and height to the floor. Position is left untouched.
    pub fn clamped(self, minimum: MinimumSize) -> Self {
        Self {
            width: self.width.max(minimum.width),
            height: self.height.max(minimum.height),
            ..self
        }
    }

    pub fn check_minimum(&self, minimum: MinimumSize) -> Result<(), ShellError> {
        if self.width < minimum.width || self.height < minimum.height {
            return Err(ShellError::GeometryBelowMinimum {
                width: self.width,
                height: self.height,
                min_width: minimum.width,
                min_height: minimum.height,
            });
        }
        Ok(())
    }

    /// Fields whose value differs between `self` and `other`, in x, y,
    /// width, height order.
    pub fn changed_fields(&self, other: &Self) -> Vec<BoundsField> {
        let mut fields = Vec::with_capacity(4);
        if self.x != other.x {
            fields.push(BoundsField::X);
        }
        if self.y != other.y {
            fields.push(BoundsField::Y);
        }
        if self.width != other.width {
            fields.push(BoundsField::Width);
        }
        if self.height != other.height {
            fields.push(BoundsField::Height);
        }
        fields
    }
}

impl Default for WindowGeometry {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for WindowGeometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{} at ({}, {})",
            self.width, self.height, self.x, self.y
        )
    }
}

/// Smallest size the window may take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinimumSize {
    pub width: i32,
    pub height: i32,
}

impl Default for MinimumSize {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 600,
        }
    }
}

/// One independently observable bounds field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoundsField {
    X,
    Y,
    Width,
    Height,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_geometry() {
        let g = WindowGeometry::default();
        assert_eq!(g, WindowGeometry::new(100, 100, 1000, 600));
        assert_eq!(g.to_string(), "1000x600 at (100, 100)");
    }

    #[test]
    fn clamp_raises_size_only() {
        let g = WindowGeometry::new(-20, 5, 1, 1).clamped(MinimumSize::default());
        assert_eq!(g, WindowGeometry::new(-20, 5, 1000, 600));
    }

    #[test]
    fn clamp_keeps_larger_sizes() {
        let g = WindowGeometry::new(0, 0, 1920, 1080);
        assert_eq!(g.clamped(MinimumSize::default()), g);
    }

    #[test]
    fn check_minimum_reports_below_floor() {
        let min = MinimumSize::default();
        assert!(WindowGeometry::new(0, 0, 1000, 600).check_minimum(min).is_ok());

        let err = WindowGeometry::new(0, 0, 999, 700)
            .check_minimum(min)
            .unwrap_err();
        assert!(matches!(
            err,
            ShellError::GeometryBelowMinimum { width: 999, .. }
        ));
    }

    #[test]
    fn changed_fields_lists_each_difference() {
        let a = WindowGeometry::new(10, 20, 1100, 700);
        assert!(a.changed_fields(&a).is_empty());

        let b = WindowGeometry::new(11, 20, 1100, 701);
        assert_eq!(
            a.changed_fields(&b),
            vec![BoundsField::X, BoundsField::Height]
        );
    }

    #[test]
    fn geometry_json_shape() {
        let json = r#"{"width":1200,"height":800,"x":50,"y":60}"#;
        let g: WindowGeometry = serde_json::from_str(json).unwrap();
        assert_eq!(g, WindowGeometry::new(50, 60, 1200, 800));
    }
}
