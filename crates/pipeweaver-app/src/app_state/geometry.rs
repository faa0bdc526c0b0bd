//! Physical to logical conversion for window events.
//!
//! winit reports moves and resizes in physical pixels; the shell and the
//! geometry store work in logical ones so saved bounds survive a change
//! of display scale.

use winit::dpi::{LogicalPosition, LogicalSize, PhysicalPosition, PhysicalSize};

pub(super) fn logical_position(position: PhysicalPosition<i32>, scale: f64) -> (i32, i32) {
    let logical: LogicalPosition<f64> = position.to_logical(scale);
    (logical.x.round() as i32, logical.y.round() as i32)
}

pub(super) fn logical_size(size: PhysicalSize<u32>, scale: f64) -> (i32, i32) {
    let logical: LogicalSize<f64> = size.to_logical(scale);
    (logical.width.round() as i32, logical.height.round() as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_scale_is_identity() {
        assert_eq!(logical_position(PhysicalPosition::new(10, 20), 1.0), (10, 20));
        assert_eq!(logical_size(PhysicalSize::new(1100, 700), 1.0), (1100, 700));
    }

    #[test]
    fn hidpi_halves_coordinates() {
        assert_eq!(logical_position(PhysicalPosition::new(200, -100), 2.0), (100, -50));
        assert_eq!(logical_size(PhysicalSize::new(2000, 1200), 2.0), (1000, 600));
    }

    #[test]
    fn fractional_scale_rounds() {
        // 1001 / 1.5 = 667.33
        assert_eq!(logical_size(PhysicalSize::new(1001, 901), 1.5), (667, 601));
    }
}
