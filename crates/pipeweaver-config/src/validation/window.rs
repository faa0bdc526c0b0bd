//! Window size validation.

use crate::schema::PipeweaverConfig;

use super::helpers::validate_range;

pub(crate) fn validate_window(errors: &mut Vec<String>, config: &PipeweaverConfig) {
    let window = &config.window;
    validate_range(errors, "window.min_width", window.min_width, 100, 10_000);
    validate_range(errors, "window.min_height", window.min_height, 100, 10_000);

    if window.default_width < window.min_width {
        errors.push(format!(
            "window.default_width = {} is below window.min_width = {}",
            window.default_width, window.min_width
        ));
    }
    if window.default_height < window.min_height {
        errors.push(format!(
            "window.default_height = {} is below window.min_height = {}",
            window.default_height, window.min_height
        ));
    }
}
