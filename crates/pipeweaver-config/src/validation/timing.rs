//! Timer cadence validation.

use crate::schema::PipeweaverConfig;

use super::helpers::validate_range_ms;

pub(crate) fn validate_timing(errors: &mut Vec<String>, config: &PipeweaverConfig) {
    let timing = &config.timing;
    validate_range_ms(errors, "timing.debounce_ms", timing.debounce_ms, 10, 5_000);
    validate_range_ms(
        errors,
        "timing.poll_interval_ms",
        timing.poll_interval_ms,
        1,
        1_000,
    );
    validate_range_ms(
        errors,
        "timing.maintenance_interval_ms",
        timing.maintenance_interval_ms,
        1_000,
        600_000,
    );
    validate_range_ms(
        errors,
        "timing.maintenance_followup_ms",
        timing.maintenance_followup_ms,
        1,
        5_000,
    );

    if timing.maintenance_followup_ms >= timing.maintenance_interval_ms {
        errors.push(format!(
            "timing.maintenance_followup_ms = {} must be below timing.maintenance_interval_ms = {}",
            timing.maintenance_followup_ms, timing.maintenance_interval_ms
        ));
    }
}
