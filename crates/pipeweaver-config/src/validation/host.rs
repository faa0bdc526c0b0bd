//! Host endpoint validation.

use crate::schema::PipeweaverConfig;

use super::helpers::validate_non_empty;

pub(crate) fn validate_host(errors: &mut Vec<String>, config: &PipeweaverConfig) {
    let host = &config.host;
    validate_non_empty(errors, "host.content_url", &host.content_url);
    validate_non_empty(errors, "host.daemon_url", &host.daemon_url);
    validate_non_empty(errors, "host.app_name", &host.app_name);

    if host.app_name.contains('/') {
        errors.push(format!(
            "host.app_name = {:?} must not contain '/'",
            host.app_name
        ));
    }
}
