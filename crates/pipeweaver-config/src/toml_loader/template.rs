//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r#"# Pipeweaver shell configuration
# Only override what you want to change -- missing fields use defaults.

[window]
# title = "Pipeweaver"
# min_width = 1000       # 100-10000
# min_height = 600       # 100-10000
# Used when no saved geometry exists:
# default_x = 100
# default_y = 100
# default_width = 1000   # >= min_width
# default_height = 600   # >= min_height

[timing]
# debounce_ms = 250                # 10-5000, quiet period before geometry is saved
# poll_interval_ms = 20            # 1-1000
# maintenance_interval_ms = 10000  # 1000-600000
# maintenance_followup_ms = 50     # 1-5000, below the interval

[host]
# content_url = "http://localhost:14565/"
# daemon_url = "ws://localhost:14565/api/websocket"
# require_daemon = true
# app_name = "pipeweaver-app"
"#
}
