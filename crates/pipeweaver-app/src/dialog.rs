//! Fatal error reporting for users who launched from a desktop entry and
//! will never see stderr.

use std::process::Command;

const DIALOG_TITLE: &str = "Pipeweaver UI";

/// Build the dialog invocations to try, in order.
fn dialog_commands(message: &str) -> [Command; 2] {
    let mut kdialog = Command::new("kdialog");
    kdialog
        .arg("--title")
        .arg(DIALOG_TITLE)
        .arg("--error")
        .arg(message);

    let mut zenity = Command::new("zenity");
    zenity
        .arg("--title")
        .arg(DIALOG_TITLE)
        .arg("--error")
        .arg("--text")
        .arg(message);

    [kdialog, zenity]
}

/// Show `message` in a desktop error dialog, trying kdialog then zenity.
pub fn display_error(message: &str) {
    for mut command in dialog_commands(message) {
        let program = command.get_program().to_string_lossy().into_owned();
        match command.output() {
            Ok(_) => return,
            Err(e) => tracing::warn!(%program, error = %e, "error dialog unavailable"),
        }
    }
}
