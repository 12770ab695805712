use std::process::Command;

use crate::config::BrowserConfig;
use crate::shortcuts::action::ActionError;

/// Open a URL in the user's default browser
pub fn open_url(url: &str) -> Result<(), ActionError> {
    tracing::debug!(%url, "Opening URL");
    open::that_detached(url).map_err(|source| ActionError::Open {
        url: url.to_string(),
        source,
    })
}

/// Open a URL in a private (incognito) browser window
///
/// Browsers have no common API for this, so the configured command is run
/// with its arguments followed by the URL.
pub fn open_private(url: &str, config: &BrowserConfig) -> Result<(), ActionError> {
    let command = config.private_command.trim();
    if command.is_empty() {
        return Err(ActionError::NoPrivateCommand);
    }

    tracing::debug!(%url, %command, args = ?config.private_args, "Opening URL in private window");
    let mut child = Command::new(command)
        .args(&config.private_args)
        .arg(url)
        .spawn()
        .map_err(|source| ActionError::Open {
            url: url.to_string(),
            source,
        })?;

    // Reap the launcher once it exits so it does not linger as a zombie
    std::thread::spawn(move || {
        if let Err(e) = child.wait() {
            tracing::debug!(%e, "Failed to wait for private window command");
        }
    });
    Ok(())
}
