use serde::{Deserialize, Serialize};

/// How private windows are opened
///
/// The URL is appended after `private_args`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BrowserConfig {
    pub private_command: String,
    pub private_args: Vec<String>,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        #[cfg(target_os = "macos")]
        let (command, args) = ("open", vec!["-na", "Google Chrome", "--args", "--incognito"]);

        // The URL must reach the browser without passing through a shell
        #[cfg(target_os = "windows")]
        let (command, args) = (
            r"C:\Program Files (x86)\Microsoft\Edge\Application\msedge.exe",
            vec!["--inprivate"],
        );

        #[cfg(not(any(target_os = "macos", target_os = "windows")))]
        let (command, args) = ("google-chrome", vec!["--incognito"]);

        Self {
            private_command: command.to_string(),
            private_args: args.into_iter().map(String::from).collect(),
        }
    }
}
