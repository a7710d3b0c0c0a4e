// Hands a game URL to the system browser.

use std::process::{Command, Stdio};

fn browser_command(url: &str) -> Command {
    #[cfg(target_os = "windows")]
    let mut cmd = Command::new("explorer");
    #[cfg(target_os = "macos")]
    let mut cmd = Command::new("open");
    #[cfg(all(unix, not(target_os = "macos")))]
    let mut cmd = Command::new("xdg-open");

    cmd.arg(url)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());
    cmd
}

/// Spawns the browser without a shell; the UI keeps running.
pub fn open_in_browser(url: &str) {
    if url.is_empty() {
        log::warn!("Game has no URL to open");
        return;
    }
    match browser_command(url).spawn() {
        Ok(_) => log::info!("Opened {url}"),
        Err(e) => log::error!("Failed to open browser for {}: {}", url, e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_is_passed_as_single_argument() {
        let cmd = browser_command("https://games.example/play?a=1&b=2");
        let args: Vec<_> = cmd.get_args().collect();
        assert_eq!(args, vec!["https://games.example/play?a=1&b=2"]);
    }
}
