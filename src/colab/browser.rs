//! Browser launching
//!
//! Thin seam over the system browser so commands can be tested with a stub
//! launcher instead of opening real windows.

use anyhow::{Context, Result};
use std::path::PathBuf;
use std::process::Command;

/// Where the notebook should open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchTarget {
    NewTab,
    NewWindow,
}

pub trait BrowserLauncher {
    fn open(&self, url: &str, target: LaunchTarget) -> Result<()>;
}

/// Launcher backed by the system default browser, or by a configured
/// browser executable when `browser_path` is set.
#[derive(Debug, Default)]
pub struct SystemBrowser {
    browser_path: Option<PathBuf>,
}

impl SystemBrowser {
    /// `browser_path` comes from the config record; empty means unset.
    pub fn from_config(browser_path: &str) -> Self {
        let browser_path = if browser_path.is_empty() {
            None
        } else {
            Some(PathBuf::from(browser_path))
        };
        Self { browser_path }
    }
}

impl BrowserLauncher for SystemBrowser {
    fn open(&self, url: &str, target: LaunchTarget) -> Result<()> {
        match &self.browser_path {
            Some(browser) => {
                let mut cmd = Command::new(browser);
                if target == LaunchTarget::NewWindow {
                    cmd.arg("--new-window");
                }
                cmd.arg(url)
                    .spawn()
                    .with_context(|| format!("Failed to launch {}", browser.display()))?;
                Ok(())
            }
            None => {
                // The default-browser API has no tab/window control; the
                // hint only takes effect with an explicit browser_path.
                webbrowser::open(url).context("Failed to open the system browser")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config_empty_means_system_default() {
        assert!(SystemBrowser::from_config("").browser_path.is_none());
        assert_eq!(
            SystemBrowser::from_config("/usr/bin/firefox").browser_path,
            Some(PathBuf::from("/usr/bin/firefox"))
        );
    }
}
