// Saved.io platform paths
//
// Linux:   $XDG_CONFIG_HOME/savedio, $XDG_DATA_HOME/savedio
//          (falling back to ~/.config and ~/.local/share)
// macOS:   ~/Library/Application Support/Savedio for both
// Windows: %APPDATA%/Savedio for both

use std::env;
use std::path::PathBuf;

#[cfg_attr(target_os = "windows", allow(dead_code))]
fn home_dir() -> PathBuf {
    PathBuf::from(env::var("HOME").unwrap_or_else(|_| String::from("/tmp")))
}

#[cfg(target_os = "linux")]
fn xdg_dir(var: &str, fallback: &[&str]) -> PathBuf {
    match env::var(var) {
        Ok(dir) if !dir.is_empty() => PathBuf::from(dir).join("savedio"),
        _ => fallback
            .iter()
            .fold(home_dir(), |path, part| path.join(part))
            .join("savedio"),
    }
}

/// Returns the directory holding `settings.json`.
pub fn get_config_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        xdg_dir("XDG_CONFIG_HOME", &[".config"])
    }
    #[cfg(target_os = "macos")]
    {
        home_dir().join("Library").join("Application Support").join("Savedio")
    }
    #[cfg(target_os = "windows")]
    {
        appdata_dir()
    }
    #[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
    {
        home_dir().join(".savedio")
    }
}

/// Returns the directory holding the bookmark database.
pub fn get_data_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        xdg_dir("XDG_DATA_HOME", &[".local", "share"])
    }
    #[cfg(target_os = "macos")]
    {
        home_dir().join("Library").join("Application Support").join("Savedio")
    }
    #[cfg(target_os = "windows")]
    {
        appdata_dir()
    }
    #[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
    {
        home_dir().join(".savedio")
    }
}

#[cfg(target_os = "windows")]
fn appdata_dir() -> PathBuf {
    let appdata = env::var("APPDATA")
        .unwrap_or_else(|_| String::from("C:\\Users\\Default\\AppData\\Roaming"));
    PathBuf::from(appdata).join("Savedio")
}
