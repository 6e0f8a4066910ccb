//! Environment and directory guards for configuration tests.
//!
//! Captures and restores environment variables, temporarily changes the
//! working directory, and writes throwaway configuration files.

use std::env;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use reqprobe::environment::{self, remove_var, set_var};

/// RAII guard that restores captured environment variables on drop.
pub struct EnvGuard {
    entries: Vec<(OsString, Option<OsString>)>,
}

impl EnvGuard {
    /// Capture `keys`, removing them from the environment for the guard's
    /// lifetime.
    ///
    /// Callers must serialise tests with `#[serial]`.
    pub fn new(keys: &[&str]) -> Self {
        let mut entries = Vec::new();
        for key in keys {
            let key = OsString::from(key);
            let previous = environment::with_lock(|| env::var_os(key.as_os_str()));
            remove_var(&key);
            entries.push((key, previous));
        }
        Self { entries }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, value) in &mut self.entries {
            let key_ref = key.as_os_str();
            match value.take() {
                Some(val) => set_var(key_ref, val),
                None => remove_var(key_ref),
            }
        }
    }
}

/// RAII guard restoring the working directory on drop.
pub struct DirGuard {
    previous: PathBuf,
}

impl DirGuard {
    /// Enter `path`, returning a guard that restores the prior working
    /// directory when dropped.
    pub fn enter(path: impl AsRef<Path>) -> Self {
        let previous = env::current_dir().expect("current dir");
        env::set_current_dir(path.as_ref()).expect("set dir");
        Self { previous }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = env::set_current_dir(&self.previous);
    }
}

/// Write `content` to `.reqprobe.toml` in a fresh temporary directory.
pub fn write_config(content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("create config dir");
    let path = dir.path().join(".reqprobe.toml");
    fs::write(&path, content).expect("write config");
    (dir, path)
}

/// Point `HOME` and `XDG_CONFIG_HOME` at `dir` so no user configuration is
/// discovered.
///
/// Callers must hold an [`EnvGuard`] covering both keys.
pub fn isolate_home(dir: &Path) {
    set_var("HOME", dir.as_os_str());
    set_var("XDG_CONFIG_HOME", dir.as_os_str());
}

/// Write `content` to a temporary `.reqprobe.toml`, point
/// `REQPROBE_CONFIG_PATH` at it, and return the directory and path.
///
/// Callers must hold an [`EnvGuard`] covering `REQPROBE_CONFIG_PATH`.
pub fn setup_env_and_config(content: &str) -> (TempDir, PathBuf) {
    let (dir, path) = write_config(content);
    set_var("REQPROBE_CONFIG_PATH", path.as_os_str());
    (dir, path)
}
