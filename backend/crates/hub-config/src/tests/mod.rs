mod validation;

use crate::{CONFIG_FILENAME, Config, ConfigErrorResult, CONFIG_DIR_ENV};

use std::env;
use std::path::Path;

use tempfile::TempDir;

/// Isolated config directory plus environment variables that are put back
/// when the fixture is dropped. Tests using it must be `#[serial]`.
pub(crate) struct TestEnv {
    dir: TempDir,
    saved: Vec<(String, Option<String>)>,
}

impl TestEnv {
    pub(crate) fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let mut test_env = Self {
            dir,
            saved: Vec::new(),
        };
        let path = test_env.dir.path().to_str().unwrap().to_owned();
        test_env.set(CONFIG_DIR_ENV, &path);
        test_env
    }

    pub(crate) fn path(&self) -> &Path {
        self.dir.path()
    }

    pub(crate) fn set(&mut self, key: &str, value: &str) -> &mut Self {
        self.saved.push((key.to_owned(), env::var(key).ok()));
        // SAFETY: callers run under #[serial], so no other thread reads the environment
        unsafe { env::set_var(key, value) };
        self
    }

    pub(crate) fn write_toml(&self, contents: &str) {
        std::fs::write(self.dir.path().join(CONFIG_FILENAME), contents).unwrap();
    }

    pub(crate) fn load(&self) -> ConfigErrorResult<Config> {
        Config::load()
    }
}

impl Drop for TestEnv {
    fn drop(&mut self) {
        for (key, original) in self.saved.drain(..).rev() {
            // SAFETY: see `set`
            unsafe {
                match original {
                    Some(value) => env::set_var(&key, value),
                    None => env::remove_var(&key),
                }
            }
        }
    }
}
