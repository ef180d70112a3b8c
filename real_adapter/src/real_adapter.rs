use deprecation_nag_base::result::{Context, NagResult};
use deprecation_nag_logic::adapter::Adapter;
use deprecation_nag_logic::types::FilePath;
use std::env;
use std::fmt::Debug;
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

pub struct RealAdapter {
    base_path: PathBuf,
}

impl RealAdapter {
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    fn resolve_path(&self, path: &FilePath) -> PathBuf {
        path.to_path(&self.base_path)
    }
}

impl Adapter for RealAdapter {
    fn args(&self) -> Vec<String> {
        env::args().collect()
    }

    fn env(&self) -> Vec<(String, String)> {
        env::vars().collect()
    }

    fn print(&self, message: &str) {
        eprintln!("{message}");
    }

    fn file_exists(&self, path: &FilePath) -> NagResult<bool> {
        let physical_path = self.resolve_path(path);
        Ok(physical_path.is_file())
    }

    fn read_file(&self, path: &FilePath) -> NagResult<Box<dyn Read>> {
        let physical_path = self.resolve_path(path);
        Ok(Box::new(File::open(&physical_path).with_context(|| {
            format!("Failed to read file {physical_path:?}")
        })?))
    }

    fn exit(&self, exit_code: i32) {
        std::process::exit(exit_code);
    }
}

impl Debug for RealAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RealAdapter")
    }
}
