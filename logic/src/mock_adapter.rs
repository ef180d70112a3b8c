use crate::adapter::Adapter;
use crate::types::FilePath;
use deprecation_nag_base::result::{NagResult, bail};
use expect_test::Expect;
use indent::indent_all_with;
use std::collections::BTreeMap;
use std::io::{Cursor, Read};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Clone)]
pub struct MockAdapter {
    inner: Arc<RwLock<MockAdapterInner>>,
}

struct MockAdapterInner {
    args: Vec<String>,
    env: Vec<(String, String)>,
    files: BTreeMap<String, String>,
    effects_string: String,
}

impl MockAdapter {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MockAdapterInner {
                env: vec![("NO_COLOR".to_string(), "1".to_string())],
                args: Vec::new(),
                files: BTreeMap::new(),
                effects_string: String::new(),
            })),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, MockAdapterInner> {
        self.inner
            .read()
            .expect("Unable to acquire read lock for mock adapter")
    }

    fn write(&self) -> RwLockWriteGuard<'_, MockAdapterInner> {
        self.inner
            .write()
            .expect("Unable to acquire write lock for mock adapter")
    }

    fn log_effect(&self, effect: impl AsRef<str>) {
        let mut inner = self.write();
        inner.effects_string.push_str(effect.as_ref());
        inner.effects_string.push('\n');
    }

    pub fn set_args(&self, args: &[&str]) {
        let mut all_args = vec!["./deprecation-nag".to_string()];
        all_args.extend(args.iter().map(|s| s.to_string()));
        self.write().args = all_args;
    }

    pub fn set_file(&self, path: impl Into<String>, content: impl Into<String>) {
        self.write().files.insert(path.into(), content.into());
    }

    pub fn verify_effects(&self, expected: Expect) {
        expected.assert_eq(&self.read().effects_string);
    }

    pub fn get_effects(&self) -> String {
        self.read().effects_string.clone()
    }
}

impl Adapter for MockAdapter {
    fn args(&self) -> Vec<String> {
        self.read().args.clone()
    }

    fn env(&self) -> Vec<(String, String)> {
        self.read().env.clone()
    }

    fn print(&self, message: &str) {
        self.log_effect(format!("PRINT:\n{}", indent_all_with("\t", message)));
    }

    fn file_exists(&self, path: &FilePath) -> NagResult<bool> {
        Ok(self.read().files.contains_key(path.as_str()))
    }

    fn read_file(&self, path: &FilePath) -> NagResult<Box<dyn Read>> {
        self.log_effect(format!("READ FILE: {path}"));
        let Some(content) = self.read().files.get(path.as_str()).cloned() else {
            bail!("File not found: '{path}'");
        };
        Ok(Box::new(Cursor::new(content)))
    }

    fn exit(&self, exit_code: i32) {
        self.log_effect(format!("EXIT: {exit_code}"));
    }
}

impl std::fmt::Debug for MockAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "MockAdapter")
    }
}
