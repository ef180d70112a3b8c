use crate::types::FilePath;
use deprecation_nag_base::result::NagResult;
use std::fmt::Debug;
use std::io::Read;
use std::rc::Rc;

/// Boundary between the nagging logic and the outside world.
///
/// Everything that touches the process (arguments, environment, output,
/// files, exit codes) goes through this trait so the logic can be driven by
/// a mock in tests.
pub trait Adapter: Debug + 'static {
    fn args(&self) -> Vec<String>;
    fn env(&self) -> Vec<(String, String)>;
    fn print(&self, message: &str);
    fn file_exists(&self, path: &FilePath) -> NagResult<bool>;
    fn read_file(&self, path: &FilePath) -> NagResult<Box<dyn Read>>;
    fn exit(&self, exit_code: i32);
}

pub type AdapterBox = Rc<dyn Adapter>;
