pub mod logging;
pub mod result;
