use crate::cli::run_cli;
use deprecation_nag_logic::version::get_version;

pub mod cli;

fn main() {
    match run_cli() {
        Ok(()) => {}
        Err(e) => {
            eprintln!("ERROR running deprecation-nag ({}):\n{}\n", get_version(), e);
            std::process::exit(1);
        }
    }
}
