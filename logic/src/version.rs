pub const DEPRECATION_NAG_VERSION: &str = env!("CARGO_PKG_VERSION");
#[cfg_attr(test, allow(dead_code))]
const GIT_SUFFIX: Option<&str> = option_env!("DEPRECATION_NAG_REVISION");

#[cfg(not(test))]
pub fn get_version() -> String {
    let suffix = GIT_SUFFIX.unwrap_or("dev");
    format!("{DEPRECATION_NAG_VERSION}-{suffix}")
}

// keeps snapshots stable across releases
#[cfg(test)]
pub fn get_version() -> String {
    "vTEST".to_string()
}
