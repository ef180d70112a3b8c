use crate::adapter::Adapter;
use crate::version::get_version;

pub const PREVIEW_KINDS: &str = "feature, behaviour, named-parameter, property, method, invocation, task, plugin, external-plugin, internal-api, configuration:<artifact-declaration|consumption|dependency-declaration|resolution>";

pub fn print_help(adapter: &dyn Adapter) {
    adapter.print(&format!(
        "deprecation-nag ({}) - Renders deprecation warnings for build tools",
        get_version()
    ));
    let help_text = r#"
USAGE:
    deprecation-nag [OPTIONS]

OPTIONS:
    --help              Show this help message
    --version           Display version information
    --validate          Validate the configuration file
    --show-config       Display the effective configuration
    --preview <KIND> <SUBJECT> [REPLACEMENT...]
                        Render a deprecation warning as the logger would report it

EXAMPLES:
    # Preview a deprecated method with its replacement
    deprecation-nag --preview method 'Project.getConvention()' 'Project.getExtensions()'

    # Preview a configuration deprecated for consumption
    deprecation-nag --preview configuration:consumption compile api implementation

CONFIGURATION:
    deprecation-nag looks for a configuration file named '.deprecation-nag.kdl' in the
    current directory or its parents. This file sets the product name, its next major
    version, the warning mode and the documentation location in KDL format.

For more information, please refer to the documentation."#;

    adapter.print(help_text);
}
