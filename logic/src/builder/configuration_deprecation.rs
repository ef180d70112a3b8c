use crate::builder::MessageBuilder;
use crate::builder::RemovalDetails;
use crate::builder::with_replacement::{DeprecationKind, WithReplacement};
use deprecation_nag_base::result::{NagError, bail};
use std::fmt::Display;
use std::str::FromStr;

pub type DeprecateConfiguration = WithReplacement<Configuration>;

/// Why a configuration is deprecated. Decides the wording and whether the
/// usage is attributed to user code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigurationDeprecationType {
    ArtifactDeclaration,
    Consumption,
    DependencyDeclaration,
    Resolution,
}

impl ConfigurationDeprecationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigurationDeprecationType::ArtifactDeclaration => "artifact-declaration",
            ConfigurationDeprecationType::Consumption => "consumption",
            ConfigurationDeprecationType::DependencyDeclaration => "dependency-declaration",
            ConfigurationDeprecationType::Resolution => "resolution",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ConfigurationDeprecationType::ArtifactDeclaration => "artifact declaration",
            ConfigurationDeprecationType::Consumption => "consumption",
            ConfigurationDeprecationType::DependencyDeclaration => "dependency declaration",
            ConfigurationDeprecationType::Resolution => "resolution",
        }
    }

    pub fn usage(&self) -> &'static str {
        match self {
            ConfigurationDeprecationType::ArtifactDeclaration => "use",
            ConfigurationDeprecationType::Consumption => "use attributes to consume",
            ConfigurationDeprecationType::DependencyDeclaration => "use",
            ConfigurationDeprecationType::Resolution => "resolve",
        }
    }

    pub fn in_user_code(&self) -> bool {
        !matches!(self, ConfigurationDeprecationType::Consumption)
    }
}

impl FromStr for ConfigurationDeprecationType {
    type Err = NagError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "artifact-declaration" => Ok(ConfigurationDeprecationType::ArtifactDeclaration),
            "consumption" => Ok(ConfigurationDeprecationType::Consumption),
            "dependency-declaration" => Ok(ConfigurationDeprecationType::DependencyDeclaration),
            "resolution" => Ok(ConfigurationDeprecationType::Resolution),
            other => bail!("Unknown configuration deprecation type: '{other}'"),
        }
    }
}

impl Display for ConfigurationDeprecationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Configuration {
    deprecation_type: ConfigurationDeprecationType,
}

impl Configuration {
    pub fn deprecation_type(&self) -> ConfigurationDeprecationType {
        self.deprecation_type
    }
}

impl DeprecationKind for Configuration {
    type Replacement = Vec<String>;

    fn format_summary(&self, configuration: &str) -> String {
        format!(
            "The {configuration} configuration has been deprecated for {}.",
            self.deprecation_type.display_name()
        )
    }

    fn format_advice(&self, replacements: &Vec<String>) -> String {
        format!(
            "Please {} the {} configuration instead.",
            self.deprecation_type.usage(),
            replacements.join(" or ")
        )
    }

    fn removal_details(&self) -> RemovalDetails {
        RemovalDetails::WillBecomeAnError
    }
}

impl DeprecateConfiguration {
    pub fn new(
        configuration: impl Into<String>,
        deprecation_type: ConfigurationDeprecationType,
    ) -> Self {
        let builder = Self::with_kind(configuration, Configuration { deprecation_type });
        if deprecation_type.in_user_code() {
            builder
        } else {
            builder.with_indirect_usage()
        }
    }
}

/// Picks the deprecation type for a configuration name.
#[derive(Debug, Clone)]
pub struct ConfigurationDeprecationTypeSelector {
    configuration: String,
}

impl ConfigurationDeprecationTypeSelector {
    pub fn new(configuration: impl Into<String>) -> Self {
        Self {
            configuration: configuration.into(),
        }
    }

    pub fn for_type(self, deprecation_type: ConfigurationDeprecationType) -> DeprecateConfiguration {
        DeprecateConfiguration::new(self.configuration, deprecation_type)
    }

    pub fn for_artifact_declaration(self) -> DeprecateConfiguration {
        self.for_type(ConfigurationDeprecationType::ArtifactDeclaration)
    }

    pub fn for_consumption(self) -> DeprecateConfiguration {
        self.for_type(ConfigurationDeprecationType::Consumption)
    }

    pub fn for_dependency_declaration(self) -> DeprecateConfiguration {
        self.for_type(ConfigurationDeprecationType::DependencyDeclaration)
    }

    pub fn for_resolution(self) -> DeprecateConfiguration {
        self.for_type(ConfigurationDeprecationType::Resolution)
    }
}
