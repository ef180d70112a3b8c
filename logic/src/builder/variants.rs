use crate::builder::with_replacement::{DeprecationKind, WithReplacement};
use crate::builder::{Advice, RemovalDetails};
use crate::wording::please_use_this_method_instead;

pub type DeprecateNamedParameter = WithReplacement<NamedParameter>;
pub type DeprecateProperty = WithReplacement<Property>;
pub type DeprecateMethod = WithReplacement<Method>;
pub type DeprecateInvocation = WithReplacement<Invocation>;
pub type DeprecateTask = WithReplacement<Task>;
pub type DeprecatePlugin = WithReplacement<Plugin>;
pub type DeprecateInternalApi = WithReplacement<InternalApi>;

#[derive(Debug, Clone, Copy, Default)]
pub struct NamedParameter;

impl DeprecationKind for NamedParameter {
    type Replacement = String;

    fn format_summary(&self, parameter: &str) -> String {
        format!("The {parameter} named parameter has been deprecated.")
    }

    fn format_advice(&self, replacement: &String) -> String {
        format!("Please use the {replacement} named parameter instead.")
    }
}

impl DeprecateNamedParameter {
    pub fn new(parameter: impl Into<String>) -> Self {
        Self::with_kind(parameter, NamedParameter)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Property;

impl DeprecationKind for Property {
    type Replacement = String;

    fn format_summary(&self, property: &str) -> String {
        format!("The {property} property has been deprecated.")
    }

    fn format_advice(&self, replacement: &String) -> String {
        format!("Please use the {replacement} property instead.")
    }
}

impl DeprecateProperty {
    pub fn new(property: impl Into<String>) -> Self {
        Self::with_kind(property, Property)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Method;

impl DeprecationKind for Method {
    type Replacement = String;

    fn format_summary(&self, method: &str) -> String {
        format!("The {method} method has been deprecated.")
    }

    fn format_advice(&self, replacement: &String) -> String {
        please_use_this_method_instead(replacement)
    }
}

impl DeprecateMethod {
    pub fn new(method: impl Into<String>) -> Self {
        Self::with_kind(method, Method)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Invocation;

impl DeprecationKind for Invocation {
    type Replacement = String;

    fn format_summary(&self, invocation: &str) -> String {
        format!("Using method {invocation} has been deprecated.")
    }

    fn format_advice(&self, replacement: &String) -> String {
        please_use_this_method_instead(replacement)
    }

    fn removal_details(&self) -> RemovalDetails {
        RemovalDetails::WillBecomeAnError
    }
}

impl DeprecateInvocation {
    pub fn new(invocation: impl Into<String>) -> Self {
        Self::with_kind(invocation, Invocation)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Task;

impl DeprecationKind for Task {
    type Replacement = String;

    fn format_summary(&self, task: &str) -> String {
        format!("The {task} task has been deprecated.")
    }

    fn format_advice(&self, replacement: &String) -> String {
        format!("Please use the {replacement} task instead.")
    }
}

impl DeprecateTask {
    pub fn new(task: impl Into<String>) -> Self {
        Self::with_kind(task, Task)
    }
}

/// Plugin wording; an external replacement is only suggested, not required.
#[derive(Debug, Clone, Copy, Default)]
pub struct Plugin {
    external_replacement: bool,
}

impl DeprecationKind for Plugin {
    type Replacement = String;

    fn format_summary(&self, plugin: &str) -> String {
        format!("The {plugin} plugin has been deprecated.")
    }

    fn format_advice(&self, replacement: &String) -> String {
        if self.external_replacement {
            format!("Consider using the {replacement} plugin instead.")
        } else {
            format!("Please use the {replacement} plugin instead.")
        }
    }
}

impl DeprecatePlugin {
    pub fn new(plugin: impl Into<String>) -> Self {
        Self::with_kind(plugin, Plugin::default())
    }

    pub fn replace_with_external_plugin(mut self, replacement: impl Into<String>) -> Self {
        self.kind.external_replacement = true;
        self.replace_with(replacement)
    }

    /// Points the advice at a section of the upgrading guide for
    /// `major_version`. Replaced by later advice, including a replacement's.
    pub fn with_upgrade_guide_section(
        mut self,
        major_version: u32,
        upgrade_guide_section: impl Into<String>,
    ) -> Self {
        self.base.advice = Some(Advice::UpgradeGuide {
            major_version,
            section: upgrade_guide_section.into(),
        });
        self
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct InternalApi;

impl DeprecationKind for InternalApi {
    type Replacement = String;

    fn format_summary(&self, api: &str) -> String {
        format!("Internal API {api} has been deprecated.")
    }

    fn format_advice(&self, replacement: &String) -> String {
        format!("Please use {replacement} instead.")
    }
}

impl DeprecateInternalApi {
    pub fn new(api: impl Into<String>) -> Self {
        Self::with_kind(api, InternalApi)
    }
}
