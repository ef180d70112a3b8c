use crate::adapter::AdapterBox;
use crate::builder::{
    ConfigurationDeprecationTypeSelector, DeprecateInternalApi, DeprecateInvocation,
    DeprecateMethod, DeprecateNamedParameter, DeprecatePlugin, DeprecateProperty, DeprecateTask,
    DeprecationMessageBuilder, MessageBuilder, RemovalDetails,
};
use crate::message::DeprecationMessage;
use crate::message_context::MessageContext;
use deprecation_nag_base::logging::{debug, warn};
use deprecation_nag_base::result::{NagError, bail};
use std::collections::HashSet;
use std::fmt::Display;
use std::str::FromStr;

/// How deprecations reach the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WarningMode {
    /// Print every distinct deprecation as it happens.
    All,
    /// Print one line at the end of the build.
    #[default]
    Summary,
    None,
}

impl WarningMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            WarningMode::All => "all",
            WarningMode::Summary => "summary",
            WarningMode::None => "none",
        }
    }
}

impl FromStr for WarningMode {
    type Err = NagError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(WarningMode::All),
            "summary" => Ok(WarningMode::Summary),
            "none" => Ok(WarningMode::None),
            other => bail!("Unknown warning mode: '{other}' (expected one of 'all', 'summary', 'none')"),
        }
    }
}

impl Display for WarningMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Renders deprecation builders and nags the user about each distinct
/// message once.
#[derive(Debug)]
pub struct DeprecationLogger {
    context: MessageContext,
    warning_mode: WarningMode,
    adapter: AdapterBox,
    disabled_depth: usize,
    messages: Vec<DeprecationMessage>,
    seen: HashSet<String>,
}

impl DeprecationLogger {
    pub fn new(context: MessageContext, warning_mode: WarningMode, adapter: AdapterBox) -> Self {
        Self {
            context,
            warning_mode,
            adapter,
            disabled_depth: 0,
            messages: Vec::new(),
            seen: HashSet::new(),
        }
    }

    pub fn context(&self) -> &MessageContext {
        &self.context
    }

    pub fn warning_mode(&self) -> WarningMode {
        self.warning_mode
    }

    pub fn deprecate(feature: impl Display) -> DeprecationMessageBuilder {
        DeprecationMessageBuilder::new()
            .with_summary(format!("{feature} has been deprecated."))
            .with_removal_details(RemovalDetails::ScheduledToBeRemoved)
    }

    pub fn deprecate_indirect_usage(feature: impl Display) -> DeprecationMessageBuilder {
        Self::deprecate(feature).with_indirect_usage()
    }

    pub fn deprecate_build_invocation_feature(feature: impl Display) -> DeprecationMessageBuilder {
        Self::deprecate(feature).with_build_invocation()
    }

    pub fn deprecate_behaviour(behaviour: impl Into<String>) -> DeprecationMessageBuilder {
        DeprecationMessageBuilder::new()
            .with_summary(behaviour)
            .with_removal_details(RemovalDetails::BehaviourScheduledToBeRemoved)
    }

    pub fn deprecate_named_parameter(parameter: impl Into<String>) -> DeprecateNamedParameter {
        DeprecateNamedParameter::new(parameter)
    }

    pub fn deprecate_property(property: impl Into<String>) -> DeprecateProperty {
        DeprecateProperty::new(property)
    }

    pub fn deprecate_method(method: impl Into<String>) -> DeprecateMethod {
        DeprecateMethod::new(method)
    }

    pub fn deprecate_invocation(invocation: impl Into<String>) -> DeprecateInvocation {
        DeprecateInvocation::new(invocation)
    }

    pub fn deprecate_task(task: impl Into<String>) -> DeprecateTask {
        DeprecateTask::new(task)
    }

    pub fn deprecate_plugin(plugin: impl Into<String>) -> DeprecatePlugin {
        DeprecatePlugin::new(plugin)
    }

    pub fn deprecate_internal_api(api: impl Into<String>) -> DeprecateInternalApi {
        DeprecateInternalApi::new(api)
    }

    pub fn deprecate_configuration(
        configuration: impl Into<String>,
    ) -> ConfigurationDeprecationTypeSelector {
        ConfigurationDeprecationTypeSelector::new(configuration)
    }

    pub fn nag_user_with(&mut self, builder: impl MessageBuilder) {
        if self.is_disabled() {
            return;
        }
        let message = builder.build(&self.context);
        let formatted = message.formatted_message();
        if !self.seen.insert(formatted.clone()) {
            debug!("Skipping repeated deprecation: {formatted}");
            return;
        }
        warn!(usage_type = %message.usage_type(), "Deprecated feature used: {formatted}");
        if self.warning_mode == WarningMode::All {
            self.adapter.print(&formatted);
        }
        self.messages.push(message);
    }

    /// Runs `action` without recording or printing any deprecation.
    ///
    /// The logger is enabled again when `action` returns or unwinds.
    pub fn while_disabled<R>(&mut self, action: impl FnOnce(&mut Self) -> R) -> R {
        self.disabled_depth += 1;
        let mut scope = DisabledScope { logger: self };
        action(&mut *scope.logger)
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled_depth > 0
    }

    pub fn messages(&self) -> &[DeprecationMessage] {
        &self.messages
    }

    pub fn report_summary(&self) {
        if self.warning_mode != WarningMode::Summary || self.messages.is_empty() {
            return;
        }
        self.adapter.print(&format!(
            "{}\nUse '--warning-mode all' to show the individual deprecation warnings.",
            self.context.messages().deprecated_features_used()
        ));
    }

    pub fn reset(&mut self) {
        self.messages.clear();
        self.seen.clear();
    }
}

struct DisabledScope<'a> {
    logger: &'a mut DeprecationLogger,
}

impl Drop for DisabledScope<'_> {
    fn drop(&mut self) {
        self.logger.disabled_depth -= 1;
    }
}
