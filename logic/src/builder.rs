mod configuration_deprecation;
mod variants;
mod with_replacement;

pub use configuration_deprecation::{
    Configuration, ConfigurationDeprecationType, ConfigurationDeprecationTypeSelector,
    DeprecateConfiguration,
};
pub use variants::{
    DeprecateInternalApi, DeprecateInvocation, DeprecateMethod, DeprecateNamedParameter,
    DeprecatePlugin, DeprecateProperty, DeprecateTask, InternalApi, Invocation, Method,
    NamedParameter, Plugin, Property, Task,
};
pub use with_replacement::{DeprecationKind, WithReplacement};

use crate::logger::DeprecationLogger;
use crate::message::{DeprecationMessage, UsageType};
use crate::message_context::MessageContext;

/// Removal wording before it is rendered against the product version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemovalDetails {
    ScheduledToBeRemoved,
    WillBecomeAnError,
    BehaviourScheduledToBeRemoved,
    Custom(String),
}

impl RemovalDetails {
    /// Explicit marker for "no removal scheduled", distinct from unset.
    pub fn none() -> Self {
        RemovalDetails::Custom(String::new())
    }

    fn render(&self, context: &MessageContext) -> String {
        let messages = context.messages();
        match self {
            RemovalDetails::ScheduledToBeRemoved => messages.this_is_scheduled_to_be_removed(),
            RemovalDetails::WillBecomeAnError => messages.this_will_become_an_error(),
            RemovalDetails::BehaviourScheduledToBeRemoved => {
                messages.this_behaviour_has_been_deprecated_and_is_scheduled_to_be_removed()
            }
            RemovalDetails::Custom(text) => text.clone(),
        }
    }
}

/// Advice before rendering. Upgrade guide links are resolved against the
/// documentation registry at build time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advice {
    Text(String),
    UpgradeGuide { major_version: u32, section: String },
}

impl Advice {
    fn render(&self, context: &MessageContext) -> String {
        match self {
            Advice::Text(text) => text.clone(),
            Advice::UpgradeGuide {
                major_version,
                section,
            } => format!(
                "Consult the upgrading guide for further information: {}",
                context
                    .documentation()
                    .documentation_for(&format!("upgrading_version_{major_version}"), section)
            ),
        }
    }
}

/// Mutable, single-use accumulator for the fields of a [`DeprecationMessage`].
#[derive(Debug, Clone, Default)]
pub struct DeprecationMessageBuilder {
    summary: Option<String>,
    removal_details: Option<RemovalDetails>,
    advice: Option<Advice>,
    context: Option<String>,
    documentation_reference: Option<String>,
    usage_type: UsageType,
}

impl DeprecationMessageBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    /// First value wins; later defaults never replace an earlier one.
    pub(crate) fn with_removal_details(mut self, removal_details: RemovalDetails) -> Self {
        self.removal_details.get_or_insert(removal_details);
        self
    }

    pub(crate) fn with_build_invocation(mut self) -> Self {
        self.usage_type = UsageType::BuildInvocation;
        self
    }
}

/// Fluent surface shared by the plain builder and all typed variants.
pub trait MessageBuilder: Sized {
    fn base_mut(&mut self) -> &mut DeprecationMessageBuilder;

    /// Renders the accumulated fields. Consumes the builder.
    fn build(self, context: &MessageContext) -> DeprecationMessage;

    fn with_advice(mut self, advice: impl Into<String>) -> Self {
        self.base_mut().advice = Some(Advice::Text(advice.into()));
        self
    }

    fn with_context(mut self, context: impl Into<String>) -> Self {
        self.base_mut().context = Some(context.into());
        self
    }

    fn with_documentation_reference(mut self, documentation_reference: impl Into<String>) -> Self {
        self.base_mut().documentation_reference = Some(documentation_reference.into());
        self
    }

    fn with_indirect_usage(mut self) -> Self {
        self.base_mut().usage_type = UsageType::UserCodeIndirect;
        self
    }

    fn without_scheduled_removal(mut self) -> Self {
        self.base_mut().removal_details = Some(RemovalDetails::none());
        self
    }

    fn nag_user(self, logger: &mut DeprecationLogger) {
        logger.nag_user_with(self);
    }
}

impl MessageBuilder for DeprecationMessageBuilder {
    fn base_mut(&mut self) -> &mut DeprecationMessageBuilder {
        self
    }

    fn build(self, context: &MessageContext) -> DeprecationMessage {
        DeprecationMessage::new(
            self.summary.unwrap_or_default(),
            self.removal_details
                .map(|removal_details| removal_details.render(context))
                .unwrap_or_default(),
            self.advice.map(|advice| advice.render(context)),
            self.context,
            self.documentation_reference,
            self.usage_type,
        )
    }
}
