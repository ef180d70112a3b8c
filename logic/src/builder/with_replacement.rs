use crate::builder::{DeprecationMessageBuilder, MessageBuilder, RemovalDetails};
use crate::message::DeprecationMessage;
use crate::message_context::MessageContext;

/// Wording of one category of deprecated subject.
pub trait DeprecationKind {
    type Replacement;

    fn format_summary(&self, subject: &str) -> String;

    fn format_advice(&self, replacement: &Self::Replacement) -> String;

    fn removal_details(&self) -> RemovalDetails {
        RemovalDetails::ScheduledToBeRemoved
    }
}

/// Builder for a named subject with an optional typed replacement.
pub struct WithReplacement<K: DeprecationKind> {
    pub(super) base: DeprecationMessageBuilder,
    pub(super) subject: String,
    pub(super) kind: K,
    pub(super) replacement: Option<K::Replacement>,
}

impl<K: DeprecationKind> WithReplacement<K> {
    pub(super) fn with_kind(subject: impl Into<String>, kind: K) -> Self {
        Self {
            base: DeprecationMessageBuilder::new(),
            subject: subject.into(),
            kind,
            replacement: None,
        }
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn kind(&self) -> &K {
        &self.kind
    }

    pub fn replace_with(mut self, replacement: impl Into<K::Replacement>) -> Self {
        self.replacement = Some(replacement.into());
        self
    }
}

impl<K: DeprecationKind> MessageBuilder for WithReplacement<K> {
    fn base_mut(&mut self) -> &mut DeprecationMessageBuilder {
        &mut self.base
    }

    fn build(self, context: &MessageContext) -> DeprecationMessage {
        let mut base = self
            .base
            .with_summary(self.kind.format_summary(&self.subject))
            .with_removal_details(self.kind.removal_details());
        if let Some(replacement) = &self.replacement {
            base = base.with_advice(self.kind.format_advice(replacement));
        }
        base.build(context)
    }
}
