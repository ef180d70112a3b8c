use std::fmt::Display;

/// How a deprecated feature was reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UsageType {
    /// The build's own code used the feature.
    #[default]
    UserCodeDirect,
    /// The feature was used on the user's behalf, e.g. by a plugin.
    UserCodeIndirect,
    /// The feature was requested when invoking the build.
    BuildInvocation,
}

impl UsageType {
    pub fn as_str(&self) -> &'static str {
        match self {
            UsageType::UserCodeDirect => "user code direct",
            UsageType::UserCodeIndirect => "user code indirect",
            UsageType::BuildInvocation => "build invocation",
        }
    }
}

impl Display for UsageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A fully rendered deprecation warning.
///
/// An empty `removal_details` means no removal is scheduled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeprecationMessage {
    summary: String,
    removal_details: String,
    advice: Option<String>,
    context: Option<String>,
    documentation_reference: Option<String>,
    usage_type: UsageType,
}

impl DeprecationMessage {
    pub(crate) fn new(
        summary: String,
        removal_details: String,
        advice: Option<String>,
        context: Option<String>,
        documentation_reference: Option<String>,
        usage_type: UsageType,
    ) -> Self {
        Self {
            summary,
            removal_details,
            advice,
            context,
            documentation_reference,
            usage_type,
        }
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn removal_details(&self) -> &str {
        &self.removal_details
    }

    pub fn advice(&self) -> Option<&str> {
        self.advice.as_deref()
    }

    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }

    pub fn documentation_reference(&self) -> Option<&str> {
        self.documentation_reference.as_deref()
    }

    pub fn usage_type(&self) -> UsageType {
        self.usage_type
    }

    /// Single line shown to the user: summary, removal details, context,
    /// advice and documentation pointer, skipping empty parts.
    pub fn formatted_message(&self) -> String {
        let documentation = self
            .documentation_reference
            .as_ref()
            .map(|reference| format!("For more information, please refer to {reference}."));
        let parts = [
            Some(self.summary.as_str()),
            Some(self.removal_details.as_str()),
            self.context.as_deref(),
            self.advice.as_deref(),
            documentation.as_deref(),
        ];
        parts
            .into_iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
