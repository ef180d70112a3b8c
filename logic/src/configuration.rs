use crate::documentation::DocumentationLinks;
use crate::logger::WarningMode;
use crate::message_context::MessageContext;
use crate::wording::Messages;
use std::rc::Rc;

pub mod parse_config;

pub const CONFIGURATION_FILE_NAME: &str = ".deprecation-nag.kdl";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NagConfiguration {
    pub product: String,
    pub next_major_version: String,
    pub warning_mode: WarningMode,
    pub documentation: DocumentationLinks,
}

impl NagConfiguration {
    pub fn message_context(&self) -> MessageContext {
        MessageContext::new(
            Messages::new(&self.product, &self.next_major_version),
            Rc::new(self.documentation.clone()),
        )
    }
}

impl Default for NagConfiguration {
    fn default() -> Self {
        let messages = Messages::default();
        Self {
            product: messages.product().to_string(),
            next_major_version: messages.next_major_version().to_string(),
            warning_mode: WarningMode::default(),
            documentation: DocumentationLinks::default(),
        }
    }
}
