use crate::documentation::{DocumentationLinks, DocumentationRegistry};
use crate::wording::Messages;
use std::rc::Rc;

/// Read-only collaborators needed to render a builder into a message.
#[derive(Debug, Clone)]
pub struct MessageContext {
    messages: Messages,
    documentation: Rc<dyn DocumentationRegistry>,
}

impl MessageContext {
    pub fn new(messages: Messages, documentation: Rc<dyn DocumentationRegistry>) -> Self {
        Self {
            messages,
            documentation,
        }
    }

    pub fn messages(&self) -> &Messages {
        &self.messages
    }

    pub fn documentation(&self) -> &dyn DocumentationRegistry {
        self.documentation.as_ref()
    }
}

impl Default for MessageContext {
    fn default() -> Self {
        Self::new(Messages::default(), Rc::new(DocumentationLinks::default()))
    }
}
