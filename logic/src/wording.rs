/// Shared phrases whose text depends on the product and its next major
/// version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Messages {
    product: String,
    next_major_version: String,
}

impl Messages {
    pub fn new(product: impl Into<String>, next_major_version: impl Into<String>) -> Self {
        Self {
            product: product.into(),
            next_major_version: next_major_version.into(),
        }
    }

    pub fn product(&self) -> &str {
        &self.product
    }

    pub fn next_major_version(&self) -> &str {
        &self.next_major_version
    }

    fn next_release(&self) -> String {
        format!("{} {}", self.product, self.next_major_version)
    }

    pub fn this_is_scheduled_to_be_removed(&self) -> String {
        format!("This is scheduled to be removed in {}.", self.next_release())
    }

    pub fn this_will_become_an_error(&self) -> String {
        format!("This will fail with an error in {}.", self.next_release())
    }

    pub fn this_behaviour_has_been_deprecated_and_is_scheduled_to_be_removed(&self) -> String {
        format!(
            "This behaviour has been deprecated and is scheduled to be removed in {}.",
            self.next_release()
        )
    }

    pub fn deprecated_features_used(&self) -> String {
        format!(
            "Deprecated {} features were used in this build, making it incompatible with {}.",
            self.product,
            self.next_release()
        )
    }
}

impl Default for Messages {
    fn default() -> Self {
        Self::new("Gradle", "9.0")
    }
}

pub fn please_use_this_method_instead(replacement: &str) -> String {
    format!("Please use the {replacement} method instead.")
}
