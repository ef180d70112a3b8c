use crate::builder::{
    ConfigurationDeprecationType, DeprecateInternalApi, DeprecateInvocation, DeprecateMethod,
    DeprecateNamedParameter, DeprecatePlugin, DeprecateProperty, DeprecateTask, DeprecationKind,
    MessageBuilder, WithReplacement,
};
use crate::help::PREVIEW_KINDS;
use crate::logger::DeprecationLogger;
use deprecation_nag_base::result::{HelpError, NagError, NagResult, bail};

/// Builds the deprecation described by `args` (`<kind> <subject>
/// [replacement...]`) and nags it through `logger`.
pub fn preview_deprecation(logger: &mut DeprecationLogger, args: &[String]) -> NagResult<()> {
    let [kind, subject, replacements @ ..] = args else {
        return Err(NagError::new(HelpError::new(
            "Expected a deprecation kind and a subject",
            "Usage: deprecation-nag --preview <KIND> <SUBJECT> [REPLACEMENT...]",
        )));
    };
    match kind.as_str() {
        "feature" => {
            expect_no_replacement(kind, replacements)?;
            DeprecationLogger::deprecate(subject).nag_user(logger);
        }
        "behaviour" => {
            expect_no_replacement(kind, replacements)?;
            DeprecationLogger::deprecate_behaviour(subject).nag_user(logger);
        }
        "named-parameter" => {
            nag_with_replacement(logger, DeprecateNamedParameter::new(subject), replacements)?
        }
        "property" => nag_with_replacement(logger, DeprecateProperty::new(subject), replacements)?,
        "method" => nag_with_replacement(logger, DeprecateMethod::new(subject), replacements)?,
        "invocation" => {
            nag_with_replacement(logger, DeprecateInvocation::new(subject), replacements)?
        }
        "task" => nag_with_replacement(logger, DeprecateTask::new(subject), replacements)?,
        "plugin" => nag_with_replacement(logger, DeprecatePlugin::new(subject), replacements)?,
        "external-plugin" => {
            let builder = DeprecatePlugin::new(subject);
            match single_replacement(replacements)? {
                Some(replacement) => builder
                    .replace_with_external_plugin(replacement)
                    .nag_user(logger),
                None => builder.nag_user(logger),
            }
        }
        "internal-api" => {
            nag_with_replacement(logger, DeprecateInternalApi::new(subject), replacements)?
        }
        other => {
            let Some(deprecation_type) = other.strip_prefix("configuration:") else {
                return Err(NagError::new(HelpError::new(
                    format!("Unknown deprecation kind: '{other}'"),
                    format!("Valid kinds are: {PREVIEW_KINDS}"),
                )));
            };
            let deprecation_type = deprecation_type.parse::<ConfigurationDeprecationType>()?;
            let builder = DeprecationLogger::deprecate_configuration(subject.as_str())
                .for_type(deprecation_type);
            if replacements.is_empty() {
                builder.nag_user(logger);
            } else {
                builder.replace_with(replacements.to_vec()).nag_user(logger);
            }
        }
    }
    Ok(())
}

fn nag_with_replacement<K: DeprecationKind<Replacement = String>>(
    logger: &mut DeprecationLogger,
    builder: WithReplacement<K>,
    replacements: &[String],
) -> NagResult<()> {
    match single_replacement(replacements)? {
        Some(replacement) => builder.replace_with(replacement).nag_user(logger),
        None => builder.nag_user(logger),
    }
    Ok(())
}

fn single_replacement(replacements: &[String]) -> NagResult<Option<&str>> {
    match replacements {
        [] => Ok(None),
        [replacement] => Ok(Some(replacement.as_str())),
        _ => bail!(
            "Expected at most one replacement, got {}: {}",
            replacements.len(),
            replacements.join(", ")
        ),
    }
}

fn expect_no_replacement(kind: &str, replacements: &[String]) -> NagResult<()> {
    if !replacements.is_empty() {
        bail!("Deprecation kind '{kind}' does not accept a replacement");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::WarningMode;
    use crate::message::UsageType;
    use crate::message_context::MessageContext;
    use crate::mock_adapter::MockAdapter;
    use std::rc::Rc;

    fn preview(args: &[&str]) -> NagResult<DeprecationLogger> {
        let mut logger = DeprecationLogger::new(
            MessageContext::default(),
            WarningMode::None,
            Rc::new(MockAdapter::new()),
        );
        let args: Vec<String> = args.iter().map(|arg| arg.to_string()).collect();
        preview_deprecation(&mut logger, &args)?;
        Ok(logger)
    }

    #[test]
    fn method_with_replacement() -> NagResult<()> {
        let logger = preview(&["method", "oldFoo", "newFoo"])?;
        let message = &logger.messages()[0];
        assert_eq!(message.summary(), "The oldFoo method has been deprecated.");
        assert_eq!(message.advice(), Some("Please use the newFoo method instead."));
        Ok(())
    }

    #[test]
    fn external_plugin() -> NagResult<()> {
        let logger = preview(&["external-plugin", "osgi", "biz.aQute.bnd"])?;
        assert_eq!(
            logger.messages()[0].advice(),
            Some("Consider using the biz.aQute.bnd plugin instead.")
        );
        Ok(())
    }

    #[test]
    fn configuration_with_many_replacements() -> NagResult<()> {
        let logger = preview(&["configuration:consumption", "compile", "api", "implementation"])?;
        let message = &logger.messages()[0];
        assert_eq!(message.usage_type(), UsageType::UserCodeIndirect);
        assert_eq!(
            message.advice(),
            Some("Please use attributes to consume the api or implementation configuration instead.")
        );
        Ok(())
    }

    #[test]
    fn feature_and_behaviour() -> NagResult<()> {
        let logger = preview(&["feature", "The foo option"])?;
        assert_eq!(logger.messages()[0].summary(), "The foo option has been deprecated.");
        let logger = preview(&["behaviour", "Resolving outside of a task."])?;
        assert_eq!(logger.messages()[0].summary(), "Resolving outside of a task.");
        Ok(())
    }

    #[test]
    fn too_many_replacements() {
        let error = preview(&["task", "foo", "bar", "baz"]).expect_err("Expected error");
        assert_eq!(
            error.to_string(),
            "Expected at most one replacement, got 2: bar, baz"
        );
    }

    #[test]
    fn replacement_for_feature_rejected() {
        let error = preview(&["feature", "foo", "bar"]).expect_err("Expected error");
        assert_eq!(
            error.to_string(),
            "Deprecation kind 'feature' does not accept a replacement"
        );
    }

    #[test]
    fn unknown_kind_carries_help() {
        let error = preview(&["widget", "foo"]).expect_err("Expected error");
        let help = error.downcast_ref::<HelpError>().expect("help error");
        assert_eq!(help.message, "Unknown deprecation kind: 'widget'");
        assert!(help.help_message.contains("internal-api"));
    }

    #[test]
    fn unknown_configuration_type() {
        let error = preview(&["configuration:usage", "compile"]).expect_err("Expected error");
        assert_eq!(
            error.to_string(),
            "Unknown configuration deprecation type: 'usage'"
        );
    }

    #[test]
    fn missing_subject() {
        let error = preview(&["method"]).expect_err("Expected error");
        assert_eq!(error.to_string(), "Expected a deprecation kind and a subject");
    }
}
