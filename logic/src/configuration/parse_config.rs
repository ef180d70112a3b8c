use crate::configuration::NagConfiguration;
use crate::logger::WarningMode;
use kdl::{KdlDocument, KdlNode};
use miette::{GraphicalReportHandler, GraphicalTheme, LabeledSpan, miette};
use deprecation_nag_base::logging::info;
use deprecation_nag_base::result::{Context, MietteReportError, NagError, NagResult, err};
use tracing::info_span;

pub fn parse_configuration_from_kdl(filename: &str, kdl: &str) -> NagResult<NagConfiguration> {
    info!("Parsing configuration file '{filename}'");
    let _span = info_span!("Parse configuration from KDL", filename).entered();
    (|| -> NagResult<NagConfiguration> {
        let doc = parse_document(filename, kdl)?;
        let mut configuration = NagConfiguration::default();
        for node in doc.nodes() {
            match node.name().value() {
                "product" => {
                    configuration.product = string_argument(node)?.to_string();
                }
                "next-major-version" => {
                    configuration.next_major_version = string_argument(node)?.to_string();
                }
                "warning-mode" => {
                    configuration.warning_mode = string_argument(node)?.parse::<WarningMode>()?;
                }
                "documentation" => {
                    for child in children(node) {
                        match child.name().value() {
                            "base-url" => {
                                configuration.documentation.base_url =
                                    string_argument(child)?.to_string();
                            }
                            "version" => {
                                configuration.documentation.version =
                                    string_argument(child)?.to_string();
                            }
                            _ => {
                                return Err(unknown_item(
                                    kdl,
                                    child,
                                    "Valid documentation items are: 'base-url', 'version'",
                                ));
                            }
                        }
                    }
                }
                _ => {
                    return Err(unknown_item(
                        kdl,
                        node,
                        "Valid top level items are: 'product', 'next-major-version', 'warning-mode', 'documentation'",
                    ));
                }
            }
        }
        Ok(configuration)
    })()
    .with_context(|| format!("Failed to parse configuration file '{filename}'"))
}

fn parse_document(filename: &str, kdl: &str) -> NagResult<KdlDocument> {
    match kdl.parse::<KdlDocument>() {
        Ok(doc) => Ok(doc),
        Err(err) => {
            let handler = GraphicalReportHandler::new_themed(GraphicalTheme::unicode_nocolor());
            let mut message = String::new();
            for diag in &err.diagnostics {
                handler.render_report(&mut message, diag)?;
            }
            Err(err).context(format!("Failed to parse KDL file {filename}:\n{message}"))
        }
    }
}

fn string_argument(node: &KdlNode) -> NagResult<&str> {
    let name = node.name().value();
    node.entry(0)
        .ok_or_else(|| err!("Expected a value for '{name}'"))?
        .value()
        .as_string()
        .ok_or_else(|| err!("Expected '{name}' to be a string"))
}

fn unknown_item(kdl: &str, node: &KdlNode, help: &str) -> NagError {
    let report = miette!(
        labels = vec![LabeledSpan::at(node.span(), "unknown")],
        help = help.to_string(),
        "Unknown configuration item: '{}'",
        node.name().value()
    )
    .with_source_code(kdl.to_string());
    NagError::new(MietteReportError::from(report))
}

fn children(node: &KdlNode) -> impl Iterator<Item = &KdlNode> + '_ {
    node.children().map(|doc| doc.nodes()).into_iter().flatten()
}

#[cfg(test)]
mod tests {
    use crate::configuration::CONFIGURATION_FILE_NAME;
    use crate::configuration::parse_config::parse_configuration_from_kdl;
    use expect_test::{Expect, expect};
    use deprecation_nag_base::result::NagResult;

    fn test_parse(kdl: &str, expected: Expect) -> NagResult<()> {
        let config = parse_configuration_from_kdl(CONFIGURATION_FILE_NAME, kdl)?;
        expected.assert_debug_eq(&config);
        Ok(())
    }

    macro_rules! test_parse(
        ($name:ident, $kdl:expr, $expected:expr) => {
            #[test]
            fn $name() -> NagResult<()> {
                test_parse($kdl, $expected)
            }
            });

    test_parse!(
        empty,
        "",
        expect![[r#"
            NagConfiguration {
                product: "Gradle",
                next_major_version: "9.0",
                warning_mode: Summary,
                documentation: DocumentationLinks {
                    base_url: "https://docs.gradle.org",
                    version: "current",
                },
            }
        "#]]
    );

    test_parse!(
        full,
        r#"
            product "Gadget"
            next-major-version "3.0"
            warning-mode "all"
            documentation {
                base-url "https://docs.example.com"
                version "2.7"
            }
        "#,
        expect![[r#"
            NagConfiguration {
                product: "Gadget",
                next_major_version: "3.0",
                warning_mode: All,
                documentation: DocumentationLinks {
                    base_url: "https://docs.example.com",
                    version: "2.7",
                },
            }
        "#]]
    );

    test_parse!(
        partial_documentation,
        r#"
            warning-mode "none"
            documentation {
                version "8.5"
            }
        "#,
        expect![[r#"
            NagConfiguration {
                product: "Gradle",
                next_major_version: "9.0",
                warning_mode: None,
                documentation: DocumentationLinks {
                    base_url: "https://docs.gradle.org",
                    version: "8.5",
                },
            }
        "#]]
    );

    fn test_parse_fail(kdl: &str, expected: Expect) -> NagResult<()> {
        let error = parse_configuration_from_kdl(CONFIGURATION_FILE_NAME, kdl)
            .expect_err("Expected error");
        expected.assert_eq(&format!("{error:#}"));
        Ok(())
    }

    macro_rules! test_parse_fail(
        ($name:ident, $kdl:expr, $expected:expr) => {
            #[test]
            fn $name() -> NagResult<()> {
                test_parse_fail($kdl, $expected)
            }
            });

    test_parse_fail!(
        fail_unknown_item,
        r#"tools "lsd""#,
        expect!["Failed to parse configuration file '.deprecation-nag.kdl': Unknown configuration item: 'tools'"]
    );

    test_parse_fail!(
        fail_unknown_documentation_item,
        r#"documentation {
            url "https://docs.example.com"
        }"#,
        expect!["Failed to parse configuration file '.deprecation-nag.kdl': Unknown configuration item: 'url'"]
    );

    test_parse_fail!(
        fail_missing_value,
        "product",
        expect!["Failed to parse configuration file '.deprecation-nag.kdl': Expected a value for 'product'"]
    );

    test_parse_fail!(
        fail_not_a_string,
        "next-major-version 9",
        expect!["Failed to parse configuration file '.deprecation-nag.kdl': Expected 'next-major-version' to be a string"]
    );

    test_parse_fail!(
        fail_unknown_warning_mode,
        r#"warning-mode "fail""#,
        expect!["Failed to parse configuration file '.deprecation-nag.kdl': Unknown warning mode: 'fail' (expected one of 'all', 'summary', 'none')"]
    );

    #[test]
    fn fail_invalid_kdl() {
        let error = parse_configuration_from_kdl(CONFIGURATION_FILE_NAME, r#""open quote only"#)
            .expect_err("Expected error");
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '.deprecation-nag.kdl'"
        );
        assert!(
            format!("{error:#}").contains("Failed to parse KDL file .deprecation-nag.kdl:")
        );
    }
}
