use crate::adapter::{Adapter, AdapterBox};
use crate::configuration::parse_config::parse_configuration_from_kdl;
use crate::configuration::{CONFIGURATION_FILE_NAME, NagConfiguration};
use crate::help::print_help;
use crate::logger::DeprecationLogger;
use crate::preview::preview_deprecation;
use crate::types::FilePath;
use crate::version::get_version;
use deprecation_nag_base::logging::info;
use deprecation_nag_base::result::{Context, HelpError, MietteReportError, NagError, NagResult};
use miette::{GraphicalReportHandler, GraphicalTheme};
use std::fmt::Write;
use std::rc::Rc;

pub struct DeprecationNagRunner {
    adapter: AdapterBox,
    report_handler: GraphicalReportHandler,
}

impl DeprecationNagRunner {
    pub fn new(adapter: impl Adapter) -> Self {
        let theme = if want_color(adapter.env()) {
            GraphicalTheme::unicode()
        } else {
            GraphicalTheme::unicode_nocolor()
        };
        Self {
            adapter: Rc::new(adapter),
            report_handler: GraphicalReportHandler::new_themed(theme),
        }
    }

    pub fn run(&self) {
        info!("Running deprecation-nag ({}):", get_version());
        match self.run_inner() {
            Ok(()) => {}
            Err(err) => {
                if let Err(print_err) = self.print_error(err) {
                    self.adapter
                        .print(&format!("ERROR: Failed to print error: {print_err}\n"));
                }
                self.adapter.exit(1);
            }
        }
    }

    pub fn run_inner(&self) -> NagResult<()> {
        let args = self.adapter.args();
        let Some(first_arg) = args.get(1) else {
            self.print_help();
            return Ok(());
        };
        match first_arg.as_str() {
            "--help" => {
                self.print_help();
            }
            "--version" => {
                self.print_version();
            }
            "--validate" => {
                self.validate_config()?;
            }
            "--show-config" => {
                self.show_config()?;
            }
            "--preview" => {
                self.preview(&args[2..])
                    .context("Failed to preview deprecation")?;
            }
            other => {
                self.adapter.print(&format!("ERROR: Unknown argument: '{other}'\n\nTry --help for more information about supported arguments"));
                self.adapter.exit(1);
            }
        }
        Ok(())
    }

    fn print_error(&self, err: NagError) -> NagResult<()> {
        let mut message = format!("ERROR running deprecation-nag ({}): {err}\n", get_version());
        let mut help_text = String::new();
        if err.source().is_some() {
            message.push_str("  Chain of causes:\n");
            err.chain().skip(1).enumerate().for_each(|(index, err)| {
                message.push_str(&format!("   {index}: {err}\n"));
            });
            message.push('\n');
        }
        for err in err.chain() {
            if let Some(err) = err.downcast_ref::<MietteReportError>() {
                self.report_handler
                    .render_report(&mut message, err.report().as_ref())?;
            } else if let Some(err) = err.downcast_ref::<HelpError>() {
                writeln!(help_text, "Help: {}", err.help_message)?;
            }
        }
        // omit backtrace in tests to prevent noise in test output
        #[cfg(not(test))]
        {
            let backtrace = err.backtrace();
            if let std::backtrace::BacktraceStatus::Captured = backtrace.status() {
                message.push_str("\n  Backtrace:\n");
                message.push_str(&backtrace.to_string());
            }
        }
        // put help text last
        message.push_str(&help_text);
        self.adapter.print(&message);
        Ok(())
    }

    fn print_help(&self) {
        print_help(self.adapter.as_ref());
    }

    fn print_version(&self) {
        self.adapter.print(&format!("{}\n", get_version()))
    }

    fn validate_config(&self) -> NagResult<()> {
        self.load_config().with_context(|| {
            format!("Failed to validate configuration file '{CONFIGURATION_FILE_NAME}'")
        })?;
        self.adapter.print(&format!(
            "Configuration file '{CONFIGURATION_FILE_NAME}' is valid\n"
        ));
        Ok(())
    }

    fn show_config(&self) -> NagResult<()> {
        let config = self.load_config()?;
        let entries = [
            ("product", config.product.clone()),
            ("next-major-version", config.next_major_version.clone()),
            ("warning-mode", config.warning_mode.to_string()),
            ("documentation-base-url", config.documentation.base_url.clone()),
            ("documentation-version", config.documentation.version.clone()),
        ];
        let width = entries.iter().map(|(key, _)| key.len()).max().unwrap_or(0) + 1;
        let mut output = String::new();
        output.push_str("Effective deprecation-nag configuration:\n");
        for (key, value) in entries {
            output.push_str(&format!(
                "\t{:<width$} {}\n",
                format!("{key}:"),
                value,
                width = width
            ));
        }
        self.adapter.print(&output);
        Ok(())
    }

    fn preview(&self, args: &[String]) -> NagResult<()> {
        let config = self.load_config()?;
        let mut logger = DeprecationLogger::new(
            config.message_context(),
            config.warning_mode,
            self.adapter.clone(),
        );
        preview_deprecation(&mut logger, args)?;
        logger.report_summary();
        Ok(())
    }

    fn load_config(&self) -> NagResult<NagConfiguration> {
        load_config(self.adapter.as_ref())
    }
}

/// Loads the configuration file, falling back to defaults when it is absent.
pub fn load_config(adapter: &dyn Adapter) -> NagResult<NagConfiguration> {
    let config_path = FilePath::from(CONFIGURATION_FILE_NAME);
    if !adapter.file_exists(&config_path)? {
        info!("No configuration file '{config_path}' found, using defaults");
        return Ok(NagConfiguration::default());
    }
    let config_string = std::io::read_to_string(adapter.read_file(&config_path)?)?;
    parse_configuration_from_kdl(config_path.as_str(), &config_string)
}

fn want_color(env: Vec<(String, String)>) -> bool {
    let mut want_color = true;
    for (key, value) in env {
        if key == "NO_COLOR" && !value.is_empty() {
            want_color = false;
        }
    }
    want_color
}
