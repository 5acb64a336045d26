use anyhow::Result;
use clap::ValueEnum;
use colored::Colorize;
use comfy_table::Table;

use employee_search::{Employee, SearchResult};

/// Output format options for CLI commands
#[derive(Clone, Debug, ValueEnum, Default, PartialEq)]
pub enum OutputFormat {
    /// Formatted table output (default)
    #[default]
    Table,
    /// JSON output for scripting
    Json,
}

/// Global CLI options that affect output and behavior
#[derive(Clone, Debug, Default)]
pub struct GlobalOptions {
    pub output_format: OutputFormat,
    pub quiet: bool,
    pub no_color: bool,
}

/// Output manager handles formatting and display
pub struct OutputManager {
    options: GlobalOptions,
}

impl OutputManager {
    pub fn new(options: GlobalOptions) -> Self {
        Self { options }
    }

    pub fn success(&self, message: &str) {
        if !self.options.quiet {
            println!("{}", self.paint(message, |text| text.green().to_string()));
        }
    }

    pub fn heading(&self, message: &str) {
        if !self.options.quiet {
            println!("{}", self.paint(message, |text| text.bold().to_string()));
        }
    }

    /// Render search hits in the configured format.
    pub fn hits(&self, result: &SearchResult<Employee>) -> Result<()> {
        if self.options.quiet {
            return Ok(());
        }

        match self.options.output_format {
            OutputFormat::Json => {
                let payload = serde_json::json!({
                    "total": result.total,
                    "items": result.items,
                });
                println!("{}", serde_json::to_string_pretty(&payload)?);
            }
            OutputFormat::Table => {
                let mut table = Table::new();
                table.set_header([
                    "no",
                    "age",
                    "gender",
                    "salary",
                    "monthly_expenditure",
                    "occupation",
                    "healthy_lifestyle",
                ]);
                for employee in &result.items {
                    table.add_row([
                        employee.no.to_string(),
                        display_opt(&employee.age),
                        display_opt(&employee.gender),
                        display_opt(&employee.salary),
                        display_opt(&employee.monthly_expenditure),
                        display_opt(&employee.occupation),
                        display_opt(&employee.healthy_lifestyle),
                    ]);
                }
                println!("{table}");
                println!("{} of {} hits", result.items.len(), result.total);
            }
        }
        Ok(())
    }

    fn paint(&self, text: &str, style: impl Fn(&str) -> String) -> String {
        if self.options.no_color {
            text.to_string()
        } else {
            style(text)
        }
    }
}

fn display_opt<T: std::fmt::Display>(value: &Option<T>) -> String {
    value.as_ref().map(|v| v.to_string()).unwrap_or_default()
}
