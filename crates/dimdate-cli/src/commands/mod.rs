use dimdate_config::OutputConfig;
use dimdate_export::CsvOptions;

pub mod config;
pub mod dispatch;
pub mod fields;
pub mod generate;
pub mod preview;
pub mod schema;

/// CSV dialect from the `[output]` section.
pub(crate) fn csv_options(output: &OutputConfig) -> CsvOptions {
    CsvOptions {
        separator: output.separator.clone(),
        quote_all: output.quote_all,
    }
}
