use clap::ValueEnum;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    List,
    Csv,
    Json,
}

impl FromStr for OutputFormat {
    type Err = std::convert::Infallible;

    /// Unknown selectors fall back to [`OutputFormat::List`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_ascii_lowercase().as_str() {
            "csv" => OutputFormat::Csv,
            "json" => OutputFormat::Json,
            _ => OutputFormat::List,
        })
    }
}

/// Render a list of extracted items for display or copying.
pub fn format_results<S: AsRef<str>>(items: &[S], format: OutputFormat) -> String {
    match format {
        OutputFormat::Csv => join(items, ", "),
        OutputFormat::Json => {
            let items: Vec<&str> = items.iter().map(AsRef::as_ref).collect();
            serde_json::to_string_pretty(&items).unwrap_or_default()
        }
        OutputFormat::List => join(items, "\n"),
    }
}

fn join<S: AsRef<str>>(items: &[S], sep: &str) -> String {
    items
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(sep)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ITEMS: &[&str] = &["a.com", "b.org"];

    #[test]
    fn csv_joins_with_comma_space() {
        assert_eq!(format_results(ITEMS, OutputFormat::Csv), "a.com, b.org");
    }

    #[test]
    fn list_joins_with_newline() {
        assert_eq!(format_results(ITEMS, OutputFormat::List), "a.com\nb.org");
    }

    #[test]
    fn json_is_two_space_indented() {
        assert_eq!(
            format_results(ITEMS, OutputFormat::Json),
            "[\n  \"a.com\",\n  \"b.org\"\n]"
        );
        assert_eq!(format_results::<&str>(&[], OutputFormat::Json), "[]");
    }

    #[test]
    fn selector_parsing_is_lenient() {
        assert_eq!("CSV".parse::<OutputFormat>(), Ok(OutputFormat::Csv));
        assert_eq!("json".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!("yaml".parse::<OutputFormat>(), Ok(OutputFormat::List));
    }
}
