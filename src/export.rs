//! Clipboard-friendly renderings of extraction results.

use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// One value per line, or `Domain,<d>` / `URL,<u>` rows for combined output
    Csv,
    /// Numbered list under a title and generation date
    Text,
    /// Tab-separated rows for pasting into a spreadsheet
    Sheet,
}

pub fn csv_rows<S: AsRef<str>>(items: &[S]) -> String {
    items
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn csv_all(domains: &[String], urls: &[String]) -> String {
    domains
        .iter()
        .map(|d| format!("Domain,{d}"))
        .chain(urls.iter().map(|u| format!("URL,{u}")))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn text_report<S: AsRef<str>>(items: &[S], title: &str, date: &str) -> String {
    let lines: Vec<String> = items
        .iter()
        .enumerate()
        .map(|(i, item)| format!("{}. {}", i + 1, item.as_ref()))
        .collect();
    format!("{title}\nGenerated: {date}\n\n{}", lines.join("\n"))
}

pub fn spreadsheet(domains: &[String], urls: &[String]) -> String {
    let mut rows = vec!["Type\tValue\tCount".to_string()];
    rows.extend(domains.iter().map(|d| format!("Domain\t{d}\t1")));
    rows.extend(urls.iter().map(|u| format!("URL\t{u}\t1")));
    rows.push("\nSummary".to_string());
    rows.push(format!("Total Domains\t{}", domains.len()));
    rows.push(format!("Total URLs\t{}", urls.len()));
    rows.join("\n")
}
