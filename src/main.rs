use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use std::io::{self, Read};
use tracing::error;

use domain_extractor::api::{self, ApiResponse};
use domain_extractor::args::Show;
use domain_extractor::export::{self, ExportFormat};
use domain_extractor::report::{render_report, ReportSettings};
use domain_extractor::{
    batch, config, extract_all, format_results, utils, Args, ExtractionResult,
};

fn main() -> Result<()> {
    let args = Args::parse();
    utils::setup_logging(args.verbose);
    utils::validate_args(&args)?;

    match run(&args) {
        Ok(()) => Ok(()),
        Err(e) => {
            error!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}

fn run(args: &Args) -> Result<()> {
    if args.api_docs {
        return print_response(&api::handle_get());
    }
    if args.request {
        let body = read_stdin()?;
        return print_response(&api::handle_post(&body));
    }

    let options = config::resolve_options(args)?;

    if args.inputs.len() > 1 {
        let results = batch::extract_files(&args.inputs, &options, args.workers)?;
        for (i, file) in results.iter().enumerate() {
            if i > 0 {
                println!();
            }
            println!("== {} ==", file.path.display());
            print_result(&file.result, args)?;
        }
        return Ok(());
    }

    let text = match (&args.text, args.inputs.first()) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {:?}", path))?,
        (None, None) => read_stdin()?,
    };

    let result = extract_all(&text, &options);
    print_result(&result, args)
}

fn read_stdin() -> Result<String> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .context("Failed to read stdin")?;
    Ok(buf)
}

fn print_response(response: &ApiResponse) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(response)?);
    Ok(())
}

fn print_result(result: &ExtractionResult, args: &Args) -> Result<()> {
    if args.json {
        println!("{}", serde_json::to_string_pretty(result)?);
        return Ok(());
    }

    if let Some(format) = args.export {
        println!("{}", render_export(result, args.show, format));
        return Ok(());
    }

    match args.show {
        Show::Domains => println!("{}", format_results(&result.domains, args.format)),
        Show::Urls => println!("{}", format_results(&result.urls, args.format)),
        Show::All => {
            let combined: Vec<&str> = result
                .domains
                .iter()
                .chain(&result.urls)
                .map(String::as_str)
                .collect();
            println!("{}", format_results(&combined, args.format));
        }
        Show::Report => {
            let settings = ReportSettings {
                top: args.top,
                redact: args.redact,
                format: args.format,
            };
            print!("{}", render_report(result, &settings));
        }
    }
    Ok(())
}

fn render_export(result: &ExtractionResult, show: Show, format: ExportFormat) -> String {
    let none: &[String] = &[];
    let (domains, urls, title) = match show {
        Show::Domains => (result.domains.as_slice(), none, "Extracted Domains"),
        Show::Urls => (none, result.urls.as_slice(), "Extracted URLs"),
        Show::All | Show::Report => (
            result.domains.as_slice(),
            result.urls.as_slice(),
            "All Extracted Results",
        ),
    };

    match (format, show) {
        (ExportFormat::Csv, Show::Domains) => export::csv_rows(domains),
        (ExportFormat::Csv, Show::Urls) => export::csv_rows(urls),
        (ExportFormat::Csv, _) => export::csv_all(domains, urls),
        (ExportFormat::Text, _) => {
            let items: Vec<&str> = domains.iter().chain(urls).map(String::as_str).collect();
            let date = Local::now().format("%-m/%-d/%Y").to_string();
            export::text_report(&items, title, &date)
        }
        (ExportFormat::Sheet, _) => export::spreadsheet(domains, urls),
    }
}
