//! autolink CLI - link dictionary words in PDF documents

use std::path::{Path, PathBuf};

use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use serde_json::json;

use autolink::{batch, Annotator, Pdftotext, ProcessReport, UrlDictionary};

#[derive(Parser)]
#[command(name = "autolink")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Turn dictionary words in PDF documents into clickable links", long_about = None)]
struct Cli {
    /// Input PDF file, or a directory of PDF files
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// YAML file mapping words to URLs
    #[arg(value_name = "DICTIONARY")]
    dictionary: PathBuf,

    /// Do not draw a border around links
    #[arg(long)]
    no_border: bool,

    /// Space added around each word box, in points
    #[arg(long, value_name = "N", default_value_t = 1.0)]
    padding: f32,

    /// pdftotext executable used to locate words
    #[arg(long, value_name = "PATH", env = "AUTOLINK_PDFTOTEXT", default_value = "pdftotext")]
    pdftotext: PathBuf,

    /// Print a JSON summary instead of status lines
    #[arg(long)]
    json: bool,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let dictionary = UrlDictionary::load(&cli.dictionary)?;
    log::debug!(
        "{} dictionary entries from {}",
        dictionary.len(),
        cli.dictionary.display()
    );
    let annotator = Annotator::new(dictionary)
        .with_border(!cli.no_border)
        .with_padding(cli.padding)
        .with_extractor(Pdftotext::new().with_program(&cli.pdftotext));

    let plan = batch::plan(&cli.input)?;
    plan.prepare()?;

    let pb = ProgressBar::new(plan.jobs.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );
    if cli.json {
        pb.set_draw_target(indicatif::ProgressDrawTarget::hidden());
    }

    let mut reports = Vec::with_capacity(plan.jobs.len());
    for job in &plan.jobs {
        pb.set_message(file_name(&job.input));
        let report = annotator.process(&job.input, &job.output)?;
        if !cli.json {
            print_report(&pb, &report);
        }
        reports.push(report);
        pb.inc(1);
    }
    pb.finish_and_clear();

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary(&reports))?);
    } else {
        let links: usize = reports.iter().map(ProcessReport::link_count).sum();
        println!(
            "{} {} links in {} documents",
            "Done!".green().bold(),
            links,
            reports.len()
        );
    }

    Ok(())
}

fn print_report(pb: &ProgressBar, report: &ProcessReport) {
    pb.println(format!(
        "{} {} ({} links, {} pages)",
        "Written".green(),
        report.output.display(),
        report.link_count(),
        report.page_count()
    ));
    for failure in &report.failures {
        pb.println(format!("  {} {}", "Skipped".yellow(), failure));
    }
}

fn summary(reports: &[ProcessReport]) -> serde_json::Value {
    let documents: Vec<_> = reports
        .iter()
        .map(|report| {
            json!({
                "input": report.input,
                "output": report.output,
                "pages": report.page_count(),
                "links": report.link_count(),
                "links_per_page": report.links_per_page,
                "failed_pages": report
                    .failures
                    .iter()
                    .map(|failure| json!({
                        "page_index": failure.page_index,
                        "error": failure.source.to_string(),
                    }))
                    .collect::<Vec<_>>(),
            })
        })
        .collect();

    json!({ "documents": documents })
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
