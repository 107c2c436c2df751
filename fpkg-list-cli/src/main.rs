//! fpkg-list CLI
//!
//! Downloads the SuperPSX post sitemaps and writes the PS4 FPKG games
//! list as a JSON catalog.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use fpkg_list_core::{ScrapeOptions, ScrapeProgress, SitemapClient, scrape_catalog};

#[derive(Parser)]
#[command(name = "fpkg-list")]
#[command(about = "Build the SuperPSX PS4 FPKG games list as a JSON catalog", long_about = None)]
struct Cli {
    /// Output path for the JSON catalog
    #[arg(value_name = "OUTPUT", default_value = "ps4_games_list.json")]
    output: PathBuf,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if !run_scrape(&cli.output) {
        std::process::exit(1);
    }
}

fn run_scrape(output: &Path) -> bool {
    println!(
        "{}",
        "SuperPSX PS4 FPKG games list".if_supports_color(Stdout, |t| t.bold()),
    );
    println!(
        "Started {}",
        chrono::Local::now()
            .format("%Y-%m-%d %H:%M:%S")
            .if_supports_color(Stdout, |t| t.dimmed()),
    );
    println!();

    let client = match SitemapClient::new() {
        Ok(c) => c,
        Err(e) => {
            eprintln!(
                "{} Failed to build HTTP client: {}",
                "\u{2718}".if_supports_color(Stdout, |t| t.red()),
                e,
            );
            return false;
        }
    };

    let options = ScrapeOptions::new();

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("  {spinner:.cyan} {msg}")
            .unwrap()
            .tick_chars("/-\\|"),
    );
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let progress_callback = |progress: ScrapeProgress| match progress {
        ScrapeProgress::FetchingSitemap {
            ref url,
            index,
            total,
        } => {
            pb.set_message(format!("[{}/{}] Fetching {}", index + 1, total, url));
        }
        ScrapeProgress::SitemapLoaded { ref url, found } => {
            pb.println(format!(
                "  {} {} game URLs in {}",
                "\u{2714}".if_supports_color(Stdout, |t| t.green()),
                found,
                url,
            ));
        }
        ScrapeProgress::SitemapFailed {
            ref url,
            ref message,
        } => {
            pb.println(format!(
                "  {} Skipped {}: {}",
                "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
                url,
                message,
            ));
        }
        ScrapeProgress::Classifying { unique_urls } => {
            pb.println(format!(
                "  {} {} unique game URLs in total",
                "\u{2714}".if_supports_color(Stdout, |t| t.green()),
                unique_urls,
            ));
            pb.set_message(format!("Classifying {unique_urls} URLs"));
        }
        ScrapeProgress::Done => {}
    };

    let report = match scrape_catalog(&client, &options, &progress_callback) {
        Ok(report) => {
            pb.finish_and_clear();
            report
        }
        Err(e) => {
            pb.finish_and_clear();
            eprintln!(
                "{} {}",
                "\u{2718}".if_supports_color(Stdout, |t| t.red()),
                e,
            );
            return false;
        }
    };

    if let Err(e) = report.catalog.write_to_file(output) {
        eprintln!(
            "{} Failed to write {}: {}",
            "\u{2718}".if_supports_color(Stdout, |t| t.red()),
            output.display(),
            e,
        );
        return false;
    }

    println!();
    println!("{}", "Summary:".if_supports_color(Stdout, |t| t.bold()));
    println!(
        "  {} {} games cataloged ({} URLs filtered out)",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        report.catalog.total_games,
        report.filtered_out,
    );
    if report.failed_sources() > 0 {
        println!(
            "  {} {} of {} sitemaps failed",
            "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
            report.failed_sources(),
            report.sources.len(),
        );
    }
    if report.below_expected(options.expected_min_games) {
        println!(
            "  {} Only {} games found (expected at least {}); the site layout may have changed",
            "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
            report.catalog.total_games,
            options.expected_min_games,
        );
    }
    let size = fs::metadata(output).map(|m| m.len()).unwrap_or(0);
    println!(
        "  {} Saved to {} ({} bytes)",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        output.display(),
        size,
    );
    println!(
        "  Method: {}",
        report
            .catalog
            .extraction_method
            .if_supports_color(Stdout, |t| t.dimmed()),
    );
    println!(
        "  Source: {}",
        report.catalog.source.if_supports_color(Stdout, |t| t.dimmed()),
    );

    true
}
