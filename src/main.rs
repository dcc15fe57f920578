use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, error, info, warn};
use std::time::Instant;

use tumblr_reader::blog_sources::BlogSources;
use tumblr_reader::cli_args::CommandLineArgs;
use tumblr_reader::common::constants::{PROGRESS_BAR_CHARS, PROGRESS_BAR_TEMPLATE};
use tumblr_reader::settings::{ReaderOptions, Settings};
use tumblr_reader::tumblr_utils::{write_output, Page};
use tumblr_reader::TumblrReader;

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let start_time = Instant::now();
    info!("Tumblr Reader v{} starting up...", env!("CARGO_PKG_VERSION"));

    debug!("Parsing command line arguments...");
    let cli_args = CommandLineArgs::parse_args();

    debug!("Loading application settings...");
    let settings = cli_args.apply_overrides(&Settings::load_or_default(&cli_args.settings)?);

    let sources = BlogSources::new(&settings, &cli_args)?;
    let reader = TumblrReader::from_settings(&settings);

    let mut page = Page::new();
    let (successful_count, failed_count, title) =
        read_all_blogs(&reader, &sources.options, &mut page);

    let content = if settings.full_page {
        page.render_document(&title)
    } else {
        page.render_fragment()
    };
    write_output(&settings.output, &content)?;

    finish_processing(successful_count, failed_count, sources.options.len());
    info!(
        "Processing completed in {:.2} seconds",
        start_time.elapsed().as_secs_f64()
    );

    Ok(())
}

fn create_progress_bar(total: usize) -> ProgressBar {
    let pb = ProgressBar::new(total as u64);
    match ProgressStyle::default_bar().template(PROGRESS_BAR_TEMPLATE) {
        Ok(style) => pb.set_style(style.progress_chars(PROGRESS_BAR_CHARS)),
        Err(e) => warn!("Invalid progress bar template: {}", e),
    }
    pb
}

/// Reads every blog in order. Returns successes, failures and the page title
/// (title of the first blog read).
fn read_all_blogs(
    reader: &TumblrReader,
    all_options: &[ReaderOptions],
    page: &mut Page,
) -> (usize, usize, String) {
    let mut successful_count = 0;
    let mut failed_count = 0;
    let mut title = String::new();
    let total = all_options.len();

    let pb = create_progress_bar(total);
    for (i, options) in all_options.iter().enumerate() {
        pb.set_message(format!("Reading blog {}/{}: {}", i + 1, total, options.blog));

        match reader.read_into(options, page) {
            Ok(blog) => {
                successful_count += 1;
                if title.is_empty() {
                    title = blog.title;
                }
                debug!("Read blog {}/{}: {}", i + 1, total, options.blog);
            }
            Err(e) => {
                failed_count += 1;
                error!(
                    "Failed to read blog {}/{}: {} - Error: {:#}",
                    i + 1,
                    total,
                    options.blog,
                    e
                );
            }
        }

        pb.inc(1);
    }
    pb.finish_with_message(format!(
        "Completed! {} successful, {} failed",
        successful_count, failed_count
    ));

    (successful_count, failed_count, title)
}

fn finish_processing(successful_count: usize, failed_count: usize, total: usize) {
    if failed_count > 0 {
        warn!(
            "Processing completed with {} failed blogs out of {}",
            failed_count, total
        );
    } else {
        info!("All {} blogs read successfully ({} total)", successful_count, total);
    }
}
