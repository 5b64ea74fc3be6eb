use clap::Parser;
use edl_scan::cli::CliArgs;
use edl_scan::{
    parse_targets, print_match_summary, resolve_feed_urls, scan_feeds, Config, FeedCache,
    HttpTransport, ScanSummary, Transport,
};
use log::LevelFilter;
use log4rs::append::console::ConsoleAppender;
use log4rs::config::{Appender, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    // Do as little as possible in main.rs as it can't contain any tests
    let args = CliArgs::parse();
    dotenv::dotenv().ok();
    init_logging(args.verbose);

    let config = Config::from_args(&args);

    let targets = match parse_targets(&args.subnets) {
        Ok(targets) => targets,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };

    let transport: Arc<dyn Transport> = match HttpTransport::new(config.fetch_timeout) {
        Ok(transport) => Arc::new(transport),
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };

    let cache = match FeedCache::new(&config, transport.clone()) {
        Ok(cache) => cache,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };

    log::debug!("fetching the feed index from {}", config.index_url);
    let index_page = match transport.fetch_text(&config.index_url).await {
        Ok(page) => page,
        Err(e) => {
            log::warn!("failed to fetch the feed index: {e}");
            String::new()
        }
    };

    let urls = resolve_feed_urls(&index_page, config.ipv4_only);
    if config.ipv4_only {
        log::info!("found {} IPv4 feeds to scan", urls.len());
    } else {
        log::info!("found {} feeds to scan", urls.len());
    }

    let results = scan_feeds(&config, &cache, &urls, &targets).await;

    let summary = ScanSummary {
        feed_count: urls.len(),
        target_count: targets.len(),
        verbose: config.verbose,
    };
    print_match_summary(&results, &summary);
}

/// Console logging; verbose mode lowers the root level to Debug.
fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let stdout = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new("{h([{l}])} {m}{n}")))
        .build();
    let log_config = log4rs::config::Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .build(Root::builder().appender("stdout").build(level))
        .expect("Error building log4rs config");
    log4rs::init_config(log_config).expect("Error initializing log4rs");
}
