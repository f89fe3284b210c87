//! End-to-end demo: fetch a company website and stream a brochure for the
//! chosen audience to stdout.
//!
//! Requires `OPENAI_API_KEY` in the environment.

use brochure_gen::{
    log_brochure_card, log_error_card, setup_logging, Audience, BrochureService, LogConfig,
    StdoutSink,
};
use clap::Parser;

/// Stream a marketing brochure generated from a company's public website.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Company website URL.
    url: String,
    /// Intended reader: client, investor or recruit.
    #[arg(short, long, default_value = "client")]
    audience: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logging(LogConfig {
        log_level: "warn".into(),
        file_output: false,
        ..LogConfig::default()
    });

    let args = Args::parse();
    let audience = Audience::parse(&args.audience)?;

    let service = BrochureService::from_env()?;
    let mut sink = StdoutSink;

    match service.generate(&args.url, audience, &mut sink).await {
        Ok(brochure) => {
            println!();
            log_brochure_card(&args.url, audience, &brochure);
            Ok(())
        }
        Err(e) => {
            log_error_card(&args.url, &e);
            Err(e.into())
        }
    }
}
