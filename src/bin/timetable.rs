use lib::timetable::helpers::get_config;
use lib::timetable::models;
use lib::timetable::notifier::ConsoleNotifier;
use lib::timetable::run_tool::run;

use std::{error::Error, process::ExitCode};

use clap::Parser;
use log::{error, info};
use models::Args;

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn Error>> {
    /* Setup logging */
    env_logger::builder()
        .target(env_logger::Target::Stdout)
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    /* Get all the required resources */
    let args = Args::parse();
    let config = get_config(&args)?;
    let mut http_client = reqwest::Client::builder();
    if let Some(timeout) = config.request_timeout() {
        http_client = http_client.timeout(timeout);
    }
    let http_client = http_client.build()?;
    let notifier = ConsoleNotifier {
        assume_yes: args.assume_yes(),
    };

    match run(&http_client, &notifier, &config, &args.command).await {
        Ok(pages) => {
            info!("Rendered {} page(s)", pages.len());
            for page in pages {
                println!("{}\n", page.display(args.format));
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            /* the notifier already told the user */
            error!("Command failed: {}", err);
            Ok(ExitCode::FAILURE)
        }
    }
}
