mod actions;
mod blog_post;
mod logger;
mod reducers;
mod walkthrough;

use anyhow::Result;
use flux_config::TutorialConfig;
use std::io::{self, Write};

fn main() -> Result<()> {
    let loaded = TutorialConfig::load();
    if let Some(log_file) = logger::init(&loaded.config)? {
        eprintln!("Logging to {}", log_file.display());
    }

    log::info!("Starting flux-tutorial");
    loaded.report();
    let config = loaded.config;

    let blog_post = match &config.blog_post {
        Some(path) => blog_post::load(path)?,
        None => blog_post::sample(),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    walkthrough::run(&mut out, &blog_post)?;
    out.flush()?;

    log::info!("Exiting flux-tutorial");
    Ok(())
}
