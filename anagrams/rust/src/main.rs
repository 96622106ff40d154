use std::fs::File;
use std::io::{self, BufRead, BufReader};

use anyhow::{Context, Result};

mod infra;

fn main() -> Result<()> {
    infra::telemetry::init()?;
    let config = infra::config::get();

    let reader: Box<dyn BufRead> = match config.get_file() {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(io::stdin().lock()),
    };

    anagrams::run(reader, io::stdout().lock(), &config.pipeline())
        .context("failed to group anagrams")?;

    Ok(())
}
