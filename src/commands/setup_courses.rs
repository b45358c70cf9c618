use anyhow::{Context, Result};
use ff::{courses, Config, SystemRunner};

pub fn execute() -> Result<()> {
    let config = Config::load()?;

    courses::setup(&config, &SystemRunner).context("Failed to set up course materials")?;

    println!(
        "✅ Course materials ready in {}",
        courses::courses_dir(&config).display()
    );
    Ok(())
}
