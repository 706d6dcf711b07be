use std::path::Path;

use dinner_core::RunningDinnerConfig;

pub fn init(path: &str, force: bool) -> anyhow::Result<()> {
    let output = Path::new(path).join("dinner.toml");
    if output.exists() && !force {
        anyhow::bail!("{} already exists (use --force to overwrite)", output.display());
    }

    let config = RunningDinnerConfig::scaffold();
    std::fs::write(&output, config.to_toml_string()?)?;
    println!("✓ Generated {}", output.display());

    Ok(())
}
