fn main() -> anyhow::Result<()> {
    let config = playbill_cli::Config::from_env()?;
    playbill_observability::init(&config.log);

    let output = playbill_cli::run(&config).inspect_err(|e| {
        tracing::error!(error = %format!("{e:#}"), "statement generation failed");
    })?;
    println!("{output}");
    Ok(())
}
