pub fn run() -> anyhow::Result<()> {
    println!("{}", version_text());
    Ok(())
}

fn version_text() -> String {
    format!(
        "callsight {}\nSynthetic contact-center call data and performance metrics",
        env!("CARGO_PKG_VERSION")
    )
}
