//! Demo: clean a small markdown note with a typo'd encoding label and a
//! two-key context. The bad label is reported as a diagnostic and the file is
//! cleaned anyway.

use std::error::Error;
use std::fs;

use mdclean::{Cleaner, CleanerConfig, DetectionBudget, RequestedEncoding, TemplateContext};

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt().init();

    let dir = tempfile::tempdir()?;
    let path = dir.path().join("test.md");
    fs::write(
        &path,
        "# Begrüßung\n\nLocal: {new_test}\nGlobal: {global_test}\n",
    )?;

    let cleaner = Cleaner::with_config(CleanerConfig {
        detection_bytes: DetectionBudget::Bytes(500),
        encoding: RequestedEncoding::named("utf-888"),
        context: TemplateContext::new()
            .with_value("new_test", "Local Test here")
            .with_value("global_test", "Global Test here"),
    });

    println!("{}", cleaner.clean(&path)?);
    Ok(())
}
