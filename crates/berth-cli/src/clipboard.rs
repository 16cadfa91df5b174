//! System clipboard integration, compiled in by default.
//!
//! Builds with `--no-default-features` drop the `arboard` dependency for
//! headless hosts; `copy` then reports that support is missing.

#[cfg(feature = "clipboard")]
pub fn copy(text: &str) -> anyhow::Result<()> {
    let mut clipboard = arboard::Clipboard::new()?;
    clipboard.set_text(text.to_string())?;
    Ok(())
}

#[cfg(not(feature = "clipboard"))]
pub fn copy(_text: &str) -> anyhow::Result<()> {
    anyhow::bail!("Clipboard support is not compiled in (rebuild with the `clipboard` feature)")
}
