use color_eyre::eyre::{Result, WrapErr};

/// Copy text to the system clipboard.
///
/// On some platforms or in headless environments clipboard initialization
/// may fail; callers treat errors as non-fatal.
pub fn copy_text(text: &str) -> Result<()> {
    let mut clipboard = arboard::Clipboard::new().wrap_err("failed to access system clipboard")?;
    clipboard
        .set_text(text.to_owned())
        .wrap_err("failed to copy text to clipboard")?;
    Ok(())
}
