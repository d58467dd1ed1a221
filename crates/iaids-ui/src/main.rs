#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! iaids widget gallery wasm entry point and native stub fallback.

#[cfg(target_arch = "wasm32")]
fn main() -> Result<(), std::io::Error> {
    iaids_ui::run_app();
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), std::io::Error> {
    let mut stderr = std::io::stderr().lock();
    write_native_notice(&mut stderr)
}

/// Explain where the gallery runs and print the default widget markup names,
/// which stylesheets target.
#[cfg(not(target_arch = "wasm32"))]
fn write_native_notice(out: &mut impl std::io::Write) -> Result<(), std::io::Error> {
    let markup = serde_json::to_string_pretty(&iaids_ui::WidgetConfig::default())
        .map_err(std::io::Error::other)?;
    writeln!(
        out,
        "The iaids-ui gallery renders in the browser; build it with `trunk build` or `cargo build --target wasm32-unknown-unknown`."
    )?;
    writeln!(out, "Default multi-select markup:")?;
    writeln!(out, "{markup}")
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn native_main_writes_notice() -> std::io::Result<()> {
        main()
    }

    #[test]
    fn notice_lists_default_markup_names() -> std::io::Result<()> {
        let mut out = Vec::new();
        write_native_notice(&mut out)?;
        let text = String::from_utf8(out).map_err(std::io::Error::other)?;
        assert!(text.contains("wasm32-unknown-unknown"));
        assert!(text.contains("\"tags_class\": \"selected-values\""));
        assert!(text.contains("\"control_element\": \"selectmenu\""));
        Ok(())
    }
}
