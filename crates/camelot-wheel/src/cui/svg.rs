use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use camelot::geometry::WheelLayout;
use camelot::svg::render_wheel_svg;
use camelot::{HighlightCoordinator, Key, WheelView};

/// Render the wheel with `highlight` applied and write it to `output`
/// (stdout when `None` or `-`).
///
/// A missing output directory is not an error: the export is skipped with a
/// warning.
pub fn export_svg(highlight: Option<Key>, output: Option<&Path>) -> Result<()> {
    let coordinator = HighlightCoordinator::new();
    let view = WheelView::new(
        WheelLayout::default(),
        coordinator.reader(),
        coordinator.writer(),
    );
    if let Some(key) = highlight {
        view.on_pointer_enter(key);
    }
    let snapshot = coordinator.snapshot();

    match output {
        Some(path) if path != Path::new("-") => {
            if let Some(dir) = missing_parent(path) {
                log::warn!(
                    "render target directory {} does not exist; skipping svg export",
                    dir.display()
                );
                return Ok(());
            }
            let svg = render_wheel_svg(&view, &snapshot);
            fs::write(path, svg)
                .with_context(|| format!("failed to write svg: {}", path.display()))?;
            log::info!("wrote {}", path.display());
        }
        _ => {
            let svg = render_wheel_svg(&view, &snapshot);
            std::io::stdout()
                .write_all(svg.as_bytes())
                .context("failed to write svg to stdout")?;
        }
    }
    Ok(())
}

/// The parent directory of `path` when it is named but absent.
fn missing_parent(path: &Path) -> Option<&Path> {
    path.parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .filter(|dir| !dir.is_dir())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_file_name_has_no_missing_parent() {
        assert_eq!(missing_parent(Path::new("wheel.svg")), None);
    }

    #[test]
    fn existing_directory_is_accepted() {
        let path = std::env::temp_dir().join("wheel.svg");
        assert_eq!(missing_parent(&path), None);
    }

    #[test]
    fn absent_directory_is_reported() {
        let dir = std::env::temp_dir().join("camelot-wheel-no-such-dir");
        let path = dir.join("wheel.svg");
        assert_eq!(missing_parent(&path), Some(dir.as_path()));
    }

    #[test]
    fn export_into_absent_directory_is_skipped() {
        let path = std::env::temp_dir()
            .join("camelot-wheel-no-such-dir")
            .join("wheel.svg");
        assert!(export_svg(None, Some(&path)).is_ok());
        assert!(!path.exists());
    }
}
