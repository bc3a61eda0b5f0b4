//! Seam - a minimal gap-buffer text editor
//! Main entry point

use anyhow::Context;
use seam::constants::defaults;
use seam::editor::Editor;
use seam::term::crossterm::CrosstermBackend;
use std::path::PathBuf;

fn main() {
    let mut args = std::env::args_os().skip(1);
    let path = args.next().map(PathBuf::from);

    if args.next().is_some() {
        eprintln!("usage: seam [file]");
        std::process::exit(1);
    }

    if let Err(e) = run(path) {
        eprintln!("seam: {e:#}");
        std::process::exit(1);
    }
}

fn run(path: Option<PathBuf>) -> anyhow::Result<()> {
    let backend = CrosstermBackend::new()
        .map_err(anyhow::Error::msg)
        .context("failed to create terminal backend")?;

    let mut editor = Editor::new(backend, defaults::BUFFER_CAPACITY, path)
        .context("failed to initialize editor")?;

    editor.run().context("editor error")?;
    Ok(())
}
