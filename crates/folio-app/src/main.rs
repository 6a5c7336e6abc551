//! termfolio entry point.
//!
//! An interactive bilingual portfolio in the terminal. Serves content from
//! a site directory (`translations/`, `content/`, `posts/`) given as a
//! positional argument or `TERMFOLIO_CONTENT`; without one, an embedded
//! demo site is used. `--fragment <route>` sets the initial route, e.g.
//! `--fragment about` or `--fragment post/hello-world`.

mod app;
mod render;
mod site_setup;

use std::io::{self, BufRead};
use std::path::PathBuf;

use anyhow::Result;

use folio_store::{ContentStore, DirStore};

use app::App;
use render::StdoutSink;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut content_dir: Option<String> = None;
    let mut start = String::new();
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--fragment" {
            start = args.next().unwrap_or_default();
        } else {
            content_dir = Some(arg);
        }
    }

    let store: Box<dyn ContentStore> =
        match content_dir.or_else(|| std::env::var("TERMFOLIO_CONTENT").ok()) {
            Some(dir) => {
                log::info!("serving content from {dir}");
                Box::new(DirStore::new(dir))
            },
            None => {
                log::info!("no content directory given, using the embedded demo site");
                Box::new(site_setup::demo_store())
            },
        };

    let prefs_path = std::env::var("TERMFOLIO_PREFS")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("termfolio-prefs.toml"));

    let mut app = App::new(store, prefs_path);
    let mut sink = StdoutSink;
    app.start(&start, &mut sink);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        if matches!(line.trim(), "exit" | "quit") {
            break;
        }
        app.handle_line(&line, &mut sink);
    }
    Ok(())
}
