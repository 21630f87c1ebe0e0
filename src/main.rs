// SPDX-License-Identifier: MPL-2.0
use panel_reel::app::{self, Flags};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "\
Usage: panel_reel [OPTIONS] <COMIC>

Arguments:
  <COMIC>               comic.toml manifest, comic script (.txt), or output directory

Options:
  --lang <LOCALE>       Interface language (e.g. en-US, fr)
  --config-dir <DIR>    Directory holding settings.toml
  -h, --help            Print this help
";

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{USAGE}");
        return Ok(());
    }

    let lang: Option<String> = args.opt_value_from_str("--lang").unwrap_or_else(|err| {
        tracing::warn!(%err, "ignoring invalid --lang value");
        None
    });
    let config_dir: Option<PathBuf> =
        args.opt_value_from_str("--config-dir").unwrap_or_else(|err| {
            tracing::warn!(%err, "ignoring invalid --config-dir value");
            None
        });

    let Some(comic_path) = args.finish().into_iter().next().map(PathBuf::from) else {
        eprint!("{USAGE}");
        std::process::exit(2);
    };

    app::run(Flags {
        lang,
        comic_path,
        config_dir,
    })
}
