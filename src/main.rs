// SPDX-License-Identifier: MPL-2.0
use iced_carousel::app::{self, Flags};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
iced_carousel - page through a remote image listing

USAGE:
  iced_carousel [OPTIONS]

OPTIONS:
  --url <URL>          Listing base URL (default: https://picsum.photos/v2/)
  --page <N>           Listing page, starting at 1
  --limit <N>          Images per page (1-100)
  --lang <LOCALE>      UI language, e.g. en-US or fr
  --config-dir <DIR>   Directory holding settings.toml
  -h, --help           Print this help
";

fn parse_flags() -> Result<Flags, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        url: args.opt_value_from_str("--url")?,
        page: args.opt_value_from_str("--page")?,
        limit: args.opt_value_from_str("--limit")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unexpected arguments");
    }
    Ok(flags)
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("iced_carousel=info")),
        )
        .init();

    let flags = match parse_flags() {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    app::run(flags)
}
