// SPDX-License-Identifier: MPL-2.0
use locale_lens::app::{self, Flags};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
locale_lens

USAGE:
  locale_lens [OPTIONS]

OPTIONS:
  --lang <LOCALE>       Start in LOCALE (e.g. en, zh-TW)
  --i18n-dir <DIR>      Load <locale>.toml files from DIR over the built-in ones
  --config-dir <DIR>    Read and write settings.toml in DIR
  -h, --help            Print this help
";

fn parse_flags() -> Result<Flags, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        i18n_dir: args.opt_value_from_str("--i18n-dir")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unexpected arguments");
    }

    Ok(flags)
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let flags = match parse_flags() {
        Ok(flags) => flags,
        Err(error) => {
            eprintln!("error: {error}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    app::run(flags)
}
