// SPDX-License-Identifier: MPL-2.0
use herald::app::{self, Flags};

const HELP: &str = "\
herald - transient notification banner demo

USAGE:
  herald [OPTIONS]

OPTIONS:
  --title TEXT           Banner title
  --subtitle TEXT        Banner subtitle
  --image PATH           Image shown at the banner's leading edge
  --duration SECONDS     How long the banner stays before leaving
  --config-dir PATH      Use a custom configuration directory
  --status-bar-hidden    Lay the banner out without a status bar
  -h, --help             Print this help
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = match parse_flags(&mut args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("herald: {err}");
            eprint!("{HELP}");
            std::process::exit(2);
        }
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        eprintln!("herald: ignoring unexpected arguments: {remaining:?}");
    }

    app::run(flags)
}

fn parse_flags(args: &mut pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    Ok(Flags {
        status_bar_hidden: args.contains("--status-bar-hidden"),
        title: args.opt_value_from_str("--title")?,
        subtitle: args.opt_value_from_str("--subtitle")?,
        image: args.opt_value_from_str("--image")?,
        duration_secs: args.opt_value_from_str("--duration")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    })
}
