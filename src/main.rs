// SPDX-License-Identifier: MPL-2.0
use chatore::app::{self, Flags, Screen};

const HELP: &str = "\
chatore - Baba Chatore restaurant showcase

USAGE:
  chatore [OPTIONS]

OPTIONS:
  --screen <NAME>   Start on a specific screen (home, about, gallery, menu, locate)
  --no-welcome      Skip the welcome dialog
  -h, --help        Print this help
";

fn main() -> iced::Result {
    env_logger::init();

    let flags = match parse_args() {
        Ok(flags) => flags,
        Err(message) => {
            eprintln!("{message}");
            eprintln!("{HELP}");
            std::process::exit(2);
        }
    };

    app::run(flags)
}

fn parse_args() -> Result<Flags, String> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let screen = match args
        .opt_value_from_str::<_, String>("--screen")
        .map_err(|e| e.to_string())?
    {
        Some(name) => Some(
            Screen::from_arg(&name).ok_or_else(|| format!("unknown screen: {name}"))?,
        ),
        None => None,
    };

    let skip_welcome = args.contains("--no-welcome");

    let remaining = args.finish();
    if !remaining.is_empty() {
        return Err(format!("unexpected arguments: {:?}", remaining));
    }

    Ok(Flags {
        screen,
        skip_welcome,
    })
}
