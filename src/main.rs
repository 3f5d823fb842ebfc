// SPDX-License-Identifier: MPL-2.0
use tubegrid::app::{self, Flags};

const HELP: &str = "\
TubeGrid - browse videos with hover previews

USAGE:
  tubegrid [OPTIONS]

OPTIONS:
  -h, --help              Print this help
  --lang <id>             Interface language (e.g. en-US, fr, es)
  --config-dir <dir>      Directory holding settings.toml
  --catalog <file>        Catalogue file replacing the built-in one

ENVIRONMENT:
  TUBEGRID_CONFIG_DIR     Default for --config-dir
  RUST_LOG                Log filter (e.g. tubegrid=debug)
";

fn parse_flags(args: &mut pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    Ok(Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        catalog: args.opt_value_from_str("--catalog")?,
    })
}

fn main() -> iced::Result {
    env_logger::init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = match parse_flags(&mut args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        log::warn!("Ignoring unexpected arguments: {remaining:?}");
    }

    app::run(flags)
}
