// SPDX-License-Identifier: MPL-2.0
use dtb_client::app::{self, paths, Flags};
use dtb_client::logging;

const HELP: &str = "\
Decision Tree Builder client

USAGE:
  dtb_client [OPTIONS]

OPTIONS:
  --server-url URL   Build server base URL (default http://localhost:5001)
  --config-dir DIR   Directory holding settings.toml
  --data-dir DIR     Directory holding the saved input
  -h, --help         Print this help
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    logging::init();

    let server_url = read_option(&mut args, "--server-url");
    let config_dir = read_option(&mut args, "--config-dir");
    let data_dir = read_option(&mut args, "--data-dir");

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unexpected arguments");
    }

    paths::init_cli_overrides(data_dir, config_dir);

    app::run(Flags { server_url })
}

fn read_option(args: &mut pico_args::Arguments, name: &'static str) -> Option<String> {
    match args.opt_value_from_str(name) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!("ignoring {name}: {err}");
            None
        }
    }
}
