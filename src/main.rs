// SPDX-License-Identifier: MPL-2.0
use citysync::app::{self, paths, Flags};
use citysync::logging;

const HELP: &str = "\
CitySync - your smart citizen companion

USAGE:
  citysync [OPTIONS]

OPTIONS:
  -h, --help               Print this help and exit
      --lang <ID>          Interface language (e.g. en-US)
      --config-dir <DIR>   Directory holding settings.toml
      --session-dir <DIR>  Directory holding the session store
      --section <ID>       Open a section: home, report, community, map
  -v, --verbose            Log at debug level (CITYSYNC_LOG overrides)
";

fn parse_args() -> Result<Option<(Flags, bool)>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let verbose = args.contains(["-v", "--verbose"]);
    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        session_dir: args.opt_value_from_str("--session-dir")?,
        section: args.opt_value_from_str("--section")?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        eprintln!("warning: unused arguments left: {rest:?}");
    }

    Ok(Some((flags, verbose)))
}

fn main() -> iced::Result {
    let (flags, verbose) = match parse_args() {
        Ok(Some(parsed)) => parsed,
        Ok(None) => {
            print!("{HELP}");
            return Ok(());
        }
        Err(error) => {
            eprintln!("error: {error}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    logging::init(verbose);
    paths::init_cli_overrides(flags.config_dir.clone(), flags.session_dir.clone());

    app::run(flags)
}
