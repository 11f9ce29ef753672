// SPDX-License-Identifier: MPL-2.0
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;

use message_service::config::{self, Config};
use message_service::dispatch::UiThread;
use message_service::i18n::I18n;
use message_service::message::compose;
use message_service::{MessageInput, NotificationService};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "\
usage: message_service [--lang L] [--headless] [--config PATH] <info|warning|fatal|ask> TEXT...

Shows a notification dialog. `ask` exits with 0 for yes and 1 for no.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Info,
    Warning,
    Fatal,
    Ask,
}

impl std::str::FromStr for Command {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "info" => Ok(Command::Info),
            "warning" => Ok(Command::Warning),
            "fatal" => Ok(Command::Fatal),
            "ask" => Ok(Command::Ask),
            other => Err(format!("unknown command `{other}`")),
        }
    }
}

struct Args {
    lang: Option<String>,
    headless: bool,
    config_path: Option<PathBuf>,
    command: Command,
    text: Vec<String>,
}

fn parse_args() -> Result<Option<Args>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let lang = args.opt_value_from_str("--lang")?;
    let headless = args.contains("--headless");
    let config_path = args.opt_value_from_str("--config")?;
    let command = args.free_from_str()?;
    let text = args
        .finish()
        .into_iter()
        .map(|arg: OsString| arg.to_string_lossy().into_owned())
        .collect();

    Ok(Some(Args {
        lang,
        headless,
        config_path,
        command,
        text,
    }))
}

fn load_config(path: Option<&PathBuf>) -> Config {
    let loaded = match path {
        Some(path) => config::load_from_path(path),
        None => config::load(),
    };
    loaded.unwrap_or_else(|err| {
        tracing::warn!(%err, "could not read settings; using defaults");
        Config::default()
    })
}

fn run(args: Args) -> message_service::Result<ExitCode> {
    let mut config = load_config(args.config_path.as_ref());
    if args.headless {
        config.headless = Some(true);
    }

    let i18n = I18n::new(args.lang, &config);
    tracing::debug!(locale = %i18n.current_locale(), "locale resolved");

    let service = NotificationService::from_config(&config, &i18n);
    let ui = UiThread::spawn("ui")?;
    let _window = service
        .windows()
        .open(service.phrases().product_name.clone(), ui.handle());

    let inputs = args.text.into_iter().map(MessageInput::from);
    match args.command {
        Command::Info => service.show_info(inputs)?,
        Command::Warning => service.show_warning(inputs)?,
        Command::Fatal => service.show_fatal(inputs)?,
        Command::Ask => {
            let question = compose(inputs, false);
            let yes = service.ask_yes_no(&question, None)?;
            println!("{}", if yes { "yes" } else { "no" });
            return Ok(if yes { ExitCode::SUCCESS } else { ExitCode::from(1) });
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = match parse_args() {
        Ok(Some(args)) => args,
        Ok(None) => {
            println!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{USAGE}");
            return ExitCode::from(2);
        }
    };

    match run(args) {
        Ok(code) => code,
        Err(err) => {
            tracing::error!(%err, "notification failed");
            ExitCode::FAILURE
        }
    }
}
