use clap::Parser;
use daily_todo::core::clock::SystemClock;
use daily_todo::core::config::{self, ResolvedConfig};
use daily_todo::core::launch::{self, Launch};
use daily_todo::core::store::TodoStore;
use daily_todo::tui;
use simplelog::{ConfigBuilder, WriteLogger};
use std::ffi::OsString;
use std::fs::{self, File};

#[derive(Parser)]
#[command(
    name = "daily-todo",
    version,
    about = "Once-a-day prompt for today's tasks",
    long_about = "Run without flags (e.g. at login) to be asked for today's tasks once per day; \
                  does nothing if today's list already exists.\n\
                  Run with --view to show and edit today's list at any time."
)]
struct Args {
    /// Show the dialog even if today's list already exists
    #[arg(short, long)]
    view: bool,
}

impl Args {
    /// Parse the command line without ever refusing to run.
    ///
    /// `--help` and `--version` behave as usual. Anything unrecognized is
    /// returned as an error to log, and `--view` / `-v` is still honored
    /// wherever it appears.
    fn parse_lenient<I, T>(args: I) -> (Self, Option<clap::Error>)
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        match Self::try_parse_from(args.iter()) {
            Ok(parsed) => (parsed, None),
            Err(e) if !e.use_stderr() => e.exit(),
            Err(e) => {
                let view = args.iter().skip(1).any(|a| a == "--view" || a == "-v");
                (Self { view }, Some(e))
            }
        }
    }
}

fn init_logging(config: &ResolvedConfig) {
    if config.log_level == log::LevelFilter::Off {
        return;
    }

    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Some(parent) = config.log_file.parent() {
        let _ = fs::create_dir_all(parent);
    }
    if let Ok(log_file) = File::options().create(true).append(true).open(&config.log_file) {
        let _ = WriteLogger::init(config.log_level, log_config, log_file);
    }
}

fn main() -> std::io::Result<()> {
    let (args, arg_error) = Args::parse_lenient(std::env::args_os());

    let loaded = config::load_config();
    let resolved = match &loaded {
        Ok(file_config) => config::resolve(file_config),
        Err(_) => config::resolve(&Default::default()),
    };

    init_logging(&resolved);
    if let Some(e) = &arg_error {
        log::warn!("Ignoring unrecognized arguments: {}", e.kind());
    }
    if let Err(e) = &loaded {
        log::warn!("Ignoring {}: {}", config::config_path().display(), e);
    }

    let store = TodoStore::new(resolved.data_path.clone(), SystemClock);
    let todos = store.load();

    match launch::decide(args.view, &todos) {
        Launch::Skip => {
            log::info!("{} todo(s) already saved today, not prompting", todos.len());
            Ok(())
        }
        Launch::Show => {
            log::info!("Showing dialog (view={})", args.view);
            tui::run(&store, args.view).map(|_| ())
        }
    }
}
