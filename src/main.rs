use clap::Parser;
use irdash::core::card::CardKind;
use irdash::core::config::{self, CliOverrides, DashConfig};
use irdash::core::workflow::StubExecutor;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "irdash", about = "Investor Relations action dashboard")]
struct Args {
    /// Name shown in the welcome line
    #[arg(short, long)]
    user: Option<String>,

    /// Start with this card expanded
    #[arg(short, long, value_enum)]
    open: Option<CardKind>,

    /// Log file path
    #[arg(long, default_value = "irdash.log")]
    log_file: PathBuf,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long)]
    log_level: Option<LevelFilter>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // The config file can set the log level, so it is read before the
    // logger exists. A load error is reported once logging is up.
    let loaded = config::load_config();
    let (file_config, load_error) = match loaded {
        Ok(c) => (c, None),
        Err(e) => (DashConfig::default(), Some(e)),
    };

    // The terminal owns stdout, so logs go to a file
    let level =
        config::resolve_log_level(args.log_level, &file_config, |key| std::env::var(key).ok());
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create(&args.log_file) {
        let _ = WriteLogger::init(level, log_config, log_file);
    }

    log::info!("irdash starting up (v{})", env!("CARGO_PKG_VERSION"));
    if let Some(e) = load_error {
        log::warn!("{e}, using defaults");
    }
    let cli = CliOverrides {
        user_name: args.user,
        open_card: args.open,
    };
    let resolved = config::resolve(&file_config, &cli);
    log::info!("Resolved config: {:?}", resolved);

    irdash::tui::run(resolved, &StubExecutor)
}
