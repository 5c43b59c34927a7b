use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use itemplus::cli::{
    handle_export_command, handle_item_command, handle_price_command, ExportArgs, ItemCommands,
    PriceCommands,
};
use itemplus::config::{SitePaths, Settings};
use itemplus::error_log::ErrorLog;
use itemplus::storage::Storage;

#[derive(Parser)]
#[command(
    name = "itemplus",
    version,
    about = "Weight item export and item validation",
    long_about = "ItemPlus exports weight items, with their hotkeys, shelf life and \
                  prices, to CSV or Excel for scale and label systems, and validates \
                  items whenever they are saved."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the site directory
    Init,

    /// Show current configuration and paths
    Config,

    /// Export weight items to CSV or Excel
    Export(ExportArgs),

    /// Item management commands
    #[command(subcommand)]
    Item(ItemCommands),

    /// Price management commands
    #[command(subcommand)]
    Price(PriceCommands),

    /// Show recent entries from the error log
    Errors {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let paths = SitePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let mut storage = Storage::new(paths.clone())?;
    let error_log = ErrorLog::new(paths.error_log());

    match cli.command {
        Some(Commands::Init) => {
            println!("Initializing ItemPlus site at: {}", paths.base_dir().display());
            itemplus::storage::initialize_storage(&paths)?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Exports are written to: {}", paths.public_files_dir().display());
        }
        Some(Commands::Config) => {
            println!("ItemPlus Configuration");
            println!("======================");
            println!("Site directory:   {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Public files:     {}", paths.public_files_dir().display());
            println!("Error log:        {}", paths.error_log().display());
            println!();
            println!("Settings:");
            println!("  Default format: {}", settings.default_format);
            println!("  Barcode type:   {}", settings.barcode_type);
            println!("  DB code:        {}", settings.db_code);
            println!("  Column width:   {}", settings.column_width);
            println!("  Header fill:    {}", settings.header_fill);
        }
        Some(Commands::Export(args)) => {
            if !handle_export_command(&mut storage, &settings, &error_log, args)? {
                std::process::exit(1);
            }
        }
        Some(Commands::Item(cmd)) => {
            storage.load_all()?;
            handle_item_command(&storage, cmd)?
        }
        Some(Commands::Price(cmd)) => {
            storage.load_all()?;
            handle_price_command(&storage, cmd)?
        }
        Some(Commands::Errors { limit }) => {
            let entries = error_log.read_recent(limit)?;
            if entries.is_empty() {
                println!("No errors logged.");
            }
            for entry in entries {
                println!("{}", entry.format_human_readable());
            }
        }
        None => {
            println!("ItemPlus - weight item export");
            println!();
            println!("Run 'itemplus --help' for usage information.");
        }
    }

    Ok(())
}
