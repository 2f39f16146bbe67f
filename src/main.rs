use chrono::{ DateTime, Utc };
use clap::{ Args, Parser, Subcommand };
use pixio::components::{ GalleryView, PageHeader, SidebarView };
use pixio::libs::routes::{ page_meta, Route, GALLERY_DESCRIPTION, GALLERY_HEADING };
use pixio::libs::{ SortDirection, SortOption, Theme, ViewMode };
use pixio::state::gallery::{ append_draft, load_canvases, sample_canvases, CanvasOwner };
use pixio::state::{
    delete_from_local_storage,
    paths,
    AppConfig,
    LocalStorage,
    PreferenceOverrides,
};
use pixio::utils::constants::{ APP_DESCRIPTION_LONG, APP_NAME, DATA_DIR_ENV };
use pixio::utils::{ format_relative_time_from, logger, path };
use pixio::{ always_eprint, always_print, debug_print, Error, Result };
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pixio", version, about = APP_DESCRIPTION_LONG)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Directory holding config.json and local_storage.json
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List canvases the way the gallery page shows them
    Gallery(GalleryArgs),
    /// Add an empty canvas to a canvases file
    Create {
        title: String,
        /// JSON file holding the canvas list (created if missing)
        #[arg(long)]
        file: PathBuf,
        #[arg(long, default_value = "me")]
        owner: String,
    },
    /// Describe a timestamp relative to now or to --reference
    Relative {
        /// RFC 3339 timestamp, e.g. 2023-10-02T11:00:00Z
        target: String,
        #[arg(long)]
        reference: Option<String>,
    },
    /// Show the navigation sidebar for a path
    Sidebar {
        #[arg(long, default_value = "/")]
        path: String,
    },
    /// Show the current theme, or set it
    Theme {
        theme: Option<Theme>,
    },
    /// Inspect or edit local storage
    Storage {
        #[command(subcommand)]
        action: StorageAction,
    },
}

#[derive(Args, Debug)]
struct GalleryArgs {
    /// JSON file with canvases; the built-in samples are used otherwise
    #[arg(long)]
    file: Option<PathBuf>,
    /// Filter by title
    #[arg(long)]
    search: Option<String>,
    #[arg(long)]
    sort: Option<SortOption>,
    #[arg(long, conflicts_with = "flip")]
    direction: Option<SortDirection>,
    /// Flip the saved sort direction
    #[arg(long)]
    flip: bool,
    #[arg(long)]
    view: Option<ViewMode>,
}

#[derive(Subcommand, Debug)]
enum StorageAction {
    List,
    Get {
        key: String,
    },
    Set {
        key: String,
        value: String,
    },
    /// Remove keys; keys that are not present are ignored
    Delete {
        #[arg(required = true)]
        keys: Vec<String>,
    },
}

fn parse_timestamp(input: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(input)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|source| Error::InvalidTimestamp { input: input.to_string(), source })
}

fn run_gallery(args: GalleryArgs) -> Result<()> {
    let config_path = paths::config_json();
    let mut config = AppConfig::load_from(&config_path);

    let overrides = PreferenceOverrides {
        sort: args.sort,
        direction: args.direction,
        flip: args.flip,
        view: args.view,
    };
    config.apply_gallery_overrides(&config_path, &overrides)?;

    let canvases = match &args.file {
        Some(path) => load_canvases(path)?,
        None => sample_canvases(),
    };

    let query = config.gallery.query(args.search.unwrap_or_default());
    debug_print!("🔎 Gallery query: {:?}", query);
    let visible = query.apply(&canvases);

    always_print!("{}", PageHeader::new(GALLERY_HEADING).with_subtitle(GALLERY_DESCRIPTION));
    always_print!(
        "Sort: {} ({})  View: {}\n",
        config.gallery.sort.label(),
        config.gallery.direction,
        config.gallery.view
    );
    always_print!("{}", GalleryView::new(visible, config.gallery.view, Utc::now()));
    Ok(())
}

fn run_create(title: String, file: PathBuf, owner: String) -> Result<()> {
    let owner = CanvasOwner {
        id: owner.clone(),
        username: owner,
        avatar: String::new(),
        url: String::new(),
    };
    let canvas = append_draft(&file, title, owner, Utc::now())?;
    always_print!("Created {} at {}", canvas.title, canvas.href());
    Ok(())
}

fn run_storage(action: StorageAction) -> Result<()> {
    let mut storage = LocalStorage::open_default()?;

    match action {
        StorageAction::List => {
            if storage.is_empty() {
                always_print!("(empty)");
            }
            for (key, value) in storage.iter() {
                always_print!("{} = {}", key, value);
            }
        }
        StorageAction::Get { key } => {
            match storage.get_item(&key) {
                Some(value) => always_print!("{}", value),
                None => always_print!("(not set)"),
            }
        }
        StorageAction::Set { key, value } => {
            storage.set_item(key, value);
            storage.save()?;
        }
        StorageAction::Delete { keys } => {
            let removed = delete_from_local_storage(&mut storage, &keys);
            storage.save()?;
            always_print!("Removed {} of {} key(s)", removed, keys.len());
        }
    }
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    debug_print!("📂 Using data directory {}", path::get_data_dir_absolute());

    match cli.command {
        Command::Gallery(args) => run_gallery(args),
        Command::Create { title, file, owner } => run_create(title, file, owner),
        Command::Relative { target, reference } => {
            let target = parse_timestamp(&target)?;
            let reference = match reference {
                Some(reference) => parse_timestamp(&reference)?,
                None => Utc::now(),
            };
            always_print!("{}", format_relative_time_from(target, reference));
            Ok(())
        }
        Command::Sidebar { path } => {
            match Route::parse(&path) {
                Some(route) => always_print!("{}", page_meta(&route).title),
                None => always_eprint!("⚠️ Unknown route: {}", path),
            }
            always_print!("{}", SidebarView { pathname: &path });
            Ok(())
        }
        Command::Theme { theme } => {
            let mut storage = LocalStorage::open_default()?;
            match theme {
                Some(theme) => {
                    theme.store(&mut storage);
                    storage.save()?;
                    always_print!("Theme set to {}", theme.label());
                }
                None => always_print!("{}", Theme::load(&storage).label()),
            }
            Ok(())
        }
        Command::Storage { action } => run_storage(action),
    }
}

fn main() {
    let cli = Cli::parse();

    logger::init_logging(cli.debug);
    debug_print!("🚀 Initializing {}...", APP_NAME);

    // Must happen before anything resolves the data directory
    if let Some(dir) = &cli.data_dir {
        paths::set_data_dir(dir.clone());
    }

    if let Err(e) = run(cli) {
        always_eprint!("❌ {}", e);
        std::process::exit(1);
    }
}
