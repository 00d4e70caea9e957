use clap::Parser;
use directories::ProjectDirs;
use keeplink::api::{ConfigAction, KeeplinkApi};
use keeplink::config::KeeplinkConfig;
use keeplink::error::{KeeplinkError, Result};
use keeplink::store::fs::FileStore;

mod args;
mod print;

use args::{Cli, Commands};
use print::{print_bookmarks, print_messages};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut api = init_api(&cli)?;

    match cli.command {
        Some(Commands::Add { name, url }) => handle_add(&mut api, &name, &url),
        Some(Commands::List) => handle_list(&api),
        Some(Commands::Remove { name, url }) => handle_remove(&mut api, &name, &url),
        Some(Commands::Path) => handle_path(&api),
        Some(Commands::Config { key, value }) => handle_config(&api, key, value),
        None => handle_list(&api),
    }
}

fn init_api(cli: &Cli) -> Result<KeeplinkApi<FileStore>> {
    let store_dir = match &cli.store {
        Some(dir) => dir.clone(),
        None => {
            let proj_dirs = ProjectDirs::from("com", "keeplink", "keeplink")
                .ok_or_else(|| KeeplinkError::Store("Could not determine data dir".to_string()))?;
            proj_dirs.data_dir().to_path_buf()
        }
    };

    let config = KeeplinkConfig::load(&store_dir).unwrap_or_default();
    let store = FileStore::new(store_dir.clone()).with_data_file(&config.data_file);
    Ok(KeeplinkApi::new(store, store_dir))
}

fn handle_add(api: &mut KeeplinkApi<FileStore>, name: &str, url: &str) -> Result<()> {
    let result = api.add_bookmark(name, url)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(api: &KeeplinkApi<FileStore>) -> Result<()> {
    let result = api.list_bookmarks()?;
    print_bookmarks(&result.bookmarks);
    Ok(())
}

fn handle_remove(api: &mut KeeplinkApi<FileStore>, name: &str, url: &str) -> Result<()> {
    let result = api.remove_bookmark(name, url)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_path(api: &KeeplinkApi<FileStore>) -> Result<()> {
    match api.data_path() {
        Some(path) => println!("{}", path.display()),
        None => println!("(no backing file)"),
    }
    Ok(())
}

fn handle_config(
    api: &KeeplinkApi<FileStore>,
    key: Option<String>,
    value: Option<String>,
) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };
    let result = api.config(action)?;
    if let Some(config) = &result.config {
        println!("data-file: {}", config.data_file);
    }
    print_messages(&result.messages);
    Ok(())
}
