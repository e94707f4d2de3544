use clap::{Parser, Subcommand};
use color_eyre::{eyre::eyre, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use std::path::PathBuf;
use tracing::debug;

use sportadmin::api::Resource;
use sportadmin::commands::{self, ResourceKind};
use sportadmin::config::Config;
use sportadmin::loading::GLOBAL_KEY;
use sportadmin::logging;
use sportadmin::store::ResourceStore;
use sportadmin::Stores;

#[derive(Parser, Debug)]
#[command(name = "sportadmin")]
#[command(about = "Manage sports dashboard resources over the admin REST API")]
#[command(version)]
struct Args {
  /// Path to config file (default: $XDG_CONFIG_HOME/sportadmin/config.yaml)
  #[arg(short, long)]
  config: Option<PathBuf>,

  /// Backend base URL, overrides the config file
  #[arg(long)]
  base_url: Option<String>,

  /// Log at debug level
  #[arg(short, long)]
  verbose: bool,

  /// Resource to manage: cities, sport-clubs, sport-types,
  /// tournament-categories, favorites, news (aliases and prefixes work)
  resource: String,

  #[command(subcommand)]
  action: Action,
}

#[derive(Subcommand, Debug)]
enum Action {
  /// List one page
  List {
    #[arg(long, default_value_t = 0)]
    page: u32,
    /// Page size (default from config)
    #[arg(long)]
    size: Option<u32>,
    /// Filter field, repeatable: --filter name=Almaty --filter active=true
    #[arg(short, long = "filter", value_name = "KEY=VALUE")]
    filters: Vec<String>,
  },
  /// Show one entity
  Get { id: i64 },
  /// Create from a JSON payload
  Create {
    #[arg(long)]
    data: String,
  },
  /// Update from a JSON payload
  Update {
    id: i64,
    #[arg(long)]
    data: String,
  },
  /// Delete one entity
  Delete { id: i64 },
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ListOutput<'a, R> {
  items: &'a [R],
  page: u32,
  size: u32,
  total_elements: u64,
  total_pages: u32,
}

#[tokio::main]
async fn main() -> Result<()> {
  color_eyre::install()?;

  let args = Args::parse();

  let mut config = match Config::load(args.config.as_deref()) {
    Ok(config) => config,
    Err(_) if args.config.is_none() && args.base_url.is_some() => {
      Config::for_base_url(args.base_url.clone().unwrap_or_default())
    }
    Err(e) => return Err(e),
  };
  if let Some(base_url) = args.base_url {
    config.api.base_url = base_url;
  }

  let _log_guard = logging::setup_logging(config.log_dir.as_deref(), args.verbose)?;

  let kind = commands::resolve(&args.resource).map_err(|suggestions| {
    if suggestions.is_empty() {
      let known: Vec<_> = commands::RESOURCES.iter().map(|c| c.name).collect();
      eyre!(
        "Unknown resource '{}', expected one of: {}",
        args.resource,
        known.join(", ")
      )
    } else {
      eyre!(
        "Ambiguous resource '{}', did you mean:\n{}",
        args.resource,
        commands::describe(&suggestions)
      )
    }
  })?;

  let stores = Stores::new(&config)?;
  let _busy = stores.loading.subscribe(GLOBAL_KEY, |active| {
    debug!(active, "backend busy state changed");
  });

  let page_size = config.page_size;
  match kind {
    ResourceKind::Cities => run(&stores.cities, args.action, page_size).await,
    ResourceKind::SportClubs => run(&stores.sport_clubs, args.action, page_size).await,
    ResourceKind::SportTypes => run(&stores.sport_types, args.action, page_size).await,
    ResourceKind::TournamentCategories => {
      run(&stores.tournament_categories, args.action, page_size).await
    }
    ResourceKind::Favorites => run(&stores.favorites, args.action, page_size).await,
    ResourceKind::News => run(&stores.news, args.action, page_size).await,
  }
}

async fn run<R: Resource>(store: &ResourceStore<R>, action: Action, page_size: u32) -> Result<()> {
  match action {
    Action::List {
      page,
      size,
      filters,
    } => {
      let filter: R::Filter = parse_filter(&filters)?;
      let size = size.unwrap_or(page_size);
      store.fetch_list(page, size, filter).await;

      let state = store.state();
      if let Some(err) = state.error {
        return Err(eyre!(err));
      }
      print_json(&ListOutput {
        items: &state.items,
        page: state.page,
        size: state.page_size,
        total_elements: state.total_elements,
        total_pages: state.total_pages,
      })
    }
    Action::Get { id } => {
      store.fetch_one(id).await;

      let state = store.state();
      if let Some(err) = state.error {
        return Err(eyre!(err));
      }
      let current = state
        .current
        .ok_or_else(|| eyre!("{} {} not found", R::NAME, id))?;
      print_json(&current)
    }
    Action::Create { data } => {
      let payload: R::Payload = parse_payload(&data)?;
      let created = store.create(payload).await?;
      print_json(&created)
    }
    Action::Update { id, data } => {
      let payload: R::Payload = parse_payload(&data)?;
      match store.update(id, payload).await? {
        Some(updated) => print_json(&updated),
        None => {
          store.fetch_one_forced(id).await;
          match store.state().current {
            Some(current) => print_json(&current),
            None => Ok(()),
          }
        }
      }
    }
    Action::Delete { id } => {
      store.delete(id).await?;
      println!("Deleted {} {}", R::NAME, id);
      Ok(())
    }
  }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
  println!("{}", serde_json::to_string_pretty(value)?);
  Ok(())
}

fn parse_payload<T: DeserializeOwned>(data: &str) -> Result<T> {
  serde_json::from_str(data).map_err(|e| eyre!("Invalid --data payload: {}", e))
}

/// Build a typed filter from `key=value` arguments.
///
/// Values are read as JSON where possible (`true`, `42`), comma lists become
/// arrays, anything else is a string. If the typed reading does not fit the
/// filter, every value is retried as a plain string.
fn parse_filter<F: DeserializeOwned>(args: &[String]) -> Result<F> {
  let mut typed = Map::new();
  let mut raw = Map::new();

  for arg in args {
    let (key, value) = arg
      .split_once('=')
      .ok_or_else(|| eyre!("Filter '{}' must look like key=value", arg))?;
    let key = key.trim().to_string();
    typed.insert(key.clone(), filter_value(value.trim()));
    raw.insert(key, Value::String(value.trim().to_string()));
  }

  serde_json::from_value(Value::Object(typed))
    .or_else(|_| serde_json::from_value(Value::Object(raw)))
    .map_err(|e| eyre!("Invalid filter: {}", e))
}

fn filter_value(raw: &str) -> Value {
  if let Ok(value) = serde_json::from_str::<Value>(raw) {
    return value;
  }
  if raw.contains(',') {
    return Value::Array(raw.split(',').map(|part| filter_value(part.trim())).collect());
  }
  Value::String(raw.to_string())
}
