//! k3ai - plugin catalog browser
//!
//! Usage:
//!   k3ai plugins list            # List plugins from the configured repository
//!   k3ai plugins show <name>     # Show one plugin descriptor
//!   k3ai plugins validate        # Check every descriptor, non-zero exit on failure
//!   k3ai groups list             # List plugin groups

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use k3ai_core::config::{Settings, SettingsStore};
use k3ai_core::plugins::{Catalog, Groups, Plugin, Plugins};

#[derive(Parser)]
#[command(name = "k3ai")]
#[command(about = "Discover and validate k3ai plugins", long_about = None)]
struct Cli {
    /// Path to config.toml (defaults to <config dir>/k3ai/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Work with plugin descriptors
    #[command(subcommand)]
    Plugins(PluginsCommand),

    /// Work with plugin groups
    #[command(subcommand)]
    Groups(GroupsCommand),
}

#[derive(Subcommand)]
enum PluginsCommand {
    /// List every plugin in the repository
    List(ListArgs),

    /// Show a single plugin by name
    Show {
        /// Plugin name (plugin-name in plugin.yaml)
        name: String,

        #[command(flatten)]
        list: ListArgs,
    },

    /// Validate every plugin descriptor
    Validate {
        /// Listing URL (overrides plugins_url from config)
        #[arg(long)]
        url: Option<String>,
    },
}

#[derive(Subcommand)]
enum GroupsCommand {
    /// List every group in the repository
    List(ListArgs),
}

#[derive(Args)]
struct ListArgs {
    /// Listing URL (overrides the configured one)
    #[arg(long)]
    url: Option<String>,

    /// Output format
    #[arg(short, long, default_value = "table")]
    format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// Machine-readable JSON
    Json,
    /// YAML, same shape as the descriptor files
    Yaml,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let fallback = if cli.verbose {
        "k3ai=debug,k3ai_core=debug,info"
    } else {
        "k3ai=info,k3ai_core=info,warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| fallback.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let settings = load_settings(cli.config)?;

    match cli.command {
        Commands::Plugins(PluginsCommand::List(args)) => run_plugins_list(&settings, args),
        Commands::Plugins(PluginsCommand::Show { name, list }) => {
            run_plugins_show(&settings, &name, list)
        }
        Commands::Plugins(PluginsCommand::Validate { url }) => run_plugins_validate(&settings, url),
        Commands::Groups(GroupsCommand::List(args)) => run_groups_list(&settings, args),
    }
}

fn load_settings(path: Option<PathBuf>) -> Result<Settings> {
    let store = match path {
        Some(path) => SettingsStore::from_path(path),
        None => SettingsStore::from_default_location()?,
    };
    tracing::debug!(path = %store.config_path().display(), "Loading settings");
    let mut settings = store.load()?;

    if settings.remote.token.is_none() {
        settings.remote.token = std::env::var("GITHUB_TOKEN").ok().filter(|t| !t.is_empty());
    }
    Ok(settings)
}

fn fetch_plugins(settings: &Settings, url: Option<String>) -> Result<Plugins> {
    let url = url.unwrap_or_else(|| settings.remote.plugins_url.clone());
    let catalog = Catalog::from_settings(&settings.remote)?;
    catalog
        .list_plugins(&url)
        .with_context(|| format!("Failed to load plugins from {}", url))
}

fn run_plugins_list(settings: &Settings, args: ListArgs) -> Result<()> {
    let plugins = fetch_plugins(settings, args.url)?;
    match args.format {
        OutputFormat::Table => print_plugin_table(&plugins),
        OutputFormat::Json => print_json(&plugins)?,
        OutputFormat::Yaml => print_yaml(&plugins)?,
    }
    Ok(())
}

fn run_plugins_show(settings: &Settings, name: &str, args: ListArgs) -> Result<()> {
    let plugins = fetch_plugins(settings, args.url)?;
    let plugin = plugins
        .find(name)
        .ok_or_else(|| anyhow::anyhow!("Plugin not found: {}", name))?;

    match args.format {
        OutputFormat::Table => print_plugin_details(plugin),
        OutputFormat::Json => print_json(plugin)?,
        OutputFormat::Yaml => print_yaml(plugin)?,
    }
    Ok(())
}

fn run_plugins_validate(settings: &Settings, url: Option<String>) -> Result<()> {
    let plugins = fetch_plugins(settings, url)?;
    let failures = plugins.validate_all();

    if failures.is_empty() {
        println!("All {} plugins are valid", plugins.len());
        return Ok(());
    }

    for (name, error) in &failures {
        let name = if name.is_empty() { "<unnamed>" } else { name };
        println!("✗ {}: {}", name, error);
    }
    println!(
        "\n{} of {} plugins failed validation",
        failures.len(),
        plugins.len()
    );
    std::process::exit(1);
}

fn run_groups_list(settings: &Settings, args: ListArgs) -> Result<()> {
    let url = args
        .url
        .unwrap_or_else(|| settings.remote.groups_url.clone());
    let catalog = Catalog::from_settings(&settings.remote)?;
    let groups = catalog
        .list_groups(&url)
        .with_context(|| format!("Failed to load groups from {}", url))?;

    match args.format {
        OutputFormat::Table => print_group_table(&groups),
        OutputFormat::Json => print_json(&groups)?,
        OutputFormat::Yaml => print_yaml(&groups)?,
    }
    Ok(())
}

fn print_plugin_table(plugins: &Plugins) {
    if plugins.is_empty() {
        println!("No plugins found");
        return;
    }

    println!(
        "{:<28} {:<16} {:>4} {:>4} {:>4}  DESCRIPTION",
        "NAME", "NAMESPACE", "YAML", "BASH", "HELM"
    );
    for plugin in plugins.iter() {
        println!(
            "{:<28} {:<16} {:>4} {:>4} {:>4}  {}",
            plugin.plugin_name,
            plugin.namespace,
            plugin.yaml_steps.len(),
            plugin.bash_steps.len(),
            plugin.helm_steps.len(),
            plugin.plugin_description
        );
    }
}

fn print_plugin_details(plugin: &Plugin) {
    println!("Name:        {}", plugin.plugin_name);
    println!("Description: {}", plugin.plugin_description);
    println!("Namespace:   {}", plugin.namespace);
    if !plugin.labels.is_empty() {
        println!("Labels:      {}", plugin.labels.join(", "));
    }

    if !plugin.yaml_steps.is_empty() {
        println!("\nYAML:");
        for step in &plugin.yaml_steps {
            println!("  [{}] {}", step.step_type, step.url);
        }
    }
    if !plugin.bash_steps.is_empty() {
        println!("\nBash:");
        for command in &plugin.bash_steps {
            println!("  {}", command);
        }
    }
    if !plugin.helm_steps.is_empty() {
        println!("\nHelm:");
        for command in &plugin.helm_steps {
            println!("  {}", command);
        }
    }
    if let Some(command) = &plugin.post_install.command {
        println!("\nPost-install: {}", command);
    }

    if let Err(e) = plugin.validate() {
        println!("\n⚠ {}", e);
    }
}

fn print_group_table(groups: &Groups) {
    if groups.is_empty() {
        println!("No groups found");
        return;
    }

    println!("{:<24} PLUGINS", "NAME");
    for group in groups.iter() {
        let members: Vec<&str> = group.enabled_plugins().collect();
        println!("{:<24} {}", group.group_name, members.join(", "));
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", json);
    Ok(())
}

fn print_yaml<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let yaml = serde_yaml::to_string(value).context("Failed to serialize output")?;
    print!("{}", yaml);
    Ok(())
}
