use clap::{Parser, Subcommand};
use polyglot_core::config;
use polyglot_locale::{global, LocaleManager};

#[derive(Parser)]
#[command(
    name = "polyglot",
    version,
    about = "Localized command and text loader for chat bots"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to config file.
    #[arg(short, long, default_value = "polyglot.toml")]
    config: String,

    /// Override the locale directory from the config file.
    #[arg(long)]
    lang_dir: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Load every locale and report what was found.
    Check,
    /// Print the merged alias table, or one entry of it.
    Aliases {
        /// Flattened command key (e.g. `user.info`).
        key: Option<String>,
    },
    /// Print a command (or text) node of one locale as JSON.
    Show {
        /// Locale name (e.g. `en-US`).
        locale: String,
        /// Top-level key, or a dotted path into a group.
        key: String,
        /// Look up a text instead of a command.
        #[arg(long)]
        text: bool,
    },
    /// Print the registration descriptor for a command as JSON.
    Command {
        /// Alias-table key (e.g. `profile.edit`) or full path (`user.profile.edit`).
        key: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut cfg = config::load(&cli.config)?;
    if let Some(dir) = cli.lang_dir {
        cfg.locales.dir = dir;
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cfg.polyglot.log_level)),
        )
        .init();

    let manager = global::init(cfg.locales.clone())?;
    tracing::debug!("polyglot: {} locales ready", manager.len());

    match cli.command {
        Commands::Check => {
            println!("polyglot locale check\n");
            println!("Directory: {}", cfg.locales.dir);
            println!("Alias keys: {}", cfg.locales.flatten.display_name());
            println!();
            if manager.is_empty() {
                anyhow::bail!("no *.{} files found in {}", cfg.locales.extension, cfg.locales.dir);
            }
            for locale in manager.locales() {
                println!(
                    "  {}: {} commands, {} texts",
                    locale.name,
                    locale.commands.len(),
                    locale.texts.len()
                );
            }
        }
        Commands::Aliases { key: Some(key) } => {
            if !manager.alias_table().contains_key(&key) {
                anyhow::bail!("no aliases recorded for '{key}'");
            }
            println!("{key}: {}", manager.get_command_aliases(&key).join(", "));
        }
        Commands::Aliases { key: None } => print_alias_table(manager),
        Commands::Show { locale, key, text } => {
            let Some(loc) = manager.get_locale(&locale) else {
                anyhow::bail!("unknown locale '{locale}'");
            };
            let json = if text {
                let (head, rest) = key.split_once('.').unwrap_or((key.as_str(), ""));
                let node = loc.get_translated_text(head).and_then(|n| n.get(rest));
                let Some(node) = node else {
                    anyhow::bail!("no text '{key}' in {locale}");
                };
                serde_json::to_string_pretty(node)?
            } else {
                let Some(node) = loc.find_command(&key) else {
                    anyhow::bail!("no command '{key}' in {locale}");
                };
                serde_json::to_string_pretty(node)?
            };
            println!("{json}");
        }
        Commands::Command { key } => {
            let Some(registration) = manager.command(&key) else {
                anyhow::bail!("no locale defines command '{key}'");
            };
            println!("{}", serde_json::to_string_pretty(&registration)?);
        }
    }

    Ok(())
}

fn print_alias_table(manager: &LocaleManager) {
    for (key, aliases) in manager.alias_table().entries() {
        if aliases.is_empty() {
            println!("{key}: -");
        } else {
            println!("{key}: {}", aliases.join(", "));
        }
    }
}
