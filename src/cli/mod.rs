use crate::config::Config;
use crate::core::{Action, LinkResolver, LocalSender, MenuRegistry, Sender};
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "streamledge-link")]
#[command(about = "Turn a video or stream link into a Streamledge viewer request")]
#[command(version)]
pub struct Cli {
    /// Config file (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Viewer service port, overrides the config file
    #[arg(short, long, global = true)]
    pub port: Option<u16>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Resolve a link for an action and send it to the viewer
    Open {
        /// Action id, e.g. youtube-video or twitch-chat-newtab
        action: String,

        /// Link URL
        url: String,

        /// Print the request URL instead of sending it
        #[arg(long)]
        dry_run: bool,

        /// Print the resolved request as JSON (implies --dry-run)
        #[arg(long)]
        json: bool,
    },

    /// Show which actions are offered for a link and what each resolves to
    Inspect {
        /// Link URL
        url: String,
    },

    /// List all actions with their menu titles and link patterns
    Actions,
}

impl Cli {
    pub fn config(&self) -> Result<Config> {
        let mut config = Config::load(self.config.as_deref())?;
        if let Some(port) = self.port {
            config.server.port = port;
            config.validate()?;
        }
        Ok(config)
    }

    pub async fn run(&self) -> Result<()> {
        let config = self.config()?;
        debug!("Using viewer service at {}:{}", config.server.host, config.server.port);

        match &self.command {
            Command::Open {
                action,
                url,
                dry_run,
                json,
            } => self.open(&config, action, url, *dry_run, *json).await,
            Command::Inspect { url } => self.inspect(&config, url),
            Command::Actions => {
                let registry = MenuRegistry::new()?;
                for action in Action::all() {
                    println!("{:<34} {}", action.id(), action.title());
                    for pattern in registry.patterns(action.kind) {
                        println!("{:<34}   {}", "", pattern.source());
                    }
                }
                Ok(())
            }
        }
    }

    async fn open(&self, config: &Config, action: &str, url: &str, dry_run: bool, json: bool) -> Result<()> {
        let resolver = LinkResolver::new();

        // A link that resolves to nothing is not an error for the caller.
        let Some(request) = resolver.resolve_silently(action, url) else {
            info!("Nothing to open for {} on {}", action, url);
            return Ok(());
        };

        if json {
            println!("{}", serde_json::to_string_pretty(&request)?);
            return Ok(());
        }

        let sender = LocalSender::new(config)?;
        if dry_run {
            println!("{}", sender.url_for(&request));
            return Ok(());
        }

        sender.send(&request).await
    }

    fn inspect(&self, config: &Config, url: &str) -> Result<()> {
        let registry = MenuRegistry::new()?;
        let resolver = LinkResolver::new();
        let actions = registry.offered_actions(url)?;

        if actions.is_empty() {
            println!("No actions offered for {}", url);
            return Ok(());
        }

        for action in actions {
            let outcome = match resolver.resolve_action(action, url) {
                Ok(request) => request.local_url(&config.server.host, config.server.port),
                Err(e) => format!("(nothing: {})", e),
            };
            println!("{:<34} {}", action.id(), outcome);
        }

        Ok(())
    }
}
