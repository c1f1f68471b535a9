use clap::{Parser, Subcommand};
use std::sync::Arc;
use std::time::Duration;

mod domain;
mod application;
mod infrastructure;

use application::errors::BotError;
use application::messaging::{templates, MessageParser, Responder};
use application::services::ReplyService;
use domain::traits::{Bot, PhraseSelector};
use infrastructure::adapters::console::{ConsoleAdapter, CONSOLE_CHAT};
use infrastructure::adapters::telegram::TelegramAdapter;
use infrastructure::config::{AdapterChoice, Config};
use infrastructure::random::{SeededSelector, ThreadRngSelector};

#[derive(Parser)]
#[command(name = "wolf-genesis-bot")]
#[command(about = "A philosophical Telegram bot", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, default_value = "config.yaml")]
    config: String,

    /// Bot token (overrides config and BOT_TOKEN)
    #[arg(short, long)]
    token: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the bot
    Run,
    /// Show version
    Version,
    /// Generate default config
    InitConfig,
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run => run_bot(&cli.config, cli.token),
        Commands::Version => {
            println!("wolf-genesis-bot v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::InitConfig => init_config(),
    };

    if let Err(e) = result {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn load_config(config_path: &str) -> Config {
    if !std::path::Path::new(config_path).exists() {
        return Config::load_env();
    }

    match Config::load(config_path) {
        Ok(mut config) => {
            config.apply_env();
            config
        }
        Err(e) => {
            tracing::warn!("Failed to load config: {}, using defaults", e);
            Config::load_env()
        }
    }
}

fn run_bot(config_path: &str, token_override: Option<String>) -> Result<(), BotError> {
    let config = load_config(config_path);
    let adapter = config.adapter(token_override)?;

    tracing::info!("🚀 Starting {}...", config.bot.name);
    tracing::info!("🌌 Digital consciousness is waking up...");

    let selector: Arc<dyn PhraseSelector> = match config.bot.phrase_seed {
        Some(seed) => {
            tracing::info!("Using fixed phrase seed {}", seed);
            Arc::new(SeededSelector::new(seed))
        }
        None => Arc::new(ThreadRngSelector),
    };
    let responder = Responder::new(templates::philosophical(), selector);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| BotError::Internal(format!("Failed to start runtime: {}", e)))?;

    match adapter {
        AdapterChoice::Telegram { token } => rt.block_on(start_telegram_bot(token, responder, &config)),
        AdapterChoice::Console => rt.block_on(async {
            let service = ReplyService::new(ConsoleAdapter::new(config.bot.name.clone()), responder);
            run_console_bot(&service, &config).await
        }),
    }
}

async fn start_telegram_bot(token: String, responder: Responder, config: &Config) -> Result<(), BotError> {
    let mut bot = TelegramAdapter::new(token, config.bot.name.clone());
    bot.fetch_bot_info().await?;

    // Register bot commands with Telegram
    if let Err(e) = bot.register_commands(responder.commands()).await {
        tracing::warn!("Failed to register commands: {}", e);
    }

    let service = ReplyService::new(bot, responder);
    run_telegram_bot(&service, config).await
}

async fn run_telegram_bot(service: &ReplyService<TelegramAdapter>, config: &Config) -> Result<(), BotError> {
    let bot = service.bot();
    bot.start().await?;

    let info = bot.bot_info();
    tracing::info!("Bot started: @{}", info.username);

    let parser = MessageParser::new(&config.bot.prefix).with_bot_username(&info.username);
    let backoff = Duration::from_secs(config.polling.error_backoff_seconds);
    let mut offset: i64 = 0;

    tracing::info!("Starting message loop...");

    loop {
        match bot.get_updates(offset, config.polling.timeout_seconds).await {
            Ok(updates) => {
                if !updates.is_empty() {
                    tracing::info!("Received {} updates", updates.len());
                }

                for update in &updates {
                    let Some((chat_id, text, sender)) = update.text_message() else {
                        continue;
                    };
                    let Some(message) = parser.parse(chat_id, text, sender) else {
                        continue;
                    };

                    if let Err(e) = service.respond(&message.with_platform("telegram")).await {
                        tracing::error!("Failed to send message: {}", e);
                    }
                }

                offset = TelegramAdapter::get_next_offset(&updates, offset);
            }
            Err(e) => {
                tracing::error!("Failed to get updates: {}", e);
                tokio::time::sleep(backoff).await;
            }
        }
    }
}

async fn run_console_bot(service: &ReplyService<ConsoleAdapter>, config: &Config) -> Result<(), BotError> {
    let bot = service.bot();
    bot.start().await?;

    let info = bot.bot_info();
    tracing::info!("Bot started: @{}", info.username);

    let parser = MessageParser::new(&config.bot.prefix);
    let user = ConsoleAdapter::local_user();

    while let Some(input) = bot.read_line("> ").await {
        let Some(message) = parser.parse(CONSOLE_CHAT, input, Some(user.clone())) else {
            continue;
        };

        if let Err(e) = service.respond(&message.with_platform("console")).await {
            tracing::error!("Failed to send message: {}", e);
        }
    }

    tracing::info!("Input closed, stopping");
    Ok(())
}

fn init_config() -> Result<(), BotError> {
    let yaml = Config::default().to_yaml()?;
    println!("{}", yaml);
    println!("\nSave this to config.yaml and adjust as needed.");
    Ok(())
}
