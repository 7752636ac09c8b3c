mod input;
mod render;
mod session;

use clap::{Parser, ValueEnum};
use tictactoe_engine::config::{GameConfig, PRACTICAL_SEARCH_SIZE, Validate, get_config_manager};
use tictactoe_engine::{BotType, FirstPlayerMode, SessionRng, log, logger};

use session::TerminalSession;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FirstArg {
    Human,
    Ai,
    Random,
}

impl From<FirstArg> for FirstPlayerMode {
    fn from(value: FirstArg) -> Self {
        match value {
            FirstArg::Human => FirstPlayerMode::Human,
            FirstArg::Ai => FirstPlayerMode::Ai,
            FirstArg::Random => FirstPlayerMode::Random,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum BotArg {
    Minimax,
    ParallelMinimax,
    Random,
}

impl From<BotArg> for BotType {
    fn from(value: BotArg) -> Self {
        match value {
            BotArg::Minimax => BotType::Minimax,
            BotArg::ParallelMinimax => BotType::ParallelMinimax,
            BotArg::Random => BotType::Random,
        }
    }
}

#[derive(Parser)]
#[command(name = "tictactoe", about = "Play n×n tic-tac-toe against a full-depth minimax AI")]
struct Args {
    /// Board size, at least 3
    #[arg(long)]
    size: Option<usize>,

    /// Path to the YAML config file
    #[arg(long)]
    config: Option<String>,

    /// Who plays X and moves first
    #[arg(long, value_enum)]
    first: Option<FirstArg>,

    /// Strategy the AI uses to pick its moves
    #[arg(long, value_enum)]
    bot: Option<BotArg>,

    /// Seed for the random bot and the random first player
    #[arg(long)]
    seed: Option<u64>,

    /// Also print debug log lines
    #[arg(long)]
    verbose: bool,

    /// Tag log lines with a prefix when the config sets none
    #[arg(long)]
    use_log_prefix: bool,

    /// Write the effective settings back to the config file
    #[arg(long)]
    save_config: bool,
}

impl Args {
    fn apply_overrides(&self, mut config: GameConfig) -> GameConfig {
        if let Some(size) = self.size {
            config.board_size = size;
        }
        if let Some(first) = self.first {
            config.first_player = first.into();
        }
        if let Some(bot) = self.bot {
            config.bot = bot.into();
        }
        config
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let manager = get_config_manager(args.config.as_deref());
    let config = args.apply_overrides(manager.get_config()?);
    config.validate()?;

    let prefix = config
        .log_prefix
        .clone()
        .or_else(|| args.use_log_prefix.then(|| "TicTacToe".to_string()));
    logger::init_logger(prefix, args.verbose);

    log!(
        "Config loaded from {}: {:?}",
        manager.content_provider().path().display(),
        config
    );

    if args.save_config {
        manager.set_config(&config)?;
        log!("Config saved");
    }

    if config.board_size > PRACTICAL_SEARCH_SIZE && config.bot != BotType::Random {
        log!(
            "Full-depth search on a {}x{} board may take a very long time",
            config.board_size,
            config.board_size
        );
    }

    let rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!("Session seed {}", rng.seed());

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut session = TerminalSession::new(stdin.lock(), stdout.lock(), &config, rng)?;
    let state = session.run()?;

    log!("Game finished: {}", state);

    Ok(())
}
