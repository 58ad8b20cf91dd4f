use std::io::{self, BufRead};

use anyhow::Context;
use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use tracing_subscriber::EnvFilter;

use gridle_client::{GameSession, HttpValidator, TermBoard, Validator};
use gridle_core::{BoardConfig, Coord, InputEvent};

/// Terminal client for a word-guessing validator server.
///
/// Type a word and press enter to submit it; a `-` deletes the letter to
/// its left before submission.
#[derive(Parser, Debug)]
#[command(name = "gridle", version, about)]
struct Cli {
    /// Validator endpoint answering guesses.
    #[arg(long, default_value = "http://localhost:8021/play.html")]
    endpoint: String,

    /// Session token sent as the SESSIONID cookie; generated when absent.
    #[arg(long)]
    session: Option<String>,

    /// Number of guess rows.
    #[arg(long, default_value_t = BoardConfig::CLASSIC.rows)]
    rows: Coord,

    /// Letters per guess.
    #[arg(long, default_value_t = BoardConfig::CLASSIC.cols)]
    cols: Coord,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.verbosity);

    let config = BoardConfig::new(cli.rows, cli.cols);
    let token = cli
        .session
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
    log::info!("playing against {} as session {}", cli.endpoint, token);

    let validator = HttpValidator::new(cli.endpoint, token, config.cols);
    let mut session = GameSession::new(config, validator, TermBoard::new(config));

    print_board(&session);
    for line in io::stdin().lock().lines() {
        let line = line.context("reading stdin")?;
        for ch in line.trim().chars() {
            let event = match ch {
                '-' => InputEvent::Delete,
                ch => InputEvent::Letter(ch),
            };
            session.handle(event).await;
        }
        session.handle(InputEvent::Submit).await;

        print_board(&session);
        if session.is_finished() {
            log::info!(
                "finished in {}s after {} moves",
                session.elapsed_secs(chrono::Utc::now()),
                session.move_count()
            );
            break;
        }
    }

    Ok(())
}

fn init_logging(verbosity: &Verbosity<InfoLevel>) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(verbosity.log_level_filter().to_string().to_lowercase())
    });
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn print_board<V: Validator>(session: &GameSession<TermBoard, V>) {
    println!("{}", session.renderer().render());
    println!("{}", session.status_line());
}
