//! 端末で動作する最小 UI。

mod session;

use clap::Parser;
use marubatsu_core::ai::random;
use marubatsu_core::engine;
use session::{Controller, Session};
use std::io;
use std::time::Duration;

/// コマンドライン引数。
#[derive(Debug, Parser)]
#[command(name = "marubatsu", about = "Tic-tac-toe against a random computer opponent")]
struct Args {
    /// コンピュータの1手前の待ち時間（ミリ秒）。
    #[arg(long, default_value_t = 1000)]
    delay_ms: u64,

    /// 人間（○）が先手で開始する（既定はコンピュータの中央開局）。
    #[arg(long)]
    human_first: bool,

    /// 乱数シード（省略時はOS乱数から採り、ログに出力する）。
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), String> {
    let args = Args::parse();

    // ログは標準エラーへ。盤面の描画（標準出力）と混ざらないようにする。
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let seed = args.seed.unwrap_or_else(rand::random);
    tracing::info!(seed, human_first = args.human_first, "session start");

    let first = if args.human_first {
        engine::Mark::Nought
    } else {
        engine::Mark::Cross
    };

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    let mut session = Session::new(
        stdin,
        stdout,
        Controller::Random(random::Agent::new(seed)),
        Controller::Human,
        Duration::from_millis(args.delay_ms),
        first,
    );

    let status = session.run().map_err(|e| e.to_string())?;
    drop(session);

    tracing::info!(status = ?status, "session end");

    match status {
        engine::GameStatus::Won { winner } => match winner {
            engine::Mark::Cross => println!("Computer has won!"),
            engine::Mark::Nought => println!("Player has won!"),
            _ => println!("Game over"),
        },
        engine::GameStatus::Draw => println!("And the game ends in a tie :("),
        _ => {}
    }

    Ok(())
}
