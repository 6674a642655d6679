//! Interactive tic-tac-toe at the terminal.
//!
//! Prompts each player for a move by name (`"row, col"`); unknown names
//! and occupied cells just re-prompt.

use std::io::{self, BufRead, Write};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use gridgame::core::{Player, PlayerMap};
use gridgame::games::tictactoe::TicTacToe;
use gridgame::render::BoardRenderer;
use gridgame::rules::GameStatus;
use gridgame::training::GameSession;
use gridgame::Error;

#[derive(Parser)]
#[command(name = "play", about = "Play tic-tac-toe against another human")]
struct Args {
    /// Display name for the first player (x).
    #[arg(long, default_value = "player one")]
    player_one: String,

    /// Display name for the second player (o).
    #[arg(long, default_value = "player two")]
    player_two: String,
}

fn main() -> gridgame::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let names = PlayerMap::new(|p| match p {
        Player::One => args.player_one.clone(),
        Player::Two => args.player_two.clone(),
    });

    let mut session = GameSession::new(TicTacToe::new());
    let renderer = BoardRenderer::new(TicTacToe::symbols().to_vec());

    println!("Started new game");
    println!("{}", renderer.render(session.state()));

    let stdin = io::stdin();
    while !session.is_over() {
        let player = session.to_move();
        print!(
            "\n{} - make a move [{}]: ",
            names[player],
            session.valid_move_names().join(" / ")
        );
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            eprintln!("\ninput closed, abandoning game");
            return Ok(());
        }

        match session.play_by_name(line.trim()) {
            Ok(_) => println!("{}", renderer.render(session.state())),
            Err(err @ (Error::UnknownMoveName { .. } | Error::IllegalMove { .. })) => {
                println!("{err}");
            }
            Err(err) => return Err(err),
        }
    }

    print!("\nGAME OVER - ");
    match session.status() {
        GameStatus::Draw => println!("It's a draw."),
        GameStatus::PlayerOneWin => println!("{} WINS!", names[Player::One]),
        GameStatus::PlayerTwoWin => println!("{} WINS!", names[Player::Two]),
        GameStatus::Continuing => unreachable!("the loop exits only on a terminal status"),
    }

    Ok(())
}
