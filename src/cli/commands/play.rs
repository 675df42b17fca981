//! Play command - Interactive terminal game

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::{Parser, ValueEnum};

use crate::{
    app::{GameMode, Session, SessionConfig},
    cli::output::render_board,
    tictactoe::{Mark, Outcome},
};

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum ModeArg {
    /// Two people share the terminal
    HumanVsHuman,
    /// Play against the search engine
    HumanVsComputer,
}

impl From<ModeArg> for GameMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::HumanVsHuman => GameMode::HumanVsHuman,
            ModeArg::HumanVsComputer => GameMode::HumanVsComputer,
        }
    }
}

#[derive(Parser, Debug)]
#[command(about = "Play an interactive game in the terminal")]
pub struct PlayArgs {
    #[arg(long, value_enum, default_value = "human-vs-computer")]
    pub mode: ModeArg,

    /// Mark the computer plays
    #[arg(long, default_value = "O")]
    pub computer: Mark,

    /// Mark that opens every game
    #[arg(long, default_value = "X")]
    pub first: Mark,

    /// Name for the X player
    #[arg(long)]
    pub x_name: Option<String>,

    /// Name for the O player
    #[arg(long)]
    pub o_name: Option<String>,
}

impl PlayArgs {
    pub fn to_config(&self) -> SessionConfig {
        let mut config = SessionConfig::new(self.mode.into())
            .with_computer_mark(self.computer)
            .with_first_player(self.first);
        if let Some(name) = &self.x_name {
            config.x_name = name.clone();
        }
        if let Some(name) = &self.o_name {
            config.o_name = name.clone();
        }
        config
    }
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let mut session = Session::new(args.to_config())?;
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run(&mut session, stdin.lock(), &mut stdout)
}

/// Parse "row col"
pub fn parse_move(line: &str) -> std::result::Result<(usize, usize), &'static str> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() != 2 {
        return Err("Please enter row and column separated by space (e.g., '1 2')");
    }
    match (parts[0].parse(), parts[1].parse()) {
        (Ok(row), Ok(col)) => Ok((row, col)),
        _ => Err("Please enter valid numbers for row and column."),
    }
}

/// Drive a session from line-based input until the input ends or the player
/// declines another game.
pub fn run<R: BufRead, W: Write>(session: &mut Session, input: R, out: &mut W) -> Result<()> {
    writeln!(out, "=== Welcome to Tic-Tac-Toe ===")?;
    writeln!(out, "Enter moves as 'row col' (0-2 for both)")?;
    let mut lines = input.lines();

    loop {
        if session.game().is_over() {
            write!(out, "\n{}", render_board(session.board()))?;
            announce_result(session, out)?;
            print_stats(session, out)?;

            write!(out, "Play again? (y/n): ")?;
            out.flush()?;
            let Some(line) = lines.next() else { break };
            if line?.trim().eq_ignore_ascii_case("y") {
                session.reset()?;
                continue;
            }
            break;
        }

        if let Some(result) = session.make_computer_move()? {
            let name = &session.player(result.mark).name;
            writeln!(
                out,
                "{name} ({}) plays row {} col {}",
                result.mark, result.position.row, result.position.col
            )?;
            continue;
        }

        write!(out, "\n{}", render_board(session.board()))?;
        let player = session.current_player();
        write!(
            out,
            "{} ({}), enter your move (row col): ",
            player.name, player.mark
        )?;
        out.flush()?;

        let Some(line) = lines.next() else { break };
        match parse_move(&line?) {
            Err(message) => writeln!(out, "{message}")?,
            Ok((row, col)) => {
                if let Err(err) = session.play_move(row, col) {
                    writeln!(out, "{err}")?;
                }
            }
        }
    }

    writeln!(out, "Thanks for playing!")?;
    Ok(())
}

fn announce_result<W: Write>(session: &Session, out: &mut W) -> Result<()> {
    match session.game().outcome() {
        Outcome::Win(mark) => writeln!(out, "{} wins!", session.player(mark).name)?,
        Outcome::Draw => writeln!(out, "It's a draw!")?,
        Outcome::Undetermined => {}
    }
    Ok(())
}

fn print_stats<W: Write>(session: &Session, out: &mut W) -> Result<()> {
    writeln!(out, "\n=== Game Statistics ===")?;
    for player in session.player_stats() {
        writeln!(out, "{}: {} wins", player.name, player.wins)?;
    }
    writeln!(out)?;
    Ok(())
}
