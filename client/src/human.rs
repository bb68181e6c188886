use anyhow::{anyhow, Result};
use std::io::{self, BufRead, StdinLock, Stdout, Write};

use engine::{Game, Player, StateOf};

/// Shows every legal move on the console and reads the chosen index.
pub struct HumanPlayer<R, W> {
    name: String,
    input: R,
    output: W,
}

impl HumanPlayer<StdinLock<'static>, Stdout> {
    pub fn stdio(name: String) -> Self {
        Self::new(name, io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    pub fn new(name: String, input: R, output: W) -> Self {
        Self { name, input, output }
    }
}

impl<G: Game, R: BufRead, W: Write> Player<G> for HumanPlayer<R, W> {
    fn name(&self) -> &str {
        &self.name
    }

    fn select_move(&mut self, game: &G, state: &StateOf<G>, moves: &[StateOf<G>]) -> Result<usize> {
        if moves.is_empty() {
            return Err(anyhow!("{} was asked to move without any legal moves", self.name));
        }

        writeln!(self.output, "{} to move:\n{}", self.name, game.display(state))?;

        for (i, next_state) in moves.iter().enumerate() {
            write!(self.output, "~~MOVE: {}~~\n{}", i, game.display(next_state))?;
        }

        loop {
            write!(self.output, "Pick a move (0-{}): ", moves.len() - 1)?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(anyhow!("Input closed before {} chose a move", self.name));
            }

            match line.trim().parse::<usize>() {
                Ok(index) if index < moves.len() => return Ok(index),
                _ => writeln!(self.output, "'{}' is not a valid move", line.trim())?,
            }
        }
    }
}
