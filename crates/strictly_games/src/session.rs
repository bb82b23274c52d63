//! Interactive play loop over any line reader and writer.

use crate::input::{self, HELP, Input};
use anyhow::Result;
use std::io::{BufRead, Write};
use strictly_tictactoe::{Controller, GameStatus, MoveOutcome};
use tracing::{debug, instrument};

/// Drives a controller from text commands until `quit` or end of input.
pub struct Session<R, W> {
    game: Controller,
    reader: R,
    writer: W,
    json: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session around an existing game.
    pub fn new(game: Controller, reader: R, writer: W, json: bool) -> Self {
        Self {
            game,
            reader,
            writer,
            json,
        }
    }

    /// Runs the loop, returning the final game.
    #[instrument(skip(self))]
    pub fn run(mut self) -> Result<Controller> {
        self.render()?;
        let mut line = String::new();
        loop {
            write!(self.writer, "> ")?;
            self.writer.flush()?;

            line.clear();
            if self.reader.read_line(&mut line)? == 0 {
                break;
            }

            match input::parse(&line) {
                Ok(Input::Quit) => break,
                Ok(command) => self.handle(command)?,
                Err(message) => writeln!(self.writer, "{message}")?,
            }
        }
        Ok(self.game)
    }

    fn handle(&mut self, command: Input) -> Result<()> {
        debug!(?command, "Handling command");
        match command {
            Input::Move(row, col) => match self.game.request_move(row, col) {
                MoveOutcome::Applied(_) => self.render()?,
                MoveOutcome::Rejected(err) => writeln!(self.writer, "{err}")?,
            },
            Input::Undo => {
                if self.game.undo() {
                    self.render()?;
                } else {
                    writeln!(self.writer, "Nothing to undo")?;
                }
            }
            Input::Hint => match self.game.hint() {
                Some(position) => writeln!(self.writer, "Hint: {position}")?,
                None if !self.game.board_snapshot().size().supports_search() => {
                    writeln!(self.writer, "Hints are only available for 3x3 board")?
                }
                None => writeln!(self.writer, "No move to suggest")?,
            },
            Input::NewGame => {
                self.game.reset(None);
                self.render()?;
            }
            Input::Size(size) => {
                self.game.reset(Some(size));
                self.render()?;
            }
            Input::Mode(mode) => {
                self.game.set_mode(mode);
                writeln!(self.writer, "Mode: {}", mode.label())?;
                self.render()?;
            }
            Input::Board => self.render()?,
            Input::Help => writeln!(self.writer, "{HELP}")?,
            Input::Quit => {}
        }
        Ok(())
    }

    fn render(&mut self) -> Result<()> {
        let board = self.game.board_snapshot();
        if self.json {
            let snapshot = serde_json::json!({
                "board": board,
                "text": board.to_string(),
                "status": self.game.current_status(),
                "current_player": self.game.current_player(),
            });
            writeln!(self.writer, "{snapshot}")?;
            return Ok(());
        }

        writeln!(self.writer, "{}", board.display())?;
        match self.game.current_status() {
            GameStatus::InProgress => {
                writeln!(self.writer, "Player {}'s turn", self.game.current_player())?
            }
            status => writeln!(self.writer, "Game Over: {status}")?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_tictactoe::{BoardSize, GameMode, Player};

    fn run(game: Controller, script: &str) -> (Controller, String) {
        let mut out = Vec::new();
        let game = Session::new(game, script.as_bytes(), &mut out, false)
            .run()
            .unwrap();
        (game, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_two_player_win() {
        let game = Controller::with_seed(BoardSize::Three, GameMode::TwoPlayer, 0);
        let (game, out) = run(game, "0 0\n1 0\n0 1\n1 1\n0 2\n");
        assert_eq!(game.current_status(), GameStatus::Won(Player::X));
        assert!(out.contains("Game Over: X wins!"));
    }

    #[test]
    fn test_rejections_are_reported() {
        let game = Controller::with_seed(BoardSize::Three, GameMode::TwoPlayer, 0);
        let (game, out) = run(game, "0 0\n0 0\n9 9\nundo\nundo\nquit\n0 1\n");
        assert!(out.contains("already occupied"));
        assert!(out.contains("off the 3x3 board"));
        assert!(out.contains("Nothing to undo"));
        assert_eq!(game.history_len(), 0);
    }

    #[test]
    fn test_hint_and_size_change() {
        let game = Controller::with_seed(BoardSize::Three, GameMode::TwoPlayer, 0);
        let (game, out) = run(game, "hint\nsize 4\nhint\n");
        assert!(out.contains("Hint: (0, 0)"));
        assert!(out.contains("only available for 3x3"));
        assert_eq!(game.board_snapshot().size(), BoardSize::Four);
    }

    #[test]
    fn test_json_output() {
        let game = Controller::with_seed(BoardSize::Three, GameMode::SinglePlayerVsAi, 0);
        let mut out = Vec::new();
        Session::new(game, "0 0\n".as_bytes(), &mut out, true)
            .run()
            .unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains(r#""text":"X../.O./...""#));
    }
}
