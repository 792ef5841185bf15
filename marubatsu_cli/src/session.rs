//! 端末で進行する1対局のセッション。

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};
use marubatsu_core::ai::random;
use marubatsu_core::ai::types::Ai;
use marubatsu_core::engine;
use std::io::{self, BufRead, ErrorKind, Write};
use std::thread;
use std::time::Duration;

/// 1手を選ぶ主体。
#[derive(Debug)]
pub enum Controller {
    Human,
    Random(random::Agent),
}

impl Controller {
    fn is_human(&self) -> bool {
        matches!(self, Self::Human)
    }

    fn select_move(&mut self, board: engine::Board) -> Option<engine::Slot> {
        match self {
            Self::Human => None,
            Self::Random(agent) => agent.select_move(board),
        }
    }
}

/// 1対局を進行するセッション。
///
/// 入出力を `BufRead` / `Write` として注入するので、テストでは
/// スクリプト入力とバッファ出力で決定的に駆動できる。
/// ループは終局時に `Status` を返して終わる（プロセスは終了しない）。
#[derive(Debug)]
pub struct Session<R, W> {
    /// ×側（慣例としてコンピュータ）。
    cross: Controller,
    /// コンピュータの1手前の待ち時間。
    delay: Duration,
    game: engine::Game,
    input: R,
    /// 直前にコンピュータが選んだ手（表示用）。
    last_computer_move: Option<engine::Slot>,
    /// ○側（慣例として人間）。
    nought: Controller,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(
        input: R,
        output: W,
        cross: Controller,
        nought: Controller,
        delay: Duration,
        first: engine::Mark,
    ) -> Self {
        Self {
            cross,
            delay,
            game: engine::Game::from_board(engine::Board::empty(), first),
            input,
            last_computer_move: None,
            nought,
            output,
        }
    }

    /// 対局を終局まで進め、最終状態を返す。
    ///
    /// # Errors
    ///
    /// 入出力に失敗した場合（対局途中で入力が閉じられた場合を含む）、
    /// `io::Error` を返す。
    pub fn run(&mut self) -> io::Result<engine::GameStatus> {
        // コンピュータが先手のときは中央（手5）で固定開局する。
        if !self.controller_for(self.game.turn()).is_human() {
            self.play_forced_opener();
        }

        loop {
            self.render()?;

            if self.game.is_game_over() {
                return Ok(self.game.status());
            }

            let turn = self.game.turn();
            if self.controller_for(turn).is_human() {
                self.human_turn()?;
            } else {
                self.computer_turn();
            }
        }
    }

    fn computer_turn(&mut self) {
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }

        let board = self.game.board();
        let turn = self.game.turn();
        let slot = match self.controller_for_mut(turn).select_move(board) {
            Some(value) => value,
            // 盤面が満杯なら次の周回で終局として扱われる。
            None => return,
        };

        if self.game.play(slot).is_ok() {
            self.last_computer_move = Some(slot);
        }
    }

    fn controller_for(&self, mark: engine::Mark) -> &Controller {
        match mark {
            engine::Mark::Cross => &self.cross,
            engine::Mark::Nought => &self.nought,
            _ => &self.cross,
        }
    }

    fn controller_for_mut(&mut self, mark: engine::Mark) -> &mut Controller {
        match mark {
            engine::Mark::Cross => &mut self.cross,
            engine::Mark::Nought => &mut self.nought,
            _ => &mut self.cross,
        }
    }

    /// 入力が受理されるまで促し続ける。
    fn human_turn(&mut self) -> io::Result<()> {
        loop {
            write!(self.output, "Enter your move (1-9):")?;
            self.output.flush()?;

            let mut line = String::new();
            let read = self.input.read_line(&mut line)?;
            if read == 0 {
                return Err(io::Error::new(
                    ErrorKind::UnexpectedEof,
                    "input closed before the game ended",
                ));
            }

            let slot = match line.parse::<engine::Slot>() {
                Ok(value) => value,
                Err(err) => {
                    writeln!(self.output, "{err}")?;
                    continue;
                }
            };

            match self.game.play(slot) {
                Ok(_status) => return Ok(()),
                Err(err) => writeln!(self.output, "{err}")?,
            }
        }
    }

    fn play_forced_opener(&mut self) {
        let slot = match engine::Slot::from_number(5) {
            Ok(value) => value,
            Err(_err) => return,
        };

        if self.game.play(slot).is_ok() {
            self.last_computer_move = Some(slot);
        }
    }

    fn render(&mut self) -> io::Result<()> {
        queue!(self.output, Clear(ClearType::All), MoveTo(0, 0))?;
        render_frame(&mut self.output, self.game.board())?;

        if let Some(slot) = self.last_computer_move {
            writeln!(self.output, "Your opponent chose: {}", slot.number())?;
        }

        self.output.flush()
    }
}

/// マスに表示する文字（印、または空きマスなら手番号）。
fn cell_char(board: engine::Board, slot: engine::Slot) -> char {
    match board.mark_at(slot) {
        Some(mark) => mark.as_char(),
        None => char::from_digit(u32::from(slot.number()), 10).unwrap_or(' '),
    }
}

/// 3x3 の枠を描画する。
fn render_frame<W: Write>(output: &mut W, board: engine::Board) -> io::Result<()> {
    for row in 0_u8..3 {
        writeln!(output, "+-------+-------+-------+")?;
        writeln!(output, "|       |       |       |")?;

        for col in 0_u8..3 {
            let slot = match engine::Slot::from_row_col(row, col) {
                Some(value) => value,
                None => continue,
            };
            write!(output, "|   {}   ", cell_char(board, slot))?;
        }

        writeln!(output, "|")?;
        writeln!(output, "|       |       |       |")?;
    }

    writeln!(output, "+-------+-------+-------+")
}
