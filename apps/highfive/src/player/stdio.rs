//! A human at a terminal, or anything else speaking lines over a reader and
//! a writer.

use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};
use std::sync::Mutex;

use super::{Player, PlayerError};
use crate::actions::{ActionType, Request};
use crate::domain::{Bid, Seat, State, Suit};

pub struct StdioPlayer<R, W> {
    name: String,
    io: Mutex<(R, W)>,
}

impl StdioPlayer<BufReader<Stdin>, Stdout> {
    /// A player reading the process's stdin and writing to stdout.
    pub fn stdin(name: impl Into<String>) -> Self {
        Self::new(name, BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R: BufRead + Send, W: Write + Send> StdioPlayer<R, W> {
    pub fn new(name: impl Into<String>, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            io: Mutex::new((input, output)),
        }
    }

    /// Give back the reader and writer, e.g. to inspect what was printed.
    pub fn into_inner(self) -> Result<(R, W), PlayerError> {
        self.io
            .into_inner()
            .map_err(|e| PlayerError::Internal(format!("terminal lock poisoned: {e}")))
    }
}

/// Parse a line of comma- or space-separated indices and check it against
/// the request.
pub fn parse_selection(line: &str, request: &Request) -> Result<Vec<usize>, String> {
    let selection = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .map(|t| t.parse::<usize>().map_err(|_| format!("{t:?} is not a number")))
        .collect::<Result<Vec<usize>, String>>()?;
    if selection.len() != request.expects() {
        return Err(format!(
            "choose exactly {} option(s), got {}",
            request.expects(),
            selection.len()
        ));
    }
    let options = request.options();
    if let Some(bad) = selection.iter().find(|s| !options.contains(s)) {
        return Err(format!("{bad} is not one of {options:?}"));
    }
    let mut unique = selection.clone();
    unique.sort_unstable();
    unique.dedup();
    if unique.len() != selection.len() {
        return Err("each option may only be chosen once".to_string());
    }
    Ok(selection)
}

fn describe(state: &State, request: &Request, seat: Seat, out: &mut impl Write) -> io::Result<()> {
    writeln!(out)?;
    write!(out, "{state}")?;
    if let Some(hand) = state.hand(seat) {
        write!(out, "{seat} holds:")?;
        for (i, card) in hand.iter().enumerate() {
            write!(out, " {i}:{card}")?;
        }
        writeln!(out)?;
    }
    match request {
        Request::Bid { options, .. } => {
            let labels: Vec<String> = options
                .iter()
                .filter_map(|&i| Bid::from_index(i).map(|b| format!("{i}={b}")))
                .collect();
            writeln!(out, "Bids: {}", labels.join(" "))?;
        }
        Request::ChooseTrump { .. } => {
            let labels: Vec<String> = Suit::ALL
                .iter()
                .enumerate()
                .map(|(i, s)| format!("{i}={s}"))
                .collect();
            writeln!(out, "Trump: {}", labels.join(" "))?;
        }
        _ => {}
    }
    Ok(())
}

impl<R: BufRead + Send, W: Write + Send> Player for StdioPlayer<R, W> {
    fn name(&self) -> &str {
        &self.name
    }

    fn play(&self, state: &State, request: &Request) -> Result<Vec<usize>, PlayerError> {
        if !request.takes_input() {
            return Ok(request.options());
        }
        let seat = request
            .seat()
            .ok_or_else(|| PlayerError::Internal(format!("{request} names no seat")))?;

        let mut guard = self
            .io
            .lock()
            .map_err(|e| PlayerError::Internal(format!("terminal lock poisoned: {e}")))?;
        let (input, output) = &mut *guard;
        describe(state, request, seat, output)?;

        loop {
            write!(output, "{request} > ")?;
            output.flush()?;
            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                return Err(PlayerError::Internal("input closed".to_string()));
            }
            match parse_selection(&line, request) {
                Ok(selection) => return Ok(selection),
                Err(msg) => writeln!(output, "{msg}, try again")?,
            }
        }
    }

    fn update(&self, state: &State, completed: ActionType) {
        if completed != ActionType::Score {
            return;
        }
        if let Ok(mut guard) = self.io.lock() {
            let (_, output) = &mut *guard;
            // Display only; a broken terminal shows up on the next prompt
            let _ = writeln!(output, "Round {} scored: {:?}", state.rounds, state.score);
        }
    }
}
