//! Interactive player reading move keys from the terminal.

use std::io::{self, BufRead, IsTerminal, Write};

use dialoguer::Input;
use footsies_logic::{Catalog, FootsiesError, Move, Player, PlayerState};

pub struct ConsolePlayer {
    name: String,
    catalog: &'static Catalog,
}

impl ConsolePlayer {
    pub fn new(name: impl Into<String>, catalog: &'static Catalog) -> Self {
        Self { name: name.into(), catalog }
    }
}

/// Lines shown before the prompt
pub fn briefing(name: &str, state: &PlayerState) -> Vec<String> {
    let mut lines = Vec::with_capacity(4);

    match state.turns_left {
        Some(left) => lines.push(format!("Your turn, {}! {} turns left.", name, left)),
        None => lines.push(format!("Your turn, {}!", name)),
    }
    if let Some(last) = state.opponent_last_move {
        lines.push(format!("Your opponent last chose {}.", last));
    }
    lines.push(format!(
        "You have {} blocks left{}.",
        state.own_blocks,
        if state.own_has_attack { " and have landed an attack" } else { "" }
    ));
    lines.push(format!(
        "Your opponent has {} blocks left{}.",
        state.opponent_blocks,
        if state.opponent_has_attack { " and has landed an attack" } else { "" }
    ));

    lines
}

impl ConsolePlayer {
    fn prompt(&self) -> String {
        format!("Choose your move ({})", self.catalog.describe())
    }

    fn ask_terminal(&self) -> Result<Move, FootsiesError> {
        let catalog = self.catalog;
        // dialoguer re-prompts until the validator accepts the key
        let key: String = Input::new()
            .with_prompt(self.prompt())
            .validate_with(|input: &String| -> Result<(), String> {
                catalog.lookup(input).map(|_| ()).map_err(|e| e.to_string())
            })
            .interact_text()
            .map_err(|e| FootsiesError::player(&self.name, e.to_string()))?;

        catalog.lookup(&key)
    }
}

/// Line-by-line key reading for non-terminal input.
///
/// Unknown keys re-prompt; end of input is a player failure.
pub fn read_move<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    name: &str,
    catalog: &Catalog,
    prompt: &str,
) -> Result<Move, FootsiesError> {
    let io_err = |e: io::Error| FootsiesError::player(name, e.to_string());
    let mut line = String::new();
    loop {
        write!(output, "{}: ", prompt).map_err(io_err)?;
        output.flush().map_err(io_err)?;

        line.clear();
        if input.read_line(&mut line).map_err(io_err)? == 0 {
            return Err(FootsiesError::player(name, "input closed before a move was chosen"));
        }
        match catalog.lookup(&line) {
            Ok(m) => return Ok(m),
            Err(e) => writeln!(output, "{}", e).map_err(io_err)?,
        }
    }
}

impl Player for ConsolePlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn act(&mut self, state: &PlayerState) -> Result<Move, FootsiesError> {
        // stdout is reserved for the match result
        for line in briefing(&self.name, state) {
            eprintln!("{}", line);
        }

        if io::stdin().is_terminal() {
            self.ask_terminal()
        } else {
            let prompt = self.prompt();
            read_move(&mut io::stdin().lock(), &mut io::stderr(), &self.name, self.catalog, &prompt)
        }
    }
}
