//! Interactive session
//!
//! Runs the whole program as a small state machine:
//! `ResolvingInput -> Loaded -> MenuLoop -> Exited`.
//!
//! - console: token and line input, text output over any reader/writer
//! - resolve: picks the input file (argument, prompt, or default)
//! - menu: menu entries and selection parsing

pub mod console;
pub mod menu;
pub mod resolve;

use std::io::{self, BufRead, Write};
use std::ops::ControlFlow;
use std::path::PathBuf;

use tracing::{debug, info};

use crate::core::config::Settings;
use crate::core::error::Result;
use crate::core::loader::load_and_snapshot;
use crate::core::model::FrequencyTable;
use crate::core::render;
use console::Console;
use menu::{MenuChoice, MENU_TITLE};
use resolve::resolve_input;

/// Where the session currently is; each state owns what the next one needs
#[derive(Debug)]
pub enum SessionState {
    ResolvingInput,
    Loaded(PathBuf),
    MenuLoop(FrequencyTable),
    Exited,
}

/// A menu action; `Break` ends the menu loop
type Action<R, W> = fn(&mut Console<R, W>, &FrequencyTable) -> io::Result<ControlFlow<()>>;

/// Action bound to each menu choice
fn dispatch<R: BufRead, W: Write>(choice: MenuChoice) -> Action<R, W> {
    match choice {
        MenuChoice::Search => search_item::<R, W>,
        MenuChoice::PrintAll => print_all::<R, W>,
        MenuChoice::Histogram => print_histogram::<R, W>,
        MenuChoice::Exit => exit::<R, W>,
    }
}

fn search_item<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    table: &FrequencyTable,
) -> io::Result<ControlFlow<()>> {
    console.print("Enter item to search: ")?;
    let Some(query) = console.read_token()? else {
        return Ok(ControlFlow::Break(()));
    };
    console.print(&render::item_frequency(table, &query))?;
    Ok(ControlFlow::Continue(()))
}

fn print_all<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    table: &FrequencyTable,
) -> io::Result<ControlFlow<()>> {
    console.print(&render::all_frequencies(table))?;
    Ok(ControlFlow::Continue(()))
}

fn print_histogram<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    table: &FrequencyTable,
) -> io::Result<ControlFlow<()>> {
    console.print(&render::histogram(table))?;
    Ok(ControlFlow::Continue(()))
}

fn exit<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    _table: &FrequencyTable,
) -> io::Result<ControlFlow<()>> {
    console.println("Exiting...")?;
    Ok(ControlFlow::Break(()))
}

pub struct Session<R, W> {
    console: Console<R, W>,
    settings: Settings,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, settings: Settings) -> Self {
        Self {
            console: Console::new(input, output),
            settings,
        }
    }

    /// Drive the session until the user exits.
    ///
    /// Fails only when the resolved input cannot be loaded or the console
    /// breaks.
    pub fn run(mut self) -> Result<()> {
        let mut state = SessionState::ResolvingInput;
        loop {
            state = match state {
                SessionState::ResolvingInput => {
                    let resolution = resolve_input(
                        &mut self.console,
                        self.settings.input.as_deref(),
                        &self.settings.default_input,
                    )?;
                    info!(path = %resolution.path().display(), "input resolved");
                    SessionState::Loaded(resolution.into_path())
                }
                SessionState::Loaded(path) => {
                    let table = load_and_snapshot(&path, self.settings.snapshot.as_deref())?;
                    SessionState::MenuLoop(table)
                }
                SessionState::MenuLoop(table) => {
                    self.menu_loop(&table)?;
                    SessionState::Exited
                }
                SessionState::Exited => return Ok(()),
            };
        }
    }

    fn menu_loop(&mut self, table: &FrequencyTable) -> io::Result<()> {
        let options = menu::option_lines();
        loop {
            self.console.print(&render::menu(MENU_TITLE, &options))?;
            self.console.print("Enter choice: ")?;

            let Some(selection) = self.console.read_token()? else {
                debug!("input closed at menu, exiting");
                return Ok(());
            };

            let choice = match selection.parse::<MenuChoice>() {
                Ok(choice) => choice,
                Err(e) => {
                    debug!(input = %selection, "rejected menu selection");
                    self.console.println(&e.to_string())?;
                    self.console.discard_line();
                    continue;
                }
            };

            if dispatch(choice)(&mut self.console, table)?.is_break() {
                return Ok(());
            }
        }
    }
}
