//! Interactive menu driving a [`CallCenter`].
//!
//! The menu is generic over its input and output so it can run against the
//! terminal or against in-memory buffers.

use std::io::{BufRead, Write};

use callq_error::Result;
use tracing::debug;

use crate::center::CallCenter;

/// Options offered by the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    /// Receive a new call
    ReceiveCall,
    /// Answer the call that has waited longest
    AnswerCall,
    /// Show the answered-call stack
    ShowStack,
    /// Show the waiting-call queue
    ShowQueue,
    /// Leave the menu
    Quit,
}

impl MenuOption {
    /// Parses a menu choice typed by the operator (`1` to `5`).
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().parse::<u8>().ok()? {
            1 => Some(Self::ReceiveCall),
            2 => Some(Self::AnswerCall),
            3 => Some(Self::ShowStack),
            4 => Some(Self::ShowQueue),
            5 => Some(Self::Quit),
            _ => None,
        }
    }
}

const MENU_TEXT: &str = "1. Receive a new call\n\
                         2. Answer a call\n\
                         3. Current state of the stack   answered calls\n\
                         4. Current state of the queue   calls to be answered\n\
                         5. Quit\n";

/// Line-oriented menu loop over a call center.
pub struct Menu<R, W> {
    input:        R,
    output:       W,
    center:       CallCenter,
    show_options: bool,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    /// Creates a menu reading from `input` and writing to `output`.
    pub fn new(input: R, output: W, center: CallCenter) -> Self {
        Self {
            input,
            output,
            center,
            show_options: true,
        }
    }

    /// Sets whether the option list is printed before every prompt.
    #[must_use]
    pub fn show_options(mut self, show: bool) -> Self {
        self.show_options = show;
        self
    }

    /// Runs until the operator quits or the input ends.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if reading or writing fails, or an allocation
    /// error if a call cannot be queued.
    pub fn run(&mut self) -> Result<()> {
        while self.step()? {}
        Ok(())
    }

    /// Handles one menu choice. Returns `false` once the loop should stop.
    ///
    /// # Errors
    ///
    /// See [`Menu::run`].
    pub fn step(&mut self) -> Result<bool> {
        if self.show_options {
            self.output.write_all(MENU_TEXT.as_bytes())?;
        }
        write!(self.output, "Choose an option: ")?;
        self.output.flush()?;

        let Some(line) = self.read_line()? else {
            debug!("input closed, leaving menu");
            writeln!(self.output)?;
            return Ok(false);
        };

        match MenuOption::parse(&line) {
            Some(MenuOption::ReceiveCall) => self.receive_call(),
            Some(MenuOption::AnswerCall) => self.answer_call(),
            Some(MenuOption::ShowStack) => self.display_stack(),
            Some(MenuOption::ShowQueue) => self.display_queue(),
            Some(MenuOption::Quit) => {
                writeln!(self.output, "Quitting the program.")?;
                Ok(false)
            },
            None => {
                debug!(input = line.trim(), "invalid menu option");
                writeln!(self.output, "Invalid option. Please choose again.")?;
                Ok(true)
            },
        }
    }

    /// The call center driven by this menu.
    pub fn center(&self) -> &CallCenter {
        &self.center
    }

    /// Consumes the menu, returning its call center and output.
    pub fn into_parts(self) -> (CallCenter, W) {
        (self.center, self.output)
    }

    fn receive_call(&mut self) -> Result<bool> {
        write!(self.output, "Enter caller's name: ")?;
        self.output.flush()?;
        let Some(name) = self.read_line()? else {
            return Ok(false);
        };

        write!(self.output, "Enter call reason: ")?;
        self.output.flush()?;
        let Some(reason) = self.read_line()? else {
            return Ok(false);
        };

        self.center.receive_call(&name, &reason)?;
        writeln!(
            self.output,
            "The call has been successfully added to the queue!"
        )?;
        Ok(true)
    }

    fn answer_call(&mut self) -> Result<bool> {
        match self.center.answer_call() {
            Some(call) => writeln!(
                self.output,
                "The following call has been answered and added to the stack!\n{call}"
            )?,
            None => writeln!(
                self.output,
                "No more calls need to be answered at the moment!"
            )?,
        }
        Ok(true)
    }

    fn display_stack(&mut self) -> Result<bool> {
        let status = self.center.stack_status();
        match status.last {
            Some(call) => writeln!(
                self.output,
                "Number of calls answered: {}\nDetails of the last call answered:\n{call}",
                status.answered
            )?,
            None => writeln!(self.output, "No calls have been answered yet!")?,
        }
        Ok(true)
    }

    fn display_queue(&mut self) -> Result<bool> {
        let status = self.center.queue_status();
        match status.first {
            Some(call) => writeln!(
                self.output,
                "Number of calls to be answered: {}\nDetails of the first call to be answered:\n{call}",
                status.waiting
            )?,
            None => writeln!(self.output, "Number of calls to be answered: 0")?,
        }
        Ok(true)
    }

    /// Reads one line without its line break; `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}
