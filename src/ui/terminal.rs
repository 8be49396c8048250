//! Line Front-End
//!
//! A line-oriented stand-in for the editor window. Plain lines are appended
//! to the buffer, lines starting with `:` are commands, and dialogs are
//! answered on the next input line.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};

use super::{
    Dialogs, Event, EventSource, FileFilter, MenuAction, MenuBar, Response, StatusSurface,
    TextSurface,
};

const HELP: &str = "\
Commands:
  :new            start a new document
  :open           open a file
  :save           save to the current file
  :saveas         save to a new file
  :quit           close the editor
  :clear          empty the buffer
  :del            remove the last line
  :print          show the buffer (> marks the caret line)
  :status         show file name and modified marker
  :menu           show which menu items are enabled
  ::text          append a line that starts with ':'
Any other line is appended to the buffer.";

/// Terminal implementation of every front-end collaborator
pub struct LineFrontend<R, W> {
    input: R,
    output: W,
    buffer: String,
    caret: usize,
    editable: bool,
    filename: String,
    marker: String,
    save_enabled: bool,
    save_as_enabled: bool,
}

impl<R: BufRead, W: Write> LineFrontend<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            buffer: String::new(),
            caret: 0,
            editable: false,
            filename: String::new(),
            marker: String::new(),
            save_enabled: false,
            save_as_enabled: false,
        }
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// Status line as shown by `:status`
    pub fn status_line(&self) -> String {
        let name = if self.filename.is_empty() {
            "(no file)"
        } else {
            self.filename.as_str()
        };
        format!("[{}]{}", name, self.marker)
    }

    fn say(&mut self, text: &str) {
        if let Err(e) = writeln!(self.output, "{}", text).and_then(|_| self.output.flush()) {
            log::warn!("Failed to write to terminal: {}", e);
        }
    }

    fn ask(&mut self, prompt: &str) -> Option<String> {
        if let Err(e) = write!(self.output, "{}", prompt).and_then(|_| self.output.flush()) {
            log::warn!("Failed to write to terminal: {}", e);
        }
        match self.read_line() {
            Ok(line) => line,
            Err(e) => {
                log::warn!("Failed to read answer: {:#}", e);
                None
            }
        }
    }

    /// Next input line without its terminator; `None` at end of input
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("failed to read from terminal")?;
        if read == 0 {
            return Ok(None);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(Some(line))
    }

    fn append_line(&mut self, line: &str) {
        if !self.buffer.is_empty() && !self.buffer.ends_with('\n') {
            self.buffer.push('\n');
        }
        self.buffer.push_str(line);
        self.buffer.push('\n');
        self.caret = self.buffer.len();
    }

    fn delete_last_line(&mut self) -> bool {
        if self.buffer.is_empty() {
            return false;
        }
        let body = self.buffer.strip_suffix('\n').unwrap_or(&self.buffer);
        let keep = body.rfind('\n').map(|i| i + 1).unwrap_or(0);
        self.buffer.truncate(keep);
        self.caret = self.buffer.len();
        true
    }

    /// Numbered listing with `>` on the caret's line
    fn print_buffer(&mut self) {
        let before = self.buffer.get(..self.caret).unwrap_or(&self.buffer);
        let last = self.buffer.lines().count().saturating_sub(1);
        let caret_line = before.matches('\n').count().min(last);
        let listing: Vec<String> = self
            .buffer
            .lines()
            .enumerate()
            .map(|(i, line)| {
                let mark = if i == caret_line { '>' } else { ' ' };
                format!("{}{:>3} | {}", mark, i + 1, line)
            })
            .collect();
        if listing.is_empty() {
            self.say("(empty)");
        } else {
            self.say(&listing.join("\n"));
        }
    }

    /// Apply an edit if the buffer accepts input
    fn edit(&mut self, apply: impl FnOnce(&mut Self) -> bool) -> Option<Event> {
        if !self.editable {
            self.say("No document open; use :new or :open");
            return None;
        }
        apply(self).then_some(Event::TextChanged)
    }

    /// Interpret one input line; `None` when it produced no event
    fn interpret(&mut self, line: &str) -> Option<Event> {
        if let Some(literal) = line.strip_prefix("::") {
            let literal = format!(":{}", literal);
            return self.edit(|this| {
                this.append_line(&literal);
                true
            });
        }

        let Some(command) = line.strip_prefix(':') else {
            return self.edit(|this| {
                this.append_line(line);
                true
            });
        };

        match command.trim() {
            "new" => Some(Event::Menu(MenuAction::New)),
            "open" => Some(Event::Menu(MenuAction::Open)),
            "save" => Some(Event::Menu(MenuAction::Save)),
            "saveas" => Some(Event::Menu(MenuAction::SaveAs)),
            "menu" => Some(Event::MenuOpened),
            "quit" | "q" => Some(Event::CloseRequested),
            "clear" => self.edit(|this| {
                let changed = !this.buffer.is_empty();
                this.buffer.clear();
                this.caret = 0;
                changed
            }),
            "del" => self.edit(|this| this.delete_last_line()),
            "print" => {
                self.print_buffer();
                None
            }
            "status" => {
                let status = self.status_line();
                self.say(&status);
                None
            }
            "help" => {
                self.say(HELP);
                None
            }
            other => {
                self.say(&format!("Unknown command :{} (try :help)", other));
                None
            }
        }
    }
}

impl<R: BufRead, W: Write> EventSource for LineFrontend<R, W> {
    fn next_event(&mut self) -> Result<Event> {
        loop {
            let Some(line) = self.read_line()? else {
                return Ok(Event::InputClosed);
            };
            if let Some(event) = self.interpret(&line) {
                return Ok(event);
            }
        }
    }

    fn show_menu(&mut self) {
        let state = |enabled: bool| if enabled { "enabled" } else { "disabled" };
        let report = format!(
            "New: enabled, Open: enabled, Save: {}, Save As: {}",
            state(self.save_enabled),
            state(self.save_as_enabled)
        );
        self.say(&report);
    }

    fn action_refused(&mut self, action: MenuAction) {
        self.say(&format!("{} is not available right now", action.label()));
    }
}

impl<R: BufRead, W: Write> Dialogs for LineFrontend<R, W> {
    fn confirm(&mut self, message: &str, title: &str) -> Response {
        let prompt = format!("{}: {} [y]es/[n]o/[c]ancel ", title, message);
        match self.ask(&prompt).as_deref().map(str::trim) {
            Some("y") | Some("yes") => Response::Affirm,
            Some("n") | Some("no") => Response::Decline,
            _ => Response::Cancel,
        }
    }

    fn choose_open_path(&mut self, filter: &FileFilter) -> Option<PathBuf> {
        let patterns: Vec<String> = filter
            .extensions
            .iter()
            .map(|ext| format!("*.{}", ext))
            .collect();
        let prompt = format!("Open file ({}: {}): ", filter.description, patterns.join(", "));
        let answer = self.ask(&prompt)?;
        let answer = answer.trim();
        if answer.is_empty() {
            return None;
        }

        let path = PathBuf::from(answer);
        if !filter.matches(&path) {
            self.say(&format!("Not one of the {}: {}", filter.description, answer));
            return None;
        }
        Some(path)
    }

    fn choose_save_path(&mut self, _filter: &FileFilter) -> Option<PathBuf> {
        let answer = self.ask("Save as: ")?;
        let answer = answer.trim();
        if answer.is_empty() {
            return None;
        }
        Some(PathBuf::from(answer))
    }

    fn show_error(&mut self, message: &str) {
        self.say(&format!("error: {}", message));
    }
}

impl<R: BufRead, W: Write> TextSurface for LineFrontend<R, W> {
    fn text(&self) -> String {
        self.buffer.clone()
    }

    fn set_text(&mut self, text: &str) {
        self.buffer = text.to_string();
        self.caret = self.buffer.len();
    }

    fn set_editable(&mut self, editable: bool) {
        self.editable = editable;
    }

    fn move_caret_to_start(&mut self) {
        self.caret = 0;
    }
}

impl<R: BufRead, W: Write> StatusSurface for LineFrontend<R, W> {
    fn set_title(&mut self, title: &str) {
        self.say(&format!("== {} ==", title));
    }

    fn set_filename(&mut self, name: &str) {
        self.filename = name.to_string();
    }

    fn set_modified_marker(&mut self, marker: &str) {
        self.marker = marker.to_string();
    }
}

impl<R: BufRead, W: Write> MenuBar for LineFrontend<R, W> {
    fn set_save_enabled(&mut self, enabled: bool) {
        self.save_enabled = enabled;
    }

    fn set_save_as_enabled(&mut self, enabled: bool) {
        self.save_as_enabled = enabled;
    }
}
