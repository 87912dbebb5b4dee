use crate::input::LineSource;
use anyhow::{bail, Context, Result};
use std::io::{stdin, stdout, Write};
use termion::{
    clear::CurrentLine as ClearLine,
    cursor::{DetectCursorPos, Goto},
    event::Key,
    input::TermRead,
    raw::IntoRawMode,
};
use unicode_width::UnicodeWidthStr;

fn char_index_to_byte_index(s: &str, char_index: usize) -> usize {
    s.char_indices()
        .nth(char_index)
        .map(|(i, _)| i)
        .unwrap_or_else(|| s.len())
}

/// Text being edited plus a cursor counted in chars.
#[derive(Debug, Default)]
struct EditBuffer {
    text: String,
    cursor: usize,
}

impl EditBuffer {
    fn len(&self) -> usize {
        self.text.chars().count()
    }

    fn insert(&mut self, c: char) {
        let byte_idx = char_index_to_byte_index(&self.text, self.cursor);
        self.text.insert(byte_idx, c);
        self.cursor += 1;
    }

    fn remove_at_cursor(&mut self) {
        let byte_idx = char_index_to_byte_index(&self.text, self.cursor);
        if let Some(c) = self.text[byte_idx..].chars().next() {
            self.text.drain(byte_idx..byte_idx + c.len_utf8());
        }
    }

    fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.remove_at_cursor();
        }
    }

    fn delete(&mut self) {
        if self.cursor < self.len() {
            self.remove_at_cursor();
        }
    }

    fn left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    fn right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.len());
    }

    fn home(&mut self) {
        self.cursor = 0;
    }

    fn end(&mut self) {
        self.cursor = self.len();
    }

    fn replace(&mut self, text: &str) {
        self.text = text.to_string();
        self.cursor = self.len();
    }

    /// Display width of everything left of the cursor.
    fn cursor_column(&self) -> usize {
        self.text[..char_index_to_byte_index(&self.text, self.cursor)].width()
    }
}

/// Raw-mode prompt editor: ←/→, Home/End, Backspace/Delete and ↑/↓ through
/// earlier answers. Ctrl+D on an empty line closes the input.
pub struct LineEditor {
    history: Vec<String>,
}

impl LineEditor {
    pub fn new() -> Self {
        LineEditor { history: Vec::new() }
    }
}

impl LineSource for LineEditor {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        let mut stdout = stdout().into_raw_mode().context("failed to enter raw mode")?;
        write!(stdout, "{}{}", ClearLine, prompt)?;
        stdout.flush()?;

        let (_, row) = stdout.cursor_pos()?;
        let mut buffer = EditBuffer::default();
        let mut history_index = self.history.len();

        let stdin = stdin();
        let mut keys = stdin.keys();

        loop {
            write!(stdout, "{}{}{}{}", Goto(1, row), ClearLine, prompt, buffer.text)?;
            let column = 1 + prompt.width() + buffer.cursor_column();
            write!(stdout, "{}", Goto(column as u16, row))?;
            stdout.flush()?;

            let key = match keys.next() {
                Some(key) => key?,
                None => return Ok(None),
            };

            match key {
                Key::Char('\n') => break,
                Key::Ctrl('d') if buffer.text.is_empty() => {
                    write!(stdout, "\r\n")?;
                    return Ok(None);
                }
                Key::Ctrl('c') => {
                    write!(stdout, "\r\n")?;
                    bail!("interrupted");
                }
                Key::Char(c) => buffer.insert(c),
                Key::Backspace => buffer.backspace(),
                Key::Delete => buffer.delete(),
                Key::Left => buffer.left(),
                Key::Right => buffer.right(),
                Key::Home => buffer.home(),
                Key::End => buffer.end(),
                Key::Up => {
                    if history_index > 0 {
                        history_index -= 1;
                        buffer.replace(&self.history[history_index]);
                    }
                }
                Key::Down => {
                    if history_index < self.history.len().saturating_sub(1) {
                        history_index += 1;
                        buffer.replace(&self.history[history_index]);
                    } else {
                        history_index = self.history.len();
                        buffer.replace("");
                    }
                }
                _ => {}
            }
        }

        write!(stdout, "\r\n")?;
        stdout.flush()?;

        if !buffer.text.trim().is_empty() {
            self.history.push(buffer.text.clone());
        }
        Ok(Some(buffer.text))
    }

    fn say(&mut self, message: &str) -> Result<()> {
        // raw mode is only held inside read_line
        let mut stdout = stdout();
        writeln!(stdout, "{}", message)?;
        stdout.flush()?;
        Ok(())
    }
}
