use colored::Colorize;
use std::io::{BufRead, Write};
use stockpile::error::{InventoryError, Result};
use stockpile::model::{normalize_price, validate_slot, SlotField};

/// Line-oriented prompts over any reader/writer pair.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Writes `prompt` and reads one line. `None` at end of input.
    pub fn ask_optional(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.strip_suffix('\n').unwrap_or(&line);
        let trimmed = trimmed.strip_suffix('\r').unwrap_or(trimmed);
        Ok(Some(trimmed.to_string()))
    }

    /// Like [`ask_optional`](Self::ask_optional), but running out of input is an error.
    pub fn ask(&mut self, prompt: &str) -> Result<String> {
        self.ask_optional(prompt)?.ok_or(InventoryError::InputClosed)
    }

    pub fn say_error(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{}", message.red())?;
        Ok(())
    }

    /// Asks for an aisle or department until one of the five slot values is given.
    pub fn ask_slot(&mut self, field: SlotField) -> Result<String> {
        let name = field.name();
        let mut value = self.ask(&format!("Please enter product {} (1, 2, 3, 4, 5): ", name))?;
        loop {
            match validate_slot(field, &value) {
                Ok(slot) => return Ok(slot),
                Err(_) => {
                    self.say_error(&format!(
                        "Error: only these {}s can be selected (1, 2, 3, 4, 5)",
                        name
                    ))?;
                    value =
                        self.ask(&format!("Please enter product {} from (1, 2, 3, 4, 5): ", name))?;
                }
            }
        }
    }

    /// Asks for a price, allowing one retry. A second bad value is returned as an error.
    pub fn ask_price(&mut self) -> Result<String> {
        let first = self.ask("Please enter product price: ")?;
        if let Ok(price) = normalize_price(&first) {
            return Ok(price);
        }
        self.say_error("Error: Please use a number for price, like 0.77")?;
        let second = self.ask("Please enter product price: ")?;
        normalize_price(&second)
    }

    /// Asks for a replacement id until `check` accepts one.
    pub fn ask_new_id<F>(&mut self, check: F) -> Result<String>
    where
        F: Fn(&str) -> Result<String>,
    {
        loop {
            let candidate = self.ask("Please enter new product id: ")?;
            match check(&candidate) {
                Ok(id) => return Ok(id),
                Err(e @ (InventoryError::InvalidId(_) | InventoryError::DuplicateId(_))) => {
                    self.say_error(&format!("Error: {}", e))?;
                }
                Err(e) => return Err(e),
            }
        }
    }
}
