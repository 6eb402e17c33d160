//! Consola interactiva
//!
//! Lectura línea a línea con prompt. Genérica sobre la entrada y la salida
//! para poder guionizarla en los tests.

use std::io::{BufRead, Write};
use std::str::FromStr;

use colored::*;

use crate::utils::errors::{invalid_selection_error, ShopError, ShopResult};

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Devuelve la salida (útil en tests)
    pub fn into_output(self) -> W {
        self.output
    }

    pub fn println(&mut self, line: impl AsRef<str>) -> ShopResult<()> {
        writeln!(self.output, "{}", line.as_ref())?;
        Ok(())
    }

    pub fn title(&mut self, title: &str) -> ShopResult<()> {
        let line = format!("\n===== {} =====", title);
        self.println(line.bright_blue().bold().to_string())
    }

    pub fn success(&mut self, message: impl AsRef<str>) -> ShopResult<()> {
        self.println(message.as_ref().bright_green().to_string())
    }

    pub fn warning(&mut self, message: impl AsRef<str>) -> ShopResult<()> {
        self.println(format!("⚠️  {}", message.as_ref()).yellow().to_string())
    }

    pub fn error(&mut self, error: &ShopError) -> ShopResult<()> {
        self.println(format!("❌ {}", error).bright_red().to_string())
    }

    /// Muestra el prompt y lee una línea sin salto final.
    /// Fin de entrada => `ShopError::InputClosed`.
    pub fn prompt(&mut self, label: &str) -> ShopResult<String> {
        write!(self.output, "{}", label.bright_yellow())?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ShopError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    /// Lee un número; si no se puede interpretar devuelve `InvalidSelection`
    pub fn prompt_number<T: FromStr>(&mut self, label: &str) -> ShopResult<T> {
        let raw = self.prompt(label)?;
        raw.parse::<T>().map_err(|_| invalid_selection_error(&raw))
    }

    /// Lee un valor de un vocabulario cerrado
    pub fn prompt_choice<T>(&mut self, label: &str, parse: fn(&str) -> Option<T>) -> ShopResult<T> {
        let raw = self.prompt(label)?;
        parse(&raw).ok_or_else(|| invalid_selection_error(&raw))
    }
}
