use tracing::debug;

use crate::{
    config::Config,
    error::{CompileError, CompileResult},
};

/// Variables every session starts with, in slot order.
pub const BUILTINS: [&str; 3] = ["x", "y", "z"];

#[derive(Clone, Debug, PartialEq)]
struct Symbol {
    name: String,
    value: i32,
}

/// Fixed-capacity variable table. A variable's slot is its insertion index
/// and never changes.
#[derive(Clone, Debug)]
pub struct SymbolTable {
    symbols: Vec<Symbol>,
    capacity: usize,
    word_size: usize,
    declare_on_read: bool,
}

impl SymbolTable {
    pub fn new(config: &Config) -> Self {
        Self {
            symbols: Vec::with_capacity(config.table_capacity),
            capacity: config.table_capacity,
            word_size: config.word_size,
            declare_on_read: config.declare_on_read,
        }
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.symbols.len() >= self.capacity
    }

    /// Memory offset of a slot.
    pub fn address(&self, slot: usize) -> usize {
        slot * self.word_size
    }

    pub fn lookup(&self, name: &str) -> Option<usize> {
        self.symbols.iter().position(|s| s.name == name)
    }

    pub fn value(&self, slot: usize) -> Option<i32> {
        self.symbols.get(slot).map(|s| s.value)
    }

    pub fn declare(&mut self, name: &str, value: i32) -> CompileResult<usize> {
        if self.is_full() {
            return Err(CompileError::TableFull(self.capacity));
        }
        let slot = self.symbols.len();
        self.symbols.push(Symbol {
            name: name.to_string(),
            value,
        });
        debug!(name, slot, "declared variable");
        Ok(slot)
    }

    /// Slot and current value of `name`. A full table is reported before
    /// the name is found to be undefined.
    pub fn read(&mut self, name: &str) -> CompileResult<(usize, i32)> {
        if let Some(slot) = self.lookup(name) {
            return Ok((slot, self.symbols[slot].value));
        }
        if self.is_full() {
            return Err(CompileError::TableFull(self.capacity));
        }
        if !self.declare_on_read {
            return Err(CompileError::Undefined(name.to_string()));
        }
        Ok((self.declare(name, 0)?, 0))
    }

    /// Store `value` into `name`, declaring it first if needed.
    pub fn write(&mut self, name: &str, value: i32) -> CompileResult<usize> {
        if let Some(slot) = self.lookup(name) {
            self.symbols[slot].value = value;
            return Ok(slot);
        }
        self.declare(name, value)
    }
}
