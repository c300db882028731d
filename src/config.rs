/// Knobs of a compilation session. `Default` reproduces the reference
/// machine: 4-byte words, 64 variables, reading an undefined name is fatal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub word_size: usize,
    pub table_capacity: usize,
    /// Declare unknown variables at 0 when they are read instead of failing.
    pub declare_on_read: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            word_size: 4,
            table_capacity: 64,
            declare_on_read: false,
        }
    }
}
