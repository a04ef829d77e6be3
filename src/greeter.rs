use crate::error::Result;
use std::io::Write;

/// Stateless type whose one operation prints a fixed message.
#[derive(Debug, Clone, Copy, Default)]
pub struct Greeter;

impl Greeter {
    pub const MESSAGE: &'static str = "hello\n";

    pub fn new() -> Self {
        Self
    }

    /// Print [`Self::MESSAGE`] to stdout.
    pub fn do_something(&self) -> Result<()> {
        let stdout = std::io::stdout();
        self.do_something_to(&mut stdout.lock())
    }

    pub fn do_something_to<W: Write>(&self, out: &mut W) -> Result<()> {
        out.write_all(Self::MESSAGE.as_bytes())?;
        out.flush()?;
        Ok(())
    }
}
