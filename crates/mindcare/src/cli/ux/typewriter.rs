use std::io::{self, Write};
use std::thread;
use std::time::Duration;

/// Renders one message per call to the user.
pub trait Presenter {
    /// Writes `text` followed by a newline.
    fn present(&mut self, text: &str) -> io::Result<()>;
}

/// Prints text a character at a time for a calm, slow cadence.
///
/// With a zero delay the whole message is written at once.
pub struct TypewriterPresenter<W: Write> {
    out: W,
    delay: Duration,
}

impl<W: Write> TypewriterPresenter<W> {
    pub fn new(out: W, delay: Duration) -> Self {
        Self { out, delay }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Presenter for TypewriterPresenter<W> {
    fn present(&mut self, text: &str) -> io::Result<()> {
        if self.delay.is_zero() {
            writeln!(self.out, "{text}")?;
            return self.out.flush();
        }

        let mut buf = [0u8; 4];
        for ch in text.chars() {
            self.out.write_all(ch.encode_utf8(&mut buf).as_bytes())?;
            self.out.flush()?;
            thread::sleep(self.delay);
        }
        writeln!(self.out)?;
        self.out.flush()
    }
}
