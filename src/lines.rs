//! Line scanning for log files.
//!
//! tqdm redraws a bar in place with a bare carriage return, so a log captured
//! from a terminal often holds hundreds of bar states on one physical line.
//! [`LogLines`] therefore ends a line at `\n`, `\r\n` or a lone `\r`, which
//! gives every redraw its own line.
//!
//! Bytes that are not valid UTF-8 are replaced with U+FFFD instead of aborting
//! the scan.

use std::io::{self, BufRead};

/// Iterator over the lines of a reader, without their terminators.
///
/// Stops after the first I/O error.
pub struct LogLines<R> {
    reader: R,
    /// The previous line ended in `\r`; a `\n` right after it belongs to it.
    skip_lf: bool,
    failed: bool,
}

impl<R: BufRead> LogLines<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            skip_lf: false,
            failed: false,
        }
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = Vec::new();

        loop {
            let available = match self.reader.fill_buf() {
                Ok(available) => available,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };

            if available.is_empty() {
                return Ok((!buf.is_empty()).then(|| decode(buf)));
            }

            if self.skip_lf {
                self.skip_lf = false;
                if available[0] == b'\n' {
                    self.reader.consume(1);
                    continue;
                }
            }

            match available.iter().position(|&b| b == b'\n' || b == b'\r') {
                Some(end) => {
                    buf.extend_from_slice(&available[..end]);
                    self.skip_lf = available[end] == b'\r';
                    self.reader.consume(end + 1);
                    return Ok(Some(decode(buf)));
                }
                None => {
                    let len = available.len();
                    buf.extend_from_slice(available);
                    self.reader.consume(len);
                }
            }
        }
    }
}

impl<R: BufRead> Iterator for LogLines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.read_line() {
            Ok(line) => line.map(Ok),
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}

fn decode(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(line) => line,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    }
}
