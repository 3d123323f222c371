//! Escape sequence removal.
//!
//! Runs encoded output back through a VTE parser and keeps what a terminal
//! would print, plus the hyperlink targets and SGR parameter lists it saw.

use vte::{Params, Parser, Perform};

/// Printable content and the escape traffic found in encoded output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Decoded {
    pub text: String,
    /// Targets of every OSC 8 sequence that opened a link
    pub links: Vec<String>,
    /// Parameters of every SGR sequence, in order
    pub sgr: Vec<Vec<u16>>,
}

struct Collector {
    decoded: Decoded,
}

impl Perform for Collector {
    fn print(&mut self, c: char) {
        self.decoded.text.push(c);
    }

    fn execute(&mut self, byte: u8) {
        match byte {
            b'\n' => self.decoded.text.push('\n'),
            b'\t' => self.decoded.text.push('\t'),
            _ => {}
        }
    }

    fn hook(&mut self, _params: &Params, _intermediates: &[u8], _ignore: bool, _action: char) {}

    fn put(&mut self, _byte: u8) {}

    fn unhook(&mut self) {}

    fn osc_dispatch(&mut self, params: &[&[u8]], _bell_terminated: bool) {
        if params.first() == Some(&&b"8"[..]) {
            if let Some(url) = params.get(2).filter(|url| !url.is_empty()) {
                self.decoded
                    .links
                    .push(String::from_utf8_lossy(url).into_owned());
            }
        }
    }

    fn csi_dispatch(&mut self, params: &Params, _intermediates: &[u8], _ignore: bool, action: char) {
        if action == 'm' {
            let params: Vec<u16> = params
                .iter()
                .map(|p| p.first().copied().unwrap_or(0))
                .collect();
            self.decoded.sgr.push(params);
        }
    }

    fn esc_dispatch(&mut self, _intermediates: &[u8], _ignore: bool, _byte: u8) {}
}

/// Parse encoded output.
pub fn decode(encoded: &str) -> Decoded {
    let mut parser = Parser::new();
    let mut collector = Collector {
        decoded: Decoded::default(),
    };
    parser.advance(&mut collector, encoded.as_bytes());
    collector.decoded
}

/// Remove every escape sequence, keeping printable text and line breaks.
pub fn strip(encoded: &str) -> String {
    decode(encoded).text
}
