use crate::types::Diagnostic;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
/// Loads the text of `path`, never failing.
///
/// UTF-8 is tried first; invalid UTF-8 is decoded as Latin-1, which maps every
/// byte to the code point of the same value. An I/O error yields an empty
/// string. Both conditions are appended to `diagnostics`.
pub fn read_content(path: &Path, diagnostics: &mut Vec<Diagnostic>) -> String {
    let bytes = match read_bytes(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            Diagnostic::Unreadable {
                path: path.to_path_buf(),
                message: e.to_string(),
            }
            .record(diagnostics);
            return String::new();
        }
    };
    match String::from_utf8(bytes) {
        Ok(content) => content,
        Err(e) => {
            Diagnostic::EncodingFallback {
                path: path.to_path_buf(),
            }
            .record(diagnostics);
            decode_latin1(&e.into_bytes())
        }
    }
}
fn read_bytes(path: &Path) -> std::io::Result<Vec<u8>> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    Ok(bytes)
}
fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().copied().map(char::from).collect()
}
