//! Shift-JIS decoding for statement exports
//!
//! Vpass serves its CSV downloads in Shift-JIS. Everything downstream works
//! on Unicode text, so decoding is the first pipeline stage and a decode
//! failure aborts the whole run.

use crate::{Error, Result};
use encoding_rs::SHIFT_JIS;

/// Decode statement bytes from Shift-JIS into a Unicode string
///
/// Fails on any byte sequence that is not valid Shift-JIS; no partially
/// decoded text is ever returned.
pub fn decode_shift_jis(bytes: &[u8]) -> Result<String> {
    let (text, _, had_errors) = SHIFT_JIS.decode(bytes);
    if had_errors {
        return Err(Error::decode(
            "source contains byte sequences that are not valid Shift-JIS",
        ));
    }
    Ok(text.into_owned())
}
