//! String literal decoding
//!
//! Interpreted strings (`"..."`) resolve C-style escapes. Octal and `\x` escapes
//! denote single bytes, so the decoded bytes are only checked for UTF-8 once the
//! whole literal has been processed (`"\xc3\xa9"` is `é`). Raw strings
//! (`` `...` ``) are taken verbatim except that carriage returns are dropped.

use crate::subst::error::ScriptErrorKind;

/// Decode a complete string literal, quotes included.
pub fn unquote(literal: &str) -> Result<String, ScriptErrorKind> {
    if let Some(body) = literal
        .strip_prefix('`')
        .and_then(|rest| rest.strip_suffix('`'))
    {
        return Ok(body.chars().filter(|&c| c != '\r').collect());
    }

    let body = literal
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .ok_or(ScriptErrorKind::UnterminatedLiteral)?;

    if !body.contains('\\') {
        return Ok(body.to_string());
    }

    let mut bytes = Vec::with_capacity(body.len());
    let mut chars = body.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            push_char(&mut bytes, c);
            continue;
        }

        let escape = chars
            .next()
            .ok_or_else(|| ScriptErrorKind::InvalidEscape("\\".to_string()))?;

        match escape {
            'a' => bytes.push(0x07),
            'b' => bytes.push(0x08),
            'f' => bytes.push(0x0c),
            'n' => bytes.push(b'\n'),
            'r' => bytes.push(b'\r'),
            't' => bytes.push(b'\t'),
            'v' => bytes.push(0x0b),
            '\\' => bytes.push(b'\\'),
            '"' => bytes.push(b'"'),
            '0'..='7' => {
                let digits = take_digits(&mut chars, escape, 2, 8)?;
                let value = u8::try_from(digits)
                    .map_err(|_| ScriptErrorKind::InvalidEscape(format!("\\{escape}")))?;
                bytes.push(value);
            }
            'x' => {
                let value = read_hex(&mut chars, escape, 2)?;
                // two hex digits always fit in a byte
                bytes.push(value as u8);
            }
            'u' | 'U' => {
                let width = if escape == 'u' { 4 } else { 8 };
                let value = read_hex(&mut chars, escape, width)?;
                let c = char::from_u32(value)
                    .ok_or_else(|| ScriptErrorKind::InvalidEscape(format!("\\{escape}{value:x}")))?;
                push_char(&mut bytes, c);
            }
            other => return Err(ScriptErrorKind::InvalidEscape(format!("\\{other}"))),
        }
    }

    String::from_utf8(bytes).map_err(|_| ScriptErrorKind::InvalidUtf8)
}

fn push_char(bytes: &mut Vec<u8>, c: char) {
    let mut buf = [0u8; 4];
    bytes.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
}

fn read_hex(
    chars: &mut std::str::Chars<'_>,
    escape: char,
    width: usize,
) -> Result<u32, ScriptErrorKind> {
    let first = chars
        .next()
        .ok_or_else(|| ScriptErrorKind::InvalidEscape(format!("\\{escape}")))?;
    take_digits(chars, first, width - 1, 16)
        .map_err(|_| ScriptErrorKind::InvalidEscape(format!("\\{escape}")))
}

/// Accumulate `first` plus `more` further digits in the given radix.
fn take_digits(
    chars: &mut std::str::Chars<'_>,
    first: char,
    more: usize,
    radix: u32,
) -> Result<u32, ScriptErrorKind> {
    let invalid = || ScriptErrorKind::InvalidEscape(format!("\\{first}"));
    let mut value = first.to_digit(radix).ok_or_else(invalid)?;
    for _ in 0..more {
        let digit = chars
            .next()
            .and_then(|c| c.to_digit(radix))
            .ok_or_else(invalid)?;
        value = value * radix + digit;
    }
    Ok(value)
}
