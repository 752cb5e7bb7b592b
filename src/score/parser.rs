//! Parser for the multi-voice ABC-style notation.
//!
//! Header fields:
//! - `Q:1/4=<bpm>`  tempo (default 120)
//! - `L:1/<n>`      base note length (default 1/8)
//! - `K:<key>`      marks the start of the tune body in single-voice files
//!
//! Voices are declared with a line `V:<id> name="<name>"`; the lines that follow, up to the next
//! `V:<id>` line, are that voice's body.
//!
//! Body tokens:
//! - Notes:  `A`–`G`, `a`–`g` plus any run of `,` (down) / `'` (up), e.g. `C,,` or `c'`
//! - Hits:   `x`
//! - Rests:  `z`
//! - Chords: `[CEG]`
//! - Each optionally followed by a length multiplier, e.g. `C2`, `[CEG]4`, `z3`, at most 64
//!
//! Bar lines `|` and repeat colons are ignored, and `%` starts a comment. Parsing never fails:
//! missing fields fall back to defaults and anything unrecognised is skipped.

use super::{NoteEvent, Score, Voice};
use crate::constants::{DEFAULT_BASE_LENGTH, DEFAULT_TEMPO, MAX_MULTIPLIER};
use crate::note;
use itertools::Itertools;
use std::collections::BTreeMap;

/// Name given to the voice of a file without voice declarations.
const IMPLICIT_VOICE_NAME: &str = "Melody";

/// Parse notation text into a [`Score`].
pub fn parse(text: &str) -> Score {
    let tempo = header_value(text, "Q:1/4=")
        .filter(|&tempo| tempo > 0)
        .unwrap_or(DEFAULT_TEMPO);
    let base_length = header_value(text, "L:1/")
        .filter(|&length| length > 0)
        .unwrap_or(DEFAULT_BASE_LENGTH);

    let mut voices = BTreeMap::new();
    let blocks = voice_blocks(text);
    if blocks.is_empty() {
        let events = implicit_voice_body(text)
            .map(|body| parse_events(&body, base_length))
            .unwrap_or_default();
        voices.insert(1, Voice::new(1, IMPLICIT_VOICE_NAME, events));
    } else {
        for block in blocks {
            let events = parse_events(&block.body, base_length);
            // A repeated identifier replaces the earlier voice.
            voices.insert(block.id, Voice::new(block.id, block.name, events));
        }
    }

    Score {
        tempo,
        base_length,
        voices,
    }
}

/// Reads the integer following the first occurrence of `tag` that is followed by digits.
fn header_value(text: &str, tag: &str) -> Option<u32> {
    text.match_indices(tag)
        .map(|(idx, _)| leading_digits(&text[idx + tag.len()..]))
        .find(|digits| !digits.is_empty())
        .and_then(|digits| digits.parse().ok())
}

fn leading_digits(s: &str) -> &str {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    &s[..end]
}

struct VoiceBlock<'a> {
    id: u32,
    name: &'a str,
    body: String,
}

/// Whether the line begins with a `V:<digits>` marker, declared or not.
fn is_voice_marker(line: &str) -> bool {
    line.trim_start()
        .strip_prefix("V:")
        .is_some_and(|rest| !leading_digits(rest).is_empty())
}

/// Parses a `V:<id> name="<name>"` declaration line.
fn voice_declaration(line: &str) -> Option<(u32, &str)> {
    let rest = line.trim_start().strip_prefix("V:")?;
    let digits = leading_digits(rest);
    let id = digits.parse().ok()?;
    let rest = &rest[digits.len()..];
    let trimmed = rest.trim_start();
    if trimmed.len() == rest.len() {
        // The id must be followed by whitespace.
        return None;
    }
    let quoted = trimmed.strip_prefix("name=\"")?;
    let end = quoted.find('"')?;
    if end == 0 {
        return None;
    }
    Some((id, &quoted[..end]))
}

fn voice_blocks(text: &str) -> Vec<VoiceBlock<'_>> {
    let mut blocks = vec![];
    let mut current: Option<VoiceBlock> = None;

    for line in text.lines() {
        if is_voice_marker(line) {
            blocks.extend(current.take());
            current = voice_declaration(line).map(|(id, name)| VoiceBlock {
                id,
                name,
                body: String::new(),
            });
        } else if let Some(block) = current.as_mut() {
            block.body.push_str(line);
            block.body.push('\n');
        }
    }
    blocks.extend(current);

    blocks
}

/// Body of a file without voice declarations: everything after the first `K:` line,
/// minus any stray voice markers.
fn implicit_voice_body(text: &str) -> Option<String> {
    let key = text.find("K:")?;
    let newline = text[key..].find('\n')?;
    let body = &text[key + newline + 1..];
    Some(body.lines().filter(|line| !is_voice_marker(line)).join("\n"))
}

/// Removes comments and bar/repeat markers, keeping chord brackets.
fn clean_body(body: &str) -> String {
    body.lines()
        .map(|line| match line.find('%') {
            Some(idx) => &line[..idx],
            None => line,
        })
        .map(|line| line.replace(['|', ':'], " "))
        .join("\n")
}

#[derive(Debug, PartialEq)]
enum TokenKind<'a> {
    Chord(&'a str),
    Pitch(&'a str),
    Rest,
}

/// A token and its length multiplier; `None` when the multiplier does not fit in a `u32`.
#[derive(Debug, PartialEq)]
struct Token<'a> {
    kind: TokenKind<'a>,
    multiplier: Option<u32>,
}

struct Tokenizer<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    fn multiplier(&mut self) -> Option<u32> {
        let digits = leading_digits(&self.src[self.pos..]);
        self.pos += digits.len();
        if digits.is_empty() {
            Some(1)
        } else {
            digits.parse().ok()
        }
    }

    fn token(&mut self, kind: TokenKind<'a>) -> Token<'a> {
        let multiplier = self.multiplier();
        Token { kind, multiplier }
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        let src = self.src;
        loop {
            let rest = &src[self.pos..];
            let c = rest.chars().next()?;
            match c {
                '[' => {
                    if let Some(close) = rest[1..].find(']').filter(|&close| close > 0) {
                        self.pos += close + 2;
                        return Some(self.token(TokenKind::Chord(&rest[1..close + 1])));
                    }
                }
                'A'..='G' | 'a'..='g' | 'x' => {
                    let len = pitch_len(rest);
                    self.pos += len;
                    return Some(self.token(TokenKind::Pitch(&rest[..len])));
                }
                'z' => {
                    self.pos += 1;
                    return Some(self.token(TokenKind::Rest));
                }
                _ => {}
            }
            self.pos += c.len_utf8();
        }
    }
}

/// Length in bytes of the pitch letter at the start of `s` plus its octave markers.
fn pitch_len(s: &str) -> usize {
    1 + s[1..]
        .find(|c: char| c != ',' && c != '\'')
        .unwrap_or(s.len() - 1)
}

/// Splits the inside of a chord bracket into pitch symbols, skipping anything else.
fn chord_symbols(inner: &str) -> Vec<String> {
    let mut symbols = vec![];
    let mut pos = 0;
    while let Some(c) = inner[pos..].chars().next() {
        if matches!(c, 'A'..='G' | 'a'..='g' | 'x' | 'z') {
            let len = pitch_len(&inner[pos..]);
            symbols.push(inner[pos..pos + len].to_string());
            pos += len;
        } else {
            pos += c.len_utf8();
        }
    }
    symbols
}

fn parse_events(body: &str, base_length: u32) -> Vec<NoteEvent> {
    let body = clean_body(body);
    Tokenizer::new(&body)
        .filter_map(|token| {
            let event = to_event(&token, base_length);
            if event.is_none() {
                tracing::trace!(?token, "skipping token");
            }
            event
        })
        .collect()
}

fn to_event(token: &Token, base_length: u32) -> Option<NoteEvent> {
    let multiplier = token.multiplier.filter(|&m| m > 0 && m <= MAX_MULTIPLIER)?;
    let beats = multiplier as f32 * 4.0 / base_length as f32;
    match token.kind {
        TokenKind::Chord(inner) => {
            let symbols = chord_symbols(inner);
            (!symbols.is_empty()).then_some(NoteEvent::Chord { symbols, beats })
        }
        TokenKind::Rest => Some(NoteEvent::Rest { beats }),
        TokenKind::Pitch(symbol) if note::is_known(symbol) => Some(NoteEvent::Note {
            symbol: symbol.to_string(),
            beats,
        }),
        TokenKind::Pitch(_) => None,
    }
}
