//! Structured representation of a multi-voice score.
//!
//! A [`Score`] is built once from notation text by [`parse`] and is immutable afterwards.

use crate::constants::{DEFAULT_BASE_LENGTH, DEFAULT_TEMPO};
use std::collections::BTreeMap;

pub use parser::parse;

mod parser;

/// A single timed event in a voice, with its duration in beats (quarter notes).
#[derive(Debug, Clone, PartialEq)]
pub enum NoteEvent {
    /// A single pitched note or percussion hit.
    Note { symbol: String, beats: f32 },
    /// Several pitches sounding together. Always holds at least one symbol.
    Chord { symbols: Vec<String>, beats: f32 },
    /// Silence.
    Rest { beats: f32 },
}

impl NoteEvent {
    /// Duration of the event in beats.
    pub fn beats(&self) -> f32 {
        match self {
            NoteEvent::Note { beats, .. } => *beats,
            NoteEvent::Chord { beats, .. } => *beats,
            NoteEvent::Rest { beats } => *beats,
        }
    }
}

/// One notated part, rendered independently before mixing.
#[derive(Debug, Clone, PartialEq)]
pub struct Voice {
    pub id: u32,
    pub name: String,
    /// Events in playback order.
    pub events: Vec<NoteEvent>,
}

impl Voice {
    pub fn new(id: u32, name: impl Into<String>, events: Vec<NoteEvent>) -> Self {
        Self {
            id,
            name: name.into(),
            events,
        }
    }

    /// Total length of the voice in beats.
    pub fn total_beats(&self) -> f32 {
        self.events.iter().map(NoteEvent::beats).sum()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Score {
    /// Quarter notes per minute.
    pub tempo: u32,
    /// Denominator of the base note length, e.g. `8` for `L:1/8`.
    pub base_length: u32,
    /// Voices keyed by their identifier; iteration order is mix order.
    pub voices: BTreeMap<u32, Voice>,
}

impl Default for Score {
    fn default() -> Self {
        Self {
            tempo: DEFAULT_TEMPO,
            base_length: DEFAULT_BASE_LENGTH,
            voices: BTreeMap::new(),
        }
    }
}

impl Score {
    /// Parses notation text. Never fails; see [`parse`].
    pub fn parse(text: &str) -> Self {
        parse(text)
    }

    /// A score without voices has nothing to render.
    pub fn is_empty(&self) -> bool {
        self.voices.is_empty()
    }

    pub fn voices(&self) -> impl Iterator<Item = &Voice> {
        self.voices.values()
    }
}
