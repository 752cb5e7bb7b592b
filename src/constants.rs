/// Sample rate used for every rendered buffer, in Hz.
pub const DEFAULT_SAMPLE_RATE: u32 = 44_100;

/// Tempo assumed when the notation carries no `Q:` field, in quarter notes per minute.
pub const DEFAULT_TEMPO: u32 = 120;

/// Denominator of the base note length assumed when there is no `L:` field.
pub const DEFAULT_BASE_LENGTH: u32 = 8;

/// Longest length multiplier accepted on a single token, e.g. `C64`. Larger ones are dropped.
pub const MAX_MULTIPLIER: u32 = 64;

/// Upper bound on the length of any single rendered event, in seconds.
pub const MAX_EVENT_SECONDS: f64 = 60.0;
