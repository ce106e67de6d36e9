/// Per-unit display time for a reading speed, rounded to the nearest
/// millisecond.
pub fn wpm_to_milliseconds(wpm: u32) -> u64 {
    (60_000.0 / wpm.max(1) as f64).round() as u64
}
