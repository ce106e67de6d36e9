use unicode_segmentation::UnicodeSegmentation;

/// Grapheme index of the glyph the reader's eye should land on.
///
/// Display units are shifted so this glyph stays at a fixed column.
/// Counting graphemes rather than bytes keeps CJK and combining marks
/// aligned:
/// - 0-1 graphemes → 0
/// - 2-4 graphemes → 1
/// - 5-8 graphemes → 2
/// - longer → 3
pub fn calculate_anchor_position(unit: &str) -> usize {
    match unit.graphemes(true).count() {
        0..=1 => 0,
        2..=4 => 1,
        5..=8 => 2,
        _ => 3,
    }
}
