use crate::core::models::alignment::MultipleAlignment;

/// Ordinal index of the block containing the given global aligned position,
/// or `None` when the structure `column_sources` designates as reference for
/// that position contributes no residue there (or the position is out of
/// range).
///
/// Position ranges follow the cumulative block lengths: positions `[0, L0)`
/// belong to block 0, `[L0, L0+L1)` to block 1, and so on. `column_sources`
/// is the per-position reference-structure map produced by
/// [`gapped_sequences_with_map`](super::sequence::gapped_sequences_with_map);
/// callers may substitute their own (e.g. all zeros to resolve positions
/// against structure 0).
pub fn block_index_for_position(
    alignment: &MultipleAlignment,
    column_sources: &[usize],
    position: usize,
) -> Option<usize> {
    if position >= column_sources.len() {
        return None;
    }
    let reference = column_sources[position];

    let mut offset = 0;
    for (block_idx, block) in alignment.blocks().iter().enumerate() {
        let length = block.length();
        if position < offset + length {
            return block
                .aligned_residue(reference, position - offset)
                .map(|_| block_idx);
        }
        offset += length;
    }
    None
}
