use super::GAP_CHARACTER;
use crate::core::models::alignment::MultipleAlignment;
use crate::core::models::error::ModelError;

/// Builds the gapped one-letter sequence of every structure across all
/// blocks, in structure order. Each sequence has length equal to the sum of
/// all block lengths; columns where a structure contributes no residue carry
/// [`GAP_CHARACTER`].
pub fn gapped_sequences(alignment: &MultipleAlignment) -> Result<Vec<String>, ModelError> {
    gapped_sequences_with_map(alignment).map(|(sequences, _)| sequences)
}

/// Like [`gapped_sequences`], additionally returning, per emitted column, the
/// index of the source structure the column's character was derived from: the
/// lowest structure index contributing a residue at that column. Columns with
/// no contributing residue at all are attributed to structure 0, whose gap
/// there makes the downstream block lookup yield its blank sentinel.
///
/// The map is the reference-structure convention consumed by
/// [`block_index_for_position`](super::position::block_index_for_position).
pub fn gapped_sequences_with_map(
    alignment: &MultipleAlignment,
) -> Result<(Vec<String>, Vec<usize>), ModelError> {
    alignment.validate()?;

    let n = alignment.size();
    let total = alignment.length();
    let mut sequences: Vec<String> = (0..n).map(|_| String::with_capacity(total)).collect();
    let mut column_sources = Vec::with_capacity(total);

    for block in alignment.blocks() {
        for column in 0..block.length() {
            let mut source = None;
            for (structure, row) in block.rows().iter().enumerate() {
                match row[column] {
                    Some(index) => {
                        let residue =
                            &alignment.ensemble().structures()[structure].residues()[index];
                        sequences[structure].push(residue.one_letter_code());
                        if source.is_none() {
                            source = Some(structure);
                        }
                    }
                    None => sequences[structure].push(GAP_CHARACTER),
                }
            }
            column_sources.push(source.unwrap_or(0));
        }
    }

    Ok((sequences, column_sources))
}
