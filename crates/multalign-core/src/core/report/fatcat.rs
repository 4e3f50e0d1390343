use crate::core::align::position::block_index_for_position;
use crate::core::align::sequence::gapped_sequences_with_map;
use crate::core::models::alignment::MultipleAlignment;
use crate::core::models::error::ModelError;

/// Renders the alignment in FatCat style: the model's summary line, a blank
/// line, then per structure a `Chain NN:`-labeled gapped sequence. Between
/// consecutive structure lines (not after the last) an annotation line
/// repeats the block number of every position, blank where the position's
/// reference structure has no residue.
pub fn to_fatcat(alignment: &MultipleAlignment) -> Result<String, ModelError> {
    let (sequences, column_sources) = gapped_sequences_with_map(alignment)?;

    let mut block_numbers = String::with_capacity(column_sources.len());
    for position in 0..column_sources.len() {
        match block_index_for_position(alignment, &column_sources, position) {
            Some(block_idx) => block_numbers.push_str(&block_idx.to_string()),
            None => block_numbers.push(' '),
        }
    }

    let mut out = String::new();
    out.push_str(&alignment.to_string());
    out.push_str("\n\n");
    for (structure, sequence) in sequences.iter().enumerate() {
        out.push_str(&format!("Chain {:02}: {}\n", structure + 1, sequence));
        if structure + 1 != sequences.len() {
            out.push_str("          ");
            out.push_str(&block_numbers);
            out.push('\n');
        }
    }
    Ok(out)
}
