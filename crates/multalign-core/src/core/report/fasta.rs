use crate::core::align::sequence::gapped_sequences;
use crate::core::models::alignment::MultipleAlignment;
use crate::core::models::error::ModelError;

/// Renders the alignment as a FASTA multiple sequence alignment: for each
/// structure a `>`-prefixed name line followed by its gapped sequence, in
/// structure order.
pub fn to_fasta(alignment: &MultipleAlignment) -> Result<String, ModelError> {
    let sequences = gapped_sequences(alignment)?;

    let name_bytes: usize = alignment.ensemble().structure_names().map(str::len).sum();
    let mut out = String::with_capacity(name_bytes + (alignment.length() + 3) * alignment.size());
    for (name, sequence) in alignment.ensemble().structure_names().zip(&sequences) {
        out.push('>');
        out.push_str(name);
        out.push('\n');
        out.push_str(sequence);
        out.push('\n');
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::block::Block;
    use crate::core::models::ensemble::{Ensemble, Structure};
    use crate::core::models::residue::{Residue, ResidueNumber};
    use nalgebra::Point3;

    fn structure(name: &str, res_names: &[&str]) -> Structure {
        let residues = res_names
            .iter()
            .enumerate()
            .map(|(i, res_name)| {
                Residue::new(
                    ResidueNumber::new(i as isize + 1),
                    'A',
                    res_name,
                    Point3::new(i as f64, 0.0, 0.0),
                )
            })
            .collect();
        Structure::new(name, residues)
    }

    #[test]
    fn renders_header_and_gapped_sequence_per_structure() {
        let ensemble = Ensemble::new(vec![
            structure("d1abc.A", &["GLY", "ALA"]),
            structure("d2xyz.B", &["SER"]),
        ]);
        let blocks = vec![Block::new(vec![vec![Some(0), Some(1)], vec![Some(0), None]]).unwrap()];
        let alignment = MultipleAlignment::new(ensemble, blocks).unwrap();

        assert_eq!(
            to_fasta(&alignment).unwrap(),
            ">d1abc.A\nGA\n>d2xyz.B\nS-\n"
        );
    }
}
