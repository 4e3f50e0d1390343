use crate::core::models::alignment::MultipleAlignment;
use crate::core::models::error::ModelError;

/// Renders the alignment as a tab-delimited listing of aligned residue
/// groups, one line per alignment column across all blocks in order. Each
/// structure contributes three tab-terminated fields per line — residue
/// number (with insertion code), chain identifier, three-letter name — or
/// three `-` placeholders where it has no residue. Two header line groups
/// precede the data: the structure names and the per-structure column labels.
///
/// Block boundaries are not represented in this format.
pub fn to_aligned_residues(alignment: &MultipleAlignment) -> Result<String, ModelError> {
    alignment.validate()?;

    let n = alignment.size();
    let mut out = String::new();

    for (structure, name) in alignment.ensemble().structure_names().enumerate() {
        out.push_str(&format!("#Struct{}:\t{}\n", structure, name));
    }
    for structure in 0..n {
        out.push_str(&format!(
            "#Num{0}\tChain{0}\tAA{0}\t",
            structure
        ));
    }
    out.push('\n');

    for block in alignment.blocks() {
        for column in 0..block.length() {
            for (structure, row) in block.rows().iter().enumerate() {
                match row[column] {
                    Some(index) => {
                        let residue =
                            &alignment.ensemble().structures()[structure].residues()[index];
                        out.push_str(&format!(
                            "{}\t{}\t{}\t",
                            residue.number, residue.chain_id, residue.name
                        ));
                    }
                    None => out.push_str("-\t-\t-\t"),
                }
            }
            out.push('\n');
        }
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

    #[test]
    fn single_residue_line_is_exactly_tab_terminated() {
        let ensemble = Ensemble::new(vec![Structure::new(
            "s0",
            vec![Residue::new(
                ResidueNumber::new(52),
                'A',
                "ALA",
                Point3::origin(),
            )],
        )]);
        let blocks = vec![Block::new(vec![vec![Some(0)]]).unwrap()];
        let alignment = MultipleAlignment::new(ensemble, blocks).unwrap();

        let rendered = to_aligned_residues(&alignment).unwrap();
        let last_line = rendered.lines().last().unwrap();
        assert_eq!(last_line, "52\tA\tALA\t");
    }

    #[test]
    fn gap_renders_three_dash_placeholders() {
        let ensemble = Ensemble::new(vec![
            Structure::new(
                "s0",
                vec![Residue::new(
                    ResidueNumber::new(7),
                    'B',
                    "TRP",
                    Point3::origin(),
                )],
            ),
            Structure::new("s1", vec![]),
        ]);
        let blocks = vec![Block::new(vec![vec![Some(0)], vec![None]]).unwrap()];
        let alignment = MultipleAlignment::new(ensemble, blocks).unwrap();

        let rendered = to_aligned_residues(&alignment).unwrap();
        assert!(rendered.ends_with("7\tB\tTRP\t-\t-\t-\t\n"));
    }

    #[test]
    fn headers_list_structures_and_column_labels() {
        let ensemble = Ensemble::new(vec![
            Structure::new(
                "d1",
                vec![Residue::new(
                    ResidueNumber::new(1),
                    'A',
                    "GLY",
                    Point3::origin(),
                )],
            ),
            Structure::new(
                "d2",
                vec![Residue::new(
                    ResidueNumber::with_insertion_code(33, 'A'),
                    'C',
                    "HIS",
                    Point3::origin(),
                )],
            ),
        ]);
        let blocks = vec![Block::new(vec![vec![Some(0)], vec![Some(0)]]).unwrap()];
        let alignment = MultipleAlignment::new(ensemble, blocks).unwrap();

        let rendered = to_aligned_residues(&alignment).unwrap();
        let lines: Vec<_> = rendered.lines().collect();
        assert_eq!(lines[0], "#Struct0:\td1");
        assert_eq!(lines[1], "#Struct1:\td2");
        assert_eq!(lines[2], "#Num0\tChain0\tAA0\t#Num1\tChain1\tAA1\t");
        assert_eq!(lines[3], "1\tA\tGLY\t33A\tC\tHIS\t");
    }
}
