use nalgebra::Point3;
use phf::{Map, phf_map};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One-letter codes for the three-letter residue names emitted into gapped
/// sequence alignments. Names outside the table render as 'X'.
#[rustfmt::skip]
static THREE_TO_ONE: Map<&'static str, char> = phf_map! {
    "ALA" => 'A', "ARG" => 'R', "ASN" => 'N', "ASP" => 'D',
    "CYS" => 'C', "GLN" => 'Q', "GLU" => 'E', "GLY" => 'G',
    "HIS" => 'H', "ILE" => 'I', "LEU" => 'L', "LYS" => 'K',
    "MET" => 'M', "PHE" => 'F', "PRO" => 'P', "SER" => 'S',
    "THR" => 'T', "TRP" => 'W', "TYR" => 'Y', "VAL" => 'V',

    // --- Common non-standard residues, mapped to their parent type ---
    "MSE" => 'M', "SEC" => 'U', "PYL" => 'O', "ASX" => 'B', "GLX" => 'Z',
};

/// A residue's author-assigned number together with its optional insertion
/// code, rendered as e.g. `52` or `52A`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResidueNumber {
    /// Residue sequence number from the source file.
    pub seq_num: isize,
    /// PDB insertion code, if any.
    pub insertion_code: Option<char>,
}

impl ResidueNumber {
    pub fn new(seq_num: isize) -> Self {
        Self {
            seq_num,
            insertion_code: None,
        }
    }

    pub fn with_insertion_code(seq_num: isize, insertion_code: char) -> Self {
        Self {
            seq_num,
            insertion_code: Some(insertion_code),
        }
    }
}

impl fmt::Display for ResidueNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.seq_num)?;
        if let Some(code) = self.insertion_code {
            write!(f, "{}", code)?;
        }
        Ok(())
    }
}

/// One aligned residue position of a structure: the metadata the report
/// renderers print verbatim, plus the representative-atom coordinate used
/// for superposition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Residue {
    /// Author residue number, including insertion code.
    pub number: ResidueNumber,
    /// Single-character chain identifier (e.g. 'A').
    pub chain_id: char,
    /// Three-letter residue name (e.g. "ALA").
    pub name: String,
    /// Coordinate of the representative atom, in Angstroms.
    pub position: Point3<f64>,
}

impl Residue {
    pub fn new(number: ResidueNumber, chain_id: char, name: &str, position: Point3<f64>) -> Self {
        Self {
            number,
            chain_id,
            name: name.to_string(),
            position,
        }
    }

    /// One-letter code of this residue's name, 'X' when unknown.
    pub fn one_letter_code(&self) -> char {
        THREE_TO_ONE.get(self.name.as_str()).copied().unwrap_or('X')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn residue_number_renders_without_insertion_code() {
        assert_eq!(ResidueNumber::new(52).to_string(), "52");
    }

    #[test]
    fn residue_number_renders_with_insertion_code() {
        assert_eq!(
            ResidueNumber::with_insertion_code(100, 'B').to_string(),
            "100B"
        );
    }

    #[test]
    fn residue_number_renders_negative_numbers() {
        assert_eq!(ResidueNumber::new(-3).to_string(), "-3");
    }

    #[test]
    fn one_letter_code_maps_standard_names() {
        let r = Residue::new(ResidueNumber::new(1), 'A', "TRP", Point3::origin());
        assert_eq!(r.one_letter_code(), 'W');
    }

    #[test]
    fn one_letter_code_maps_selenomethionine_to_parent() {
        let r = Residue::new(ResidueNumber::new(1), 'A', "MSE", Point3::origin());
        assert_eq!(r.one_letter_code(), 'M');
    }

    #[test]
    fn one_letter_code_falls_back_to_x_for_unknown_names() {
        let r = Residue::new(ResidueNumber::new(1), 'A', "LIG", Point3::origin());
        assert_eq!(r.one_letter_code(), 'X');
    }
}
