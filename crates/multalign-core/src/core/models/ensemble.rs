use super::residue::Residue;
use nalgebra::Point3;
use serde::{Deserialize, Serialize};

/// One structure participating in an alignment: a display name plus its
/// ordered, index-stable residue array. Blocks reference residues by index
/// into this array for the alignment's whole lifetime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Structure {
    name: String,
    residues: Vec<Residue>,
}

impl Structure {
    pub fn new(name: &str, residues: Vec<Residue>) -> Self {
        Self {
            name: name.to_string(),
            residues,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn residues(&self) -> &[Residue] {
        &self.residues
    }

    pub fn len(&self) -> usize {
        self.residues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }
}

/// The shared collection of structures an alignment is defined over.
///
/// Owned by the alignment model and read-only to downstream consumers; the
/// derivation and report code only ever borrows from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ensemble {
    structures: Vec<Structure>,
}

impl Ensemble {
    pub fn new(structures: Vec<Structure>) -> Self {
        Self { structures }
    }

    /// Number of participating structures.
    pub fn size(&self) -> usize {
        self.structures.len()
    }

    pub fn structures(&self) -> &[Structure] {
        &self.structures
    }

    pub fn structure(&self, index: usize) -> Option<&Structure> {
        self.structures.get(index)
    }

    pub fn structure_names(&self) -> impl Iterator<Item = &str> {
        self.structures.iter().map(|s| s.name())
    }

    /// Independent copy of a structure's coordinate array, suitable for
    /// handing to the in-place geometry mutators without touching the model.
    pub fn coordinates(&self, index: usize) -> Option<Vec<Point3<f64>>> {
        self.structures
            .get(index)
            .map(|s| s.residues.iter().map(|r| r.position).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::residue::ResidueNumber;

    fn toy_structure() -> Structure {
        Structure::new(
            "1abc.A",
            vec![
                Residue::new(ResidueNumber::new(1), 'A', "GLY", Point3::new(1.0, 0.0, 0.0)),
                Residue::new(ResidueNumber::new(2), 'A', "ALA", Point3::new(0.0, 2.0, 0.0)),
            ],
        )
    }

    #[test]
    fn ensemble_reports_size_and_names() {
        let ensemble = Ensemble::new(vec![toy_structure(), toy_structure()]);
        assert_eq!(ensemble.size(), 2);
        let names: Vec<_> = ensemble.structure_names().collect();
        assert_eq!(names, vec!["1abc.A", "1abc.A"]);
    }

    #[test]
    fn coordinates_returns_independent_copy() {
        let ensemble = Ensemble::new(vec![toy_structure()]);
        let mut coords = ensemble.coordinates(0).unwrap();
        coords[0] = Point3::new(9.0, 9.0, 9.0);
        assert_eq!(
            ensemble.structure(0).unwrap().residues()[0].position,
            Point3::new(1.0, 0.0, 0.0)
        );
    }

    #[test]
    fn coordinates_of_missing_structure_is_none() {
        let ensemble = Ensemble::new(vec![toy_structure()]);
        assert!(ensemble.coordinates(1).is_none());
    }
}
