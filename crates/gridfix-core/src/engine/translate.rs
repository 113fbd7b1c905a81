use super::error::EngineError;
use super::progress::{Progress, ProgressReporter};
use crate::core::grid::GridPlacement;
use crate::core::io::lammps::LammpsData;
use crate::core::models::atom::AtomRecord;
use tracing::trace;

/// Moves each atom onto its molecule's grid cell and rewrites its source line.
///
/// The stored coordinates are treated as local to the molecule, so every atom
/// of a molecule receives the same offset and the molecule keeps its shape.
pub fn place_on_grid(
    data: &mut LammpsData,
    atoms: &mut [AtomRecord],
    placement: &mut GridPlacement,
    reporter: &ProgressReporter,
) -> Result<(), EngineError> {
    reporter.report(Progress::TaskStart {
        total_steps: atoms.len() as u64,
    });

    for atom in atoms.iter_mut() {
        let offset = placement.offset_for(atom.molecule_id);
        atom.translate(&offset);
        trace!(
            atom = atom.id,
            molecule = atom.molecule_id,
            "Moved atom to ({:.6}, {:.6}, {:.6})",
            atom.position.x,
            atom.position.y,
            atom.position.z
        );

        if !data.rewrite_atom(atom) {
            return Err(EngineError::Internal(format!(
                "Atom {} refers to line {} which is outside the file",
                atom.id, atom.line_index
            )));
        }
        reporter.report(Progress::TaskIncrement);
    }

    reporter.report(Progress::TaskFinish);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector3;

    const TWO_MOLECULES: &str = "\
Atoms

1 10 1 0.0 0.0 0.0 0.55
2 10 1 0.0 0.0 0.0 -0.55
3 20 2 0.0 1.5 -0.5 0.0
4 10 1 0.0 0.25 0.0 0.0
";

    fn parsed(text: &str) -> (LammpsData, Vec<AtomRecord>) {
        let data = LammpsData::from_text(text);
        let section = data.atoms_section().unwrap();
        let atoms = data.atom_records(&section).unwrap();
        (data, atoms)
    }

    #[test]
    fn atoms_of_one_molecule_share_the_same_displacement() {
        let (mut data, mut atoms) = parsed(TWO_MOLECULES);
        let before: Vec<_> = atoms.iter().map(|a| a.position).collect();
        let mut placement = GridPlacement::default();

        place_on_grid(&mut data, &mut atoms, &mut placement, &ProgressReporter::new()).unwrap();

        let shifts: Vec<Vector3<f64>> = atoms
            .iter()
            .zip(&before)
            .map(|(atom, old)| atom.position - old)
            .collect();
        let close = |a: Vector3<f64>, b: Vector3<f64>| (a - b).norm() < 1e-9;
        assert!(close(shifts[0], Vector3::new(100.0, 10.0, 10.0)));
        assert!(close(shifts[1], shifts[0]));
        assert!(close(shifts[3], shifts[0]));
        assert!(close(shifts[2], Vector3::new(260.0, 10.0, 10.0)));
        assert_eq!(placement.len(), 2);
    }

    #[test]
    fn rewritten_lines_replace_the_source_lines() {
        let (mut data, mut atoms) = parsed(TWO_MOLECULES);
        let mut placement = GridPlacement::default();

        place_on_grid(&mut data, &mut atoms, &mut placement, &ProgressReporter::new()).unwrap();

        assert_eq!(
            data.to_text(),
            "\
Atoms

1 10 1 0.000000 100.000000 10.000000 10.550000
2 10 1 0.000000 100.000000 10.000000 9.450000
3 20 2 0.000000 261.500000 9.500000 10.000000
4 10 1 0.000000 100.250000 10.000000 10.000000
"
        );
    }

    #[test]
    fn atom_pointing_outside_the_file_is_an_internal_error() {
        let (mut data, mut atoms) = parsed(TWO_MOLECULES);
        atoms[0].line_index = 99;

        let result = place_on_grid(
            &mut data,
            &mut atoms,
            &mut GridPlacement::default(),
            &ProgressReporter::new(),
        );
        assert!(matches!(result, Err(EngineError::Internal(_))));
    }
}
