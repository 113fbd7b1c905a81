use nalgebra::{Point3, Vector3};

/// Minimum number of whitespace-separated columns an atom line must carry.
pub const ATOM_RECORD_COLUMNS: usize = 7;

/// A single record of the `Atoms` section in `full` atom style.
///
/// The record remembers the index of the line it was parsed from so that the
/// regenerated text can be written back to the same position in the file.
#[derive(Debug, Clone, PartialEq)]
pub struct AtomRecord {
    /// The atom id, unique within the source file.
    pub id: i64,
    /// The molecule id shared by all atoms of one molecule.
    pub molecule_id: i64,
    /// The numeric atom type.
    pub atom_type: i64,
    /// The partial charge in elementary charge units.
    pub charge: f64,
    /// The Cartesian coordinates of the atom.
    pub position: Point3<f64>,
    /// Zero-based index of the source line in the file.
    pub line_index: usize,
}

impl AtomRecord {
    /// Parses one line of the `Atoms` section.
    ///
    /// Returns `None` unless the line has at least seven columns where the
    /// first three are integers and the next four are floats. Columns past
    /// the seventh (image flags, comments) are ignored.
    pub fn parse_line(line: &str, line_index: usize) -> Option<Self> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() < ATOM_RECORD_COLUMNS {
            return None;
        }

        let id = parts[0].parse().ok()?;
        let molecule_id = parts[1].parse().ok()?;
        let atom_type = parts[2].parse().ok()?;
        let charge = parts[3].parse().ok()?;
        let x = parts[4].parse().ok()?;
        let y = parts[5].parse().ok()?;
        let z = parts[6].parse().ok()?;

        Some(Self {
            id,
            molecule_id,
            atom_type,
            charge,
            position: Point3::new(x, y, z),
            line_index,
        })
    }

    /// Moves the atom by `offset`.
    pub fn translate(&mut self, offset: &Vector3<f64>) {
        self.position += offset;
    }

    /// Formats the record as a data file line, including the trailing newline.
    pub fn to_line(&self) -> String {
        format!(
            "{} {} {} {:.6} {:.6} {:.6} {:.6}\n",
            self.id,
            self.molecule_id,
            self.atom_type,
            self.charge,
            self.position.x,
            self.position.y,
            self.position.z
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_line_reads_all_seven_columns() {
        let atom = AtomRecord::parse_line("5 2 1 -0.5 1.0 2.0 3.0", 12).unwrap();

        assert_eq!(atom.id, 5);
        assert_eq!(atom.molecule_id, 2);
        assert_eq!(atom.atom_type, 1);
        assert_eq!(atom.charge, -0.5);
        assert_eq!(atom.position, Point3::new(1.0, 2.0, 3.0));
        assert_eq!(atom.line_index, 12);
    }

    #[test]
    fn parse_line_tolerates_irregular_whitespace_and_extra_columns() {
        let atom = AtomRecord::parse_line("  7\t3  2 0.1  -1.5e1 0 4.25  0 0 1 # N2\n", 0).unwrap();

        assert_eq!(atom.id, 7);
        assert_eq!(atom.molecule_id, 3);
        assert_eq!(atom.position, Point3::new(-15.0, 0.0, 4.25));
    }

    #[test]
    fn parse_line_rejects_short_lines() {
        assert!(AtomRecord::parse_line("1 1 1 0.0 0.0 0.0", 0).is_none());
        assert!(AtomRecord::parse_line("", 0).is_none());
    }

    #[test]
    fn parse_line_rejects_non_integer_leading_columns() {
        assert!(AtomRecord::parse_line("1.0 1 1 0.0 0.0 0.0 0.0", 0).is_none());
        assert!(AtomRecord::parse_line("1 N2 1 0.0 0.0 0.0 0.0", 0).is_none());
    }

    #[test]
    fn parse_line_rejects_non_numeric_coordinates() {
        assert!(AtomRecord::parse_line("1 1 1 0.0 x 0.0 0.0", 0).is_none());
    }

    #[test]
    fn to_line_uses_six_decimal_fields_and_drops_extra_columns() {
        let atom = AtomRecord::parse_line("5 2 1 0.0 1.0 2.0 3.0 0 0 0", 0).unwrap();
        assert_eq!(atom.to_line(), "5 2 1 0.000000 1.000000 2.000000 3.000000\n");
    }

    #[test]
    fn translate_shifts_position_by_offset() {
        let mut atom = AtomRecord::parse_line("5 2 1 0.0 1.0 2.0 3.0", 0).unwrap();
        atom.translate(&Vector3::new(100.0, 10.0, 10.0));

        assert_eq!(atom.position, Point3::new(101.0, 12.0, 13.0));
        assert_eq!(
            atom.to_line(),
            "5 2 1 0.000000 101.000000 12.000000 13.000000\n"
        );
    }
}
