use super::traits::DataFile;
use crate::core::models::atom::AtomRecord;
use std::io::{self, BufRead, Read, Write};
use std::ops::Range;
use thiserror::Error;
use tracing::{debug, trace};

/// Header token that opens the atom section.
pub const ATOMS_SECTION_MARKER: &str = "Atoms";

/// Section headers that may directly follow the atom section.
pub const FOLLOWING_SECTIONS: [&str; 4] = ["Bonds", "Velocities", "Angles", "Dihedrals"];

#[derive(Debug, Error)]
pub enum LammpsError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Could not find the {0} section")]
    MissingSection(&'static str),
    #[error("No atom records found between lines {start} and {end}")]
    NoAtomRecords { start: usize, end: usize },
}

/// The raw lines of a text file, each keeping its own line terminator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineBuffer {
    lines: Vec<String>,
}

impl LineBuffer {
    pub fn from_text(text: &str) -> Self {
        Self {
            lines: text.split_inclusive('\n').map(str::to_owned).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    /// Replaces the line at `index`. Returns `false` if the index is out of range.
    pub fn replace(&mut self, index: usize, line: String) -> bool {
        match self.lines.get_mut(index) {
            Some(slot) => {
                *slot = line;
                true
            }
            None => false,
        }
    }

    pub fn to_text(&self) -> String {
        self.lines.concat()
    }
}

/// Position of the atom section inside a [`LineBuffer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AtomSection {
    /// Index of the line holding the `Atoms` header.
    pub header_line: usize,
    /// Index of the first line after the header that is not blank.
    pub start: usize,
    /// One past the last line of the section.
    pub end: usize,
}

impl AtomSection {
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

fn is_section_header(line: &str) -> bool {
    line.contains(ATOMS_SECTION_MARKER) && !line.trim().starts_with('#')
}

fn ends_section(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty() || FOLLOWING_SECTIONS.contains(&trimmed)
}

/// Finds the atom section in `buffer`.
///
/// The header is the first non-comment line containing `Atoms`. Blank lines
/// directly after it are skipped; the section then runs until the first blank
/// line or following section header, or to the end of the file.
pub fn locate_atoms_section(buffer: &LineBuffer) -> Result<AtomSection, LammpsError> {
    let header_line = buffer
        .lines()
        .position(is_section_header)
        .ok_or(LammpsError::MissingSection(ATOMS_SECTION_MARKER))?;
    debug!(
        "Found {} section at line {}: {}",
        ATOMS_SECTION_MARKER,
        header_line,
        buffer.line(header_line).unwrap_or_default().trim()
    );

    let start = (header_line + 1..buffer.len())
        .find(|&i| buffer.line(i).is_some_and(|line| !line.trim().is_empty()))
        .unwrap_or(buffer.len());

    let end = match (start..buffer.len()).find(|&i| buffer.line(i).is_some_and(ends_section)) {
        Some(end) => {
            debug!("{} section ends at line {}", ATOMS_SECTION_MARKER, end);
            end
        }
        None => buffer.len(),
    };

    Ok(AtomSection {
        header_line,
        start,
        end,
    })
}

/// Parses every qualifying record inside `section`.
///
/// Lines that do not look like an atom record are skipped rather than
/// treated as errors.
pub fn parse_atom_records(buffer: &LineBuffer, section: &AtomSection) -> Vec<AtomRecord> {
    section
        .range()
        .filter_map(|index| {
            let line = buffer.line(index)?;
            let record = AtomRecord::parse_line(line, index);
            if record.is_none() {
                trace!("Skipping unparsable line {}: {:?}", index, line.trim_end());
            }
            record
        })
        .collect()
}

/// A LAMMPS data file held entirely in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LammpsData {
    buffer: LineBuffer,
}

impl LammpsData {
    pub fn from_text(text: &str) -> Self {
        Self {
            buffer: LineBuffer::from_text(text),
        }
    }

    pub fn buffer(&self) -> &LineBuffer {
        &self.buffer
    }

    pub fn line_count(&self) -> usize {
        self.buffer.len()
    }

    pub fn atoms_section(&self) -> Result<AtomSection, LammpsError> {
        locate_atoms_section(&self.buffer)
    }

    /// Parses the records of `section`, failing if none qualify.
    pub fn atom_records(&self, section: &AtomSection) -> Result<Vec<AtomRecord>, LammpsError> {
        let atoms = parse_atom_records(&self.buffer, section);
        if atoms.is_empty() {
            return Err(LammpsError::NoAtomRecords {
                start: section.start,
                end: section.end,
            });
        }
        Ok(atoms)
    }

    /// Writes the formatted record over the line it was parsed from.
    pub fn rewrite_atom(&mut self, atom: &AtomRecord) -> bool {
        self.buffer.replace(atom.line_index, atom.to_line())
    }

    pub fn to_text(&self) -> String {
        self.buffer.to_text()
    }
}

impl DataFile for LammpsData {
    type Error = LammpsError;

    fn read_from(reader: &mut impl BufRead) -> Result<Self, Self::Error> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Ok(Self::from_text(&text))
    }

    fn write_to(&self, writer: &mut impl Write) -> Result<(), Self::Error> {
        for line in self.buffer.lines() {
            writer.write_all(line.as_bytes())?;
        }
        Ok(())
    }
}
