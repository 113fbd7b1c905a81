use crate::core::grid::{GridPlacement, GridSpec};
use crate::core::io::lammps::{AtomSection, LammpsData};
use crate::core::io::traits::DataFile;
use crate::engine::config::RegridConfig;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::translate::place_on_grid;
use nalgebra::Vector3;
use tracing::{debug, info, instrument};

/// Number of molecules listed in the summary report.
pub const SUMMARY_MOLECULES: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct RegridSummary {
    /// Total number of lines in the input file.
    pub line_count: usize,
    /// Where the atom records were found.
    pub section: AtomSection,
    /// Number of atom lines rewritten.
    pub atom_count: usize,
    /// Grid offset of every molecule, in the order molecules were first seen.
    pub molecules: Vec<(i64, Vector3<f64>)>,
}

impl RegridSummary {
    pub fn molecule_count(&self) -> usize {
        self.molecules.len()
    }

    /// The `n` molecules with the lowest ids, sorted by id.
    pub fn first_molecules(&self, n: usize) -> Vec<(i64, Vector3<f64>)> {
        let mut sorted = self.molecules.clone();
        sorted.sort_unstable_by_key(|(id, _)| *id);
        sorted.truncate(n);
        sorted
    }
}

/// Reads `config.input_path`, spreads its molecules over the default grid and
/// writes the result to `config.output_path`.
///
/// Nothing is written when the `Atoms` section is missing or holds no
/// parsable records.
#[instrument(skip_all, name = "regrid_workflow")]
pub fn run(config: &RegridConfig, reporter: &ProgressReporter) -> Result<RegridSummary, EngineError> {
    let mut data = reporter.phase("Reading input", || {
        info!("Reading {}...", config.input_path.display());
        LammpsData::read_from_path(&config.input_path).map_err(|source| EngineError::Read {
            path: config.input_path.clone(),
            source,
        })
    })?;
    info!("Total lines: {}", data.line_count());

    let summary = regrid_in_memory(&mut data, &GridSpec::default(), reporter)?;

    reporter.phase("Writing output", || {
        data.write_to_path(&config.output_path)
            .map_err(|source| EngineError::Write {
                path: config.output_path.clone(),
                source,
            })
    })?;

    info!(
        atoms = summary.atom_count,
        molecules = summary.molecule_count(),
        "Output written to {}",
        config.output_path.display()
    );
    Ok(summary)
}

/// Applies the grid placement to an already loaded file.
pub fn regrid_in_memory(
    data: &mut LammpsData,
    spec: &GridSpec,
    reporter: &ProgressReporter,
) -> Result<RegridSummary, EngineError> {
    let section = reporter.phase("Locating Atoms section", || data.atoms_section())?;
    info!(
        "Parsing atoms from line {} to {}",
        section.start, section.end
    );

    let mut atoms = reporter.phase("Parsing atom records", || data.atom_records(&section))?;
    info!("Parsed {} atoms", atoms.len());

    let mut placement = GridPlacement::new(*spec);
    reporter.phase("Placing molecules", || {
        place_on_grid(data, &mut atoms, &mut placement, reporter)
    })?;

    let summary = RegridSummary {
        line_count: data.line_count(),
        section,
        atom_count: atoms.len(),
        molecules: placement.iter().collect(),
    };
    debug!(cursor = ?placement.cursor(), "Grid cursor after placement");
    reporter.report(Progress::Message(format!(
        "Fixed {} atoms in {} molecules",
        summary.atom_count,
        summary.molecule_count()
    )));
    Ok(summary)
}
