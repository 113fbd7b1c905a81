use crate::cli::Cli;
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use gridfix::engine::config::RegridConfigBuilder;
use gridfix::engine::progress::ProgressReporter;
use gridfix::workflows::regrid::{self, RegridSummary, SUMMARY_MOLECULES};
use tracing::info;

pub fn run(args: &Cli, progress_handler: &CliProgressHandler) -> Result<RegridSummary> {
    let config = RegridConfigBuilder::new()
        .input_path(&args.input)
        .output_path(&args.output)
        .build()?;

    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    println!("Reading {}...", config.input_path.display());
    info!("Invoking the regrid workflow...");
    let summary = regrid::run(&config, &reporter)?;

    print!("{}", render_summary(&summary));
    println!("Output written to {}", config.output_path.display());
    Ok(summary)
}

pub fn render_summary(summary: &RegridSummary) -> String {
    let mut out = format!(
        "Total lines: {}\nAtoms section spans lines {} to {}\nFixed {} atoms in {} molecules\n",
        summary.line_count,
        summary.section.start,
        summary.section.end,
        summary.atom_count,
        summary.molecule_count()
    );
    out.push_str("\nFirst few molecules positions:\n");
    for (molecule_id, base) in summary.first_molecules(SUMMARY_MOLECULES) {
        out.push_str(&format!(
            "  Molecule {}: ({}, {}, {})\n",
            molecule_id, base.x, base.y, base.z
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use clap::Parser;
    use gridfix::engine::error::EngineError;
    use std::ffi::OsStr;
    use std::fs;

    #[test]
    fn run_repairs_the_given_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("system.data");
        let output = dir.path().join("system_fixed.data");
        fs::write(&input, "Atoms\n\n1 4 1 0.0 0.0 0.0 0.5\n2 4 1 0.0 0.0 0.0 -0.5\n").unwrap();

        let args = Cli::try_parse_from([
            OsStr::new("gridfix"),
            input.as_os_str(),
            output.as_os_str(),
        ])
        .unwrap();
        let summary = run(&args, &CliProgressHandler::hidden()).unwrap();

        assert_eq!(summary.atom_count, 2);
        assert_eq!(
            fs::read_to_string(output).unwrap(),
            "Atoms\n\n1 4 1 0.000000 100.000000 10.000000 10.500000\n2 4 1 0.000000 100.000000 10.000000 9.500000\n"
        );
    }

    #[test]
    fn run_fails_without_writing_when_section_is_missing() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("system.data");
        let output = dir.path().join("system_fixed.data");
        fs::write(&input, "Masses\n\n1 14.007\n").unwrap();

        let args = Cli::try_parse_from([
            OsStr::new("gridfix"),
            input.as_os_str(),
            output.as_os_str(),
        ])
        .unwrap();
        let result = run(&args, &CliProgressHandler::hidden());

        assert!(matches!(result, Err(CliError::Engine(EngineError::Format(_)))));
        assert!(!output.exists());
    }

    #[test]
    fn render_summary_lists_molecule_bases_as_integers() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.data");
        let output = dir.path().join("out.data");
        fs::write(&input, "Atoms\n\n1 2 1 0.0 0.0 0.0 0.0\n2 1 1 0.0 0.0 0.0 0.0\n").unwrap();

        let args = Cli::try_parse_from([
            OsStr::new("gridfix"),
            input.as_os_str(),
            output.as_os_str(),
        ])
        .unwrap();
        let summary = run(&args, &CliProgressHandler::hidden()).unwrap();
        let text = render_summary(&summary);

        assert!(text.contains("Fixed 2 atoms in 2 molecules"));
        assert!(text.contains("  Molecule 1: (260, 10, 10)\n  Molecule 2: (100, 10, 10)\n"));
    }
}
