//! CSV export of cohort telemetry.
//!
//! Every cohort gets five files named after its breed slug, each with a
//! leading `step` column and one row per step run. Cells with no recorded
//! value are left empty.

use crate::error::{IoError, Result};
use crate::manifest::{RunManifest, MANIFEST_FILE};
use cowsim_core::telemetry::Table;
use cowsim_core::{Cohort, Environment};
use std::fmt::Display;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

struct CsvWriter {
    out: BufWriter<File>,
    width: usize,
    path: PathBuf,
}

impl CsvWriter {
    fn create(path: PathBuf, headers: &[String]) -> Result<Self> {
        let file = File::create(&path)
            .map_err(|e| IoError::FileSystem(e).with_context(format!("creating {:?}", path)))?;
        let mut writer = Self {
            out: BufWriter::new(file),
            width: headers.len(),
            path,
        };
        writer.write_row(headers)?;
        Ok(writer)
    }

    fn write_row(&mut self, cells: &[String]) -> Result<()> {
        if cells.len() != self.width {
            return Err(IoError::shape(format!(
                "{} cells for {} columns",
                cells.len(),
                self.width
            ))
            .with_context(format!("writing {:?}", self.path)));
        }
        writeln!(self.out, "{}", cells.join(","))?;
        Ok(())
    }

    fn finish(mut self) -> Result<PathBuf> {
        self.out.flush()?;
        Ok(self.path)
    }
}

fn cell<T: Display>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn write_population(path: PathBuf, cohort: &Cohort) -> Result<PathBuf> {
    let mut csv = CsvWriter::create(path, &["step".to_string(), "population".to_string()])?;
    for (step, count) in cohort.telemetry.population.iter().enumerate() {
        csv.write_row(&[step.to_string(), count.to_string()])?;
    }
    csv.finish()
}

fn write_entities(path: PathBuf, cohort: &Cohort, rows: usize) -> Result<PathBuf> {
    let table = &cohort.telemetry.state;
    let mut headers = vec!["step".to_string()];
    for id in table.ids() {
        headers.push(format!("{id}_age"));
        headers.push(format!("{id}_calories"));
        headers.push(format!("{id}_weight"));
    }

    let mut csv = CsvWriter::create(path, &headers)?;
    for step in 0..rows as u64 {
        let mut cells = vec![step.to_string()];
        for (_, state) in table.row(step) {
            cells.push(cell(state.map(|s| s.age)));
            cells.push(cell(state.map(|s| s.calories)));
            cells.push(cell(state.map(|s| s.weight)));
        }
        csv.write_row(&cells)?;
    }
    csv.finish()
}

fn write_table<T: Clone + Display>(path: PathBuf, table: &Table<T>, rows: usize) -> Result<PathBuf> {
    let mut headers = vec!["step".to_string()];
    headers.extend(table.ids().iter().map(ToString::to_string));

    let mut csv = CsvWriter::create(path, &headers)?;
    for step in 0..rows as u64 {
        let mut cells = vec![step.to_string()];
        cells.extend(table.row(step).map(|(_, value)| cell(value)));
        csv.write_row(&cells)?;
    }
    csv.finish()
}

/// Writes one cohort's tables into `dir` and returns the files written.
pub fn write_cohort<P: AsRef<Path>>(dir: P, cohort: &Cohort) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    let slug = cohort.breed.slug();
    let telemetry = &cohort.telemetry;
    let rows = telemetry.steps_recorded();
    let file = |table: &str| dir.join(format!("{slug}_{table}.csv"));

    Ok(vec![
        write_population(file("population"), cohort)?,
        write_entities(file("entities"), cohort, rows)?,
        write_table(file("feeding"), &telemetry.feeding, rows)?,
        write_table(file("milk"), &telemetry.milk, rows)?,
        write_table(file("methane"), &telemetry.methane, rows)?,
    ])
}

/// Writes every cohort's CSV files and the run manifest into `dir`,
/// creating it if needed.
///
/// # Returns
/// Paths of every file written, manifest last.
pub fn write_report<P: AsRef<Path>>(dir: P, env: &Environment) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    std::fs::create_dir_all(dir)
        .map_err(|e| IoError::FileSystem(e).with_context(format!("creating {:?}", dir)))?;

    let mut written = Vec::new();
    for cohort in env.cohorts() {
        written.extend(write_cohort(dir, cohort)?);
    }

    let files = written
        .iter()
        .filter_map(|p| p.file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .collect();
    let manifest_path = dir.join(MANIFEST_FILE);
    RunManifest::from_environment(env, files).save(&manifest_path)?;
    written.push(manifest_path);

    tracing::info!(dir = %dir.display(), files = written.len(), "Report written");
    Ok(written)
}
