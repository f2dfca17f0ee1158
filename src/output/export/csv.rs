//! CSV export of time series
//!
//! Writes one time column and any number of value columns, compatible with
//! spreadsheets, pandas and most analysis tools. Records are written with the
//! `csv` crate; the optional metadata block is a set of `#` comment lines
//! placed before the header row.
//!
//! # Features
//!
//! - **Metadata support**: optional header with model, solver and parameters
//! - **Customizable**: delimiter, decimal separator, precision, headers
//! - **Downsampling**: export `n` evenly picked rows, first and last included
//! - **Validation**: checks for NaN, empty data, mismatched lengths
//!
//! # Quick Examples
//!
//! ```rust,ignore
//! use photolysis_rs::models::{compute_decay_curve, DecayParameters};
//! use photolysis_rs::output::export::{export_decay_curve_csv, CsvConfig};
//!
//! let curve = compute_decay_curve(DecayParameters::default());
//! export_decay_curve_csv(&curve, "decay.csv", None)?;
//! ```
//!
//! **Output** (`decay.csv`):
//! ```csv
//! Time,Toluene Concentration (ppm)
//! 0.000000,10.000000
//! 1.010101,9.507270
//! ...
//! ```
//!
//! ## With Metadata
//!
//! ```csv
//! # Toluene Photolysis Data
//! # Generated: 2026-10-16T09:30:00+00:00
//! # Model: First-Order Photolysis
//! # Solver: Analytical
//! # Samples: 100
//! # initial_conc: 10
//! # rate_constant: 0.05
//! #
//! Time,Toluene Concentration (ppm)
//! ...
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{PhotolysisError, PhotolysisResult};
use crate::models::{DecayCurve, DecayParameters, RefractiveSeries};
use crate::physics::PhysicalQuantity;
use crate::solver::SimulationResult;

use super::Exporter;

// =================================================================================================
// Configuration Structures
// =================================================================================================

/// Configuration for CSV export
///
/// # Example
///
/// ```rust
/// use photolysis_rs::output::export::CsvConfig;
///
/// let config = CsvConfig {
///     delimiter: ';',
///     precision: 10,
///     ..Default::default()
/// };
/// assert_eq!(config.decimal_separator, '.');
/// ```
#[derive(Clone, Debug)]
pub struct CsvConfig {
    /// Column delimiter, ASCII only (default: ',')
    pub delimiter: char,

    /// Decimal separator (default: '.')
    pub decimal_separator: char,

    /// Number of decimal places for floating-point values (default: 6)
    pub precision: usize,

    /// Include metadata header comments (default: false)
    pub include_metadata: bool,

    /// Metadata to include in header
    pub metadata: Option<CsvMetadata>,

    /// Header of the time column (default: "Time")
    pub time_header: String,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            decimal_separator: '.',
            precision: 6,
            include_metadata: false,
            metadata: None,
            time_header: "Time".to_string(),
        }
    }
}

impl CsvConfig {
    /// European CSV format (semicolon, comma for decimal)
    pub fn european() -> Self {
        Self {
            delimiter: ';',
            decimal_separator: ',',
            ..Default::default()
        }
    }

    /// High precision (12 decimal places)
    pub fn high_precision() -> Self {
        Self {
            precision: 12,
            ..Default::default()
        }
    }

    /// Builder pattern: set delimiter
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Builder pattern: set precision
    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Builder pattern: enable metadata
    pub fn with_metadata(mut self, metadata: CsvMetadata) -> Self {
        self.include_metadata = true;
        self.metadata = Some(metadata);
        self
    }

    fn delimiter_byte(&self) -> PhotolysisResult<u8> {
        u8::try_from(self.delimiter)
            .ok()
            .filter(|b| b.is_ascii())
            .ok_or_else(|| {
                PhotolysisError::invalid_parameter(
                    "delimiter",
                    format!("'{}' is not an ASCII character", self.delimiter),
                )
            })
    }
}

/// Metadata for CSV header comments
///
/// Only fields that are set appear in the header.
#[derive(Clone, Debug, Default)]
pub struct CsvMetadata {
    /// Model name (e.g., "First-Order Photolysis")
    pub model_name: Option<String>,

    /// Solver name (e.g., "Analytical", "Runge-Kutta 4")
    pub solver_name: Option<String>,

    /// Number of samples
    pub samples: Option<usize>,

    /// Model parameters, in insertion order
    pub parameters: Vec<(String, String)>,
}

impl CsvMetadata {
    pub fn from_simulation(model: &str, solver: &str, samples: usize) -> Self {
        Self {
            model_name: Some(model.to_string()),
            solver_name: Some(solver.to_string()),
            samples: Some(samples),
            ..Default::default()
        }
    }

    /// Metadata of a decay pipeline pass
    pub fn from_decay(parameters: &DecayParameters, samples: usize) -> Self {
        let mut metadata = Self::from_simulation("First-Order Photolysis", "Analytical", samples);
        metadata.add_parameter("initial_conc", &parameters.initial_conc.to_string());
        metadata.add_parameter("rate_constant", &parameters.rate_constant.to_string());
        metadata
    }

    /// Metadata taken from a solver result
    pub fn from_result(result: &SimulationResult) -> Self {
        Self {
            model_name: result.get_metadata("model").map(str::to_string),
            solver_name: result.get_metadata("solver").map(str::to_string),
            samples: Some(result.len()),
            ..Default::default()
        }
    }

    pub fn add_parameter(&mut self, key: &str, value: &str) {
        self.parameters.push((key.to_string(), value.to_string()));
    }
}

// =================================================================================================
// Helper Functions
// =================================================================================================

fn write_metadata_header<W: Write>(out: &mut W, metadata: &CsvMetadata) -> PhotolysisResult<()> {
    writeln!(out, "# Toluene Photolysis Data")?;
    writeln!(out, "# Generated: {}", chrono::Utc::now().to_rfc3339())?;

    if let Some(model) = &metadata.model_name {
        writeln!(out, "# Model: {}", model)?;
    }
    if let Some(solver) = &metadata.solver_name {
        writeln!(out, "# Solver: {}", solver)?;
    }
    if let Some(samples) = metadata.samples {
        writeln!(out, "# Samples: {}", samples)?;
    }
    for (key, value) in &metadata.parameters {
        writeln!(out, "# {}: {}", key, value)?;
    }

    writeln!(out, "#")?;
    Ok(())
}

/// Format number with configured precision and decimal separator
fn format_number(value: f64, config: &CsvConfig) -> String {
    let formatted = format!("{:.prec$}", value, prec = config.precision);

    if config.decimal_separator != '.' {
        formatted.replace('.', &config.decimal_separator.to_string())
    } else {
        formatted
    }
}

/// Row indices kept when downsampling `len` rows to `n_points`
///
/// Evenly spread, first and last always included. `None` or `n >= len`
/// keeps every row.
pub(crate) fn downsample_indices(len: usize, n_points: Option<usize>) -> Vec<usize> {
    match n_points {
        Some(n) if n < len && n >= 2 => {
            let last = (len - 1) as f64;
            let mut indices: Vec<usize> = (0..n)
                .map(|i| (i as f64 * last / (n - 1) as f64).round() as usize)
                .collect();
            indices.dedup();
            indices
        }
        Some(1) if len > 0 => vec![0],
        _ => (0..len).collect(),
    }
}

fn validate_columns(time: &[f64], columns: &[(String, &[f64])]) -> PhotolysisResult<()> {
    if time.is_empty() {
        return Err(PhotolysisError::EmptySeries("time series".to_string()));
    }
    if columns.is_empty() {
        return Err(PhotolysisError::EmptySeries("value columns".to_string()));
    }
    if time.iter().any(|t| !t.is_finite()) {
        return Err(PhotolysisError::NonFinite("time series".to_string()));
    }

    for (header, values) in columns {
        if values.len() != time.len() {
            return Err(PhotolysisError::length_mismatch(
                "time points",
                time.len(),
                format!("values in '{}'", header),
                values.len(),
            ));
        }
        if values.iter().any(|v| !v.is_finite()) {
            return Err(PhotolysisError::NonFinite(format!("column '{}'", header)));
        }
    }

    Ok(())
}

// =================================================================================================
// Export Functions
// =================================================================================================

/// Export a time column and labeled value columns
///
/// # Errors
///
/// - Empty data
/// - Mismatched lengths
/// - NaN or Inf values
/// - Non-ASCII delimiter
/// - File creation errors
///
/// Validation happens before the file is created.
pub fn export_series_csv(
    time: &[f64],
    columns: &[(String, &[f64])],
    output_path: impl AsRef<Path>,
    configuration: Option<&CsvConfig>,
) -> PhotolysisResult<()> {
    export_rows_csv(time, columns, None, output_path.as_ref(), configuration)
}

fn export_rows_csv(
    time: &[f64],
    columns: &[(String, &[f64])],
    n_points: Option<usize>,
    output_path: &Path,
    configuration: Option<&CsvConfig>,
) -> PhotolysisResult<()> {
    // ============================= Validation =============================

    validate_columns(time, columns)?;

    let binding = CsvConfig::default();
    let configuration = configuration.unwrap_or(&binding);
    let delimiter = configuration.delimiter_byte()?;

    // ============================= Write Metadata =========================

    let mut file = BufWriter::new(File::create(output_path)?);

    if configuration.include_metadata {
        if let Some(metadata) = &configuration.metadata {
            write_metadata_header(&mut file, metadata)?;
        }
    }

    // ============================= Write Records ==========================

    let mut writer = ::csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(file);

    let header: Vec<&str> = std::iter::once(configuration.time_header.as_str())
        .chain(columns.iter().map(|(h, _)| h.as_str()))
        .collect();
    writer.write_record(&header)?;

    for i in downsample_indices(time.len(), n_points) {
        let record: Vec<String> = std::iter::once(time[i])
            .chain(columns.iter().map(|(_, values)| values[i]))
            .map(|v| format_number(v, configuration))
            .collect();
        writer.write_record(&record)?;
    }

    writer.flush()?;

    log::info!("CSV written to {}", output_path.display());
    Ok(())
}

/// Export a decay curve: `Time`, `Toluene Concentration (ppm)`
///
/// When metadata is requested without explicit content, the decay
/// parameters are written.
pub fn export_decay_curve_csv(
    curve: &DecayCurve,
    output_path: impl AsRef<Path>,
    configuration: Option<&CsvConfig>,
) -> PhotolysisResult<()> {
    let mut configuration = configuration.cloned().unwrap_or_default();
    if configuration.include_metadata && configuration.metadata.is_none() {
        configuration.metadata = Some(CsvMetadata::from_decay(&curve.parameters(), curve.len()));
    }

    let columns = [(
        format!("Toluene {}", PhysicalQuantity::Concentration.header()),
        curve.concentration().as_slice(),
    )];

    export_series_csv(
        curve.time().as_slice(),
        &columns,
        output_path,
        Some(&configuration),
    )
}

/// Export a lab run: index, rate, fringe shift and depth-corrected index
pub fn export_refractive_series_csv(
    series: &RefractiveSeries,
    output_path: impl AsRef<Path>,
    configuration: Option<&CsvConfig>,
) -> PhotolysisResult<()> {
    let mut configuration = configuration.cloned().unwrap_or_else(|| CsvConfig {
        time_header: "Time (min)".to_string(),
        precision: 8,
        ..Default::default()
    });
    if configuration.include_metadata && configuration.metadata.is_none() {
        let c = series.conditions();
        let mut metadata =
            CsvMetadata::from_simulation("Logistic Refractive Index", "Analytical", series.len());
        metadata.add_parameter("temperature", &c.temperature.to_string());
        metadata.add_parameter("uv_intensity", &c.uv_intensity.to_string());
        metadata.add_parameter("depth", &c.depth.to_string());
        metadata.add_parameter("mode", &c.mode.to_string());
        configuration.metadata = Some(metadata);
    }

    let time = series.time();
    let index = series.refractive_index();
    let rate = series.photolysis_rate();
    let fringe = series.fringe_shift();
    let spatial = series.spatial_index();

    let columns = [
        (index.quantity().header(), index.as_slice()),
        (rate.quantity().header(), rate.as_slice()),
        (fringe.quantity().header(), fringe.as_slice()),
        (spatial.quantity().header(), spatial.as_slice()),
    ];

    export_series_csv(time.as_slice(), &columns, output_path, Some(&configuration))
}

// =================================================================================================
// CsvExporter
// =================================================================================================

/// [`Exporter`] writing CSV files
#[derive(Clone, Debug, Default)]
pub struct CsvExporter {
    pub config: CsvConfig,
}

impl CsvExporter {
    pub fn new(config: CsvConfig) -> Self {
        Self { config }
    }

    fn config_for(&self, result: &SimulationResult) -> CsvConfig {
        let mut config = self.config.clone();
        if config.include_metadata && config.metadata.is_none() {
            config.metadata = Some(CsvMetadata::from_result(result));
        }
        config
    }
}

impl Exporter for CsvExporter {
    type Error = PhotolysisError;

    fn export_single(
        &self,
        result: &SimulationResult,
        n_points: Option<usize>,
        path: &Path,
    ) -> Result<(), Self::Error> {
        let columns = [(result.quantity().header(), result.values.as_slice())];
        let config = self.config_for(result);
        export_rows_csv(
            result.time_points.as_slice(),
            &columns,
            n_points,
            path,
            Some(&config),
        )
    }

    fn export_multi(
        &self,
        results: &[(&str, &SimulationResult)],
        n_points: Option<usize>,
        path: &Path,
    ) -> Result<(), Self::Error> {
        let (_, first) = results
            .first()
            .ok_or_else(|| PhotolysisError::EmptySeries("result list".to_string()))?;

        let columns: Vec<(String, &[f64])> = results
            .iter()
            .map(|(label, result)| (label.to_string(), result.values.as_slice()))
            .collect();

        let config = self.config_for(first);
        export_rows_csv(
            first.time_points.as_slice(),
            &columns,
            n_points,
            path,
            Some(&config),
        )
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{compute_decay_curve, LabConditions};
    use std::fs;
    use tempfile::NamedTempFile;

    fn read(path: &Path) -> String {
        fs::read_to_string(path).unwrap()
    }

    #[test]
    fn test_decay_export_default() {
        let file = NamedTempFile::new().unwrap();
        let curve = compute_decay_curve(DecayParameters::default());

        export_decay_curve_csv(&curve, file.path(), None).unwrap();

        let content = read(file.path());
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "Time,Toluene Concentration (ppm)");
        assert_eq!(lines[1], "0.000000,10.000000");
        assert_eq!(lines[100], "100.000000,0.067379");
        assert_eq!(lines.len(), 101);
    }

    #[test]
    fn test_metadata_header() {
        let file = NamedTempFile::new().unwrap();
        let curve = compute_decay_curve(DecayParameters::default());
        let config = CsvConfig {
            include_metadata: true,
            ..Default::default()
        };

        export_decay_curve_csv(&curve, file.path(), Some(&config)).unwrap();

        let content = read(file.path());
        assert!(content.starts_with("# Toluene Photolysis Data\n# Generated: "));
        assert!(content.contains("# Model: First-Order Photolysis"));
        assert!(content.contains("# initial_conc: 10"));
        assert!(content.contains("# rate_constant: 0.05"));
        assert!(content.contains("#\nTime,"));
    }

    #[test]
    fn test_european_format() {
        let file = NamedTempFile::new().unwrap();
        let time = [0.0, 1.5];
        let values = [2.25, 1.0];
        let columns = [("C".to_string(), &values[..])];

        export_series_csv(&time, &columns, file.path(), Some(&CsvConfig::european().precision(2)))
            .unwrap();

        assert_eq!(read(file.path()), "Time;C\n0,00;2,25\n1,50;1,00\n");
    }

    #[test]
    fn test_validation_errors() {
        let file = NamedTempFile::new().unwrap();
        let time = [0.0, 1.0];
        let short = [1.0];
        let nan = [1.0, f64::NAN];

        let err = export_series_csv(&time, &[("x".to_string(), &short[..])], file.path(), None)
            .unwrap_err();
        assert!(matches!(err, PhotolysisError::LengthMismatch { .. }));

        let err = export_series_csv(&time, &[("x".to_string(), &nan[..])], file.path(), None)
            .unwrap_err();
        assert!(matches!(err, PhotolysisError::NonFinite(_)));

        let err = export_series_csv(&[], &[], file.path(), None).unwrap_err();
        assert!(matches!(err, PhotolysisError::EmptySeries(_)));

        let err = export_series_csv(
            &time,
            &[("x".to_string(), &time[..])],
            file.path(),
            Some(&CsvConfig::default().delimiter('é')),
        )
        .unwrap_err();
        assert!(matches!(err, PhotolysisError::InvalidParameter { .. }));
    }

    #[test]
    fn test_downsample_indices() {
        assert_eq!(downsample_indices(5, None), vec![0, 1, 2, 3, 4]);
        assert_eq!(downsample_indices(5, Some(10)), vec![0, 1, 2, 3, 4]);
        assert_eq!(downsample_indices(100, Some(4)), vec![0, 33, 66, 99]);
        assert_eq!(downsample_indices(100, Some(1)), vec![0]);

        let picked = downsample_indices(100, Some(7));
        assert_eq!(picked.first(), Some(&0));
        assert_eq!(picked.last(), Some(&99));
    }

    #[test]
    fn test_refractive_export_columns() {
        let file = NamedTempFile::new().unwrap();
        let series = RefractiveSeries::generate(10.0, 1.0, LabConditions::default()).unwrap();

        export_refractive_series_csv(&series, file.path(), None).unwrap();

        let content = read(file.path());
        let header = content.lines().next().unwrap();
        assert_eq!(
            header,
            "Time (min),Refractive Index,Photolysis Rate (1/min),Fringe Shift (fringes),Depth-Corrected Index"
        );
        assert_eq!(content.lines().count(), 12);
    }
}
