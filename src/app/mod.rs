//! The decay demonstrator
//!
//! One pipeline pass is
//!
//! ```text
//! ControlPanel ──► DecayParameters ──► compute_decay_curve ──► chart / CSV
//!   (clamp)            (valid)               (pure)             (render)
//! ```
//!
//! [`DecayApp`] owns the controls and the last computed curve and re-runs
//! the full pass on every control change. [`session`] drives it from a
//! line-oriented command stream.

pub mod playback;
pub mod session;

pub use playback::Playback;
pub use session::{run_session, Command, SessionOutcome};

use std::fmt;
use std::path::PathBuf;

use crate::analysis::CurveSummary;
use crate::controls::{ControlId, ControlPanel};
use crate::error::PhotolysisResult;
use crate::models::{compute_decay_curve, DecayCurve, DecayParameters};
use crate::output::{export_decay_curve_csv, plot_decay_curve, CsvConfig, PlotConfig};
use crate::output::visualization::NO_TITLE;

/// Where each pass writes its artifacts
#[derive(Debug, Clone)]
pub struct OutputTargets {
    /// Chart file, `.svg` or bitmap
    pub chart: Option<PathBuf>,
    pub csv: Option<PathBuf>,
    pub plot_config: PlotConfig,
    pub csv_config: CsvConfig,
}

impl OutputTargets {
    /// Compute only, write nothing
    pub fn none() -> Self {
        Self {
            chart: None,
            csv: None,
            plot_config: PlotConfig::decay_curve(NO_TITLE),
            csv_config: CsvConfig::default(),
        }
    }

    pub fn chart(path: impl Into<PathBuf>) -> Self {
        Self {
            chart: Some(path.into()),
            ..Self::none()
        }
    }

    pub fn with_csv(mut self, path: impl Into<PathBuf>) -> Self {
        self.csv = Some(path.into());
        self
    }
}

impl Default for OutputTargets {
    fn default() -> Self {
        Self::none()
    }
}

/// Outcome of one pipeline pass
#[derive(Debug, Clone, PartialEq)]
pub struct RenderReport {
    pub parameters: DecayParameters,
    pub summary: CurveSummary,
    pub chart: Option<PathBuf>,
    pub csv: Option<PathBuf>,
}

impl fmt::Display for RenderReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "C0 = {}, k = {} | {}",
            self.parameters.initial_conc, self.parameters.rate_constant, self.summary
        )?;
        if let Some(chart) = &self.chart {
            write!(f, " | chart: {}", chart.display())?;
        }
        if let Some(csv) = &self.csv {
            write!(f, " | csv: {}", csv.display())?;
        }
        Ok(())
    }
}

/// Controls, current curve and playback cursor
#[derive(Debug, Clone)]
pub struct DecayApp {
    panel: ControlPanel,
    curve: DecayCurve,
    playback: Playback,
    outputs: OutputTargets,
}

impl DecayApp {
    /// App at default control values; nothing is written until a pass runs
    pub fn new(outputs: OutputTargets) -> Self {
        let panel = ControlPanel::new();
        let curve = compute_decay_curve(panel.parameters());
        let playback = Playback::new(curve.len());
        Self {
            panel,
            curve,
            playback,
            outputs,
        }
    }

    pub fn with_panel(panel: ControlPanel, outputs: OutputTargets) -> Self {
        let mut app = Self::new(outputs);
        app.panel = panel;
        app.curve = compute_decay_curve(app.panel.parameters());
        app.playback.reset(app.curve.len());
        app
    }

    pub fn panel(&self) -> &ControlPanel {
        &self.panel
    }

    pub fn curve(&self) -> &DecayCurve {
        &self.curve
    }

    pub fn playback(&self) -> &Playback {
        &self.playback
    }

    pub fn playback_mut(&mut self) -> &mut Playback {
        &mut self.playback
    }

    pub fn outputs(&self) -> &OutputTargets {
        &self.outputs
    }

    /// `(time, concentration)` under the playback cursor
    pub fn current_sample(&self) -> Option<(f64, f64)> {
        self.curve.sample(self.playback.position())
    }

    /// Full pass: read controls, compute, render, export
    pub fn run_pipeline(&mut self) -> PhotolysisResult<RenderReport> {
        // ====== Step 1: Input ======

        let parameters = self.panel.parameters();

        // ====== Step 2: Compute ======

        self.curve = compute_decay_curve(parameters);
        self.playback.reset(self.curve.len());

        // ====== Step 3: Render ======

        if let Some(path) = &self.outputs.chart {
            plot_decay_curve(&self.curve, path, Some(&self.outputs.plot_config))?;
        }
        if let Some(path) = &self.outputs.csv {
            export_decay_curve_csv(&self.curve, path, Some(&self.outputs.csv_config))?;
        }

        log::debug!(
            "pipeline pass: C0={} k={}",
            parameters.initial_conc,
            parameters.rate_constant
        );

        Ok(RenderReport {
            parameters,
            summary: CurveSummary::of_decay(&self.curve),
            chart: self.outputs.chart.clone(),
            csv: self.outputs.csv.clone(),
        })
    }

    /// Set a control (clamped) and re-run the pipeline
    pub fn set(&mut self, id: ControlId, value: f64) -> PhotolysisResult<RenderReport> {
        self.panel.set(id, value)?;
        self.run_pipeline()
    }

    pub fn increment(&mut self, id: ControlId) -> PhotolysisResult<RenderReport> {
        self.panel.increment(id);
        self.run_pipeline()
    }

    pub fn decrement(&mut self, id: ControlId) -> PhotolysisResult<RenderReport> {
        self.panel.decrement(id);
        self.run_pipeline()
    }

    /// Restore both defaults and re-run the pipeline
    pub fn reset(&mut self) -> PhotolysisResult<RenderReport> {
        self.panel.reset();
        self.run_pipeline()
    }
}

impl Default for DecayApp {
    fn default() -> Self {
        Self::new(OutputTargets::none())
    }
}

// =================================================================================================
// Tests
// =================================================================================================
