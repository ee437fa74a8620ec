//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`ParametersConfig`] – step size and run length
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! The four-body scenario shipped in `scenarios/tetrahedron.yaml`:
//!
//! ```yaml
//! parameters:
//!   interval: 1.0         # step size in seconds
//!   intervals: 1          # exact step count, or:
//!   # time_span: 86400.0  # total time, truncated to whole intervals
//!
//! bodies:
//!   - x: [ 0.0, 0.0, 0.0 ]        # position
//!     p: [ 0.0, 0.0, 0.0 ]        # momentum, optional
//!     m: 5000.0                   # mass
//!   - x: [ 0.0, 0.0, 115470.0 ]
//!     m: 5000.0
//! ```
//!
//! Validation happens here, at the file boundary. The engine itself takes
//! whatever it is given.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use anyhow::{bail, ensure, Context, Result};
use serde::Deserialize;

/// Numerical parameters for a scenario
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ParametersConfig {
    pub interval: f64,          // time step size
    pub intervals: Option<u64>, // run exactly this many steps
    pub time_span: Option<f64>, // or run this much time
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct BodyConfig {
    pub x: [f64; 3],         // Initial position
    #[serde(default)]
    pub p: Option<[f64; 3]>, // Initial momentum, zero when omitted
    pub m: f64,              // Mass of the body
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ScenarioConfig {
    pub parameters: ParametersConfig, // Step size and run length
    pub bodies: Vec<BodyConfig>,      // Bodies that define the initial state of the system
}

impl ScenarioConfig {
    /// Parse and validate a scenario from any YAML source
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let cfg: ScenarioConfig =
            serde_yaml::from_reader(reader).context("malformed scenario YAML")?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse and validate a scenario file
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("failed to open scenario {}", path.display()))?;
        Self::from_reader(BufReader::new(file))
            .with_context(|| format!("failed to load scenario {}", path.display()))
    }

    /// Reject inputs the engine would silently turn into NaN or never run
    pub fn validate(&self) -> Result<()> {
        let params = &self.parameters;
        ensure!(
            params.interval.is_finite() && params.interval > 0.0,
            "interval must be positive and finite, got {}",
            params.interval
        );

        match (params.intervals, params.time_span) {
            (Some(_), Some(_)) => bail!("set either `intervals` or `time_span`, not both"),
            (None, None) => bail!("one of `intervals` or `time_span` is required"),
            (None, Some(span)) => ensure!(
                span.is_finite() && span >= 0.0,
                "time_span must be non-negative and finite, got {}",
                span
            ),
            (Some(_), None) => {}
        }

        for (i, body) in self.bodies.iter().enumerate() {
            ensure!(
                body.m.is_finite() && body.m > 0.0,
                "body {} has non-positive mass {}",
                i,
                body.m
            );
            let finite = body
                .x
                .iter()
                .chain(body.p.iter().flatten())
                .all(|c| c.is_finite());
            ensure!(finite, "body {} has a non-finite position or momentum", i);
        }

        // Coincident bodies normalize a zero displacement on the first step
        for (i, a) in self.bodies.iter().enumerate() {
            if let Some(j) = self.bodies[i + 1..].iter().position(|b| b.x == a.x) {
                bail!("bodies {} and {} share position {:?}", i, i + 1 + j, a.x);
            }
        }

        Ok(())
    }
}
