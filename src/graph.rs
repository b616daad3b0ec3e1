//! Samples a program as a function of one variable.

use log::debug;

use crate::{CalculatorBrain, Program};

#[derive(Debug, Clone, PartialEq)]
pub struct GraphConfig {
    /// Name of the variable substituted at each sample point.
    pub variable: String,
    pub x_min: f64,
    pub x_max: f64,
    pub samples: usize,
}

impl Default for GraphConfig {
    fn default() -> Self {
        GraphConfig {
            variable: "x".to_string(),
            x_min: -10.0,
            x_max: 10.0,
            samples: 200,
        }
    }
}

/// Extremes of the defined samples of a graph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraphStats {
    pub min: f64,
    pub max: f64,
}

/// An independent brain rebuilt from a [`Program`], evaluated point by point.
#[derive(Debug, Clone)]
pub struct Grapher {
    brain: CalculatorBrain,
    config: GraphConfig,
}

impl Grapher {
    pub fn from_program(program: &Program, config: GraphConfig) -> Self {
        let mut brain = CalculatorBrain::new();
        brain.load_program_with_variables(program, &[config.variable.as_str()]);
        debug!("graphing {} over {}", brain.description(), config.variable);
        Grapher { brain, config }
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    pub fn description(&self) -> String {
        self.brain.latest_description()
    }

    /// The program's value at `x`, or `None` where it is undefined.
    pub fn value_for(&mut self, x: f64) -> Option<f64> {
        self.brain.set_variable(self.config.variable.clone(), x);
        self.brain.evaluate().ok().filter(|y| y.is_finite())
    }

    /// Evenly spaced samples from `x_min` to `x_max`, both ends included.
    pub fn samples(&mut self) -> Vec<(f64, Option<f64>)> {
        let GraphConfig {
            x_min,
            x_max,
            samples,
            ..
        } = self.config;
        match samples {
            0 => Vec::new(),
            1 => vec![(x_min, self.value_for(x_min))],
            n => {
                let step = (x_max - x_min) / (n - 1) as f64;
                (0..n)
                    .map(|i| {
                        let x = x_min + step * i as f64;
                        (x, self.value_for(x))
                    })
                    .collect()
            }
        }
    }

    /// Minimum and maximum over the defined samples, `None` if no sample is defined.
    pub fn stats(&mut self) -> Option<GraphStats> {
        self.samples()
            .into_iter()
            .filter_map(|(_, y)| y)
            .fold(None, |stats, y| match stats {
                None => Some(GraphStats { min: y, max: y }),
                Some(GraphStats { min, max }) => Some(GraphStats {
                    min: min.min(y),
                    max: max.max(y),
                }),
            })
    }
}
