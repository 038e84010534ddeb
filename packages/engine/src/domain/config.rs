use serde::{Deserialize, Serialize};

use crate::core::random::DEFAULT_SEED;

use super::constants::{DEFAULT_REPELLER_RADIUS, MAX_PARTICLES, MAX_PARTICLES_LIMIT};
use super::repeller::Repeller;

/// Repeller placement, relative to the viewport
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RepellerConfig {
    /// Fraction of viewport width
    pub x: f64,
    /// Fraction of viewport height
    pub y: f64,
    #[serde(default = "default_repeller_radius")]
    pub radius: f64,
}

impl RepellerConfig {
    pub fn resolve(&self, width: f64, height: f64) -> Repeller {
        Repeller::new(width * self.x, height * self.y, self.radius)
    }
}

/// Startup settings for a simulation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub max_particles: usize,
    pub seed: u32,
    pub perf_metrics: bool,
    pub repellers: Vec<RepellerConfig>,
}

fn default_repeller_radius() -> f64 {
    DEFAULT_REPELLER_RADIUS
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            max_particles: MAX_PARTICLES,
            seed: DEFAULT_SEED,
            perf_metrics: false,
            repellers: vec![
                RepellerConfig { x: 1.0 / 3.0, y: 0.5, radius: 80.0 },
                RepellerConfig { x: 0.7, y: 1.0 / 3.0, radius: 100.0 },
            ],
        }
    }
}

impl SimulationConfig {
    /// Parse and validate a JSON settings object. Missing fields take
    /// their defaults.
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: SimulationConfig = serde_json::from_str(json).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.max_particles == 0 {
            return Err("max_particles must be at least 1".to_string());
        }
        if self.max_particles > MAX_PARTICLES_LIMIT {
            return Err(format!(
                "max_particles must be at most {}, got {}",
                MAX_PARTICLES_LIMIT, self.max_particles
            ));
        }
        for (i, r) in self.repellers.iter().enumerate() {
            if !r.x.is_finite() || !r.y.is_finite() {
                return Err(format!("repellers[{}]: position must be finite", i));
            }
            if !(r.radius.is_finite() && r.radius > 0.0) {
                return Err(format!("repellers[{}]: radius must be positive, got {}", i, r.radius));
            }
        }
        Ok(())
    }

    /// Place the configured repellers in a viewport, in order
    pub fn resolve_repellers(&self, width: f64, height: f64) -> Vec<Repeller> {
        self.repellers.iter().map(|r| r.resolve(width, height)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_place_two_repellers() {
        let config = SimulationConfig::default();
        let repellers = config.resolve_repellers(900.0, 600.0);

        assert_eq!(repellers.len(), 2);
        assert!((repellers[0].x() - 300.0).abs() < 1e-9);
        assert_eq!(repellers[0].y(), 300.0);
        assert_eq!(repellers[0].radius(), 80.0);
        assert!((repellers[1].x() - 630.0).abs() < 1e-9);
        assert!((repellers[1].y() - 200.0).abs() < 1e-9);
        assert_eq!(repellers[1].radius(), 100.0);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = SimulationConfig::from_json(r#"{ "max_particles": 50 }"#).unwrap();
        assert_eq!(config.max_particles, 50);
        assert_eq!(config.seed, DEFAULT_SEED);
        assert_eq!(config.repellers.len(), 2);
    }

    #[test]
    fn repeller_radius_defaults_to_fifty() {
        let config = SimulationConfig::from_json(r#"{ "repellers": [{ "x": 0.5, "y": 0.5 }] }"#).unwrap();
        assert_eq!(config.repellers, vec![RepellerConfig { x: 0.5, y: 0.5, radius: 50.0 }]);
    }

    #[test]
    fn rejects_bad_values() {
        let err = SimulationConfig::from_json(r#"{ "max_particles": 0 }"#).unwrap_err();
        assert!(err.contains("max_particles"));

        let err = SimulationConfig::from_json(r#"{ "max_particles": 18446744073709551615 }"#).unwrap_err();
        assert!(err.contains("at most 100000"));
        assert!(SimulationConfig::from_json(r#"{ "max_particles": 100001 }"#).is_err());
        assert!(SimulationConfig::from_json(r#"{ "max_particles": 100000 }"#).is_ok());

        let err = SimulationConfig::from_json(r#"{ "repellers": [{ "x": 0.5, "y": 0.5, "radius": -1 }] }"#)
            .unwrap_err();
        assert!(err.contains("repellers[0]"));

        assert!(SimulationConfig::from_json("not json").is_err());
    }

    #[test]
    fn json_round_trip_preserves_settings() {
        let config = SimulationConfig {
            max_particles: 10,
            seed: 7,
            perf_metrics: true,
            repellers: vec![],
        };
        assert_eq!(SimulationConfig::from_json(&config.to_json()).unwrap(), config);
    }
}
