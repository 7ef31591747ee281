use config::{Config, ConfigError, File};
use serde::Deserialize;

// Settings get loaded once in main and handed to the pilot at construction,
// so tests can run the decision logic with alternate thresholds.
#[derive(Deserialize, Clone, Debug)]
pub struct Settings {
    pub checkpoint_radius: f64,
    pub pod_collision_radius: f64,
    pub heading_error_threshold: i32,
    pub boost_count: u32,
    pub friction_coefficient: f64,
}

impl Settings {
    pub fn load() -> Result<Settings, ConfigError> {
        let config = Config::builder()
            .set_default("checkpoint_radius", 600.0)?
            .set_default("pod_collision_radius", 400.0)?
            .set_default("heading_error_threshold", 90)?
            .set_default("boost_count", 1)?
            .set_default("friction_coefficient", 0.85)?
            .add_source(File::with_name("config.yaml").required(false))
            .build()?;

        config.try_deserialize()
    }
}

impl Default for Settings {
    fn default() -> Settings {
        Settings {
            checkpoint_radius: 600.0,
            pod_collision_radius: 400.0,
            heading_error_threshold: 90,
            boost_count: 1,
            friction_coefficient: 0.85,
        }
    }
}
