pub mod geometry;
pub mod settings;
pub mod track;

pub use settings::Settings;
