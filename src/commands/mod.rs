//! Command implementations

pub mod analyze;
pub mod play;
pub mod simulate;

pub use analyze::{AnalysisResult, analyze_attributes};
pub use play::{GameConfig, GameOutcome, run_play};
pub use simulate::{SimulationResult, SimulationStatistics, run_simulation, simulate_entity};
