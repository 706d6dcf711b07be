pub mod config;
pub mod error;
pub mod participants;
pub mod types;

pub use config::{MealClass, RunningDinnerConfig, RunningDinnerConfigBuilder};
pub use error::{CoreError, CoreResult};
pub use participants::load_participants;
pub use types::*;
