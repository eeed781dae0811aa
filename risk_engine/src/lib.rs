pub mod cards;
pub mod combat;
pub mod config;
pub mod error;
pub mod game_engine;
pub mod listener;
pub mod mission;
pub mod shared;
pub mod state;
pub mod testing;
pub mod turn;

pub use config::RulesConfig;
pub use error::{ArmyOperation, EngineError};
pub use game_engine::GameEngine;
pub use shared::SharedEngine;
