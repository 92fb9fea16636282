//! Game Module
//!
//! The platformer itself: one fixed level, a player, patrolling enemies,
//! coins and a finish flag.
//!
//! Key pieces:
//! - Simulation: owns every entity and runs one fixed step in declared order
//! - GameState: menu, playing, and the two terminal end states
//! - Events: what happened during a step (hits, pickups, state changes)
//! - Renderer: the only part that touches the screen
//!
//! Movement and animation are tuned per step; cooldowns are measured in
//! wall-clock seconds through `Clock`. The app runs steps from a
//! `FixedStep` accumulator so the two stay consistent across frame rates.

pub mod animation;
pub mod clock;
pub mod collision;
pub mod enemy;
pub mod event;
pub mod level;
pub mod player;
pub mod renderer;
pub mod simulation;
pub mod state;
pub mod timestep;
pub mod world;

// Re-export main types
pub use clock::FrameClock;
pub use level::Level;
pub use player::{PlayerInput, PlayerTuning};
pub use simulation::Simulation;
pub use state::GameState;
pub use timestep::FixedStep;
