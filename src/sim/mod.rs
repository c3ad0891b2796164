mod collision;
mod components;
mod systems;
mod tic;

pub use collision::can_move_to;
pub use components::{InputState, MoveTuning};
pub use systems::apply_input;
pub use tic::{SIM_FPS, StopFlag, TicRunner};
