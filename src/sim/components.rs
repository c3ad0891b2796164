use bitflags::bitflags;

bitflags! {
    /// Keys held during one simulation tic.
    ///
    /// Built fresh by the front-end every tic and passed by value; the
    /// simulation keeps no key state of its own.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct InputState: u8 {
        const FORWARD    = 0x01;
        const BACKWARD   = 0x02;
        const TURN_LEFT  = 0x04;
        const TURN_RIGHT = 0x08;
        const RELOAD     = 0x10; // edge-triggered by the front-end
    }
}

/// Per-tic movement amounts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MoveTuning {
    pub move_step: f32, // map-units / tic
    pub turn_step: f32, // radians / tic
}

impl Default for MoveTuning {
    fn default() -> Self {
        Self {
            move_step: 1.5,
            turn_step: 0.05,
        }
    }
}
