use super::{InputState, MoveTuning, collision::can_move_to};
use crate::world::{OccupancySurface, Pose};

/// Apply one tic of input to the viewer.
///
/// Turning is applied first so a forward step uses the new heading.
/// Each step is checked on its own; a blocked step leaves the pose where it
/// was.
pub fn apply_input(
    pose: &mut Pose,
    input: InputState,
    surface: &OccupancySurface,
    tuning: &MoveTuning,
) {
    /* 1. turn */
    if input.contains(InputState::TURN_LEFT) {
        pose.turn(-tuning.turn_step);
    }
    if input.contains(InputState::TURN_RIGHT) {
        pose.turn(tuning.turn_step);
    }

    /* 2. gated steps */
    if input.contains(InputState::FORWARD) {
        try_step(pose, tuning.move_step, surface);
    }
    if input.contains(InputState::BACKWARD) {
        try_step(pose, -tuning.move_step, surface);
    }
}

fn try_step(pose: &mut Pose, distance: f32, surface: &OccupancySurface) {
    let next = pose.stepped(distance);
    if can_move_to(surface, next) {
        pose.pos = next;
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn corridor() -> OccupancySurface {
        // open strip 1..=8 on row 1..=2, walls elsewhere
        OccupancySurface::from_fn(10, 4, |x, y| !(1..=8).contains(&x) || !(1..=2).contains(&y))
    }

    #[test]
    fn forward_until_blocked() {
        let s = corridor();
        let tuning = MoveTuning {
            move_step: 1.0,
            turn_step: 0.05,
        };
        let mut pose = Pose::new(Vec2::new(1.5, 1.5), 0.0);
        for _ in 0..20 {
            apply_input(&mut pose, InputState::FORWARD, &s, &tuning);
        }
        assert!((pose.pos.x - 8.5).abs() < 1e-4);
        assert!((pose.pos.y - 1.5).abs() < 1e-4);
    }

    #[test]
    fn backward_and_turning() {
        let s = corridor();
        let tuning = MoveTuning::default();
        let mut pose = Pose::new(Vec2::new(5.5, 1.5), 0.0);

        apply_input(&mut pose, InputState::BACKWARD, &s, &tuning);
        assert!((pose.pos.x - (5.5 - tuning.move_step)).abs() < 1e-5);

        apply_input(&mut pose, InputState::TURN_LEFT, &s, &tuning);
        assert!((pose.angle + tuning.turn_step).abs() < 1e-6);
        apply_input(
            &mut pose,
            InputState::TURN_LEFT | InputState::TURN_RIGHT,
            &s,
            &tuning,
        );
        assert!((pose.angle + tuning.turn_step).abs() < 1e-6);
    }

    #[test]
    fn empty_input_is_a_no_op() {
        let s = corridor();
        let before = Pose::new(Vec2::new(3.25, 2.5), 1.0);
        let mut pose = before;
        apply_input(&mut pose, InputState::empty(), &s, &MoveTuning::default());
        assert_eq!(pose, before);
    }
}
