use log::debug;
use rand::Rng;

use crate::{Ball, Config, Events, InterferenceState, Paddle, PaddleIntent, PaddleRole};
use hecs::World;

impl InterferenceState {
    /// Fresh hidden state with a newly drawn activation delay
    pub fn inactive<R: Rng + ?Sized>(config: &Config, rng: &mut R) -> Self {
        let (min, max) = config.interference_idle_ticks;
        InterferenceState::Inactive {
            elapsed: 0,
            activate_at: rng.gen_range(min..max),
        }
    }
}

/// Advance the interference paddle's activation timer by one tick
pub fn tick_interference<R: Rng + ?Sized>(
    state: &mut InterferenceState,
    config: &Config,
    rng: &mut R,
    events: &mut Events,
) {
    *state = match *state {
        InterferenceState::Inactive {
            elapsed,
            activate_at,
        } => {
            let elapsed = elapsed + 1;
            if elapsed >= activate_at {
                let (min, max) = config.interference_active_ticks;
                let remaining = rng.gen_range(min..max);
                debug!("Interference paddle active for {remaining} ticks");
                events.interference_appeared = true;
                InterferenceState::Active { remaining }
            } else {
                InterferenceState::Inactive {
                    elapsed,
                    activate_at,
                }
            }
        }
        InterferenceState::Active { remaining } => {
            let remaining = remaining.saturating_sub(1);
            if remaining == 0 {
                debug!("Interference paddle withdrawn");
                events.interference_vanished = true;
                InterferenceState::inactive(config, rng)
            } else {
                InterferenceState::Active { remaining }
            }
        }
    };
}

/// While active the interference paddle tracks the ball perfectly; otherwise it holds still
pub fn drive_interference(world: &mut World, state: &InterferenceState, ball: &Ball) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&Paddle, &mut PaddleIntent)>() {
        if paddle.role == PaddleRole::Interference {
            intent.dir = if state.is_active() {
                paddle.dir_toward(ball.rect.center_y())
            } else {
                0
            };
        }
    }
}
