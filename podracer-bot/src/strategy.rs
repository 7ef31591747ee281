use podracer_core::track::TrackState;
use podracer_core::Settings;

use crate::protocol::{Command, Thrust, TickInput};

/// The race's one-shot boost allowance. Spending is unconditional: if a
/// boost is left, asking for it always succeeds, and it never comes back.
pub struct BoostBudget {
    remaining: u32,
}

impl BoostBudget {
    pub fn new(count: u32) -> BoostBudget {
        BoostBudget { remaining: count }
    }

    pub fn try_consume(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        true
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }
}

// Pilot owns all per-race state and turns one tick's input into one command.
// Everything it does is deterministic in (inputs, current state).
pub struct Pilot {
    settings: Settings,
    track: TrackState,
    boost: BoostBudget,
}

impl Pilot {
    pub fn new(settings: Settings) -> Pilot {
        let boost = BoostBudget::new(settings.boost_count);
        Pilot {
            settings,
            track: TrackState::new(),
            boost,
        }
    }

    pub fn decide(&mut self, tick: &TickInput) -> Command {
        // discovery is a side effect only; it never changes this tick's command
        self.track
            .update(tick.checkpoint_position.x, tick.checkpoint_position.y);

        log::trace!(
            "pod at ({}, {}), opponent {:.0} away, checkpoint {} away at {} deg",
            tick.pod_position.x,
            tick.pod_position.y,
            tick.pod_position
                .as_dvec2()
                .distance(tick.opponent_position.as_dvec2()),
            tick.checkpoint_distance,
            tick.checkpoint_angle,
        );

        let target = tick.checkpoint_position.as_dvec2();

        if self.boost.try_consume() {
            log::info!(
                "boosting toward ({}, {})",
                tick.checkpoint_position.x,
                tick.checkpoint_position.y
            );
            return Command::steer_to(target, Thrust::Boost);
        }

        // too misaligned to accelerate productively: cut the engine and turn
        let power = if tick.checkpoint_angle.abs() >= self.settings.heading_error_threshold {
            0
        } else {
            100
        };
        Command::steer_to(target, Thrust::Power(power))
    }

    pub fn track(&self) -> &TrackState {
        &self.track
    }

    pub fn boost(&self) -> &BoostBudget {
        &self.boost
    }
}
