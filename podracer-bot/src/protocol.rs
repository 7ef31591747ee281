use std::fmt;
use std::io::BufRead;

use anyhow::{bail, Context, Result};
use glam::{DVec2, IVec2};
use podracer_core::geometry::VecExt;

// TickInput is what the sim tells us at the start of every turn: where we
// are, where to go next, and where the other pod is
pub struct TickInput {
    pub pod_position: IVec2,
    pub checkpoint_position: IVec2,
    pub checkpoint_distance: i32,
    /// Signed degrees; negative means the checkpoint is to our left.
    pub checkpoint_angle: i32,
    // received every tick but not consumed yet; reserved for an
    // opponent-aware strategy
    pub opponent_position: IVec2,
}

impl TickInput {
    /// Read one tick's two input lines. `Ok(None)` means the sim has stopped
    /// supplying input and the race is over.
    pub fn read_from(reader: &mut impl BufRead) -> Result<Option<TickInput>> {
        let pod_line = match read_ints(reader, 6).context("pod status line")? {
            Some(values) => values,
            None => return Ok(None),
        };
        let opponent_line = read_ints(reader, 2)
            .context("opponent line")?
            .context("input ended in the middle of a tick")?;

        Ok(Some(TickInput {
            pod_position: IVec2::new(pod_line[0], pod_line[1]),
            checkpoint_position: IVec2::new(pod_line[2], pod_line[3]),
            checkpoint_distance: pod_line[4],
            checkpoint_angle: pod_line[5],
            opponent_position: IVec2::new(opponent_line[0], opponent_line[1]),
        }))
    }
}

fn read_ints(reader: &mut impl BufRead, expected: usize) -> Result<Option<Vec<i32>>> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    let values = line
        .split_whitespace()
        .map(|token| {
            token
                .parse::<i32>()
                .with_context(|| format!("bad integer {:?}", token))
        })
        .collect::<Result<Vec<i32>>>()?;

    if values.len() != expected {
        bail!(
            "expected {} integers, got {} in {:?}",
            expected,
            values.len(),
            line.trim_end()
        );
    }
    Ok(Some(values))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Thrust {
    Boost,
    /// Engine power in [0, 100].
    Power(u8),
}

/// The one command we answer each tick with: a steering target and either a
/// throttle value or the boost directive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Command {
    pub target: IVec2,
    pub thrust: Thrust,
}

impl Command {
    /// Truncate a float steering vector onto the integer command grid.
    pub fn steer_to(target: DVec2, thrust: Thrust) -> Command {
        Command {
            target: target.command_coords(),
            thrust,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.thrust {
            Thrust::Boost => write!(f, "{} {} BOOST", self.target.x, self.target.y),
            Thrust::Power(power) => write!(f, "{} {} {}", self.target.x, self.target.y, power),
        }
    }
}
