use glam::IVec2;

pub type LapNumber = u8;

// The track layout is unknown at race start; the sim only ever tells us the
// next checkpoint to aim for. TrackState watches that stream and builds the
// lap layout by discovery: each time a new target shows up it gets appended,
// and the first time the target cycles back to the first checkpoint we know
// the whole lap.
pub struct TrackState {
    lap: LapNumber,
    checkpoints: Vec<IVec2>,
    all_checkpoints_found: bool,
}

impl TrackState {
    pub fn new() -> TrackState {
        TrackState {
            lap: 0,
            checkpoints: Vec::new(),
            all_checkpoints_found: false,
        }
    }

    /// Feed the current target checkpoint, once per tick.
    pub fn update(&mut self, x: i32, y: i32) {
        if self.all_checkpoints_found {
            return;
        }

        let checkpoint = IVec2::new(x, y);
        match self.checkpoints.last() {
            None => {
                log::info!("discovered checkpoint 0 at ({}, {})", x, y);
                self.checkpoints.push(checkpoint);
            }
            Some(last) if *last == checkpoint => {
                // still approaching the same target as last tick
            }
            Some(_) => {
                if self.checkpoints[0] == checkpoint {
                    // the target cycled back to the start: the layout is
                    // complete and the first lap is done
                    self.all_checkpoints_found = true;
                    self.lap += 1;
                    log::info!(
                        "track fully mapped with {} checkpoints, lap {} complete",
                        self.checkpoints.len(),
                        self.lap
                    );
                } else {
                    log::info!(
                        "discovered checkpoint {} at ({}, {})",
                        self.checkpoints.len(),
                        x,
                        y
                    );
                    self.checkpoints.push(checkpoint);
                }
            }
        }
    }

    pub fn checkpoints(&self) -> &[IVec2] {
        &self.checkpoints
    }

    /// Laps completed. Freezes at 1 once the track is fully mapped, since
    /// discovery stops updating after that point.
    pub fn lap(&self) -> LapNumber {
        self.lap
    }

    pub fn all_checkpoints_found(&self) -> bool {
        self.all_checkpoints_found
    }
}

impl Default for TrackState {
    fn default() -> TrackState {
        TrackState::new()
    }
}
