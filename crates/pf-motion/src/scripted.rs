//! `ScriptedMotion`: a deterministic stand-in for the interpolation engine.
//!
//! Every point-to-point move takes `ms_per_point` of simulated time, and a
//! spline reaches one further point every `ms_per_point`.  Nothing is
//! actually interpolated; the driver only keeps the clock and a log of what
//! it was asked to do.  Hosts in tests and the demo embed one and delegate
//! their [`MotionDriver`] impl to it.

use crate::{MotionDriver, MoveRequest, SplineRequest};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InFlight {
    Nothing,
    Point,
    Spline { first: usize, count: usize },
}

/// Fixed-pace motion driver with a request log.
#[derive(Debug, Clone)]
pub struct ScriptedMotion {
    ms_per_point: u32,
    elapsed_ms:   u64,
    in_flight:    InFlight,
    moves:        Vec<MoveRequest>,
    splines:      Vec<SplineRequest>,
}

impl ScriptedMotion {
    pub fn new(ms_per_point: u32) -> Self {
        Self {
            ms_per_point,
            elapsed_ms: 0,
            in_flight:  InFlight::Nothing,
            moves:      Vec::new(),
            splines:    Vec::new(),
        }
    }

    /// Let `diff_ms` of simulated time pass.
    pub fn advance(&mut self, diff_ms: u32) {
        self.elapsed_ms += u64::from(diff_ms);
    }

    /// Jump the in-flight motion to its end.
    pub fn finish(&mut self) {
        self.elapsed_ms = self.duration_ms();
    }

    pub fn move_requests(&self) -> &[MoveRequest] {
        &self.moves
    }

    pub fn spline_requests(&self) -> &[SplineRequest] {
        &self.splines
    }

    pub fn last_move(&self) -> Option<&MoveRequest> {
        self.moves.last()
    }

    pub fn last_spline(&self) -> Option<&SplineRequest> {
        self.splines.last()
    }

    fn duration_ms(&self) -> u64 {
        let step = u64::from(self.ms_per_point);
        match self.in_flight {
            InFlight::Nothing               => 0,
            InFlight::Point                 => step,
            InFlight::Spline { count, .. } => step * count.saturating_sub(1) as u64,
        }
    }
}

impl MotionDriver for ScriptedMotion {
    fn launch(&mut self, request: MoveRequest) {
        self.moves.push(request);
        self.in_flight  = InFlight::Point;
        self.elapsed_ms = 0;
    }

    fn launch_spline(&mut self, request: SplineRequest) {
        self.in_flight = InFlight::Spline {
            first: request.first_point,
            count: request.points.len(),
        };
        self.splines.push(request);
        self.elapsed_ms = 0;
    }

    fn motion_finished(&self) -> bool {
        self.elapsed_ms >= self.duration_ms()
    }

    fn current_point(&self) -> usize {
        match self.in_flight {
            InFlight::Spline { first, count } => {
                let reached = self.elapsed_ms / u64::from(self.ms_per_point.max(1));
                let reached = usize::try_from(reached).unwrap_or(usize::MAX);
                first + reached.min(count.saturating_sub(1))
            }
            InFlight::Nothing | InFlight::Point => 0,
        }
    }
}
