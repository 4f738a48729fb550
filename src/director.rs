//! Animation director: the timed, cancellable replay.
//!
//! A poll-driven state machine (Idle → Playing ⇄ Paused → Idle). The host
//! calls [`AnimationDirector::advance`] with elapsed wall-clock milliseconds;
//! the director progresses exactly one in-flight sub-action at a time and
//! starts the next only when the previous has completed, so instruments are
//! single-flight by construction. Suspension (pause) is checked between
//! sub-actions only: an in-flight timed draw finishes before a pause takes
//! effect. Stop is cooperative: instruments are invalidated first, so any
//! conceptually-pending completion lands on a no-op.

use crate::errors::ConstructionError;
use crate::float_types::Real;
use crate::instrument::{Ease, Instrument, InstrumentKind, InstrumentState, lerp};
use crate::plan::{Action, ConstructionPlan};
use crate::surface::{Layer, RenderSurface, ShapeId};
use log::{debug, trace};

/// Duration of the terminal fade-out of leftover guides, ms.
const FADE_MS: Real = 700.0;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PlayState {
    Idle,
    Playing,
    Paused,
}

impl PlayState {
    const fn as_str(self) -> &'static str {
        match self {
            PlayState::Idle => "idle",
            PlayState::Playing => "playing",
            PlayState::Paused => "paused",
        }
    }
}

/// The one sub-action currently consuming time.
#[derive(Debug)]
enum Running {
    Move {
        kind: InstrumentKind,
        from: InstrumentState,
        to: InstrumentState,
    },
    Spread {
        from: Real,
        to: Real,
    },
    Reveal {
        id: ShapeId,
    },
    Wait,
    /// Terminal cleanup: fade every tracked transient, then remove it.
    Fade {
        ids: Vec<ShapeId>,
    },
}

#[derive(Debug)]
struct InFlight {
    running: Running,
    elapsed_ms: Real,
    duration_ms: Real,
}

/// Owns one replay session: the plan, the surface, and the instruments.
#[derive(Debug)]
pub struct AnimationDirector {
    plan: ConstructionPlan,
    surface: RenderSurface,
    ruler: Instrument,
    compass: Instrument,
    pencil: Instrument,
    state: PlayState,
    speed: Real,
    step_index: usize,
    action_index: usize,
    in_flight: Option<InFlight>,
    pause_requested: bool,
    /// Every transient element pushed during this replay, kept reachable for
    /// removal; the surface registry is the only way back to them.
    transients: Vec<ShapeId>,
    narration: Option<(String, String)>,
    cleanup_started: bool,
}

impl AnimationDirector {
    pub fn new(plan: ConstructionPlan, surface: RenderSurface) -> Self {
        Self {
            plan,
            surface,
            ruler: Instrument::new(InstrumentKind::Ruler),
            compass: Instrument::new(InstrumentKind::Compass),
            pencil: Instrument::new(InstrumentKind::Pencil),
            state: PlayState::Idle,
            speed: 1.0,
            step_index: 0,
            action_index: 0,
            in_flight: None,
            pause_requested: false,
            transients: Vec::new(),
            narration: None,
            cleanup_started: false,
        }
    }

    pub fn state(&self) -> PlayState {
        self.state
    }

    pub fn plan(&self) -> &ConstructionPlan {
        &self.plan
    }

    pub fn surface(&self) -> &RenderSurface {
        &self.surface
    }

    /// Title and description of the step being narrated, if a replay ran.
    pub fn narration(&self) -> Option<(&str, &str)> {
        self.narration
            .as_ref()
            .map(|(t, d)| (t.as_str(), d.as_str()))
    }

    pub fn speed(&self) -> Real {
        self.speed
    }

    /// Playback speed multiplier; applies to sub-actions not yet started.
    pub fn set_speed(&mut self, multiplier: Real) {
        if multiplier.is_finite() && multiplier > 0.0 {
            self.speed = multiplier;
        }
    }

    /// Begin the replay. Valid only from Idle; the surface is wiped so an
    /// aborted earlier run can leak nothing into this one.
    pub fn start(&mut self) -> Result<(), ConstructionError> {
        if self.state != PlayState::Idle {
            return Err(ConstructionError::InvalidTransition {
                from: self.state.as_str(),
                action: "start",
            });
        }
        if self.plan.is_empty() {
            return Err(ConstructionError::EmptyPlan);
        }
        self.surface.clear();
        self.ruler.reset();
        self.compass.reset();
        self.pencil.reset();
        self.transients.clear();
        self.step_index = 0;
        self.action_index = 0;
        self.in_flight = None;
        self.pause_requested = false;
        self.cleanup_started = false;
        self.state = PlayState::Playing;
        self.narrate(0);
        debug!("replay started: {} steps", self.plan.len());
        Ok(())
    }

    /// Request a suspension; takes effect once the in-flight sub-action ends.
    pub fn pause(&mut self) -> Result<(), ConstructionError> {
        if self.state != PlayState::Playing {
            return Err(ConstructionError::InvalidTransition {
                from: self.state.as_str(),
                action: "pause",
            });
        }
        self.pause_requested = true;
        Ok(())
    }

    pub fn resume(&mut self) -> Result<(), ConstructionError> {
        if self.pause_requested {
            // Pause never took effect; cancel the request.
            self.pause_requested = false;
            return Ok(());
        }
        if self.state != PlayState::Paused {
            return Err(ConstructionError::InvalidTransition {
                from: self.state.as_str(),
                action: "resume",
            });
        }
        self.state = PlayState::Playing;
        Ok(())
    }

    /// Halt the replay from any non-Idle state. Instruments are invalidated
    /// *before* the surface is wiped, so a pending completion cannot
    /// resurrect anything.
    pub fn stop(&mut self) -> Result<(), ConstructionError> {
        if self.state == PlayState::Idle {
            return Err(ConstructionError::InvalidTransition {
                from: self.state.as_str(),
                action: "stop",
            });
        }
        self.ruler.invalidate();
        self.compass.invalidate();
        self.pencil.invalidate();
        for id in self.transients.drain(..) {
            self.surface.remove(id);
        }
        self.surface.clear();
        self.in_flight = None;
        self.pause_requested = false;
        self.step_index = 0;
        self.action_index = 0;
        self.narration = None;
        self.cleanup_started = false;
        self.state = PlayState::Idle;
        debug!("replay stopped");
        Ok(())
    }

    /// Drive the replay forward by `dt_ms` of wall-clock time.
    ///
    /// Sub-actions within a step run strictly in choreography order; steps run
    /// strictly in plan order. Leftover time at an action boundary carries
    /// into the next action, so frame cadence does not skew the narrative.
    pub fn advance(&mut self, dt_ms: Real) {
        let mut remaining = dt_ms.max(0.0);
        while self.state == PlayState::Playing {
            match self.in_flight.take() {
                Some(mut flight) => {
                    flight.elapsed_ms += remaining;
                    let overshoot = flight.elapsed_ms - flight.duration_ms;
                    let t = if flight.duration_ms > 0.0 {
                        (flight.elapsed_ms / flight.duration_ms).clamp(0.0, 1.0)
                    } else {
                        1.0
                    };
                    self.progress(&flight.running, t);
                    if overshoot >= 0.0 {
                        self.complete(flight.running);
                        remaining = overshoot;
                        self.after_action_boundary();
                    } else {
                        self.in_flight = Some(flight);
                        return;
                    }
                },
                None => {
                    if !self.begin_next_action() {
                        return;
                    }
                    if remaining <= 0.0 && self.in_flight.is_some() {
                        return;
                    }
                },
            }
        }
    }

    fn narrate(&mut self, step_index: usize) {
        if let Some(step) = self.plan.step(step_index) {
            debug!("step {}/{}: {}", step_index + 1, self.plan.len(), step.title);
            self.narration = Some((step.title.clone(), step.description.clone()));
        }
    }

    /// The cooperative suspension point: between sub-actions, nowhere else.
    /// Only an ongoing replay can be suspended; if the action that just ended
    /// was the terminal one the state is already Idle and stays so.
    fn after_action_boundary(&mut self) {
        if self.pause_requested && self.state == PlayState::Playing {
            self.pause_requested = false;
            self.state = PlayState::Paused;
            debug!("replay paused at step {}", self.step_index);
        }
    }

    /// Set up the next sub-action (or the terminal cleanup). Returns `false`
    /// when nothing can start right now.
    fn begin_next_action(&mut self) -> bool {
        if self.state != PlayState::Playing {
            return false;
        }

        // Step boundary: skip to the next step with choreography left.
        let action = loop {
            match self.plan.step(self.step_index) {
                Some(step) if self.action_index < step.choreography.len() => {
                    break step.choreography[self.action_index].clone();
                },
                Some(_) => {
                    self.step_index += 1;
                    self.action_index = 0;
                    self.narrate(self.step_index);
                },
                None => return self.begin_cleanup(),
            }
        };
        self.action_index += 1;
        trace!("step {} action {}", self.step_index, self.action_index);

        match action {
            Action::ShowInstrument(kind) => {
                let surface = &mut self.surface;
                match kind {
                    InstrumentKind::Ruler => self.ruler.show(surface),
                    InstrumentKind::Compass => self.compass.show(surface),
                    InstrumentKind::Pencil => self.pencil.show(surface),
                }
                self.after_action_boundary();
            },
            Action::HideInstrument(kind) => {
                let surface = &mut self.surface;
                match kind {
                    InstrumentKind::Ruler => self.ruler.hide(surface),
                    InstrumentKind::Compass => self.compass.hide(surface),
                    InstrumentKind::Pencil => self.pencil.hide(surface),
                }
                self.after_action_boundary();
            },
            Action::MoveInstrument { kind, x, y, rotation_deg, duration_ms } => {
                let from = match kind {
                    InstrumentKind::Ruler => self.ruler.state(),
                    InstrumentKind::Compass => self.compass.state(),
                    InstrumentKind::Pencil => self.pencil.state(),
                };
                let to = InstrumentState {
                    x,
                    y,
                    rotation_deg,
                    visible: from.visible,
                    spread: from.spread,
                };
                self.in_flight = Some(InFlight {
                    running: Running::Move { kind, from, to },
                    elapsed_ms: 0.0,
                    duration_ms: duration_ms / self.speed,
                });
            },
            Action::SpreadCompass { spread, duration_ms } => {
                let from = self.compass.state().spread;
                self.in_flight = Some(InFlight {
                    running: Running::Spread { from, to: spread },
                    elapsed_ms: 0.0,
                    duration_ms: duration_ms / self.speed,
                });
            },
            Action::Reveal { shape_index, duration_ms } => {
                let planned = self
                    .plan
                    .step(self.step_index)
                    .and_then(|step| step.shapes.get(shape_index))
                    .cloned();
                let Some(planned) = planned else {
                    // Malformed choreography; skip rather than stall the replay.
                    self.after_action_boundary();
                    return true;
                };
                let id = self.surface.push_with_reveal(
                    planned.layer,
                    planned.shape,
                    planned.style,
                    0.0,
                );
                if planned.layer == Layer::Construction {
                    self.transients.push(id);
                }
                self.in_flight = Some(InFlight {
                    running: Running::Reveal { id },
                    elapsed_ms: 0.0,
                    duration_ms: duration_ms / self.speed,
                });
            },
            Action::Wait(ms) => {
                self.in_flight = Some(InFlight {
                    running: Running::Wait,
                    elapsed_ms: 0.0,
                    duration_ms: ms / self.speed,
                });
            },
        }
        true
    }

    fn begin_cleanup(&mut self) -> bool {
        if self.cleanup_started {
            return false;
        }
        self.cleanup_started = true;
        let ids: Vec<ShapeId> = self.transients.drain(..).collect();
        self.in_flight = Some(InFlight {
            running: Running::Fade { ids },
            elapsed_ms: 0.0,
            duration_ms: FADE_MS / self.speed,
        });
        true
    }

    fn progress(&mut self, running: &Running, t: Real) {
        match running {
            Running::Move { kind, from, to } => {
                let eased = Ease::InOutQuad.sample(t);
                let state = InstrumentState::lerp(*from, *to, eased);
                let surface = &mut self.surface;
                match kind {
                    InstrumentKind::Ruler => self.ruler.set_state(surface, state),
                    InstrumentKind::Compass => self.compass.set_state(surface, state),
                    InstrumentKind::Pencil => self.pencil.set_state(surface, state),
                }
            },
            Running::Spread { from, to } => {
                let eased = Ease::OutCubic.sample(t);
                let spread = lerp(*from, *to, eased);
                self.compass.set_spread(&mut self.surface, spread);
            },
            Running::Reveal { id } => {
                // Stale handles (stop raced us) are silently ignored.
                self.surface.set_reveal(*id, Ease::Linear.sample(t));
            },
            Running::Wait => {},
            Running::Fade { ids } => {
                for id in ids {
                    self.surface.set_opacity(*id, 1.0 - t);
                }
            },
        }
    }

    fn complete(&mut self, running: Running) {
        if let Running::Fade { ids } = running {
            for id in ids {
                self.surface.remove(id);
            }
            self.ruler.hide(&mut self.surface);
            self.compass.hide(&mut self.surface);
            self.pencil.hide(&mut self.surface);
            // A pause requested during the fade has nothing left to suspend.
            self.pause_requested = false;
            self.state = PlayState::Idle;
            debug!("replay complete");
        }
    }
}
