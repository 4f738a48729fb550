//! Exploration controller: instant, timeline-scrubbed replay.
//!
//! No timing, no instruments. Every navigation clears both layers and
//! re-renders steps 0..=k from scratch, so the displayed state is always
//! exactly the union of those steps; order of navigation cannot matter and
//! nothing can drift. Redundant recomputation is the price, and it is cheap:
//! a step render is pure element creation.

use crate::errors::ConstructionError;
use crate::plan::ConstructionPlan;
use crate::surface::{Layer, RenderSurface};
use log::debug;

#[derive(Debug)]
pub struct ExplorationController {
    plan: ConstructionPlan,
    surface: RenderSurface,
    current: usize,
}

impl ExplorationController {
    /// Build a controller positioned on the first step (already rendered).
    pub fn new(plan: ConstructionPlan, surface: RenderSurface) -> Result<Self, ConstructionError> {
        if plan.is_empty() {
            return Err(ConstructionError::EmptyPlan);
        }
        let mut controller = Self {
            plan,
            surface,
            current: 0,
        };
        controller.go_to_step(0);
        Ok(controller)
    }

    pub fn plan(&self) -> &ConstructionPlan {
        &self.plan
    }

    pub fn surface(&self) -> &RenderSurface {
        &self.surface
    }

    pub fn current_step(&self) -> usize {
        self.current
    }

    /// Jump to `index` (clamped to the plan) and redraw everything up to and
    /// including it.
    pub fn go_to_step(&mut self, index: usize) {
        let clamped = index.min(self.plan.len() - 1);
        self.surface.clear_layer(Layer::Construction);
        self.surface.clear_layer(Layer::Final);
        for (i, step) in self.plan.steps().iter().take(clamped + 1).enumerate() {
            step.render(&mut self.surface, i == clamped);
        }
        self.current = clamped;
        debug!("exploration at step {}/{}", clamped + 1, self.plan.len());
    }

    pub fn next(&mut self) {
        self.go_to_step(self.current + 1);
    }

    pub fn previous(&mut self) {
        self.go_to_step(self.current.saturating_sub(1));
    }

    // UI affordances for the host page: slider bounds, button states,
    // counter text, narration.

    pub fn at_start(&self) -> bool {
        self.current == 0
    }

    pub fn at_end(&self) -> bool {
        self.current + 1 == self.plan.len()
    }

    /// Counter text, e.g. `"3 / 12"`.
    pub fn progress_label(&self) -> String {
        format!("{} / {}", self.current + 1, self.plan.len())
    }

    pub fn title(&self) -> &str {
        &self.plan.steps()[self.current].title
    }

    pub fn description(&self) -> &str {
        &self.plan.steps()[self.current].description
    }
}
