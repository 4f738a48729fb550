//! Session: one canvas, one configuration, one active mode.
//!
//! Everything the historical scripts kept in module-level globals lives here
//! instead, so several independent canvases can coexist on one page. The two
//! replay modes are mutually exclusive per session: switching tears down the
//! active controller and rebuilds the surface, which is what makes the SVG
//! tree single-writer without any locking.

use crate::config::Config;
use crate::director::AnimationDirector;
use crate::errors::ConstructionError;
use crate::explorer::ExplorationController;
use crate::plan::ConstructionPlan;
use crate::surface::RenderSurface;
use log::debug;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Mode {
    Animation,
    Exploration,
}

#[derive(Debug)]
enum Active {
    Animation(AnimationDirector),
    Exploration(ExplorationController),
}

/// One construction canvas and its current replay mode.
#[derive(Debug)]
pub struct Session {
    config: Config,
    active: Active,
}

impl Session {
    /// Build a session in animation mode, idle, surface empty.
    pub fn new(config: Config) -> Result<Self, ConstructionError> {
        let plan = ConstructionPlan::build(config.clone())?;
        let surface = RenderSurface::new(config.width, config.height);
        Ok(Self {
            config,
            active: Active::Animation(AnimationDirector::new(plan, surface)),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn mode(&self) -> Mode {
        match self.active {
            Active::Animation(_) => Mode::Animation,
            Active::Exploration(_) => Mode::Exploration,
        }
    }

    pub fn surface(&self) -> &RenderSurface {
        match &self.active {
            Active::Animation(director) => director.surface(),
            Active::Exploration(controller) => controller.surface(),
        }
    }

    /// The active director, if in animation mode.
    pub fn director(&mut self) -> Option<&mut AnimationDirector> {
        match &mut self.active {
            Active::Animation(director) => Some(director),
            Active::Exploration(_) => None,
        }
    }

    /// The active controller, if in exploration mode.
    pub fn explorer(&mut self) -> Option<&mut ExplorationController> {
        match &mut self.active {
            Active::Exploration(controller) => Some(controller),
            Active::Animation(_) => None,
        }
    }

    /// Switch replay modes. Tears the previous mode down entirely: plan and
    /// surface are rebuilt from the configuration, abandoning whatever the
    /// previous mode had drawn.
    pub fn set_mode(&mut self, mode: Mode) -> Result<(), ConstructionError> {
        if self.mode() == mode {
            return Ok(());
        }
        debug!("switching mode to {:?}", mode);
        let plan = ConstructionPlan::build(self.config.clone())?;
        let surface = RenderSurface::new(self.config.width, self.config.height);
        self.active = match mode {
            Mode::Animation => Active::Animation(AnimationDirector::new(plan, surface)),
            Mode::Exploration => Active::Exploration(ExplorationController::new(plan, surface)?),
        };
        Ok(())
    }

    /// Apply a new configuration (e.g. the live angle slider): validates,
    /// rebuilds the plan wholesale, and restarts the active mode from
    /// scratch. Old steps are dropped entirely; they captured the old
    /// configuration and must never run again.
    pub fn reconfigure(&mut self, config: Config) -> Result<(), ConstructionError> {
        let plan = ConstructionPlan::build(config.clone())?;
        let surface = RenderSurface::new(config.width, config.height);
        let mode = self.mode();
        self.config = config;
        self.active = match mode {
            Mode::Animation => Active::Animation(AnimationDirector::new(plan, surface)),
            Mode::Exploration => Active::Exploration(ExplorationController::new(plan, surface)?),
        };
        Ok(())
    }

    /// Convenience for the live angle slider.
    pub fn set_base_angle(&mut self, degrees: crate::float_types::Real) -> Result<(), ConstructionError> {
        let config = self.config.clone().with_base_angle(degrees);
        self.reconfigure(config)
    }
}
