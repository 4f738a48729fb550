//! Step-by-step **ruler-and-compass construction engine** for teaching pages:
//! builds an ordered plan of construction steps, replays it as a timed,
//! cancellable animation of virtual instruments, or scrubs it instantly
//! through an exploration timeline — all rendered into a layered SVG surface.
//!
//! Three classical lessons ship as configuration presets: the angle-transfer
//! fan, the Archimedean spiral, and the Epidaurus theater.
//!
//! # Features
//! - **f64**: use f64 as Real (default)
//! - **f32**: use f32 as Real, this conflicts with f64
//!
//! # Quick start
//! ```
//! use epure::{Config, Mode, Session};
//!
//! let mut session = Session::new(Config::theater()).unwrap();
//! session.set_mode(Mode::Exploration).unwrap();
//! let explorer = session.explorer().unwrap();
//! explorer.go_to_step(4);
//! let svg = session.surface().to_svg_string();
//! assert!(svg.starts_with("<svg"));
//! ```

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod config;
pub mod director;
pub mod errors;
pub mod explorer;
pub mod float_types;
pub mod geometry;
pub mod instrument;
pub mod plan;
pub mod session;
pub mod surface;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use config::{Config, Palette, Variant};
pub use director::{AnimationDirector, PlayState};
pub use errors::ConstructionError;
pub use explorer::ExplorationController;
pub use plan::{ConstructionPlan, Step};
pub use session::{Mode, Session};
pub use surface::{Layer, RenderSurface, Shape, ShapeId, Style};
