//! # Figurakit Designer
//!
//! This crate provides the geometry and scene kernel of the figure
//! editor: shape hit testing, the transform pipeline, and the figure
//! and scene model the presentation shell mutates. The shell — window
//! creation, input polling, immediate-mode drawing, panel layout — is
//! a replaceable collaborator that calls in with primitive values and
//! renders whatever comes back.
//!
//! ## Core Components
//!
//! - **Model**: tagged shapes (rectangle, circle, polygon) with
//!   hit testing, pivots, and outline vertices
//! - **Transform**: scale → rotate → skew → translate composition
//!   producing world-space vertices per frame
//! - **Figure**: one shape + canonical RGB color + transform state
//! - **Scene**: insertion-ordered figures, single selection, active
//!   color scheme
//! - **Viewport**: pixel-to-NDC coordinate mapping
//!
//! ## Architecture
//!
//! ```text
//! Scene (figures, selection, color scheme)
//!   ├── Figure (shape + color + transform state)
//!   │     ├── Shape (hit test, pivot, outline)
//!   │     └── TransformState → Placement (world vertices)
//!   └── Viewport (pixels → NDC for clicks)
//! ```
//!
//! Everything is single-threaded and frame-driven: the shell calls the
//! kernel once per input event and once per rendered frame, and every
//! operation is a pure function over immutable inputs or a plain field
//! write on one figure.
//!
//! ## Usage
//!
//! ```rust
//! use figurakit_designer::{Scene, Viewport};
//!
//! let mut scene = Scene::default_scene();
//! let viewport = Viewport::new(800.0, 600.0);
//!
//! // A click lands; hit-test it in NDC space.
//! let p = viewport.to_ndc(80.0, 540.0);
//! let hit = scene.select_at(p);
//! assert!(hit.is_some());
//!
//! // Draw pass: world-space outlines plus colors.
//! for figure in scene.placements() {
//!     let _ = (&figure.placement.vertices, figure.color, figure.selected);
//! }
//! ```

pub mod figure;
pub mod model;
pub mod scene;
pub mod transform;
pub mod viewport;

pub use figure::Figure;
pub use model::{Circle, FigureShape, Point, Polygon, Rectangle, Shape, ShapeType};
pub use scene::{RenderFigure, Scene, SELECTION_OUTLINE};
pub use transform::{Placement, StageSkipped, TransformState};
pub use viewport::Viewport;
