//! Scene state: the figure list, the selection, and the active color
//! scheme.
//!
//! The editor used to keep "currently selected figure" and "currently
//! selected color scheme" as ambient globals next to the window loop;
//! both are explicit fields here, owned by the scene and passed into
//! core calls.

use serde::{Deserialize, Serialize};
use tracing::debug;

use figurakit_core::color::{ColorScheme, ColorValue, Rgb};

use crate::figure::Figure;
use crate::model::{FigureShape, Point, Shape};
use crate::transform::Placement;

/// Outline color drawn around the selected figure.
pub const SELECTION_OUTLINE: Rgb = Rgb::RED;

/// Everything the shell needs to draw one figure this frame.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFigure {
    pub id: u64,
    pub color: Rgb,
    pub selected: bool,
    pub placement: Placement,
}

/// An insertion-ordered figure list with at most one selection.
///
/// The selection refers to a figure by id, not by ownership, and is
/// only ever reassigned on a successful hit test: a click that hits
/// nothing leaves the previous selection in place.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scene {
    figures: Vec<Figure>,
    selected: Option<u64>,
    scheme: ColorScheme,
    next_id: u64,
}

impl Scene {
    /// Creates an empty scene with no selection and the RGB scheme.
    pub fn new() -> Self {
        Self::default()
    }

    /// The scene the editor opens with: a black rectangle, circle, and
    /// triangle.
    pub fn default_scene() -> Self {
        let mut scene = Self::new();
        scene.add_figure(
            "Rectangle",
            Shape::Rectangle(crate::model::Rectangle::new(-0.8, -0.8, 0.4, 0.4)),
            Rgb::BLACK,
        );
        scene.add_figure(
            "Circle",
            Shape::Circle(crate::model::Circle::new(Point::new(0.0, 0.0), 0.2)),
            Rgb::BLACK,
        );
        scene.add_figure(
            "Triangle",
            Shape::triangle(
                Point::new(0.4, -0.8),
                Point::new(0.4, -0.4),
                Point::new(0.8, -0.8),
            ),
            Rgb::BLACK,
        );
        scene
    }

    /// Adds a figure at the end of the draw order and returns its id.
    pub fn add_figure(&mut self, name: impl Into<String>, shape: Shape, color: Rgb) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.figures.push(Figure::new(id, name, shape, color));
        id
    }

    pub fn figures(&self) -> &[Figure] {
        &self.figures
    }

    pub fn figure(&self, id: u64) -> Option<&Figure> {
        self.figures.iter().find(|f| f.id() == id)
    }

    pub fn figure_mut(&mut self, id: u64) -> Option<&mut Figure> {
        self.figures.iter_mut().find(|f| f.id() == id)
    }

    pub fn selected_id(&self) -> Option<u64> {
        self.selected
    }

    pub fn selected_figure(&self) -> Option<&Figure> {
        self.selected.and_then(|id| self.figure(id))
    }

    pub fn selected_figure_mut(&mut self) -> Option<&mut Figure> {
        let id = self.selected?;
        self.figure_mut(id)
    }

    /// Hit-tests a click in NDC space against every figure in
    /// insertion order.
    ///
    /// The first figure containing the point becomes the selection and
    /// its id is returned. On a miss, `None` is returned and the prior
    /// selection is retained — clearing only happens by reassignment.
    pub fn select_at(&mut self, p: Point) -> Option<u64> {
        for figure in &self.figures {
            if figure.shape().contains(p) {
                if self.selected != Some(figure.id()) {
                    debug!(id = figure.id(), name = %figure.name, "selection changed");
                }
                self.selected = Some(figure.id());
                return self.selected;
            }
        }
        None
    }

    pub fn scheme(&self) -> ColorScheme {
        self.scheme
    }

    pub fn set_scheme(&mut self, scheme: ColorScheme) {
        self.scheme = scheme;
    }

    /// The selected figure's color viewed through the active scheme,
    /// for the editor panel to display.
    pub fn selected_color_value(&self) -> Option<ColorValue> {
        self.selected_figure()
            .map(|f| ColorValue::of(self.scheme, f.color()))
    }

    /// Applies a panel edit, in whatever scheme it was made, to the
    /// selected figure's canonical color. Returns false when nothing
    /// is selected.
    pub fn set_selected_color(&mut self, value: ColorValue) -> bool {
        match self.selected_figure_mut() {
            Some(figure) => {
                figure.set_color(value.to_rgb());
                true
            }
            None => false,
        }
    }

    /// Runs the transform pipeline over every figure for this frame's
    /// draw pass, in draw order.
    pub fn placements(&self) -> Vec<RenderFigure> {
        self.figures
            .iter()
            .map(|f| RenderFigure {
                id: f.id(),
                color: f.color(),
                selected: self.selected == Some(f.id()),
                placement: f.placement(),
            })
            .collect()
    }
}
