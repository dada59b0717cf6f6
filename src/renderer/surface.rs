//! Drawing surface abstraction

use crate::sim::MotionState;

/// Minimal immediate-mode 2D surface
pub trait Surface {
    /// Clear the visible area
    fn clear(&mut self, width: f64, height: f64);
    /// Set the fill color (any CSS color string)
    fn set_fill(&mut self, color: &str);
    /// Fill a circle centered at (x, y)
    fn fill_circle(&mut self, x: f64, y: f64, radius: f64);
}

/// Draw the ball at its current position
pub fn draw_ball(surface: &mut dyn Surface, state: &MotionState, color: &str) {
    surface.clear(state.viewport.width, state.viewport.height);
    surface.set_fill(color);
    surface.fill_circle(state.position.x, state.position.y, state.radius);
}

/// A recorded drawing call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear { width: f64, height: f64 },
    Fill(String),
    Circle { x: f64, y: f64, radius: f64 },
}

/// Surface that records every call instead of drawing
#[derive(Debug, Default)]
pub struct Recorder {
    pub commands: Vec<DrawCommand>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of frames drawn (one clear per frame)
    pub fn frames(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Clear { .. }))
            .count()
    }

    /// Most recent circle drawn
    pub fn last_circle(&self) -> Option<(f64, f64, f64)> {
        self.commands.iter().rev().find_map(|c| match c {
            DrawCommand::Circle { x, y, radius } => Some((*x, *y, *radius)),
            _ => None,
        })
    }
}

impl Surface for Recorder {
    fn clear(&mut self, width: f64, height: f64) {
        self.commands.push(DrawCommand::Clear { width, height });
    }

    fn set_fill(&mut self, color: &str) {
        self.commands.push(DrawCommand::Fill(color.to_string()));
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64) {
        self.commands.push(DrawCommand::Circle { x, y, radius });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Viewport;

    #[test]
    fn test_draw_ball_commands() {
        let state = MotionState::new(Viewport::new(800.0, 600.0).unwrap());
        let mut recorder = Recorder::new();
        draw_ball(&mut recorder, &state, "red");

        assert_eq!(
            recorder.commands,
            vec![
                DrawCommand::Clear {
                    width: 800.0,
                    height: 600.0
                },
                DrawCommand::Fill("red".to_string()),
                DrawCommand::Circle {
                    x: 400.0,
                    y: 300.0,
                    radius: 25.0
                },
            ]
        );
        assert_eq!(recorder.frames(), 1);
        assert_eq!(recorder.last_circle(), Some((400.0, 300.0, 25.0)));
    }
}
