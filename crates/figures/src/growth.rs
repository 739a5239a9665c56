use glam::Vec2;

use crate::{consts, FieldError, Figure};

/// What a click on the field did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clicked {
    Created(usize),
    Grown(usize),
}

/// A field where every click either adds a triangle or gives the clicked
/// figure one more vertex.
#[derive(Debug, Clone)]
pub struct Growth {
    figures: Vec<Figure>,
    radius: f32,
}

impl Growth {
    pub fn new(radius: f32) -> Self {
        Self {
            figures: Vec::new(),
            radius,
        }
    }

    pub fn figures(&self) -> &[Figure] {
        &self.figures
    }

    pub fn len(&self) -> usize {
        self.figures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.figures.is_empty()
    }

    pub fn click(&mut self, point: Vec2) -> Clicked {
        // figures are drawn in order, so the last one is on top
        let hit = self.figures.iter().rposition(|f| f.contains(point));
        match hit {
            Some(i) => {
                let figure = &mut self.figures[i];
                figure.add_vertex();
                log::debug!("figure {} grown to {} angles", i, figure.angles());
                Clicked::Grown(i)
            }
            None => {
                let figure = Figure::new(point, consts::growth::START_ANGLES, self.radius);
                self.figures.push(figure);
                let i = self.figures.len() - 1;
                log::debug!("figure {} created at {:?}", i, point);
                Clicked::Created(i)
            }
        }
    }

    /// Removes every figure, returning how many there were.
    pub fn clear(&mut self) -> Result<usize, FieldError> {
        if self.figures.is_empty() {
            log::warn!("nothing to clear");
            return Err(FieldError::NoFigures);
        }
        let count = self.figures.len();
        self.figures.clear();
        log::debug!("cleared {} figures", count);
        Ok(count)
    }
}

impl Default for Growth {
    fn default() -> Self {
        Self::new(consts::growth::RADIUS)
    }
}
