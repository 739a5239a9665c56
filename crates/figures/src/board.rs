use glam::Vec2;

use crate::{consts, FieldError, Figure, FigureKind};

/// What a left button press on the board did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pressed {
    /// A new figure was stamped at this index.
    Placed(usize),
    /// The selection changed to this figure, or to nothing.
    Selected(Option<usize>),
}

/// A field of at most `capacity` figures, stamped from a palette, with a
/// single selection that can be dragged around.
#[derive(Debug, Clone)]
pub struct Board {
    figures: Vec<Figure>,
    selected: Option<usize>,
    armed: Option<FigureKind>,
    held: bool,
    radius: f32,
    capacity: usize,
}

impl Board {
    pub fn new(radius: f32, capacity: usize) -> Self {
        Self {
            figures: Vec::with_capacity(capacity),
            selected: None,
            armed: None,
            held: false,
            radius,
            capacity,
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

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected(&self) -> Option<&Figure> {
        self.selected.and_then(|i| self.figures.get(i))
    }

    pub fn armed(&self) -> Option<FigureKind> {
        self.armed
    }

    /// Is the left button down since a press on the field?
    pub fn is_held(&self) -> bool {
        self.held
    }

    /// Enter placement mode, the next press stamps a figure of `kind`.
    pub fn arm(&mut self, kind: FigureKind) {
        log::debug!("armed {:?}", kind);
        self.armed = Some(kind);
    }

    pub fn disarm(&mut self) {
        self.armed = None;
    }

    pub fn press(&mut self, point: Vec2) -> Result<Pressed, FieldError> {
        match self.armed {
            Some(kind) => self.place(kind, point).map(Pressed::Placed),
            None => {
                self.held = true;
                Ok(Pressed::Selected(self.pick(point)))
            }
        }
    }

    fn place(&mut self, kind: FigureKind, point: Vec2) -> Result<usize, FieldError> {
        if self.figures.len() >= self.capacity {
            log::warn!("field is full, {} figures", self.figures.len());
            return Err(FieldError::Capacity(self.capacity));
        }
        self.figures.push(Figure::of_kind(kind, point, self.radius));
        let i = self.figures.len() - 1;
        log::debug!("placed {:?} {} at {:?}", kind, i, point);
        Ok(i)
    }

    fn pick(&mut self, point: Vec2) -> Option<usize> {
        // a press on the selected figure picks it up or puts it down
        if let Some(figure) = self.selected.and_then(|i| self.figures.get_mut(i)) {
            if figure.contains(point) {
                figure.toggle_tracking();
                log::debug!("tracking {}", figure.is_tracking());
            }
        }

        let nearest = self.nearest(point);
        for (i, figure) in self.figures.iter_mut().enumerate() {
            if Some(i) == nearest {
                figure.select();
            } else {
                figure.deselect();
            }
        }
        self.selected = nearest;
        log::debug!("selected {:?}", nearest);
        nearest
    }

    /// The figure whose center is closest to `point`, among those whose
    /// circle contains it. The first one wins a tie.
    fn nearest(&self, point: Vec2) -> Option<usize> {
        let mut best: Option<(usize, f32)> = None;
        for (i, figure) in self.figures.iter().enumerate() {
            if !figure.within_reach(point) {
                continue;
            }
            let d = figure.center().distance(point);
            if best.map_or(true, |(_, min)| d < min) {
                best = Some((i, d));
            }
        }
        best.map(|(i, _)| i)
    }

    /// Pointer moved to `point`, returns whether a figure followed it.
    pub fn motion(&mut self, point: Vec2) -> bool {
        let Some(i) = self.selected else {
            return false;
        };
        match self.figures.get_mut(i) {
            Some(figure) if figure.is_tracking() => {
                *figure = figure.moved_to(point);
                true
            }
            _ => false,
        }
    }

    /// The press is over, the selected figure keeps tracking until it is
    /// pressed again.
    pub fn release(&mut self) {
        self.held = false;
    }

    /// Drops the palette choice and the selection.
    pub fn deselect(&mut self) {
        self.disarm();
        if let Some(figure) = self.selected.and_then(|i| self.figures.get_mut(i)) {
            figure.deselect();
        }
        self.selected = None;
        self.held = false;
    }

    pub fn delete_selected(&mut self) -> Result<Figure, FieldError> {
        let Some(i) = self.selected.take() else {
            log::warn!("nothing selected to delete");
            return Err(FieldError::NoSelection);
        };
        self.held = false;
        let figure = self.figures.remove(i);
        log::debug!("deleted figure {}", i);
        Ok(figure)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(consts::palette::RADIUS, consts::palette::MAX_FIGURES)
    }
}
