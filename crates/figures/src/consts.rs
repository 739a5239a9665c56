//! Sizes and limits of the two fields.

/// The canvas where clicking a figure adds a vertex to it.
pub mod growth {
    pub const FIELD_SIZE: f32 = 400.0;
    pub const RADIUS: f32 = 40.0;
    /// Every new figure starts out as a triangle.
    pub const START_ANGLES: u32 = 3;
}

/// The canvas with a palette of figures to stamp, select and move.
pub mod palette {
    pub const FIELD_SIZE: f32 = 600.0;
    pub const RADIUS: f32 = 80.0;
    pub const MAX_FIGURES: usize = 5;
    /// Width and height of a palette thumbnail.
    pub const ITEM_SIZE: f32 = 200.0;
}
