use super::direction::Position;

/// A dense, row-major rectangle of cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

impl<T: Clone> Grid<T> {
    pub fn new(width: usize, height: usize, fill: T) -> Self {
        Self {
            width,
            height,
            cells: vec![fill; width * height],
        }
    }
}

impl<T> Grid<T> {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn contains(&self, position: Position) -> bool {
        position.x < self.width && position.y < self.height
    }

    #[inline]
    pub fn get(&self, position: Position) -> Option<&T> {
        if self.contains(position) {
            self.cells.get(position.y * self.width + position.x)
        } else {
            None
        }
    }

    /// Overwrites a cell. Returns false if `position` is off the grid.
    #[inline]
    pub fn set(&mut self, position: Position, value: T) -> bool {
        if !self.contains(position) {
            return false;
        }
        self.cells[position.y * self.width + position.x] = value;
        true
    }

    /// Every position on the grid, row by row from the top.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Position::new(x, y)))
    }
}

impl Grid<bool> {
    /// True for set cells; anything off the grid reads as unset.
    #[inline]
    pub fn is_set(&self, position: Position) -> bool {
        self.get(position).copied().unwrap_or(false)
    }

    pub fn count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    pub fn as_list(&self) -> Vec<Position> {
        self.positions().filter(|&p| self.is_set(p)).collect()
    }
}
