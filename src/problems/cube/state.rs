use crate::search::SearchError;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// The label of one cube cell. Descriptions may use strings or integers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Label {
    Number(i64),
    Text(String),
}

impl Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Number(number) => f.pad(&number.to_string()),
            Label::Text(text) => f.pad(text),
        }
    }
}

impl From<&str> for Label {
    fn from(text: &str) -> Self {
        Label::Text(text.to_string())
    }
}

impl From<i64> for Label {
    fn from(number: i64) -> Self {
        Label::Number(number)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    pub rows: usize,
    pub cols: usize,
}

impl Shape {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Number of cells, `None` if it does not fit in a `usize`.
    pub fn size(&self) -> Option<usize> {
        self.rows.checked_mul(self.cols)
    }

    /// The number of cells a single move can displace.
    pub fn max_dimension(&self) -> usize {
        self.rows.max(self.cols)
    }
}

/// One configuration of the cube: its shape and the row-major cell labels.
/// Equality and hashing cover both.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CubeState {
    shape: Shape,
    layout: Vec<Label>,
}

impl CubeState {
    /// Fails if a dimension is zero or the layout length differs from
    /// `rows * cols`.
    pub fn new(shape: Shape, layout: Vec<Label>) -> Result<Self, SearchError> {
        if shape.rows == 0 || shape.cols == 0 {
            return Err(SearchError::MalformedProblem(format!(
                "shape {}x{} has a zero dimension",
                shape.rows, shape.cols
            )));
        }
        let size = shape.size().ok_or_else(|| {
            SearchError::MalformedProblem(format!(
                "shape {}x{} has too many cells",
                shape.rows, shape.cols
            ))
        })?;
        if layout.len() != size {
            return Err(SearchError::MalformedProblem(format!(
                "layout has {} cells but shape {}x{} needs {}",
                layout.len(),
                shape.rows,
                shape.cols,
                size
            )));
        }
        Ok(Self { shape, layout })
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn layout(&self) -> &[Label] {
        &self.layout
    }

    /// Rotate row `row` left by one cell.
    pub fn left(&self, row: usize) -> Self {
        let mut layout = self.layout.clone();
        let cols = self.shape.cols;
        layout[row * cols..(row + 1) * cols].rotate_left(1);
        self.with_layout(layout)
    }

    /// Rotate row `row` right by one cell.
    pub fn right(&self, row: usize) -> Self {
        let mut layout = self.layout.clone();
        let cols = self.shape.cols;
        layout[row * cols..(row + 1) * cols].rotate_right(1);
        self.with_layout(layout)
    }

    /// Rotate column `col` up by one cell.
    pub fn up(&self, col: usize) -> Self {
        let mut layout = self.layout.clone();
        for row in 0..self.shape.rows - 1 {
            layout.swap(self.index(row, col), self.index(row + 1, col));
        }
        self.with_layout(layout)
    }

    /// Rotate column `col` down by one cell.
    pub fn down(&self, col: usize) -> Self {
        let mut layout = self.layout.clone();
        for row in (1..self.shape.rows).rev() {
            layout.swap(self.index(row, col), self.index(row - 1, col));
        }
        self.with_layout(layout)
    }

    /// Number of cells whose label differs from the corresponding cell of
    /// `other`.
    pub fn misplaced_cells(&self, other: &CubeState) -> usize {
        self.layout
            .iter()
            .zip(other.layout.iter())
            .filter(|(a, b)| a != b)
            .count()
    }

    fn index(&self, row: usize, col: usize) -> usize {
        row * self.shape.cols + col
    }

    fn with_layout(&self, layout: Vec<Label>) -> Self {
        Self {
            shape: self.shape,
            layout,
        }
    }
}

impl Display for CubeState {
    /// Renders the cube as a table with row and column headers.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let separator = format!("{}+{}", " ".repeat(5), "-----+".repeat(self.shape.cols));
        write!(f, "{} ", " ".repeat(5))?;
        for col in 0..self.shape.cols {
            write!(f, "{:^5} ", col)?;
        }
        writeln!(f)?;
        writeln!(f, "{}", separator)?;
        for row in 0..self.shape.rows {
            write!(f, "{:^5}|", row)?;
            for col in 0..self.shape.cols {
                write!(f, "{:^5}|", self.layout[self.index(row, col)])?;
            }
            writeln!(f)?;
            writeln!(f, "{}", separator)?;
        }
        Ok(())
    }
}
