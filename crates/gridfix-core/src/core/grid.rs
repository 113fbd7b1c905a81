use nalgebra::Vector3;
use std::collections::HashMap;

/// Dimensions and spacing of the molecule lattice.
///
/// The default lattice holds 22 × 20 molecules per layer and stacks layers
/// along z without limit. It is sized for a box of roughly
/// 3700 × 1400 × 1400 Å holding several hundred small molecules.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSpec {
    /// Position of the first cell.
    pub origin: Vector3<f64>,
    /// Distance between neighbouring cells along each axis.
    pub spacing: Vector3<f64>,
    /// Number of cells along x before wrapping to the next row.
    pub cells_x: usize,
    /// Number of rows along y before wrapping to the next layer.
    pub cells_y: usize,
}

impl GridSpec {
    pub fn cells_per_layer(&self) -> usize {
        self.cells_x * self.cells_y
    }

    /// Origin of the cell at lattice indices `(ix, iy, iz)`.
    pub fn cell_origin(&self, ix: usize, iy: usize, iz: usize) -> Vector3<f64> {
        self.origin
            + Vector3::new(
                ix as f64 * self.spacing.x,
                iy as f64 * self.spacing.y,
                iz as f64 * self.spacing.z,
            )
    }

    /// Origin of the `k`-th cell in fill order (x fastest, then y, then z).
    pub fn nth_cell_origin(&self, k: usize) -> Vector3<f64> {
        self.cell_origin(
            k % self.cells_x,
            (k / self.cells_x) % self.cells_y,
            k / self.cells_per_layer(),
        )
    }
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            origin: Vector3::new(100.0, 10.0, 10.0),
            spacing: Vector3::new(160.0, 70.0, 700.0),
            cells_x: 22,
            cells_y: 20,
        }
    }
}

/// Walks the lattice cell by cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GridCursor {
    pub ix: usize,
    pub iy: usize,
    pub iz: usize,
}

impl GridCursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves to the next cell, wrapping x into y and y into z.
    pub fn advance(&mut self, spec: &GridSpec) {
        self.ix += 1;
        if self.ix >= spec.cells_x {
            self.ix = 0;
            self.iy += 1;
            if self.iy >= spec.cells_y {
                self.iy = 0;
                self.iz += 1;
            }
        }
    }
}

/// Assigns every molecule id a lattice cell in the order molecules are first seen.
#[derive(Debug, Clone)]
pub struct GridPlacement {
    spec: GridSpec,
    cursor: GridCursor,
    offsets: HashMap<i64, Vector3<f64>>,
    order: Vec<i64>,
}

impl GridPlacement {
    pub fn new(spec: GridSpec) -> Self {
        Self {
            spec,
            cursor: GridCursor::new(),
            offsets: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Returns the base offset of `molecule_id`, claiming the next free cell
    /// the first time the molecule is seen.
    pub fn offset_for(&mut self, molecule_id: i64) -> Vector3<f64> {
        if let Some(offset) = self.offsets.get(&molecule_id) {
            return *offset;
        }

        let offset = self
            .spec
            .cell_origin(self.cursor.ix, self.cursor.iy, self.cursor.iz);
        self.offsets.insert(molecule_id, offset);
        self.order.push(molecule_id);
        self.cursor.advance(&self.spec);
        offset
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn cursor(&self) -> GridCursor {
        self.cursor
    }

    /// Molecule ids with their offsets, in first-encounter order.
    pub fn iter(&self) -> impl Iterator<Item = (i64, Vector3<f64>)> + '_ {
        self.order.iter().map(|id| (*id, self.offsets[id]))
    }
}

impl Default for GridPlacement {
    fn default() -> Self {
        Self::new(GridSpec::default())
    }
}
