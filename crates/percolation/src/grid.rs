//! The percolation grid: dynamic connectivity over an n×n site lattice.
//!
//! Sites are 1-indexed by `(row, col)` with `(1, 1)` at the top-left and
//! stored flat, row-major. Two virtual nodes stand in for the whole top
//! and bottom rows so that "does the grid percolate?" is a single
//! connectivity query instead of an O(n) boundary scan.
//!
//! Two [`DisjointSet`]s back the grid. The primary set links bottom-row
//! sites to the virtual bottom and answers [`PercolationGrid::percolates`].
//! The full set never touches the virtual bottom and answers
//! [`PercolationGrid::is_full`]; without it, once the grid percolates every
//! open bottom-row site would appear connected to the top *through* the
//! virtual bottom node rather than through an actual open path (backwash).

use crate::disjoint_set::DisjointSet;
use crate::error::PercolationError;

/// The primary/full disjoint-set pair.
///
/// Every union except the bottom-row virtual link must hit both sets
/// identically; funnelling them through one `link` call keeps the
/// neighbor scan in `open` from being written twice.
#[derive(Clone, Debug)]
struct PairedSets {
    primary: DisjointSet,
    full: DisjointSet,
}

impl PairedSets {
    fn new(n: usize) -> Self {
        Self {
            primary: DisjointSet::new(n),
            full: DisjointSet::new(n),
        }
    }

    /// Union `a` and `b` in both sets.
    fn link(&mut self, a: usize, b: usize) {
        self.primary.union(a, b);
        self.full.union(a, b);
    }

    /// Union `a` and `b` in the primary set only. Reserved for the
    /// bottom-row → virtual-bottom link; the full set must never see it.
    fn link_primary(&mut self, a: usize, b: usize) {
        self.primary.union(a, b);
    }
}

/// An n×n grid of sites, each open or blocked, with near-constant-time
/// percolation and full-site queries.
///
/// Opening is monotonic: a site never becomes blocked again.
#[derive(Clone, Debug)]
pub struct PercolationGrid {
    side: usize,
    open_mask: Vec<bool>,
    open_count: usize,
    sets: PairedSets,
    virtual_top: usize,
    virtual_bottom: usize,
}

impl PercolationGrid {
    /// Creates an n×n grid with every site blocked.
    pub fn new(n: usize) -> Result<Self, PercolationError> {
        if n == 0 {
            return Err(PercolationError::GridSize { n });
        }
        let cell_count = n * n;
        Ok(Self {
            side: n,
            open_mask: vec![false; cell_count],
            open_count: 0,
            // Two extra elements: virtual top and bottom.
            sets: PairedSets::new(cell_count + 2),
            virtual_top: cell_count,
            virtual_bottom: cell_count + 1,
        })
    }

    /// Grid side length.
    pub fn size(&self) -> usize {
        self.side
    }

    fn validate(&self, row: usize, col: usize) -> Result<(), PercolationError> {
        if row < 1 || row > self.side || col < 1 || col > self.side {
            return Err(PercolationError::SiteOutOfBounds {
                row,
                col,
                n: self.side,
            });
        }
        Ok(())
    }

    /// Maps 1-indexed `(row, col)` to the flat index `(row-1)*n + (col-1)`.
    fn site_index(&self, row: usize, col: usize) -> usize {
        (row - 1) * self.side + (col - 1)
    }

    /// Opens a site and links it to its already-open neighbors.
    ///
    /// At most four unions: above (or the virtual top on row 1), left,
    /// right, below (or the virtual bottom on row n, primary set only).
    /// Re-opening an open site repeats the unions (no-ops) but leaves the
    /// open counter untouched.
    pub fn open(&mut self, row: usize, col: usize) -> Result<(), PercolationError> {
        self.validate(row, col)?;
        let site = self.site_index(row, col);

        if row > 1 {
            if self.is_open(row - 1, col)? {
                let above = self.site_index(row - 1, col);
                self.sets.link(site, above);
            }
        } else {
            self.sets.link(site, self.virtual_top);
        }

        if col > 1 && self.is_open(row, col - 1)? {
            let left = self.site_index(row, col - 1);
            self.sets.link(site, left);
        }

        if col < self.side && self.is_open(row, col + 1)? {
            let right = self.site_index(row, col + 1);
            self.sets.link(site, right);
        }

        if row < self.side {
            if self.is_open(row + 1, col)? {
                let below = self.site_index(row + 1, col);
                self.sets.link(site, below);
            }
        } else {
            // Primary only: linking the full set here would reintroduce
            // backwash.
            self.sets.link_primary(site, self.virtual_bottom);
        }

        if !self.open_mask[site] {
            self.open_mask[site] = true;
            self.open_count += 1;
        }
        Ok(())
    }

    /// Whether the site is open.
    pub fn is_open(&self, row: usize, col: usize) -> Result<bool, PercolationError> {
        self.validate(row, col)?;
        Ok(self.open_mask[self.site_index(row, col)])
    }

    /// Whether the site is connected to the top row by a path of open
    /// sites.
    ///
    /// Requires agreement in both sets. The full set alone is
    /// backwash-free; the primary check is a conservative intersection.
    pub fn is_full(&mut self, row: usize, col: usize) -> Result<bool, PercolationError> {
        self.validate(row, col)?;
        let site = self.site_index(row, col);
        Ok(self.sets.full.connected(site, self.virtual_top)
            && self.sets.primary.connected(site, self.virtual_top))
    }

    /// Number of open sites. O(1).
    pub fn open_sites(&self) -> usize {
        self.open_count
    }

    /// Whether an open path connects the top row to the bottom row.
    pub fn percolates(&mut self) -> bool {
        self.sets
            .primary
            .connected(self.virtual_top, self.virtual_bottom)
    }
}
