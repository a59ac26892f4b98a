use std::fmt;

use crate::equivalence_class::EquivalenceClass;
use crate::error::PercolationError;

trait Direction
{
    fn left(self) -> Self;
    fn right(self) -> Self;
    fn above(self) -> Self;
    fn below(self) -> Self;
}

impl Direction for (i32, i32)
{
    #[inline(always)]
    fn left(self) -> Self
    {
        (self.0, self.1 - 1)
    }
    #[inline(always)]
    fn right(self) -> Self
    {
        (self.0, self.1 + 1)
    }
    #[inline(always)]
    fn above(self) -> Self
    {
        (self.0 - 1, self.1)
    }
    #[inline(always)]
    fn below(self) -> Self
    {
        (self.0 + 1, self.1)
    }
}

/// Virtual site joined to every site of the first row.
const TOP: usize = 0;

/// An N-by-N grid of sites that are opened one at a time.
///
/// Positions are 1-based `(row, col)` pairs. Site `(row, col)` owns the id
/// `(row-1)*N + (col-1) + 1` in the connectivity structure; id `0` is the
/// virtual top site and id `N*N + 1` the virtual bottom site.
#[derive(Debug, Clone)]
pub struct PercolationGrid
{
    open: Vec<bool>,
    classes: EquivalenceClass,
    size: i32,
    n_open: usize,
}

impl PercolationGrid
{
    /// Builds a grid with every site blocked. Fails if `size <= 0`.
    pub fn new(size: i32) -> Result<Self, PercolationError>
    {
        if size <= 0
        {
            return Err(PercolationError::InvalidGridSize(size));
        }
        let n         = size as usize;
        let num_sites = n * n;
        let bottom    = num_sites + 1;

        let open        = vec![false; num_sites];
        let mut classes = EquivalenceClass::new(num_sites + 2);
        for col in 0..n
        {
            classes.union(TOP, 1 + col);
            classes.union(bottom, 1 + (n - 1) * n + col);
        }

        Ok(Self { open, classes, size, n_open: 0 })
    }
    #[inline]
    fn bottom(&self) -> usize
    {
        self.open.len() + 1
    }
    #[inline]
    fn contains(&self, pos: (i32, i32)) -> bool
    {
        (1..=self.size).contains(&pos.0) && (1..=self.size).contains(&pos.1)
    }
    #[inline]
    fn site_id(&self, pos: (i32, i32)) -> usize
    {
        (pos.0 - 1) as usize * self.size as usize + (pos.1 - 1) as usize + 1
    }
    fn checked_site_id(&self, row: i32, col: i32) -> Result<usize, PercolationError>
    {
        if !self.contains((row, col))
        {
            return Err(PercolationError::OutOfRange { row, col, size: self.size });
        }
        Ok(self.site_id((row, col)))
    }
    pub fn size(&self) -> i32
    {
        self.size
    }
    pub fn number_of_open_sites(&self) -> usize
    {
        self.n_open
    }
    /// Opens the site and joins it with every open orthogonal neighbour.
    /// Opening an already open site changes nothing.
    pub fn open(&mut self, row: i32, col: i32) -> Result<(), PercolationError>
    {
        let id = self.checked_site_id(row, col)?;
        if self.open[id - 1]
        {
            return Ok(());
        }
        self.open[id - 1] = true;
        self.n_open      += 1;

        let pos = (row, col);
        for ngbr in [pos.above(), pos.below(), pos.left(), pos.right()]
        {
            if !self.contains(ngbr)
            {
                continue;
            }
            let ngbr_id = self.site_id(ngbr);
            if self.open[ngbr_id - 1]
            {
                self.classes.union(ngbr_id, id);
            }
        }
        Ok(())
    }
    pub fn is_open(&self, row: i32, col: i32) -> Result<bool, PercolationError>
    {
        let id = self.checked_site_id(row, col)?;
        Ok(self.open[id - 1])
    }
    /// A site is full when it is open and connected to the top row through open sites.
    ///
    /// Once the grid percolates, an open bottom-row site also reads as full through
    /// the shared virtual bottom site, even if its own cluster never reaches the top.
    pub fn is_full(&self, row: i32, col: i32) -> Result<bool, PercolationError>
    {
        let id = self.checked_site_id(row, col)?;
        Ok(self.open[id - 1] && self.classes.connected(id, TOP))
    }
    /// True once an open path joins the first row to the last.
    ///
    /// For N = 1 the virtual sites share the single site from construction on, so
    /// at least one site must be open as well.
    pub fn percolates(&self) -> bool
    {
        self.n_open > 0 && self.classes.connected(TOP, self.bottom())
    }
    /// Number of disjoint sets in the connectivity structure, counting blocked
    /// sites as singletons and both virtual sites.
    pub fn cluster_count(&self) -> usize
    {
        self.classes.component_count()
    }
}

// '#' blocked, '*' full, '.' open but not full
impl fmt::Display for PercolationGrid
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        let mut result = Vec::with_capacity(self.open.len() + self.size as usize);
        for row in 1..=self.size
        {
            for col in 1..=self.size
            {
                let id   = self.site_id((row, col));
                let site = match (self.open[id - 1], self.classes.connected(id, TOP))
                {
                    (false, _)    => '#',
                    (true, true)  => '*',
                    (true, false) => '.',
                };
                result.push(site);
            }
            if row < self.size
            {
                result.push('\n');
            }
        }
        write!(f, "{}", result.into_iter().collect::<String>())
    }
}
