use lgm_core::{ensure, Error, Real, Result, Size, Time};

/// Simulated factor values indexed by `(date, path)`.
///
/// Each cell holds `variable_count()` values.  Storage is one flat buffer,
/// date-major, so the cells of one date are contiguous.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationData {
    dates: Vec<Time>,
    paths: Size,
    variables: Size,
    values: Vec<Real>,
}

impl SimulationData {
    /// A zero-filled container.
    ///
    /// # Errors
    /// `InvalidArgument` if there are no dates, no paths or no variables,
    /// or the dates are not finite and strictly increasing, or the shape
    /// is too large to allocate.
    pub fn new(dates: Vec<Time>, paths: Size, variables: Size) -> Result<Self> {
        ensure!(!dates.is_empty(), "simulation needs at least one date");
        ensure!(paths > 0, "simulation needs at least one path");
        ensure!(variables > 0, "simulation needs at least one variable");
        ensure!(
            dates.iter().all(|t| t.is_finite()),
            "simulation dates must be finite"
        );
        ensure!(
            dates.windows(2).all(|w| w[0] < w[1]),
            "simulation dates must be strictly increasing"
        );
        let len = dates
            .len()
            .checked_mul(paths)
            .and_then(|n| n.checked_mul(variables))
            .filter(|n| {
                n.checked_mul(std::mem::size_of::<Real>())
                    .is_some_and(|bytes| bytes <= isize::MAX as usize)
            });
        let Some(len) = len else {
            return Err(Error::InvalidArgument(format!(
                "simulation shape {} dates x {paths} paths x {variables} variables is too large",
                dates.len()
            )));
        };
        let values = vec![0.0; len];
        Ok(Self {
            dates,
            paths,
            variables,
            values,
        })
    }

    /// Simulation dates as year fractions.
    pub fn dates(&self) -> &[Time] {
        &self.dates
    }

    /// Number of dates.
    pub fn date_count(&self) -> Size {
        self.dates.len()
    }

    /// Number of stored paths (antithetic mirrors included).
    pub fn path_count(&self) -> Size {
        self.paths
    }

    /// Number of values per cell.
    pub fn variable_count(&self) -> Size {
        self.variables
    }

    fn offset(&self, date: Size, path: Size) -> Result<Size> {
        if date >= self.dates.len() {
            return Err(Error::IndexOutOfRange {
                index: date,
                size: self.dates.len(),
            });
        }
        if path >= self.paths {
            return Err(Error::IndexOutOfRange {
                index: path,
                size: self.paths,
            });
        }
        Ok((date * self.paths + path) * self.variables)
    }

    /// The factor values of one cell.
    pub fn cell(&self, date: Size, path: Size) -> Result<&[Real]> {
        let start = self.offset(date, path)?;
        Ok(&self.values[start..start + self.variables])
    }

    /// Mutable access to one cell.
    pub fn cell_mut(&mut self, date: Size, path: Size) -> Result<&mut [Real]> {
        let start = self.offset(date, path)?;
        Ok(&mut self.values[start..start + self.variables])
    }

    /// Overwrite one cell.
    ///
    /// # Errors
    /// `IndexOutOfRange` for a bad date or path, `InvalidArgument` if
    /// `values` does not have `variable_count()` entries.
    pub fn put(&mut self, date: Size, path: Size, values: &[Real]) -> Result<()> {
        ensure!(
            values.len() == self.variables,
            "cell holds {} variables, got {}",
            self.variables,
            values.len()
        );
        self.cell_mut(date, path)?.copy_from_slice(values);
        Ok(())
    }

    /// Variable `variable` of every path at `date`, in path order.
    pub fn factors_at(
        &self,
        date: Size,
        variable: Size,
    ) -> Result<impl Iterator<Item = Real> + '_> {
        if variable >= self.variables {
            return Err(Error::IndexOutOfRange {
                index: variable,
                size: self.variables,
            });
        }
        let start = self.offset(date, 0)?;
        let block = &self.values[start..start + self.paths * self.variables];
        Ok(block.chunks_exact(self.variables).map(move |cell| cell[variable]))
    }

    /// All cells of `date`, path-major, for in-place updates.
    pub(crate) fn date_block_mut(&mut self, date: Size) -> Result<&mut [Real]> {
        let start = self.offset(date, 0)?;
        let len = self.paths * self.variables;
        Ok(&mut self.values[start..start + len])
    }
}
