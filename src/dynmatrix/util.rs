use core::fmt::{self, Write as _};

use crate::traits::Scalar;

use super::DynMatrix;

// ── Map ─────────────────────────────────────────────────────────────

impl<T> DynMatrix<T> {
    /// Apply a function to every element, producing a new matrix.
    ///
    /// ```
    /// use symspectra::DynMatrix;
    /// let m = DynMatrix::from_vec(2, 2, vec![1_i64, 4, 9, 16]);
    /// let r = m.map(|&x| x * 2);
    /// assert_eq!(r[(0, 0)], 2);
    /// assert_eq!(r[(1, 1)], 32);
    /// ```
    pub fn map<U>(&self, f: impl Fn(&T) -> U) -> DynMatrix<U> {
        DynMatrix {
            data: self.data.iter().map(f).collect(),
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }

    /// Iterate over all entries in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        (0..self.nrows)
            .flat_map(move |i| (0..self.ncols).map(move |j| &self.data[j * self.nrows + i]))
    }
}

// ── Row / Column manipulation ───────────────────────────────────────

impl<T> DynMatrix<T> {
    /// Swap two rows in place.
    ///
    /// ```
    /// use symspectra::DynMatrix;
    /// let mut m = DynMatrix::from_rows(2, 2, &[1_i64, 2, 3, 4]);
    /// m.swap_rows(0, 1);
    /// assert_eq!(m[(0, 0)], 3);
    /// assert_eq!(m[(1, 0)], 1);
    /// ```
    pub fn swap_rows(&mut self, a: usize, b: usize) {
        if a != b {
            for j in 0..self.ncols {
                self.data.swap(j * self.nrows + a, j * self.nrows + b);
            }
        }
    }
}

// ── Row / Column access ─────────────────────────────────────────────

impl<T: Scalar> DynMatrix<T> {
    /// Extract row `i` as a `1 x ncols` matrix.
    ///
    /// ```
    /// use symspectra::DynMatrix;
    /// let m = DynMatrix::from_rows(2, 2, &[1_i64, 2, 3, 4]);
    /// let r = m.row(1);
    /// assert_eq!(r.shape(), (1, 2));
    /// assert_eq!(r[(0, 0)], 3);
    /// ```
    pub fn row(&self, i: usize) -> DynMatrix<T> {
        self.block(i, 0, 1, self.ncols)
    }

    /// Extract column `j` as an `nrows x 1` matrix.
    ///
    /// ```
    /// use symspectra::DynMatrix;
    /// let m = DynMatrix::from_rows(2, 2, &[1_i64, 2, 3, 4]);
    /// let c = m.col(1);
    /// assert_eq!(c.shape(), (2, 1));
    /// assert_eq!(c[(1, 0)], 4);
    /// ```
    pub fn col(&self, j: usize) -> DynMatrix<T> {
        assert!(
            j < self.ncols,
            "column {} out of bounds for {}x{} matrix",
            j, self.nrows, self.ncols,
        );
        let start = j * self.nrows;
        DynMatrix {
            data: self.data[start..start + self.nrows].to_vec(),
            nrows: self.nrows,
            ncols: 1,
        }
    }

    /// All entries in row-major order.
    pub fn flat(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }

    /// Transpose.
    ///
    /// ```
    /// use symspectra::DynMatrix;
    /// let m = DynMatrix::from_rows(2, 3, &[1_i64, 2, 3, 4, 5, 6]);
    /// let t = m.transpose();
    /// assert_eq!(t.shape(), (3, 2));
    /// assert_eq!(t[(2, 1)], 6);
    /// ```
    pub fn transpose(&self) -> DynMatrix<T> {
        DynMatrix::from_fn(self.ncols, self.nrows, |i, j| self[(j, i)].clone())
    }
}

// ── Display ─────────────────────────────────────────────────────────

impl<T: fmt::Display> fmt::Display for DynMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = self.nrows;
        let n = self.ncols;
        if m == 0 || n == 0 {
            return write!(f, "[{}x{}]", m, n);
        }

        // Measure column widths
        let mut widths: Vec<usize> = vec![0; n];
        for (j, width) in widths.iter_mut().enumerate() {
            for i in 0..m {
                let w = WriteCounting::count(|wc| write!(wc, "{}", self[(i, j)]));
                *width = (*width).max(w);
            }
        }

        for i in 0..m {
            write!(f, "│")?;
            for (j, width) in widths.iter().enumerate() {
                if j > 0 {
                    write!(f, "  ")?;
                }
                let cell = self[(i, j)].to_string();
                write!(f, "{:>width$}", cell, width = *width)?;
            }
            write!(f, "│")?;
            if i < m - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

struct WriteCounting {
    count: usize,
}

impl WriteCounting {
    fn count(f: impl FnOnce(&mut Self) -> fmt::Result) -> usize {
        let mut wc = WriteCounting { count: 0 };
        let _ = f(&mut wc);
        wc.count
    }
}

impl fmt::Write for WriteCounting {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.count += s.chars().count();
        Ok(())
    }
}
