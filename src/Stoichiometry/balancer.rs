//! Null space of the stoichiometric matrix and its conversion to minimal integer coefficients.
//!
//! The solve is done in two phases: Gauss-Jordan elimination in floating point gives a real-valued
//! null vector, then every component is reconstructed as an exact fraction with continued fractions
//! and the vector is scaled to the smallest integers. When the null space has more than one
//! dimension the first free column is set to 1 and all the other free columns to 0; this is a fixed
//! convention, other balancings are not searched for.
use super::rational::{gcd_of_slice, lcm, to_fraction};
use super::stoich_errors::StoichError;
use crate::settings::BalancerSettings;
use log::{debug, info};
use nalgebra::DMatrix;

/// Reduced row echelon form by Gauss-Jordan elimination with partial pivoting.
/// Returns the reduced matrix and the pivot column of every pivot row, in row order.
pub fn reduced_row_echelon(matrix: &DMatrix<f64>, tolerance: f64) -> (DMatrix<f64>, Vec<usize>) {
    let mut m = matrix.clone();
    let (nrows, ncols) = m.shape();
    let mut pivot_cols = Vec::new();
    let mut row = 0;
    for col in 0..ncols {
        if row >= nrows {
            break;
        }
        // first row at or below the current one with a usable entry
        let Some(pivot) = (row..nrows).find(|&r| m[(r, col)].abs() > tolerance) else {
            continue;
        };
        m.swap_rows(row, pivot);

        let pv = m[(row, col)];
        for c in col..ncols {
            m[(row, c)] /= pv;
        }
        for r in 0..nrows {
            if r != row && m[(r, col)].abs() > tolerance {
                let f = m[(r, col)];
                for c in col..ncols {
                    let delta = f * m[(row, c)];
                    m[(r, c)] -= delta;
                }
            }
        }
        pivot_cols.push(col);
        row += 1;
    }
    (m, pivot_cols)
}

/// columns without a pivot
pub fn free_columns(ncols: usize, pivot_cols: &[usize]) -> Vec<usize> {
    (0..ncols).filter(|c| !pivot_cols.contains(c)).collect()
}

/// Real-valued null vector with the first free variable equal to 1 and the other free variables 0.
pub fn null_space_vector(
    matrix: &DMatrix<f64>,
    settings: &BalancerSettings,
) -> Result<Vec<f64>, StoichError> {
    let ncols = matrix.ncols();
    let (rref, pivot_cols) = reduced_row_echelon(matrix, settings.pivot_tolerance);
    let free = free_columns(ncols, &pivot_cols);
    debug!("pivot columns {:?}, free columns {:?}", pivot_cols, free);
    let Some(&first_free) = free.first() else {
        return Err(StoichError::Underconstrained);
    };
    if free.len() > 1 {
        info!(
            "null space has dimension {}, using free column {} as the only degree of freedom",
            free.len(),
            first_free
        );
    }
    let mut v = vec![0.0; ncols];
    v[first_free] = 1.0;
    for (r, &pc) in pivot_cols.iter().enumerate().rev() {
        let sum: f64 = ((pc + 1)..ncols).map(|c| rref[(r, c)] * v[c]).sum();
        v[pc] = -sum;
    }
    Ok(v)
}

/// Exact integer vector proportional to `values`: rational reconstruction, scaling by the lcm of
/// the denominators, division by the gcd, positive orientation. Zero entries and entries of both
/// signs are rejected as degenerate.
pub fn integer_coefficients(
    values: &[f64],
    settings: &BalancerSettings,
) -> Result<Vec<i64>, StoichError> {
    let fracs = values
        .iter()
        .map(|&x| to_fraction(x, settings.max_denominator, settings.epsilon))
        .collect::<Result<Vec<(i64, i64)>, StoichError>>()?;

    let mut l: i64 = 1;
    for &(_, q) in &fracs {
        l = lcm(l, q).ok_or(StoichError::Overflow)?;
    }
    if l == 0 {
        return Err(StoichError::Degenerate);
    }
    let mut ints = fracs
        .iter()
        .map(|&(p, q)| p.checked_mul(l / q).ok_or(StoichError::Overflow))
        .collect::<Result<Vec<i64>, StoichError>>()?;

    let g = gcd_of_slice(&ints).max(1);
    for x in ints.iter_mut() {
        *x /= g;
    }
    if !ints.iter().any(|&x| x > 0) {
        for x in ints.iter_mut() {
            *x = -*x;
        }
    }
    if ints.iter().any(|&x| x <= 0) {
        return Err(StoichError::Degenerate);
    }
    Ok(ints)
}

/// minimal positive integer coefficients balancing the stoichiometric matrix
pub fn balance_matrix(
    matrix: &DMatrix<f64>,
    settings: &BalancerSettings,
) -> Result<Vec<u64>, StoichError> {
    let v = null_space_vector(matrix, settings)?;
    let ints = integer_coefficients(&v, settings)?;
    debug!("null vector {:?} -> coefficients {:?}", v, ints);
    Ok(ints.into_iter().map(|x| x as u64).collect())
}
