//! Standard objective functions shared by the integration tests.

#![allow(dead_code)]

use std::f64::consts::PI;

pub fn sphere(x: &[f64]) -> f64 {
    x.iter().map(|&xi| xi * xi).sum()
}

/// Sphere centered at 0.3 in every coordinate, so the optimum is not a
/// sampled center of the first levels.
pub fn shifted_sphere(x: &[f64]) -> f64 {
    x.iter().map(|&xi| (xi - 0.3) * (xi - 0.3)).sum()
}

pub fn rosenbrock(x: &[f64]) -> f64 {
    let mut sum = 0.0;
    for i in 0..x.len() - 1 {
        sum += 100.0 * (x[i + 1] - x[i] * x[i]).powi(2) + (1.0 - x[i]).powi(2);
    }
    sum
}

pub fn rastrigin(x: &[f64]) -> f64 {
    let n = x.len() as f64;
    10.0 * n + x.iter().map(|&xi| xi * xi - 10.0 * (2.0 * PI * xi).cos()).sum::<f64>()
}

/// Styblinski-Tang, global minimum -39.16617 per dimension at -2.903534.
pub fn styblinski_tang(x: &[f64]) -> f64 {
    0.5 * x.iter().map(|&xi| xi.powi(4) - 16.0 * xi * xi + 5.0 * xi).sum::<f64>()
}

/// Cubic variant `sum x^3 - 16 x^2 + 5 x`, minimum near 10.508 per dimension
/// on boxes excluding large x.
pub fn cubic_tang(x: &[f64]) -> f64 {
    x.iter().map(|&xi| xi * xi * xi - 16.0 * xi * xi + 5.0 * xi).sum()
}

/// Six-hump camel, global minimum -1.0316 at (±0.0898, ∓0.7126).
pub fn six_hump_camel(x: &[f64]) -> f64 {
    let (a, b) = (x[0], x[1]);
    (4.0 - 2.1 * a * a + a.powi(4) / 3.0) * a * a + a * b + (-4.0 + 4.0 * b * b) * b * b
}

/// `sin x + sin 2x + sin 4x + sin 8x + y`.
pub fn sine_sum(x: &[f64]) -> f64 {
    x[0].sin() + (2.0 * x[0]).sin() + (4.0 * x[0]).sin() + (8.0 * x[0]).sin() + x[1]
}
