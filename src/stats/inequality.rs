//! Inequality and mobility measures

use crate::population::Agent;

/// Lorenz curve of a wealth distribution
///
/// N+1 points from (0, 0) to (1, 1): x is the cumulative population share and
/// y the cumulative wealth share, poorest first. A zero-total distribution
/// yields the equality diagonal.
pub fn lorenz_curve(wealth: &[f64]) -> Vec<(f64, f64)> {
    let n = wealth.len();
    let mut points = Vec::with_capacity(n + 1);
    points.push((0.0, 0.0));
    if n == 0 {
        return points;
    }

    let mut sorted = wealth.to_vec();
    sorted.sort_by(f64::total_cmp);
    let total: f64 = sorted.iter().sum();

    let mut cumulative = 0.0;
    for (i, w) in sorted.iter().enumerate() {
        cumulative += w;
        let x = (i + 1) as f64 / n as f64;
        let y = if total > 0.0 { cumulative / total } else { x };
        points.push((x, y));
    }

    // Pin the endpoint against accumulated rounding
    if let Some(last) = points.last_mut() {
        *last = (1.0, 1.0);
    }
    points
}

/// Gini coefficient: 1 - 2 × (area under the Lorenz curve)
///
/// Trapezoidal integration; 0 for empty or zero-total input.
pub fn gini(wealth: &[f64]) -> f64 {
    if wealth.is_empty() || wealth.iter().sum::<f64>() <= 0.0 {
        return 0.0;
    }

    let area: f64 = lorenz_curve(wealth)
        .windows(2)
        .map(|w| (w[1].0 - w[0].0) * (w[0].1 + w[1].1) / 2.0)
        .sum();

    (1.0 - 2.0 * area).clamp(0.0, 1.0)
}

/// Pearson correlation coefficient
///
/// `None` when lengths differ, fewer than two samples, or either side has
/// zero variance.
pub fn pearson(xs: &[f64], ys: &[f64]) -> Option<f64> {
    let n = xs.len();
    if n != ys.len() || n < 2 {
        return None;
    }

    let mean_x = xs.iter().sum::<f64>() / n as f64;
    let mean_y = ys.iter().sum::<f64>() / n as f64;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (x, y) in xs.iter().zip(ys) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x <= 0.0 || var_y <= 0.0 {
        return None;
    }
    Some(cov / (var_x.sqrt() * var_y.sqrt()))
}

/// Pearson correlation between parent wealth and own wealth across a cohort
///
/// `None` for founders (shared baseline ancestry).
pub fn intergenerational_correlation(agents: &[Agent]) -> Option<f64> {
    let (parents, children): (Vec<f64>, Vec<f64>) =
        agents.iter().map(|a| (a.parent_wealth, a.wealth)).unzip();
    pearson(&parents, &children)
}

/// Same as [`intergenerational_correlation`] on log wealth
///
/// Less sensitive to a handful of Pareto-tail fortunes. Agents with
/// non-positive wealth on either side are skipped.
pub fn log_wealth_correlation(agents: &[Agent]) -> Option<f64> {
    let (parents, children): (Vec<f64>, Vec<f64>) = agents
        .iter()
        .filter(|a| a.parent_wealth > 0.0 && a.wealth > 0.0)
        .map(|a| (a.parent_wealth.ln(), a.wealth.ln()))
        .unzip();
    pearson(&parents, &children)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::AgentId;

    #[test]
    fn test_gini_equal_wealth() {
        assert!(gini(&[5.0; 10]).abs() < 0.01);
    }

    #[test]
    fn test_gini_known_value() {
        let g = gini(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert!((g - 0.2667).abs() < 0.01, "gini {}", g);
    }

    #[test]
    fn test_gini_one_holds_everything() {
        let mut wealth = vec![0.0; 99];
        wealth.push(100.0);
        assert!((gini(&wealth) - 0.99).abs() < 1e-9);
    }

    #[test]
    fn test_gini_degenerate_inputs() {
        assert_eq!(gini(&[]), 0.0);
        assert_eq!(gini(&[0.0, 0.0]), 0.0);
    }

    #[test]
    fn test_lorenz_endpoints_and_length() {
        let curve = lorenz_curve(&[3.0, 1.0, 2.0]);
        assert_eq!(curve.len(), 4);
        assert_eq!(curve[0], (0.0, 0.0));
        assert_eq!(curve[3], (1.0, 1.0));
        assert!((curve[1].1 - 1.0 / 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_lorenz_zero_total_is_diagonal() {
        let curve = lorenz_curve(&[0.0, 0.0]);
        assert_eq!(curve, vec![(0.0, 0.0), (0.5, 0.5), (1.0, 1.0)]);
    }

    #[test]
    fn test_pearson() {
        let xs = [1.0, 2.0, 3.0, 4.0];
        assert!((pearson(&xs, &[2.0, 4.0, 6.0, 8.0]).unwrap() - 1.0).abs() < 1e-12);
        assert!((pearson(&xs, &[8.0, 6.0, 4.0, 2.0]).unwrap() + 1.0).abs() < 1e-12);
        assert_eq!(pearson(&xs, &[1.0, 1.0, 1.0, 1.0]), None);
        assert_eq!(pearson(&xs, &[1.0]), None);
    }

    #[test]
    fn test_intergenerational_correlation_founders() {
        let agents: Vec<Agent> = (0..10)
            .map(|i| {
                let mut a = Agent::new(AgentId(i), [0.0, 0.0], 1000.0, None);
                a.wealth = 100.0 + i as f64;
                a
            })
            .collect();
        assert_eq!(intergenerational_correlation(&agents), None);
    }

    #[test]
    fn test_intergenerational_correlation_perfect() {
        let agents: Vec<Agent> = (1..=10)
            .map(|i| {
                let mut a = Agent::new(AgentId(i), [0.0, 0.0], 10.0 * i as f64, None);
                a.wealth = 3.0 * i as f64;
                a
            })
            .collect();
        let r = intergenerational_correlation(&agents).unwrap();
        assert!((r - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_intergenerational_correlation_uses_raw_wealth() {
        // Linear in raw wealth, convex in logs
        let agents: Vec<Agent> = (1..=6)
            .map(|i| {
                let mut a = Agent::new(AgentId(i), [0.0, 0.0], 10f64.powi(i as i32), None);
                a.wealth = 2.0 * a.parent_wealth + 5.0;
                a
            })
            .collect();
        let raw = intergenerational_correlation(&agents).unwrap();
        let log = log_wealth_correlation(&agents).unwrap();
        assert!((raw - 1.0).abs() < 1e-9, "raw {}", raw);
        assert!(log < 1.0 - 1e-6, "log {}", log);
    }

    #[test]
    fn test_log_wealth_correlation_perfect_power_law() {
        let agents: Vec<Agent> = (1..=8)
            .map(|i| {
                let mut a = Agent::new(AgentId(i), [0.0, 0.0], 3f64.powi(i as i32), None);
                a.wealth = a.parent_wealth.powf(0.5);
                a
            })
            .collect();
        let r = log_wealth_correlation(&agents).unwrap();
        assert!((r - 1.0).abs() < 1e-9);
    }
}
