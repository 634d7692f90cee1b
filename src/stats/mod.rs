//! Aggregate statistics consumed by plots and reports

mod inequality;
mod summary;

pub use inequality::{
    gini, intergenerational_correlation, log_wealth_correlation, lorenz_curve, pearson,
};
pub use summary::{histogram, sorted_by_wealth_desc, Bin, Feature, Summary};
