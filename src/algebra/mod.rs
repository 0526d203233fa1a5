pub mod division;
pub mod factor;
pub mod monomial;
pub mod polynomial;
pub mod variable;

pub use division::{MAX_DIVIDEND_DEGREE, SyntheticDivision};
pub use monomial::{
  Monomial, are_like_terms, contains_monomial, monomial_by_degree,
  monomial_gcf,
};
pub use polynomial::{Polynomial, standard_order};
pub use variable::VariablePower;
