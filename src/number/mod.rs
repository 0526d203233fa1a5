pub mod factoring;
pub mod rational;

pub use factoring::{exact_sqrt, factors_of, gcd, lcm, prime_factorization};
pub use rational::Rational;
