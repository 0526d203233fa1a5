use super::*;
use insta::assert_snapshot;

mod text {
  use super::*;

  #[test]
  fn polynomial() {
    assert_snapshot!(poly("6x^3 - 14x^2 + 7x - 6").to_string(), @"6x^3 - 14x^2 + 7x - 6");
  }

  #[test]
  fn fractional_coefficients_are_parenthesized() {
    assert_snapshot!(poly("1/2x^2 - 3/4y").to_string(), @"(1/2)x^2 - (3/4)y");
  }

  #[test]
  fn fractional_exponent() {
    assert_snapshot!(poly("x^(1/2) + 1").to_string(), @"x^(1/2) + 1");
  }

  #[test]
  fn zero() {
    assert_snapshot!(Polynomial::zero().to_string(), @"0");
  }

  #[test]
  fn prime_factors() {
    assert_snapshot!(Rational::integer(60).factored(), @"2 * 2 * 3 * 5");
    assert_snapshot!(frac(6, 35).factored(), @"(2 * 3)/(5 * 7)");
  }
}

mod latex {
  use super::*;

  #[test]
  fn polynomial() {
    assert_snapshot!(
      poly("6x^3 - 14x^2 + 7x - 6").to_latex(),
      @"6x^{3} - 14x^{2} + 7x - 6"
    );
  }

  #[test]
  fn fractions() {
    assert_snapshot!(
      poly("1/2x^2 - 3/4y").to_latex(),
      @r"\dfrac{1}{2}x^{2} - \dfrac{3}{4}y"
    );
  }

  #[test]
  fn fractional_exponent() {
    assert_snapshot!(
      VariablePower::new('x', frac(1, 2)).to_latex(),
      @r"x^{\left(\dfrac{1}{2}\right)}"
    );
  }

  #[test]
  fn unit_coefficients() {
    assert_snapshot!(poly("x^2 - y + 1").to_latex(), @"x^{2} - y + 1");
  }

  #[test]
  fn rational() {
    assert_snapshot!(frac(-3, 4).to_latex(), @r"-\dfrac{3}{4}");
    assert_snapshot!(Rational::integer(-7).to_latex(), @"-7");
  }
}
