// ─── Rendering helpers ──────────────────────────────────────────────

/// `\left(text\right)`
pub fn wrap_in_parentheses(text: &str) -> String {
  format!(r"\left({}\right)", text)
}

/// `$text$`
pub fn write_math(text: &str) -> String {
  format!("${}$", text)
}

/// Joins `b` onto `a` with ` + `, folding a leading minus on `b` into ` - `.
pub fn connect_with_plus_sign(a: &str, b: &str) -> String {
  match b.strip_prefix('-') {
    Some(rest) => format!("{} - {}", a, rest),
    None => format!("{} + {}", a, b),
  }
}

/// Joins `b` onto `a` with ` - `, folding a leading minus on `b` into ` + `.
pub fn connect_with_minus_sign(a: &str, b: &str) -> String {
  match b.strip_prefix('-') {
    Some(rest) => format!("{} + {}", a, rest),
    None => format!("{} - {}", a, b),
  }
}

/// Renders a sum of already-rendered terms, e.g. `["x^2", "-5x", "6"]`
/// becomes `x^2 - 5x + 6`. An empty sum renders as `0`.
pub fn join_terms<I>(terms: I) -> String
where
  I: IntoIterator<Item = String>,
{
  let mut terms = terms.into_iter();
  let Some(first) = terms.next() else {
    return "0".to_string();
  };
  terms.fold(first, |acc, term| connect_with_plus_sign(&acc, &term))
}
