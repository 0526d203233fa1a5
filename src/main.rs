use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use exact_algebra::latex::{
  connect_with_minus_sign, connect_with_plus_sign, wrap_in_parentheses,
  write_math,
};
use exact_algebra::{Polynomial, Rational, parse_polynomial, parse_rational};
use serde_json::json;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Output format
  #[arg(long, value_enum, global = true, env = "EXACT_ALGEBRA_FORMAT", default_value_t = Format::Text)]
  format: Format,

  /// Print the worked equation, not just the result
  #[arg(long, global = true)]
  steps: bool,

  /// Log algorithm decisions to stderr (overrides RUST_LOG)
  #[arg(short, long, global = true)]
  verbose: bool,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
  Text,
  Latex,
  Json,
}

#[derive(Subcommand)]
enum Commands {
  /// Sum of polynomials, e.g. `add "2x^2 + 3x - 4" "x^2 + x - 2"`
  Add {
    #[arg(required = true, allow_hyphen_values = true)]
    polynomials: Vec<String>,
  },
  /// First polynomial minus the rest
  Subtract {
    #[arg(required = true, allow_hyphen_values = true)]
    polynomials: Vec<String>,
  },
  /// Product of polynomials
  Multiply {
    #[arg(required = true, allow_hyphen_values = true)]
    polynomials: Vec<String>,
  },
  /// Synthetic division by a linear binomial
  Divide {
    #[arg(allow_hyphen_values = true)]
    dividend: String,
    #[arg(allow_hyphen_values = true)]
    divisor: String,
  },
  /// Factor a quadratic trinomial
  Factor {
    #[arg(allow_hyphen_values = true)]
    polynomial: String,
  },
  /// Combine like terms and order by degree
  StandardForm {
    #[arg(allow_hyphen_values = true)]
    polynomial: String,
  },
  /// Exact arithmetic on rational literals such as 1/2 or 0.25
  Rational {
    #[arg(value_enum)]
    operation: RationalOp,
    #[arg(required = true, allow_hyphen_values = true)]
    values: Vec<String>,
  },
}

#[derive(Clone, Copy, ValueEnum)]
enum RationalOp {
  Add,
  Subtract,
  Multiply,
  Divide,
  Min,
  Max,
  Factor,
}

/// A rendered answer: the input side of the equation and the result.
struct Answer {
  operation: &'static str,
  inputs: Vec<String>,
  lhs_text: String,
  lhs_latex: String,
  text: String,
  latex: String,
}

fn main() -> Result<()> {
  let cli = Cli::parse();
  init_tracing(cli.verbose);

  let answer = run(cli.command)?;
  println!("{}", render(&answer, cli.format, cli.steps));
  Ok(())
}

fn init_tracing(verbose: bool) {
  let filter = if verbose {
    EnvFilter::new("debug")
  } else {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
  };
  let _ = tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .try_init();
}

fn parse_one(literal: &str) -> Result<Polynomial> {
  parse_polynomial(literal).with_context(|| format!("parsing `{}`", literal))
}

fn parse_all(literals: &[String]) -> Result<Vec<Polynomial>> {
  literals.iter().map(|s| parse_one(s)).collect()
}

fn run(command: Commands) -> Result<Answer> {
  match command {
    Commands::Add { polynomials } => {
      let parsed = parse_all(&polynomials)?;
      let (first, rest) = split_first(&parsed)?;
      let sum = first.add(rest)?;
      Ok(chain_answer("add", polynomials, &parsed, &sum, connect_with_plus_sign))
    }
    Commands::Subtract { polynomials } => {
      let parsed = parse_all(&polynomials)?;
      let (first, rest) = split_first(&parsed)?;
      let difference = first.subtract(rest)?;
      Ok(chain_answer(
        "subtract",
        polynomials,
        &parsed,
        &difference,
        connect_with_minus_sign,
      ))
    }
    Commands::Multiply { polynomials } => {
      let parsed = parse_all(&polynomials)?;
      let (first, rest) = split_first(&parsed)?;
      let product = first.multiply(rest)?;
      Ok(Answer {
        operation: "multiply",
        inputs: polynomials,
        lhs_text: parsed.iter().map(|p| format!("({})", p)).collect(),
        lhs_latex: parsed
          .iter()
          .map(|p| wrap_in_parentheses(&p.to_latex()))
          .collect(),
        text: product.to_string(),
        latex: product.to_latex(),
      })
    }
    Commands::Divide { dividend, divisor } => {
      let parsed = parse_all(&[dividend.clone(), divisor.clone()])?;
      let division = parsed[0].synthetic_division(&parsed[1])?;
      let (text, latex) = if division.remainder.is_zero() {
        (division.quotient.to_string(), division.quotient.to_latex())
      } else {
        (
          format!("{} remainder {}", division.quotient, division.remainder),
          format!(
            r"{} \text{{ remainder }} {}",
            division.quotient.to_latex(),
            division.remainder.to_latex()
          ),
        )
      };
      Ok(Answer {
        operation: "divide",
        lhs_text: format!("({}) / ({})", parsed[0], parsed[1]),
        lhs_latex: format!(
          r"\dfrac{{{}}}{{{}}}",
          parsed[0].to_latex(),
          parsed[1].to_latex()
        ),
        inputs: vec![dividend, divisor],
        text,
        latex,
      })
    }
    Commands::Factor { polynomial } => {
      let parsed = parse_one(&polynomial)?.standard_form()?;
      let factors = parsed.factor()?;
      if factors.is_empty() {
        bail!("{} is not a quadratic trinomial", parsed);
      }
      Ok(Answer {
        operation: "factor",
        inputs: vec![polynomial],
        lhs_text: parsed.to_string(),
        lhs_latex: parsed.to_latex(),
        text: factors.iter().map(factor_text).collect(),
        latex: factors.iter().map(factor_latex).collect(),
      })
    }
    Commands::StandardForm { polynomial } => {
      let parsed = parse_one(&polynomial)?;
      let standard = parsed.standard_form()?;
      Ok(Answer {
        operation: "standard-form",
        inputs: vec![polynomial],
        lhs_text: parsed.to_string(),
        lhs_latex: parsed.to_latex(),
        text: standard.to_string(),
        latex: standard.to_latex(),
      })
    }
    Commands::Rational { operation, values } => rational_answer(operation, values),
  }
}

fn split_first(parsed: &[Polynomial]) -> Result<(&Polynomial, &[Polynomial])> {
  parsed
    .split_first()
    .context("expected at least one polynomial")
}

fn chain_answer(
  operation: &'static str,
  inputs: Vec<String>,
  parsed: &[Polynomial],
  result: &Polynomial,
  connect: fn(&str, &str) -> String,
) -> Answer {
  let lhs = |render: &dyn Fn(&Polynomial) -> String| {
    parsed
      .iter()
      .map(render)
      .reduce(|acc, p| connect(&acc, &p))
      .unwrap_or_default()
  };
  Answer {
    operation,
    inputs,
    lhs_text: lhs(&|p| format!("({})", p)),
    lhs_latex: lhs(&|p| wrap_in_parentheses(&p.to_latex())),
    text: result.to_string(),
    latex: result.to_latex(),
  }
}

fn factor_text(factor: &Polynomial) -> String {
  if factor.len() == 1 {
    factor.to_string()
  } else {
    format!("({})", factor)
  }
}

fn factor_latex(factor: &Polynomial) -> String {
  if factor.len() == 1 {
    factor.to_latex()
  } else {
    wrap_in_parentheses(&factor.to_latex())
  }
}

fn rational_answer(operation: RationalOp, values: Vec<String>) -> Result<Answer> {
  let parsed: Vec<Rational> = values
    .iter()
    .map(|s| parse_rational(s).with_context(|| format!("parsing `{}`", s)))
    .collect::<Result<_>>()?;
  let (&first, rest) = parsed.split_first().context("expected a value")?;

  let (name, symbol, result) = match operation {
    RationalOp::Add => ("rational-add", " + ", Rational::sum(&parsed)?),
    RationalOp::Subtract => ("rational-subtract", " - ", first.subtract(rest)?),
    RationalOp::Multiply => {
      ("rational-multiply", " * ", Rational::product(&parsed)?)
    }
    RationalOp::Divide => ("rational-divide", " / ", first.divide(rest)?),
    RationalOp::Min => {
      ("rational-min", ", ", Rational::min_of(&parsed).unwrap_or(first))
    }
    RationalOp::Max => {
      ("rational-max", ", ", Rational::max_of(&parsed).unwrap_or(first))
    }
    RationalOp::Factor => {
      let text = first.factored();
      return Ok(Answer {
        operation: "rational-factor",
        inputs: values,
        lhs_text: first.to_string(),
        lhs_latex: first.to_latex(),
        latex: text.replace('*', r"\cdot"),
        text,
      });
    }
  };

  Ok(Answer {
    operation: name,
    lhs_text: parsed
      .iter()
      .map(|r| r.to_string())
      .collect::<Vec<_>>()
      .join(symbol),
    lhs_latex: parsed
      .iter()
      .map(|r| r.to_latex())
      .collect::<Vec<_>>()
      .join(symbol),
    inputs: values,
    text: result.to_string(),
    latex: result.to_latex(),
  })
}

fn render(answer: &Answer, format: Format, steps: bool) -> String {
  match format {
    Format::Text if steps => format!("{} = {}", answer.lhs_text, answer.text),
    Format::Text => answer.text.clone(),
    Format::Latex if steps => {
      write_math(&format!("{} = {}", answer.lhs_latex, answer.latex))
    }
    Format::Latex => write_math(&answer.latex),
    Format::Json => json!({
      "operation": answer.operation,
      "inputs": answer.inputs,
      "equation": format!("{} = {}", answer.lhs_text, answer.text),
      "result": answer.text,
      "latex": answer.latex,
    })
    .to_string(),
  }
}
