use fourier_core::{Coefficients, Domain};
use serde::{Deserialize, Serialize};

/// Options controlling the symbolic rendering of an expansion.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RenderOpts {
    /// Fixed number of decimals for every printed number. `None` uses the
    /// shortest representation that round-trips the `f64`.
    #[serde(default)]
    pub precision: Option<usize>,
}

impl RenderOpts {
    fn number(&self, value: f64) -> String {
        match self.precision {
            Some(precision) => format!("{value:.precision$}"),
            None => format!("{value}"),
        }
    }
}

struct Term {
    negative: bool,
    body: String,
}

fn collect_terms(coefficients: &Coefficients, opts: &RenderOpts) -> Vec<Term> {
    let mut terms = Vec::new();
    let half_a0 = coefficients.a()[0] / 2.0;
    if half_a0 != 0.0 {
        terms.push(Term {
            negative: half_a0 < 0.0,
            body: opts.number(half_a0.abs()),
        });
    }
    for i in 1..=coefficients.count() {
        let (a, b) = (coefficients.a()[i], coefficients.b()[i]);
        if a != 0.0 {
            terms.push(Term {
                negative: a < 0.0,
                body: format!("{} * cos{i}t", opts.number(a.abs())),
            });
        }
        if b != 0.0 {
            terms.push(Term {
                negative: b < 0.0,
                body: format!("{} * sin{i}t", opts.number(b.abs())),
            });
        }
    }
    terms
}

/// Renders `f(t) = ...` followed by the substitution that defines `t` in
/// terms of `x` over the domain.
pub fn render_expression(coefficients: &Coefficients, domain: &Domain, opts: &RenderOpts) -> String {
    let mut out = String::from("f(t) = ");
    let terms = collect_terms(coefficients, opts);
    if terms.is_empty() {
        out.push('0');
    }
    for (idx, term) in terms.iter().enumerate() {
        match (idx, term.negative) {
            (0, true) => out.push('-'),
            (0, false) => {}
            (_, true) => out.push_str(" - "),
            (_, false) => out.push_str(" + "),
        }
        out.push_str(&term.body);
    }

    let scale = opts.number(2.0 / domain.range());
    let start = domain.start();
    let substitution = if start == 0.0 {
        format!("where t = ({scale} * x - 1) * π")
    } else if start < 0.0 {
        format!("where t = ({scale} * (x + {}) - 1) * π", opts.number(-start))
    } else {
        format!("where t = ({scale} * (x - {}) - 1) * π", opts.number(start))
    };
    out.push('\n');
    out.push_str(&substitution);
    out
}
