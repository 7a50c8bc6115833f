//! Data-driven rectangle tests.
//!
//! Each `tests/cases/*.geom` file holds one case per line:
//!
//! ```text
//! intersect 0 0 10 10 | 5 5 10 10 => 5 5 5 5
//! ```
//!
//! Rectangles are written as `x y dx dy`, points as `x y`. Blank lines and
//! lines starting with `#` are skipped.

use camino::Utf8Path;
use geomutil::{PointD, RectD};

#[derive(Debug, PartialEq)]
enum Outcome {
    Rect(RectD),
    Bool(bool),
}

fn parse_nums(group: &str) -> Result<Vec<f64>, String> {
    group
        .split_whitespace()
        .map(|tok| {
            tok.parse::<f64>()
                .map_err(|e| format!("bad number {tok:?}: {e}"))
        })
        .collect()
}

fn rect(nums: &[f64]) -> Result<RectD, String> {
    match nums {
        [x, y, dx, dy] => Ok(RectD::new(*x, *y, *dx, *dy)),
        _ => Err(format!("expected 4 numbers for a rect, got {}", nums.len())),
    }
}

fn pair(nums: &[f64]) -> Result<(f64, f64), String> {
    match nums {
        [a, b] => Ok((*a, *b)),
        _ => Err(format!("expected 2 numbers, got {}", nums.len())),
    }
}

fn eval(op: &str, args: &[Vec<f64>]) -> Result<Outcome, String> {
    let arg = |i: usize| {
        args.get(i)
            .map(Vec::as_slice)
            .ok_or_else(|| format!("{op}: missing operand {i}"))
    };
    let out = match op {
        "intersect" => Outcome::Rect(rect(arg(0)?)?.intersect(rect(arg(1)?)?)),
        "union" => Outcome::Rect(rect(arg(0)?)?.union(rect(arg(1)?)?)),
        "contains" => {
            let (x, y) = pair(arg(1)?)?;
            Outcome::Bool(rect(arg(0)?)?.contains(PointD::new(x, y)))
        }
        "empty" => Outcome::Bool(rect(arg(0)?)?.is_empty()),
        "from_xy" => match arg(0)? {
            [xs, ys, xe, ye] => Outcome::Rect(RectD::from_xy(*xs, *ys, *xe, *ye)),
            other => {
                return Err(format!("from_xy: expected 4 numbers, got {}", other.len()));
            }
        },
        "round" => Outcome::Rect(rect(arg(0)?)?.round_to_nearest_int().convert()),
        "round_outward" => Outcome::Rect(rect(arg(0)?)?.round_outward().convert()),
        "offset" => {
            let mut r = rect(arg(0)?)?;
            let (dx, dy) = pair(arg(1)?)?;
            r.offset(dx, dy);
            Outcome::Rect(r)
        }
        "inflate" => {
            let mut r = rect(arg(0)?)?;
            let (dx, dy) = pair(arg(1)?)?;
            r.inflate(dx, dy);
            Outcome::Rect(r)
        }
        _ => return Err(format!("unknown op {op:?}")),
    };
    Ok(out)
}

fn expected(text: &str) -> Result<Outcome, String> {
    match text.trim() {
        "true" => Ok(Outcome::Bool(true)),
        "false" => Ok(Outcome::Bool(false)),
        nums => Ok(Outcome::Rect(rect(&parse_nums(nums)?)?)),
    }
}

fn run_case(line: &str) -> Result<(), String> {
    let (lhs, rhs) = line.split_once("=>").ok_or("missing `=>`")?;
    let lhs = lhs.trim();
    let (op, operands) = lhs.split_once(char::is_whitespace).unwrap_or((lhs, ""));
    let args = operands
        .split('|')
        .map(parse_nums)
        .collect::<Result<Vec<_>, _>>()?;

    let got = eval(op, &args)?;
    let want = expected(rhs)?;
    if got != want {
        return Err(format!("expected {want:?}, got {got:?}"));
    }
    Ok(())
}

fn test_geom_file(path: &Utf8Path) -> datatest_stable::Result<()> {
    let source = std::fs::read_to_string(path)?;

    let mut failures = Vec::new();
    for (idx, line) in source.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Err(e) = run_case(line) {
            failures.push(format!("{}:{}: {}\n    {}", path, idx + 1, e, line));
        }
    }

    if !failures.is_empty() {
        return Err(failures.join("\n").into());
    }
    Ok(())
}

datatest_stable::harness! {
    {
        test = test_geom_file,
        root = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/cases"),
        pattern = r"\.geom$",
    },
}
