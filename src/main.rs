//! Interactive calculator front end.
//!
//! A thin host loop around [`exprcalc::evaluate`]: read a line, evaluate it,
//! print the value or the error kind. An empty line (or end of input)
//! terminates the program with exit code 0. The loop holds no state between
//! lines.

use std::io::{self, BufRead, Write};

/// Formats a result to roughly 10 significant digits.
///
/// Rounds through scientific notation first, then prints the shortest
/// representation of the rounded value, so `1/3` comes out as
/// `0.3333333333` and `120` stays `120`. Magnitudes outside the `%g`-style
/// decimal range (exponent below -4 or at 10 and above) fall back to
/// exponent notation instead of a wall of zeros or digits.
fn format_value(value: f64) -> String {
    let rounded: f64 = format!("{:.9e}", value).parse().unwrap_or(value);
    if rounded != 0.0 && rounded.is_finite() {
        let exponent = rounded.abs().log10().floor();
        if !(-4.0..10.0).contains(&exponent) {
            return format!("{:e}", rounded);
        }
    }
    format!("{}", rounded)
}

fn main() -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line = String::new();

    loop {
        stdout.write_all(b"> ")?;
        stdout.flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let expression = line.trim_end_matches(['\n', '\r']);
        if expression.is_empty() {
            break;
        }

        match exprcalc::evaluate(expression) {
            Ok(value) => println!("{}", format_value(value)),
            Err(err) => eprintln!("Error: {}", err.name()),
        }
    }

    Ok(())
}
