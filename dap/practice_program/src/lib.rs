//! A small program meant to be stepped through under a debugger.
//!
//! Every procedure writes its status lines to the sink it is handed, so the
//! binary can point them at stdout while tests capture them in memory.

use log::{debug, trace};
use std::fmt;
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

pub const USER_NAME: &str = "Debugger User";
pub const FIRST_OPERANDS: (i64, i64) = (10, 5);
/// `y + 5 == 0` here, so the division guard kicks in.
pub const GUARDED_OPERANDS: (i64, i64) = (10, -5);
pub const LOOP_COUNT: u64 = 5;
/// Blocking pause per loop iteration.
pub const SIMULATED_WORK: Duration = Duration::from_millis(100);

/// Outcome of [`complex_calculation`].
///
/// Displays like a Python float: whole quotients keep `.0` and exponents
/// carry a sign and at least two digits (`1e+17`, `1.5e-05`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Calculation {
    Quotient(f64),
    /// Substituted when the divisor is zero.
    Zero,
}

impl Calculation {
    /// Numeric value, with the divide-by-zero substitute read as `0.0`.
    pub fn value(&self) -> f64 {
        match self {
            Calculation::Quotient(v) => *v,
            Calculation::Zero => 0.0,
        }
    }
}

impl fmt::Display for Calculation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Calculation::Quotient(v) => write_float(f, *v),
            Calculation::Zero => write!(f, "0"),
        }
    }
}

fn write_float(f: &mut fmt::Formatter<'_>, v: f64) -> fmt::Result {
    // Debug keeps the trailing ".0" on whole floats and switches to
    // exponent form at the same magnitudes Python does.
    let repr = format!("{:?}", v);
    match repr.split_once('e') {
        Some((mantissa, exp)) => {
            let exp: i32 = exp.parse().map_err(|_| fmt::Error)?;
            let sign = if exp < 0 { '-' } else { '+' };
            write!(f, "{}e{}{:02}", mantissa, sign, exp.unsigned_abs())
        }
        None => f.write_str(&repr),
    }
}

/// A simple function to greet someone.
pub fn greet<W: Write>(out: &mut W, name: &str) -> io::Result<String> {
    let message = format!("Hello, {}!", name);
    writeln!(out, "{}", message)?;
    Ok(message)
}

pub fn complex_calculation<W: Write>(out: &mut W, x: i64, y: i64) -> io::Result<Calculation> {
    writeln!(out, "Starting calculation with x={}, y={}", x, y)?;
    // Widened so extreme inputs cannot wrap.
    let a = i128::from(x) * 2;
    let b = i128::from(y) + 5;
    debug!("a={} b={}", a, b);

    let result = if b != 0 {
        Calculation::Quotient(a as f64 / b as f64)
    } else {
        Calculation::Zero
    };

    writeln!(out, "Calculation result: {}", result)?;
    Ok(result)
}

pub fn loop_example<W: Write>(out: &mut W, count: u64) -> io::Result<u64> {
    loop_example_with_delay(out, count, SIMULATED_WORK)
}

/// Sums `0..count`, printing one line per iteration and sleeping `delay`
/// after each one.
pub fn loop_example_with_delay<W: Write>(
    out: &mut W,
    count: u64,
    delay: Duration,
) -> io::Result<u64> {
    writeln!(out, "Starting loop for {} iterations.", count)?;
    let mut total = 0;
    for i in 0..count {
        trace!("iteration {} entering with total={}", i, total);
        writeln!(out, "  Iteration {}", i)?;
        total += i;
        thread::sleep(delay);
    }
    debug!("loop done, total={}", total);
    writeln!(out, "Loop finished. Final total: {}", total)?;
    Ok(total)
}

/// Runs the whole practice sequence with the default loop delay.
pub fn run<W: Write>(out: &mut W) -> io::Result<()> {
    run_with_delay(out, SIMULATED_WORK)
}

pub fn run_with_delay<W: Write>(out: &mut W, delay: Duration) -> io::Result<()> {
    writeln!(out, "--- DAP Practice Script Start ---")?;

    let user_name = USER_NAME;
    let greeting = greet(out, user_name)?;
    writeln!(out, "Function returned: {}", greeting)?;

    let (num1, num2) = FIRST_OPERANDS;
    let calc_result = complex_calculation(out, num1, num2)?;
    writeln!(out, "Calculation returned: {}", calc_result)?;

    let loop_total = loop_example_with_delay(out, LOOP_COUNT, delay)?;
    writeln!(out, "Loop function returned: {}", loop_total)?;

    // Result intentionally dropped.
    let (x, y) = GUARDED_OPERANDS;
    complex_calculation(out, x, y)?;

    writeln!(out, "--- DAP Practice Script End ---")?;
    Ok(())
}
