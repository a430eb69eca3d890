//! Equated monthly installment (EMI) calculator.
//!
//! `EMI = P * R * (1 + R)^N / ((1 + R)^N - 1)` where `P` is the principal,
//! `R` the monthly rate as a fraction and `N` the tenure in months.

use crate::prompt;
use std::io::{self, BufRead, Write};
use thiserror::Error;

pub const PRINCIPAL_PROMPT: &str = "Enter the value for Principal: #";
pub const RATE_PROMPT: &str = "Enter the value for Interest Rate: ";
pub const ANNUAL_PROMPT: &str = "Is the rate annual? (yes or no): ";
pub const TENURE_PROMPT: &str = "Enter the Loan tenure in months: ";

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum EmiError {
    #[error("Invalid Input, P, R or N cannot be zero")]
    ZeroInput,
    #[error("installment is not a finite number (principal {principal}, rate {rate})")]
    NonFinite { principal: f64, rate: f64 },
}

/// How the entered interest rate is expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateBasis {
    /// Percent per year, spread over twelve months
    Annual,
    /// Percent per month
    Monthly,
}

impl RateBasis {
    /// Interpret a yes/no answer to "is the rate annual?".
    pub fn from_answer(answer: &str) -> Self {
        match answer.trim().to_ascii_lowercase().as_str() {
            "yes" | "y" => RateBasis::Annual,
            _ => RateBasis::Monthly,
        }
    }

    /// Convert a percentage into a monthly fraction.
    pub fn monthly_rate(&self, rate_percent: f64) -> f64 {
        match self {
            RateBasis::Annual => rate_percent / 12.0 / 100.0,
            RateBasis::Monthly => rate_percent / 100.0,
        }
    }
}

/// Loan inputs as the user entered them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoanTerms {
    pub principal: f64,
    pub rate_percent: f64,
    pub basis: RateBasis,
    pub months: u32,
}

impl LoanTerms {
    pub fn monthly_rate(&self) -> f64 {
        self.basis.monthly_rate(self.rate_percent)
    }

    pub fn installment(&self) -> Result<f64, EmiError> {
        calculate_emi(self.principal, self.monthly_rate(), self.months)
    }
}

/// Monthly installment for `principal` at `monthly_rate` (a fraction, not a
/// percentage) over `months`.
pub fn calculate_emi(principal: f64, monthly_rate: f64, months: u32) -> Result<f64, EmiError> {
    if principal == 0.0 || monthly_rate == 0.0 || months == 0 {
        return Err(EmiError::ZeroInput);
    }

    let growth = (1.0 + monthly_rate).powf(f64::from(months));
    // Rates too small to register in f64 leave plain repayment
    let emi = if growth == 1.0 {
        principal / f64::from(months)
    } else {
        principal * monthly_rate * growth / (growth - 1.0)
    };

    if !emi.is_finite() {
        return Err(EmiError::NonFinite {
            principal,
            rate: monthly_rate,
        });
    }
    Ok(emi)
}

/// Format with thousands separators and two decimals, e.g. `1,234,567.89`.
pub fn format_amount(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    // -0.004 rounds to 0.00 and should not keep its sign
    let sign = if value < 0.0 && fixed.bytes().any(|b| (b'1'..=b'9').contains(&b)) {
        "-"
    } else {
        ""
    };
    format!("{}{}.{}", sign, grouped, fraction)
}

fn ask_number<R, W, T>(input: &mut R, output: &mut W, text: &str) -> io::Result<T>
where
    R: BufRead,
    W: Write,
    T: std::str::FromStr,
{
    loop {
        let raw = prompt::ask(input, output, text)?;
        match raw.trim().parse() {
            Ok(value) => return Ok(value),
            Err(_) => {
                tracing::debug!(input = %raw, "rejected non-numeric loan input");
                writeln!(output, " '{}' is not a valid number. Try again.", raw)?;
            }
        }
    }
}

/// Ask for principal, rate, rate basis and tenure.
pub fn read_terms<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<LoanTerms> {
    let principal = ask_number(input, output, PRINCIPAL_PROMPT)?;
    let rate_percent = ask_number(input, output, RATE_PROMPT)?;
    let basis = RateBasis::from_answer(&prompt::ask(input, output, ANNUAL_PROMPT)?);
    let months = ask_number(input, output, TENURE_PROMPT)?;

    Ok(LoanTerms {
        principal,
        rate_percent,
        basis,
        months,
    })
}

/// Run the interactive calculator once. Returns the installment, or `None`
/// when the inputs were rejected.
pub fn run_calculator<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> io::Result<Option<f64>> {
    let terms = read_terms(input, output)?;
    tracing::debug!(?terms, "calculating installment");

    match terms.installment() {
        Ok(emi) => {
            writeln!(
                output,
                "The Equated Monthly Installment is {}",
                format_amount(emi)
            )?;
            Ok(Some(emi))
        }
        Err(err) => {
            writeln!(output, "{}", err)?;
            Ok(None)
        }
    }
}
