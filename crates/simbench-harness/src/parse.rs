use simbench_core::{ErrorInfo, SweepError};

const PREFIX: &str = "Total time = ";
const SUFFIX: &str = " seconds";

/// Extracts the self-reported elapsed seconds from captured stdout.
///
/// The program's contract with the harness is a line containing
/// `Total time = <number> seconds`; the first such line wins. A missing
/// line, a non-numeric duration, or a negative or non-finite duration all
/// violate the contract and surface as a parse error so the point's result
/// is never silently recorded as zero.
pub fn total_time_seconds(stdout: &str) -> Result<f64, SweepError> {
    for line in stdout.lines() {
        let Some(start) = line.find(PREFIX) else {
            continue;
        };
        let rest = &line[start + PREFIX.len()..];
        let Some(end) = rest.find(SUFFIX) else {
            continue;
        };
        let raw = rest[..end].trim();
        let seconds: f64 = raw.parse().map_err(|_| {
            SweepError::Parse(
                ErrorInfo::new(
                    "timing-value-invalid",
                    "timing line carries a non-numeric duration",
                )
                .with_context("line", line.trim().to_string()),
            )
        })?;
        if !seconds.is_finite() || seconds < 0.0 {
            return Err(SweepError::Parse(
                ErrorInfo::new(
                    "timing-value-range",
                    "reported duration must be finite and non-negative",
                )
                .with_context("seconds", raw.to_string()),
            ));
        }
        return Ok(seconds);
    }
    Err(SweepError::Parse(
        ErrorInfo::new(
            "timing-line-missing",
            "no `Total time = <number> seconds` line in program output",
        )
        .with_hint("the simulation binary and the harness disagree on the output contract"),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_the_timing_line_among_noise() {
        let stdout = "Number of ticks: 1000\nTotal time = 3.21 seconds\ndone\n";
        assert_eq!(total_time_seconds(stdout).expect("parse"), 3.21);
    }

    #[test]
    fn first_matching_line_wins() {
        let stdout = "Total time = 1.5 seconds\nTotal time = 9.9 seconds\n";
        assert_eq!(total_time_seconds(stdout).expect("parse"), 1.5);
    }

    #[test]
    fn missing_line_is_a_contract_violation() {
        let err = total_time_seconds("simulation finished\n").unwrap_err();
        assert_eq!(err.info().code, "timing-line-missing");
    }

    #[test]
    fn non_numeric_duration_is_rejected() {
        let err = total_time_seconds("Total time = soon seconds\n").unwrap_err();
        assert_eq!(err.info().code, "timing-value-invalid");
    }

    #[test]
    fn negative_duration_is_rejected() {
        let err = total_time_seconds("Total time = -2.0 seconds\n").unwrap_err();
        assert_eq!(err.info().code, "timing-value-range");
    }

    #[test]
    fn integral_durations_parse() {
        assert_eq!(
            total_time_seconds("Total time = 14 seconds\n").expect("parse"),
            14.0
        );
    }
}
