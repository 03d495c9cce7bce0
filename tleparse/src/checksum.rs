//! Modulo-10 line checksum
//!
//! Digits count their value, '-' counts one, everything else counts zero.

use crate::{FormatError, LINE_LENGTH};

/// Checksum over the first 68 columns of `line`
pub fn compute(line: &str) -> u8 {
    let sum: u32 = line
        .chars()
        .take(LINE_LENGTH - 1)
        .map(|c| match c {
            '-' => 1,
            c => c.to_digit(10).unwrap_or(0),
        })
        .sum();
    (sum % 10) as u8
}

/// Compare column 69 of `line` against the computed checksum.
///
/// `line_number` is the TLE line number (1 or 2) reported on mismatch.
pub fn verify(line: &str, line_number: u8) -> Result<(), FormatError> {
    let expected = line
        .chars()
        .nth(LINE_LENGTH - 1)
        .and_then(|c| c.to_digit(10));
    match expected {
        Some(digit) if digit == u32::from(compute(line)) => Ok(()),
        _ => Err(FormatError::ChecksumMismatch(line_number)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ISS_LINE1: &str =
        "1 25544U 98067A   08264.51782528 -.00002182  00000-0 -11606-4 0  2927";
    const ISS_LINE2: &str =
        "2 25544  51.6416 247.4627 0006703 130.5360 325.0288 15.72125391563537";

    #[test]
    fn known_lines() {
        assert_eq!(compute(ISS_LINE1), 7);
        assert_eq!(compute(ISS_LINE2), 7);
        assert_eq!(verify(ISS_LINE1, 1), Ok(()));
        assert_eq!(verify(ISS_LINE2, 2), Ok(()));
    }

    #[test]
    fn minus_counts_one() {
        assert_eq!(compute("-"), 1);
        assert_eq!(compute("--9"), 1);
        assert_eq!(compute("+. AZ"), 0);
    }

    #[test]
    fn ignores_checksum_column() {
        let mut line = ISS_LINE1.to_owned();
        line.replace_range(68..69, "0");
        assert_eq!(compute(&line), 7);
    }

    #[test]
    fn detects_single_digit_corruption() {
        // Every digit in columns 1-68 bumped by one, mod 10, must be caught
        for (idx, c) in ISS_LINE2.char_indices().take(LINE_LENGTH - 1) {
            let Some(d) = c.to_digit(10) else {
                continue;
            };
            let mut line = ISS_LINE2.to_owned();
            let replacement = char::from_digit((d + 1) % 10, 10).unwrap();
            line.replace_range(idx..idx + 1, &replacement.to_string());
            assert_eq!(
                verify(&line, 2),
                Err(FormatError::ChecksumMismatch(2)),
                "corruption at column {} not detected",
                idx + 1
            );
        }
    }

    #[test]
    fn non_digit_checksum_column() {
        let line = format!("{}X", &ISS_LINE1[..68]);
        assert_eq!(verify(&line, 1), Err(FormatError::ChecksumMismatch(1)));
        assert_eq!(verify(&ISS_LINE1[..68], 1), Err(FormatError::ChecksumMismatch(1)));
    }
}
