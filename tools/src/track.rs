//! Evaluation instants of a ground track

use std::time::Duration;
use tleparse::UtcTimestamp;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum TrackError {
    #[error("Track step {0:?} is out of range")]
    Step(Duration),
    #[error("Track instant {index} is out of range")]
    Instant { index: usize },
}

/// Instants `start + k * step` for `k` in `0..count`, stopping at the first
/// one that does not fit in a timestamp
pub fn instants(
    start: UtcTimestamp,
    step: Duration,
    count: usize,
) -> Result<impl Iterator<Item = Result<UtcTimestamp, TrackError>>, TrackError> {
    let step = chrono::Duration::from_std(step).map_err(|_| TrackError::Step(step))?;
    Ok((0..count).map(move |index| {
        i32::try_from(index)
            .ok()
            .and_then(|k| step.checked_mul(k))
            .and_then(|offset| start.checked_add_signed(offset))
            .ok_or(TrackError::Instant { index })
    }))
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn evenly_spaced() {
        let start = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let at: Vec<_> = instants(start, Duration::from_secs(90), 3)
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(
            at,
            vec![
                start,
                Utc.with_ymd_and_hms(2024, 3, 1, 12, 1, 30).unwrap(),
                Utc.with_ymd_and_hms(2024, 3, 1, 12, 3, 0).unwrap(),
            ]
        );
    }

    #[test]
    fn zero_count_is_empty() {
        let start = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        assert_eq!(instants(start, Duration::from_secs(1), 0).unwrap().count(), 0);
    }

    #[test]
    fn overflow_is_an_error() {
        let start = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let step = Duration::from_secs(100 * 365 * 86_400);
        let mut at = instants(start, step, 10_000).unwrap();
        assert_eq!(at.next(), Some(Ok(start)));
        assert_eq!(at.last(), Some(Err(TrackError::Instant { index: 9_999 })));
    }

    #[test]
    fn oversized_step_is_an_error() {
        let start = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let step = Duration::from_secs(u64::MAX);
        assert_eq!(instants(start, step, 2).err(), Some(TrackError::Step(step)));
    }
}
