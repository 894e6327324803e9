//! UX pacing: responses are revealed no earlier than a minimum delay, and no
//! earlier than the work that produces them finishes.

use std::future::Future;
use std::time::Duration;

pub const MIN_THINKING: Duration = Duration::from_millis(1500);
pub const EXIT_THINKING: Duration = Duration::from_millis(1000);
pub const MAX_TYPING_DELAY: Duration = Duration::from_millis(1500);

/// Runs `work` alongside a `min_delay` timer and resolves when both are done.
pub async fn reveal_after<F: Future>(min_delay: Duration, work: F) -> F::Output {
    let (output, ()) = tokio::join!(work, tokio::time::sleep(min_delay));
    output
}

/// Simulated typing time for shell output: 2ms per char, capped.
pub fn typing_delay(response_chars: usize, cap: Duration) -> Duration {
    let per_char = Duration::from_millis(2);
    per_char
        .checked_mul(u32::try_from(response_chars).unwrap_or(u32::MAX))
        .map_or(cap, |delay| delay.min(cap))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;
    use tokio_test::{assert_pending, assert_ready};

    #[test]
    fn test_typing_delay_is_capped() {
        assert_eq!(typing_delay(0, MAX_TYPING_DELAY), Duration::ZERO);
        assert_eq!(typing_delay(100, MAX_TYPING_DELAY), Duration::from_millis(200));
        assert_eq!(typing_delay(10_000, MAX_TYPING_DELAY), MAX_TYPING_DELAY);
        assert_eq!(typing_delay(usize::MAX, MAX_TYPING_DELAY), MAX_TYPING_DELAY);
    }

    #[tokio::test(start_paused = true)]
    async fn test_fast_work_waits_for_minimum_delay() {
        let start = Instant::now();
        let value = reveal_after(MIN_THINKING, async { 7 }).await;

        assert_eq!(value, 7);
        let elapsed = start.elapsed();
        assert!(elapsed >= MIN_THINKING);
        assert!(elapsed < MIN_THINKING + Duration::from_millis(5));
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_work_is_not_cut_short() {
        let start = Instant::now();
        let work = async {
            tokio::time::sleep(Duration::from_millis(3000)).await;
            "answer"
        };

        let value = reveal_after(MIN_THINKING, work).await;

        assert_eq!(value, "answer");
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_millis(3000));
        assert!(elapsed < Duration::from_millis(3005));
    }

    #[tokio::test(start_paused = true)]
    async fn test_not_revealed_between_delay_and_completion() {
        let mut task = tokio_test::task::spawn(reveal_after(MIN_THINKING, async {
            tokio::time::sleep(Duration::from_millis(3000)).await;
        }));

        assert_pending!(task.poll());
        tokio::time::advance(Duration::from_millis(1500)).await;
        assert_pending!(task.poll());
        tokio::time::advance(Duration::from_millis(1499)).await;
        assert_pending!(task.poll());
        tokio::time::advance(Duration::from_millis(1)).await;
        assert_ready!(task.poll());
    }
}
