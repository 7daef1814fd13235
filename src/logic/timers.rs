use crate::models::YieldPrediction;
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

/// Periodic telemetry tick registration.
///
/// The timer task only signals; the owner applies the tick to its store.
/// Dropping the timer aborts the task.
pub struct TelemetryTimer {
    period: Duration,
    ticks: mpsc::Receiver<()>,
    handle: JoinHandle<()>,
}

impl TelemetryTimer {
    /// Must be called from within a tokio runtime.
    pub fn start(period: Duration) -> Self {
        let (tx, ticks) = mpsc::channel(4);
        let handle = tokio::spawn(async move {
            let mut interval = time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                interval.tick().await;
                if tx.send(()).await.is_err() {
                    break;
                }
            }
        });

        tracing::debug!(period_secs = period.as_secs_f64(), "Telemetry timer started");
        Self {
            period,
            ticks,
            handle,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Number of ticks delivered since the last call.
    pub fn drain(&mut self) -> usize {
        let mut count = 0;
        while self.ticks.try_recv().is_ok() {
            count += 1;
        }
        count
    }

    pub fn cancel(&self) {
        self.handle.abort();
    }
}

impl Drop for TelemetryTimer {
    fn drop(&mut self) {
        self.handle.abort();
        tracing::debug!("Telemetry timer stopped");
    }
}

/// A prediction held back until its reveal delay elapses.
///
/// Dropping it before then cancels the reveal.
pub struct PendingPrediction {
    result: oneshot::Receiver<YieldPrediction>,
    handle: JoinHandle<()>,
}

impl PendingPrediction {
    /// Must be called from within a tokio runtime.
    pub fn spawn(prediction: YieldPrediction, delay: Duration) -> Self {
        let (tx, result) = oneshot::channel();
        let handle = tokio::spawn(async move {
            time::sleep(delay).await;
            let _ = tx.send(prediction);
        });
        Self { result, handle }
    }

    /// The prediction, once its delay has elapsed.
    pub fn try_take(&mut self) -> Option<YieldPrediction> {
        self.result.try_recv().ok()
    }

    pub fn cancel(&self) {
        self.handle.abort();
    }
}

impl Drop for PendingPrediction {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PredictionFactors;

    fn prediction() -> YieldPrediction {
        YieldPrediction {
            crop: "Corn".into(),
            expected_yield: 8.4,
            confidence: 90,
            factors: PredictionFactors {
                weather: 90,
                soil: 91,
                practices: 102,
            },
        }
    }

    #[tokio::test]
    async fn timer_delivers_ticks() {
        let mut timer = TelemetryTimer::start(Duration::from_millis(10));
        assert_eq!(timer.period(), Duration::from_millis(10));

        let ticks = time::timeout(Duration::from_secs(2), async {
            loop {
                let n = timer.drain();
                if n > 0 {
                    break n;
                }
                time::sleep(Duration::from_millis(5)).await;
            }
        })
        .await
        .unwrap();
        assert!(ticks >= 1);
    }

    #[tokio::test]
    async fn cancelled_timer_stops() {
        let mut timer = TelemetryTimer::start(Duration::from_millis(5));
        timer.cancel();
        time::sleep(Duration::from_millis(20)).await;

        timer.drain();
        time::sleep(Duration::from_millis(20)).await;
        assert_eq!(timer.drain(), 0);
    }

    #[tokio::test]
    async fn pending_prediction_reveals_after_delay() {
        let mut pending = PendingPrediction::spawn(prediction(), Duration::from_millis(20));
        assert!(pending.try_take().is_none());

        let revealed = time::timeout(Duration::from_secs(2), async {
            loop {
                if let Some(p) = pending.try_take() {
                    break p;
                }
                time::sleep(Duration::from_millis(5)).await;
            }
        })
        .await
        .unwrap();
        assert_eq!(revealed, prediction());
    }

    #[tokio::test]
    async fn cancelled_prediction_never_arrives() {
        let mut pending = PendingPrediction::spawn(prediction(), Duration::from_millis(10));
        pending.cancel();
        time::sleep(Duration::from_millis(40)).await;
        assert!(pending.try_take().is_none());
    }
}
