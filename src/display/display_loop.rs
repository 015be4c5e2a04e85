use std::future::Future;
use std::io::Write;

use decimal_clock_core::errors::Result;
use decimal_clock_core::time::TimeSource;
use decimal_clock_core::DisplayConfig;
use tokio::time::{interval, sleep, MissedTickBehavior};
use tracing::{debug, info};

use crate::display::clock_face::{DecimalFace, StandardFace, TickingClock};
use crate::display::render::render_line;

/// Lifecycle of a display loop. A new loop is `Running`; it becomes
/// `Stopped` once `run_until` returns and never runs again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Stopped,
}

/// Counters collected while the loop ran.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoopReport {
    /// Lines written to the sink.
    pub cycles: u64,
    /// Cycles in which the standard reading changed.
    pub standard_changes: u64,
    /// Cycles in which the decimal reading changed.
    pub decimal_changes: u64,
}

/// Samples a time source and keeps one output line up to date.
pub struct DisplayLoop<S, W> {
    source: S,
    sink: W,
    config: DisplayConfig,
    standard: TickingClock<StandardFace>,
    decimal: TickingClock<DecimalFace>,
    state: LoopState,
    report: LoopReport,
}

impl<S, W> DisplayLoop<S, W>
where
    S: TimeSource,
    W: Write,
{
    pub fn new(source: S, sink: W, config: DisplayConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            source,
            sink,
            config,
            standard: TickingClock::new(StandardFace),
            decimal: TickingClock::new(DecimalFace),
            state: LoopState::Running,
            report: LoopReport::default(),
        })
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn report(&self) -> LoopReport {
        self.report
    }

    pub fn sink(&self) -> &W {
        &self.sink
    }

    pub fn into_sink(self) -> W {
        self.sink
    }

    /// Runs one tick: sample, update both clocks, rewrite the line.
    ///
    /// The line is written on every cycle, changed or not.
    pub async fn cycle(&mut self) -> Result<()> {
        let sample = self.source.sample();

        let (standard_changed, decimal_changed) = tokio::join!(
            self.standard.tick(sample),
            self.decimal.tick(sample)
        );

        if standard_changed {
            self.report.standard_changes += 1;
        }
        if decimal_changed {
            self.report.decimal_changes += 1;
        }

        let line = render_line(&self.standard, &self.decimal);
        self.sink.write_all(line.as_bytes())?;
        self.sink.flush()?;
        self.report.cycles += 1;

        Ok(())
    }

    /// Refreshes the line until `shutdown` resolves or the sink fails.
    ///
    /// Shutdown is only observed between cycles, so a started cycle always
    /// finishes. After stopping, waits for the grace period before
    /// returning.
    pub async fn run_until<F>(&mut self, shutdown: F) -> Result<LoopReport>
    where
        F: Future<Output = ()>,
    {
        if self.state == LoopState::Stopped {
            return Ok(self.report);
        }

        info!(
            refresh_ms = self.config.refresh_interval.as_millis() as u64,
            "display loop started"
        );

        tokio::pin!(shutdown);
        let mut ticker = interval(self.config.refresh_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        let outcome = loop {
            tokio::select! {
                biased;
                _ = &mut shutdown => break Ok(()),
                _ = ticker.tick() => {}
            }

            if let Err(err) = self.cycle().await {
                break Err(err);
            }
        };

        self.state = LoopState::Stopped;
        outcome?;

        info!(cycles = self.report.cycles, "display loop stopped");
        debug!(grace_ms = self.config.grace_period.as_millis() as u64, "waiting before exit");
        sleep(self.config.grace_period).await;

        Ok(self.report)
    }
}
