use crate::core::display::{DisplayCommand, DisplayController};
use crate::core::face::ClockFace;
use crate::core::{ClockSource, Renderer};
use crate::utils::error::Result;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;

pub struct ClockEngine<C: ClockSource, R: Renderer> {
    face: ClockFace,
    clock: C,
    renderer: R,
    display: DisplayController,
}

impl<C: ClockSource, R: Renderer> ClockEngine<C, R> {
    pub fn new(face: ClockFace, clock: C, renderer: R, display: DisplayController) -> Self {
        Self {
            face,
            clock,
            renderer,
            display,
        }
    }

    pub fn display(&self) -> &DisplayController {
        &self.display
    }

    pub fn apply(&mut self, command: DisplayCommand) {
        self.display.apply(command);
    }

    pub fn render_once(&self) -> Result<String> {
        let reading = self.clock.now();
        let display = self.display.snapshot();
        let frame = self.face.frame(reading, &display);
        self.renderer.render(self.face.catalog(), &frame, &display)
    }

    /// Re-renders every `period` until `max_ticks` ticks have run or Ctrl-C.
    ///
    /// Commands arriving on `commands` are applied before the next tick and
    /// rendered straight away.
    /// `sink` only sees output that differs from the last output it was given.
    /// Returns the number of ticks run.
    pub async fn run_watch<F>(
        &mut self,
        period: Duration,
        max_ticks: Option<u64>,
        mut commands: mpsc::UnboundedReceiver<DisplayCommand>,
        mut sink: F,
    ) -> Result<u64>
    where
        F: FnMut(&str) -> Result<()>,
    {
        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let shutdown = tokio::signal::ctrl_c();
        tokio::pin!(shutdown);

        let mut last: Option<String> = None;
        let mut ticks = 0u64;
        let mut commands_open = true;

        tracing::info!("⏱️ Watching the clock every {:?}", period);

        loop {
            if max_ticks.is_some_and(|max| ticks >= max) {
                break;
            }

            tokio::select! {
                biased;

                _ = &mut shutdown => {
                    tracing::info!("🛑 Interrupted, stopping after {} ticks", ticks);
                    break;
                }
                command = commands.recv(), if commands_open => {
                    match command {
                        Some(command) => self.apply(command),
                        None => {
                            tracing::debug!("Display command channel closed");
                            commands_open = false;
                            continue;
                        }
                    }
                }
                _ = ticker.tick() => {
                    ticks += 1;
                }
            }

            let output = self.render_once()?;
            if last.as_deref() != Some(output.as_str()) {
                sink(&output)?;
                last = Some(output);
            } else {
                tracing::trace!("Tick {} unchanged", ticks);
            }
        }

        Ok(ticks)
    }
}
