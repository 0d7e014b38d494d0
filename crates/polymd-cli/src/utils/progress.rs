use indicatif::{ProgressBar, ProgressDrawTarget, ProgressState, ProgressStyle};
use polymd::engine::progress::{Progress, ProgressCallback};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::warn;

const SPINNER_TICK_MS: u64 = 80;

/// Latest warmup status, kept so the phase summary can quote it.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
struct WarmupStatus {
    iteration: usize,
    min_distance: Option<f64>,
    force_cap: f64,
}

impl WarmupStatus {
    fn describe(&self) -> String {
        let distance = self
            .min_distance
            .map(|d| format!("{:.4}", d))
            .unwrap_or_else(|| "-".to_string());
        format!(
            "iteration {}, min distance {}, cap {:.3}",
            self.iteration, distance, self.force_cap
        )
    }
}

struct RunDisplay {
    bar: ProgressBar,
    phase: &'static str,
    warmup: Option<WarmupStatus>,
}

/// Renders a run on stderr: a spinner for building and warmup, a frame bar for production.
#[derive(Clone)]
pub struct CliProgressHandler {
    display: Arc<Mutex<RunDisplay>>,
}

impl CliProgressHandler {
    pub fn new() -> Self {
        let bar = ProgressBar::new(0).with_style(Self::spinner_style());
        bar.set_draw_target(ProgressDrawTarget::stderr());
        bar.finish_and_clear();

        Self {
            display: Arc::new(Mutex::new(RunDisplay {
                bar,
                phase: "",
                warmup: None,
            })),
        }
    }

    pub fn get_callback(&self) -> ProgressCallback<'static> {
        let display = self.display.clone();

        Box::new(move |progress: Progress| {
            let Ok(mut display) = display.lock() else {
                warn!("Progress display mutex was poisoned. Cannot update progress.");
                return;
            };
            display.handle(progress);
        })
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::with_template("{spinner:.green} {prefix:.bold} {msg}")
            .expect("Failed to create spinner style template")
    }

    fn frame_style() -> ProgressStyle {
        ProgressStyle::with_template(
            "{prefix:.bold} [{bar:40.cyan/blue}] {pos}/{len} frames ({frame_rate}, {eta})",
        )
        .expect("Failed to create frame bar style template")
        .with_key(
            "frame_rate",
            |state: &ProgressState, w: &mut dyn std::fmt::Write| {
                let _ = write!(w, "{:.1} frames/s", state.per_sec());
            },
        )
        .with_key(
            "eta",
            |state: &ProgressState, w: &mut dyn std::fmt::Write| {
                let _ = write!(w, "{:.1}s left", state.eta().as_secs_f64());
            },
        )
        .progress_chars("##-")
    }
}

impl RunDisplay {
    fn handle(&mut self, progress: Progress) {
        match progress {
            Progress::PhaseStart { name } => {
                self.phase = name;
                self.bar.reset();
                self.bar.set_length(0);
                self.bar.set_style(CliProgressHandler::spinner_style());
                self.bar.set_prefix(name);
                self.bar.set_message("");
                self.bar
                    .enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));
            }
            Progress::PhaseFinish => {
                self.bar.disable_steady_tick();
                let summary = match self.warmup.take() {
                    Some(status) => format!("✓ {} iterations", status.iteration),
                    None => "✓ Done".to_string(),
                };
                self.bar.finish_with_message(summary);
            }
            Progress::TaskStart { total_steps } => {
                self.bar.disable_steady_tick();
                self.bar.reset();
                self.bar.set_length(total_steps);
                self.bar.set_position(0);
                self.bar.set_style(CliProgressHandler::frame_style());
            }
            Progress::TaskIncrement => self.bar.inc(1),
            Progress::TaskFinish => {
                let length = self.bar.length().unwrap_or(0);
                if self.bar.position() < length {
                    self.bar.set_position(length);
                }
                self.bar.finish();
            }
            Progress::WarmupIteration {
                iteration,
                min_distance,
                force_cap,
            } => {
                let status = WarmupStatus {
                    iteration,
                    min_distance,
                    force_cap,
                };
                self.bar.set_message(status.describe());
                self.warmup = Some(status);
            }
            Progress::Message(msg) => {
                if self.bar.is_finished() {
                    self.bar.set_message(msg);
                } else {
                    self.bar.println(format!("  [{}] {}", self.phase, msg));
                }
            }
        }
    }
}

impl Default for CliProgressHandler {
    fn default() -> Self {
        Self::new()
    }
}
