use crate::foundation::alloc_track;

const FPS_WINDOW_MS: f64 = 1000.0;

/// Snapshot of playback performance. Recomputed every tick and never persisted.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceMetrics {
    /// Frames per second over the last full one-second window.
    pub fps: f64,
    /// Wall milliseconds between the last two ticks.
    pub frame_time: f64,
    /// Milliseconds spent in the last update pass.
    pub render_time: f64,
    /// Live heap bytes; 0 when allocation tracking is not compiled in.
    pub memory_usage: u64,
    pub layer_count: usize,
    pub effect_count: usize,
    /// Property writes dropped in the last update pass.
    pub ignored_writes: usize,
}

/// Rolling tick and pass statistics behind [`PerformanceMetrics`].
#[derive(Debug, Default)]
pub struct Telemetry {
    metrics: PerformanceMetrics,
    window_start: Option<f64>,
    window_frames: u32,
    last_tick: Option<f64>,
}

impl Telemetry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a playback tick at clock time `now_ms`.
    pub fn record_tick(&mut self, now_ms: f64) {
        if let Some(last) = self.last_tick {
            self.metrics.frame_time = now_ms - last;
        }
        self.last_tick = Some(now_ms);

        let Some(start) = self.window_start else {
            self.window_start = Some(now_ms);
            return;
        };
        self.window_frames += 1;
        let elapsed = now_ms - start;
        if elapsed >= FPS_WINDOW_MS {
            self.metrics.fps = f64::from(self.window_frames) * 1000.0 / elapsed;
            self.window_frames = 0;
            self.window_start = Some(now_ms);
            if alloc_track::AVAILABLE {
                self.metrics.memory_usage = alloc_track::live_heap_bytes();
            }
        }
    }

    /// Record the cost and counts of one update pass.
    pub fn record_pass(
        &mut self,
        render_ms: f64,
        layer_count: usize,
        effect_count: usize,
        ignored_writes: usize,
    ) {
        self.metrics.render_time = render_ms;
        self.metrics.layer_count = layer_count;
        self.metrics.effect_count = effect_count;
        self.metrics.ignored_writes = ignored_writes;
    }

    /// Forget tick history so a resumed run does not report the paused gap as one frame.
    pub fn pause(&mut self) {
        self.window_start = None;
        self.window_frames = 0;
        self.last_tick = None;
    }

    pub fn metrics(&self) -> PerformanceMetrics {
        self.metrics
    }
}

#[cfg(test)]
#[path = "../../tests/unit/playback/telemetry.rs"]
mod tests;
