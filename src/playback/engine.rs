use std::time::Instant;

use crate::foundation::error::{KineticError, KineticResult};
use crate::playback::clock::Clock;
use crate::playback::scheduler::{FrameScheduler, FrameTicket};
use crate::playback::telemetry::{PerformanceMetrics, Telemetry};
use crate::project::eval;
use crate::project::model::Project;

/// A playback command as marshalled from a UI thread.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "kebab-case")]
pub enum Command {
    Play,
    Pause,
    Stop,
    Seek(f64),
    SetPlaybackRate(f64),
    SetLoop(bool),
}

/// Observable playback transition. `time` is the timeline position in seconds when it happened.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum PlaybackEvent {
    ProjectLoaded { id: String },
    Play { time: f64 },
    Pause { time: f64 },
    Stop,
    Seek { time: f64 },
    RateChanged { rate: f64 },
    /// Playback wrapped from the end back to 0.
    Looped,
    /// Playback reached the end without looping and paused.
    Ended { time: f64 },
}

/// Owns a project and drives its timeline from a [`Clock`] through a [`FrameScheduler`].
///
/// All mutation goes through `&mut self`: one command or one frame callback at a time.
pub struct Engine<C: Clock, S: FrameScheduler> {
    clock: C,
    scheduler: S,
    project: Option<Project>,
    /// Clock time at which the timeline would have been at 0 given the current rate.
    wall_start: f64,
    generation: u64,
    telemetry: Telemetry,
    events: Vec<PlaybackEvent>,
}

impl<C: Clock, S: FrameScheduler> Engine<C, S> {
    pub fn new(clock: C, scheduler: S) -> Self {
        Self {
            clock,
            scheduler,
            project: None,
            wall_start: 0.0,
            generation: 0,
            telemetry: Telemetry::new(),
            events: Vec::new(),
        }
    }

    /// Replace the current project. Playback is paused and the new project is resolved at its
    /// stored `currentTime`.
    #[tracing::instrument(skip_all, fields(project = %project.id))]
    pub fn load_project(&mut self, mut project: Project) -> KineticResult<()> {
        project.validate()?;
        for msg in project.diagnostics() {
            tracing::warn!("{msg}");
        }

        self.pause();
        self.telemetry = Telemetry::new();
        let tl = &mut project.timeline;
        tl.is_playing = false;
        tl.current_time = if tl.current_time.is_finite() {
            tl.current_time.clamp(0.0, project.duration)
        } else {
            0.0
        };

        let id = project.id.clone();
        self.project = Some(project);
        self.update();
        tracing::info!(
            layers = self.project.as_ref().map_or(0, |p| p.layers.len()),
            "project loaded"
        );
        self.events.push(PlaybackEvent::ProjectLoaded { id });
        Ok(())
    }

    /// Drop the project, cancelling any pending frame.
    pub fn unload(&mut self) -> Option<Project> {
        self.pause();
        self.project.take()
    }

    pub fn play(&mut self) {
        let now = self.clock.now_ms();
        let Some(project) = self.project.as_mut() else {
            tracing::debug!("play ignored: no project loaded");
            return;
        };
        let tl = &mut project.timeline;
        if tl.is_playing {
            return;
        }
        if tl.current_time >= project.duration && !tl.loop_ {
            tl.current_time = 0.0;
        }
        tl.is_playing = true;
        self.wall_start = now - tl.current_time * 1000.0 / tl.playback_rate;
        let time = tl.current_time;
        self.scheduler.request_frame(FrameTicket::new(self.generation));
        self.events.push(PlaybackEvent::Play { time });
    }

    /// Stop advancing and cancel any pending frame. Safe to call repeatedly.
    pub fn pause(&mut self) {
        self.scheduler.cancel_frame(FrameTicket::new(self.generation));
        self.generation += 1;
        self.telemetry.pause();
        if let Some(project) = self.project.as_mut()
            && project.timeline.is_playing
        {
            project.timeline.is_playing = false;
            let time = project.timeline.current_time;
            self.events.push(PlaybackEvent::Pause { time });
        }
    }

    /// Pause and rewind to 0.
    pub fn stop(&mut self) {
        self.pause();
        let Some(project) = self.project.as_mut() else {
            return;
        };
        project.timeline.current_time = 0.0;
        self.update();
        self.events.push(PlaybackEvent::Stop);
    }

    /// Move the playhead to `time` seconds, clamped into `[0, duration]`.
    pub fn seek(&mut self, time: f64) -> KineticResult<()> {
        if !time.is_finite() {
            return Err(KineticError::playback(format!(
                "seek time must be finite (got {time})"
            )));
        }
        let now = self.clock.now_ms();
        let Some(project) = self.project.as_mut() else {
            tracing::debug!("seek ignored: no project loaded");
            return Ok(());
        };
        let tl = &mut project.timeline;
        tl.current_time = time.clamp(0.0, project.duration);
        self.wall_start = now - tl.current_time * 1000.0 / tl.playback_rate;
        let (clamped, playing) = (tl.current_time, tl.is_playing);
        if !playing {
            self.update();
        }
        self.events.push(PlaybackEvent::Seek { time: clamped });
        Ok(())
    }

    /// Change speed without moving the playhead.
    pub fn set_playback_rate(&mut self, rate: f64) -> KineticResult<()> {
        if !(rate.is_finite() && rate > 0.0) {
            return Err(KineticError::playback(format!(
                "playback rate must be a finite number > 0 (got {rate})"
            )));
        }
        let now = self.clock.now_ms();
        let Some(project) = self.project.as_mut() else {
            tracing::debug!("rate change ignored: no project loaded");
            return Ok(());
        };
        let tl = &mut project.timeline;
        tl.playback_rate = rate;
        self.wall_start = now - tl.current_time * 1000.0 / rate;
        self.events.push(PlaybackEvent::RateChanged { rate });
        Ok(())
    }

    pub fn set_loop(&mut self, on: bool) {
        if let Some(project) = self.project.as_mut() {
            project.timeline.loop_ = on;
        }
    }

    /// Apply a queued command.
    pub fn dispatch(&mut self, cmd: Command) -> KineticResult<()> {
        tracing::trace!(?cmd, "dispatch");
        match cmd {
            Command::Play => self.play(),
            Command::Pause => self.pause(),
            Command::Stop => self.stop(),
            Command::Seek(t) => self.seek(t)?,
            Command::SetPlaybackRate(r) => self.set_playback_rate(r)?,
            Command::SetLoop(on) => self.set_loop(on),
        }
        Ok(())
    }

    /// Frame callback delivered by the scheduler.
    pub fn on_frame(&mut self, ticket: FrameTicket) {
        if ticket.generation() != self.generation {
            tracing::trace!(
                ticket = ticket.generation(),
                current = self.generation,
                "stale frame ticket"
            );
            return;
        }
        let now = self.clock.now_ms();
        let Some(project) = self.project.as_mut() else {
            return;
        };
        if !project.timeline.is_playing {
            return;
        }
        self.telemetry.record_tick(now);

        let tl = &mut project.timeline;
        let elapsed = ((now - self.wall_start) * tl.playback_rate / 1000.0).max(0.0);
        if elapsed >= project.duration {
            if tl.loop_ {
                tl.current_time = 0.0;
                self.wall_start = now;
                self.events.push(PlaybackEvent::Looped);
            } else {
                tl.current_time = project.duration;
                let end = tl.current_time;
                self.update();
                self.pause();
                self.events.push(PlaybackEvent::Ended { time: end });
                return;
            }
        } else {
            tl.current_time = elapsed;
        }

        self.update();
        self.scheduler.request_frame(FrameTicket::new(self.generation));
    }

    /// Resolve every layer at the current timeline position.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn update(&mut self) {
        let Some(project) = self.project.as_mut() else {
            return;
        };
        let started = Instant::now();
        let time = project.timeline.current_time;
        let stats = eval::evaluate(project, time);
        let render_ms = started.elapsed().as_secs_f64() * 1000.0;
        self.telemetry.record_pass(
            render_ms,
            project.layers.len(),
            project.effect_count(),
            stats.ignored_writes,
        );
    }

    pub fn project(&self) -> Option<&Project> {
        self.project.as_ref()
    }

    /// Playhead in seconds, or 0 without a project.
    pub fn current_time(&self) -> f64 {
        self.project
            .as_ref()
            .map_or(0.0, |p| p.timeline.current_time)
    }

    pub fn is_playing(&self) -> bool {
        self.project
            .as_ref()
            .is_some_and(|p| p.timeline.is_playing)
    }

    pub fn performance_metrics(&self) -> PerformanceMetrics {
        self.telemetry.metrics()
    }

    /// Events recorded since the last drain, oldest first.
    pub fn drain_events(&mut self) -> Vec<PlaybackEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }
}

#[cfg(test)]
#[path = "../../tests/unit/playback/engine.rs"]
mod tests;
