//! Engine facade
//!
//! The single owner of all game state. The UI layer drives it through three
//! entry points ([`Engine::start`], [`Engine::stop`], [`Engine::set_pointer_y`])
//! and calls [`Engine::frame`] once per display refresh while the engine is
//! running. Frame scheduling itself is delegated to an injected
//! [`FrameScheduler`], so the tick logic runs the same under a browser
//! animation-frame source, a native vsync loop, or a manual test clock.

use thiserror::Error;

use crate::consts::PADDLE_HEIGHT;
use crate::render::{DrawCommand, render};
use crate::sim::rng::{PcgSource, RandomSource};
use crate::sim::state::GameState;
use crate::sim::tick::advance;
use crate::tuning::{Difficulty, DifficultyProfile};

/// The one user-facing error: an unknown difficulty label at `start`.
/// Everything past that boundary is a total function.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("unknown difficulty label: {0:?}")]
    InvalidConfiguration(String),
}

/// Opaque handle to an active frame-scheduling registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHandle(pub u64);

/// Host-side frame scheduling seam.
///
/// `register` begins per-frame callbacks into [`Engine::frame`]; `cancel`
/// stops them. Cancelling a stale or unknown handle must be a no-op, since
/// the engine cancels defensively on every start.
pub trait FrameScheduler {
    fn register(&mut self) -> FrameHandle;
    fn cancel(&mut self, handle: FrameHandle);
}

/// Headless scheduler for drivers that call [`Engine::frame`] from their own
/// loop. Hands out ids and tracks which registration, if any, is live.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    next_id: u64,
    active: Option<FrameHandle>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a registration is currently live.
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }
}

impl FrameScheduler for ManualScheduler {
    fn register(&mut self) -> FrameHandle {
        self.next_id += 1;
        let handle = FrameHandle(self.next_id);
        self.active = Some(handle);
        handle
    }

    fn cancel(&mut self, handle: FrameHandle) {
        if self.active == Some(handle) {
            self.active = None;
        }
    }
}

/// Loop lifecycle: whether ticks run, and the scheduler registration that
/// drives them.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunState {
    pub running: bool,
    pub registration: Option<FrameHandle>,
}

/// The simulation engine: state store, physics step, opponent policy and
/// render step behind one instance.
///
/// Single-threaded by design. Pointer input handlers and frame callbacks
/// run to completion between ticks; the latest pointer write wins.
pub struct Engine<R: RandomSource = PcgSource> {
    state: GameState,
    difficulty: Difficulty,
    profile: DifficultyProfile,
    rng: R,
    run: RunState,
    scheduler: Box<dyn FrameScheduler>,
}

impl Engine<PcgSource> {
    /// Engine with the production PCG random source.
    pub fn new(seed: u64, scheduler: Box<dyn FrameScheduler>) -> Self {
        Self::with_rng(PcgSource::seeded(seed), scheduler)
    }
}

impl<R: RandomSource> Engine<R> {
    /// Engine with an injected random source (deterministic tests, scripted
    /// serves).
    pub fn with_rng(mut rng: R, scheduler: Box<dyn FrameScheduler>) -> Self {
        let difficulty = Difficulty::default();
        let profile = difficulty.profile();
        let state = GameState::new(&profile, &mut rng);
        Self {
            state,
            difficulty,
            profile,
            rng,
            run: RunState::default(),
            scheduler,
        }
    }

    /// Start a game at the given difficulty label.
    ///
    /// Unknown labels fail with [`EngineError::InvalidConfiguration`] before
    /// any state is touched. Safe to call while already running: the stale
    /// frame registration is cancelled first, so two loops never coexist.
    pub fn start(&mut self, label: &str) -> Result<(), EngineError> {
        let difficulty = Difficulty::from_label(label)?;
        self.start_with(difficulty);
        Ok(())
    }

    /// Infallible start for callers already holding the enum.
    pub fn start_with(&mut self, difficulty: Difficulty) {
        if let Some(handle) = self.run.registration.take() {
            self.scheduler.cancel(handle);
        }

        self.difficulty = difficulty;
        self.profile = difficulty.profile();
        self.state.reset(&self.profile, &mut self.rng);

        self.run.running = true;
        self.run.registration = Some(self.scheduler.register());
        log::info!("game started at {} difficulty", difficulty.as_str());
    }

    /// Halt the loop. Idempotent; safe when not running. No further ticks
    /// execute once this returns.
    pub fn stop(&mut self) {
        if let Some(handle) = self.run.registration.take() {
            self.scheduler.cancel(handle);
        }
        if self.run.running {
            self.run.running = false;
            log::info!(
                "game stopped at {} - {}",
                self.state.player_score,
                self.state.opponent_score
            );
        }
    }

    /// Pointer-position feed for the human paddle.
    ///
    /// Centers the paddle on the pointer and clamps to the field; callers
    /// need not pre-clamp. Plain state write, visible to the next tick.
    pub fn set_pointer_y(&mut self, y: f32) {
        self.state.player.y = y - PADDLE_HEIGHT / 2.0;
        self.state.player.clamp_to_field();
    }

    /// One driver frame: physics step (if running) followed by the render
    /// step. While stopped, renders the current state without advancing, so
    /// a host can still repaint.
    pub fn frame(&mut self) -> Vec<DrawCommand> {
        if self.run.running {
            advance(&mut self.state, &self.profile, &mut self.rng);
        }
        render(&self.state)
    }

    pub fn is_running(&self) -> bool {
        self.run.running
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn profile(&self) -> DifficultyProfile {
        self.profile
    }
}
