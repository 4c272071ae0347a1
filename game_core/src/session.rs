use glam::Vec2;
use hecs::World;

use crate::systems::{
    advance_ball, apply_held_keys, apply_pointer_intents, check_winner, computer_ai,
    resolve_boundaries,
};
use crate::{
    create_ball, create_paddle, Ball, Config, ConfigError, Events, FrameSnapshot, GameMode,
    InputMode, Key, KeyBindings, Opponent, OpponentSpeed, Paddle, PaddleIntent, RallyState, Score,
    SessionAction, SessionFsm, SessionPhase, Side,
};

/// One game of Pong: entities, score, rally flags and lifecycle phase.
///
/// The frame step is the only mutator of ball and score state. Input
/// methods only touch key-held state, the pointer target and `has_moved`.
pub struct Session {
    world: World,
    config: Config,
    mode: GameMode,
    fsm: SessionFsm,
    score: Score,
    rally: RallyState,
    opponent: Option<OpponentSpeed>,
    keys: KeyBindings,
    events: Events,
    winner: Option<Side>,
}

impl Session {
    pub fn new(config: Config, mode: GameMode) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, mode))
    }

    fn build(config: Config, mode: GameMode) -> Self {
        let mut session = Self {
            world: World::new(),
            config,
            mode,
            fsm: SessionFsm::new(),
            score: Score::new(),
            rally: RallyState::default(),
            opponent: None,
            keys: KeyBindings::new(),
            events: Events::new(),
            winner: None,
        };
        session.reset(mode);
        session
    }

    /// Reinitialize everything for a fresh game in `mode`
    pub fn reset(&mut self, mode: GameMode) {
        self.mode = mode;
        self.fsm.transition(SessionAction::Reset);
        self.score = Score::new();
        self.rally = RallyState::default();
        self.events.clear();
        self.winner = None;
        self.keys = KeyBindings::for_mode(mode);
        self.opponent = match mode.opponent {
            Opponent::Computer => Some(OpponentSpeed::new(self.config.computer_speed)),
            Opponent::Human => None,
        };

        self.world.clear();
        let spawn_y = self.config.paddle_spawn_y();
        create_paddle(&mut self.world, Side::Left, spawn_y);
        create_paddle(&mut self.world, Side::Right, spawn_y);

        // The opening serve is a regular re-serve of a ball heading for the
        // player, so the first rally starts toward the opponent, damped.
        let speed = self.config.ball_speed_initial;
        let mut ball = Ball::new(
            self.config.center(),
            Vec2::new(speed, -speed),
            self.config.ball_radius,
        );
        ball.reset(self.config.center(), self.config.reset_damping);
        create_ball(&mut self.world, ball.pos, ball.vel, ball.radius);

        log::info!("session reset: mode={:?}", mode);
    }

    pub fn start(&mut self) -> bool {
        let result = self.fsm.transition(SessionAction::Start);
        if result.success {
            log::info!("session started");
        }
        result.success
    }

    pub fn pause(&mut self) -> bool {
        let result = self.fsm.transition(SessionAction::Pause);
        if result.success {
            self.keys.release_all();
            log::info!("session paused");
        }
        result.success
    }

    pub fn resume(&mut self) -> bool {
        let result = self.fsm.transition(SessionAction::Resume);
        if result.success {
            log::info!("session resumed");
        }
        result.success
    }

    /// Flip between running and paused; returns the resulting phase
    pub fn toggle_pause(&mut self) -> SessionPhase {
        match self.fsm.phase() {
            SessionPhase::Running => {
                self.pause();
            }
            SessionPhase::Paused => {
                self.resume();
            }
            SessionPhase::NotStarted | SessionPhase::Over => {}
        }
        self.fsm.phase()
    }

    /// Advance one frame. Does nothing unless the session is running.
    pub fn step(&mut self) -> &Events {
        if !self.fsm.is_running() {
            return &self.events;
        }
        self.events.clear();

        advance_ball(&mut self.world, &self.rally);
        resolve_boundaries(
            &mut self.world,
            &self.config,
            &mut self.rally,
            self.opponent.as_mut(),
            &mut self.score,
            &mut self.events,
        );

        apply_pointer_intents(&mut self.world, &self.config);
        apply_held_keys(&mut self.world, &self.config, &self.keys);
        if let Some(speed) = &self.opponent {
            computer_ai(&mut self.world, &self.config, &self.rally, speed);
        }

        if let Some(winner) = check_winner(&self.score, &self.config) {
            self.winner = Some(winner);
            self.fsm.transition(SessionAction::GameOver);
            log::info!(
                "game over: {:?} wins {}:{}",
                winner,
                self.score.left,
                self.score.right
            );
        }

        &self.events
    }

    /// Key pressed. Returns false for keys this mode ignores and once the
    /// game is over.
    pub fn key_down(&mut self, key: Key) -> bool {
        if self.fsm.is_over() {
            return false;
        }
        let bound = self.keys.set_held(key, true);
        if bound {
            self.rally.has_moved = true;
        }
        bound
    }

    pub fn key_up(&mut self, key: Key) -> bool {
        if self.fsm.is_over() {
            return false;
        }
        self.keys.set_held(key, false)
    }

    /// Pointer moved to `y` (playfield coordinates). Ignored outside pointer
    /// mode and once the game is over.
    pub fn pointer_moved(&mut self, y: f32) -> bool {
        if self.mode.input != InputMode::Pointer || self.fsm.is_over() {
            return false;
        }
        let intents = self.world.query_mut::<(&Paddle, &mut PaddleIntent)>();
        for (_entity, (paddle, intent)) in intents {
            if paddle.side == Side::Right {
                intent.target_y = Some(y);
            }
        }
        self.rally.has_moved = true;
        true
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world.query::<&Ball>().iter().next().map(|(_e, b)| *b)
    }

    pub fn ball_position(&self) -> Vec2 {
        self.ball().map(|b| b.pos).unwrap_or_else(|| self.config.center())
    }

    pub fn ball_radius(&self) -> f32 {
        self.config.ball_radius
    }

    pub fn paddle_y(&self, side: Side) -> f32 {
        self.world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, p)| p.side == side)
            .map(|(_e, p)| p.y)
            .unwrap_or_else(|| self.config.paddle_spawn_y())
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn phase(&self) -> SessionPhase {
        self.fsm.phase()
    }

    pub fn is_game_over(&self) -> bool {
        self.fsm.is_over()
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn events(&self) -> &Events {
        &self.events
    }

    pub fn rally(&self) -> RallyState {
        self.rally
    }

    /// Current computer paddle step, `None` when the opponent is human
    pub fn opponent_speed(&self) -> Option<f32> {
        self.opponent.map(|o| o.speed)
    }

    pub fn snapshot(&self) -> FrameSnapshot {
        let ball = self.ball_position();
        FrameSnapshot {
            ball_x: ball.x,
            ball_y: ball.y,
            ball_radius: self.ball_radius(),
            paddle_left_x: self.config.paddle_x(Side::Left),
            paddle_left_y: self.paddle_y(Side::Left),
            paddle_right_x: self.config.paddle_x(Side::Right),
            paddle_right_y: self.paddle_y(Side::Right),
            paddle_width: self.config.paddle_width,
            paddle_height: self.config.paddle_height,
            score_left: self.score.left,
            score_right: self.score.right,
            phase: self.phase(),
            game_over: self.is_game_over(),
            winner: self.winner,
        }
    }

    /// Overwrite the ball, for hosts restoring a position and for tests
    pub fn set_ball(&mut self, pos: Vec2, vel: Vec2) {
        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            ball.pos = pos;
            ball.vel = vel;
        }
    }

    /// Place a paddle directly (clamped)
    pub fn set_paddle_y(&mut self, side: Side, y: f32) {
        let y = self.config.clamp_paddle_y(y);
        for (_entity, paddle) in self.world.query_mut::<&mut Paddle>() {
            if paddle.side == side {
                paddle.y = y;
            }
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::build(Config::default(), GameMode::default())
    }
}
