/// Default tuning for the browser Pong playfield.
///
/// All speeds are distances per displayed frame; the game is paced by the
/// host's display refresh, not by wall-clock time.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Playfield
    pub const PLAYFIELD_WIDTH: f32 = 700.0;
    pub const PLAYFIELD_HEIGHT: f32 = 500.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 50.0;
    pub const PADDLE_REACH: f32 = 25.0; // Collision zone depth from each side edge
    pub const PADDLE_INSET: f32 = 10.0; // Left edge of the left paddle

    // Ball
    pub const BALL_RADIUS: f32 = 5.0;
    pub const BALL_SPEED_MAX: f32 = 5.0;
    pub const BALL_HIT_INCREMENT: f32 = 1.0;
    pub const DEFLECTION_FACTOR: f32 = 0.3;
    pub const RESET_DAMPING: f32 = 1.5;

    // Score
    pub const WIN_SCORE: u8 = 1;

    // Standard profile (desktop)
    pub const STANDARD_BALL_SPEED: f32 = 2.0;
    pub const STANDARD_COMPUTER_SPEED: f32 = 3.0;
    pub const STANDARD_OPPONENT_BOOST: f32 = 3.0;
    pub const STANDARD_KEY_STEP: f32 = 6.0;

    // Reduced profile (small screens)
    pub const REDUCED_BALL_SPEED: f32 = 1.0;
    pub const REDUCED_COMPUTER_SPEED: f32 = 4.0;
    pub const REDUCED_OPPONENT_BOOST: f32 = 2.0;
    pub const REDUCED_KEY_STEP: f32 = 4.0;

    /// Screens at most this wide get the reduced profile
    pub const SMALL_SCREEN_MAX_WIDTH: u32 = 700;
}
