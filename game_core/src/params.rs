/// Game tuning parameters for Pong
///
/// All units are canvas pixels; speeds are pixels per tick (one tick per
/// rendered frame, no delta time).
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Ball
    pub const BALL_RADIUS: f32 = 5.0;
    pub const BALL_SPEED: f32 = 5.0; // per-axis magnitude, only signs flip

    // Paddles
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PLAYER_PADDLE_HEIGHT: f32 = 80.0;
    pub const CPU_PADDLE_HEIGHT: f32 = 60.0;
    pub const PADDLE_SPEED: f32 = 5.0;

    // Layout
    pub const PLAYER_X: f32 = 10.0;
    pub const CPU_EDGE_MARGIN: f32 = 20.0; // cpu x = arena width - margin

    // Both paddles spawn at the same vertical offset from centre, keyed to
    // the player paddle's half height.
    pub const PADDLE_SPAWN_OFFSET: f32 = 40.0;
}
