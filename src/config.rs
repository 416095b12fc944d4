pub const CANVAS_WIDTH: u32 = 640;
pub const CANVAS_HEIGHT: u32 = 480;

// Azul aciano
pub const BACKGROUND_COLOR: u32 = 0x6495ed;

pub const ASSET_DIR: &str = "assets";

// Jugador
pub const PLAYER_START_SIZE: f32 = 50.0;
pub const PLAYER_STEP: f32 = 10.0;
pub const PLAYER_GROWTH: f32 = 10.0;
// El juego termina cuando el jugador es más ancho que esto
pub const GAME_OVER_WIDTH: f32 = 200.0;
pub const GAME_OVER_SIZE: f32 = 500.0;

// Comida
pub const FOOD_START_SIZE: f32 = 40.0;
pub const FOOD_START_Y: f32 = 50.0;
pub const FOOD_MIN_SIZE: u32 = 20;
pub const FOOD_MAX_SIZE: u32 = 80;
pub const FOOD_MARGIN_LEFT: f32 = 60.0;
pub const FOOD_MARGIN_RIGHT: f32 = 100.0;
pub const FOOD_MARGIN_Y: f32 = 40.0;

// Paseo aleatorio: se cambia cuando una tirada 1..=500 supera 495
pub const CHANGE_ROLL: u32 = 500;
pub const CHANGE_THRESHOLD: u32 = 495;
pub const INITIAL_SPEED_MAX: u32 = 10;
pub const REROLL_SPEED_MAX: u32 = 5;

#[derive(Debug, Clone)]
pub struct GameConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
    pub background_color: u32,
}

impl GameConfig {
    pub fn background_rgba(&self) -> [u8; 4] {
        let c = self.background_color;
        [(c >> 16) as u8, (c >> 8) as u8, c as u8, 255]
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
            title: "Tenochan".to_owned(),
            background_color: BACKGROUND_COLOR,
        }
    }
}
