use crate::collision::is_colliding;
use crate::config::{
    GameConfig, FOOD_MARGIN_RIGHT, FOOD_MAX_SIZE, FOOD_MIN_SIZE, FOOD_START_SIZE, FOOD_START_Y,
    GAME_OVER_SIZE, GAME_OVER_WIDTH, PLAYER_GROWTH, PLAYER_START_SIZE, PLAYER_STEP,
};
use crate::input::Arrow;
use crate::render::{draw_sprite, fill};
use crate::sprites::{Sprite, TextureId};
use crate::textures::Textures;
use crate::wander::{clamp_to_bounds, wander, WanderState};
use rand::Rng;

/// Lo que pasó en un tick, para que el bucle principal reaccione (sonido, logs).
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum TickOutcome {
    Wandered,
    Fed { player_size: f32 },
    GameOver,
    Stopped,
}

/// Registro del callback por frame: una vez parado no vuelve a arrancar.
#[derive(Debug)]
pub struct Ticker {
    running: bool,
}

impl Ticker {
    pub fn started() -> Self {
        Self { running: true }
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}

pub struct Game<R: Rng> {
    width: f32,
    height: f32,
    background: [u8; 4],
    pub player: Sprite,
    pub food: Sprite,
    pub wander: WanderState,
    ticker: Ticker,
    rng: R,
}

impl<R: Rng> Game<R> {
    pub fn new(config: &GameConfig, mut rng: R) -> Self {
        let width = config.width as f32;
        let height = config.height as f32;

        let player = Sprite::new(
            width / 2.0,
            height / 2.0,
            PLAYER_START_SIZE,
            TextureId::TenochanRight,
        );
        let food = Sprite::new(
            width - FOOD_MARGIN_RIGHT,
            FOOD_START_Y,
            FOOD_START_SIZE,
            TextureId::FishLeft,
        );
        let wander = WanderState::new(&mut rng);

        Self {
            width,
            height,
            background: config.background_rgba(),
            player,
            food,
            wander,
            ticker: Ticker::started(),
            rng,
        }
    }

    /// El juego termina cuando se para el ticker; no hay vuelta atrás.
    pub fn is_game_over(&self) -> bool {
        !self.ticker.is_running()
    }

    /// Mueve al jugador 10 px en la dirección de la flecha, sin límites de lienzo.
    ///
    /// Tras el fin del juego las flechas no hacen nada. Aquí se sigue dibujando
    /// al jugador de 500×500, así que se congela en lugar de moverse sin verse.
    pub fn on_key(&mut self, arrow: Arrow) {
        if self.is_game_over() {
            return;
        }
        let p = &mut self.player;
        match arrow {
            Arrow::Right => {
                p.x += PLAYER_STEP;
                p.texture = TextureId::TenochanRight;
            }
            Arrow::Left => {
                p.x -= PLAYER_STEP;
                p.texture = TextureId::TenochanLeft;
            }
            Arrow::Up => p.y -= PLAYER_STEP,
            Arrow::Down => p.y += PLAYER_STEP,
        }
    }

    pub fn tick(&mut self) -> TickOutcome {
        if self.is_game_over() {
            return TickOutcome::Stopped;
        }

        if is_colliding(&self.player, &self.food) {
            self.feed()
        } else {
            wander(&mut self.food, &mut self.wander, &mut self.rng);
            clamp_to_bounds(&mut self.food, self.width, self.height);
            TickOutcome::Wandered
        }
    }

    fn feed(&mut self) -> TickOutcome {
        self.food.x = self.rng.gen::<f32>() * self.width;
        self.food.y = 0.0;
        let size = self.rng.gen_range(FOOD_MIN_SIZE..=FOOD_MAX_SIZE);
        self.food.set_size(size as f32);

        self.player.grow(PLAYER_GROWTH);

        if self.player.width > GAME_OVER_WIDTH {
            self.end_game();
            return TickOutcome::GameOver;
        }
        TickOutcome::Fed {
            player_size: self.player.width,
        }
    }

    fn end_game(&mut self) {
        self.ticker.stop();
        self.player.set_size(GAME_OVER_SIZE);
        self.player.x = self.width / 2.0;
        self.player.y = self.height / 2.0;
        self.food.visible = false;
        log::info!("game over");
    }

    pub fn render(&self, frame: &mut [u8], textures: &Textures) {
        let w = self.width as i32;
        let h = self.height as i32;
        fill(frame, self.background);
        for sprite in [&self.food, &self.player] {
            draw_sprite(frame, w, h, sprite, textures.get(sprite.texture));
        }
    }
}
