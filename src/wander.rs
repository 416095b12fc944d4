use crate::config::{
    CHANGE_ROLL, CHANGE_THRESHOLD, FOOD_MARGIN_LEFT, FOOD_MARGIN_RIGHT, FOOD_MARGIN_Y,
    INITIAL_SPEED_MAX, REROLL_SPEED_MAX,
};
use crate::sprites::{Sprite, TextureId};
use rand::Rng;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DirectionX {
    Left,
    Right,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DirectionY {
    Down,
    Up,
}

impl DirectionX {
    pub fn flipped(self) -> Self {
        match self {
            DirectionX::Left => DirectionX::Right,
            DirectionX::Right => DirectionX::Left,
        }
    }
}

impl DirectionY {
    pub fn flipped(self) -> Self {
        match self {
            DirectionY::Down => DirectionY::Up,
            DirectionY::Up => DirectionY::Down,
        }
    }
}

/// Estado del paseo aleatorio del pez.
#[derive(Clone, Debug, PartialEq)]
pub struct WanderState {
    pub direction_x: DirectionX,
    pub direction_y: DirectionY,
    pub speed: u32,
}

impl WanderState {
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        Self {
            direction_x: DirectionX::Left,
            direction_y: DirectionY::Down,
            speed: rng.gen_range(1..=INITIAL_SPEED_MAX),
        }
    }
}

// Verdadero con probabilidad 5/500
fn roll_change<R: Rng>(rng: &mut R) -> bool {
    rng.gen_range(1..=CHANGE_ROLL) > CHANGE_THRESHOLD
}

/// Mueve el pez un paso y, muy de vez en cuando, cambia dirección o velocidad.
///
/// Los cambios son poco frecuentes, así que a ratos el pez parece quedarse quieto.
pub fn wander<R: Rng>(food: &mut Sprite, state: &mut WanderState, rng: &mut R) {
    let speed = state.speed as f32;

    match state.direction_x {
        DirectionX::Left => {
            food.x -= rng.gen::<f32>() * speed;
            food.texture = TextureId::FishLeft;
        }
        DirectionX::Right => {
            food.x += rng.gen::<f32>() * speed;
            food.texture = TextureId::FishRight;
        }
    }
    match state.direction_y {
        DirectionY::Down => food.y += rng.gen::<f32>() * speed,
        DirectionY::Up => food.y -= rng.gen::<f32>() * speed,
    }

    if roll_change(rng) {
        state.direction_x = state.direction_x.flipped();
        log::debug!("fish turns {:?}", state.direction_x);
    }
    if roll_change(rng) {
        state.direction_y = state.direction_y.flipped();
        log::debug!("fish turns {:?}", state.direction_y);
    }
    if roll_change(rng) {
        state.speed = rng.gen_range(1..=REROLL_SPEED_MAX);
        log::debug!("fish speed now {}", state.speed);
    }
}

pub fn clamp_to_bounds(food: &mut Sprite, width: f32, height: f32) {
    if food.y > height - FOOD_MARGIN_Y {
        food.y = height - FOOD_MARGIN_Y;
    }
    if food.y < FOOD_MARGIN_Y {
        food.y = FOOD_MARGIN_Y;
    }
    if food.x > width - FOOD_MARGIN_RIGHT {
        food.x = width - FOOD_MARGIN_RIGHT;
    }
    if food.x < FOOD_MARGIN_LEFT {
        food.x = FOOD_MARGIN_LEFT;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::{RngCore, SeedableRng};
    use std::collections::VecDeque;

    fn fish(x: f32, y: f32) -> Sprite {
        Sprite::new(x, y, 40.0, TextureId::FishLeft)
    }

    // `gen_range(1..=500)` devuelve 497 con este valor
    const ROLL_497: u32 = 0xFE00_0000;

    /// Devuelve los `u32` dados en orden y después ceros.
    struct ScriptedRng {
        values: VecDeque<u32>,
    }

    impl ScriptedRng {
        fn new(values: &[u32]) -> Self {
            Self {
                values: values.iter().copied().collect(),
            }
        }
    }

    impl RngCore for ScriptedRng {
        fn next_u32(&mut self) -> u32 {
            self.values.pop_front().unwrap_or(0)
        }

        fn next_u64(&mut self) -> u64 {
            self.next_u32() as u64
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            for chunk in dest.chunks_mut(4) {
                let bytes = self.next_u32().to_le_bytes();
                chunk.copy_from_slice(&bytes[..chunk.len()]);
            }
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
            self.fill_bytes(dest);
            Ok(())
        }
    }

    #[test]
    fn scripted_rolls_map_to_expected_values() {
        let mut rng = ScriptedRng::new(&[0, ROLL_497]);
        assert_eq!(rng.gen_range(1..=CHANGE_ROLL), 1);
        assert_eq!(rng.gen_range(1..=CHANGE_ROLL), 497);
        assert!(!roll_change(&mut ScriptedRng::new(&[0])));
        assert!(roll_change(&mut ScriptedRng::new(&[ROLL_497])));
    }

    #[test]
    fn initial_state_heads_left_and_down() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..100 {
            let state = WanderState::new(&mut rng);
            assert_eq!(state.direction_x, DirectionX::Left);
            assert_eq!(state.direction_y, DirectionY::Down);
            assert!((1..=10).contains(&state.speed));
        }
    }

    #[test]
    fn moves_follow_direction_and_speed() {
        let mut rng = StdRng::seed_from_u64(7);
        for (dx, dy) in [
            (DirectionX::Left, DirectionY::Down),
            (DirectionX::Right, DirectionY::Up),
        ] {
            let mut state = WanderState {
                direction_x: dx,
                direction_y: dy,
                speed: 4,
            };
            let mut food = fish(300.0, 200.0);
            let before = food.clone();
            wander(&mut food, &mut state, &mut rng);

            let step_x = food.x - before.x;
            let step_y = food.y - before.y;
            match dx {
                DirectionX::Left => {
                    assert!((-4.0..=0.0).contains(&step_x));
                    assert_eq!(food.texture, TextureId::FishLeft);
                }
                DirectionX::Right => {
                    assert!((0.0..=4.0).contains(&step_x));
                    assert_eq!(food.texture, TextureId::FishRight);
                }
            }
            match dy {
                DirectionY::Down => assert!((0.0..=4.0).contains(&step_y)),
                DirectionY::Up => assert!((-4.0..=0.0).contains(&step_y)),
            }
        }
    }

    #[test]
    fn zero_roll_leaves_everything_in_place() {
        let mut rng = StepRng::new(0, 0);
        let start = WanderState {
            direction_x: DirectionX::Right,
            direction_y: DirectionY::Up,
            speed: 3,
        };
        let mut state = start.clone();
        let mut food = fish(300.0, 200.0);
        wander(&mut food, &mut state, &mut rng);
        assert_eq!((food.x, food.y), (300.0, 200.0));
        assert_eq!(food.texture, TextureId::FishRight);
        assert_eq!(state, start);
    }

    #[test]
    fn each_change_is_rolled_on_its_own() {
        // Pasos x/y nulos, luego las tiradas de x, y y velocidad: sólo la de y supera 495
        let mut rng = ScriptedRng::new(&[0, 0, 0, ROLL_497, 0]);
        let mut state = WanderState {
            direction_x: DirectionX::Left,
            direction_y: DirectionY::Down,
            speed: 3,
        };
        let mut food = fish(300.0, 200.0);
        wander(&mut food, &mut state, &mut rng);
        assert_eq!(state.direction_x, DirectionX::Left);
        assert_eq!(state.direction_y, DirectionY::Up);
        assert_eq!(state.speed, 3);
        assert_eq!((food.x, food.y), (300.0, 200.0));

        // Sólo la de x
        let mut rng = ScriptedRng::new(&[0, 0, ROLL_497, 0, 0]);
        wander(&mut food, &mut state, &mut rng);
        assert_eq!(state.direction_x, DirectionX::Right);
        assert_eq!(state.direction_y, DirectionY::Up);
        assert_eq!(state.speed, 3);

        // Sólo la de velocidad; la nueva velocidad sale de la siguiente tirada
        let mut rng = ScriptedRng::new(&[0, 0, 0, 0, ROLL_497, 0]);
        wander(&mut food, &mut state, &mut rng);
        assert_eq!(state.direction_x, DirectionX::Right);
        assert_eq!(state.direction_y, DirectionY::Up);
        assert_eq!(state.speed, 1);
    }

    #[test]
    fn direction_changes_are_rare() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut state = WanderState {
            direction_x: DirectionX::Left,
            direction_y: DirectionY::Down,
            speed: 3,
        };
        let mut food = fish(300.0, 200.0);
        let mut flips_x = 0;
        let mut flips_y = 0;
        let mut speeds = Vec::new();
        for _ in 0..20_000 {
            let prev = state.clone();
            wander(&mut food, &mut state, &mut rng);
            clamp_to_bounds(&mut food, 640.0, 480.0);
            if state.direction_x != prev.direction_x {
                flips_x += 1;
            }
            if state.direction_y != prev.direction_y {
                flips_y += 1;
            }
            if state.speed != prev.speed {
                speeds.push(state.speed);
            }
        }
        // ~1% de 20000
        assert!((100..=320).contains(&flips_x), "flips_x = {flips_x}");
        assert!((100..=320).contains(&flips_y), "flips_y = {flips_y}");
        assert!(!speeds.is_empty());
        assert!(speeds.iter().all(|s| (1..=5).contains(s)));
    }

    #[test]
    fn clamp_pulls_food_back_inside() {
        let cases = [
            ((-500.0, -500.0), (60.0, 40.0)),
            ((10_000.0, 10_000.0), (540.0, 440.0)),
            ((59.9, 440.1), (60.0, 440.0)),
            ((300.0, 200.0), (300.0, 200.0)),
        ];
        for ((x, y), expected) in cases {
            let mut food = fish(x, y);
            clamp_to_bounds(&mut food, 640.0, 480.0);
            assert_eq!((food.x, food.y), expected);
        }
    }

    #[test]
    fn wander_then_clamp_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(99);
        let mut state = WanderState::new(&mut rng);
        let mut food = fish(540.0, 50.0);
        for _ in 0..5_000 {
            wander(&mut food, &mut state, &mut rng);
            clamp_to_bounds(&mut food, 640.0, 480.0);
            assert!((60.0..=540.0).contains(&food.x));
            assert!((40.0..=440.0).contains(&food.y));
        }
    }
}
