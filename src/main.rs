mod audio;
mod collision;
mod config;
mod game;
mod input;
mod render;
mod sprites;
mod textures;
mod wander;

use crate::audio::{AudioManager, Sfx};
use crate::config::{GameConfig, ASSET_DIR};
use crate::game::{Game, TickOutcome};
use crate::input::arrow_from_keycode;
use crate::textures::Textures;
use anyhow::Context;
use pixels::{Pixels, SurfaceTexture};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::Path;
use winit::{
    dpi::LogicalSize,
    event::*,
    event_loop::{ControlFlow, EventLoop},
    window::WindowBuilder,
};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = GameConfig::default();

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title(&config.title)
        .with_inner_size(LogicalSize::new(config.width as f64, config.height as f64))
        .with_resizable(false)
        .build(&event_loop)
        .context("creating window")?;

    // Superficie en píxeles físicos: respeta el factor de escala del monitor
    let window_size = window.inner_size();
    let surface_texture = SurfaceTexture::new(window_size.width, window_size.height, &window);
    let mut pixels = Pixels::new(config.width, config.height, surface_texture)
        .context("creating pixel buffer")?;

    let asset_dir = Path::new(ASSET_DIR);
    let textures = Textures::load(asset_dir);
    let audio = AudioManager::new(asset_dir.join("sfx"));
    let mut game = Game::new(&config, StdRng::from_entropy());

    log::info!(
        "starting {}x{} canvas at scale factor {}",
        config.width,
        config.height,
        window.scale_factor()
    );

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Poll;

        match event {
            Event::WindowEvent { event, window_id } if window_id == window.id() => match event {
                WindowEvent::CloseRequested => *control_flow = ControlFlow::Exit,
                WindowEvent::KeyboardInput {
                    input:
                        KeyboardInput {
                            state: ElementState::Pressed,
                            virtual_keycode: Some(keycode),
                            ..
                        },
                    ..
                } => {
                    if keycode == VirtualKeyCode::Escape {
                        *control_flow = ControlFlow::Exit;
                        return;
                    }
                    if let Some(arrow) = arrow_from_keycode(keycode) {
                        game.on_key(arrow);
                    }
                }
                _ => {}
            },
            Event::MainEventsCleared => {
                if !game.is_game_over() {
                    match game.tick() {
                        TickOutcome::Fed { player_size } => {
                            log::info!("tenochan eats, now {}x{}", player_size, player_size);
                            audio.play(Sfx::Munch);
                        }
                        TickOutcome::GameOver => audio.play(Sfx::GameOver),
                        TickOutcome::Wandered | TickOutcome::Stopped => {}
                    }
                }

                game.render(pixels.frame_mut(), &textures);

                if let Err(err) = pixels.render() {
                    log::error!("render failed: {}", err);
                    *control_flow = ControlFlow::Exit;
                }
            }
            _ => {}
        }
    });
}
