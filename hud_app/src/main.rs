//! HUD overlay demo
//!
//! Builds the game UI from the overlay config — a health bar texture
//! object and a player-name label in one scene — then drives the scene
//! manager through a short headless frame loop against a recording batch,
//! logging the draw traffic each frame.

mod config;

use config::OverlayConfig;
use sprite_ui::prelude::*;
use std::any::Any;

/// Gently pulses the owning object's scale over time
#[derive(Debug, Clone)]
struct PulseScale {
    amplitude: f32,
    speed: f32,
}

impl UiComponent for PulseScale {
    fn update(&mut self, transform: &mut Transform2D, time: &FrameTime) {
        let scale = 1.0 + self.amplitude * (time.total_seconds * self.speed).sin();
        transform.scale = Vec2::new(scale, scale);
    }

    fn clone_box(&self) -> Box<dyn UiComponent> {
        Box::new(self.clone())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

struct OverlayApp {
    manager: UiSceneManager,
    batch: RecordingBatch,
    timer: Timer,
}

impl OverlayApp {
    fn new(config: &OverlayConfig) -> Self {
        log::info!(
            "creating {}x{} overlay demo",
            config.window.width,
            config.window.height
        );

        // The host engine would load these; the demo registers their
        // handles directly.
        let mut content = ContentStore::new();
        let health_texture = content.load_texture(&config.health_texture, 32, 8);
        let ui_font = content.load_font(&config.ui_font, 14.0);

        let mut scene = UiScene::new(&config.scene_name);

        let mut health = UiTextureObject::new(
            "health",
            UiObjectType::Progress,
            Transform2D::at(Vec2::new(50.0, 100.0)),
            0.0,
            health_texture,
        );
        health.object.add_component(Box::new(PulseScale {
            amplitude: 0.1,
            speed: 4.0,
        }));
        scene.add(health);

        scene.add(UiTextObject::new(
            "player name",
            UiObjectType::Text,
            Transform2D::at(Vec2::new(50.0, 50.0)),
            0.0,
            ui_font,
            &config.player_name,
        ));

        let mut manager = UiSceneManager::new();
        manager.add(scene);
        if !manager.set_active_scene(&config.scene_name) {
            log::error!("scene '{}' did not activate", config.scene_name);
        }

        Self {
            manager,
            batch: RecordingBatch::new(),
            timer: Timer::new(),
        }
    }

    fn run(&mut self, frames: u64) -> Result<(), RenderError> {
        for _ in 0..frames {
            let time = self.timer.tick();

            self.manager.update(&time);

            self.batch.reset();
            self.manager.draw(&time, &mut self.batch)?;

            log::info!(
                "frame {}: {} draw commands in {} pass",
                time.frame_count,
                self.batch.commands().len(),
                self.batch.passes_completed()
            );
            for command in self.batch.commands() {
                log::debug!("  {command:?}");
            }
        }
        Ok(())
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    sprite_ui::foundation::logging::init();

    let config = OverlayConfig::load_or_default("overlay.toml");
    let mut app = OverlayApp::new(&config);
    app.run(config.demo_frames)?;

    log::info!("overlay demo finished");
    Ok(())
}
