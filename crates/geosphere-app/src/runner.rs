//! Headless viewer: drives the screens with simulated frames onto a
//! [`PixelCanvas`].

use std::path::Path;

use geosphere_biome::PlanetSettings;
use geosphere_config::{Config, ConfigError};
use geosphere_render::{PixelCanvas, RenderError, RenderOptions};
use geosphere_screen::{
    Action, Controls, GlobeScreen, GlobeSettings, MenuScreen, ScreenId, ScreenStateMachine,
};
use tracing::info;

use crate::game_loop::{FIXED_DT, GameLoop};

/// Errors that abort a viewer run.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Configuration could not be loaded or is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The final frame could not be written.
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Translate the persisted config into globe screen settings.
pub fn globe_settings(config: &Config) -> GlobeSettings {
    let globe = &config.globe;
    GlobeSettings {
        planet: PlanetSettings {
            detail: globe.detail,
            radius: globe.radius,
            land_center_count: globe.land_center_count as usize,
            land_radius_factor: globe.land_radius_factor,
        },
        rotation_speed: globe.rotation_speed,
        render: RenderOptions {
            field_of_view: globe.field_of_view,
            show_wireframe: globe.show_wireframe,
            ..RenderOptions::default()
        },
        seed: globe.seed,
    }
}

/// Summary of a finished run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunReport {
    /// Frames simulated.
    pub frames: u64,
    /// Fixed updates delivered to screens.
    pub updates: u64,
    /// Simulated seconds.
    pub sim_time: f64,
    /// Screen active at the end.
    pub final_screen: Option<ScreenId>,
}

/// A viewer session: screens, canvas, input and loop.
pub struct Viewer {
    machine: ScreenStateMachine,
    canvas: PixelCanvas,
    controls: Controls,
    game_loop: GameLoop,
    background: geosphere_render::Color,
}

impl Viewer {
    /// Validate `config` and set up both screens, starting on the globe.
    pub fn new(config: &Config) -> Result<Self, AppError> {
        config.validate()?;

        let settings = globe_settings(config);
        let background = settings.render.palette.background;

        let mut machine = ScreenStateMachine::new();
        machine.register(Box::new(MenuScreen::new(background)));
        machine.register(Box::new(GlobeScreen::new(settings)));
        machine.set_state(ScreenId::Globe);

        Ok(Self {
            machine,
            canvas: PixelCanvas::new(config.window.width, config.window.height),
            controls: Controls::new(),
            game_loop: GameLoop::new(),
            background,
        })
    }

    /// Queue an action for the next update.
    pub fn press(&mut self, action: Action) {
        self.controls.press(action);
    }

    /// Simulate one frame of `frame_time` seconds.
    pub fn step(&mut self, frame_time: f64) {
        let Self {
            machine,
            canvas,
            controls,
            game_loop,
            background,
        } = self;

        game_loop.advance(
            frame_time,
            |dt, sim_time| {
                canvas.clear(*background);
                machine.update(&mut *canvas, &*controls, dt, sim_time);
                controls.clear_transients();
            },
            |_| {},
        );
    }

    /// Simulate `frames` frames at the fixed rate.
    pub fn run(&mut self, frames: u32) -> RunReport {
        for _ in 0..frames {
            self.step(FIXED_DT);
        }
        let report = self.report();
        info!(
            frames = report.frames,
            updates = report.updates,
            sim_time = report.sim_time,
            "run finished"
        );
        report
    }

    /// Counters so far.
    pub fn report(&self) -> RunReport {
        RunReport {
            frames: self.game_loop.frame_count(),
            updates: self.game_loop.update_count(),
            sim_time: self.game_loop.total_sim_time(),
            final_screen: self.machine.current(),
        }
    }

    /// The canvas holding the most recent frame.
    pub fn canvas(&self) -> &PixelCanvas {
        &self.canvas
    }

    /// Write the most recent frame as PNG.
    pub fn save_frame(&self, path: &Path) -> Result<(), AppError> {
        self.canvas.write_png(path)?;
        info!("wrote frame to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> Config {
        let mut config = Config::default();
        config.window.width = 200;
        config.window.height = 150;
        config.globe.radius = 60.0;
        config.globe.detail = 2;
        config.globe.seed = Some(3);
        config
    }

    #[test]
    fn test_globe_settings_mapping() {
        let mut config = Config::default();
        config.globe.show_wireframe = true;
        config.globe.land_center_count = 0;
        let settings = globe_settings(&config);
        assert!(settings.render.show_wireframe);
        assert_eq!(settings.planet.land_center_count, 0);
        assert_eq!(settings.planet.radius, 180.0);
        assert_eq!(settings.render.field_of_view, 400.0);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = small_config();
        config.globe.field_of_view = 10.0;
        assert!(matches!(Viewer::new(&config), Err(AppError::Config(_))));
    }

    #[test]
    fn test_run_paints_planet() {
        let mut viewer = Viewer::new(&small_config()).unwrap();
        let report = viewer.run(5);
        assert_eq!(report.frames, 5);
        assert!(report.updates >= 4);
        assert_eq!(report.final_screen, Some(ScreenId::Globe));

        let canvas = viewer.canvas();
        let palette = geosphere_render::Palette::default();
        let center = canvas.pixel(100, 75).unwrap();
        assert!(center == palette.land || center == palette.sea);
        assert_eq!(canvas.pixel(0, 0), Some(palette.background));
    }

    #[test]
    fn test_exit_returns_to_menu() {
        let mut viewer = Viewer::new(&small_config()).unwrap();
        viewer.run(2);
        viewer.press(Action::Exit);
        viewer.step(FIXED_DT * 1.5);
        assert_eq!(viewer.report().final_screen, Some(ScreenId::Menu));
    }

    #[test]
    fn test_save_frame() {
        let mut viewer = Viewer::new(&small_config()).unwrap();
        viewer.run(1);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("globe.png");
        viewer.save_frame(&path).unwrap();
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }
}
