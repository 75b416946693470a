//! The rotating planet screen.

use geosphere_biome::{Planet, PlanetSettings, land_rng};
use geosphere_render::{FrameRenderer, FrameStats, RenderOptions};
use rand_chacha::ChaCha8Rng;
use tracing::{error, info, trace};

use crate::{FrameContext, Screen, ScreenId};

/// Everything the globe screen needs to build and animate its planet.
#[derive(Debug, Clone, PartialEq)]
pub struct GlobeSettings {
    /// Geometry and classification parameters.
    pub planet: PlanetSettings,
    /// Spin rate in radians per second.
    pub rotation_speed: f64,
    /// Projection, wireframe and colors.
    pub render: RenderOptions,
    /// Seed for land placement. `None` draws from the thread RNG.
    pub seed: Option<u64>,
}

impl Default for GlobeSettings {
    fn default() -> Self {
        Self {
            planet: PlanetSettings::default(),
            rotation_speed: 1.0,
            render: RenderOptions::default(),
            seed: None,
        }
    }
}

/// State that only exists while the screen is active.
struct ActiveGlobe {
    planet: Planet,
    rotation: f64,
}

/// Builds a classified geodesic sphere on entry and spins it every tick.
///
/// Inactive (no planet) until [`on_enter`](Screen::on_enter) succeeds; every
/// entry rebuilds the planet and resets the rotation to zero.
pub struct GlobeScreen {
    settings: GlobeSettings,
    rng: ChaCha8Rng,
    renderer: FrameRenderer,
    active: Option<ActiveGlobe>,
    last_stats: FrameStats,
}

impl GlobeScreen {
    /// Creates an inactive globe screen. Its land RNG is seeded once, from
    /// `settings.seed` when given.
    pub fn new(settings: GlobeSettings) -> Self {
        let rng = land_rng(settings.seed);
        Self {
            settings,
            rng,
            renderer: FrameRenderer::new(),
            active: None,
            last_stats: FrameStats::default(),
        }
    }

    /// Current settings.
    pub fn settings(&self) -> &GlobeSettings {
        &self.settings
    }

    /// Whether a planet is built and spinning.
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// The current planet, if active.
    pub fn planet(&self) -> Option<&Planet> {
        self.active.as_ref().map(|a| &a.planet)
    }

    /// Accumulated rotation in radians, if active.
    pub fn rotation(&self) -> Option<f64> {
        self.active.as_ref().map(|a| a.rotation)
    }

    /// Whether the wireframe overlay is on.
    pub fn show_wireframe(&self) -> bool {
        self.settings.render.show_wireframe
    }

    /// What the last update painted.
    pub fn last_stats(&self) -> FrameStats {
        self.last_stats
    }

    /// Build a fresh planet and reset the rotation.
    fn setup_mesh(&mut self) {
        match Planet::generate(&self.settings.planet, &mut self.rng) {
            Ok(planet) => {
                info!(
                    detail = self.settings.planet.detail,
                    vertices = planet.vertices().len(),
                    faces = planet.faces().len(),
                    land = planet.biomes.land_count(),
                    "globe ready"
                );
                self.active = Some(ActiveGlobe {
                    planet,
                    rotation: 0.0,
                });
            }
            Err(err) => {
                error!("failed to build globe: {err}");
                self.active = None;
            }
        }
    }
}

impl Screen for GlobeScreen {
    fn id(&self) -> ScreenId {
        ScreenId::Globe
    }

    fn on_enter(&mut self) {
        self.setup_mesh();
    }

    fn on_update(&mut self, ctx: &mut FrameContext<'_>, delta_time: f64, _elapsed: f64) {
        let Some(active) = self.active.as_mut() else {
            trace!("globe update while inactive");
            return;
        };

        if ctx.input.wireframe_toggled() {
            self.settings.render.show_wireframe = !self.settings.render.show_wireframe;
        }

        active.rotation += self.settings.rotation_speed * delta_time;
        self.last_stats = self.renderer.render(
            ctx.surface,
            &active.planet,
            active.rotation,
            &self.settings.render,
        );

        if ctx.input.exit_requested() {
            ctx.screens.request_screen(ScreenId::Menu);
        }
    }

    fn on_exit(&mut self) {
        self.active = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Action, Controls, ScreenRegistry};
    use geosphere_render::RecordingSurface;

    #[derive(Default)]
    struct Requests(Vec<ScreenId>);

    impl ScreenRegistry for Requests {
        fn request_screen(&mut self, id: ScreenId) {
            self.0.push(id);
        }
    }

    fn settings(detail: u32) -> GlobeSettings {
        GlobeSettings {
            planet: PlanetSettings {
                detail,
                ..PlanetSettings::default()
            },
            seed: Some(17),
            ..GlobeSettings::default()
        }
    }

    fn update(screen: &mut GlobeScreen, controls: &Controls, dt: f64) -> (RecordingSurface, Requests) {
        let mut surface = RecordingSurface::new(800.0, 600.0);
        let mut requests = Requests::default();
        let mut ctx = FrameContext {
            surface: &mut surface,
            input: controls,
            screens: &mut requests,
        };
        screen.on_update(&mut ctx, dt, 0.0);
        (surface, requests)
    }

    #[test]
    fn test_inactive_until_entered() {
        let mut screen = GlobeScreen::new(settings(1));
        assert!(!screen.is_active());
        let (surface, _) = update(&mut screen, &Controls::new(), 0.016);
        assert!(surface.commands().is_empty());
    }

    #[test]
    fn test_enter_builds_planet() {
        let mut screen = GlobeScreen::new(settings(1));
        screen.on_enter();
        assert!(screen.is_active());
        let planet = screen.planet().unwrap();
        assert_eq!(planet.faces().len(), 80);
        assert_eq!(planet.vertices().len(), 42);
        assert_eq!(planet.face_biomes().len(), 80);
        assert_eq!(screen.rotation(), Some(0.0));
    }

    #[test]
    fn test_rotation_accumulates() {
        let mut screen = GlobeScreen::new(GlobeSettings {
            rotation_speed: 2.0,
            ..settings(0)
        });
        screen.on_enter();
        update(&mut screen, &Controls::new(), 0.5);
        update(&mut screen, &Controls::new(), 0.25);
        assert_eq!(screen.rotation(), Some(1.5));
        assert_eq!(screen.last_stats().faces_drawn, 20);
    }

    #[test]
    fn test_reenter_resets_rotation_and_rebuilds() {
        let mut screen = GlobeScreen::new(settings(1));
        screen.on_enter();
        let first_centers = screen.planet().unwrap().biomes.land_centers.clone();
        update(&mut screen, &Controls::new(), 1.0);
        assert_eq!(screen.rotation(), Some(1.0));

        screen.on_exit();
        assert!(!screen.is_active());
        screen.on_enter();
        assert_eq!(screen.rotation(), Some(0.0));
        assert_ne!(screen.planet().unwrap().biomes.land_centers, first_centers);
    }

    #[test]
    fn test_exit_requests_menu_after_drawing() {
        let mut screen = GlobeScreen::new(settings(1));
        screen.on_enter();
        let mut controls = Controls::new();
        controls.press(Action::Exit);
        let (surface, requests) = update(&mut screen, &controls, 0.016);
        assert_eq!(requests.0, vec![ScreenId::Menu]);
        assert_eq!(surface.fill_count(), 80);
        // Leaving is owned by the state machine; the screen keeps spinning until then.
        assert!(screen.is_active());
    }

    #[test]
    fn test_no_exit_no_request() {
        let mut screen = GlobeScreen::new(settings(0));
        screen.on_enter();
        let (_, requests) = update(&mut screen, &Controls::new(), 0.016);
        assert!(requests.0.is_empty());
    }

    #[test]
    fn test_wireframe_toggle() {
        let mut screen = GlobeScreen::new(settings(1));
        screen.on_enter();
        assert!(!screen.show_wireframe());

        let mut controls = Controls::new();
        controls.press(Action::ToggleWireframe);
        update(&mut screen, &controls, 0.016);
        assert!(screen.show_wireframe());
        assert_eq!(screen.last_stats().edges_drawn, 120);

        controls.clear_transients();
        update(&mut screen, &controls, 0.016);
        assert!(screen.show_wireframe());

        controls.press(Action::ToggleWireframe);
        update(&mut screen, &controls, 0.016);
        assert!(!screen.show_wireframe());
        assert_eq!(screen.last_stats().edges_drawn, 0);
    }

    #[test]
    fn test_bad_radius_stays_inactive() {
        let mut bad = settings(1);
        bad.planet.radius = -1.0;
        let mut screen = GlobeScreen::new(bad);
        screen.on_enter();
        assert!(!screen.is_active());
    }

    #[test]
    fn test_same_seed_same_first_planet() {
        let mut a = GlobeScreen::new(settings(2));
        let mut b = GlobeScreen::new(settings(2));
        a.on_enter();
        b.on_enter();
        assert_eq!(a.planet(), b.planet());
    }
}
