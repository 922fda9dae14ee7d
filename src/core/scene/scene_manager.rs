//=========================================================================
// Scene Manager
//=========================================================================
//
// Holds the ordered scene list and the index of the live scene.
//
// Switching walks the list with wrap-around and rebuilds the target scene
// before it receives its first update. Scenes that are not current keep
// whatever stale state they had; they are rebuilt on selection.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, info};

//=== Internal Dependencies ===============================================

use crate::core::input::Viewport;
use crate::core::render::Surface;
use super::{Scene, SceneContext};

//=== Scene Direction =====================================================

/// Direction of a scene switch request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneDirection {
    /// Advance to the following scene (wraps to the first).
    Next,

    /// Go back to the preceding scene (wraps to the last).
    Previous,
}

impl SceneDirection {
    /// Index reached from `current` in a list of `len` scenes.
    ///
    /// Total for any `len > 0`.
    pub fn step(self, current: usize, len: usize) -> usize {
        match self {
            Self::Next => (current + 1) % len,
            Self::Previous => (current + len - 1) % len,
        }
    }
}

//=== Scene Manager =======================================================

/// Owns every scene and drives the current one.
///
/// Invariant: `current` always addresses a scene that has been initialized
/// since it last became current.
pub struct SceneManager {
    scenes: Vec<Box<dyn Scene>>,
    current: usize,
}

impl SceneManager {
    //--- Construction -----------------------------------------------------

    /// Takes ownership of `scenes` and initializes the first one.
    ///
    /// # Panics
    ///
    /// Panics if `scenes` is empty.
    pub fn new(scenes: Vec<Box<dyn Scene>>, viewport: Viewport) -> Self {
        assert!(!scenes.is_empty(), "SceneManager requires at least one scene");

        let mut manager = Self { scenes, current: 0 };
        manager.init_current(viewport);
        manager
    }

    //--- Switching --------------------------------------------------------

    /// Moves to the neighbouring scene and initializes it.
    ///
    /// Returns the display name of the newly active scene.
    pub fn switch(&mut self, direction: SceneDirection, viewport: Viewport) -> &'static str {
        let from = self.current;
        self.current = direction.step(self.current, self.scenes.len());

        debug!(
            "Switching scene {:?}: {} -> {}",
            direction, from, self.current
        );

        self.init_current(viewport)
    }

    /// Rebuilds the current scene for a new viewport. Other scenes are left
    /// untouched.
    pub fn on_resize(&mut self, viewport: Viewport) {
        debug!(
            "Viewport resized to {}x{}, rebuilding {:?}",
            viewport.width,
            viewport.height,
            self.display_name()
        );
        self.scenes[self.current].init(viewport);
    }

    //--- Update Loop ------------------------------------------------------

    /// Advances the current scene by one tick.
    pub fn update(&mut self, ctx: &SceneContext) {
        self.scenes[self.current].update(ctx);
    }

    /// Draws the current scene.
    pub fn draw(&self, surface: &mut dyn Surface, ctx: &SceneContext) {
        self.scenes[self.current].draw(surface, ctx);
    }

    //--- Queries ----------------------------------------------------------

    /// Index of the live scene.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Display name of the live scene.
    pub fn display_name(&self) -> &'static str {
        self.scenes[self.current].name()
    }

    /// Names of all scenes in switching order.
    pub fn names(&self) -> Vec<&'static str> {
        self.scenes.iter().map(|s| s.name()).collect()
    }

    /// Number of registered scenes.
    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    /// Always `false`; a manager cannot be built without scenes.
    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    //--- Internal Helpers -------------------------------------------------

    fn init_current(&mut self, viewport: Viewport) -> &'static str {
        let scene = &mut self.scenes[self.current];
        scene.init(viewport);

        let name = scene.name();
        info!("Scene activated: {} ({})", name, self.current);
        name
    }
}

//=== Tests ===============================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use crate::core::render::DrawList;

    // Mock scene counting lifecycle calls
    struct CountingScene {
        name: &'static str,
        inits: Arc<AtomicUsize>,
        updates: Arc<AtomicUsize>,
    }

    impl Scene for CountingScene {
        fn name(&self) -> &'static str {
            self.name
        }

        fn init(&mut self, _viewport: Viewport) {
            self.inits.fetch_add(1, Ordering::SeqCst);
        }

        fn update(&mut self, _ctx: &SceneContext) {
            self.updates.fetch_add(1, Ordering::SeqCst);
        }

        fn draw(&self, surface: &mut dyn Surface, _ctx: &SceneContext) {
            surface.save();
            surface.restore();
        }
    }

    const NAMES: [&str; 4] = ["A", "B", "C", "D"];

    fn manager(inits: &Arc<AtomicUsize>, updates: &Arc<AtomicUsize>) -> SceneManager {
        let scenes: Vec<Box<dyn Scene>> = NAMES
            .iter()
            .map(|&name| {
                Box::new(CountingScene {
                    name,
                    inits: Arc::clone(inits),
                    updates: Arc::clone(updates),
                }) as Box<dyn Scene>
            })
            .collect();
        SceneManager::new(scenes, Viewport::default())
    }

    //--- SceneDirection Tests ---------------------------------------------

    #[test]
    fn direction_wraps_both_ways() {
        assert_eq!(SceneDirection::Next.step(3, 4), 0);
        assert_eq!(SceneDirection::Previous.step(0, 4), 3);
        assert_eq!(SceneDirection::Next.step(0, 1), 0);
        assert_eq!(SceneDirection::Previous.step(0, 1), 0);
    }

    //--- SceneManager Tests -----------------------------------------------

    #[test]
    fn new_initializes_first_scene_only() {
        let inits = Arc::new(AtomicUsize::new(0));
        let updates = Arc::new(AtomicUsize::new(0));
        let manager = manager(&inits, &updates);

        assert_eq!(manager.current_index(), 0);
        assert_eq!(manager.display_name(), "A");
        assert_eq!(inits.load(Ordering::SeqCst), 1);
    }

    #[test]
    #[should_panic(expected = "at least one scene")]
    fn new_panics_on_empty_list() {
        SceneManager::new(Vec::new(), Viewport::default());
    }

    #[test]
    fn full_cycle_returns_to_start_with_one_init_per_switch() {
        let inits = Arc::new(AtomicUsize::new(0));
        let updates = Arc::new(AtomicUsize::new(0));
        let mut manager = manager(&inits, &updates);
        let before = inits.load(Ordering::SeqCst);

        for _ in 0..manager.len() {
            manager.switch(SceneDirection::Next, Viewport::default());
        }

        assert_eq!(manager.current_index(), 0);
        assert_eq!(inits.load(Ordering::SeqCst) - before, manager.len());
    }

    #[test]
    fn previous_from_first_wraps_to_last() {
        let inits = Arc::new(AtomicUsize::new(0));
        let updates = Arc::new(AtomicUsize::new(0));
        let mut manager = manager(&inits, &updates);

        let name = manager.switch(SceneDirection::Previous, Viewport::default());

        assert_eq!(name, "D");
        assert_eq!(manager.current_index(), 3);
    }

    #[test]
    fn switch_publishes_new_display_name() {
        let inits = Arc::new(AtomicUsize::new(0));
        let updates = Arc::new(AtomicUsize::new(0));
        let mut manager = manager(&inits, &updates);

        assert_eq!(manager.switch(SceneDirection::Next, Viewport::default()), "B");
        assert_eq!(manager.display_name(), "B");
    }

    #[test]
    fn resize_rebuilds_current_scene_only() {
        let inits = Arc::new(AtomicUsize::new(0));
        let updates = Arc::new(AtomicUsize::new(0));
        let mut manager = manager(&inits, &updates);

        manager.on_resize(Viewport::new(320.0, 240.0));

        assert_eq!(inits.load(Ordering::SeqCst), 2);
        assert_eq!(manager.current_index(), 0);
    }

    #[test]
    fn update_and_draw_reach_current_scene() {
        let inits = Arc::new(AtomicUsize::new(0));
        let updates = Arc::new(AtomicUsize::new(0));
        let mut manager = manager(&inits, &updates);
        let ctx = SceneContext::default();
        let mut surface = DrawList::new();

        manager.update(&ctx);
        manager.draw(&mut surface, &ctx);

        assert_eq!(updates.load(Ordering::SeqCst), 1);
        assert_eq!(surface.len(), 2);
        assert_eq!(surface.transform_depth(), 0);
    }

    #[test]
    fn names_follow_registration_order() {
        let inits = Arc::new(AtomicUsize::new(0));
        let updates = Arc::new(AtomicUsize::new(0));
        let manager = manager(&inits, &updates);

        assert_eq!(manager.names(), NAMES.to_vec());
    }
}
