//! Application state and intent handling
//!
//! Everything the frame loop mutates lives in `AppState`. Input from the
//! canvas and the chrome is turned into `Intent`s; `apply` is the single
//! place state changes, and it reports what has to be persisted.

use crate::config::{SizeSettings, FRAME_DT_MS};
use crate::hit::{hit_test, planet_at_point, Hit};
use crate::planet::orbit::advance_all;
use crate::planet::{PlanetDraft, PlanetId};
use crate::profile::ImportedProfile;
use crate::render::{PanelLayout, Starfield};
use crate::store::PlanetStore;
use crate::ui::{ConfirmState, FormState, SidePanelState};
use crate::viewport::{Viewport, ViewportTracker};

/// Seconds a status message stays on screen
const STATUS_SECS: f64 = 3.0;

/// Something the user asked for
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    /// Pointer moved over the canvas
    PointerMoved { x: f32, y: f32 },
    /// Pointer left the canvas or moved onto the chrome
    PointerLeft,
    /// Click or touch start on the canvas
    Tap { x: f32, y: f32 },
    OpenAddForm,
    OpenEditForm(PlanetId),
    CloseForm,
    SubmitForm(PlanetDraft),
    RequestDelete(PlanetId),
    ConfirmDelete,
    CancelDelete,
    ToggleSidePanel,
    /// Row clicked in the side panel list
    SelectInList(PlanetId),
    SetMinSize(i32),
    SetMaxSize(i32),
    AdjustImportance(i32),
    AdjustUrgency(i32),
    AdjustInterval(i32),
    ImportProfile(ImportedProfile),
    ShowStatus(String),
}

/// What an intent changed that must be written out
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Effects {
    pub save_planets: bool,
    pub save_settings: bool,
}

impl Effects {
    const NONE: Effects = Effects { save_planets: false, save_settings: false };
    const PLANETS: Effects = Effects { save_planets: true, save_settings: false };
    const SETTINGS: Effects = Effects { save_planets: false, save_settings: true };
    const BOTH: Effects = Effects { save_planets: true, save_settings: true };

    pub fn merge(self, other: Effects) -> Effects {
        Effects {
            save_planets: self.save_planets || other.save_planets,
            save_settings: self.save_settings || other.save_settings,
        }
    }
}

/// Transient status line (import results, unsupported actions)
#[derive(Debug, Clone, PartialEq)]
pub struct StatusMessage {
    pub text: String,
    pub until: f64,
}

/// Main application state
pub struct AppState {
    pub store: PlanetStore,
    pub settings: SizeSettings,
    pub viewport: ViewportTracker,
    pub starfield: Starfield,

    /// Planet whose detail panel is shown
    pub active: Option<PlanetId>,
    /// Highlighted row in the side panel
    pub selected: Option<PlanetId>,
    /// Detail panel regions drawn last frame
    pub panel_layout: Option<PanelLayout>,

    pub side_panel: SidePanelState,
    pub form: Option<FormState>,
    pub confirm: Option<ConfirmState>,
    pub status: Option<StatusMessage>,

    /// Pointer is over an interactive planet
    pub pointer_over_planet: bool,
    /// Wall clock of the current frame (seconds)
    pub now: f64,
}

impl AppState {
    pub fn new(viewport: Viewport, store: PlanetStore, settings: SizeSettings) -> Self {
        Self {
            store,
            settings,
            viewport: ViewportTracker::new(viewport),
            starfield: Starfield::generate(viewport),
            active: None,
            selected: None,
            panel_layout: None,
            side_panel: SidePanelState::default(),
            form: None,
            confirm: None,
            status: None,
            pointer_over_planet: false,
            now: 0.0,
        }
    }

    pub fn current_viewport(&self) -> Viewport {
        self.viewport.current()
    }

    /// A modal owns the input while it is up
    pub fn modal_open(&self) -> bool {
        self.form.is_some() || self.confirm.is_some()
    }

    /// Planet being edited in the form, if any
    pub fn editing(&self) -> Option<PlanetId> {
        self.form.as_ref().and_then(|f| f.editing)
    }

    /// Feed the observed window size; regenerates stars when it changes
    pub fn observe_viewport(&mut self, observed: Viewport, now: f64) {
        if let Some(viewport) = self.viewport.observe(observed, now) {
            self.starfield = Starfield::generate(viewport);
        }
    }

    /// Advance one frame: stars twinkle, every planet takes one phase step,
    /// and selections pointing at deleted planets are dropped.
    pub fn tick(&mut self, now: f64) {
        self.now = now;
        self.starfield.tick();
        advance_all(self.store.iter_mut(), FRAME_DT_MS);
        self.prune();

        if self.status.as_ref().is_some_and(|s| now >= s.until) {
            self.status = None;
        }
    }

    fn prune(&mut self) {
        let store = &self.store;
        let gone = |id: &Option<PlanetId>| id.is_some_and(|id| !store.contains(id));

        if gone(&self.active) {
            self.active = None;
            self.panel_layout = None;
        }
        if gone(&self.selected) {
            self.selected = None;
        }
        if gone(&self.editing()) {
            self.form = None;
        }
        if self.confirm.as_ref().is_some_and(|c| !store.contains(c.target)) {
            self.confirm = None;
        }
    }

    fn show_status(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            text: text.into(),
            until: self.now + STATUS_SECS,
        });
    }

    fn open_edit_form(&mut self, id: PlanetId) {
        let Some(planet) = self.store.get(id) else {
            return;
        };
        self.form = Some(FormState::for_edit(planet));
        self.selected = Some(id);
        self.side_panel.open = true;
    }

    fn request_delete(&mut self, id: PlanetId) {
        if let Some(planet) = self.store.get(id) {
            self.confirm = Some(ConfirmState::delete(id, &planet.name));
        }
    }

    /// Apply one intent and report what needs saving
    pub fn apply(&mut self, intent: Intent) -> Effects {
        let viewport = self.current_viewport();

        match intent {
            Intent::PointerMoved { x, y } => {
                let hovered = planet_at_point(&self.store, viewport, &self.settings, x, y).map(|p| p.id);
                for planet in self.store.iter_mut() {
                    planet.hovering = Some(planet.id) == hovered;
                }
                self.pointer_over_planet = hovered.is_some();
                Effects::NONE
            }

            Intent::PointerLeft => {
                for planet in self.store.iter_mut() {
                    planet.hovering = false;
                }
                self.pointer_over_planet = false;
                Effects::NONE
            }

            Intent::Tap { x, y } => {
                if self.modal_open() {
                    return Effects::NONE;
                }
                let panel = self.active.and(self.panel_layout.as_ref());
                match hit_test(&self.store, panel, viewport, &self.settings, x, y) {
                    Hit::EditButton => {
                        if let Some(id) = self.active.take() {
                            self.open_edit_form(id);
                        }
                    }
                    Hit::DeleteButton => {
                        if let Some(id) = self.active {
                            self.request_delete(id);
                        }
                    }
                    Hit::CancelButton => self.active = None,
                    Hit::PanelBody => {}
                    Hit::Planet(id) => self.active = Some(id),
                    Hit::Nothing => {
                        self.active = None;
                        self.side_panel.open = false;
                    }
                }
                if self.active.is_none() {
                    self.panel_layout = None;
                }
                Effects::NONE
            }

            Intent::OpenAddForm => {
                self.form = Some(FormState::for_add());
                Effects::NONE
            }
            Intent::OpenEditForm(id) => {
                self.open_edit_form(id);
                Effects::NONE
            }
            Intent::CloseForm => {
                self.form = None;
                Effects::NONE
            }
            Intent::SubmitForm(draft) => {
                let Some(form) = self.form.take() else {
                    return Effects::NONE;
                };
                match form.editing {
                    Some(id) => {
                        if !self.store.update(id, draft) {
                            log::warn!("planet {} vanished while being edited", id);
                            return Effects::NONE;
                        }
                    }
                    None => {
                        self.store.create(draft);
                    }
                }
                Effects::PLANETS
            }

            Intent::RequestDelete(id) => {
                self.request_delete(id);
                Effects::NONE
            }
            Intent::ConfirmDelete => {
                let Some(confirm) = self.confirm.take() else {
                    return Effects::NONE;
                };
                if !self.store.delete(confirm.target) {
                    return Effects::NONE;
                }
                self.prune();
                Effects::PLANETS
            }
            Intent::CancelDelete => {
                self.confirm = None;
                Effects::NONE
            }

            Intent::ToggleSidePanel => {
                self.side_panel.open = !self.side_panel.open;
                Effects::NONE
            }
            Intent::SelectInList(id) => {
                self.open_edit_form(id);
                Effects::NONE
            }

            Intent::SetMinSize(percent) => {
                self.settings.set_min_percent(percent);
                Effects::SETTINGS
            }
            Intent::SetMaxSize(percent) => {
                self.settings.set_max_percent(percent);
                Effects::SETTINGS
            }

            Intent::AdjustImportance(delta) => self.bulk(|store| store.adjust_importance(delta)),
            Intent::AdjustUrgency(delta) => self.bulk(|store| store.adjust_urgency(delta)),
            Intent::AdjustInterval(delta) => self.bulk(|store| store.adjust_interval(delta)),

            Intent::ImportProfile(profile) => {
                if let Some(stored) = profile.settings {
                    if let Some(min) = stored.min {
                        self.settings.min = min;
                    }
                    if let Some(max) = stored.max {
                        self.settings.max = max;
                    }
                }
                let count = profile.planets.len();
                self.store.replace_all(profile.planets);
                self.active = None;
                self.selected = None;
                self.panel_layout = None;
                self.form = None;
                self.confirm = None;
                log::info!("Imported profile with {} planets", count);
                self.show_status("Profile loaded successfully!");
                Effects::BOTH
            }

            Intent::ShowStatus(text) => {
                self.show_status(text);
                Effects::NONE
            }
        }
    }

    fn bulk(&mut self, adjust: impl FnOnce(&mut PlanetStore)) -> Effects {
        if self.store.is_empty() {
            return Effects::NONE;
        }
        adjust(&mut self.store);
        Effects::PLANETS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planet::{resolve, OrbitPath, Phase};
    use crate::profile::SettingsRecord;
    use crate::render::starfield::star_count;

    const VIEW: Viewport = Viewport { width: 1000.0, height: 1000.0 };

    fn app_with_centered_planet() -> (AppState, PlanetId) {
        let mut app = AppState::new(VIEW, PlanetStore::new(), SizeSettings::default());
        let id = app.store.create(PlanetDraft::new("Launch", 5, 5));
        let planet = app.store.get_mut(id).unwrap();
        planet.orbit_path = OrbitPath { y_center: 0.5, curvature: 0.0, curve_direction: 1.0 };
        planet.progress = 0.5;
        (app, id)
    }

    fn center_of(app: &AppState, id: PlanetId) -> (f32, f32) {
        let pos = resolve(app.store.get(id).unwrap(), VIEW, &app.settings);
        (pos.x, pos.y)
    }

    #[test]
    fn test_tap_planet_activates_it() {
        let (mut app, id) = app_with_centered_planet();
        let (x, y) = center_of(&app, id);
        assert_eq!(app.apply(Intent::Tap { x, y }), Effects::NONE);
        assert_eq!(app.active, Some(id));
    }

    #[test]
    fn test_tap_empty_space_clears_and_closes_panel() {
        let (mut app, id) = app_with_centered_planet();
        app.active = Some(id);
        app.side_panel.open = true;
        app.apply(Intent::Tap { x: 5.0, y: 5.0 });
        assert_eq!(app.active, None);
        assert!(!app.side_panel.open);
    }

    #[test]
    fn test_panel_buttons() {
        let (mut app, id) = app_with_centered_planet();
        let pos = resolve(app.store.get(id).unwrap(), VIEW, &app.settings);
        let layout = PanelLayout::place(&pos, VIEW);

        // Cancel
        app.active = Some(id);
        app.panel_layout = Some(layout);
        app.apply(Intent::Tap { x: layout.cancel.center_x(), y: layout.cancel.center_y() });
        assert_eq!(app.active, None);

        // Body does nothing
        app.active = Some(id);
        app.panel_layout = Some(layout);
        app.apply(Intent::Tap { x: layout.bounds.x + 2.0, y: layout.bounds.y + 2.0 });
        assert_eq!(app.active, Some(id));

        // Delete asks first
        app.apply(Intent::Tap { x: layout.delete.center_x(), y: layout.delete.center_y() });
        assert_eq!(app.confirm.as_ref().map(|c| c.target), Some(id));
        assert_eq!(app.confirm.as_ref().unwrap().message, "Delete \"Launch\"?");
        assert!(app.store.contains(id));
        app.apply(Intent::CancelDelete);

        // Edit opens the form and side panel, clears active
        app.apply(Intent::Tap { x: layout.edit.center_x(), y: layout.edit.center_y() });
        assert_eq!(app.active, None);
        assert_eq!(app.editing(), Some(id));
        assert_eq!(app.selected, Some(id));
        assert!(app.side_panel.open);
    }

    #[test]
    fn test_stale_panel_ignored_without_active() {
        let (mut app, id) = app_with_centered_planet();
        let pos = resolve(app.store.get(id).unwrap(), VIEW, &app.settings);
        let layout = PanelLayout::place(&pos, VIEW);
        app.panel_layout = Some(layout);
        app.active = None;

        app.apply(Intent::Tap { x: layout.edit.center_x(), y: layout.edit.center_y() });
        assert!(app.form.is_none());
    }

    #[test]
    fn test_taps_ignored_while_modal_open() {
        let (mut app, id) = app_with_centered_planet();
        app.apply(Intent::OpenAddForm);
        let (x, y) = center_of(&app, id);
        app.apply(Intent::Tap { x, y });
        assert_eq!(app.active, None);
    }

    #[test]
    fn test_hover_marks_single_planet() {
        let (mut app, id) = app_with_centered_planet();
        let other = app.store.create(PlanetDraft::new("Other", 1, 1));
        let (x, y) = center_of(&app, id);

        app.apply(Intent::PointerMoved { x, y });
        assert!(app.store.get(id).unwrap().hovering);
        assert!(!app.store.get(other).unwrap().hovering);
        assert!(app.pointer_over_planet);

        app.apply(Intent::PointerMoved { x: 1.0, y: 1.0 });
        assert!(!app.store.get(id).unwrap().hovering);
        assert!(!app.pointer_over_planet);

        app.apply(Intent::PointerMoved { x, y });
        app.apply(Intent::PointerLeft);
        assert!(!app.store.get(id).unwrap().hovering);
        assert!(!app.pointer_over_planet);
    }

    #[test]
    fn test_add_submit_creates_planet() {
        let mut app = AppState::new(VIEW, PlanetStore::new(), SizeSettings::default());
        app.apply(Intent::OpenAddForm);
        let effects = app.apply(Intent::SubmitForm(PlanetDraft::new("New idea", 6, 9)));
        assert_eq!(effects, Effects::PLANETS);
        assert!(app.form.is_none());
        assert_eq!(app.store.len(), 1);
        let planet = app.store.iter().next().unwrap();
        assert_eq!(planet.interval, 1.0);
    }

    #[test]
    fn test_edit_submit_updates_planet() {
        let (mut app, id) = app_with_centered_planet();
        let color = app.store.get(id).unwrap().color.clone();
        app.apply(Intent::OpenEditForm(id));
        let effects = app.apply(Intent::SubmitForm(PlanetDraft::new("Renamed", 2, 3)));

        assert_eq!(effects, Effects::PLANETS);
        let planet = app.store.get(id).unwrap();
        assert_eq!(planet.name, "Renamed");
        assert_eq!(planet.color, color);
        assert_eq!(planet.interval, 4.0);
        assert_eq!(app.store.len(), 1);
    }

    #[test]
    fn test_confirm_delete_clears_references() {
        let (mut app, id) = app_with_centered_planet();
        app.active = Some(id);
        app.selected = Some(id);
        app.apply(Intent::RequestDelete(id));
        let effects = app.apply(Intent::ConfirmDelete);

        assert_eq!(effects, Effects::PLANETS);
        assert!(app.store.is_empty());
        assert_eq!(app.active, None);
        assert_eq!(app.selected, None);
        assert!(app.confirm.is_none());
    }

    #[test]
    fn test_select_in_list_opens_edit() {
        let (mut app, id) = app_with_centered_planet();
        app.apply(Intent::SelectInList(id));
        assert_eq!(app.selected, Some(id));
        assert_eq!(app.editing(), Some(id));
        assert_eq!(app.form.as_ref().unwrap().name.text, "Launch");
    }

    #[test]
    fn test_bulk_adjust_noop_when_empty() {
        let mut app = AppState::new(VIEW, PlanetStore::new(), SizeSettings::default());
        assert_eq!(app.apply(Intent::AdjustImportance(1)), Effects::NONE);

        let (mut app, id) = app_with_centered_planet();
        assert_eq!(app.apply(Intent::AdjustUrgency(10)), Effects::PLANETS);
        assert_eq!(app.store.get(id).unwrap().urgency, 10);
        app.apply(Intent::AdjustInterval(-100));
        assert_eq!(app.store.get(id).unwrap().interval, 1.0);
    }

    #[test]
    fn test_size_settings_intents() {
        let mut app = AppState::new(VIEW, PlanetStore::new(), SizeSettings::default());
        assert_eq!(app.apply(Intent::SetMinSize(20)), Effects::SETTINGS);
        assert_eq!(app.apply(Intent::SetMaxSize(60)), Effects::SETTINGS);
        assert_eq!(app.settings.min_percent(), 20);
        assert_eq!(app.settings.max_percent(), 60);
    }

    #[test]
    fn test_tick_prunes_dangling_selection() {
        let (mut app, id) = app_with_centered_planet();
        app.active = Some(id);
        app.selected = Some(id);
        app.apply(Intent::OpenEditForm(id));
        app.store.delete(id);

        app.tick(1.0);
        assert_eq!(app.active, None);
        assert_eq!(app.selected, None);
        assert!(app.form.is_none());
    }

    #[test]
    fn test_tick_advances_planets() {
        let (mut app, id) = app_with_centered_planet();
        let before = app.store.get(id).unwrap().progress;
        app.tick(0.0);
        assert!(app.store.get(id).unwrap().progress > before);
    }

    #[test]
    fn test_import_replaces_everything() {
        let (mut app, id) = app_with_centered_planet();
        app.active = Some(id);

        let mut incoming = PlanetStore::new();
        incoming.create(PlanetDraft::new("A", 1, 1));
        incoming.create(PlanetDraft::new("B", 2, 2));
        let profile = ImportedProfile {
            settings: Some(SettingsRecord { min: Some(0.3), max: None }),
            planets: incoming.iter().cloned().collect(),
        };

        assert_eq!(app.apply(Intent::ImportProfile(profile)), Effects::BOTH);
        assert_eq!(app.store.len(), 2);
        assert!(!app.store.contains(id));
        assert_eq!(app.active, None);
        assert_eq!(app.settings.min, 0.3);
        assert_eq!(app.settings.max, 0.85);
        assert!(app.status.is_some());
    }

    #[test]
    fn test_status_expires() {
        let mut app = AppState::new(VIEW, PlanetStore::new(), SizeSettings::default());
        app.tick(10.0);
        app.apply(Intent::ShowStatus("hi".into()));
        app.tick(12.0);
        assert!(app.status.is_some());
        app.tick(13.5);
        assert!(app.status.is_none());
    }

    #[test]
    fn test_background_planet_not_tappable() {
        let (mut app, id) = app_with_centered_planet();
        app.store.get_mut(id).unwrap().phase = Phase::Background;
        let (x, y) = center_of(&app, id);
        app.apply(Intent::Tap { x, y });
        assert_eq!(app.active, None);
    }

    #[test]
    fn test_effects_merge() {
        assert_eq!(Effects::PLANETS.merge(Effects::SETTINGS), Effects::BOTH);
        assert_eq!(Effects::NONE.merge(Effects::NONE), Effects::NONE);
    }

    #[test]
    fn test_resize_regenerates_starfield() {
        let mut app = AppState::new(VIEW, PlanetStore::new(), SizeSettings::default());
        assert_eq!(app.starfield.stars.len(), star_count(VIEW));

        let wide = Viewport::new(2000.0, 1000.0);
        app.observe_viewport(wide, 1.0);
        // Pending until the next frame
        assert_eq!(app.current_viewport(), VIEW);
        assert_eq!(app.starfield.stars.len(), star_count(VIEW));

        app.observe_viewport(wide, 1.016);
        assert_eq!(app.current_viewport(), wide);
        assert_eq!(app.starfield.stars.len(), star_count(wide));
        assert!(app.starfield.stars.iter().all(|s| s.x >= 0.0 && s.x <= wide.width && s.y >= 0.0 && s.y <= wide.height));
    }
}
