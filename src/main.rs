//! Planet Ideas: ideas and tasks drawn as orbiting planets
//!
//! Each idea is a planet. Importance sets its size, urgency how slowly it
//! crosses the sky, and the interval how long it pauses between passes.
//! Planets alternate between a near (foreground) and far (background) pass.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod app;
mod config;
mod hit;
mod planet;
mod profile;
mod render;
mod storage;
mod store;
mod ui;
mod viewport;
#[cfg(target_arch = "wasm32")]
mod web;

use macroquad::prelude::*;
use macroquad::miniquad::{self, CursorIcon};

use app::{AppState, Effects, Intent};
use profile::{ImportedProfile, ProfileError};
use storage::LocalStorage;
use store::PlanetStore;
use ui::{
    draw_add_button, draw_confirm, draw_form, draw_panel_toggle, draw_side_panel, ConfirmAction, FormAction,
    MouseState, Rect, SidePanelAction, UiContext,
};
use viewport::Viewport;

fn window_conf() -> Conf {
    Conf {
        window_title: "Planet Ideas".to_owned(),
        window_width: 1280,
        window_height: 800,
        window_resizable: true,
        high_dpi: true,
        #[cfg(not(target_arch = "wasm32"))]
        fullscreen: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    #[cfg(not(target_arch = "wasm32"))]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("=== Planet Ideas v{} ===", VERSION);

    // Seed once so palette picks and orbit paths differ between runs
    macroquad::rand::srand((miniquad::date::now() * 1000.0) as u64);

    let storage = LocalStorage::with_base_dir(config::data_dir());
    log::info!("Data directory: {}", storage.base_dir().display());

    let mut store = PlanetStore::new();
    store.replace_all(profile::load_planets(&storage));
    let settings = profile::load_settings(&storage);

    let mut app = AppState::new(current_viewport(), store, settings);
    let mut ui_ctx = UiContext::new();
    let mut last_mouse = mouse_position();
    let mut cursor = CursorIcon::Default;

    loop {
        let now = miniquad::date::now();
        app.observe_viewport(current_viewport(), now);
        app.tick(now);
        let viewport = app.current_viewport();

        // Canvas first, chrome on top
        app.panel_layout = render::draw_scene(&app.store, &app.starfield, viewport, &app.settings, app.active);

        let mouse_pos = mouse_position();
        let mouse_state = MouseState {
            x: mouse_pos.0,
            y: mouse_pos.1,
            left_down: is_mouse_button_down(MouseButton::Left),
            left_pressed: is_mouse_button_pressed(MouseButton::Left),
            left_released: is_mouse_button_released(MouseButton::Left),
            scroll: mouse_wheel().1,
            moved: mouse_pos != last_mouse,
        };
        last_mouse = mouse_pos;
        ui_ctx.begin_frame(mouse_state);

        let mut intents = draw_chrome(&mut ui_ctx, &mut app, viewport);
        #[cfg(target_arch = "wasm32")]
        intents.extend(poll_import());

        // Whatever the chrome did not take belongs to the canvas
        if ui_ctx.over_ui() || app.modal_open() {
            intents.push(Intent::PointerLeft);
        } else {
            intents.push(Intent::PointerMoved { x: mouse_state.x, y: mouse_state.y });
            if mouse_state.left_pressed {
                intents.push(Intent::Tap { x: mouse_state.x, y: mouse_state.y });
            }
        }

        let mut effects = Effects::default();
        for intent in intents {
            effects = effects.merge(app.apply(intent));
        }
        persist(&storage, &app, effects);

        let wanted = if app.pointer_over_planet { CursorIcon::Pointer } else { CursorIcon::Default };
        if wanted != cursor {
            miniquad::window::set_mouse_cursor(wanted);
            cursor = wanted;
        }

        next_frame().await;
    }
}

fn current_viewport() -> Viewport {
    Viewport::new(screen_width(), screen_height())
}

/// Draw the side panel, buttons and any open modal; collect what the user asked for
fn draw_chrome(ctx: &mut UiContext, app: &mut AppState, viewport: Viewport) -> Vec<Intent> {
    let mut intents = Vec::new();

    // Chrome under an open modal is drawn but takes no input
    let suspended = app.modal_open().then(|| ctx.suspend_input());

    if app.side_panel.open {
        let action = draw_side_panel(ctx, &mut app.side_panel, &app.store, &app.settings, app.selected, viewport);
        if let Some(action) = action {
            intents.extend(side_panel_intent(action, app));
        }
    }
    if draw_panel_toggle(ctx, app.side_panel.open) {
        intents.push(Intent::ToggleSidePanel);
    }
    if draw_add_button(ctx, viewport) {
        intents.push(Intent::OpenAddForm);
    }
    if let Some(live) = suspended {
        ctx.resume_input(live);
    }

    if let Some(form) = app.form.as_mut() {
        match draw_form(ctx, form, viewport) {
            Some(FormAction::Submit(draft)) => intents.push(Intent::SubmitForm(draft)),
            Some(FormAction::Cancel) => intents.push(Intent::CloseForm),
            None => {}
        }
    }

    // Confirmation sits above the form
    if let Some(confirm) = app.confirm.as_ref() {
        match draw_confirm(ctx, confirm, viewport) {
            Some(ConfirmAction::Confirm) => intents.push(Intent::ConfirmDelete),
            Some(ConfirmAction::Cancel) => intents.push(Intent::CancelDelete),
            None => {}
        }
    }

    if let Some(status) = app.status.as_ref() {
        draw_status(&status.text, viewport);
    }

    intents
}

fn side_panel_intent(action: SidePanelAction, app: &AppState) -> Option<Intent> {
    match action {
        SidePanelAction::SetMinPercent(percent) => Some(Intent::SetMinSize(percent)),
        SidePanelAction::SetMaxPercent(percent) => Some(Intent::SetMaxSize(percent)),
        SidePanelAction::AdjustImportance(delta) => Some(Intent::AdjustImportance(delta)),
        SidePanelAction::AdjustUrgency(delta) => Some(Intent::AdjustUrgency(delta)),
        SidePanelAction::AdjustInterval(delta) => Some(Intent::AdjustInterval(delta)),
        SidePanelAction::Select(id) => Some(Intent::SelectInList(id)),
        SidePanelAction::Delete(id) => Some(Intent::RequestDelete(id)),
        SidePanelAction::SaveProfile => export_profile(app),
        SidePanelAction::LoadProfile => import_profile(),
    }
}

fn now_millis() -> i64 {
    (miniquad::date::now() * 1000.0) as i64
}

/// Profile JSON for the current planets and settings, or a status explaining why not
fn build_export(app: &AppState, now_ms: i64) -> Result<String, Intent> {
    profile::export_profile(&app.store, &app.settings, now_ms).map_err(|e| {
        log::error!("Failed to build profile: {}", e);
        Intent::ShowStatus(format!("Export failed: {}", e))
    })
}

/// Turn a read-and-parsed profile file into the intent that applies it
fn import_intent(source: &str, parsed: Result<ImportedProfile, ProfileError>) -> Intent {
    match parsed {
        Ok(imported) => {
            log::info!("Imported {} planets from {}", imported.planets.len(), source);
            Intent::ImportProfile(imported)
        }
        Err(e) => {
            log::error!("Failed to load profile {}: {}", source, e);
            Intent::ShowStatus("Failed to load profile. Invalid file format.".to_owned())
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn export_profile(app: &AppState) -> Option<Intent> {
    let now_ms = now_millis();
    let json = match build_export(app, now_ms) {
        Ok(json) => json,
        Err(status) => return Some(status),
    };

    let path = rfd::FileDialog::new()
        .add_filter("Profile", &["json"])
        .set_file_name(profile::export_file_name(now_ms))
        .save_file()?;

    match std::fs::write(&path, json) {
        Ok(()) => {
            log::info!("Exported profile to {}", path.display());
            let name = path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
            Some(Intent::ShowStatus(format!("Saved {}", name)))
        }
        Err(e) => {
            log::error!("Failed to write {}: {}", path.display(), e);
            Some(Intent::ShowStatus(format!("Export failed: {}", e)))
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn import_profile() -> Option<Intent> {
    let path = rfd::FileDialog::new().add_filter("Profile", &["json"]).pick_file()?;

    let parsed = std::fs::read_to_string(&path)
        .map_err(|e| ProfileError::Storage(e.into()))
        .and_then(|json| profile::parse_profile(&json));
    Some(import_intent(&path.display().to_string(), parsed))
}

#[cfg(target_arch = "wasm32")]
fn export_profile(app: &AppState) -> Option<Intent> {
    let now_ms = now_millis();
    let json = match build_export(app, now_ms) {
        Ok(json) => json,
        Err(status) => return Some(status),
    };
    let name = profile::export_file_name(now_ms);
    web::download(&name, &json);
    log::info!("Exported profile as {}", name);
    Some(Intent::ShowStatus(format!("Downloaded {}", name)))
}

/// Opens the picker; the file is picked up by [`poll_import`] on a later frame
#[cfg(target_arch = "wasm32")]
fn import_profile() -> Option<Intent> {
    web::request_import();
    None
}

#[cfg(target_arch = "wasm32")]
fn poll_import() -> Option<Intent> {
    let read = web::take_import()?;
    let parsed = read.map_err(ProfileError::from).and_then(|json| profile::parse_profile(&json));
    Some(import_intent("upload", parsed))
}

/// Write out whatever the last batch of intents changed
fn persist(storage: &LocalStorage, app: &AppState, effects: Effects) {
    if effects.save_planets {
        report_save("planets", profile::save_planets(storage, &app.store));
    }
    if effects.save_settings {
        report_save("settings", profile::save_settings(storage, &app.settings));
    }
}

fn report_save(what: &str, result: Result<(), ProfileError>) {
    if let Err(e) = result {
        log::error!("Failed to save {}: {}", what, e);
    }
}

/// Toast along the bottom edge
fn draw_status(text: &str, viewport: Viewport) {
    let w = render::text::measure_width(text, ui::FONT_SIZE_CONTENT) + 32.0;
    let h = 36.0;
    let r = Rect::new((viewport.width - w) / 2.0, viewport.height - h - 110.0, w, h);
    ui::draw_rounded_rect(r.x, r.y, r.w, r.h, ui::PANEL_RADIUS, ui::PANEL_BG);
    ui::draw_text_centered(text, &r, ui::FONT_SIZE_CONTENT, ui::TEXT_COLOR);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::StorageError;

    #[test]
    fn test_import_intent_applies_valid_profile() {
        let parsed = profile::parse_profile(r##"{"planets":[{"id":1,"name":"Ship","importance":4,"urgency":2,"color":"#FF6B6B"}]}"##);
        match import_intent("test.json", parsed) {
            Intent::ImportProfile(imported) => assert_eq!(imported.planets.len(), 1),
            other => panic!("unexpected intent {:?}", other),
        }
    }

    #[test]
    fn test_import_intent_reports_bad_file() {
        let read = Err(ProfileError::Storage(StorageError::Io("file too large".into())));
        assert!(matches!(
            import_intent("upload", read),
            Intent::ShowStatus(text) if text == "Failed to load profile. Invalid file format."
        ));

        let parsed = profile::parse_profile("not json");
        assert!(matches!(import_intent("upload", parsed), Intent::ShowStatus(_)));
    }
}
