//! Szenen-Editor.
//!
//! Editor-Viewport mit Klick- und Rechteck-Selektion, Kamera-Pan/Zoom
//! und Debug-Overlays der selektierten Entitäten.

use eframe::egui;
use scene_editor::demo::demo_scene;
use scene_editor::{ui, AppController, AppIntent, AppState, EditorOptions, InputEvent};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Szenen-Editor v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 720.0])
                .with_title("Szenen-Editor"),
            ..Default::default()
        };

        eframe::run_native(
            "Szenen-Editor",
            options,
            Box::new(|_cc| Ok(Box::new(EditorApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct EditorApp {
    state: AppState,
    controller: AppController,
    input: ui::ViewportInput,
    show_options_dialog: bool,
}

impl EditorApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let editor_options = EditorOptions::load_from_file(&config_path);

        let mut state = AppState::new();
        state.options = editor_options;

        let mut app = Self {
            state,
            controller: AppController::new(),
            input: ui::ViewportInput::new(),
            show_options_dialog: false,
        };
        app.process_events(vec![AppIntent::SceneLoaded {
            scene: Box::new(demo_scene()),
        }]);
        app
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Rohe Eingaben zuerst, damit der Selektionszustand im selben Frame aktuell ist
        let inputs = self.input.collect_events(ctx);
        let has_input = inputs
            .iter()
            .any(|e| !matches!(e, InputEvent::WindowResized { .. }));
        self.process_input(inputs);

        let events = self.collect_ui_events(ctx);
        let has_meaningful_events = has_input || !events.is_empty();
        self.process_events(events);

        let scene = self.controller.build_render_scene(&self.state);
        ui::render_viewport(ctx, &scene);

        self.maybe_request_repaint(ctx, has_meaningful_events);
    }
}

impl EditorApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        events.extend(ui::render_menu(
            ctx,
            &self.state,
            &mut self.show_options_dialog,
        ));
        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_properties_panel(ctx, &self.state));
        events.extend(ui::show_console(ctx, &self.state));
        events.extend(ui::show_options_dialog(
            ctx,
            &self.state,
            &mut self.show_options_dialog,
        ));

        events
    }

    fn process_input(&mut self, inputs: Vec<InputEvent>) {
        for input in &inputs {
            if let Err(e) = self.controller.handle_input(&mut self.state, input) {
                log::error!("Input handling failed: {:#}", e);
            }
        }
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }

    fn maybe_request_repaint(&self, ctx: &egui::Context, has_meaningful_events: bool) {
        if has_meaningful_events
            || ctx.input(|i| i.pointer.is_moving())
            || self.state.pointer.is_dragging()
        {
            ctx.request_repaint();
        }
    }
}
