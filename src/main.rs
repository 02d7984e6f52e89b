//! Berry Chase entry point
//!
//! Browser builds wire the DOM (canvas, buttons, pointer) to the game and run
//! a requestAnimationFrame loop. Native builds play a headless demo round with
//! the autopilot and keep the high score in a JSON file.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, HtmlElement, HtmlInputElement, MouseEvent};

    use berry_chase::Game;
    use berry_chase::platform::web::{CanvasSurface, HtmlAudioSink, LocalStorageStore};
    use berry_chase::sim::GamePhase;

    const MUSIC_SRC: &str = "Pan Sever.mp3";
    const GAME_OVER_SRC: &str = "gamover.mp3";

    struct App {
        game: Game,
        surface: CanvasSurface,
        last_time: Option<f64>,
        last_phase: GamePhase,
    }

    fn document() -> Option<Document> {
        web_sys::window()?.document()
    }

    fn set_display(doc: &Document, id: &str, value: &str) {
        if let Some(el) = doc
            .get_element_by_id(id)
            .and_then(|e| e.dyn_into::<HtmlElement>().ok())
        {
            let _ = el.style().set_property("display", value);
        }
    }

    fn set_text(doc: &Document, id: &str, text: &str) {
        if let Some(el) = doc.get_element_by_id(id) {
            el.set_text_content(Some(text));
        }
    }

    fn on_click(doc: &Document, id: &str, handler: impl FnMut(MouseEvent) + 'static) {
        let Some(el) = doc.get_element_by_id(id) else {
            log::warn!("Missing #{} element", id);
            return;
        };
        let closure = Closure::<dyn FnMut(MouseEvent)>::new(handler);
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    impl App {
        /// Per-frame work: advance time, draw, and mirror phase changes into the DOM
        fn frame(&mut self, time: f64) {
            let elapsed = self.last_time.map(|t| time - t).unwrap_or(0.0);
            self.last_time = Some(time);

            self.game.advance(elapsed);
            self.game.render(&mut self.surface);

            let phase = self.game.phase();
            if phase != self.last_phase {
                self.last_phase = phase;
                if phase == GamePhase::GameOver {
                    self.show_game_over();
                }
            }
        }

        fn show_game_over(&self) {
            let Some(doc) = document() else { return };
            set_text(&doc, "high-score", &self.game.high_score().to_string());
            set_text(
                &doc,
                "score-display",
                &format!("Your Score: {}", self.game.score()),
            );
            set_display(&doc, "game-over", "block");
        }
    }

    fn request_frame(f: &Closure<dyn FnMut(f64)>) {
        if let Some(window) = web_sys::window() {
            let _ = window.request_animation_frame(f.as_ref().unchecked_ref());
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);

        let Some(doc) = document() else {
            log::error!("No document - not running in a browser window");
            return;
        };
        let Some(canvas) = doc
            .get_element_by_id("game-canvas")
            .and_then(|e| e.dyn_into::<HtmlCanvasElement>().ok())
        else {
            log::error!("Missing #game-canvas");
            return;
        };

        let tuning = berry_chase::Tuning::default();
        let Some(surface) = CanvasSurface::new(
            &canvas,
            tuning.canvas_width as u32,
            tuning.canvas_height as u32,
        ) else {
            log::error!("Canvas 2D context unavailable");
            return;
        };

        let seed = js_sys::Date::now() as u64;
        let game = Game::new(
            seed,
            tuning,
            Box::new(LocalStorageStore::new()),
            Box::new(HtmlAudioSink::new(MUSIC_SRC, true)),
            Box::new(HtmlAudioSink::new(GAME_OVER_SRC, false)),
        );
        set_text(&doc, "high-score", &game.high_score().to_string());

        let app = Rc::new(RefCell::new(App {
            game,
            surface,
            last_time: None,
            last_phase: GamePhase::Idle,
        }));

        {
            let app = app.clone();
            let canvas_el = canvas.clone();
            on_click(&doc, "start-button", move |_| {
                if let Some(doc) = document() {
                    set_display(&doc, "start-button", "none");
                }
                let _ = canvas_el.style().set_property("display", "block");
                let mut a = app.borrow_mut();
                a.last_time = None;
                a.game.start();
            });
        }

        {
            let app = app.clone();
            on_click(&doc, "restart-button", move |_| {
                if let Some(doc) = document() {
                    set_display(&doc, "game-over", "none");
                }
                let mut a = app.borrow_mut();
                a.last_time = None;
                a.game.restart();
            });
        }

        {
            let app = app.clone();
            on_click(&doc, "toggle-music", move |_| {
                let playing = app.borrow_mut().game.toggle_music();
                if let Some(doc) = document() {
                    let label = if playing { "Pause Music" } else { "Play Music" };
                    set_text(&doc, "toggle-music", label);
                }
            });
        }

        if let Some(slider) = doc
            .get_element_by_id("volume-control")
            .and_then(|e| e.dyn_into::<HtmlInputElement>().ok())
        {
            let app = app.clone();
            let input = slider.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                if let Ok(v) = input.value().parse::<f32>() {
                    app.borrow_mut().game.set_music_volume(v);
                }
            });
            let _ = slider.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let app = app.clone();
            let canvas_el = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let rect = canvas_el.get_bounding_client_rect();
                let x = event.client_x() as f64 - rect.left();
                let y = event.client_y() as f64 - rect.top();
                app.borrow_mut().game.pointer_moved(x as f32, y as f32);
            });
            let _ = canvas.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // requestAnimationFrame loop
        let f: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
        let g = f.clone();
        *g.borrow_mut() = Some(Closure::new(move |time: f64| {
            app.borrow_mut().frame(time);
            if let Some(cb) = f.borrow().as_ref() {
                request_frame(cb);
            }
        }));
        if let Some(cb) = g.borrow().as_ref() {
            request_frame(cb);
        }

        log::info!("Berry Chase ready (seed {})", seed);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Store file for the native build (override with `BERRY_CHASE_STORE`)
#[cfg(not(target_arch = "wasm32"))]
const DEFAULT_STORE_PATH: &str = "berry_chase_store.json";

/// Demo rounds stop after this many frames (5 minutes at 60 fps)
#[cfg(not(target_arch = "wasm32"))]
const DEMO_MAX_FRAMES: u32 = 60 * 60 * 5;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use berry_chase::platform::native::JsonFileStore;
    use berry_chase::platform::{RecordingSurface, SilentSink};
    use berry_chase::sim::{GamePhase, autopilot};
    use berry_chase::{Game, Tuning};

    env_logger::init();
    log::info!("Berry Chase (native) starting a headless demo round...");

    let store_path =
        std::env::var("BERRY_CHASE_STORE").unwrap_or_else(|_| DEFAULT_STORE_PATH.to_string());
    let tuning = match std::env::var("BERRY_CHASE_TUNING") {
        Ok(path) => std::fs::read_to_string(&path)
            .ok()
            .and_then(|json| Tuning::from_json(&json))
            .unwrap_or_else(|| {
                log::warn!("Could not use tuning file {}, using defaults", path);
                Tuning::default()
            }),
        Err(_) => Tuning::default(),
    };
    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    let mut game = Game::new(
        seed,
        tuning,
        Box::new(JsonFileStore::open(&store_path)),
        Box::new(SilentSink::new("music")),
        Box::new(SilentSink::new("game over")),
    );
    let mut surface = RecordingSurface::default();
    let frame_ms = game.state.tuning.tick_ms;

    game.start();
    let mut frames = 0;
    while frames < DEMO_MAX_FRAMES && game.phase() == GamePhase::Running {
        if let Some(target) = autopilot::steer(&game.state, 6.0) {
            game.pointer_moved(target.x, target.y);
        }
        game.advance(frame_ms);
        game.render(&mut surface);
        frames += 1;
    }

    println!(
        "Demo finished after {} frames: score {}, level {}, high score {} ({:?})",
        frames,
        game.score(),
        game.level(),
        game.high_score(),
        game.phase()
    );
}
