//! Ramen Catch entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    use ramen_catch::Settings;
    use ramen_catch::audio::AudioManager;
    use ramen_catch::consts::*;
    use ramen_catch::feedback::{ShellEffect, Sparkles, react, round_start_effects};
    use ramen_catch::hud::{EndScreen, score_text};
    use ramen_catch::renderer::{CanvasRenderer, FrameView, build_frame};
    use ramen_catch::sim::{RoundConfig, RoundState, TickInput, autopilot, init_round, tick};

    const HIDDEN: &str = "gameUI hidden";
    const SHOWN: &str = "gameUI";

    /// Browser shell holding the round and everything it drives
    struct Shell {
        round: Option<RoundState>,
        renderer: CanvasRenderer,
        audio: AudioManager,
        settings: Settings,
        sparkles: Sparkles,
        /// Visual-only RNG, kept apart from the round's
        fx_rng: Pcg32,
        score_label: String,
        input: TickInput,
        idle_mode: bool,
        last_time: f64,
        running: bool,
    }

    impl Shell {
        fn new(renderer: CanvasRenderer, settings: Settings) -> Self {
            let mut audio = AudioManager::new();
            audio.set_volume(settings.effective_sfx_volume());
            audio.set_music_volume(settings.effective_music_volume());
            Self {
                round: None,
                renderer,
                audio,
                sparkles: Sparkles::new(settings.max_sparkles()),
                settings,
                fx_rng: Pcg32::seed_from_u64(js_sys::Date::now() as u64),
                score_label: score_text(0),
                input: TickInput::default(),
                idle_mode: false,
                last_time: 0.0,
                running: false,
            }
        }

        /// Start a fresh round; returns false if the round could not start
        fn start_round(&mut self, seed: u64) -> bool {
            match init_round(RoundConfig::default(), seed) {
                Ok(round) => {
                    self.round = Some(round);
                    self.sparkles.clear();
                    self.last_time = 0.0;
                    self.running = true;
                    for effect in round_start_effects() {
                        self.apply(effect);
                    }
                    log::info!("Round started with seed: {}", seed);
                    true
                }
                Err(err) => {
                    log::error!("Cannot start round: {}", err);
                    false
                }
            }
        }

        /// Advance one animation frame
        fn update(&mut self, time: f64) {
            let Some(round) = self.round.as_mut() else {
                return;
            };

            // Calculate delta time
            let elapsed_ms = if self.last_time > 0.0 {
                ((time - self.last_time) as f32).min(MAX_FRAME_MS)
            } else {
                FRAME_MS
            };
            self.last_time = time;

            let input = if self.idle_mode {
                autopilot(round, 4.0)
            } else {
                self.input
            };
            let events = tick(round, elapsed_ms, &input);
            self.sparkles.update(elapsed_ms / 1000.0);

            for effect in react(&events) {
                self.apply(effect);
            }
        }

        fn apply(&mut self, effect: ShellEffect) {
            match effect {
                ShellEffect::PlaySound(cue) => self.audio.play(cue),
                ShellEffect::SparkleBurst { at } => {
                    let offset = self
                        .round
                        .as_ref()
                        .map(|r| r.player().size / 2.0)
                        .unwrap_or_default();
                    self.sparkles.emit(at + offset, &mut self.fx_rng);
                }
                ShellEffect::UpdateScore(label) => self.score_label = label,
                ShellEffect::StartMusic => {
                    let seconds = self
                        .round
                        .as_ref()
                        .map(|r| r.config().duration_ms as f64 / 1000.0)
                        .unwrap_or_default();
                    self.audio.start_music(seconds);
                }
                ShellEffect::StopMusic => self.audio.stop_music(),
                ShellEffect::StopLoop => self.running = false,
                ShellEffect::ShowEndScreen(screen) => {
                    log::info!("Round over: {} (score {})", screen.verdict, screen.score);
                    show_end_screen(&screen);
                }
            }
        }

        /// Push the stored volumes into the audio manager
        fn apply_volumes(&mut self) {
            self.audio.set_volume(self.settings.effective_sfx_volume());
            self.audio
                .set_music_volume(self.settings.effective_music_volume());
        }

        /// Render the current frame
        fn render(&self) {
            let Some(round) = &self.round else { return };
            let view = FrameView {
                sparkles: &self.sparkles,
                score_label: &self.score_label,
                show_bounds: self.settings.show_bounds,
            };
            self.renderer.draw(&build_frame(round, &view));
        }
    }

    fn document() -> Option<Document> {
        web_sys::window().and_then(|w| w.document())
    }

    fn set_visible(document: &Document, id: &str, visible: bool) {
        match document.get_element_by_id(id) {
            Some(el) => {
                let _ = el.set_attribute("class", if visible { SHOWN } else { HIDDEN });
            }
            None => log::warn!("Missing #{} element", id),
        }
    }

    fn show_end_screen(screen: &EndScreen) {
        let Some(document) = document() else { return };
        if let Some(el) = document.get_element_by_id("end-verdict") {
            el.set_text_content(Some(&screen.verdict));
        }
        if let Some(el) = document.get_element_by_id("end-score") {
            el.set_text_content(Some(&screen.score_text()));
        }
        set_visible(&document, "end-screen", true);
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        if let Err(err) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("Failed to init logger: {}", err).into());
        }

        log::info!("Ramen Catch starting...");

        let Some(document) = document() else {
            log::error!("No document");
            return;
        };

        let Some(canvas) = document
            .get_element_by_id("canvas")
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        else {
            log::error!("No #canvas element");
            return;
        };

        let Some(renderer) =
            CanvasRenderer::new(&canvas, BOARD_WIDTH as u32, BOARD_HEIGHT as u32)
        else {
            log::error!("Canvas 2D context unavailable");
            return;
        };

        let settings = Settings::load();
        let shell = Rc::new(RefCell::new(Shell::new(renderer, settings)));

        set_visible(&document, "start-screen", true);
        set_visible(&document, "end-screen", false);

        setup_input_handlers(shell.clone());
        setup_button("start-btn", shell.clone());
        setup_button("restart-btn", shell);

        log::info!("Ramen Catch ready");
    }

    fn setup_button(id: &str, shell: Rc<RefCell<Shell>>) {
        let Some(btn) = document().and_then(|doc| doc.get_element_by_id(id)) else {
            log::warn!("Missing #{} button", id);
            return;
        };

        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            let seed = js_sys::Date::now() as u64;
            let started = {
                let mut s = shell.borrow_mut();
                s.audio.resume();
                // A second click while a round runs is ignored
                !s.running && s.start_round(seed)
            };
            if started {
                if let Some(document) = document() {
                    set_visible(&document, "start-screen", false);
                    set_visible(&document, "end-screen", false);
                }
                request_animation_frame(shell.clone());
            }
        });
        let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_input_handlers(shell: Rc<RefCell<Shell>>) {
        let Some(window) = web_sys::window() else { return };

        // Key down
        {
            let shell = shell.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut s = shell.borrow_mut();
                match event.key().as_str() {
                    "ArrowLeft" | "a" | "A" => {
                        event.prevent_default();
                        s.input.move_left = true;
                    }
                    "ArrowRight" | "d" | "D" => {
                        event.prevent_default();
                        s.input.move_right = true;
                    }
                    "i" | "I" => {
                        s.idle_mode = !s.idle_mode;
                        log::info!("Idle mode: {}", s.idle_mode);
                    }
                    "b" | "B" => {
                        s.settings.show_bounds = !s.settings.show_bounds;
                        s.settings.save();
                    }
                    "m" | "M" => {
                        s.settings.muted = !s.settings.muted;
                        s.apply_volumes();
                        s.settings.save();
                        log::info!("Muted: {}", s.settings.muted);
                    }
                    "p" | "P" => {
                        s.settings.particles = !s.settings.particles;
                        let cap = s.settings.max_sparkles();
                        s.sparkles.set_cap(cap);
                        s.settings.save();
                    }
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up
        {
            let shell = shell.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut s = shell.borrow_mut();
                match event.key().as_str() {
                    "ArrowLeft" | "a" | "A" => s.input.move_left = false,
                    "ArrowRight" | "d" | "D" => s.input.move_right = false,
                    _ => {}
                }
            });
            let _ =
                window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Window blur (keyup never arrives)
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                shell.borrow_mut().input = TickInput::default();
            });
            let _ =
                window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(shell: Rc<RefCell<Shell>>) {
        let Some(window) = web_sys::window() else { return };
        let closure = Closure::once(move |time: f64| {
            game_loop(shell, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(shell: Rc<RefCell<Shell>>, time: f64) {
        let running = {
            let mut s = shell.borrow_mut();
            s.update(time);
            s.render();
            s.running
        };

        if running {
            request_animation_frame(shell);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::time::{SystemTime, UNIX_EPOCH};

    env_logger::init();
    log::info!("Ramen Catch (native) starting...");
    log::info!("Native mode is a headless demo - run with `trunk serve` for the web version");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default();

    if let Err(err) = demo_round(seed) {
        log::error!("Demo round failed: {}", err);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Play one round on autopilot at a fixed 60 Hz step
#[cfg(not(target_arch = "wasm32"))]
fn demo_round(seed: u64) -> Result<(), ramen_catch::ConfigError> {
    use ramen_catch::consts::FRAME_MS;
    use ramen_catch::feedback::{ShellEffect, react};
    use ramen_catch::sim::{RoundConfig, autopilot, init_round, tick};

    let mut round = init_round(RoundConfig::default(), seed)?;
    log::info!("Round started with seed: {}", seed);

    loop {
        let input = autopilot(&round, 4.0);
        let events = tick(&mut round, FRAME_MS, &input);
        for effect in react(&events) {
            match effect {
                ShellEffect::UpdateScore(label) => {
                    log::debug!("{} at {:.1}s left", label, round.remaining_secs());
                }
                ShellEffect::ShowEndScreen(screen) => {
                    log::info!("Game Over - {} Final Score: {}", screen.verdict, screen.score);
                    println!("{} Final Score: {}", screen.verdict, screen.score);
                }
                _ => {}
            }
        }
        if round.is_over() {
            return Ok(());
        }
    }
}
