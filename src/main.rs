//! Grid Muncher entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod web_game {
    use std::cell::RefCell;
    use std::rc::{Rc, Weak};

    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, Document, KeyboardEvent};

    use grid_muncher::platform::web::{BrowserFrames, canvas_context};
    use grid_muncher::renderer::Renderer;
    use grid_muncher::sim::{Direction, GameEvent, GameState, update};
    use grid_muncher::{AnimationLoop, InputHandler, Settings};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        input: InputHandler,
        frames: AnimationLoop<i32>,
        host: BrowserFrames,
        renderer: Renderer,
        context: CanvasRenderingContext2d,
        document: Document,
        started_at: f64,
    }

    impl Game {
        fn start(&mut self) {
            self.started_at = js_sys::Date::now();
            self.renderer.draw(&mut self.context, &self.state, 0.0);
            self.frames.start(&mut self.host);
            log::info!("Animation loop started");
        }

        fn stop(&mut self) {
            self.frames.stop(&mut self.host);
            log::info!("Animation loop stopped at frame {}", self.frames.frame());
        }

        /// Refresh callback: tick, draw, then react to what happened
        fn on_animation_frame(&mut self) {
            let Some(frame) = self.frames.on_frame(&mut self.host) else {
                return;
            };

            let input = self.input.tick_input();
            if update(&mut self.state, &input, frame) {
                let phase = (frame / self.state.tick_divisor) as f32;
                self.renderer.draw(&mut self.context, &self.state, phase);
            }

            for event in self.state.drain_events() {
                self.handle_event(event);
            }
        }

        fn handle_event(&mut self, event: GameEvent) {
            match event {
                GameEvent::Collected { score, .. } => self.update_score(score),
                GameEvent::SessionComplete { score } => {
                    let seconds = (js_sys::Date::now() - self.started_at) / 1000.0;
                    log::info!("All points collected: score {} in {:.1}s", score, seconds);
                    self.update_score(score);
                    self.show_completion(score);
                    self.stop();
                }
            }
        }

        /// Update the score readout, if the page has one
        fn update_score(&self, score: u32) {
            if let Some(el) = self.document.get_element_by_id("score") {
                el.set_text_content(Some(&score.to_string()));
            }
        }

        /// Reveal the completion overlay
        fn show_completion(&self, score: u32) {
            if let Some(el) = self.document.get_element_by_id("complete") {
                let _ = el.set_attribute("class", "");
            }
            if let Some(el) = self.document.get_element_by_id("complete-score") {
                el.set_text_content(Some(&score.to_string()));
            }
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Grid Muncher starting...");

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let settings = Settings::load();
        let (_canvas, context) = canvas_context(&document, "canvas", settings.canvas_size)
            .inspect_err(|e| log::error!("Canvas setup failed: {:?}", e))?;

        let game = Rc::new_cyclic(|weak: &Weak<RefCell<Game>>| {
            let weak = weak.clone();
            let host = BrowserFrames::new(window.clone(), move |_time: f64| {
                if let Some(game) = weak.upgrade() {
                    game.borrow_mut().on_animation_frame();
                }
            });
            RefCell::new(Game {
                state: GameState::with_tick_divisor(settings.column_count, settings.tick_divisor),
                input: InputHandler::new(),
                frames: AnimationLoop::new(),
                host,
                renderer: Renderer::new(&settings),
                context,
                document: document.clone(),
                started_at: 0.0,
            })
        });

        log::info!(
            "Session ready: {}x{} grid, {} points",
            settings.column_count,
            settings.column_count,
            game.borrow().state.initial_collectibles()
        );

        setup_input_handlers(&window, game.clone())?;

        game.borrow_mut().start();
        Ok(())
    }

    fn setup_input_handlers(window: &web_sys::Window, game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            let key = event.key();
            if Direction::from_key(&key).is_none() {
                return;
            }
            // Keep arrow keys from scrolling the page
            event.prevent_default();
            if let Some(direction) = game.borrow_mut().input.handle_key(&key) {
                log::debug!("Pending direction: {:?}", direction);
            }
        });
        window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    web_game::run()
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use grid_muncher::renderer::{CountingSurface, Renderer};
    use grid_muncher::sim::{GameEvent, GameState, update};
    use grid_muncher::{AnimationLoop, FrameHost, InputHandler, Settings};

    /// Frame host that is always ready; the caller pumps frames itself
    #[derive(Default)]
    struct ImmediateFrames {
        next: u64,
    }

    impl FrameHost for ImmediateFrames {
        type Handle = u64;

        fn request_frame(&mut self) -> Option<u64> {
            self.next += 1;
            Some(self.next)
        }

        fn cancel_frame(&mut self, handle: u64) {
            log::debug!("Cancelled frame {}", handle);
        }
    }

    /// Play a full session along the grid's sweep route
    pub fn run() {
        let settings = Settings::load();
        let mut state = GameState::with_tick_divisor(settings.column_count, settings.tick_divisor);
        let renderer = Renderer::new(&settings);
        let mut surface = CountingSurface::new();
        let mut input = InputHandler::new();
        let mut route = state.grid.sweep_route().into_iter();

        let mut host = ImmediateFrames::default();
        let mut frames = AnimationLoop::new();
        frames.start(&mut host);

        while let Some(frame) = frames.on_frame(&mut host) {
            if state.is_tick_frame(frame) {
                match route.next() {
                    Some(direction) => {
                        input.handle_key(direction.key());
                    }
                    None if !state.is_complete() => {
                        log::warn!("Route exhausted with {} points left", state.remaining());
                        frames.stop(&mut host);
                        break;
                    }
                    None => {}
                }
            }

            if update(&mut state, &input.tick_input(), frame) {
                let phase = (frame / state.tick_divisor) as f32;
                renderer.draw(&mut surface, &state, phase);
            }

            for event in state.drain_events() {
                match event {
                    GameEvent::Collected { cell, score } => {
                        log::info!("Collected ({}, {}) -> score {}", cell.x, cell.y, score);
                    }
                    GameEvent::SessionComplete { score } => {
                        log::info!(
                            "Session complete at frame {}: score {}/{}",
                            frame,
                            score,
                            state.initial_collectibles()
                        );
                        frames.stop(&mut host);
                    }
                }
            }
        }

        log::info!(
            "Drew {} rects, {} arcs over {} ticks",
            surface.rects,
            surface.arcs,
            state.tick_count
        );
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Grid Muncher (native) starting...");
    log::info!("Native mode runs a headless demo - run with `trunk serve` for the web version");

    headless::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
