//! Lava Runner entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::HtmlCanvasElement;

    use lava_runner::levels::GAME_LEVELS;
    use lava_runner::platform::KeyTracker;
    use lava_runner::platform::web::install_key_listeners;
    use lava_runner::render::{CanvasRenderer, Renderer};
    use lava_runner::{Campaign, CampaignEvent, GameConfig, LevelRun, LevelSignal};

    /// Game instance holding all state
    struct Game {
        config: GameConfig,
        campaign: Campaign,
        run: LevelRun,
        renderer: CanvasRenderer,
        keys: Rc<RefCell<KeyTracker>>,
        last_time: f64,
    }

    impl Game {
        /// Run one frame. Returns false once the campaign is complete.
        fn frame(&mut self, time: f64) -> bool {
            let dt = if self.last_time > 0.0 {
                self.config.clamp_dt((time - self.last_time) / 1000.0)
            } else {
                0.0
            };
            self.last_time = time;

            let keys = self.keys.borrow().snapshot();
            let signal = self.run.step(dt, &keys, &self.config);
            self.renderer.draw(self.run.state());

            let LevelSignal::Finished(status) = signal else {
                return true;
            };
            self.renderer.clear();
            match self.campaign.finish(status) {
                CampaignEvent::NextLevel(_) | CampaignEvent::Retry(_) => {
                    self.run = self.campaign.start_run();
                    true
                }
                CampaignEvent::Completed => {
                    log::info!("You've won!");
                    false
                }
            }
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Lava Runner starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or("no canvas")?
            .dyn_into()?;

        let config = GameConfig::load();
        let seed = js_sys::Date::now() as u64;
        let campaign = Campaign::from_plans_seeded(GAME_LEVELS, &config.legend, seed)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        let renderer =
            CanvasRenderer::new(canvas, config.scale).ok_or("canvas has no 2d context")?;

        let keys = Rc::new(RefCell::new(KeyTracker::new()));
        install_key_listeners(&window, Rc::clone(&keys));

        let run = campaign.start_run();
        let game = Rc::new(RefCell::new(Game {
            config,
            campaign,
            run,
            renderer,
            keys,
            last_time: 0.0,
        }));

        request_animation_frame(game);

        log::info!("Lava Runner running!");
        Ok(())
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", e);
        }
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        let keep_going = game.borrow_mut().frame(time);
        if keep_going {
            request_animation_frame(game);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use lava_runner::GameConfig;
    use lava_runner::levels::GAME_LEVELS;
    use lava_runner::render::{Renderer, TextRenderer};
    use lava_runner::Campaign;

    env_logger::init();
    log::info!("Lava Runner (native) starting...");
    log::info!("The playable build is wasm32 - run with `trunk serve` for the web version");

    let config = GameConfig::load();
    let campaign = match Campaign::from_plans_seeded(GAME_LEVELS, &config.legend, 0) {
        Ok(campaign) => campaign,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };

    let mut renderer = TextRenderer::new();
    for (i, level) in campaign.levels().iter().enumerate() {
        let state = lava_runner::sim::GameState::start(std::rc::Rc::clone(level));
        renderer.draw(&state);
        println!(
            "Level {} ({}x{}, {} coins)",
            i + 1,
            level.width(),
            level.height(),
            state.coins_left()
        );
        println!("{}\n", renderer.frame());
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
