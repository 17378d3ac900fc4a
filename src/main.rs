//! Drift Rocks entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, PointerEvent};

    use drift_rocks::GameConfig;
    use drift_rocks::renderer::CanvasRenderer;
    use drift_rocks::sim::{InputFlag, World, tick};

    /// Maximum ticks per frame to prevent spiral of death
    const MAX_SUBSTEPS: u32 = 8;

    /// Game instance holding all state
    struct Game {
        world: World,
        renderer: CanvasRenderer,
        tick_seconds: f32,
        accumulator: f32,
        last_time: f64,
    }

    impl Game {
        /// Run simulation ticks
        fn update(&mut self, dt: f32) {
            let dt = dt.min(0.25);
            self.accumulator += dt;

            let mut substeps = 0;
            while self.accumulator >= self.tick_seconds && substeps < MAX_SUBSTEPS {
                tick(&mut self.world);
                self.accumulator -= self.tick_seconds;
                substeps += 1;
            }
            if substeps == MAX_SUBSTEPS {
                self.accumulator = 0.0;
            }
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Drift Rocks starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let mut config = GameConfig::load();
        config.width = canvas.width() as f32;
        config.height = canvas.height() as f32;
        if let Err(e) = config.validate() {
            log::warn!("Canvas size rejected ({}), using defaults", e);
            config = GameConfig::default();
            canvas.set_width(config.width as u32);
            canvas.set_height(config.height as u32);
        }

        let Some(renderer) = CanvasRenderer::new(&canvas) else {
            log::error!("Canvas 2D context unavailable");
            return;
        };

        let seed = config.seed.unwrap_or_else(|| js_sys::Date::now() as u64);
        let game = Rc::new(RefCell::new(Game {
            world: World::new(&config, seed),
            renderer,
            tick_seconds: config.tick_seconds(),
            accumulator: 0.0,
            last_time: 0.0,
        }));

        log::info!(
            "World {}x{} at {} fps, seed {}",
            config.width,
            config.height,
            config.fps,
            seed
        );

        setup_input_handlers(&canvas, game.clone());
        request_animation_frame(game);

        log::info!("Drift Rocks running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        for (event_name, pressed) in [("keydown", true), ("keyup", false)] {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let handled = game.borrow_mut().world.input.apply_key(&event.key(), pressed);
                if handled {
                    event.prevent_default();
                }
            });
            let _ = window
                .add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Pointer press fires
        for (event_name, pressed) in [("pointerdown", true), ("pointerup", false)] {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: PointerEvent| {
                game.borrow_mut().world.set_input(InputFlag::Fire, pressed);
            });
            let _ = canvas
                .add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Release everything when focus is lost so no key sticks
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                let mut g = game.borrow_mut();
                g.world.input = Default::default();
                log::info!("Input released (window blur)");
            });
            let _ =
                window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();

            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                g.tick_seconds
            };
            g.last_time = time;

            g.update(dt);
            g.renderer.render(&g.world);
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Drift Rocks (native) starting...");
    log::info!("Native mode is headless - run with `trunk serve` for the web version");

    let config = match std::env::args().nth(1) {
        Some(path) => match drift_rocks::GameConfig::from_path(&path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("{}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => drift_rocks::GameConfig::default(),
    };

    run_headless(&config);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Fly a short scripted session and log what happened
#[cfg(not(target_arch = "wasm32"))]
fn run_headless(config: &drift_rocks::GameConfig) {
    use drift_rocks::sim::{InputFlag, SharedInput, World, tick};

    let seed = config.seed.unwrap_or(0x5eed);
    let mut world = World::new(config, seed);
    let input = SharedInput::new();

    // Three seconds of play: burn and turn for the first one, fire throughout
    let total_ticks = config.fps * 3;
    input.set(InputFlag::Fire, true);
    for t in 0..total_ticks {
        input.set(InputFlag::Thrust, t < config.fps);
        input.set(InputFlag::TurnRight, t % 4 == 0);
        world.input = input.snapshot();
        tick(&mut world);
    }

    log::info!(
        "{} ticks: ship at ({:.1}, {:.1}) moving ({:.2}, {:.2}), {} missiles in flight, {} fired",
        world.time_ticks,
        world.ship.pos.x,
        world.ship.pos.y,
        world.ship.vel.x,
        world.ship.vel.y,
        world.missiles.len(),
        world.shots_fired
    );
    println!(
        "{}",
        serde_json::to_string_pretty(&world.ship).unwrap_or_default()
    );
}
