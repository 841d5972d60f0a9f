//! Lane Runner entry point
//!
//! Everything platform-specific lives here: canvas 2D drawing, DOM screen
//! and HUD wiring, and translation of touch/keyboard events into the core's
//! discrete commands. The simulation itself never sees the browser.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::f64::consts::TAU;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{
        CanvasRenderingContext2d, Document, HtmlCanvasElement, KeyboardEvent, MouseEvent,
        TouchEvent,
    };

    use lane_runner::FrameDriver;
    use lane_runner::sim::{Mode, Snapshot};

    /// Minimum gesture length to register as a swipe (pixels)
    const MIN_SWIPE_DISTANCE: f32 = 30.0;

    /// Bonus-code sentinel. Lives only in this entry flow; the core just
    /// receives the lives/booster values it resolves to.
    const BONUS_CODE: &str = "2013";
    const BONUS_LIVES: u32 = 3;

    struct Game {
        driver: FrameDriver,
        ctx: CanvasRenderingContext2d,
        canvas: HtmlCanvasElement,
        touch_start: (f32, f32),
    }

    impl Game {
        /// Advance one frame and redraw
        fn frame(&mut self) {
            let width = self.canvas.width() as f64;
            let height = self.canvas.height() as f64;
            let snapshot = self.driver.frame();
            draw_scene(&self.ctx, &snapshot, width, height);
            update_screens(&snapshot);
        }
    }

    // === Rendering ===

    fn draw_scene(ctx: &CanvasRenderingContext2d, snapshot: &Snapshot, width: f64, height: f64) {
        ctx.clear_rect(0.0, 0.0, width, height);
        draw_background(ctx, snapshot, width, height);
        draw_coins(ctx, snapshot);
        draw_obstacles(ctx, snapshot);
        draw_player(ctx, snapshot);
        draw_hud(ctx, snapshot, width);
    }

    fn draw_background(
        ctx: &CanvasRenderingContext2d,
        snapshot: &Snapshot,
        width: f64,
        height: f64,
    ) {
        let gradient = ctx.create_linear_gradient(0.0, 0.0, 0.0, height);
        let _ = gradient.add_color_stop(0.0, "#1a1a2e");
        let _ = gradient.add_color_stop(0.5, "#16213e");
        let _ = gradient.add_color_stop(1.0, "#0f1621");
        ctx.set_fill_style_canvas_gradient(&gradient);
        ctx.fill_rect(0.0, 0.0, width, height);

        // Lane dividers scroll with traveled distance for a tunnel feel
        ctx.set_stroke_style_str("rgba(0, 255, 255, 0.3)");
        ctx.set_line_width(2.0);
        let lane_width = snapshot.config.lane_width as f64;
        let offset = (snapshot.distance as f64 * 0.5) % 40.0;
        for divider in 1..snapshot.config.lanes {
            let x = lane_width * divider as f64;
            let mut y = -40.0;
            while y < height + 40.0 {
                ctx.begin_path();
                ctx.move_to(x, y - offset);
                ctx.line_to(x, y - offset + 20.0);
                ctx.stroke();
                y += 40.0;
            }
        }
    }

    fn draw_player(ctx: &CanvasRenderingContext2d, snapshot: &Snapshot) {
        let player = snapshot.player;
        let (x, y) = (player.x as f64, player.y as f64);
        let (w, h) = (player.width as f64, player.height as f64);

        ctx.set_fill_style_str("#00ff00");
        ctx.set_shadow_color("rgba(0, 255, 0, 0.8)");
        ctx.set_shadow_blur(10.0);
        if player.sliding {
            ctx.fill_rect(x, y + h * 0.5, w, h * 0.5);
        } else {
            ctx.fill_rect(x, y, w, h);
            // Eyes
            ctx.set_fill_style_str("#000");
            ctx.fill_rect(x + w * 0.2, y + h * 0.2, w * 0.15, w * 0.15);
            ctx.fill_rect(x + w * 0.65, y + h * 0.2, w * 0.15, w * 0.15);
        }
        ctx.set_shadow_color("transparent");
    }

    fn draw_obstacles(ctx: &CanvasRenderingContext2d, snapshot: &Snapshot) {
        for obstacle in snapshot.obstacles {
            let (x, y) = (obstacle.x as f64, obstacle.y as f64);
            let (w, h) = (obstacle.width as f64, obstacle.height as f64);
            ctx.set_fill_style_str("#ff0055");
            ctx.set_shadow_color("rgba(255, 0, 85, 0.6)");
            ctx.set_shadow_blur(10.0);
            ctx.fill_rect(x, y, w, h);

            // Hazard stripes
            ctx.set_fill_style_str("rgba(255, 255, 0, 0.5)");
            for stripe in 0..3 {
                ctx.fill_rect(x + (w / 3.0) * stripe as f64, y, w / 6.0, h);
            }
            ctx.set_shadow_color("transparent");
        }
    }

    fn draw_coins(ctx: &CanvasRenderingContext2d, snapshot: &Snapshot) {
        for coin in snapshot.coins {
            let radius = coin.radius as f64;
            ctx.save();
            let _ = ctx.translate(coin.x as f64, coin.y as f64);
            let _ = ctx.rotate(coin.rotation as f64);

            ctx.set_fill_style_str("rgba(255, 215, 0, 0.3)");
            ctx.begin_path();
            let _ = ctx.arc(0.0, 0.0, radius + 5.0, 0.0, TAU);
            ctx.fill();

            ctx.set_fill_style_str("#ffd700");
            ctx.set_shadow_color("rgba(255, 215, 0, 0.8)");
            ctx.set_shadow_blur(15.0);
            ctx.begin_path();
            let _ = ctx.arc(0.0, 0.0, radius, 0.0, TAU);
            ctx.fill();

            ctx.set_fill_style_str("rgba(255, 255, 200, 0.6)");
            ctx.begin_path();
            let _ = ctx.arc(-radius * 0.3, -radius * 0.3, radius * 0.3, 0.0, TAU);
            ctx.fill();

            ctx.restore();
            ctx.set_shadow_color("transparent");
        }
    }

    fn draw_hud(ctx: &CanvasRenderingContext2d, snapshot: &Snapshot, width: f64) {
        if snapshot.mode != Mode::Running {
            return;
        }
        ctx.set_fill_style_str("#ff6b6b");
        ctx.set_font("bold 20px Arial");
        ctx.set_text_align("right");
        let _ = ctx.fill_text(&format!("Lives: {}", snapshot.lives), width - 20.0, 50.0);
        if snapshot.has_booster {
            ctx.set_fill_style_str("#ffd700");
            let _ = ctx.fill_text("BOOSTER ACTIVE", width - 20.0, 80.0);
        }
    }

    // === DOM screens and HUD text ===

    fn set_text(document: &Document, id: &str, text: &str) {
        if let Some(el) = document.get_element_by_id(id) {
            el.set_text_content(Some(text));
        }
    }

    fn set_screen_visible(document: &Document, id: &str, visible: bool) {
        if let Some(el) = document.get_element_by_id(id) {
            let class = if visible { "screen" } else { "screen hidden" };
            let _ = el.set_attribute("class", class);
        }
    }

    fn update_screens(snapshot: &Snapshot) {
        let document = web_sys::window().unwrap().document().unwrap();

        set_screen_visible(&document, "instructionsScreen", snapshot.mode == Mode::Instructions);
        set_screen_visible(&document, "pauseScreen", snapshot.mode == Mode::Paused);
        set_screen_visible(&document, "gameOverScreen", snapshot.mode == Mode::GameOver);
        set_screen_visible(&document, "winScreen", snapshot.mode == Mode::Win);

        match snapshot.mode {
            Mode::Running => {
                set_text(&document, "score", &format!("Score: {}", snapshot.score));
            }
            Mode::GameOver => {
                set_text(&document, "finalScore", &snapshot.final_score.to_string());
            }
            Mode::Win => {
                set_text(&document, "winScore", &snapshot.final_score.to_string());
            }
            _ => {}
        }
    }

    // === Input adapters ===

    fn handle_swipe(game: &mut Game, end_x: f32, end_y: f32) {
        let delta_x = end_x - game.touch_start.0;
        let delta_y = game.touch_start.1 - end_y; // positive = upward
        let state = game.driver.state_mut();

        if delta_x.abs() > delta_y.abs() && delta_x.abs() > MIN_SWIPE_DISTANCE {
            if delta_x > 0.0 {
                state.lane_right();
            } else {
                state.lane_left();
            }
        } else if delta_y.abs() > delta_x.abs() && delta_y.abs() > MIN_SWIPE_DISTANCE {
            if delta_y > 0.0 {
                state.jump();
            } else {
                state.slide();
            }
        }
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();

        // Keyboard
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                let state = g.driver.state_mut();
                match event.key().as_str() {
                    "ArrowLeft" => state.lane_left(),
                    "ArrowRight" => state.lane_right(),
                    " " | "ArrowUp" => state.jump(),
                    "ArrowDown" => state.slide(),
                    "Escape" => state.toggle_pause(),
                    _ => {}
                }
            });
            let _ = document
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch swipes
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                if let Some(touch) = event.touches().get(0) {
                    game.borrow_mut().touch_start =
                        (touch.client_x() as f32, touch.client_y() as f32);
                }
            });
            let _ = document
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                if let Some(touch) = event.changed_touches().get(0) {
                    handle_swipe(
                        &mut game.borrow_mut(),
                        touch.client_x() as f32,
                        touch.client_y() as f32,
                    );
                }
            });
            let _ = document
                .add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_buttons(game: Rc<RefCell<Game>>) {
        let document = web_sys::window().unwrap().document().unwrap();

        let on_click = |id: &str, game: Rc<RefCell<Game>>, action: fn(&mut Game)| {
            if let Some(btn) = document.get_element_by_id(id) {
                let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                    action(&mut game.borrow_mut());
                });
                let _ =
                    btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
                closure.forget();
            }
        };

        on_click("startBtn", game.clone(), |g| {
            // Bonus-code prompt is strictly pre-session; the core only sees
            // the lives/booster it resolves to.
            let window = web_sys::window().unwrap();
            let code = window
                .prompt_with_message("Enter a number for a possible surprise!")
                .ok()
                .flatten()
                .unwrap_or_default();
            let (lives, booster) = if code == BONUS_CODE {
                log::info!("bonus code accepted");
                (BONUS_LIVES, true)
            } else {
                (1, false)
            };
            g.driver.state_mut().start_game(lives, booster);
        });
        on_click("pauseBtn", game.clone(), |g| {
            g.driver.state_mut().toggle_pause();
        });
        on_click("resumeBtn", game.clone(), |g| {
            g.driver.state_mut().toggle_pause();
        });
        on_click("restartBtn", game.clone(), |g| {
            g.driver.state_mut().restart_game();
        });
        on_click("winRestartBtn", game.clone(), |g| {
            g.driver.state_mut().restart_game();
        });

        // Decorative title-screen cat
        if let Some(cat) = document.get_element_by_id("catImage") {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().driver.state_mut().touch_cat();
                let document = web_sys::window().unwrap().document().unwrap();
                set_text(&document, "catMessage", "Meow!");
            });
            let _ = cat.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_resize(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let window = web_sys::window().unwrap();
            let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            let mut g = game.borrow_mut();
            g.canvas.set_width(width as u32);
            g.canvas.set_height(height as u32);
            g.driver.state_mut().on_resize(width as f32, height as f32);
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            game.borrow_mut().frame();
            request_animation_frame(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Lane Runner starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(900.0);
        let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(600.0);
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .expect("no 2d context")
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game {
            driver: FrameDriver::new(width as f32, height as f32, seed),
            ctx,
            canvas,
            touch_start: (0.0, 0.0),
        }));
        log::info!("session seeded with {}", seed);

        setup_input_handlers(game.clone());
        setup_buttons(game.clone());
        setup_resize(game.clone());

        request_animation_frame(game);

        log::info!("Lane Runner running!");
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

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use lane_runner::FrameDriver;
    use lane_runner::sim::Mode;

    env_logger::init();
    log::info!("Lane Runner (native) starting...");
    log::info!("Native mode is a headless demo - run with `trunk serve` for the web version");

    let mut driver = FrameDriver::new(900.0, 600.0, 0xC0FFEE);
    driver.state_mut().start_game(1, false);

    // Drive a short session with a naive dodge policy: step out of any lane
    // with an obstacle closing in on the player.
    let mut frames = 0u32;
    while driver.state().mode == Mode::Running && frames < 60 * 60 {
        {
            let state = driver.state_mut();
            let lane = state.player.lane;
            let player_top = state.player.y;
            let threatened = state.obstacles.iter().any(|o| {
                o.lane == lane && o.y + o.height > player_top - 200.0 && o.y < player_top
            });
            if threatened {
                if lane > 0 {
                    state.lane_left();
                } else {
                    state.lane_right();
                }
            }
        }
        driver.frame();
        frames += 1;
    }

    let state = driver.state();
    log::info!(
        "demo finished after {} frames: mode={:?}, score={}, distance={:.0}",
        frames,
        state.mode,
        state.display_score(),
        state.distance
    );
}
