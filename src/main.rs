//! Tilt Ball entry point
//!
//! Handles platform-specific initialization and runs the frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{DeviceOrientationEvent, Element, HtmlCanvasElement, KeyboardEvent};

    use tilt_ball::platform::orientation::{self, Support};
    use tilt_ball::renderer::{CanvasSurface, Surface};
    use tilt_ball::sim::Viewport;
    use tilt_ball::{RenderLoop, Settings, Simulation};

    /// App instance holding all state
    struct App {
        sim: Simulation,
        surface: Option<CanvasSurface>,
        render_loop: RenderLoop,
        debug_el: Option<Element>,
    }

    impl App {
        /// Refresh the debug readout
        fn update_debug(&self) {
            let Some(el) = &self.debug_el else {
                return;
            };
            match self.sim.readout() {
                Ok(readout) => el.set_text_content(Some(&readout.to_pretty())),
                Err(e) => log::warn!("Debug readout failed: {}", e),
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Tilt Ball starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Canvas takes the window size once, at load
        let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(800.0);
        let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(600.0);
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);

        // Bounds follow the pixel buffer actually allocated
        let viewport = match Viewport::from_pixels(canvas.width(), canvas.height()) {
            Ok(viewport) => viewport,
            Err(e) => {
                log::error!("Cannot start: {}", e);
                return;
            }
        };

        let settings = Settings::load();
        let debug_el = document.get_element_by_id("debug");
        if let Some(el) = &debug_el {
            if !settings.show_debug {
                let _ = el.set_attribute("hidden", "");
            }
        }

        let surface = CanvasSurface::new(&canvas);
        if surface.is_none() {
            log::error!("Canvas 2D context unavailable");
        }

        let app = Rc::new(RefCell::new(App {
            debug_el: debug_el.filter(|_| settings.show_debug),
            sim: Simulation::new(viewport, settings),
            surface,
            render_loop: RenderLoop::new(),
        }));

        log::info!("Viewport {}x{}", viewport.width, viewport.height);

        setup_keyboard(app.clone());
        setup_tilt(app.clone());
        setup_teardown(app.clone());

        // Never start before the surface exists
        let ready = app.borrow().surface.is_some();
        if ready && app.borrow_mut().render_loop.start() {
            request_animation_frame(app);
        }
    }

    fn setup_keyboard(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();

        for (event_name, pressed) in [("keydown", true), ("keyup", false)] {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let key = event.key();
                let mut a = app.borrow_mut();
                let handled = if pressed {
                    a.sim.key_down(&key)
                } else {
                    a.sim.key_up(&key)
                };
                match handled {
                    // Keep space and arrows from scrolling the page
                    Ok(true) if key != "Shift" => event.prevent_default(),
                    Ok(_) => {}
                    Err(e) => log::error!("Key {:?} rejected: {}", key, e),
                }
            });
            let _ = window
                .add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_tilt(app: Rc<RefCell<App>>) {
        if !app.borrow().sim.settings.tilt {
            return;
        }

        match orientation::support() {
            Support::None => {
                app.borrow_mut()
                    .sim
                    .tilt
                    .unsupported("no DeviceOrientationEvent");
            }
            Support::Open => attach_orientation_listener(app),
            Support::Prompt => request_tilt_on_gesture(app),
        }
    }

    /// Permission can only be asked from a user gesture, so ask on the first one
    fn request_tilt_on_gesture(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();
        let mut asked = false;
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            if asked {
                return;
            }
            asked = true;
            log::info!("Requesting orientation permission");

            let request = orientation::request_permission();
            let app = app.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match request.await {
                    Ok(true) => attach_orientation_listener(app),
                    Ok(false) => app.borrow_mut().sim.tilt.deny("not granted"),
                    Err(e) => app.borrow_mut().sim.tilt.deny(&e),
                }
            });
        });
        let _ = window.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn attach_orientation_listener(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();
        app.borrow_mut().sim.tilt.listening();

        let closure = Closure::<dyn FnMut(_)>::new(move |event: DeviceOrientationEvent| {
            let mut a = app.borrow_mut();
            if let Err(e) = a.sim.orientation(event.beta(), event.gamma()) {
                log::error!("Orientation sample rejected: {}", e);
            }
        });
        let _ = window.add_event_listener_with_callback(
            "deviceorientation",
            closure.as_ref().unchecked_ref(),
        );
        closure.forget();
    }

    /// Stop the loop when the page goes away
    fn setup_teardown(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let pending = app.borrow_mut().render_loop.stop();
            if let Some(handle) = pending {
                if let Some(window) = web_sys::window() {
                    let _ = window.cancel_animation_frame(handle);
                }
            }
        });
        let _ = window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();
        let next = app.clone();
        let closure = Closure::once(move |_time: f64| {
            frame_loop(next);
        });
        match window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            Ok(handle) => app.borrow_mut().render_loop.scheduled(handle),
            Err(e) => log::error!("requestAnimationFrame failed: {:?}", e),
        }
        closure.forget();
    }

    fn frame_loop(app: Rc<RefCell<App>>) {
        let keep_going = {
            let mut guard = app.borrow_mut();
            let a = &mut *guard;
            let surface = a.surface.as_mut().map(|s| s as &mut dyn Surface);
            match a.render_loop.frame(&mut a.sim, surface) {
                Ok(true) => {
                    a.update_debug();
                    true
                }
                Ok(false) => false,
                Err(e) => {
                    log::error!("Frame aborted, loop stopped: {}", e);
                    false
                }
            }
        };

        if keep_going {
            request_animation_frame(app);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_app::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Tilt Ball (native) starting...");
    log::info!("Native mode runs a scripted headless session - run with `trunk serve` for the web version");

    match run_headless() {
        Ok(readout) => println!("{readout}"),
        Err(e) => {
            log::error!("Headless session failed: {}", e);
            std::process::exit(1);
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Drop the ball, steer it, thrust and float, then report the final readout
#[cfg(not(target_arch = "wasm32"))]
fn run_headless() -> tilt_ball::Result<String> {
    use tilt_ball::renderer::Recorder;
    use tilt_ball::sim::Viewport;
    use tilt_ball::{RenderLoop, Settings, Simulation};

    // (frame, key, pressed)
    let script: &[(u32, &str, bool)] = &[
        (60, "ArrowRight", true),
        (65, "ArrowRight", true),
        (70, "ArrowRight", true),
        (75, "ArrowRight", false),
        (120, " ", true),
        (125, " ", true),
        (130, " ", false),
        (180, "Shift", false),
        (240, "a", true),
        (245, "a", false),
        (300, "Shift", false),
    ];

    let mut sim = Simulation::new(Viewport::new(800.0, 600.0)?, Settings::load());
    let mut recorder = Recorder::new();
    let mut render_loop = RenderLoop::new();
    render_loop.start();

    for frame in 0..360 {
        for (_, key, pressed) in script.iter().filter(|(at, _, _)| *at == frame) {
            if *pressed {
                sim.key_down(key)?;
            } else {
                sim.key_up(key)?;
            }
        }
        render_loop.frame(&mut sim, Some(&mut recorder))?;
    }
    render_loop.stop();

    log::info!(
        "Ran {} frames, ball at {:?}",
        recorder.frames(),
        sim.motion.position
    );
    Ok(sim.readout()?.to_pretty())
}
