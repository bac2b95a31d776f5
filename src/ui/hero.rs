//! Hero section: headline over the animated sculpture canvas

use leptos::prelude::*;

use crate::core::content::{HEADLINE, TAGLINE};
use crate::core::{OrbitState, Scene};

/// Longest frame step fed to the orbit, so a backgrounded tab doesn't jump on return
const MAX_FRAME_STEP: f64 = 0.1;

/// Turns `requestAnimationFrame` timestamps into scene time
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameClock {
    start_ms: Option<f64>,
    last_ms: Option<f64>,
}

impl FrameClock {
    /// Returns `(elapsed, dt)` in seconds for a frame timestamp in milliseconds
    pub fn tick(&mut self, now_ms: f64) -> (f64, f64) {
        let start = *self.start_ms.get_or_insert(now_ms);
        let dt = self
            .last_ms
            .map_or(0.0, |last| ((now_ms - last) / 1000.0).clamp(0.0, MAX_FRAME_STEP));
        self.last_ms = Some(now_ms);
        (((now_ms - start) / 1000.0).max(0.0), dt)
    }
}

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="relative w-full h-[60vh] md:h-[72vh] lg:h-[78vh] overflow-hidden bg-gradient-to-b from-black/60 via-black/40 to-transparent">
            <HeroScene />
            <div class="absolute inset-0 flex flex-col items-center justify-center px-6 text-center pointer-events-none">
                <h1 class="text-4xl md:text-6xl font-extrabold tracking-tight text-white drop-shadow-lg">
                    {HEADLINE}
                </h1>
                <p class="mt-4 max-w-2xl text-base md:text-lg text-white/75">{TAGLINE}</p>
            </div>
        </div>
    }
}

/// Canvas that renders `Scene::sculpture()` every animation frame.
///
/// Dragging orbits the camera; the loop stops when the component unmounts.
#[component]
pub fn HeroScene() -> impl IntoView {
    let scene = Scene::sculpture();
    let controls = scene.controls;
    let orbit: RwSignal<OrbitState> = RwSignal::new(scene.initial_orbit());
    let drag_from: RwSignal<Option<(f64, f64)>> = RwSignal::new(None);
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    #[cfg(feature = "hydrate")]
    {
        use std::cell::Cell;
        use std::rc::Rc;
        use std::sync::Arc;
        use std::sync::atomic::{AtomicBool, Ordering};

        let running = Arc::new(AtomicBool::new(true));
        let started = Rc::new(Cell::new(false));

        let running_for_effect = Arc::clone(&running);
        Effect::new(move |_| {
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            if started.replace(true) {
                return;
            }
            if let Err(err) =
                paint::start(canvas, scene.clone(), orbit, Arc::clone(&running_for_effect))
            {
                leptos::logging::warn!("hero scene disabled: {err}");
            }
        });

        on_cleanup(move || running.store(false, Ordering::Relaxed));
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = scene;
    }

    let on_pointer_down = move |ev: leptos::ev::PointerEvent| {
        if controls.enable_rotate {
            drag_from.set(Some((f64::from(ev.client_x()), f64::from(ev.client_y()))));
        }
    };

    let on_pointer_move = move |ev: leptos::ev::PointerEvent| {
        let Some((x0, y0)) = drag_from.get_untracked() else {
            return;
        };
        let (x, y) = (f64::from(ev.client_x()), f64::from(ev.client_y()));
        let height = canvas_ref
            .get_untracked()
            .map(|c| f64::from(c.client_height()))
            .unwrap_or_default();
        orbit.update(|o| o.drag(x - x0, y - y0, height, &controls));
        drag_from.set(Some((x, y)));
    };

    let end_drag = move |_: leptos::ev::PointerEvent| drag_from.set(None);

    view! {
        <canvas
            node_ref=canvas_ref
            class="absolute inset-0 w-full h-full cursor-grab active:cursor-grabbing"
            style="touch-action: none;"
            aria-hidden="true"
            on:pointerdown=on_pointer_down
            on:pointermove=on_pointer_move
            on:pointerup=end_drag
            on:pointerleave=end_drag
            on:pointercancel=end_drag
        />
    }
}

#[cfg(feature = "hydrate")]
mod paint {
    use std::cell::RefCell;
    use std::f64::consts::TAU;
    use std::rc::Rc;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    use leptos::prelude::*;
    use wasm_bindgen::{JsCast, JsValue, closure::Closure};
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

    use super::FrameClock;
    use crate::core::scene::{OrbitState, Primitive, Scene, SceneError, Viewport};

    fn draw_error(err: JsValue) -> SceneError {
        SceneError::Draw(format!("{err:?}"))
    }

    /// Start the animation loop; it runs until `running` is cleared
    pub fn start(
        canvas: HtmlCanvasElement,
        scene: Scene,
        orbit: RwSignal<OrbitState>,
        running: Arc<AtomicBool>,
    ) -> Result<(), SceneError> {
        let window = web_sys::window().ok_or(SceneError::WindowUnavailable)?;
        let ctx = canvas
            .get_context("2d")
            .map_err(|_| SceneError::ContextUnavailable)?
            .ok_or(SceneError::ContextUnavailable)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| SceneError::ContextUnavailable)?;

        let holder: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
        let holder_for_frame = Rc::clone(&holder);
        let window_for_frame = window.clone();
        let mut clock = FrameClock::default();

        let frame = Closure::wrap(Box::new(move |ts: f64| {
            if !running.load(Ordering::Relaxed) {
                holder_for_frame.borrow_mut().take();
                return;
            }

            let (elapsed, dt) = clock.tick(ts);
            orbit.update(|o| o.advance(dt, &scene.controls));

            let viewport = fit_canvas(&window_for_frame, &canvas);
            let primitives = scene.render(elapsed, &orbit.get_untracked(), viewport);
            if let Err(err) = draw(&ctx, viewport, &primitives) {
                leptos::logging::warn!("{err}");
            }

            if let Some(next) = holder_for_frame.borrow().as_ref() {
                let _ = window_for_frame.request_animation_frame(next.as_ref().unchecked_ref());
            }
        }) as Box<dyn FnMut(f64)>);

        window
            .request_animation_frame(frame.as_ref().unchecked_ref())
            .map_err(draw_error)?;
        *holder.borrow_mut() = Some(frame);
        Ok(())
    }

    /// Match the backing store to the CSS size at device resolution
    fn fit_canvas(window: &web_sys::Window, canvas: &HtmlCanvasElement) -> Viewport {
        let dpr = window.device_pixel_ratio().max(1.0);
        let width = (f64::from(canvas.client_width()) * dpr).round().max(0.0);
        let height = (f64::from(canvas.client_height()) * dpr).round().max(0.0);

        if f64::from(canvas.width()) != width {
            canvas.set_width(width as u32);
        }
        if f64::from(canvas.height()) != height {
            canvas.set_height(height as u32);
        }
        Viewport { width, height }
    }

    fn draw(
        ctx: &CanvasRenderingContext2d,
        viewport: Viewport,
        primitives: &[Primitive],
    ) -> Result<(), SceneError> {
        ctx.clear_rect(0.0, 0.0, viewport.width, viewport.height);
        ctx.set_line_cap("round");
        ctx.set_line_join("round");

        for primitive in primitives {
            match primitive {
                Primitive::Arc {
                    points,
                    color,
                    width,
                    ..
                } => {
                    let Some(((x0, y0), rest)) = points.split_first() else {
                        continue;
                    };
                    ctx.begin_path();
                    ctx.move_to(*x0, *y0);
                    for (x, y) in rest {
                        ctx.line_to(*x, *y);
                    }
                    ctx.set_stroke_style_str(color);
                    ctx.set_line_width(*width);
                    ctx.stroke();
                }
                Primitive::Disc {
                    x,
                    y,
                    radius,
                    color,
                    highlight,
                    ..
                } => {
                    let gradient = ctx
                        .create_radial_gradient(
                            x - radius * 0.35,
                            y - radius * 0.35,
                            radius * 0.1,
                            *x,
                            *y,
                            *radius,
                        )
                        .map_err(draw_error)?;
                    gradient.add_color_stop(0.0, highlight).map_err(draw_error)?;
                    gradient.add_color_stop(1.0, color).map_err(draw_error)?;

                    ctx.begin_path();
                    ctx.arc(*x, *y, *radius, 0.0, TAU).map_err(draw_error)?;
                    ctx.set_fill_style_canvas_gradient(&gradient);
                    ctx.fill();
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_tick_starts_clock() {
        let mut clock = FrameClock::default();
        assert_eq!(clock.tick(1000.0), (0.0, 0.0));
    }

    #[test]
    fn test_tick_reports_elapsed_and_step() {
        let mut clock = FrameClock::default();
        clock.tick(1000.0);
        let (elapsed, dt) = clock.tick(1016.0);
        assert!((elapsed - 0.016).abs() < 1e-9);
        assert!((dt - 0.016).abs() < 1e-9);
    }

    #[test]
    fn test_long_pause_step_is_capped() {
        let mut clock = FrameClock::default();
        clock.tick(1000.0);
        let (elapsed, dt) = clock.tick(6000.0);
        assert!((elapsed - 5.0).abs() < 1e-9);
        assert_eq!(dt, MAX_FRAME_STEP);
    }

    #[test]
    fn test_hero_scene_renders_frames() {
        let scene = Scene::sculpture();
        let mut orbit = scene.initial_orbit();
        let mut clock = FrameClock::default();
        for ts in [0.5, 16.5, 33.0] {
            let (elapsed, dt) = clock.tick(ts);
            orbit.advance(dt, &scene.controls);
            let viewport = crate::core::Viewport {
                width: 800.0,
                height: 600.0,
            };
            assert!(!scene.render(elapsed, &orbit, viewport).is_empty());
        }
    }
}
