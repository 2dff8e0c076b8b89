use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use log::{info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, WheelEvent};

use super::render;
use super::state::HierarchyState;
use super::types::Hierarchy;

const FRAME_DT: f32 = 0.016;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Tracks the one outstanding animation frame and whether more may be requested.
#[derive(Debug, Default)]
struct FrameGate {
	stopped: Cell<bool>,
	pending: Cell<Option<i32>>,
}

impl FrameGate {
	fn scheduled(&self, id: i32) {
		self.pending.set(Some(id));
	}

	/// Called at the top of each frame. False once the loop has been stopped.
	fn fired(&self) -> bool {
		self.pending.set(None);
		!self.stopped.get()
	}

	/// Stop the loop, returning the frame request that still needs cancelling.
	fn stop(&self) -> Option<i32> {
		self.stopped.set(true);
		self.pending.take()
	}
}

/// Everything the running diagram holds on to, released when it unmounts.
#[derive(Clone, Default)]
struct DiagramHandles {
	state: Rc<RefCell<Option<HierarchyState>>>,
	animate: FrameCallback,
	resize: FrameCallback,
	gate: Rc<FrameGate>,
}

impl DiagramHandles {
	fn teardown(&self) {
		let window = web_sys::window();
		if let (Some(id), Some(win)) = (self.gate.stop(), &window) {
			let _ = win.cancel_animation_frame(id);
		}
		if let (Some(cb), Some(win)) = (self.resize.borrow_mut().take(), &window) {
			let _ = win.remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}
		self.animate.borrow_mut().take();
		if self.state.borrow_mut().take().is_some() {
			info!("Ontology diagram stopped");
		}
	}
}

fn container_size(canvas: &HtmlCanvasElement, width: Option<f64>, height: Option<f64>) -> (f64, f64) {
	let parent = canvas.parent_element();
	(
		width.unwrap_or_else(|| {
			parent
				.as_ref()
				.map(|p| p.client_width() as f64)
				.filter(|w| *w > 0.0)
				.unwrap_or(800.0)
		}),
		height.unwrap_or_else(|| {
			parent
				.as_ref()
				.map(|p| p.client_height() as f64)
				.filter(|h| *h > 0.0)
				.unwrap_or(600.0)
		}),
	)
}

fn local_point(canvas_ref: NodeRef<leptos::html::Canvas>, ev: &MouseEvent) -> Option<(f64, f64)> {
	let canvas: HtmlCanvasElement = canvas_ref.get()?;
	let rect = canvas.get_bounding_client_rect();
	Some((
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	))
}

/// Force-directed node-link view of an ontology.
///
/// Setting `focus` to a node name animates the view onto that node.
#[component]
pub fn HierarchyDiagram(
	hierarchy: Hierarchy,
	#[prop(into)] focus: Signal<Option<String>>,
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = None)] height: Option<f64>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let handles = DiagramHandles::default();
	let state = handles.state.clone();
	let init = handles.clone();

	let teardown = StoredValue::new_local(handles);
	on_cleanup(move || {
		teardown.try_with_value(DiagramHandles::teardown);
	});

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let Some(window) = web_sys::window() else {
			return;
		};
		if init.state.borrow().is_some() {
			return;
		}

		let (w, h) = container_size(&canvas, width, height);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let Some(ctx) = canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
		else {
			warn!("Canvas 2d context unavailable, skipping ontology diagram");
			return;
		};
		*init.state.borrow_mut() = Some(HierarchyState::new(hierarchy.clone(), w, h));

		let (state_resize, canvas_resize) = (init.state.clone(), canvas.clone());
		*init.resize.borrow_mut() = Some(Closure::new(move || {
			let (nw, nh) = container_size(&canvas_resize, width, height);
			canvas_resize.set_width(nw as u32);
			canvas_resize.set_height(nh as u32);
			if let Some(ref mut s) = *state_resize.borrow_mut() {
				s.resize(nw, nh);
			}
		}));
		if let Some(ref cb) = *init.resize.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		let (state_anim, animate_inner, gate) =
			(init.state.clone(), init.animate.clone(), init.gate.clone());
		*init.animate.borrow_mut() = Some(Closure::new(move || {
			if !gate.fired() {
				return;
			}
			if let Some(ref mut s) = *state_anim.borrow_mut() {
				s.tick(FRAME_DT);
				render::render(s, &ctx);
			}
			if let (Some(cb), Some(win)) = (&*animate_inner.borrow(), web_sys::window()) {
				if let Ok(id) = win.request_animation_frame(cb.as_ref().unchecked_ref()) {
					gate.scheduled(id);
				}
			}
		}));
		if let Some(ref cb) = *init.animate.borrow() {
			if let Ok(id) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
				init.gate.scheduled(id);
			}
		}
	});

	let state_focus = state.clone();
	Effect::new(move |_| {
		let Some(name) = focus.get() else {
			return;
		};
		if let Some(ref mut s) = *state_focus.borrow_mut() {
			s.focus_on(&name);
		}
	});

	let state_md = state.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let Some((x, y)) = local_point(canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut s) = *state_md.borrow_mut() {
			match s.node_at_position(x, y) {
				Some(idx) => s.begin_drag(idx, x, y),
				None => s.begin_pan(x, y),
			}
		}
	};

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some((x, y)) = local_point(canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut s) = *state_mm.borrow_mut() {
			if s.drag.active {
				s.drag_to(x, y);
			} else {
				let hovered = s.node_at_position(x, y);
				s.set_hover(hovered);
				s.pan_to(x, y);
			}
		}
	};

	let state_mu = state.clone();
	let on_mouseup = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_mu.borrow_mut() {
			s.end_drag();
			s.end_pan();
		}
	};

	let state_ml = state.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_ml.borrow_mut() {
			s.end_drag();
			s.end_pan();
			s.set_hover(None);
		}
	};

	let state_wh = state.clone();
	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		let Some((x, y)) = local_point(canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut s) = *state_wh.borrow_mut() {
			let factor = if ev.delta_y() > 0.0 { 0.9 } else { 1.1 };
			s.zoom_at(x, y, factor);
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="hierarchy-canvas"
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
			on:wheel=on_wheel
			style="display: block; cursor: grab;"
		/>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn gate_runs_until_stopped() {
		let gate = FrameGate::default();
		gate.scheduled(1);
		assert!(gate.fired());
		gate.scheduled(2);
		assert_eq!(gate.stop(), Some(2));
		assert!(!gate.fired());
		assert_eq!(gate.stop(), None);
	}
}
