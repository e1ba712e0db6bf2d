// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! # Frame Scheduling
//!
//! An animation is a [`FrameTask`] registered once with a driver. The
//! driver calls it with strictly increasing frame numbers; the task keeps
//! its own state as a plain value. A failing frame ends the loop.
//!
//! Drivers:
//! - [`ManualScheduler`]: runs a fixed number of frames synchronously
//!   (native runs, tests);
//! - [`start_animation_loop`] (wasm32): re-queues itself through
//!   `requestAnimationFrame` until the page goes away.

use crate::error::GlResult;
use log::error;

pub trait FrameTask {
    fn on_frame(&mut self, frame: u64) -> GlResult<()>;
}

impl<F: FnMut(u64) -> GlResult<()>> FrameTask for F {
    fn on_frame(&mut self, frame: u64) -> GlResult<()> {
        self(frame)
    }
}

#[derive(Debug, Default)]
pub struct ManualScheduler {
    next_frame: u64,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_frame(&self) -> u64 {
        self.next_frame
    }

    /// Runs `count` frames, stops at the first error
    pub fn run<T: FrameTask>(&mut self, task: &mut T, count: u64) -> GlResult<()> {
        for _ in 0..count {
            let frame = self.next_frame;
            self.next_frame += 1;
            if let Err(e) = task.on_frame(frame) {
                error!("frame {} failed, animation stopped: {}", frame, e);
                return Err(e);
            }
        }
        Ok(())
    }
}

#[cfg(wasm)]
pub use web_loop::start_animation_loop;

#[cfg(wasm)]
mod web_loop {
    use super::FrameTask;
    use log::{error, info};
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::{closure::Closure, JsCast, JsValue};

    fn request_frame(f: &Closure<dyn FnMut()>) -> Result<i32, JsValue> {
        web_sys::window()
            .ok_or_else(|| JsValue::from_str("no window"))?
            .request_animation_frame(f.as_ref().unchecked_ref())
    }

    /// Registers `task` once; each animation frame runs it and then
    /// requests the next one
    pub fn start_animation_loop<T: FrameTask + 'static>(mut task: T) -> Result<(), JsValue> {
        // the closure needs a handle to itself to re-queue
        let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let g = f.clone();
        let mut frame: u64 = 0;

        *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            if let Err(e) = task.on_frame(frame) {
                // not re-queued: the loop ends here
                error!("frame {} failed, animation stopped: {}", frame, e);
                return;
            }
            frame += 1;
            if let Some(cb) = f.borrow().as_ref() {
                if let Err(e) = request_frame(cb) {
                    error!("requestAnimationFrame failed: {:?}", e);
                }
            }
        }) as Box<dyn FnMut()>));

        if let Some(cb) = g.borrow().as_ref() {
            request_frame(cb)?;
        }
        info!("animation loop started");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GlError;

    #[test]
    fn frames_are_strictly_increasing() {
        let mut seen = vec![];
        let mut task = |frame: u64| -> GlResult<()> {
            seen.push(frame);
            Ok(())
        };
        let mut sched = ManualScheduler::new();
        sched.run(&mut task, 3).unwrap();
        sched.run(&mut task, 2).unwrap();
        assert_eq!(seen, vec![0, 1, 2, 3, 4]);
        assert_eq!(sched.next_frame(), 5);
    }

    #[test]
    fn failing_frame_stops_the_loop() {
        let mut runs = 0;
        let mut task = |frame: u64| -> GlResult<()> {
            runs += 1;
            if frame == 2 {
                Err(GlError::UniformNotFound("color".to_string()))
            } else {
                Ok(())
            }
        };
        let mut sched = ManualScheduler::new();
        assert!(sched.run(&mut task, 10).is_err());
        assert_eq!(runs, 3);
    }
}
