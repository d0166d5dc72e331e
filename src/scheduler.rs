//! Display-refresh frame loop
//!
//! The host owns the actual refresh primitive (`requestAnimationFrame` in the
//! browser). [`AnimationLoop`] tracks the registration handle and the frame
//! counter; the host calls [`AnimationLoop::on_frame`] whenever a refresh it
//! requested fires.

/// Request/cancel access to the host's next display refresh
pub trait FrameHost {
    type Handle: Copy;

    /// Register for the next refresh. `None` if the host refused.
    fn request_frame(&mut self) -> Option<Self::Handle>;

    /// Drop a pending registration
    fn cancel_frame(&mut self, handle: Self::Handle);
}

/// Start/stop lifecycle and frame counter for a per-refresh callback
#[derive(Debug)]
pub struct AnimationLoop<H> {
    handle: Option<H>,
    frame: u64,
}

impl<H> Default for AnimationLoop<H> {
    fn default() -> Self {
        Self {
            handle: None,
            frame: 0,
        }
    }
}

impl<H: Copy> AnimationLoop<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset the frame counter and request the first refresh. Restarting a
    /// running loop cancels its pending refresh first.
    pub fn start<F: FrameHost<Handle = H>>(&mut self, host: &mut F) {
        if let Some(handle) = self.handle.take() {
            host.cancel_frame(handle);
        }
        self.frame = 0;
        self.handle = host.request_frame();
        if self.handle.is_none() {
            log::warn!("Animation loop failed to start: frame request refused");
        }
    }

    /// Cancel the pending refresh. No-op when not running.
    pub fn stop<F: FrameHost<Handle = H>>(&mut self, host: &mut F) {
        if let Some(handle) = self.handle.take() {
            host.cancel_frame(handle);
        }
    }

    /// Refresh fired. Advances the counter, re-arms the next refresh and
    /// returns the frame index to dispatch, or `None` if the loop is stopped.
    pub fn on_frame<F: FrameHost<Handle = H>>(&mut self, host: &mut F) -> Option<u64> {
        self.handle?;

        self.frame += 1;
        self.handle = host.request_frame();
        if self.handle.is_none() {
            log::warn!("Frame request refused at frame {}, loop stopped", self.frame);
        }
        Some(self.frame)
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    /// Index of the last dispatched frame (0 before the first refresh)
    pub fn frame(&self) -> u64 {
        self.frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Hands out increasing ids and records cancellations
    #[derive(Default)]
    struct ManualFrames {
        next: u32,
        pending: Vec<u32>,
        cancelled: Vec<u32>,
        refuse: bool,
    }

    impl FrameHost for ManualFrames {
        type Handle = u32;

        fn request_frame(&mut self) -> Option<u32> {
            if self.refuse {
                return None;
            }
            self.next += 1;
            self.pending.push(self.next);
            Some(self.next)
        }

        fn cancel_frame(&mut self, handle: u32) {
            self.pending.retain(|h| *h != handle);
            self.cancelled.push(handle);
        }
    }

    #[test]
    fn test_start_and_count_frames() {
        let mut host = ManualFrames::default();
        let mut frames = AnimationLoop::new();
        frames.start(&mut host);
        assert!(frames.is_running());
        assert_eq!(frames.frame(), 0);

        assert_eq!(frames.on_frame(&mut host), Some(1));
        assert_eq!(frames.on_frame(&mut host), Some(2));
        assert_eq!(frames.on_frame(&mut host), Some(3));
        // One registration per refresh
        assert_eq!(host.next, 4);
    }

    #[test]
    fn test_stop_cancels_pending() {
        let mut host = ManualFrames::default();
        let mut frames = AnimationLoop::new();
        frames.start(&mut host);
        frames.on_frame(&mut host);
        frames.stop(&mut host);

        assert!(!frames.is_running());
        assert_eq!(host.cancelled, vec![2]);
        // Late refresh after stop is ignored
        assert_eq!(frames.on_frame(&mut host), None);
        assert_eq!(frames.frame(), 1);
    }

    #[test]
    fn test_stop_when_idle_is_noop() {
        let mut host = ManualFrames::default();
        let mut frames: AnimationLoop<u32> = AnimationLoop::new();
        frames.stop(&mut host);
        frames.stop(&mut host);
        assert!(host.cancelled.is_empty());
        assert!(!frames.is_running());
    }

    #[test]
    fn test_restart_resets_counter() {
        let mut host = ManualFrames::default();
        let mut frames = AnimationLoop::new();
        frames.start(&mut host);
        for _ in 0..5 {
            frames.on_frame(&mut host);
        }
        assert_eq!(frames.frame(), 5);

        frames.start(&mut host);
        assert_eq!(host.cancelled, vec![6]);
        assert_eq!(frames.frame(), 0);
        assert_eq!(frames.on_frame(&mut host), Some(1));
    }

    #[test]
    fn test_refused_request_stops_loop() {
        let mut host = ManualFrames::default();
        let mut frames = AnimationLoop::new();
        frames.start(&mut host);
        host.refuse = true;
        assert_eq!(frames.on_frame(&mut host), Some(1));
        assert!(!frames.is_running());
        assert_eq!(frames.on_frame(&mut host), None);
    }
}
