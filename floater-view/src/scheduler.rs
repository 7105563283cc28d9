/// Latest-wins coalescing of high-frequency notifications.
///
/// Scroll events can arrive for every pixel moved. The host calls
/// [`notify`](Self::notify) for each one and requests a display frame only when
/// it returns `true`; in the frame callback it calls [`take`](Self::take) and
/// recomputes once with the newest value. Values that arrive while a frame is
/// pending replace the pending one and are never queued.
#[derive(Debug, Default)]
pub struct FrameCoalescer<T> {
    pending: Option<T>,
    superseded: u64,
    flushed: u64,
}

impl<T> FrameCoalescer<T> {
    pub fn new() -> Self {
        Self {
            pending: None,
            superseded: 0,
            flushed: 0,
        }
    }

    /// Record a notification. Returns `true` when no frame is pending yet and
    /// the caller must request one.
    pub fn notify(&mut self, value: T) -> bool {
        match self.pending.replace(value) {
            Some(_) => {
                self.superseded += 1;
                false
            }
            None => true,
        }
    }

    /// Take the newest pending value at frame time.
    pub fn take(&mut self) -> Option<T> {
        let value = self.pending.take();
        if value.is_some() {
            self.flushed += 1;
        }
        value
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Notifications replaced before their frame ran.
    pub fn superseded(&self) -> u64 {
        self.superseded
    }

    /// Frames that delivered a value.
    pub fn flushed(&self) -> u64 {
        self.flushed
    }
}

#[cfg(test)]
mod tests {
    use super::FrameCoalescer;

    #[test]
    fn test_burst_requests_one_frame_and_keeps_latest() {
        let mut coalescer = FrameCoalescer::new();
        assert!(coalescer.notify(10.0));
        assert!(!coalescer.notify(11.0));
        assert!(!coalescer.notify(12.0));
        assert!(coalescer.is_pending());

        assert_eq!(coalescer.take(), Some(12.0));
        assert_eq!(coalescer.superseded(), 2);
        assert_eq!(coalescer.flushed(), 1);
        assert!(!coalescer.is_pending());
    }

    #[test]
    fn test_next_burst_after_frame_requests_again() {
        let mut coalescer = FrameCoalescer::new();
        assert!(coalescer.notify(1u32));
        assert_eq!(coalescer.take(), Some(1));
        assert!(coalescer.notify(2));
        assert_eq!(coalescer.take(), Some(2));
        assert_eq!(coalescer.superseded(), 0);
    }

    #[test]
    fn test_empty_frame_yields_nothing() {
        let mut coalescer: FrameCoalescer<f64> = FrameCoalescer::new();
        assert_eq!(coalescer.take(), None);
        assert_eq!(coalescer.flushed(), 0);
    }
}
