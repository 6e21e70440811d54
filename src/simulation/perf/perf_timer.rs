#[cfg(target_arch = "wasm32")]
fn now_ms() -> f64 {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
fn now_ms() -> f64 {
    use std::sync::OnceLock;
    use std::time::Instant;

    static EPOCH: OnceLock<Instant> = OnceLock::new();
    EPOCH.get_or_init(Instant::now).elapsed().as_secs_f64() * 1000.0
}

/// Split timer: `lap` returns the time since the previous lap, `total` the
/// time since `start`.
pub(crate) struct LapTimer {
    start_ms: f64,
    last_ms: f64,
}

impl LapTimer {
    pub(crate) fn start() -> Self {
        let now = now_ms();
        LapTimer { start_ms: now, last_ms: now }
    }

    pub(crate) fn lap(&mut self) -> f64 {
        let now = now_ms();
        let elapsed = now - self.last_ms;
        self.last_ms = now;
        elapsed
    }

    pub(crate) fn total(&self) -> f64 {
        now_ms() - self.start_ms
    }
}
