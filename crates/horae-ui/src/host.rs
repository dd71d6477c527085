use std::sync::{Arc, Mutex, MutexGuard};

/// The host-container seam.
///
/// The widget pushes the full face markup through this trait on the
/// initial render and after every update, replacing whatever the host held
/// before. Implementations decide what a "container" is — an in-memory
/// buffer, a file, an embedder's document node. A host that misbehaves is
/// the embedder's responsibility; the widget never inspects the result.
pub trait Host: Send {
    fn replace_markup(&mut self, markup: &str);
}

#[derive(Debug, Default)]
struct HostState {
    markup: String,
    renders: usize,
}

/// [`Host`] retaining the most recent markup in memory.
///
/// Cloning yields another handle onto the same buffer, so an embedder (or
/// a test) can keep one handle and give the other to the widget.
#[derive(Debug, Clone, Default)]
pub struct MemoryHost {
    state: Arc<Mutex<HostState>>,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently rendered markup (empty before the first render).
    pub fn markup(&self) -> String {
        self.lock().markup.clone()
    }

    /// How many times the widget has rendered into this host.
    pub fn render_count(&self) -> usize {
        self.lock().renders
    }

    fn lock(&self) -> MutexGuard<'_, HostState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Host for MemoryHost {
    fn replace_markup(&mut self, markup: &str) {
        let mut state = self.lock();
        state.markup.clear();
        state.markup.push_str(markup);
        state.renders += 1;
    }
}
