use std::sync::atomic::{AtomicU64, Ordering};

/// Abstraction over a shared, monotonically increasing generation counter.
pub trait GenerationCounter {
    /// Increment the counter and return the new generation.
    fn advance(&self) -> u64;
    /// Read the latest generation.
    fn latest(&self) -> u64;
}

impl GenerationCounter for AtomicU64 {
    fn advance(&self) -> u64 {
        self.fetch_add(1, Ordering::AcqRel) + 1
    }

    fn latest(&self) -> u64 {
        self.load(Ordering::Acquire)
    }
}

/// Generation a render request was started under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RenderTicket(u64);

impl RenderTicket {
    /// The generation number carried by this ticket.
    #[must_use]
    pub const fn generation(self) -> u64 {
        self.0
    }
}

/// Discards results of render requests that a newer request has superseded.
///
/// Each request calls [`RenderGate::begin`] before computing and hands its
/// ticket back with the result to [`RenderGate::apply`]; the result survives
/// only if no request began in the meantime. The engine itself never checks
/// the gate: computations always run to completion and staleness is judged
/// at apply time.
///
/// ```
/// use revgraph_core::RenderGate;
///
/// let gate = RenderGate::new();
/// let slow = gate.begin();
/// let fast = gate.begin();
/// assert_eq!(gate.apply(fast, "fresh"), Some("fresh"));
/// assert_eq!(gate.apply(slow, "stale"), None);
/// ```
#[derive(Debug, Default)]
pub struct RenderGate<C = AtomicU64> {
    latest: C,
}

impl RenderGate {
    /// Create a gate at generation zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            latest: AtomicU64::new(0),
        }
    }
}

impl<C: GenerationCounter> RenderGate<C> {
    /// Create a gate over a caller-provided counter.
    pub fn with_counter(counter: C) -> Self {
        Self { latest: counter }
    }

    /// Start a new render request, superseding every earlier ticket.
    pub fn begin(&self) -> RenderTicket {
        RenderTicket(self.latest.advance())
    }

    /// True if no request has begun since `ticket` was issued.
    pub fn is_current(&self, ticket: RenderTicket) -> bool {
        self.latest.latest() == ticket.0
    }

    /// Latest generation handed out so far.
    pub fn latest(&self) -> u64 {
        self.latest.latest()
    }

    /// Return `value` if `ticket` is still current, dropping it otherwise.
    pub fn apply<T>(&self, ticket: RenderTicket, value: T) -> Option<T> {
        if self.is_current(ticket) {
            Some(value)
        } else {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                ticket = ticket.0,
                latest = self.latest.latest(),
                "discarding superseded render result"
            );
            None
        }
    }
}
