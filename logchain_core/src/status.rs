//! Results of a single handler step and of a whole dispatch.

/// What one handler did with a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Terminal action performed; the chain stops here.
    Handled,
    /// Not this handler's category; pass to the next node.
    Forward,
}

/// What the chain as a whole did with a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// Consumed by the named handler.
    Handled { by: &'static str },
    /// Fell off the end of the chain without a match.
    Dropped,
}
