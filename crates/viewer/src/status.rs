use std::fmt;

/// Simulated link state shown next to the frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionStatus {
    #[default]
    Uninitialized,
    Ready,
    Connected,
    Disconnected,
}

impl ConnectionStatus {
    /// Whether `self -> next` is an edge of the status state machine.
    ///
    /// Uninitialized -> Ready -> Connected -> Disconnected, and a new feed
    /// may reconnect from Disconnected.
    pub fn can_transition_to(self, next: ConnectionStatus) -> bool {
        use ConnectionStatus::*;
        matches!(
            (self, next),
            (Uninitialized, Ready)
                | (Ready, Connected)
                | (Connected, Disconnected)
                | (Disconnected, Connected)
        )
    }
}

impl fmt::Display for ConnectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConnectionStatus::Uninitialized => write!(f, "Initialized"),
            ConnectionStatus::Ready => write!(f, "Ready (simulated)"),
            ConnectionStatus::Connected => write!(f, "Connected (simulated)"),
            ConnectionStatus::Disconnected => write!(f, "Disconnected"),
        }
    }
}
