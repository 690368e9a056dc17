use std::fmt;

/// Slot of this module in the host's module chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModuleId(pub usize);

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle events delivered by the host for a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleEvent {
    /// Query newly started.
    New,
    /// Query passed back to this module.
    Pass,
    /// The module below finished resolving.
    ModDone,
    Reply,
    NoReply,
    CapsFail,
    Error,
}

impl ModuleEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModuleEvent::New => "new",
            ModuleEvent::Pass => "pass",
            ModuleEvent::ModDone => "moddone",
            ModuleEvent::Reply => "reply",
            ModuleEvent::NoReply => "noreply",
            ModuleEvent::CapsFail => "capsfail",
            ModuleEvent::Error => "error",
        }
    }
}

impl fmt::Display for ModuleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where this module stands for one query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleState {
    AwaitingResolution,
    Finished,
    Errored,
}

impl ModuleState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, ModuleState::Finished | ModuleState::Errored)
    }
}

/// Execution state reported back to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtState {
    WaitModule,
    Finished,
    Error,
}
