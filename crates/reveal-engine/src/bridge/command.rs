/// Side effects the controller asks the host to perform.
/// The engine never touches timers or the network itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Start the periodic countdown tick.
    StartTicker,
    /// Stop the periodic countdown tick. Harmless when none is running.
    StopTicker,
    /// Issue one `GET` to the results endpoint and report back with
    /// `RevealEvent::ResultsArrived`.
    FetchResults,
    /// Issue one `POST` to the restart endpoint and report back with
    /// `RevealEvent::RestartFinished`.
    PostRestart,
    /// Fire the two corner confetti bursts and start the frame loop.
    LaunchConfetti,
    /// Drop all decorative animation (confetti, pending entrances, flash).
    ClearEffects,
    /// Play the one-shot body flash.
    Flash,
}

/// A queue of commands.
/// The controller pushes while handling an event; the host drains after.
#[derive(Debug)]
pub struct CommandQueue {
    commands: Vec<Command>,
}

impl CommandQueue {
    pub fn new() -> Self {
        Self {
            commands: Vec::with_capacity(8),
        }
    }

    pub fn push(&mut self, command: Command) {
        self.commands.push(command);
    }

    /// Take every pending command in issue order, leaving the queue empty.
    pub fn drain(&mut self) -> Vec<Command> {
        std::mem::take(&mut self.commands)
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Default for CommandQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_drain_in_order() {
        let mut q = CommandQueue::new();
        q.push(Command::StopTicker);
        q.push(Command::FetchResults);
        assert_eq!(q.drain(), vec![Command::StopTicker, Command::FetchResults]);
        assert!(q.is_empty());
    }

    #[test]
    fn drain_on_empty_queue() {
        let mut q = CommandQueue::default();
        assert!(q.is_empty());
        assert!(q.drain().is_empty());
    }
}
