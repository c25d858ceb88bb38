use crossbeam_channel::Sender;

use super::events::AudioCommand;

/// One-way push into the audio collaborator.
///
/// The sampler renders on its own thread; the session never waits on it and
/// never learns whether a command was honoured. A burst faster than the
/// audio side can render is accepted silently (voice stealing is its
/// problem, not ours).
pub trait AudioSink {
    fn send(&mut self, cmd: AudioCommand);
}

impl<T: AudioSink + ?Sized> AudioSink for &mut T {
    fn send(&mut self, cmd: AudioCommand) {
        (**self).send(cmd);
    }
}

/// Fire-and-forget hand-off into the audio thread. A full or disconnected
/// channel drops the command: a missed note is preferable to a blocked
/// event loop.
impl AudioSink for Sender<AudioCommand> {
    fn send(&mut self, cmd: AudioCommand) {
        let _ = self.try_send(cmd);
    }
}

/// Synchronous collection, for tests and offline rendering.
impl AudioSink for Vec<AudioCommand> {
    fn send(&mut self, cmd: AudioCommand) {
        self.push(cmd);
    }
}
