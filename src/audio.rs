//! Background music feedback
//!
//! Two music loops play for the whole session: the normal loop while the
//! round is alive and a low, gloomy loop after defeat. Switching between
//! them is a volume crossfade, never a play/stop, so the loops stay in sync
//! and never restart with a click.

use glam::Vec3;

/// Music loops shipped with the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Track {
    /// Upbeat loop while the round is running
    Normal,
    /// Muffled loop after the timer ran out
    Low,
}

impl Track {
    /// Sample file backing this track
    pub fn file_name(&self) -> &'static str {
        match self {
            Track::Normal => "random-bgm.wav",
            Track::Low => "random-bgm-low.wav",
        }
    }
}

/// Handle to a looping sample inside a [`Mixer`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LoopHandle(usize);

/// Sample playback engine seam
pub trait Mixer {
    /// Start `track` looping forever and return a handle to it
    fn play_loop(&mut self, track: Track, volume: f32, position: Vec3, pitch: f32) -> LoopHandle;

    /// Retarget a loop's volume, reaching `target` after `seconds`
    fn ramp_volume(&mut self, handle: LoopHandle, target: f32, seconds: f32);
}

/// Linear ramp of a value toward a target
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ramp {
    pub value: f32,
    pub target: f32,
    /// Seconds left until `value` reaches `target`
    pub remaining: f32,
}

impl Ramp {
    pub fn new(value: f32) -> Self {
        Self {
            value,
            target: value,
            remaining: 0.0,
        }
    }

    /// Head toward `target`, arriving in `seconds` (0 jumps immediately)
    pub fn set(&mut self, target: f32, seconds: f32) {
        self.target = target;
        self.remaining = seconds.max(0.0);
        if self.remaining == 0.0 {
            self.value = target;
        }
    }

    /// Advance the ramp by `dt` seconds
    pub fn step(&mut self, dt: f32) {
        if self.remaining <= dt {
            self.value = self.target;
            self.remaining = 0.0;
        } else {
            self.value += (self.target - self.value) * (dt / self.remaining);
            self.remaining -= dt;
        }
    }

    pub fn is_settled(&self) -> bool {
        self.remaining == 0.0
    }
}

/// A playing loop
#[derive(Debug, Clone)]
pub struct Channel {
    pub track: Track,
    pub volume: Ramp,
    pub position: Vec3,
    pub pitch: f32,
}

/// In-process mixer that keeps channel volumes and advances their ramps
///
/// Sample decoding and output are left to the platform; this tracks what
/// each loop should sound like right now.
#[derive(Debug, Clone)]
pub struct LoopMixer {
    channels: Vec<Channel>,
    master_volume: f32,
    muted: bool,
}

impl Default for LoopMixer {
    fn default() -> Self {
        Self::new()
    }
}

impl LoopMixer {
    pub fn new() -> Self {
        Self {
            channels: Vec::new(),
            master_volume: 1.0,
            muted: false,
        }
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all loops
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Advance every channel's ramp by `dt` seconds
    pub fn advance(&mut self, dt: f32) {
        for channel in &mut self.channels {
            channel.volume.step(dt);
        }
    }

    pub fn channel(&self, handle: LoopHandle) -> Option<&Channel> {
        self.channels.get(handle.0)
    }

    /// Current (ramping) volume of a loop, before master gain
    pub fn volume(&self, handle: LoopHandle) -> Option<f32> {
        self.channel(handle).map(|c| c.volume.value)
    }

    /// Volume a loop is ramping toward
    pub fn target(&self, handle: LoopHandle) -> Option<f32> {
        self.channel(handle).map(|c| c.volume.target)
    }

    /// Volume actually sent to the output
    pub fn output_volume(&self, handle: LoopHandle) -> Option<f32> {
        let gain = if self.muted { 0.0 } else { self.master_volume };
        self.volume(handle).map(|v| v * gain)
    }

    pub fn channels(&self) -> &[Channel] {
        &self.channels
    }
}

impl Mixer for LoopMixer {
    fn play_loop(&mut self, track: Track, volume: f32, position: Vec3, pitch: f32) -> LoopHandle {
        log::debug!("Looping {} at volume {}", track.file_name(), volume);
        self.channels.push(Channel {
            track,
            volume: Ramp::new(volume),
            position,
            pitch,
        });
        LoopHandle(self.channels.len() - 1)
    }

    fn ramp_volume(&mut self, handle: LoopHandle, target: f32, seconds: f32) {
        match self.channels.get_mut(handle.0) {
            Some(channel) => channel.volume.set(target, seconds),
            None => log::warn!("Ramp requested for unknown loop {:?}", handle),
        }
    }
}

/// Which loop is (or is becoming) audible
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mood {
    Normal,
    Defeat,
}

/// Crossfades the two music loops to follow the round's outcome
#[derive(Debug)]
pub struct MusicFeedback<M: Mixer> {
    mixer: M,
    normal: LoopHandle,
    low: LoopHandle,
    ramp_seconds: f32,
    mood: Mood,
}

impl<M: Mixer> MusicFeedback<M> {
    /// Start both loops: normal audible, low silent
    pub fn new(mut mixer: M, ramp_seconds: f32) -> Self {
        let normal = mixer.play_loop(Track::Normal, 1.0, Vec3::ZERO, 0.0);
        let low = mixer.play_loop(Track::Low, 0.0, Vec3::ZERO, 0.0);
        Self {
            mixer,
            normal,
            low,
            ramp_seconds,
            mood: Mood::Normal,
        }
    }

    /// Fade the normal loop in and the low loop out
    pub fn ramp_to_normal(&mut self) {
        self.crossfade(Mood::Normal);
    }

    /// Fade the low loop in and the normal loop out
    pub fn ramp_to_defeat(&mut self) {
        self.crossfade(Mood::Defeat);
    }

    fn crossfade(&mut self, mood: Mood) {
        if self.mood == mood {
            // Re-issuing the same targets would restart the ramp timers
            log::trace!("Music already {:?}", mood);
            return;
        }
        let normal_target = match mood {
            Mood::Normal => 1.0,
            Mood::Defeat => 0.0,
        };
        self.mixer
            .ramp_volume(self.normal, normal_target, self.ramp_seconds);
        self.mixer
            .ramp_volume(self.low, 1.0 - normal_target, self.ramp_seconds);
        self.mood = mood;
        log::debug!("Music crossfade to {:?}", mood);
    }

    pub fn mood(&self) -> Mood {
        self.mood
    }

    pub fn normal_loop(&self) -> LoopHandle {
        self.normal
    }

    pub fn low_loop(&self) -> LoopHandle {
        self.low
    }

    pub fn mixer(&self) -> &M {
        &self.mixer
    }

    pub fn mixer_mut(&mut self) -> &mut M {
        &mut self.mixer
    }
}
