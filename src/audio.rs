//! Audio system using Web Audio API
//!
//! Procedurally generated sound effects - no asset files needed.

use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

use crate::feedback::SoundCue;

/// Bass line for the background loop (Hz), one entry per step
const MUSIC_NOTES: [f32; 8] = [110.0, 165.0, 220.0, 165.0, 131.0, 196.0, 262.0, 196.0];
/// Seconds per step
const MUSIC_STEP: f64 = 0.25;
/// Loop gain at full music volume
const MUSIC_GAIN: f32 = 0.12;

/// Audio manager for the game
pub struct AudioManager {
    ctx: Option<AudioContext>,
    volume: f32,
    music_volume: f32,
    /// Live background loop, if one is playing
    music: Option<(OscillatorNode, GainNode)>,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioManager {
    pub fn new() -> Self {
        // Try to create audio context (may fail if not in secure context)
        let ctx = AudioContext::new().ok();
        if ctx.is_none() {
            log::warn!("Failed to create AudioContext - audio disabled");
        }
        Self {
            ctx,
            volume: 0.8,
            music_volume: 0.56,
            music: None,
        }
    }

    /// Resume audio context (required after user gesture)
    pub fn resume(&self) {
        if let Some(ctx) = &self.ctx {
            let _ = ctx.resume();
        }
    }

    /// Effective volume (0.0 - 1.0), already folded with mute
    pub fn set_volume(&mut self, vol: f32) {
        self.volume = vol.clamp(0.0, 1.0);
    }

    /// Music volume (0.0 - 1.0), already folded with mute. Applies to a live loop too.
    pub fn set_music_volume(&mut self, vol: f32) {
        self.music_volume = vol.clamp(0.0, 1.0);
        if let Some((_, gain)) = &self.music {
            gain.gain().set_value(self.music_volume * MUSIC_GAIN);
        }
    }

    /// Start the background loop, scheduled to cover `seconds`
    ///
    /// Replaces a loop that is already playing.
    pub fn start_music(&mut self, seconds: f64) {
        self.stop_music();

        let Some(ctx) = &self.ctx else { return };
        if ctx.state() == web_sys::AudioContextState::Suspended {
            let _ = ctx.resume();
        }

        let Some((osc, gain)) = self.create_osc(ctx, MUSIC_NOTES[0], OscillatorType::Triangle)
        else {
            return;
        };

        let start = ctx.current_time();
        let steps = (seconds.max(0.0) / MUSIC_STEP).ceil() as usize;
        let freq = osc.frequency();
        for (i, note) in MUSIC_NOTES.iter().cycle().take(steps.max(1)).enumerate() {
            freq.set_value_at_time(*note, start + i as f64 * MUSIC_STEP).ok();
        }
        gain.gain().set_value(self.music_volume * MUSIC_GAIN);

        osc.start_with_when(start).ok();
        // Runs out on its own if nobody stops it
        osc.stop_with_when(start + steps as f64 * MUSIC_STEP + 1.0).ok();
        self.music = Some((osc, gain));
    }

    /// Stop the background loop
    pub fn stop_music(&mut self) {
        if let Some((osc, gain)) = self.music.take() {
            let _ = osc.stop();
            let _ = gain.disconnect();
        }
    }

    /// Play a sound cue
    pub fn play(&self, cue: SoundCue) {
        let vol = self.volume;
        if vol <= 0.0 {
            return;
        }

        let Some(ctx) = &self.ctx else { return };

        // Resume context if suspended (browsers require user gesture)
        if ctx.state() == web_sys::AudioContextState::Suspended {
            let _ = ctx.resume();
        }

        match cue {
            SoundCue::Coin => self.play_coin(ctx, vol),
            SoundCue::RoundWon => self.play_round_won(ctx, vol),
            SoundCue::RoundLost => self.play_round_lost(ctx, vol),
        }
    }

    /// Create an oscillator with gain envelope
    fn create_osc(
        &self,
        ctx: &AudioContext,
        freq: f32,
        osc_type: OscillatorType,
    ) -> Option<(OscillatorNode, GainNode)> {
        let osc = ctx.create_oscillator().ok()?;
        let gain = ctx.create_gain().ok()?;

        osc.set_type(osc_type);
        osc.frequency().set_value(freq);
        osc.connect_with_audio_node(&gain).ok()?;
        gain.connect_with_audio_node(&ctx.destination()).ok()?;

        Some((osc, gain))
    }

    /// Coin - two quick rising square blips
    fn play_coin(&self, ctx: &AudioContext, vol: f32) {
        for (i, freq) in [988.0, 1319.0].iter().enumerate() {
            let delay = i as f64 * 0.07;
            if let Some((osc, gain)) = self.create_osc(ctx, *freq, OscillatorType::Square) {
                let t = ctx.current_time() + delay;
                gain.gain().set_value_at_time(vol * 0.2, t).ok();
                gain.gain()
                    .exponential_ramp_to_value_at_time(0.01, t + 0.2)
                    .ok();
                osc.start_with_when(t).ok();
                osc.stop_with_when(t + 0.25).ok();
            }
        }
    }

    /// Round won - rising fanfare
    fn play_round_won(&self, ctx: &AudioContext, vol: f32) {
        for (i, freq) in [500.0, 600.0, 700.0, 800.0, 1000.0].iter().enumerate() {
            let delay = i as f64 * 0.08;
            if let Some((osc, gain)) = self.create_osc(ctx, *freq, OscillatorType::Triangle) {
                let t = ctx.current_time() + delay;
                gain.gain().set_value_at_time(vol * 0.25, t).ok();
                gain.gain()
                    .exponential_ramp_to_value_at_time(0.01, t + 0.25)
                    .ok();
                osc.start_with_when(t).ok();
                osc.stop_with_when(t + 0.3).ok();
            }
        }
    }

    /// Round lost - sad descending
    fn play_round_lost(&self, ctx: &AudioContext, vol: f32) {
        for (i, freq) in [400.0, 350.0, 300.0, 200.0].iter().enumerate() {
            let delay = i as f64 * 0.2;
            if let Some((osc, gain)) = self.create_osc(ctx, *freq, OscillatorType::Sine) {
                let t = ctx.current_time() + delay;
                gain.gain().set_value_at_time(vol * 0.3, t).ok();
                gain.gain()
                    .exponential_ramp_to_value_at_time(0.01, t + 0.3)
                    .ok();
                osc.start_with_when(t).ok();
                osc.stop_with_when(t + 0.4).ok();
            }
        }
    }
}
