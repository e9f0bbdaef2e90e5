use crate::dsp::fixed;

/*
ADSR Envelope Implementation
============================

A linear ADSR envelope generator running entirely in fixed point.

Vocabulary
----------

  level       The envelope's current value, Q8.24 (0 to ENV_ONE). The extra
              fractional bits over the Q16.16 signal format keep long ramps
              smooth: a 2-second attack at 48kHz needs steps of ~1/96000,
              which Q16.16 would quantize to zero.

  gate        The note on/off signal. note_on enters Attack, note_off
              enters Release from wherever the envelope currently is.

  increment   How much `level` changes per tick, precomputed from a
              millisecond duration once at configuration time — never
              recomputed in the audio path.

  gain        What the caller actually multiplies the signal by: the level
              downshifted to Q16.16 and then SQUARED. The square turns the
              linear ramp into an approximately perceptually-linear
              loudness curve.


The State Machine
-----------------

    ┌──────────────────────────────────────────────────────┐
    │                                                      │
    │   ┌──────┐  note_on   ┌────────┐  level=1   ┌─────┐ │
    │   │ Idle │ ─────────→ │ Attack │ ─────────→ │Decay│ │
    │   └──────┘            └────────┘            └─────┘ │
    │       ↑                    │                   │    │
    │       │                    │ note_off          │    │
    │       │                    ↓                   ↓    │
    │       │               ┌─────────┐  level=S  ┌─────┐ │
    │       │               │ Release │ ←──────── │ Sus │ │
    │       │               └─────────┘  note_off └─────┘ │
    │       │                    │                        │
    │       │    level=0         │                        │
    │       └────────────────────┘                        │
    │                                                      │
    └──────────────────────────────────────────────────────┘

note_on forces Attack from ANY state without resetting the level. A voice
retriggered mid-note ramps up again from wherever it currently sits — an
audible soft "re-attack" rather than a click back to zero. This is
intentional retrigger behavior and callers rely on it; see the
soft_retrigger test.

Sustain and Idle re-assert their level every tick instead of leaving it
alone, so no arithmetic drift can accumulate while the machine is parked.
Stage boundaries clamp: Attack ends at exactly ENV_ONE, Decay at exactly
the sustain level, Release at exactly 0.
*/

/// The current stage of the envelope state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvelopeState {
    Idle,    // gate low, level pinned to 0
    Attack,  // ramping up toward ENV_ONE
    Decay,   // ramping down toward the sustain level
    Sustain, // holding the sustain level while the gate is high
    Release, // gate went low, ramping down to 0
}

/// Precomputed per-sample rates, all Q8.24.
///
/// Computing these takes divisions, so it happens once per configuration —
/// note events and ticks only ever add, subtract and compare.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvelopeParams {
    attack: i32,
    decay: i32,
    sustain: i32,
    release: i32,
}

impl EnvelopeParams {
    /// Build rates from stage durations in milliseconds and a Q16.16
    /// sustain level. Caller contract: `sample_rate` is nonzero.
    pub fn new(
        attack_ms: u32,
        decay_ms: u32,
        sustain: i32,
        release_ms: u32,
        sample_rate: u32,
    ) -> Self {
        Self {
            attack: ms_to_increment(attack_ms, sample_rate),
            decay: ms_to_increment(decay_ms, sample_rate),
            sustain: sustain_to_hp(sustain),
            release: ms_to_increment(release_ms, sample_rate),
        }
    }

    /// Instant attack/decay/release at full sustain. A voice configured
    /// with these behaves like a plain gate.
    pub const fn instant() -> Self {
        Self {
            attack: fixed::ENV_ONE,
            decay: fixed::ENV_ONE,
            sustain: fixed::ENV_ONE,
            release: fixed::ENV_ONE,
        }
    }
}

impl Default for EnvelopeParams {
    fn default() -> Self {
        Self::instant()
    }
}

/// Per-sample increment that traverses [0, ENV_ONE] in `ms` milliseconds.
/// `ms == 0` means a one-sample transition.
fn ms_to_increment(ms: u32, sample_rate: u32) -> i32 {
    if ms == 0 {
        return fixed::ENV_ONE;
    }
    let total_samples = ((ms as u64 * sample_rate as u64) / 1000).max(1);
    (fixed::ENV_ONE as u64 / total_samples) as i32
}

/// Upshift a Q16.16 sustain level into the envelope's Q8.24 format.
fn sustain_to_hp(sustain: i32) -> i32 {
    sustain << (fixed::ENV_SHIFT - fixed::SHIFT)
}

pub struct Envelope {
    state: EnvelopeState,
    level: i32, // Q8.24
    params: EnvelopeParams,
}

impl Envelope {
    pub fn new(params: EnvelopeParams) -> Self {
        Self {
            state: EnvelopeState::Idle,
            level: 0,
            params,
        }
    }

    /// Gate high: enter Attack from any state, keeping the current level
    /// (soft retrigger — see module notes).
    pub fn note_on(&mut self) {
        self.state = EnvelopeState::Attack;
    }

    /// Gate low: enter Release from any state.
    pub fn note_off(&mut self) {
        self.state = EnvelopeState::Release;
    }

    pub fn set_params(&mut self, params: EnvelopeParams) {
        self.params = params;
    }

    /// Advance one tick and return the Q16.16 gain to multiply the signal
    /// by (the squared, downshifted level).
    pub fn process(&mut self) -> i32 {
        match self.state {
            EnvelopeState::Idle => {
                self.level = 0;
            }
            EnvelopeState::Attack => {
                self.level += self.params.attack;
                if self.level >= fixed::ENV_ONE {
                    self.level = fixed::ENV_ONE;
                    self.state = EnvelopeState::Decay;
                }
            }
            EnvelopeState::Decay => {
                self.level -= self.params.decay;
                if self.level <= self.params.sustain {
                    self.level = self.params.sustain;
                    self.state = EnvelopeState::Sustain;
                }
            }
            EnvelopeState::Sustain => {
                self.level = self.params.sustain;
            }
            EnvelopeState::Release => {
                self.level -= self.params.release;
                if self.level <= 0 {
                    self.level = 0;
                    self.state = EnvelopeState::Idle;
                }
            }
        }

        debug_assert!((0..=fixed::ENV_ONE).contains(&self.level));

        let linear = self.level >> (fixed::ENV_SHIFT - fixed::SHIFT);
        fixed::mul(linear, linear)
    }

    /// Current Q8.24 level (the raw ramp, not the squared gain).
    pub fn level(&self) -> i32 {
        self.level
    }

    pub fn state(&self) -> EnvelopeState {
        self.state
    }

    /// True while the envelope produces (or is about to produce) output.
    pub fn is_active(&self) -> bool {
        self.state != EnvelopeState::Idle
    }
}
