//! The creature state machine and its supporting types.
use std::f32::consts::{PI, TAU};

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{
    core::config::{CreatureConfig, MotionConfig},
    food::FoodKind,
    motion::{ApproachPhase, ApproachSequence, ScalarTween},
};

const SCALE_EPSILON: f32 = 1e-4;
const EVOLUTION_HOP_HEIGHT: f32 = 0.8;

/// Surface finish of the creature. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SlimeSkin {
    #[default]
    Normal,
    Wood,
    Metal,
    Bubble,
    Glass,
    Stone,
    Emissive,
}

impl SlimeSkin {
    pub const ALL: [SlimeSkin; 7] = [
        SlimeSkin::Normal,
        SlimeSkin::Wood,
        SlimeSkin::Metal,
        SlimeSkin::Bubble,
        SlimeSkin::Glass,
        SlimeSkin::Stone,
        SlimeSkin::Emissive,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Wood => "wood",
            Self::Metal => "metal",
            Self::Bubble => "bubble",
            Self::Glass => "glass",
            Self::Stone => "stone",
            Self::Emissive => "emissive",
        }
    }

    /// Reflective skins mirror the lit room.
    pub fn is_reflective(self) -> bool {
        matches!(self, Self::Metal | Self::Glass)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mood {
    #[default]
    Neutral,
    Happy,
}

/// What the creature is doing right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SlimeActivity {
    #[default]
    Idle,
    Petted,
    /// Turning towards food.
    Approaching,
    /// Moving towards food.
    Travelling,
}

/// Result of a skin swap, used to update materials and reflection bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkinChange {
    pub from: SlimeSkin,
    pub to: SlimeSkin,
}

/// Why a feed request was turned away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedRefusal {
    Busy,
    BeingPetted,
}

/// Emitted by [`Slime::advance`] when a timed behaviour completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlimeSignal {
    FinishedEating(FoodKind),
}

#[derive(Debug, Clone)]
struct FeedErrand {
    food: FoodKind,
    sequence: ApproachSequence,
}

/// The pet. Owns its skin, mood, growth and evolution state; positional
/// movement is written into the entity's `Transform` by [`Slime::advance`].
#[derive(Component, Debug, Clone)]
pub struct Slime {
    skin: SlimeSkin,
    mood: Mood,
    activity: SlimeActivity,
    errand: Option<FeedErrand>,
    growth: ScalarTween,
    scale_ceiling: f32,
    grow_step: f32,
    grow_seconds: f32,
    evolved: bool,
    evolution: Option<ScalarTween>,
    evolution_seconds: f32,
}

impl Slime {
    pub fn new(config: &CreatureConfig) -> Self {
        Self {
            skin: SlimeSkin::default(),
            mood: Mood::Neutral,
            activity: SlimeActivity::Idle,
            errand: None,
            growth: ScalarTween::settled(1.0),
            scale_ceiling: config.scale_ceiling,
            grow_step: config.grow_step,
            grow_seconds: config.grow_seconds,
            evolved: false,
            evolution: None,
            evolution_seconds: config.evolution_seconds,
        }
    }

    pub fn skin(&self) -> SlimeSkin {
        self.skin
    }

    pub fn mood(&self) -> Mood {
        self.mood
    }

    pub fn activity(&self) -> SlimeActivity {
        self.activity
    }

    /// True while an eat sequence is in flight.
    pub fn is_busy(&self) -> bool {
        self.errand.is_some()
    }

    pub fn is_petted(&self) -> bool {
        self.activity == SlimeActivity::Petted
    }

    /// Current visual scale (moves towards [`Slime::target_scale`] while growing).
    pub fn scale(&self) -> f32 {
        self.growth.value()
    }

    pub fn target_scale(&self) -> f32 {
        self.growth.target()
    }

    pub fn is_evolved(&self) -> bool {
        self.evolved
    }

    /// Progress of the transformation animation, if it is playing.
    pub fn evolution_progress(&self) -> Option<f32> {
        self.evolution.as_ref().map(ScalarTween::progress)
    }

    /// Food the creature is currently heading for.
    #[cfg_attr(not(feature = "pet_debug"), allow(dead_code))]
    pub fn meal(&self) -> Option<FoodKind> {
        self.errand.as_ref().map(|errand| errand.food)
    }

    /// Swaps the skin. Re-applying the active skin is a no-op.
    pub fn set_skin(&mut self, skin: SlimeSkin) -> Option<SkinChange> {
        if skin == self.skin {
            return None;
        }
        let change = SkinChange {
            from: self.skin,
            to: skin,
        };
        self.skin = skin;
        Some(change)
    }

    /// Starts petting. Refused while eating.
    pub fn begin_pet(&mut self) -> bool {
        if self.is_busy() {
            return false;
        }
        self.activity = SlimeActivity::Petted;
        self.mood = Mood::Happy;
        true
    }

    /// Ends petting. Returns `false` when the creature was not being petted.
    pub fn end_pet(&mut self) -> bool {
        if !self.is_petted() {
            return false;
        }
        self.activity = SlimeActivity::Idle;
        self.mood = Mood::Neutral;
        true
    }

    /// Sends the creature after `food` at `target`.
    ///
    /// On success the orient phase has already begun: the creature is happy
    /// and busy, and the caller should apply its "started eating" effects now.
    /// Returns the seconds until arrival, which [`Slime::advance`] reports.
    pub fn feed(
        &mut self,
        transform: &Transform,
        target: Vec3,
        food: FoodKind,
        motion: &MotionConfig,
    ) -> Result<f32, FeedRefusal> {
        if self.is_busy() {
            return Err(FeedRefusal::Busy);
        }
        if self.is_petted() {
            return Err(FeedRefusal::BeingPetted);
        }

        let sequence = ApproachSequence::begin(transform, target, motion);
        let eta = motion.orient_seconds + sequence.travel_seconds();
        self.errand = Some(FeedErrand { food, sequence });
        self.activity = SlimeActivity::Approaching;
        self.mood = Mood::Happy;
        Ok(eta)
    }

    /// Grows by one step unless already at the ceiling.
    pub fn grow(&mut self) -> bool {
        let current_target = self.growth.target();
        if current_target >= self.scale_ceiling - SCALE_EPSILON {
            return false;
        }
        let next = (current_target + self.grow_step).min(self.scale_ceiling);
        self.growth = ScalarTween::new(self.growth.value(), next, self.grow_seconds);
        true
    }

    /// One-way transformation. Returns `true` only on the call that evolves.
    pub fn evolve(&mut self) -> bool {
        if self.evolved {
            return false;
        }
        self.evolved = true;
        self.evolution = Some(ScalarTween::new(0.0, 1.0, self.evolution_seconds));
        true
    }

    /// Advances every timed behaviour by `dt` and writes pose and scale into
    /// the creature's root transform.
    pub fn advance(&mut self, dt: f32, transform: &mut Transform) -> Option<SlimeSignal> {
        let mut signal = None;
        self.growth.advance(dt);

        if let Some(errand) = self.errand.as_mut() {
            let arrived = errand.sequence.advance(dt, transform);
            if arrived {
                let food = errand.food;
                self.errand = None;
                self.activity = SlimeActivity::Idle;
                self.mood = Mood::Neutral;
                self.grow();
                signal = Some(SlimeSignal::FinishedEating(food));
            } else if errand.sequence.phase() == ApproachPhase::Travelling {
                self.activity = SlimeActivity::Travelling;
            }
        }

        transform.scale = Vec3::splat(self.growth.value());

        if let Some(evolution) = self.evolution.as_mut() {
            evolution.advance(dt);
            if evolution.is_finished() {
                self.evolution = None;
            }
        }

        signal
    }

    /// Hop height and spin of the body while the transformation plays.
    pub fn evolution_pose(&self) -> (f32, f32) {
        match self.evolution_progress() {
            Some(progress) => (
                (progress * PI).sin() * EVOLUTION_HOP_HEIGHT,
                progress * TAU,
            ),
            None => (0.0, 0.0),
        }
    }
}

/// Marker for the body mesh child of the creature.
#[derive(Component, Debug, Default)]
pub struct SlimeBody;

/// A mesh whose material follows the creature's skin.
#[derive(Component, Debug)]
pub struct SkinnedPart {
    pub applied: SlimeSkin,
}

impl SkinnedPart {
    /// Skin every part is spawned with; the sync system catches up from here.
    pub const INITIAL: SlimeSkin = SlimeSkin::Normal;
}

impl Default for SkinnedPart {
    fn default() -> Self {
        Self {
            applied: Self::INITIAL,
        }
    }
}

/// Present on body parts while a reflective skin is applied.
#[derive(Component, Debug, Default)]
pub struct ReflectionBinding;

/// Marker added once the evolved features have been attached.
#[derive(Component, Debug, Default)]
pub struct EvolvedLook;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::PetConfig;

    fn slime() -> Slime {
        Slime::new(&PetConfig::default().creature)
    }

    fn motion() -> MotionConfig {
        PetConfig::default().motion
    }

    #[test]
    fn starts_neutral_idle_and_unevolved() {
        let slime = slime();
        assert_eq!(slime.skin(), SlimeSkin::Normal);
        assert_eq!(slime.mood(), Mood::Neutral);
        assert_eq!(slime.activity(), SlimeActivity::Idle);
        assert_eq!(slime.scale(), 1.0);
        assert!(!slime.is_busy());
        assert!(!slime.is_evolved());
    }

    #[test]
    fn setting_same_skin_twice_is_idempotent() {
        let mut slime = slime();
        let change = slime.set_skin(SlimeSkin::Metal).expect("skin changes");
        assert_eq!(change.from, SlimeSkin::Normal);
        assert!(change.to.is_reflective());

        let before = slime.clone();
        assert_eq!(slime.set_skin(SlimeSkin::Metal), None);
        assert_eq!(slime.skin(), before.skin());
        assert_eq!(slime.mood(), before.mood());
        assert_eq!(slime.scale(), before.scale());
    }

    #[test]
    fn petting_toggles_mood() {
        let mut slime = slime();
        assert!(!slime.end_pet());

        assert!(slime.begin_pet());
        assert_eq!(slime.mood(), Mood::Happy);
        assert!(slime.is_petted());

        assert!(slime.end_pet());
        assert_eq!(slime.mood(), Mood::Neutral);
        assert_eq!(slime.activity(), SlimeActivity::Idle);
    }

    #[test]
    fn feeding_runs_approach_then_grows() {
        let mut slime = slime();
        let mut transform = Transform::default();

        let eta = slime
            .feed(&transform, Vec3::new(3.0, 0.0, 0.0), FoodKind::Apple, &motion())
            .expect("idle slime accepts food");
        assert!((eta - 4.0).abs() < 1e-5);
        assert!(slime.is_busy());
        assert_eq!(slime.mood(), Mood::Happy);
        assert_eq!(slime.activity(), SlimeActivity::Approaching);
        assert_eq!(slime.meal(), Some(FoodKind::Apple));
        assert_eq!(transform.translation, Vec3::ZERO);

        assert_eq!(slime.advance(1.0, &mut transform), None);
        assert_eq!(slime.activity(), SlimeActivity::Travelling);
        assert_eq!(slime.advance(2.0, &mut transform), None);
        assert_eq!(
            slime.advance(1.0, &mut transform),
            Some(SlimeSignal::FinishedEating(FoodKind::Apple))
        );

        assert_eq!(transform.translation, Vec3::new(3.0, 0.0, 0.0));
        assert!(!slime.is_busy());
        assert_eq!(slime.mood(), Mood::Neutral);
        assert!((slime.target_scale() - 1.1).abs() < 1e-5);

        slime.advance(0.3, &mut transform);
        assert!((transform.scale.x - 1.1).abs() < 1e-5);
    }

    #[test]
    fn second_feed_while_busy_is_refused() {
        let mut slime = slime();
        let mut transform = Transform::default();
        slime
            .feed(&transform, Vec3::new(3.0, 0.0, 0.0), FoodKind::Apple, &motion())
            .expect("first feed");
        slime.advance(0.5, &mut transform);

        assert_eq!(
            slime.feed(&transform, Vec3::new(-2.0, 0.0, 0.0), FoodKind::Cake, &motion()),
            Err(FeedRefusal::Busy)
        );
        assert_eq!(slime.meal(), Some(FoodKind::Apple));

        let mut arrivals = 0;
        for _ in 0..10 {
            if slime.advance(1.0, &mut transform).is_some() {
                arrivals += 1;
            }
        }
        assert_eq!(arrivals, 1);
        assert_eq!(transform.translation, Vec3::new(3.0, 0.0, 0.0));
    }

    #[test]
    fn cannot_feed_while_petted_or_pet_while_eating() {
        let mut slime = slime();
        let transform = Transform::default();

        slime.begin_pet();
        assert_eq!(
            slime.feed(&transform, Vec3::X, FoodKind::Apple, &motion()),
            Err(FeedRefusal::BeingPetted)
        );
        slime.end_pet();

        slime
            .feed(&transform, Vec3::X, FoodKind::Apple, &motion())
            .expect("feed after release");
        assert!(!slime.begin_pet());
        assert_eq!(slime.activity(), SlimeActivity::Approaching);
    }

    #[test]
    fn growth_is_monotonic_and_capped() {
        let mut slime = slime();
        let mut transform = Transform::default();
        let mut last = slime.scale();

        for _ in 0..20 {
            slime.grow();
            for _ in 0..4 {
                slime.advance(0.1, &mut transform);
                assert!(slime.scale() >= last);
                last = slime.scale();
            }
        }

        assert!((slime.scale() - 1.6).abs() < 1e-5);
        assert!(slime.scale() <= 1.6);
        assert!(!slime.grow());
    }

    #[test]
    fn evolve_is_one_shot() {
        let mut slime = slime();
        let mut transform = Transform::default();

        assert!(slime.evolve());
        assert!(slime.is_evolved());
        assert_eq!(slime.evolution_progress(), Some(0.0));

        slime.advance(0.75, &mut transform);
        let (hop, spin) = slime.evolution_pose();
        assert!(hop > 0.0 && spin > 0.0);

        assert!(!slime.evolve());
        assert!(slime.is_evolved());
        assert!((slime.evolution_progress().expect("still playing") - 0.5).abs() < 1e-5);

        slime.advance(1.0, &mut transform);
        assert_eq!(slime.evolution_progress(), None);
        assert!(!slime.evolve());
        assert_eq!(slime.evolution_progress(), None);
    }
}
