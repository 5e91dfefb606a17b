//! Consumable catalogue and the per-kind food item lifecycle.
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Where hidden food waits: outside the ±5 floor so stray pick rays miss it.
pub const PARKING_POSITION: Vec3 = Vec3::new(6.0, 6.0, 6.0);

/// Kinds of food the player can place in the room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FoodKind {
    #[default]
    Apple,
    Cake,
    Chicken,
}

impl FoodKind {
    pub const ALL: [FoodKind; 3] = [FoodKind::Apple, FoodKind::Cake, FoodKind::Chicken];

    pub fn label(self) -> &'static str {
        match self {
            Self::Apple => "apple",
            Self::Cake => "cake",
            Self::Chicken => "chicken",
        }
    }

    /// Money spent to place one serving.
    pub fn price(self) -> f32 {
        match self {
            Self::Apple => 10.0,
            Self::Cake => 50.0,
            Self::Chicken => 200.0,
        }
    }

    /// Friendship credited when the creature starts heading for the food.
    pub fn friendship_reward(self) -> u32 {
        match self {
            Self::Apple => 5,
            Self::Cake => 20,
            Self::Chicken => 50,
        }
    }

    /// Height at which the model rests on the floor.
    pub fn placement_offset(self) -> f32 {
        match self {
            Self::Apple => 0.28,
            Self::Cake => 0.0,
            Self::Chicken => 0.4,
        }
    }

    pub fn model_scale(self) -> f32 {
        match self {
            Self::Apple => 0.008,
            Self::Cake => 1.0,
            Self::Chicken => 0.03,
        }
    }

    pub fn model_path(self) -> String {
        format!("models/{}.glb", self.label())
    }

    /// Radius of the sphere used when picking the item.
    pub fn pick_radius(self) -> f32 {
        match self {
            Self::Apple => 0.3,
            Self::Cake => 0.5,
            Self::Chicken => 0.45,
        }
    }
}

/// One placeable serving of a given kind. Exactly one exists per kind.
#[derive(Component, Debug, Clone)]
pub struct FoodItem {
    kind: FoodKind,
    position: Vec3,
    visible: bool,
}

impl FoodItem {
    pub fn new(kind: FoodKind) -> Self {
        Self {
            kind,
            position: PARKING_POSITION,
            visible: false,
        }
    }

    pub fn kind(&self) -> FoodKind {
        self.kind
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Moves the item onto the floor at `(x, z)`; visibility is unchanged.
    pub fn place(&mut self, x: f32, z: f32) {
        self.position = Vec3::new(x, self.kind.placement_offset(), z);
    }

    pub fn reveal(&mut self) {
        self.visible = true;
    }

    pub fn conceal(&mut self) {
        self.visible = false;
    }

    pub fn park_offscreen(&mut self) {
        self.position = PARKING_POSITION;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogue_matches_prices_and_rewards() {
        assert_eq!(FoodKind::Apple.price(), 10.0);
        assert_eq!(FoodKind::Apple.friendship_reward(), 5);
        assert_eq!(FoodKind::Cake.price(), 50.0);
        assert_eq!(FoodKind::Cake.friendship_reward(), 20);
        assert_eq!(FoodKind::Chicken.price(), 200.0);
        assert_eq!(FoodKind::Chicken.friendship_reward(), 50);
        assert_eq!(FoodKind::Chicken.model_path(), "models/chicken.glb");
    }

    #[test]
    fn starts_hidden_and_parked() {
        let item = FoodItem::new(FoodKind::Cake);
        assert!(!item.is_visible());
        assert_eq!(item.position(), PARKING_POSITION);
        assert!(PARKING_POSITION.x.abs() > 5.0 && PARKING_POSITION.z.abs() > 5.0);
    }

    #[test]
    fn place_uses_kind_offset_without_revealing() {
        let mut item = FoodItem::new(FoodKind::Apple);
        item.place(1.5, -2.0);
        assert_eq!(item.position(), Vec3::new(1.5, 0.28, -2.0));
        assert!(!item.is_visible());

        item.reveal();
        assert!(item.is_visible());

        item.conceal();
        item.park_offscreen();
        assert!(!item.is_visible());
        assert_eq!(item.position(), PARKING_POSITION);
    }

    #[test]
    fn kinds_deserialize_from_snake_case() {
        #[derive(Deserialize)]
        struct Wrapper {
            kind: FoodKind,
        }
        let parsed: Wrapper = toml::from_str("kind = \"chicken\"").expect("valid kind");
        assert_eq!(parsed.kind, FoodKind::Chicken);
    }
}
