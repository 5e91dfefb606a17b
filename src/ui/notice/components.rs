// src/ui/notice/components.rs
//
// Components and resources for the notice panel.

use bevy::prelude::*;

/// A transient message panel that fades out and despawns.
#[derive(Component, Debug)]
pub struct NoticePanel {
    lifetime: Timer,

    /// Seconds at the end of the lifetime spent fading out.
    fade_duration: f32,
}

impl NoticePanel {
    pub fn new(lifetime_secs: f32, fade_duration: f32) -> Self {
        Self {
            lifetime: Timer::from_seconds(lifetime_secs, TimerMode::Once),
            fade_duration,
        }
    }

    pub fn tick(&mut self, delta: std::time::Duration) {
        self.lifetime.tick(delta);
    }

    pub fn is_finished(&self) -> bool {
        self.lifetime.is_finished()
    }

    /// 1.0 while fully visible, falling to 0.0 over the final fade.
    pub fn fade_alpha(&self) -> f32 {
        let remaining = self.lifetime.remaining_secs();
        if self.fade_duration > 0.0 && remaining < self.fade_duration {
            remaining / self.fade_duration
        } else {
            1.0
        }
    }
}

/// Only one notice is on screen at a time.
#[derive(Resource, Debug, Default)]
pub struct NoticeTracker {
    pub active_panel: Option<Entity>,
}

#[derive(Resource, Debug)]
pub struct NoticeSettings {
    pub lifetime_seconds: f32,
    pub fade_seconds: f32,
    pub top_offset: f32,
    pub font_size: f32,
}

impl Default for NoticeSettings {
    fn default() -> Self {
        Self {
            lifetime_seconds: 3.0,
            fade_seconds: 1.0,
            top_offset: 60.0,
            font_size: 22.0,
        }
    }
}
