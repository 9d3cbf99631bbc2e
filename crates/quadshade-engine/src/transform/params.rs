use crate::coords::{ClipPosition, IVec2, Vec2};

/// Which way +Y points in the input (object/scene) coordinate convention.
///
/// Clip space is always +Y up, so `Down` inputs are negated after
/// re-centering and `Up` inputs pass through.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum YAxis {
    /// Top-left origin, +Y down (image / window pixel convention).
    #[default]
    Down,
    /// Bottom-left origin, +Y up.
    Up,
}

impl YAxis {
    /// Multiplier applied to the re-centered Y component.
    #[inline]
    pub const fn sign(self) -> f32 {
        match self {
            YAxis::Down => -1.0,
            YAxis::Up => 1.0,
        }
    }

    /// Converts a re-centered Y value to clip-space Y. Self-inverse.
    #[inline]
    pub fn flip(self, y: f32) -> f32 {
        y * self.sign()
    }
}

/// Grouped parameters of the coordinate transform stage.
///
/// Every field has an identity default, so a host only sets what it uses.
/// The stage applies them in one fixed order:
///
/// 1. `translated = position + (offset + delta - viewport_pos) - scene_pos`
/// 2. `normalized = translated / screen_dims * scale`
/// 3. `centered = (normalized - 0.5) * 2`
/// 4. `y = y_axis.flip(centered.y)`
/// 5. clip = `(centered.x, y, 0, 1)`
///
/// `offset` and `delta` place the drawn object, `scene_pos` and
/// `viewport_pos` place the camera: they name the point shown at the
/// top-left of the screen. Zero `screen_dims` or `scale` are not rejected and
/// produce inf/NaN positions.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TransformParams {
    /// Viewport size in pixels.
    pub screen_dims: Vec2,
    /// Camera position in scene pixels.
    pub scene_pos: Vec2,
    /// Camera position in whole pixels; combined with `scene_pos`.
    pub viewport_pos: IVec2,
    /// Whole-pixel position of the drawn object.
    pub offset: IVec2,
    /// Whole-pixel adjustment on top of `offset`, e.g. an in-progress drag.
    pub delta: IVec2,
    /// Zoom factor applied after normalization.
    pub scale: f32,
    pub y_axis: YAxis,
}

impl Default for TransformParams {
    fn default() -> Self {
        Self {
            screen_dims: Vec2::new(100.0, 100.0),
            scene_pos: Vec2::zero(),
            viewport_pos: IVec2::zero(),
            offset: IVec2::zero(),
            delta: IVec2::zero(),
            scale: 1.0,
            y_axis: YAxis::Down,
        }
    }
}

impl TransformParams {
    pub fn new(screen_dims: Vec2) -> Self {
        Self {
            screen_dims,
            ..Self::default()
        }
    }

    pub fn with_scene_pos(mut self, scene_pos: Vec2) -> Self {
        self.scene_pos = scene_pos;
        self
    }

    pub fn with_viewport_pos(mut self, viewport_pos: IVec2) -> Self {
        self.viewport_pos = viewport_pos;
        self
    }

    pub fn with_offset(mut self, offset: IVec2) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_delta(mut self, delta: IVec2) -> Self {
        self.delta = delta;
        self
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_y_axis(mut self, y_axis: YAxis) -> Self {
        self.y_axis = y_axis;
        self
    }

    /// Net translation added to object positions (step 1).
    #[inline]
    pub fn translation(&self) -> Vec2 {
        Vec2::from(self.offset + self.delta - self.viewport_pos) - self.scene_pos
    }

    /// Maps an object-space position to clip space.
    pub fn to_clip(&self, position: Vec2) -> ClipPosition {
        let translated = position + self.translation();
        let normalized = translated / self.screen_dims * self.scale;
        let centered = (normalized - Vec2::splat(0.5)) * 2.0;
        ClipPosition::from_ndc(Vec2::new(centered.x, self.y_axis.flip(centered.y)))
    }

    /// Maps an object-space position to screen pixels (same origin and Y
    /// direction as the input convention).
    #[inline]
    pub fn to_screen(&self, position: Vec2) -> Vec2 {
        (position + self.translation()) * self.scale
    }

    /// Inverse of [`to_screen`](Self::to_screen), e.g. for pointer picking.
    #[inline]
    pub fn screen_to_object(&self, screen: Vec2) -> Vec2 {
        screen / self.scale - self.translation()
    }

    /// Moves the camera so the scene follows a pointer drag of `screen_delta`
    /// pixels.
    pub fn pan_by(&mut self, screen_delta: Vec2) {
        self.scene_pos = self.scene_pos - screen_delta / self.scale;
    }

    /// Steps the zoom by `steps` rungs of [`step_scale`], keeping the point
    /// under `anchor` (screen pixels) fixed on screen.
    pub fn zoom_at(&mut self, anchor: Vec2, steps: i32) {
        let new_scale = step_scale(self.scale, steps);
        if new_scale == self.scale {
            return;
        }
        self.scene_pos = self.scene_pos + anchor / self.scale - anchor / new_scale;
        log::trace!("zoom {} -> {} at {:?}", self.scale, new_scale, anchor);
        self.scale = new_scale;
    }
}

/// Moves `scale` along the zoom ladder `…, 1/3, 1/2, 1, 2, 3, …` by `steps`
/// rungs (positive zooms in).
///
/// Scales between rungs snap to the nearest rung first. Non-positive or
/// non-finite scales are returned unchanged, as is any step whose rung has
/// no positive finite `f32` scale.
pub fn step_scale(scale: f32, steps: i32) -> f32 {
    if !(scale > 0.0 && scale.is_finite()) {
        log::debug!("step_scale: ignoring invalid scale {scale}");
        return scale;
    }

    // Rung k >= 1 is scale k; rung k <= 0 is scale 1 / (2 - k).
    // Rungs are f32 and saturate at extreme scales.
    let rung = if scale < 1.0 {
        2.0 - scale.recip().round()
    } else {
        scale.round()
    };
    let rung = rung + steps as f32;

    let stepped = if rung >= 1.0 { rung } else { (2.0 - rung).recip() };
    if stepped > 0.0 && stepped.is_finite() {
        stepped
    } else {
        log::debug!("step_scale: {scale} stepped {steps} leaves the ladder");
        scale
    }
}
