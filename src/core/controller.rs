use glam::{Mat4, Quat, Vec2, Vec3};

use crate::config::{TrackballConfig, DEFAULT_RADIUS};
use crate::math::{drag_rotation, rotation_matrix, transformation_matrix, translation_matrix};
use crate::traits::{Button, CameraController};
use crate::types::{TrackballUniform, ViewState};

/// Drag driven by the primary button. Rotating and panning share that button
/// and are mutually exclusive; dollying runs on the secondary button and is
/// tracked separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragMode {
    #[default]
    Idle,
    Rotating,
    Panning,
}

/// Arcball examiner controller.
///
/// Turns press/move/release events into an accumulated orientation and
/// translation. Pointer coordinates must already be in the normalized
/// viewport range (roughly `[-1, 1]` on both axes); the hemisphere radius
/// of 0.8 is expressed in those units and no pixel conversion happens here.
///
/// Naming note: the secondary-button "dolly" drag translates in the view
/// plane (X/Y), while the modifier+primary "pan" drag moves along depth (Z).
/// The names are historical and the mapping is intentional.
#[derive(Debug, Clone)]
pub struct TrackballController {
    radius: f32,
    hemisphere_sign: f32,
    rotation: Quat,
    translation: Vec3,
    default_translation: Vec3,
    mode: DragMode,
    dollying: bool,
    last: Vec2,
    pan_anchor: Vec2,
    dolly_anchor: Vec2,
}

impl TrackballController {
    pub fn new(gaze_positive_z: bool) -> Self {
        Self::with_default_translation(gaze_positive_z, Vec3::ZERO)
    }

    /// `default_translation` is what `reset` returns to.
    pub fn with_default_translation(gaze_positive_z: bool, default_translation: Vec3) -> Self {
        let mut controller = Self {
            radius: DEFAULT_RADIUS,
            hemisphere_sign: if gaze_positive_z { -1.0 } else { 1.0 },
            rotation: Quat::IDENTITY,
            translation: default_translation,
            default_translation,
            mode: DragMode::Idle,
            dollying: false,
            last: Vec2::ZERO,
            pan_anchor: Vec2::ZERO,
            dolly_anchor: Vec2::ZERO,
        };
        controller.reset();
        controller
    }

    pub fn from_config(config: &TrackballConfig) -> Self {
        Self::with_default_translation(config.gaze_positive_z, config.default_translation())
    }

    /// Back to identity rotation and the default translation, with no drag active.
    pub fn reset(&mut self) {
        self.mode = DragMode::Idle;
        self.dollying = false;
        self.rotation = Quat::IDENTITY;
        self.translation = self.default_translation;
        self.last = Vec2::ZERO;
        self.pan_anchor = Vec2::ZERO;
        self.dolly_anchor = Vec2::ZERO;
    }

    /// Handles a button press or release at `(x, y)`.
    ///
    /// Primary starts a rotation, or a pan when `modifier` is held; releasing
    /// it ends either. Secondary starts and ends a dolly. Other buttons are
    /// ignored.
    pub fn click(&mut self, pressed: bool, button: Button, modifier: bool, x: f32, y: f32) {
        let at = Vec2::new(x, y);
        match (button, pressed) {
            (Button::Primary, true) if modifier => {
                self.mode = DragMode::Panning;
                self.pan_anchor = at;
                log::debug!("pan started at {at}");
            }
            (Button::Primary, true) => {
                self.mode = DragMode::Rotating;
                self.last = at;
                log::debug!("rotation started at {at}");
            }
            (Button::Primary, false) => {
                if self.mode != DragMode::Idle {
                    log::debug!("{:?} ended at {at}", self.mode);
                }
                self.mode = DragMode::Idle;
            }
            (Button::Secondary, true) => {
                self.dollying = true;
                self.dolly_anchor = at;
                log::debug!("dolly started at {at}");
            }
            (Button::Secondary, false) => {
                self.dollying = false;
            }
            (Button::Other(id), _) => {
                log::trace!("ignoring button {id}");
            }
        }
    }

    /// `click` with a raw button id (1 primary, 2 secondary).
    pub fn click_id(&mut self, pressed: bool, button: u32, modifier: bool, x: f32, y: f32) {
        self.click(pressed, Button::from_id(button), modifier, x, y);
    }

    /// Applies pointer motion to every active drag.
    pub fn move_to(&mut self, x: f32, y: f32) {
        let at = Vec2::new(x, y);

        if self.mode == DragMode::Rotating {
            self.rotation = drag_rotation(self.rotation, self.last, at, self.radius, self.hemisphere_sign);
            self.last = at;
        }

        if self.dollying {
            let delta = at - self.dolly_anchor;
            self.translation.x += delta.x;
            self.translation.y += delta.y;
            self.dolly_anchor = at;
        }

        if self.mode == DragMode::Panning {
            // Only vertical motion counts, and it moves along depth.
            self.translation.z -= at.y - self.pan_anchor.y;
            self.pan_anchor = at;
        }
    }

    /// Cancels any drag in progress, keeping rotation, translation and anchors.
    pub fn abort(&mut self) {
        if self.active() {
            log::debug!("drag aborted");
        }
        self.mode = DragMode::Idle;
        self.dollying = false;
    }

    pub fn active(&self) -> bool {
        self.mode != DragMode::Idle || self.dollying
    }

    pub fn mode(&self) -> DragMode {
        self.mode
    }

    pub fn is_rotating(&self) -> bool {
        self.mode == DragMode::Rotating
    }

    pub fn is_panning(&self) -> bool {
        self.mode == DragMode::Panning
    }

    pub fn is_dollying(&self) -> bool {
        self.dollying
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// -1 when the viewer gazes along +Z, otherwise +1.
    pub fn hemisphere_sign(&self) -> f32 {
        self.hemisphere_sign
    }

    pub fn default_translation(&self) -> Vec3 {
        self.default_translation
    }

    pub fn rotation_matrix(&self) -> Mat4 {
        rotation_matrix(self.rotation)
    }

    pub fn translation_matrix(&self) -> Mat4 {
        translation_matrix(self.translation)
    }

    pub fn transformation_matrix(&self) -> Mat4 {
        transformation_matrix(self.rotation, self.translation)
    }

    pub fn rotation(&self) -> Quat {
        self.rotation
    }

    /// Stored as given; the next rotation drag renormalizes.
    pub fn set_rotation(&mut self, rotation: Quat) {
        self.rotation = rotation;
    }

    /// Rotation as `[w, x, y, z]`.
    pub fn rotation_wxyz(&self) -> [f32; 4] {
        let q = self.rotation;
        [q.w, q.x, q.y, q.z]
    }

    pub fn set_rotation_wxyz(&mut self, [w, x, y, z]: [f32; 4]) {
        self.rotation = Quat::from_xyzw(x, y, z, w);
    }

    pub fn translation(&self) -> Vec3 {
        self.translation
    }

    pub fn set_translation(&mut self, translation: Vec3) {
        self.translation = translation;
    }

    pub fn snapshot(&self) -> ViewState {
        ViewState {
            rotation: self.rotation_wxyz(),
            translation: self.translation.to_array(),
        }
    }

    /// Restores rotation and translation; the drag state is left alone.
    pub fn restore(&mut self, state: &ViewState) {
        self.set_rotation_wxyz(state.rotation);
        self.translation = Vec3::from_array(state.translation);
    }

    pub fn to_uniform(&self) -> TrackballUniform {
        TrackballUniform {
            transform: self.transformation_matrix().to_cols_array_2d(),
            rotation: self.rotation_wxyz(),
            translation: self.translation.to_array(),
            active: if self.active() { 1.0 } else { 0.0 },
        }
    }
}

impl Default for TrackballController {
    fn default() -> Self {
        Self::new(false)
    }
}

impl CameraController for TrackballController {
    fn rotation(&self) -> Quat {
        self.rotation
    }

    fn translation(&self) -> Vec3 {
        self.translation
    }

    fn view_matrix(&self) -> Mat4 {
        self.transformation_matrix()
    }

    fn is_active(&self) -> bool {
        self.active()
    }
}
