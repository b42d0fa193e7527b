//! Viewport and transform mode state machine types.

/// Rendering/selection mode of the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewportMode {
    #[default]
    Object,
    Edit,
}

impl ViewportMode {
    pub fn toggled(self) -> Self {
        match self {
            ViewportMode::Object => ViewportMode::Edit,
            ViewportMode::Edit => ViewportMode::Object,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ViewportMode::Object => "Object",
            ViewportMode::Edit => "Edit",
        }
    }
}

/// Active transformation applied to the selected object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransformMode {
    #[default]
    None,
    Grab,
    Scale,
    Rotate,
    Extrude,
    Fill,
    Merge,
}

/// Category of a transform mode: rigid transforms move the whole mesh,
/// topology modes edit its face data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeKind {
    None,
    Rigid,
    Topology,
}

impl TransformMode {
    pub fn kind(self) -> ModeKind {
        match self {
            TransformMode::None => ModeKind::None,
            TransformMode::Grab | TransformMode::Scale | TransformMode::Rotate => ModeKind::Rigid,
            TransformMode::Extrude | TransformMode::Fill | TransformMode::Merge => {
                ModeKind::Topology
            }
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TransformMode::None => "None",
            TransformMode::Grab => "Grab",
            TransformMode::Scale => "Scale",
            TransformMode::Rotate => "Rotate",
            TransformMode::Extrude => "Extrude",
            TransformMode::Fill => "Fill",
            TransformMode::Merge => "Merge",
        }
    }
}

/// Axis the current gesture is constrained to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AxisConstraint {
    #[default]
    None,
    X,
    Y,
    Z,
}

impl AxisConstraint {
    pub fn label(self) -> &'static str {
        match self {
            AxisConstraint::None => "",
            AxisConstraint::X => "X",
            AxisConstraint::Y => "Y",
            AxisConstraint::Z => "Z",
        }
    }
}

/// The current edit gesture: a transform mode plus its axis constraint,
/// held as one unit of state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TransformGesture {
    pub mode: TransformMode,
    pub axis: AxisConstraint,
}

impl TransformGesture {
    pub fn is_active(self) -> bool {
        self.mode != TransformMode::None
    }

    /// Return to the idle gesture (no mode, no constraint).
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
