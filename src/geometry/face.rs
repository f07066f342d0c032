//! Cube face identification: signed axis faces and the named image slots.

use serde::{Deserialize, Serialize};

/// One of the six signed axis faces a direction can exit the cube through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum AxisFace {
    /// +X face
    PosX = 0,
    /// -X face
    NegX = 1,
    /// +Y face
    PosY = 2,
    /// -Y face
    NegY = 3,
    /// +Z face
    PosZ = 4,
    /// -Z face
    NegZ = 5,
}

impl AxisFace {
    /// Returns all six axis faces in order.
    pub const fn all() -> [AxisFace; 6] {
        [
            AxisFace::PosX,
            AxisFace::NegX,
            AxisFace::PosY,
            AxisFace::NegY,
            AxisFace::PosZ,
            AxisFace::NegZ,
        ]
    }

    /// Returns the face index (0-5).
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the sign of the fixed coordinate on this face (+1 or -1).
    pub const fn sign(self) -> f64 {
        match self {
            AxisFace::PosX | AxisFace::PosY | AxisFace::PosZ => 1.0,
            AxisFace::NegX | AxisFace::NegY | AxisFace::NegZ => -1.0,
        }
    }

    /// Returns the image slot holding the pixels for this face.
    ///
    /// X+ is front, X- back, Y+ right, Y- left, Z+ up, Z- down.
    pub const fn slot(self) -> FaceSlot {
        match self {
            AxisFace::PosX => FaceSlot::Front,
            AxisFace::NegX => FaceSlot::Back,
            AxisFace::PosY => FaceSlot::Right,
            AxisFace::NegY => FaceSlot::Left,
            AxisFace::PosZ => FaceSlot::Up,
            AxisFace::NegZ => FaceSlot::Down,
        }
    }

    /// Returns a short label for the face (e.g., "X+", "Z-").
    pub const fn label(self) -> &'static str {
        match self {
            AxisFace::PosX => "X+",
            AxisFace::NegX => "X-",
            AxisFace::PosY => "Y+",
            AxisFace::NegY => "Y-",
            AxisFace::PosZ => "Z+",
            AxisFace::NegZ => "Z-",
        }
    }
}

/// Named identity of a source face image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum FaceSlot {
    Up = 0,
    Down = 1,
    Left = 2,
    Right = 3,
    Front = 4,
    Back = 5,
}

impl FaceSlot {
    /// Returns all six slots in storage order.
    pub const fn all() -> [FaceSlot; 6] {
        [
            FaceSlot::Up,
            FaceSlot::Down,
            FaceSlot::Left,
            FaceSlot::Right,
            FaceSlot::Front,
            FaceSlot::Back,
        ]
    }

    /// Returns the slot index (0-5).
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Creates a slot from an index (0-5).
    pub const fn from_index(index: usize) -> Option<FaceSlot> {
        match index {
            0 => Some(FaceSlot::Up),
            1 => Some(FaceSlot::Down),
            2 => Some(FaceSlot::Left),
            3 => Some(FaceSlot::Right),
            4 => Some(FaceSlot::Front),
            5 => Some(FaceSlot::Back),
            _ => None,
        }
    }

    /// Returns the lowercase name used for file stems ("up", "front", ...).
    pub const fn name(self) -> &'static str {
        match self {
            FaceSlot::Up => "up",
            FaceSlot::Down => "down",
            FaceSlot::Left => "left",
            FaceSlot::Right => "right",
            FaceSlot::Front => "front",
            FaceSlot::Back => "back",
        }
    }

    /// Returns the axis face whose pixels live in this slot.
    pub const fn axis_face(self) -> AxisFace {
        match self {
            FaceSlot::Front => AxisFace::PosX,
            FaceSlot::Back => AxisFace::NegX,
            FaceSlot::Right => AxisFace::PosY,
            FaceSlot::Left => AxisFace::NegY,
            FaceSlot::Up => AxisFace::PosZ,
            FaceSlot::Down => AxisFace::NegZ,
        }
    }
}

impl std::fmt::Display for FaceSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
