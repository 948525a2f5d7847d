use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("path constraint '{constraint}' has no bones")]
    EmptyBoneChain { constraint: String },

    #[error(
        "unknown bone {bone} referenced by path constraint '{constraint}' ({bone_count} bones available)"
    )]
    UnknownBone {
        constraint: String,
        bone: usize,
        bone_count: usize,
    },

    #[error(
        "unknown target slot {slot} referenced by path constraint '{constraint}' ({slot_count} slots available)"
    )]
    UnknownTargetSlot {
        constraint: String,
        slot: usize,
        slot_count: usize,
    },

    #[error("invalid value: {message}")]
    InvalidValue { message: String },
}
