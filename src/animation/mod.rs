pub mod anim;
pub mod apply;
pub mod ease;
pub mod keyframe;
pub mod progress;
pub mod value;
