pub mod dynamics;
pub mod kinematics;
