// @generated

pub mod mat;
