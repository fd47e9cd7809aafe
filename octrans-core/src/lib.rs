//! Trapezoidal direct-collocation transcription from a continuous-time
//! optimal control problem ([`Ocp`]) to a finite nonlinear program, plus
//! the supporting mesh, flat-vector view, iterate, and diagnostics
//! utilities.
//!
//! The typical flow is: implement [`Ocp`] for your problem, build a
//! [`Transcription`] with a [`TranscriptionConfig`], use
//! [`Transcription::construct_iterate`]/[`Transcription::deconstruct_iterate`]
//! to move between an [`Iterate`] and the flat NLP vector, and hand an
//! [`NlpBridge`] to your NLP solver driver.

mod bridge;
mod config;
mod diagnostics;
mod error;
mod iterate;
mod mesh;
mod ocp;
mod scalar;
mod transcription;
mod views;

pub use bridge::NlpBridge;
pub use config::{TranscriptionConfig, TranscriptionConfigBuilder};
pub use diagnostics::print_constraint_values;
pub use error::{Result, TranscriptionError};
pub use iterate::{construct_iterate, deconstruct_iterate, Iterate};
pub use mesh::{quadrature_weights, uniform_mesh};
pub use ocp::{Bounds, MeshPointInput, Ocp, OcpMetadata};
pub use scalar::Scalar;
pub use transcription::Transcription;
pub use views::{
    controls_view, controls_view_mut, defects_view, defects_view_mut, path_constraints_view,
    path_constraints_view_mut, states_view, states_view_mut, NUM_TIME_VARIABLES,
};
