// Copyright 2025 the Canvas Guides Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rotation capability of the drawing surface.

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use kurbo::Affine;
use log::debug;

use crate::surface::Canvas;

/// How rotated labels are drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RotationBackend {
    /// The surface rotates around the draw origin itself.
    Native,
    /// Rotation is emulated with an explicit transform matrix.
    #[default]
    Emulated,
}

/// The probed capabilities of the drawing surface.
///
/// Built once (usually by [`RenderEnvironment::probe`]) and then passed to
/// every placement computation. The backend selects which offset formula a
/// rotated label uses; labels are rotated either way.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderEnvironment {
    backend: RotationBackend,
}

impl RenderEnvironment {
    /// An environment using `backend`.
    pub const fn new(backend: RotationBackend) -> Self {
        Self { backend }
    }

    /// An environment with native rotation.
    pub const fn native() -> Self {
        Self::new(RotationBackend::Native)
    }

    /// An environment with emulated rotation.
    pub const fn emulated() -> Self {
        Self::new(RotationBackend::Emulated)
    }

    /// Asks `canvas` whether it rotates natively.
    pub fn probe<C: Canvas + ?Sized>(canvas: &C) -> Self {
        let env = if canvas.supports_native_rotation() {
            Self::native()
        } else {
            Self::emulated()
        };
        debug!("probed rotation backend: {:?}", env.backend);
        env
    }

    /// The rotation backend.
    pub fn backend(&self) -> RotationBackend {
        self.backend
    }

    /// Whether the surface rotates natively.
    pub fn native_rotation_supported(&self) -> bool {
        self.backend == RotationBackend::Native
    }

    /// Rotates `canvas` for a label at `angle_degrees`.
    ///
    /// Label angles are counter-clockwise on screen, so the surface is turned
    /// by the negated angle.
    pub fn apply_rotation<C: Canvas + ?Sized>(&self, canvas: &mut C, angle_degrees: f64) {
        let theta = -angle_degrees.to_radians();
        match self.backend {
            RotationBackend::Native => canvas.rotate(theta),
            RotationBackend::Emulated => canvas.transform(rotation_matrix(theta)),
        }
    }
}

/// The matrix `[cos, -sin; sin, cos]` an emulated surface is driven with.
pub fn rotation_matrix(radians: f64) -> Affine {
    let (sin, cos) = (radians.sin(), radians.cos());
    Affine::new([cos, sin, -sin, cos, 0.0, 0.0])
}
