use rand::Rng;

/// Scalar type for physics calculations (f64 for precision)
pub type Scalar = f64;

/// 3D vector type for positions, velocities, and forces
pub type Vector = bevy::math::DVec3;

/// Draws a vector whose three components are each uniform in `[min, max)`.
///
/// The same bounds are applied to every axis.
pub fn random_vector<R: Rng + ?Sized>(rng: &mut R, min: Scalar, max: Scalar) -> Vector {
    let span = max - min;
    Vector::new(
        rng.random::<Scalar>() * span + min,
        rng.random::<Scalar>() * span + min,
        rng.random::<Scalar>() * span + min,
    )
}

/// Radius of a sphere whose volume equals the combined volume of two spheres.
///
/// `(a³ + b³)^(1/3)`
#[inline]
pub fn volume_equivalent_radius(a: Scalar, b: Scalar) -> Scalar {
    (a.powi(3) + b.powi(3)).cbrt()
}
