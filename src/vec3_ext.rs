use crate::{camera::Float, vec3::Vec3};
use rand::distributions::{Distribution, Uniform};
use rand::Rng;

/// Random sampling helpers for `Vec3`.
///
/// The rejection samplers redraw until a candidate lands inside the target shape.
/// That takes under two draws on average but has no worst-case bound.
pub trait Vec3Ext {
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self;
    fn random_range<R: Rng + ?Sized>(rng: &mut R, min: Float, max: Float) -> Self;
    fn random_in_unit_sphere<R: Rng + ?Sized>(rng: &mut R) -> Self;
    fn random_unit<R: Rng + ?Sized>(rng: &mut R) -> Self;
    fn random_in_unit_disc<R: Rng + ?Sized>(rng: &mut R) -> Self;
    fn random_on_hemisphere<R: Rng + ?Sized>(rng: &mut R, normal: Vec3) -> Self;
}

impl Vec3Ext for Vec3 {
    /// Components drawn uniformly from [0, 1)
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::random_range(rng, 0.0, 1.0)
    }

    /// Components drawn uniformly from [min, max). An empty range gives `min` in every component.
    fn random_range<R: Rng + ?Sized>(rng: &mut R, min: Float, max: Float) -> Self {
        if max <= min {
            return Vec3::new(min, min, min);
        }
        let range = Uniform::from(min..max);
        Vec3::new(range.sample(rng), range.sample(rng), range.sample(rng))
    }

    fn random_in_unit_sphere<R: Rng + ?Sized>(rng: &mut R) -> Self {
        loop {
            let p = Self::random_range(rng, -1.0, 1.0);
            if p.length_squared() < 1.0 {
                return p;
            }
        }
    }

    fn random_unit<R: Rng + ?Sized>(rng: &mut R) -> Self {
        loop {
            let p = Self::random_in_unit_sphere(rng);
            // Points this close to the origin lose precision when normalized
            if p.length_squared() > 1e-160 {
                return p.normalized();
            }
        }
    }

    /// Returns random point in the x-y unit disc
    fn random_in_unit_disc<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let range = Uniform::from(-1.0..1.0);
        loop {
            let p = Vec3::new(range.sample(rng), range.sample(rng), 0.0);
            if p.length_squared() < 1.0 {
                return p;
            }
        }
    }

    fn random_on_hemisphere<R: Rng + ?Sized>(rng: &mut R, normal: Vec3) -> Vec3 {
        let unit_vector = Vec3::random_unit(rng);
        if unit_vector.dot(normal) > 0.0 {
            return unit_vector; // same side as the normal
        }
        -unit_vector
    }
}
