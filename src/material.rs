use crate::{
    camera::Float,
    ray::{HitRecord, Ray},
    vec3::{Color, Vec3},
    vec3_ext::Vec3Ext,
};
use enum_dispatch::enum_dispatch;
use rand::{Rng, RngCore};

#[enum_dispatch]
pub trait Scatter: Send + Sync {
    /// Returns the attenuation and the continuing ray, or `None` if the ray is absorbed.
    fn scatter(
        &self,
        ray_in: &Ray,
        hit: &HitRecord,
        rng: &mut dyn RngCore,
    ) -> Option<(Color, Ray)>;
}

#[enum_dispatch(Scatter)]
#[derive(Clone, Debug)]
pub enum Material {
    Lambertian,
    Metal,
    Dielectric,
}

/// Matte surface scattering around the normal (cosine weighted)
#[derive(Clone, Copy, Debug)]
pub struct Lambertian {
    pub albedo: Color,
}

impl Lambertian {
    pub fn new(albedo: Color) -> Self {
        Lambertian { albedo }
    }
}

impl Scatter for Lambertian {
    fn scatter(
        &self,
        _ray_in: &Ray,
        hit: &HitRecord,
        rng: &mut dyn RngCore,
    ) -> Option<(Color, Ray)> {
        let mut scatter_dir = hit.normal + Vec3::random_unit(rng);
        // Random vector nearly opposite the normal would give a zero direction
        if scatter_dir.near_zero() {
            scatter_dir = hit.normal;
        }
        Some((self.albedo, Ray::new(hit.point, scatter_dir)))
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Metal {
    pub albedo: Color,
    /// Radius of the sphere the reflection is jittered within, 0 is a perfect mirror
    pub fuzz: Float,
}

impl Metal {
    /// `fuzz` is clamped to [0, 1]
    pub fn new(albedo: Color, fuzz: Float) -> Self {
        Metal {
            albedo,
            fuzz: fuzz.clamp(0.0, 1.0),
        }
    }
}

impl Scatter for Metal {
    fn scatter(
        &self,
        ray_in: &Ray,
        hit: &HitRecord,
        rng: &mut dyn RngCore,
    ) -> Option<(Color, Ray)> {
        let reflected = ray_in.direction.reflect(hit.normal).normalized()
            + Vec3::random_unit(rng) * self.fuzz;
        let scattered = Ray::new(hit.point, reflected);
        // Fuzz can push the reflection below the surface, absorb those
        if scattered.direction.dot(hit.normal) > 0.0 {
            Some((self.albedo, scattered))
        } else {
            None
        }
    }
}

/// Clear glass-like material that always refracts or reflects, never absorbs
#[derive(Clone, Copy, Debug)]
pub struct Dielectric {
    /// Refractive index in vacuum or air, or the ratio of the material's
    /// refractive index over the refractive index of the enclosing media
    pub refractive_index: Float,
}

impl Dielectric {
    pub fn new(refractive_index: Float) -> Self {
        Dielectric { refractive_index }
    }
}

impl Scatter for Dielectric {
    fn scatter(
        &self,
        ray_in: &Ray,
        hit: &HitRecord,
        rng: &mut dyn RngCore,
    ) -> Option<(Color, Ray)> {
        let ri = if hit.is_front_face {
            1.0 / self.refractive_index
        } else {
            self.refractive_index
        };

        let incoming_direction = ray_in.direction.normalized();

        let cos_theta = (-incoming_direction).dot(hit.normal).min(1.0);
        let sin_theta = (1.0 - cos_theta * cos_theta).sqrt(); // sin^2(x) + cos^2(x) = 1
        let cannot_refract = ri * sin_theta > 1.0;

        let direction = if cannot_refract || reflectance(cos_theta, ri) > rng.gen::<Float>() {
            incoming_direction.reflect(hit.normal)
        } else {
            incoming_direction.refract(hit.normal, ri)
        };
        Some((Color::ONE, Ray::new(hit.point, direction)))
    }
}

/// Returns Schlick's approximation for reflectance at a given angle.
pub fn reflectance(cosine: Float, refractive_index: Float) -> Float {
    let r0 = (1.0 - refractive_index) / (1.0 + refractive_index);
    let r0 = r0 * r0;
    r0 + (1.0 - r0) * (1.0 - cosine).powi(5)
}
