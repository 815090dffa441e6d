use crate::{
    camera::Float,
    interval::Interval,
    material::Material,
    ray::{HitRecord, Ray},
    vec3::Point3,
};
use std::sync::Arc;

pub trait Hit: Send + Sync {
    /// Returns the hit nearest along the ray whose `t` lies strictly inside `range`.
    fn hit(&self, ray: &Ray, range: &Interval) -> Option<HitRecord<'_>>;
}

/// Flat list of objects, probed with a linear scan
#[derive(Default)]
pub struct Scene {
    objects: Vec<Box<dyn Hit>>,
}

impl Scene {
    pub fn new() -> Self {
        Scene::default()
    }

    pub fn add(&mut self, object: impl Hit + 'static) {
        self.objects.push(Box::new(object));
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl<H: Hit + 'static> FromIterator<H> for Scene {
    fn from_iter<I: IntoIterator<Item = H>>(iter: I) -> Self {
        let mut scene = Scene::new();
        for object in iter {
            scene.add(object);
        }
        scene
    }
}

impl<H: Hit + 'static> Extend<H> for Scene {
    fn extend<I: IntoIterator<Item = H>>(&mut self, iter: I) {
        for object in iter {
            self.add(object);
        }
    }
}

impl Hit for Scene {
    /// Returns nearest hit to camera for the given ray within the given view range
    fn hit(&self, ray: &Ray, range: &Interval) -> Option<HitRecord<'_>> {
        // Shrink the search range as hits come in so obscured objects are rejected early.
        // Equal distances keep the earlier object since the range bound is exclusive.
        let mut nearest_hit_dist = range.max;
        let mut nearest_hit = None;

        for obj in self.objects.iter() {
            if let Some(hit) = obj.hit(ray, &range.with_max(nearest_hit_dist)) {
                nearest_hit_dist = hit.t;
                nearest_hit = Some(hit);
            }
        }

        nearest_hit
    }
}

#[derive(Clone, Debug)]
pub struct Sphere {
    pub center: Point3,
    pub radius: Float,
    pub material: Arc<Material>,
}

impl Sphere {
    /// Negative radii are clamped to zero. A sphere with zero radius is never hit.
    pub fn new(center: Point3, radius: Float, material: Arc<Material>) -> Self {
        Sphere {
            center,
            radius: radius.max(0.0),
            material,
        }
    }
}

impl Hit for Sphere {
    fn hit(&self, ray: &Ray, range: &Interval) -> Option<HitRecord<'_>> {
        // A ray through the center of a point sphere would get a 0/0 normal
        if self.radius <= 0.0 {
            return None;
        }
        let oc = self.center - ray.origin;
        let a = ray.direction.length_squared();
        let h = ray.direction.dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = h * h - a * c;
        if discriminant < 0.0 {
            return None; // no point hit on the sphere
        }

        let sqrt_disc = discriminant.sqrt();
        // Find either root (hit point) in range
        let mut t = (h - sqrt_disc) / a; // near root
        if !range.surrounds(t) {
            t = (h + sqrt_disc) / a; // far root if near is out of range
            if !range.surrounds(t) {
                return None;
            }
        }

        let point = ray.at(t);
        let outward_normal = (point - self.center) / self.radius;
        Some(HitRecord::with_face_normal(
            ray,
            point,
            outward_normal,
            t,
            &self.material,
        ))
    }
}
