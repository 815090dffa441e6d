use crate::{
    camera::Float,
    material::Material,
    vec3::{Point3, Vec3},
};

/// Direction need not be unit length, but must not be zero.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray {
    pub origin: Point3,
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Point3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    pub fn at(&self, t: Float) -> Point3 {
        self.origin + self.direction * t
    }
}

/// A successful intersection. Borrows the material of the object that was hit.
#[derive(Clone, Debug)]
pub struct HitRecord<'a> {
    pub point: Point3,
    /// Unit length, always pointing against the incoming ray
    pub normal: Vec3,
    pub material: &'a Material,
    pub t: Float,
    pub is_front_face: bool,
}

impl<'a> HitRecord<'a> {
    /// Builds a record from the geometric outward normal, flipping it to face the ray.
    pub fn with_face_normal(
        ray: &Ray,
        point: Point3,
        outward_normal: Vec3,
        t: Float,
        material: &'a Material,
    ) -> Self {
        let is_front_face = Self::is_front_face(ray, outward_normal);
        let normal = if is_front_face {
            outward_normal
        } else {
            -outward_normal
        };
        HitRecord {
            point,
            normal,
            material,
            t,
            is_front_face,
        }
    }

    pub fn is_front_face(ray: &Ray, outward_normal: Vec3) -> bool {
        ray.direction.dot(outward_normal) < 0.0
    }
}
